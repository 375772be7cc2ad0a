/// Level → difficulty coefficients.
///
/// A step function over two-level bands.  Moving to a higher band never
/// makes the game easier: spawn floors only drop, chances and caps only grow.

use crate::entities::{GameState, MovePattern};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelDifficulty {
    /// Floor for the alien spawn interval.
    pub min_spawn_ms: f64,
    /// Chance a second alien spawns alongside the first.
    pub twin_chance: f64,
    /// Per-frame asteroid spawn chance.
    pub asteroid_chance: f64,
    pub asteroid_cap: usize,
    /// Per-frame satellite spawn chance.
    pub satellite_chance: f64,
    pub satellite_cap: usize,
}

const fn band(
    min_spawn_ms: f64,
    twin_chance: f64,
    asteroid_chance: f64,
    asteroid_cap: usize,
    satellite_chance: f64,
    satellite_cap: usize,
) -> LevelDifficulty {
    LevelDifficulty {
        min_spawn_ms,
        twin_chance,
        asteroid_chance,
        asteroid_cap,
        satellite_chance,
        satellite_cap,
    }
}

pub fn for_level(level: u32) -> LevelDifficulty {
    match level {
        0..=2 => band(520.0, 0.00, 0.005, 2, 0.0010, 1),
        3..=4 => band(480.0, 0.10, 0.008, 3, 0.0012, 1),
        5..=6 => band(420.0, 0.18, 0.012, 4, 0.0015, 1),
        7..=8 => band(360.0, 0.22, 0.016, 5, 0.0018, 2),
        9..=10 => band(300.0, 0.26, 0.020, 6, 0.0020, 2),
        11..=12 => band(260.0, 0.30, 0.024, 7, 0.0022, 2),
        _ => band(220.0, 0.34, 0.028, 8, 0.0025, 3),
    }
}

/// Write the coefficients for `state.level` into the state.
pub fn apply(state: &mut GameState) {
    let d = for_level(state.level);
    state.spawn_every_min_ms = d.min_spawn_ms;
    state.twin_chance = d.twin_chance;
    state.asteroid_chance = d.asteroid_chance;
    state.asteroid_cap = d.asteroid_cap;
    state.satellite_chance = d.satellite_chance;
    state.satellite_cap = d.satellite_cap;
}

/// Chance that a spawn tick also brings a special alien.
pub fn special_chance(level: u32) -> f64 {
    (0.02 + 0.01 * level.saturating_sub(1) as f64).min(0.12)
}

/// Shootable share of freshly spawned regular aliens.
pub fn alien_shoot_chance(level: u32) -> f64 {
    0.3 + 0.05 * level.saturating_sub(1) as f64
}

/// Alien types unlocked at this level.
pub fn pattern_pool(level: u32) -> &'static [MovePattern] {
    use MovePattern::*;
    match level {
        0..=1 => &[Straight, Sine],
        2 => &[Straight, Sine, Zigzag],
        _ => &[Straight, Sine, Zigzag, Drift],
    }
}

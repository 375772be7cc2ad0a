/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.
///
/// Internally a step clones the state once and then runs the per-frame
/// phases against that private copy in a fixed order.

use std::f32::consts::PI;

use rand::Rng;

use crate::constants::*;
use crate::difficulty;
use crate::entities::{
    Alien, Asteroid, Bullet, BulletOwner, Effect, EffectKind, GameEvent, GameState, GameStatus,
    InputState, MovePattern, Player, Rect, Satellite, Star,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Clamp that never panics: when `hi < lo` the lower bound wins.
fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(v))
}

/// Cap a frame's elapsed seconds so a stalled terminal doesn't teleport
/// everything on the next frame.
pub fn clamp_dt(seconds: f32) -> f32 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.min(MAX_FRAME_DT)
    } else {
        0.0
    }
}

fn random_stars(
    width: f32,
    height: f32,
    area_per_star: f32,
    radius: (f32, f32),
    speed: (f32, f32),
    rng: &mut impl Rng,
) -> Vec<Star> {
    let count = (width.max(0.0) * height.max(0.0) / area_per_star) as usize;
    (0..count)
        .map(|_| Star {
            x: rng.gen::<f32>() * width,
            y: rng.gen::<f32>() * height,
            radius: radius.0 + rng.gen::<f32>() * radius.1,
            speed: speed.0 + rng.gen::<f32>() * speed.1,
        })
        .collect()
}

fn seed_stars(state: &mut GameState, rng: &mut impl Rng) {
    state.stars = random_stars(
        state.width,
        state.height,
        STAR_AREA_PER_STAR,
        (0.2, 1.2),
        (10.0, 20.0),
        rng,
    );
    state.mini_stars = random_stars(
        state.width,
        state.height,
        MINI_STAR_AREA_PER_STAR,
        (0.2, 0.9),
        (8.0, 18.0),
        rng,
    );
}

fn player_baseline(state: &GameState) -> f32 {
    state.height - state.player.h - PLAYER_BOTTOM_GAP
}

fn clamp_player(state: &mut GameState) {
    let max_x = state.width - state.player.w - PLAYER_MARGIN;
    let max_y = player_baseline(state);
    state.player.x = clamp(state.player.x, PLAYER_MARGIN, max_x);
    state.player.y = clamp(state.player.y, PLAYER_MARGIN, max_y);
}

fn center_player(state: &mut GameState) {
    state.player.x = state.width / 2.0 - state.player.w / 2.0;
    state.player.y = player_baseline(state);
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial session for a playfield of the given size.
pub fn init_state(width: f32, height: f32, rng: &mut impl Rng) -> GameState {
    let mut state = GameState {
        player: Player {
            x: 0.0,
            y: 0.0,
            w: PLAYER_SIZE,
            h: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            double_shot: false,
        },
        bullets: Vec::new(),
        alien_bullets: Vec::new(),
        aliens: Vec::new(),
        asteroids: Vec::new(),
        satellites: Vec::new(),
        effects: Vec::new(),
        stars: Vec::new(),
        mini_stars: Vec::new(),
        events: Vec::new(),
        score: 0,
        hits: 0,
        lives: INITIAL_LIVES,
        level: 1,
        next_level_at: FIRST_LEVEL_AT,
        clock_ms: 0.0,
        last_player_shot_ms: f64::NEG_INFINITY,
        fire_cooldown_ms: INITIAL_FIRE_COOLDOWN_MS,
        spawn_timer_ms: 0.0,
        spawn_every_ms: INITIAL_SPAWN_EVERY_MS,
        special_last_seen_ms: 0.0,
        spawn_every_min_ms: 0.0,
        twin_chance: 0.0,
        asteroid_chance: 0.0,
        asteroid_cap: 0,
        satellite_chance: 0.0,
        satellite_cap: 0,
        asteroids_destroyed: 0,
        status: GameStatus::Playing,
        width,
        height,
    };
    difficulty::apply(&mut state);
    center_player(&mut state);
    seed_stars(&mut state, rng);
    state
}

/// Start over on a playfield of the same size.
pub fn reset(state: &GameState, rng: &mut impl Rng) -> GameState {
    init_state(state.width, state.height, rng)
}

/// Adopt a new playfield size: the player is re-centred and the starfield
/// re-seeded; entities keep their positions.
pub fn resize(state: &GameState, width: f32, height: f32, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.width = width;
    next.height = height;
    center_player(&mut next);
    clamp_player(&mut next);
    seed_stars(&mut next, rng);
    next
}

/// Pause ↔ resume.  A finished game stays finished.
pub fn toggle_pause(state: &GameState) -> GameState {
    let status = match state.status {
        GameStatus::Playing => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Playing,
        GameStatus::GameOver => GameStatus::GameOver,
    };
    GameState {
        status,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire from the player's nose, subject to the fire cooldown.
pub fn player_shoot(state: &GameState) -> GameState {
    let mut next = state.clone();
    fire(&mut next);
    next
}

fn fire(state: &mut GameState) -> bool {
    if state.clock_ms - state.last_player_shot_ms < state.fire_cooldown_ms {
        return false;
    }
    state.last_player_shot_ms = state.clock_ms;

    let (cx, _) = state.player.rect().center();
    let y = state.player.y - BULLET_H + 4.0;
    let offsets = if state.player.double_shot {
        vec![-DOUBLE_SHOT_OFFSET, DOUBLE_SHOT_OFFSET]
    } else {
        vec![0.0]
    };
    for offset in offsets {
        state.bullets.push(Bullet {
            x: cx + offset - BULLET_W / 2.0,
            y,
            w: BULLET_W,
            h: BULLET_H,
            speed: BULLET_SPEED,
            owner: BulletOwner::Player,
        });
    }
    state.events.push(GameEvent::PlayerShot);
    true
}

fn move_player(state: &mut GameState, input: &InputState, dt: f32) {
    state.player.x += input.dx() * state.player.speed * dt;
    state.player.y += input.dy() * state.player.speed * dt;
    clamp_player(state);
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by `dt` seconds.  All randomness comes through
/// `rng` so callers control determinism (tests use a seeded RNG).
///
/// A paused or finished session is returned unchanged apart from an empty
/// event list.
pub fn tick(state: &GameState, input: &InputState, dt: f32, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.events.clear();
    if !next.is_running() {
        return next;
    }

    let dt = clamp_dt(dt);
    next.clock_ms += dt as f64 * 1000.0;

    // ── 1–3. Player, firing, player bullets ──────────────────────────────────
    move_player(&mut next, input, dt);
    if input.fire {
        fire(&mut next);
    }
    advance_player_bullets(&mut next, dt);

    // ── 4–5. Spawning ────────────────────────────────────────────────────────
    spawn_on_timer(&mut next, dt, rng);
    spawn_hazards(&mut next, rng);

    // ── 6–8. Movement ────────────────────────────────────────────────────────
    advance_aliens(&mut next, dt, rng);
    asteroids_crush_aliens(&mut next);
    advance_alien_bullets(&mut next, dt);
    advance_asteroids(&mut next, dt);
    advance_satellites(&mut next, dt);
    advance_effects(&mut next, dt);

    // ── 9–12. Collisions ─────────────────────────────────────────────────────
    resolve_bullets_vs_aliens(&mut next);
    resolve_bullets_vs_asteroids(&mut next);
    resolve_player_damage(&mut next);
    collect_satellites(&mut next);

    // ── 13–14. Progression & background ──────────────────────────────────────
    check_level_up(&mut next);
    advance_stars(&mut next, input.dx(), dt, rng);

    next
}

fn advance_player_bullets(state: &mut GameState, dt: f32) {
    for b in state.bullets.iter_mut() {
        b.y -= b.speed * dt;
    }
    state.bullets.retain(|b| b.y + b.h >= -BULLET_PRUNE_MARGIN);
}

// ── Spawning ─────────────────────────────────────────────────────────────────

fn spawn_on_timer(state: &mut GameState, dt: f32, rng: &mut impl Rng) {
    if state.special_alive() {
        state.special_last_seen_ms = state.clock_ms;
    }

    state.spawn_timer_ms += dt as f64 * 1000.0;
    if state.spawn_timer_ms < state.spawn_every_ms {
        return;
    }
    state.spawn_timer_ms = 0.0;

    let step = if state.level >= 3 { 5.0 } else { 3.0 };
    state.spawn_every_ms = (state.spawn_every_ms - step).max(state.spawn_every_min_ms);

    if !state.special_alive() {
        let lucky = rng.gen::<f64>() < difficulty::special_chance(state.level);
        let overdue = state.clock_ms - state.special_last_seen_ms >= SPECIAL_FORCE_AFTER_MS;
        if lucky || overdue {
            spawn_special(state, rng);
            state.special_last_seen_ms = state.clock_ms;
        }
    }

    spawn_alien(state, rng);
    if rng.gen::<f64>() < state.twin_chance {
        spawn_alien(state, rng);
    }
}

fn spawn_alien(state: &mut GameState, rng: &mut impl Rng) {
    let w = ALIEN_SIZE;
    let h = ALIEN_SIZE;
    let span = (state.width - ALIEN_SPAWN_MARGIN * 2.0 - w).max(0.0);
    let x = rng.gen::<f32>() * span + ALIEN_SPAWN_MARGIN;
    let y = -h - rng.gen::<f32>() * 60.0;

    let pool = difficulty::pattern_pool(state.level);
    let pattern = pool[rng.gen_range(0..pool.len())];
    let base_speed = 60.0 + rng.gen::<f32>() * 160.0;
    let speed = base_speed * (1.0 + (state.level - 1) as f32 * ALIEN_SPEED_PER_LEVEL);
    let can_shoot = rng.gen::<f64>() < difficulty::alien_shoot_chance(state.level);

    state.aliens.push(Alien {
        x,
        y,
        w,
        h,
        speed,
        pattern,
        t: 0.0,
        anchor_x: x,
        amplitude: 30.0 + rng.gen::<f32>() * 40.0,
        dir: if rng.gen_bool(0.5) { -1.0 } else { 1.0 },
        hp: if pattern == MovePattern::Drift { 2 } else { 1 },
        can_shoot,
        last_shot_at_ms: f64::NEG_INFINITY,
        spawn_level: state.level,
    });
}

fn spawn_special(state: &mut GameState, rng: &mut impl Rng) {
    let lo = PLAYER_MARGIN + SPECIAL_SWAY;
    let span = (state.width - SPECIAL_W - 2.0 * lo).max(0.0);
    let anchor_x = lo + rng.gen::<f32>() * span;
    state.aliens.push(Alien {
        x: anchor_x,
        y: -SPECIAL_H,
        w: SPECIAL_W,
        h: SPECIAL_H,
        speed: SPECIAL_SPEED,
        pattern: MovePattern::Special,
        t: 0.0,
        anchor_x,
        amplitude: SPECIAL_SWAY,
        dir: 1.0,
        hp: SPECIAL_HP,
        can_shoot: true,
        last_shot_at_ms: f64::NEG_INFINITY,
        spawn_level: state.level,
    });
}

fn spawn_hazards(state: &mut GameState, rng: &mut impl Rng) {
    if rng.gen::<f64>() < state.asteroid_chance && state.asteroids.len() < state.asteroid_cap {
        spawn_asteroid(state, rng);
    }
    if rng.gen::<f64>() < state.satellite_chance && state.satellites.len() < state.satellite_cap {
        spawn_satellite(state, rng);
    }
}

fn spawn_asteroid(state: &mut GameState, rng: &mut impl Rng) {
    let size = ASTEROID_MIN_SIZE + rng.gen::<f32>() * ASTEROID_SIZE_SPREAD;
    let x = rng.gen::<f32>() * (state.width - size - 16.0).max(0.0) + 8.0;
    state.asteroids.push(Asteroid {
        x,
        y: -size - rng.gen::<f32>() * 80.0,
        w: size,
        h: size,
        vx: (rng.gen::<f32>() * 2.0 - 1.0) * 20.0,
        vy: 30.0 + rng.gen::<f32>() * 40.0,
        rotation: rng.gen::<f32>() * PI,
        spin: (rng.gen::<f32>() * 2.0 - 1.0) * 0.8,
        hp: if size > ASTEROID_LARGE_SIZE { 3 } else { 2 },
    });
}

/// Weighted pick: common tier 0, rare tier 2.
fn roll_satellite_tier(rng: &mut impl Rng) -> usize {
    let total: u32 = SATELLITE_TIER_WEIGHTS.iter().sum();
    let mut roll = rng.gen_range(0..total);
    for (tier, &weight) in SATELLITE_TIER_WEIGHTS.iter().enumerate() {
        if roll < weight {
            return tier;
        }
        roll -= weight;
    }
    0
}

fn spawn_satellite(state: &mut GameState, rng: &mut impl Rng) {
    let size = SATELLITE_SIZE;
    let x = rng.gen::<f32>() * (state.width - size - 16.0).max(0.0) + 8.0;
    let tier = roll_satellite_tier(rng);
    state.satellites.push(Satellite {
        x,
        y: -size,
        w: size,
        h: size,
        speed: 60.0 + rng.gen::<f32>() * 40.0,
        tier,
    });
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// Move one alien according to its pattern.
pub fn move_alien(alien: &mut Alien, dt: f32, width: f32) {
    alien.t += dt;
    match alien.pattern {
        MovePattern::Straight => {
            alien.y += alien.speed * dt;
        }
        MovePattern::Sine => {
            alien.y += alien.speed * dt * 0.95;
            alien.x = alien.anchor_x + (alien.t * 3.0).sin() * alien.amplitude;
        }
        MovePattern::Zigzag => {
            alien.y += alien.speed * dt * 1.05;
            alien.x += alien.dir * ZIGZAG_LATERAL_SPEED * dt;
            if alien.x < PLAYER_MARGIN {
                alien.dir = 1.0;
            } else if alien.x > width - alien.w - PLAYER_MARGIN {
                alien.dir = -1.0;
            }
        }
        MovePattern::Drift => {
            alien.y += alien.speed * dt * 0.9;
            alien.x += (alien.t * 1.6 + alien.anchor_x).cos() * DRIFT_LATERAL_SPEED * dt;
        }
        MovePattern::Special => {
            alien.y += alien.speed * dt;
            let sway = alien.anchor_x + (alien.t * 1.2).sin() * alien.amplitude;
            alien.x = clamp(sway, PLAYER_MARGIN, width - alien.w - PLAYER_MARGIN);
        }
    }
}

fn advance_aliens(state: &mut GameState, dt: f32, rng: &mut impl Rng) {
    let width = state.width;
    let height = state.height;
    let clock = state.clock_ms;

    for alien in state.aliens.iter_mut() {
        move_alien(alien, dt, width);
    }
    state.aliens.retain(|a| a.y <= height + BODY_PRUNE_MARGIN);

    let mut shots = Vec::new();
    for alien in state.aliens.iter_mut() {
        let on_screen = alien.y > 0.0 && alien.y < height - ALIEN_FIRE_FLOOR;
        if !alien.can_shoot || !on_screen || rng.gen::<f64>() >= ALIEN_SHOT_CHANCE {
            continue;
        }
        let cooldown = ALIEN_SHOT_MIN_COOLDOWN_MS + rng.gen::<f64>() * ALIEN_SHOT_COOLDOWN_SPREAD_MS;
        if clock - alien.last_shot_at_ms < cooldown {
            continue;
        }
        alien.last_shot_at_ms = clock;
        shots.push(Bullet {
            x: alien.x + alien.w / 2.0 - ALIEN_BULLET_W / 2.0,
            y: alien.y + alien.h,
            w: ALIEN_BULLET_W,
            h: ALIEN_BULLET_H,
            speed: 280.0 + rng.gen::<f32>() * 100.0,
            owner: BulletOwner::Alien,
        });
    }
    for shot in shots {
        state.alien_bullets.push(shot);
        state.events.push(GameEvent::AlienShot);
    }
}

/// Aliens flying into an asteroid are destroyed without scoring.
fn asteroids_crush_aliens(state: &mut GameState) {
    let asteroids = &state.asteroids;
    let before = state.aliens.len();
    state
        .aliens
        .retain(|a| !asteroids.iter().any(|r| a.rect().overlaps(&r.rect())));
    for _ in state.aliens.len()..before {
        state.events.push(GameEvent::AlienHit);
    }
}

fn advance_alien_bullets(state: &mut GameState, dt: f32) {
    for b in state.alien_bullets.iter_mut() {
        b.y += b.speed * dt;
    }
    let limit = state.height + BULLET_PRUNE_MARGIN;
    state.alien_bullets.retain(|b| b.y <= limit);
}

fn advance_asteroids(state: &mut GameState, dt: f32) {
    let width = state.width;
    for a in state.asteroids.iter_mut() {
        a.x += a.vx * dt;
        a.y += a.vy * dt;
        a.rotation += a.spin * dt;
        if a.x < ASTEROID_WALL_MARGIN {
            a.vx = a.vx.abs();
        } else if a.x > width - a.w - ASTEROID_WALL_MARGIN {
            a.vx = -a.vx.abs();
        }
    }
    let limit = state.height + BODY_PRUNE_MARGIN;
    state.asteroids.retain(|a| a.y <= limit);
}

fn advance_satellites(state: &mut GameState, dt: f32) {
    for s in state.satellites.iter_mut() {
        s.y += s.speed * dt;
    }
    let limit = state.height + BULLET_PRUNE_MARGIN;
    state.satellites.retain(|s| s.y <= limit);
}

fn advance_effects(state: &mut GameState, dt: f32) {
    for e in state.effects.iter_mut() {
        e.elapsed_ms += dt as f64 * 1000.0;
        if e.kind == EffectKind::PickupText {
            e.y -= PICKUP_TEXT_RISE * dt;
        }
    }
    state.effects.retain(|e| e.elapsed_ms < e.duration_ms);
}

fn advance_stars(state: &mut GameState, dx: f32, dt: f32, rng: &mut impl Rng) {
    let width = state.width;
    let height = state.height;

    for s in state.stars.iter_mut() {
        s.y += s.speed * dt * STAR_DRIFT;
        if s.y > height {
            s.y = -2.0;
            s.x = rng.gen::<f32>() * width;
        }
    }

    for s in state.mini_stars.iter_mut() {
        s.y += s.speed * dt * MINI_STAR_DRIFT;
        s.x -= dx * MINI_STAR_PARALLAX * dt;
        if s.y > height {
            s.y = -1.0;
            s.x = rng.gen::<f32>() * width;
        }
        if s.x < -2.0 {
            s.x = width + 2.0;
        } else if s.x > width + 2.0 {
            s.x = -2.0;
        }
    }
}

// ── Collisions ───────────────────────────────────────────────────────────────

fn resolve_bullets_vs_aliens(state: &mut GameState) {
    let bullets = &mut state.bullets;
    let mut events = Vec::new();
    let mut score_gain = 0;
    let mut double_shot = false;

    state.aliens.retain_mut(|alien| {
        let rect = alien.rect();
        let Some(hit) = bullets.iter().position(|b| b.rect().overlaps(&rect)) else {
            return true;
        };
        bullets.swap_remove(hit);
        alien.hp = alien.hp.saturating_sub(1);
        events.push(GameEvent::AlienHit);
        if alien.hp > 0 {
            return true;
        }

        let special = alien.is_special();
        if special {
            score_gain += SPECIAL_SCORE;
            double_shot = true;
        } else {
            score_gain += 1;
        }
        events.push(GameEvent::AlienDestroyed { special });
        false
    });

    state.score += score_gain;
    if double_shot {
        state.player.double_shot = true;
    }
    state.events.extend(events);
}

fn resolve_bullets_vs_asteroids(state: &mut GameState) {
    let bullets = &mut state.bullets;
    let mut destroyed = state.asteroids_destroyed;
    let mut events = Vec::new();
    let mut bursts = Vec::new();

    state.asteroids.retain_mut(|asteroid| {
        let rect = asteroid.rect();
        let Some(hit) = bullets.iter().position(|b| b.rect().overlaps(&rect)) else {
            return true;
        };
        bullets.swap_remove(hit);
        asteroid.hp = asteroid.hp.saturating_sub(1);
        events.push(GameEvent::AlienHit);
        if asteroid.hp > 0 {
            return true;
        }

        destroyed += 1;
        events.push(GameEvent::AsteroidDestroyed { total: destroyed });
        if destroyed % ASTEROID_MILESTONE == 0 {
            let (x, y) = rect.center();
            bursts.push(Effect {
                x,
                y,
                elapsed_ms: 0.0,
                duration_ms: BONUS_BURST_MS,
                text: format!("+{} LIVES", ASTEROID_MILESTONE_LIVES),
                kind: EffectKind::BonusBurst,
            });
            events.push(GameEvent::AsteroidMilestone);
        }
        false
    });

    state.asteroids_destroyed = destroyed;
    state.lives += bursts.len() as u32 * ASTEROID_MILESTONE_LIVES;
    state.effects.extend(bursts);
    state.events.extend(events);
}

/// Remove every item overlapping the player, up to `budget` of them, and
/// return how many were removed.
fn strike<T>(items: &mut Vec<T>, player: &Rect, budget: &mut u32, rect_of: impl Fn(&T) -> Rect) -> u32 {
    let mut struck = 0;
    items.retain(|item| {
        if *budget == 0 || !rect_of(item).overlaps(player) {
            return true;
        }
        *budget -= 1;
        struck += 1;
        false
    });
    struck
}

fn damage_player(state: &mut GameState) {
    state.hits += 1;
    state.lives = state.lives.saturating_sub(1);
    state.player.double_shot = false;
    state.events.push(GameEvent::PlayerHit);
    if state.lives == 0 {
        state.status = GameStatus::GameOver;
        state.events.push(GameEvent::GameOver);
    }
}

/// Alien bullets, alien bodies and asteroid bodies each cost one life.
/// Once the last life is gone nothing else is consumed this step.
fn resolve_player_damage(state: &mut GameState) {
    let player = state.player.rect();
    let mut budget = state.lives;
    let mut taken = 0;
    taken += strike(&mut state.alien_bullets, &player, &mut budget, Bullet::rect);
    taken += strike(&mut state.aliens, &player, &mut budget, Alien::rect);
    taken += strike(&mut state.asteroids, &player, &mut budget, Asteroid::rect);
    for _ in 0..taken {
        damage_player(state);
    }
}

fn collect_satellites(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }
    let player = state.player.rect();
    let mut gained = 0;
    let mut popups = Vec::new();
    let mut events = Vec::new();

    state.satellites.retain(|sat| {
        if !sat.rect().overlaps(&player) {
            return true;
        }
        let lives = sat.lives_granted();
        let (x, y) = sat.rect().center();
        gained += lives;
        popups.push(Effect {
            x,
            y,
            elapsed_ms: 0.0,
            duration_ms: PICKUP_TEXT_MS,
            text: format!("+{}", lives),
            kind: EffectKind::PickupText,
        });
        events.push(GameEvent::SatelliteCollected { lives });
        false
    });

    state.lives += gained;
    state.effects.extend(popups);
    state.events.extend(events);
}

// ── Progression ──────────────────────────────────────────────────────────────

fn check_level_up(state: &mut GameState) {
    if state.score < state.next_level_at {
        return;
    }
    state.level += 1;
    state.next_level_at += LEVEL_STEP_BASE + 2 * state.level;
    state.fire_cooldown_ms = (state.fire_cooldown_ms - FIRE_COOLDOWN_STEP_MS).max(MIN_FIRE_COOLDOWN_MS);
    state.spawn_every_ms = (state.spawn_every_ms - LEVEL_UP_SPAWN_STEP_MS).max(MIN_SPAWN_EVERY_MS);
    difficulty::apply(state);
    state.events.push(GameEvent::LevelUp { level: state.level });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn clamp_prefers_lower_bound_when_inverted() {
        assert_eq!(clamp(5.0, 10.0, 2.0), 10.0);
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    }

    #[test]
    fn satellite_tier_distribution_covers_all_tiers() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [0u32; 3];
        for _ in 0..2_000 {
            seen[roll_satellite_tier(&mut rng)] += 1;
        }
        assert!(seen.iter().all(|&n| n > 0));
        assert!(seen[0] > seen[1] && seen[1] > seen[2]);
    }

    #[test]
    fn strike_respects_budget() {
        let player = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut items = vec![Rect::new(1.0, 1.0, 2.0, 2.0); 4];
        let mut budget = 2;
        let struck = strike(&mut items, &player, &mut budget, |r| *r);
        assert_eq!(struck, 2);
        assert_eq!(budget, 0);
        assert_eq!(items.len(), 2);
    }
}

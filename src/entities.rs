/// All game entity types — pure data, no logic beyond box geometry.
///
/// Positions are playfield units with the origin at the top-left corner and
/// `y` growing downward.  Every entity is an axis-aligned box anchored at its
/// top-left corner.

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Strict AABB overlap: boxes that merely touch do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Which movement / fire keys are held during the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

impl InputState {
    /// -1, 0 or +1 depending on the horizontal keys held.
    pub fn dx(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    pub fn dy(&self) -> f32 {
        (self.down as i8 - self.up as i8) as f32
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Units per second.
    pub speed: f32,
    /// Granted by destroying a special alien, lost on any hit.
    pub double_shot: bool,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum BulletOwner {
    /// Travels up.
    Player,
    /// Travels down.
    Alien,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub speed: f32,
    pub owner: BulletOwner,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

// ── Aliens ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MovePattern {
    /// Straight descent.
    Straight,
    /// Lateral sine sway around the spawn column.
    Sine,
    /// Constant lateral speed, bouncing off the side walls.
    Zigzag,
    /// Slow cosine drift; takes two hits.
    Drift,
    /// Rare, tough, slow; grants the double-shot power-up.
    Special,
}

#[derive(Clone, Debug)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub speed: f32,
    pub pattern: MovePattern,
    /// Seconds alive.
    pub t: f32,
    /// Spawn column the sway patterns oscillate around.
    pub anchor_x: f32,
    pub amplitude: f32,
    /// Zigzag direction, -1.0 or 1.0.
    pub dir: f32,
    pub hp: u32,
    pub can_shoot: bool,
    pub last_shot_at_ms: f64,
    /// Level at spawn time; picks the sprite tier.
    pub spawn_level: u32,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn is_special(&self) -> bool {
        self.pattern == MovePattern::Special
    }
}

// ── Asteroids & pickups ───────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Asteroid {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,
    /// Radians.
    pub rotation: f32,
    /// Radians per second.
    pub spin: f32,
    pub hp: u32,
}

impl Asteroid {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// A falling power-up pickup.  Tier 0, 1, 2 grants 1, 2, 3 lives.
#[derive(Clone, Debug)]
pub struct Satellite {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub speed: f32,
    pub tier: usize,
}

impl Satellite {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn lives_granted(&self) -> u32 {
        self.tier as u32 + 1
    }
}

// ── Presentation-only state ───────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum EffectKind {
    /// Milestone flash (every 50th asteroid).
    BonusBurst,
    /// Rising "+N" text after a satellite pickup.
    PickupText,
}

/// Self-expiring visual.  No gameplay effect.
#[derive(Clone, Debug)]
pub struct Effect {
    pub x: f32,
    pub y: f32,
    pub elapsed_ms: f64,
    pub duration_ms: f64,
    pub text: String,
    pub kind: EffectKind,
}

#[derive(Clone, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Units per second.
    pub speed: f32,
}

/// Things that happened during one step, drained by the frame driver to
/// trigger sounds and log lines.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    PlayerShot,
    AlienShot,
    AlienHit,
    AlienDestroyed { special: bool },
    AsteroidDestroyed { total: u32 },
    AsteroidMilestone,
    PlayerHit,
    SatelliteCollected { lives: u32 },
    LevelUp { level: u32 },
    GameOver,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session.  Cloneable so the step function can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Player bullets.
    pub bullets: Vec<Bullet>,
    pub alien_bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub asteroids: Vec<Asteroid>,
    pub satellites: Vec<Satellite>,
    pub effects: Vec<Effect>,
    /// Far parallax layer.
    pub stars: Vec<Star>,
    /// Near parallax layer; drifts against the player's lateral input.
    pub mini_stars: Vec<Star>,
    /// Emitted by the most recent step only.
    pub events: Vec<GameEvent>,

    pub score: u32,
    /// Lifetime count of hits taken.
    pub hits: u32,
    pub lives: u32,
    pub level: u32,
    pub next_level_at: u32,

    /// Simulated milliseconds since the session started.
    pub clock_ms: f64,
    pub last_player_shot_ms: f64,
    pub fire_cooldown_ms: f64,
    pub spawn_timer_ms: f64,
    pub spawn_every_ms: f64,
    pub special_last_seen_ms: f64,

    // Level-derived difficulty coefficients.
    pub spawn_every_min_ms: f64,
    pub twin_chance: f64,
    pub asteroid_chance: f64,
    pub asteroid_cap: usize,
    pub satellite_chance: f64,
    pub satellite_cap: usize,

    /// Cumulative asteroids destroyed by the player.
    pub asteroids_destroyed: u32,

    pub status: GameStatus,
    pub width: f32,
    pub height: f32,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn special_alive(&self) -> bool {
        self.aliens.iter().any(Alien::is_special)
    }
}

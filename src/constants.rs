// --- Frame timing ---
pub const MAX_FRAME_DT: f32 = 0.033; // Seconds; caps the jump after a stall

// --- Terminal projection ---
pub const CELL_W: f32 = 8.0; // Playfield units per terminal column
pub const CELL_H: f32 = 16.0; // Playfield units per terminal row

// --- Player ---
pub const PLAYER_SIZE: f32 = 52.0;
pub const PLAYER_SPEED: f32 = 420.0; // Units per second
pub const PLAYER_MARGIN: f32 = 8.0;
pub const PLAYER_BOTTOM_GAP: f32 = 22.0;
pub const INITIAL_LIVES: u32 = 3;

// --- Player bullets ---
pub const BULLET_W: f32 = 6.0;
pub const BULLET_H: f32 = 14.0;
pub const BULLET_SPEED: f32 = 520.0;
pub const DOUBLE_SHOT_OFFSET: f32 = 8.0;
pub const INITIAL_FIRE_COOLDOWN_MS: f64 = 180.0;
pub const MIN_FIRE_COOLDOWN_MS: f64 = 120.0;
pub const FIRE_COOLDOWN_STEP_MS: f64 = 10.0;

// --- Aliens ---
pub const ALIEN_SIZE: f32 = 44.0;
pub const ALIEN_SPAWN_MARGIN: f32 = 20.0;
pub const ALIEN_SPEED_PER_LEVEL: f32 = 0.12;
pub const ALIEN_SHOT_CHANCE: f64 = 0.003; // Per frame, per shootable alien
pub const ALIEN_SHOT_MIN_COOLDOWN_MS: f64 = 800.0;
pub const ALIEN_SHOT_COOLDOWN_SPREAD_MS: f64 = 1200.0;
pub const ALIEN_BULLET_W: f32 = 5.0;
pub const ALIEN_BULLET_H: f32 = 12.0;
pub const ALIEN_FIRE_FLOOR: f32 = 100.0; // No shots this close to the bottom
pub const ZIGZAG_LATERAL_SPEED: f32 = 160.0;
pub const DRIFT_LATERAL_SPEED: f32 = 40.0;

// --- Special alien ---
pub const SPECIAL_W: f32 = 64.0;
pub const SPECIAL_H: f32 = 48.0;
pub const SPECIAL_HP: u32 = 6;
pub const SPECIAL_SPEED: f32 = 40.0;
pub const SPECIAL_SWAY: f32 = 60.0;
pub const SPECIAL_SCORE: u32 = 5;
pub const SPECIAL_FORCE_AFTER_MS: f64 = 20_000.0;

// --- Spawn cadence ---
pub const INITIAL_SPAWN_EVERY_MS: f64 = 550.0;
pub const MIN_SPAWN_EVERY_MS: f64 = 200.0;
pub const LEVEL_UP_SPAWN_STEP_MS: f64 = 30.0;

// --- Asteroids ---
pub const ASTEROID_MIN_SIZE: f32 = 24.0;
pub const ASTEROID_SIZE_SPREAD: f32 = 24.0;
pub const ASTEROID_LARGE_SIZE: f32 = 36.0; // Above this an asteroid takes 3 hits
pub const ASTEROID_WALL_MARGIN: f32 = 4.0;
pub const ASTEROID_MILESTONE: u32 = 50;
pub const ASTEROID_MILESTONE_LIVES: u32 = 5;
pub const BONUS_BURST_MS: f64 = 1000.0;

// --- Satellites ---
pub const SATELLITE_SIZE: f32 = 28.0;
pub const SATELLITE_TIER_WEIGHTS: [u32; 3] = [6, 3, 1];
pub const PICKUP_TEXT_MS: f64 = 900.0;
pub const PICKUP_TEXT_RISE: f32 = 30.0;

// --- Off-screen pruning ---
pub const BULLET_PRUNE_MARGIN: f32 = 30.0;
pub const BODY_PRUNE_MARGIN: f32 = 60.0;

// --- Level progression ---
pub const FIRST_LEVEL_AT: u32 = 10;
pub const LEVEL_STEP_BASE: u32 = 10;

// --- Background ---
pub const STAR_AREA_PER_STAR: f32 = 6_000.0;
pub const MINI_STAR_AREA_PER_STAR: f32 = 4_000.0;
pub const STAR_DRIFT: f32 = 0.08; // Fraction of a star's speed used for its fall
pub const MINI_STAR_DRIFT: f32 = 0.12;
pub const MINI_STAR_PARALLAX: f32 = 80.0;

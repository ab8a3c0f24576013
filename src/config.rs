/// Gameplay tuning.  All distances are playfield units, all rates are per tick.

// Playfield
pub const WIDTH: i32 = 900;
pub const HEIGHT: i32 = 600;

/// Drone keeps this far from every edge.
pub const DRONE_MARGIN: i32 = 40;
pub const DRONE_SPEED: i32 = 16;
/// Distance of the drone's starting position above the bottom edge.
pub const DRONE_START_OFFSET: i32 = 80;

pub const BULLET_SPEED: i32 = 14;

pub const ENEMY_SPEED: i32 = 3;
pub const ENEMY_SPAWN_INTERVAL: u64 = 30;
pub const ENEMY_SPAWN_Y: i32 = -40;
pub const ENEMY_SPAWN_MARGIN: i32 = 40;

// Boss
pub const BOSS_SCORE_THRESHOLD: u32 = 300;
pub const BOSS_MAX_HEALTH: i32 = 200;
pub const BOSS_SPAWN_Y: i32 = -120;
/// The boss descends until it reaches this height, then starts swaying.
pub const BOSS_ENTRY_Y: i32 = 100;
pub const BOSS_DESCENT_SPEED: i32 = 2;
pub const BOSS_SWAY_AMPLITUDE: f64 = 5.0;
pub const BOSS_FIRE_INTERVAL: u64 = 25;
/// Boss shots appear this far below the boss centre.
pub const BOSS_MUZZLE_OFFSET: i32 = 40;

pub const ENEMY_BULLET_SPEED: i32 = 8;

// Scoring & damage
pub const START_HEALTH: u32 = 100;
pub const ENEMY_SCORE: u32 = 10;
pub const BOSS_BONUS: u32 = 200;
pub const BOSS_HIT_DAMAGE: i32 = 5;
pub const ESCAPE_PENALTY: u32 = 10;
pub const ENEMY_BULLET_DAMAGE: u32 = 15;

// Proximity thresholds (half-widths, strict `<`)
pub const HIT_RADIUS_ENEMY: i32 = 20;
pub const HIT_RADIUS_BOSS: i32 = 60;
pub const HIT_RADIUS_DRONE: i32 = 20;

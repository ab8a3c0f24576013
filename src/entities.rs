/// All game entity types — pure data, no logic.

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    Quit,
}

impl GameStatus {
    /// `GameOver` and `Quit` end the session; no further ticks change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Quit)
    }
}

/// Logical keys the simulation understands.  Physical key mapping lives in
/// the `input` module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Pause,
    Quit,
}

// ── Per-tick input & output ───────────────────────────────────────────────────

/// Everything the outside world tells the simulation for one tick.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    /// Keys active this tick (held directions plus one-shot pause/quit).
    pub keys: Vec<Key>,
    /// A fire trigger arrived since the previous tick.
    pub fire: bool,
    /// Elapsed time in seconds; drives the boss's horizontal sway.
    pub phase: f64,
}

impl FrameInput {
    pub fn with_keys(keys: &[Key]) -> Self {
        FrameInput {
            keys: keys.to_vec(),
            ..Default::default()
        }
    }

    pub fn firing() -> Self {
        FrameInput {
            fire: true,
            ..Default::default()
        }
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

/// What happened during one tick.  The renderer reads the `GameState`
/// itself; this is the summary the main loop logs and reacts to.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub status: GameStatus,
    pub boss_activated: bool,
    pub boss_defeated: bool,
    pub enemies_destroyed: u32,
    pub enemies_escaped: u32,
    pub damage_taken: u32,
}

impl FrameReport {
    pub fn new(status: GameStatus) -> Self {
        FrameReport {
            status,
            boss_activated: false,
            boss_defeated: false,
            enemies_destroyed: 0,
            enemies_escaped: 0,
            damage_taken: 0,
        }
    }
}

// ── Actors ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Drone {
    pub x: i32,
    pub y: i32,
}

/// A projectile.  Player shots and boss shots share the shape but live in
/// separate collections on `GameState`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub active: bool,
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub max_health: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state, owned by the main loop and handed to
/// `compute::advance_frame` once per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub drone: Drone,
    /// Player projectiles, oldest first.
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Projectiles fired by the boss.
    pub enemy_bullets: Vec<Bullet>,
    pub boss: Boss,
    pub score: u32,
    pub health: u32,
    pub frame: u64,
    pub status: GameStatus,
}

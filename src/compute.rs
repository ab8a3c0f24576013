/// Game-logic functions.
///
/// `advance_frame` takes the owned `GameState` by mutable reference and runs
/// one tick in a fixed order.  The only outside influences are the injected
/// `FrameInput` (keys, fire trigger, sway phase) and the injected RNG, so a
/// seeded RNG plus a scripted input sequence always replays identically.

use rand::Rng;

use crate::config::*;
use crate::entities::{
    Boss, Bullet, Drone, Enemy, FrameInput, FrameReport, GameState, GameStatus, Key,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state.
pub fn init_state() -> GameState {
    GameState {
        drone: Drone {
            x: WIDTH / 2,
            y: HEIGHT - DRONE_START_OFFSET,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        enemy_bullets: Vec::new(),
        boss: Boss {
            active: false,
            x: WIDTH / 2,
            y: BOSS_SPAWN_Y,
            health: 0,
            max_health: BOSS_MAX_HEALTH,
        },
        score: 0,
        health: START_HEALTH,
        frame: 0,
        status: GameStatus::Running,
    }
}

// ── Proximity ────────────────────────────────────────────────────────────────

/// Axis-aligned proximity test: both offsets strictly below `radius`.
pub fn within(ax: i32, ay: i32, bx: i32, by: i32, radius: i32) -> bool {
    (ax - bx).abs() < radius && (ay - by).abs() < radius
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick.
pub fn advance_frame(
    state: &mut GameState,
    input: &FrameInput,
    rng: &mut impl Rng,
) -> FrameReport {
    if state.status.is_terminal() {
        return FrameReport::new(state.status.clone());
    }

    // While paused only the pause key is read.
    if state.status == GameStatus::Paused {
        if input.pressed(Key::Pause) {
            state.status = GameStatus::Running;
        }
        return FrameReport::new(state.status.clone());
    }

    if input.pressed(Key::Quit) {
        state.status = GameStatus::Quit;
        return FrameReport::new(GameStatus::Quit);
    }

    state.frame += 1;
    let mut report = FrameReport::new(GameStatus::Running);

    // ── 1. Input ─────────────────────────────────────────────────────────────
    apply_input(state, input);

    // ── 2. Player bullets ────────────────────────────────────────────────────
    advance_bullets(state);

    // ── 3. Spawn a new enemy ─────────────────────────────────────────────────
    if !state.boss.active && state.frame % ENEMY_SPAWN_INTERVAL == 0 {
        let x = rng.gen_range(ENEMY_SPAWN_MARGIN..=WIDTH - ENEMY_SPAWN_MARGIN);
        state.enemies.push(Enemy { x, y: ENEMY_SPAWN_Y });
    }

    // ── 4. Enemies descend ───────────────────────────────────────────────────
    advance_enemies(state, &mut report);

    // ── 5. Boss activation ───────────────────────────────────────────────────
    if state.score >= BOSS_SCORE_THRESHOLD && !state.boss.active {
        activate_boss(state);
        report.boss_activated = true;
    }

    // ── 6. Boss behaviour ────────────────────────────────────────────────────
    if state.boss.active {
        update_boss(state, input.phase);
    }

    // ── 7. Boss bullets ──────────────────────────────────────────────────────
    advance_enemy_bullets(state, &mut report);

    // ── 8. Collision: player bullets ↔ boss / enemies ────────────────────────
    resolve_hits(state, &mut report);

    // ── 9. Terminal check ────────────────────────────────────────────────────
    if state.health == 0 {
        state.status = GameStatus::GameOver;
    }

    report.status = state.status.clone();
    report
}

// ── Sub-steps ────────────────────────────────────────────────────────────────

fn apply_input(state: &mut GameState, input: &FrameInput) {
    let drone = &mut state.drone;
    if input.pressed(Key::Left) {
        drone.x -= DRONE_SPEED;
    }
    if input.pressed(Key::Right) {
        drone.x += DRONE_SPEED;
    }
    if input.pressed(Key::Up) {
        drone.y -= DRONE_SPEED;
    }
    if input.pressed(Key::Down) {
        drone.y += DRONE_SPEED;
    }
    drone.x = drone.x.clamp(DRONE_MARGIN, WIDTH - DRONE_MARGIN);
    drone.y = drone.y.clamp(DRONE_MARGIN, HEIGHT - DRONE_MARGIN);

    // The rest of this tick still runs; the pause takes hold from the next one.
    if input.pressed(Key::Pause) {
        state.status = GameStatus::Paused;
    }

    if input.fire {
        state.bullets.push(Bullet {
            x: state.drone.x,
            y: state.drone.y,
        });
    }
}

fn advance_bullets(state: &mut GameState) {
    for b in state.bullets.iter_mut() {
        b.y -= BULLET_SPEED;
    }
    state.bullets.retain(|b| b.y >= 0);
}

fn advance_enemies(state: &mut GameState, report: &mut FrameReport) {
    for e in state.enemies.iter_mut() {
        e.y += ENEMY_SPEED;
    }
    let before = state.enemies.len();
    state.enemies.retain(|e| e.y <= HEIGHT);
    let escaped = (before - state.enemies.len()) as u32;
    if escaped > 0 {
        let penalty = escaped * ESCAPE_PENALTY;
        state.health = state.health.saturating_sub(penalty);
        report.enemies_escaped += escaped;
        report.damage_taken += penalty;
    }
}

fn activate_boss(state: &mut GameState) {
    state.boss.active = true;
    state.boss.x = WIDTH / 2;
    state.boss.y = BOSS_SPAWN_Y;
    state.boss.health = state.boss.max_health;
    state.enemies.clear();
}

fn update_boss(state: &mut GameState, phase: f64) {
    let boss = &mut state.boss;
    if boss.y < BOSS_ENTRY_Y {
        boss.y += BOSS_DESCENT_SPEED;
        return;
    }

    // `as` truncates toward zero, so the sway is at most ±5 units per tick.
    boss.x += (BOSS_SWAY_AMPLITUDE * phase.sin()) as i32;

    if state.frame % BOSS_FIRE_INTERVAL == 0 {
        state.enemy_bullets.push(Bullet {
            x: boss.x,
            y: boss.y + BOSS_MUZZLE_OFFSET,
        });
    }
}

fn advance_enemy_bullets(state: &mut GameState, report: &mut FrameReport) {
    let drone = state.drone.clone();
    let mut kept = Vec::with_capacity(state.enemy_bullets.len());

    for mut b in std::mem::take(&mut state.enemy_bullets) {
        b.y += ENEMY_BULLET_SPEED;
        if b.y > HEIGHT {
            continue;
        }
        if within(b.x, b.y, drone.x, drone.y, HIT_RADIUS_DRONE) {
            state.health = state.health.saturating_sub(ENEMY_BULLET_DAMAGE);
            report.damage_taken += ENEMY_BULLET_DAMAGE;
            continue;
        }
        kept.push(b);
    }

    state.enemy_bullets = kept;
}

/// Each player bullet hits the boss, or else at most one enemy.
fn resolve_hits(state: &mut GameState, report: &mut FrameReport) {
    let mut kept = Vec::with_capacity(state.bullets.len());

    for b in std::mem::take(&mut state.bullets) {
        if state.boss.active && within(b.x, b.y, state.boss.x, state.boss.y, HIT_RADIUS_BOSS) {
            state.boss.health -= BOSS_HIT_DAMAGE;
            if state.boss.health <= 0 {
                state.boss.active = false;
                state.score += BOSS_BONUS;
                state.enemy_bullets.clear();
                report.boss_defeated = true;
            }
            continue;
        }

        let hit = state
            .enemies
            .iter()
            .position(|e| within(b.x, b.y, e.x, e.y, HIT_RADIUS_ENEMY));
        match hit {
            Some(i) => {
                state.enemies.remove(i);
                state.score += ENEMY_SCORE;
                report.enemies_destroyed += 1;
            }
            None => kept.push(b),
        }
    }

    state.bullets = kept;
}

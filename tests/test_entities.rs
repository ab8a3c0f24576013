use drone_defense::compute::init_state;
use drone_defense::entities::*;

#[test]
fn terminal_statuses() {
    assert!(!GameStatus::Running.is_terminal());
    assert!(!GameStatus::Paused.is_terminal());
    assert!(GameStatus::GameOver.is_terminal());
    assert!(GameStatus::Quit.is_terminal());
}

#[test]
fn frame_input_helpers() {
    let input = FrameInput::with_keys(&[Key::Left, Key::Pause]);
    assert!(input.pressed(Key::Left));
    assert!(input.pressed(Key::Pause));
    assert!(!input.pressed(Key::Quit));
    assert!(!input.fire);

    let shot = FrameInput::firing();
    assert!(shot.fire);
    assert!(shot.keys.is_empty());
}

#[test]
fn fresh_report_is_empty() {
    let r = FrameReport::new(GameStatus::Running);
    assert_eq!(r.status, GameStatus::Running);
    assert!(!r.boss_activated);
    assert!(!r.boss_defeated);
    assert_eq!(r.enemies_destroyed, 0);
    assert_eq!(r.enemies_escaped, 0);
    assert_eq!(r.damage_taken, 0);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.drone.x = 99;
    cloned.score = 999;
    cloned.enemies.push(Enemy { x: 5, y: 5 });

    assert_eq!(original.drone.x, 450);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
    assert_ne!(original, cloned);
}

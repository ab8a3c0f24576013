use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use drone_defense::entities::Key;
use drone_defense::input::*;

fn press(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn release(c: char) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char(c),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ))
}

fn repeat(c: char) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char(c),
        KeyModifiers::NONE,
        KeyEventKind::Repeat,
    ))
}

fn click(button: MouseButton) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(button),
        column: 10,
        row: 5,
        modifiers: KeyModifiers::NONE,
    })
}

// ── map_key ───────────────────────────────────────────────────────────────────

#[test]
fn letters_and_arrows_map_to_same_direction() {
    let none = KeyModifiers::NONE;
    assert_eq!(map_key(&KeyCode::Char('a'), none), Some(Key::Left));
    assert_eq!(map_key(&KeyCode::Left, none), Some(Key::Left));
    assert_eq!(map_key(&KeyCode::Char('d'), none), Some(Key::Right));
    assert_eq!(map_key(&KeyCode::Right, none), Some(Key::Right));
    assert_eq!(map_key(&KeyCode::Char('w'), none), Some(Key::Up));
    assert_eq!(map_key(&KeyCode::Up, none), Some(Key::Up));
    assert_eq!(map_key(&KeyCode::Char('s'), none), Some(Key::Down));
    assert_eq!(map_key(&KeyCode::Down, none), Some(Key::Down));
}

#[test]
fn quit_and_pause_keys() {
    let none = KeyModifiers::NONE;
    assert_eq!(map_key(&KeyCode::Char('p'), none), Some(Key::Pause));
    assert_eq!(map_key(&KeyCode::Char('q'), none), Some(Key::Quit));
    assert_eq!(map_key(&KeyCode::Esc, none), Some(Key::Quit));
    assert_eq!(map_key(&KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Key::Quit));
    assert_eq!(map_key(&KeyCode::Char('c'), none), None);
    assert_eq!(map_key(&KeyCode::Enter, none), None);
}

// ── Held keys ─────────────────────────────────────────────────────────────────

#[test]
fn pressed_direction_held_within_window() {
    let mut t = KeyTracker::new();
    t.handle_event(&press('a'), 1);
    assert!(t.take_input(1, 0.0).pressed(Key::Left));
    assert!(t.take_input(1 + HOLD_WINDOW, 0.0).pressed(Key::Left));
    assert!(!t.take_input(2 + HOLD_WINDOW, 0.0).pressed(Key::Left));
}

#[test]
fn repeat_refreshes_hold() {
    let mut t = KeyTracker::new();
    t.handle_event(&press('d'), 1);
    t.handle_event(&repeat('d'), 4);
    assert!(t.is_held(Key::Right, 4 + HOLD_WINDOW));
    assert!(t.take_input(4 + HOLD_WINDOW, 0.0).pressed(Key::Right));
}

#[test]
fn release_drops_key_immediately() {
    let mut t = KeyTracker::new();
    t.handle_event(&press('w'), 1);
    t.handle_event(&release('w'), 2);
    assert!(!t.take_input(2, 0.0).pressed(Key::Up));
}

#[test]
fn simultaneous_directions() {
    let mut t = KeyTracker::new();
    t.handle_event(&press('a'), 3);
    t.handle_event(&press('s'), 3);
    let input = t.take_input(3, 0.0);
    assert!(input.pressed(Key::Left));
    assert!(input.pressed(Key::Down));
    assert!(!input.pressed(Key::Right));
}

// ── One-shot keys & fire ─────────────────────────────────────────────────────

#[test]
fn pause_is_one_shot() {
    let mut t = KeyTracker::new();
    t.handle_event(&press('p'), 1);
    assert!(t.take_input(1, 0.0).pressed(Key::Pause));
    assert!(!t.take_input(2, 0.0).pressed(Key::Pause));
}

#[test]
fn quit_reported_once_per_press() {
    let mut t = KeyTracker::new();
    t.handle_event(&press('q'), 1);
    t.handle_event(&press('q'), 1);
    let input = t.take_input(1, 0.0);
    assert_eq!(input.keys.iter().filter(|k| **k == Key::Quit).count(), 1);
}

#[test]
fn left_click_fires_once() {
    let mut t = KeyTracker::new();
    t.handle_event(&click(MouseButton::Left), 1);
    assert!(t.take_input(1, 0.0).fire);
    assert!(!t.take_input(2, 0.0).fire);
}

#[test]
fn right_click_does_not_fire() {
    let mut t = KeyTracker::new();
    t.handle_event(&click(MouseButton::Right), 1);
    assert!(!t.take_input(1, 0.0).fire);
}

#[test]
fn space_fires_on_press_only() {
    let mut t = KeyTracker::new();
    t.handle_event(&press(' '), 1);
    assert!(t.take_input(1, 0.0).fire);
    t.handle_event(&repeat(' '), 2);
    assert!(!t.take_input(2, 0.0).fire);
}

#[test]
fn clicks_ignored_while_paused() {
    let mut t = KeyTracker::new();
    t.set_paused(true);
    t.handle_event(&click(MouseButton::Left), 1);
    t.handle_event(&press(' '), 1);
    assert!(!t.take_input(1, 0.0).fire);

    t.set_paused(false);
    t.handle_event(&click(MouseButton::Left), 2);
    assert!(t.take_input(2, 0.0).fire);
}

#[test]
fn phase_is_passed_through() {
    let mut t = KeyTracker::new();
    assert_eq!(t.take_input(1, 2.5).phase, 2.5);
}

/// Terminal input → per-tick `FrameInput`.
///
/// Held keys are tracked with a `key_frame` map that records the frame a key
/// was last pressed or repeated.  Terminals with the keyboard-enhancement
/// protocol send proper release events and keys are dropped at once; classic
/// terminals only repeat `Press`, so keys expire after `HOLD_WINDOW` frames of
/// silence, which is shorter than any OS key-repeat interval.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::entities::{FrameInput, Key};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.
pub const HOLD_WINDOW: u64 = 4;

/// Map a physical key to a logical one.
pub fn map_key(code: &KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

fn is_direction(key: Key) -> bool {
    matches!(key, Key::Left | Key::Right | Key::Up | Key::Down)
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Held direction key → frame it was last seen.
    key_frame: HashMap<Key, u64>,
    /// One-shot keys pressed since the last `take_input`.
    pending: Vec<Key>,
    fire: bool,
    /// Mirrors the simulation's pause state so clicks made while paused are
    /// dropped instead of queuing a shot for the moment play resumes.
    paused: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Record one terminal event observed during `frame`.
    pub fn handle_event(&mut self, event: &Event, frame: u64) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) => self.handle_key(code, *kind, *modifiers, frame),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => {
                if !self.paused {
                    self.fire = true;
                }
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: &KeyCode, kind: KeyEventKind, modifiers: KeyModifiers, frame: u64) {
        if *code == KeyCode::Char(' ') {
            if kind == KeyEventKind::Press && !self.paused {
                self.fire = true;
            }
            return;
        }

        let Some(key) = map_key(code, modifiers) else {
            return;
        };

        match kind {
            KeyEventKind::Press if is_direction(key) => {
                self.key_frame.insert(key, frame);
            }
            KeyEventKind::Press => {
                if !self.pending.contains(&key) {
                    self.pending.push(key);
                }
            }
            // Refresh timestamp so the key stays "held"
            KeyEventKind::Repeat if is_direction(key) => {
                self.key_frame.insert(key, frame);
            }
            KeyEventKind::Repeat => {}
            KeyEventKind::Release => {
                self.key_frame.remove(&key);
            }
        }
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: Key, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Build the input for the tick at `frame` and reset one-shot state.
    pub fn take_input(&mut self, frame: u64, phase: f64) -> FrameInput {
        self.key_frame
            .retain(|_, last| frame.saturating_sub(*last) <= HOLD_WINDOW);

        let mut keys: Vec<Key> = [Key::Left, Key::Right, Key::Up, Key::Down]
            .into_iter()
            .filter(|k| self.is_held(*k, frame))
            .collect();
        keys.append(&mut self.pending);

        FrameInput {
            keys,
            fire: std::mem::take(&mut self.fire),
            phase,
        }
    }
}

/// Held-key tracking.
///
/// Instead of acting on each key event individually we record the frame
/// number of the last press/repeat event for every key.  Each frame the
/// keys that are still "fresh" (within `HOLD_WINDOW` frames) are folded into
/// one `InputState`, so movement and fire can be held together.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind};

use crate::entities::InputState;

/// A key counts as held if its last press/repeat event arrived within this
/// many frames.  At ~60 FPS this is ≈130 ms, shorter than any OS repeat
/// delay after the first repeat.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Debug, Default)]
pub struct InputTracker {
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
}

/// Fold letter case so `A` and `a` map to the same slot.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once at the start of every frame, before feeding events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn handle(&mut self, code: KeyCode, kind: KeyEventKind) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(normalize(code), self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&normalize(code));
            }
        }
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.key_frame
            .get(&normalize(code))
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.key_frame.clear();
    }

    pub fn snapshot(&self) -> InputState {
        InputState {
            left: self.is_held(KeyCode::Left) || self.is_held(KeyCode::Char('a')),
            right: self.is_held(KeyCode::Right) || self.is_held(KeyCode::Char('d')),
            up: self.is_held(KeyCode::Up) || self.is_held(KeyCode::Char('w')),
            down: self.is_held(KeyCode::Down) || self.is_held(KeyCode::Char('s')),
            fire: self.is_held(KeyCode::Char(' ')),
        }
    }
}

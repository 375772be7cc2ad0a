use crossterm::event::{KeyCode, KeyEventKind};
use galactic_invaders::entities::InputState;
use galactic_invaders::input::*;

fn press(tracker: &mut InputTracker, code: KeyCode) {
    tracker.handle(code, KeyEventKind::Press);
}

#[test]
fn nothing_held_initially() {
    let tracker = InputTracker::new();
    assert_eq!(tracker.snapshot(), InputState::default());
}

#[test]
fn pressed_key_is_held_within_window() {
    let mut tracker = InputTracker::new();
    tracker.begin_frame();
    press(&mut tracker, KeyCode::Left);
    for _ in 0..HOLD_WINDOW {
        tracker.begin_frame();
    }
    assert!(tracker.snapshot().left);

    tracker.begin_frame();
    assert!(!tracker.snapshot().left);
}

#[test]
fn repeat_refreshes_the_window() {
    let mut tracker = InputTracker::new();
    tracker.begin_frame();
    press(&mut tracker, KeyCode::Char(' '));
    for _ in 0..HOLD_WINDOW {
        tracker.begin_frame();
    }
    tracker.handle(KeyCode::Char(' '), KeyEventKind::Repeat);
    for _ in 0..HOLD_WINDOW {
        tracker.begin_frame();
    }
    assert!(tracker.snapshot().fire);
}

#[test]
fn release_drops_key_immediately() {
    let mut tracker = InputTracker::new();
    tracker.begin_frame();
    press(&mut tracker, KeyCode::Right);
    tracker.handle(KeyCode::Right, KeyEventKind::Release);
    assert!(!tracker.snapshot().right);
}

#[test]
fn movement_and_fire_combine() {
    let mut tracker = InputTracker::new();
    tracker.begin_frame();
    press(&mut tracker, KeyCode::Up);
    press(&mut tracker, KeyCode::Char('a'));
    press(&mut tracker, KeyCode::Char(' '));
    let input = tracker.snapshot();
    assert!(input.up && input.left && input.fire);
    assert!(!input.right && !input.down);
}

#[test]
fn letter_case_is_folded() {
    let mut tracker = InputTracker::new();
    tracker.begin_frame();
    press(&mut tracker, KeyCode::Char('D'));
    assert!(tracker.snapshot().right);
    tracker.handle(KeyCode::Char('d'), KeyEventKind::Release);
    assert!(!tracker.snapshot().right);
}

#[test]
fn wasd_mirrors_arrows() {
    let mut tracker = InputTracker::new();
    tracker.begin_frame();
    press(&mut tracker, KeyCode::Char('w'));
    press(&mut tracker, KeyCode::Char('s'));
    let input = tracker.snapshot();
    assert!(input.up && input.down);
}

#[test]
fn clear_forgets_everything() {
    let mut tracker = InputTracker::new();
    tracker.begin_frame();
    press(&mut tracker, KeyCode::Left);
    tracker.clear();
    assert!(!tracker.is_held(KeyCode::Left));
    assert_eq!(tracker.frame(), 1);
}

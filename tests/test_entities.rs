use galactic_invaders::compute::init_state;
use galactic_invaders::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(BulletOwner::Player, BulletOwner::Player);
    assert_ne!(BulletOwner::Player, BulletOwner::Alien);
    assert_eq!(MovePattern::Zigzag, MovePattern::Zigzag);
    assert_ne!(MovePattern::Sine, MovePattern::Drift);
    assert_eq!(
        GameEvent::LevelUp { level: 3 },
        GameEvent::LevelUp { level: 3 }
    );
    assert_ne!(
        GameEvent::AlienDestroyed { special: true },
        GameEvent::AlienDestroyed { special: false }
    );
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(400.0, 300.0, &mut StdRng::seed_from_u64(42));
    let mut cloned = original.clone();

    cloned.score = 999;
    cloned.lives = 0;
    cloned.player.x = 10.0;
    cloned.events.push(GameEvent::PlayerShot);

    assert_eq!(original.score, 0);
    assert_eq!(original.lives, 3);
    assert_ne!(original.player.x, 10.0);
    assert!(original.events.is_empty());
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn overlapping_boxes_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.overlaps(&b));
}

#[test]
fn overlap_is_symmetric() {
    let boxes = [
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(5.0, 5.0, 10.0, 10.0),
        Rect::new(10.0, 0.0, 10.0, 10.0),
        Rect::new(2.0, 2.0, 3.0, 3.0),
        Rect::new(-5.0, 8.0, 30.0, 1.0),
        Rect::new(50.0, 50.0, 1.0, 1.0),
    ];
    for a in &boxes {
        for b in &boxes {
            assert_eq!(a.overlaps(b), b.overlaps(a), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn touching_edges_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0))); // right edge
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0))); // bottom edge
    assert!(!a.overlaps(&Rect::new(-10.0, -10.0, 10.0, 10.0))); // corner
}

#[test]
fn contained_box_collides() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 2.0, 2.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn rect_center() {
    assert_eq!(Rect::new(10.0, 20.0, 4.0, 6.0).center(), (12.0, 23.0));
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[test]
fn input_axes() {
    let none = InputState::default();
    assert_eq!((none.dx(), none.dy()), (0.0, 0.0));

    let up_left = InputState { left: true, up: true, ..none };
    assert_eq!((up_left.dx(), up_left.dy()), (-1.0, -1.0));

    let down_right = InputState { right: true, down: true, ..none };
    assert_eq!((down_right.dx(), down_right.dy()), (1.0, 1.0));
}

// ── Entity helpers ────────────────────────────────────────────────────────────

#[test]
fn special_detection_follows_pattern() {
    let mut a = Alien {
        x: 0.0,
        y: 0.0,
        w: 44.0,
        h: 44.0,
        speed: 0.0,
        pattern: MovePattern::Straight,
        t: 0.0,
        anchor_x: 0.0,
        amplitude: 0.0,
        dir: 1.0,
        hp: 1,
        can_shoot: false,
        last_shot_at_ms: 0.0,
        spawn_level: 1,
    };
    assert!(!a.is_special());
    a.pattern = MovePattern::Special;
    assert!(a.is_special());
}

#[test]
fn status_helpers() {
    let mut s = init_state(400.0, 300.0, &mut StdRng::seed_from_u64(42));
    assert!(s.is_running());
    s.status = GameStatus::Paused;
    assert!(!s.is_running());
    assert!(!s.is_game_over());
    s.status = GameStatus::GameOver;
    assert!(s.is_game_over());
}

mod display;
mod speaker;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info, warn, LevelFilter};
use rand::thread_rng;

use galactic_invaders::audio::{play_sfx, AudioHandle, Sfx};
use galactic_invaders::compute::{clamp_dt, init_state, reset, resize, tick, toggle_pause};
use galactic_invaders::entities::{GameEvent, GameState};
use galactic_invaders::input::InputTracker;
use galactic_invaders::sprites::SpriteSheet;

use display::{playfield_size, View};
use speaker::Speaker;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Command line ──────────────────────────────────────────────────────────────

struct Options {
    assets: Option<PathBuf>,
    log_file: String,
    log_level: LevelFilter,
    show_stars: bool,
    mute: bool,
    unknown: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Options {
    let mut opts = Options {
        assets: None,
        log_file: "galactic_invaders.log".to_string(),
        log_level: LevelFilter::Info,
        show_stars: true,
        mute: false,
        unknown: Vec::new(),
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--assets" => opts.assets = args.next().map(PathBuf::from),
            "--log" => {
                if let Some(path) = args.next() {
                    opts.log_file = path;
                }
            }
            "--verbose" => opts.log_level = LevelFilter::Debug,
            "--no-stars" => opts.show_stars = false,
            "--mute" => opts.mute = true,
            _ => opts.unknown.push(arg),
        }
    }
    opts
}

// ── Event log ─────────────────────────────────────────────────────────────────

fn log_event(event: &GameEvent, state: &GameState) {
    match event {
        GameEvent::LevelUp { level } => {
            info!("Level {} reached (next at {})", level, state.next_level_at)
        }
        GameEvent::AsteroidMilestone => info!(
            "Asteroid milestone: {} destroyed, lives now {}",
            state.asteroids_destroyed, state.lives
        ),
        GameEvent::SatelliteCollected { lives } => info!("Satellite collected: +{} lives", lives),
        GameEvent::AlienDestroyed { special: true } => info!("Special alien down: double shot"),
        GameEvent::GameOver => info!("Game over: score {}, hits {}", state.score, state.hits),
        _ => {}
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Frame driver: drain input, step the simulation unless paused or over,
/// then always render so overlays stay live.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    opts: &Options,
    sprites: &SpriteSheet,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let (cols, rows) = terminal::size()?;
    let (width, height) = playfield_size(cols, rows);
    let mut state = init_state(width, height, &mut rng);
    info!("Session started on a {}x{} terminal", cols, rows);

    let mut input = InputTracker::new();
    let mut audio: Option<AudioHandle<Speaker>> = None;
    let mut show_stars = opts.show_stars;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        input.begin_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    input.handle(code, kind);
                    if kind != KeyEventKind::Press {
                        continue;
                    }
                    // Audio comes up with the first key press.
                    if audio.is_none() && !opts.mute {
                        audio = Some(speaker::start());
                    }
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('p') | KeyCode::Char('P') => {
                            state = toggle_pause(&state);
                            info!("Status: {:?}", state.status);
                        }
                        KeyCode::Char('t') | KeyCode::Char('T') => {
                            show_stars = !show_stars;
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            state = reset(&state, &mut rng);
                            input.clear();
                            info!("Session restarted");
                        }
                        _ => {}
                    }
                }
                Event::Resize(cols, rows) => {
                    let (width, height) = playfield_size(cols, rows);
                    state = resize(&state, width, height, &mut rng);
                    info!("Resized to {}x{}", cols, rows);
                }
                _ => {}
            }
        }

        // ── Step ──────────────────────────────────────────────────────────────
        let now = Instant::now();
        let dt = clamp_dt(now.duration_since(last).as_secs_f32());
        last = now;

        if state.is_running() {
            state = tick(&state, &input.snapshot(), dt, &mut rng);
            for event in &state.events {
                log_event(event, &state);
                if let Some(sfx) = Sfx::for_event(event) {
                    play_sfx(audio.as_mut(), sfx, &mut rng);
                }
            }
        }

        display::render(
            out,
            &state,
            &View {
                sprites,
                show_stars,
            },
        )?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let opts = parse_args(std::env::args().skip(1));
    simple_logging::log_to_file(&opts.log_file, opts.log_level)?;
    info!("Starting Galactic Invaders.");
    for arg in &opts.unknown {
        warn!("Ignoring unknown argument {:?}", arg);
    }

    let sprites = match &opts.assets {
        Some(dir) => SpriteSheet::load(dir),
        None => SpriteSheet::builtin(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                error!("Failed to read terminal event: {}", e);
                break;
            }
        }
    });

    let result = game_loop(&mut out, &rx, &opts, &sprites);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("Exiting.");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parse_args_defaults() {
        let opts = parse_args(args(&[]));
        assert!(opts.assets.is_none());
        assert_eq!(opts.log_file, "galactic_invaders.log");
        assert!(opts.show_stars);
        assert!(!opts.mute);
    }

    #[test]
    fn parse_args_reads_every_flag() {
        let opts = parse_args(args(&[
            "--assets", "art", "--log", "x.log", "--no-stars", "--mute", "--verbose", "--bogus",
        ]));
        assert_eq!(opts.assets, Some(PathBuf::from("art")));
        assert_eq!(opts.log_file, "x.log");
        assert!(!opts.show_stars);
        assert!(opts.mute);
        assert_eq!(opts.log_level, LevelFilter::Debug);
        assert_eq!(opts.unknown, vec!["--bogus".to_string()]);
    }
}

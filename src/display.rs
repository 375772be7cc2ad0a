/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only projects
/// playfield units onto terminal cells and translates state into terminal
/// commands.  Paused and finished sessions are drawn the same way, with an
/// overlay on top.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use galactic_invaders::constants::{CELL_H, CELL_W};
use galactic_invaders::entities::{
    Alien, Asteroid, Bullet, BulletOwner, Effect, EffectKind, GameState, GameStatus, Satellite,
    Star,
};
use galactic_invaders::sprites::{legend_for_level, SatelliteArt, Sprite, SpriteSheet};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKDROP_STAR: Color = Color::DarkBlue;
const C_MINI_STAR: Color = Color::Grey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HITS: Color = Color::DarkRed;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_LEGEND: Color = Color::DarkGrey;
const C_HUD_LIVES: Color = Color::Cyan;
const C_POWERUP_ACTIVE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_SPECIAL: Color = Color::Magenta;
const C_ASTEROID: Color = Color::DarkGrey;
const C_SATELLITE: Color = Color::Cyan;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ALIEN: Color = Color::Red;
const C_BONUS_BURST: Color = Color::Yellow;
const C_PICKUP_TEXT: Color = Color::Green;
const C_HINT: Color = Color::DarkGrey;

/// Rows above the playfield (HUD) and below it (controls hint).
const HUD_ROWS: u16 = 1;
const HINT_ROWS: u16 = 1;

/// Presentation choices that live outside the simulation.
pub struct View<'a> {
    pub sprites: &'a SpriteSheet,
    pub show_stars: bool,
}

/// Playfield size in units for a terminal of `cols` × `rows`.
pub fn playfield_size(cols: u16, rows: u16) -> (f32, f32) {
    let play_rows = rows.saturating_sub(HUD_ROWS + HINT_ROWS);
    (cols as f32 * CELL_W, play_rows as f32 * CELL_H)
}

/// Terminal cell grid the state was sized for.
struct Grid {
    cols: i32,
    rows: i32,
}

impl Grid {
    fn of(state: &GameState) -> Self {
        Grid {
            cols: (state.width / CELL_W) as i32,
            rows: (state.height / CELL_H) as i32,
        }
    }

    fn col(x: f32) -> i32 {
        (x / CELL_W).floor() as i32
    }

    fn row(y: f32) -> i32 {
        (y / CELL_H).floor() as i32
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: &View) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let grid = Grid::of(state);

    if view.show_stars {
        for star in &state.stars {
            draw_star(out, &grid, star, C_BACKDROP_STAR)?;
        }
    }
    for star in &state.mini_stars {
        draw_star(out, &grid, star, C_MINI_STAR)?;
    }

    for satellite in &state.satellites {
        draw_satellite(out, &grid, satellite, view.sprites)?;
    }
    for asteroid in &state.asteroids {
        draw_asteroid(out, &grid, asteroid)?;
    }
    for alien in &state.aliens {
        draw_alien(out, &grid, alien, view.sprites)?;
    }
    for bullet in state.bullets.iter().chain(&state.alien_bullets) {
        draw_bullet(out, &grid, bullet)?;
    }

    let (px, py) = state.player.rect().center();
    draw_sprite(out, &grid, &view.sprites.player, px, py, C_PLAYER)?;

    for effect in &state.effects {
        draw_effect(out, &grid, effect)?;
    }

    draw_hud(out, state)?;
    draw_controls_hint(out, &grid)?;

    match state.status {
        GameStatus::Paused => draw_paused(out, &grid)?,
        GameStatus::GameOver => draw_game_over(out, &grid, state)?,
        GameStatus::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, (grid.rows + 1) as u16))?;
    out.flush()?;
    Ok(())
}

// ── Cell plumbing ─────────────────────────────────────────────────────────────

/// Print `text` at a playfield cell, clipping whatever falls outside.
fn put<W: Write>(
    out: &mut W,
    grid: &Grid,
    col: i32,
    row: i32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    if row < 0 || row >= grid.rows {
        return Ok(());
    }
    put_row(out, grid, col, (row + HUD_ROWS as i32) as u16, text, color)
}

/// Print `text` on an absolute terminal row, clipped to the grid's columns.
fn put_row<W: Write>(
    out: &mut W,
    grid: &Grid,
    col: i32,
    term_row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let skip = (-col).max(0) as usize;
    let room = (grid.cols - col.max(0)).max(0) as usize;
    let visible: String = text.chars().skip(skip).take(room).collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col.max(0) as u16, term_row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(visible))?;
    Ok(())
}

/// Draw a sprite centred on a playfield point.  Blank cells stay transparent
/// only at the row edges.
fn draw_sprite<W: Write>(
    out: &mut W,
    grid: &Grid,
    sprite: &Sprite,
    cx: f32,
    cy: f32,
    color: Color,
) -> std::io::Result<()> {
    let left = Grid::col(cx) - sprite.width() as i32 / 2;
    let top = Grid::row(cy) - sprite.height() as i32 / 2;
    for (i, line) in sprite.rows().iter().enumerate() {
        let indent = line.chars().take_while(|c| *c == ' ').count();
        put(out, grid, left + indent as i32, top + i as i32, line.trim(), color)?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_star<W: Write>(out: &mut W, grid: &Grid, star: &Star, color: Color) -> std::io::Result<()> {
    let glyph = if star.radius > 0.9 { "+" } else { "." };
    put(out, grid, Grid::col(star.x), Grid::row(star.y), glyph, color)
}

fn draw_alien<W: Write>(
    out: &mut W,
    grid: &Grid,
    alien: &Alien,
    sprites: &SpriteSheet,
) -> std::io::Result<()> {
    let (cx, cy) = alien.rect().center();
    if alien.is_special() {
        draw_sprite(out, grid, sprites.special(), cx, cy, C_SPECIAL)
    } else {
        draw_sprite(out, grid, sprites.alien_for_level(alien.spawn_level), cx, cy, C_ALIEN)
    }
}

fn draw_asteroid<W: Write>(out: &mut W, grid: &Grid, asteroid: &Asteroid) -> std::io::Result<()> {
    // Rough rock: a shaded block whose core glyph turns with the rotation.
    const CORES: [&str; 4] = ["◐", "◓", "◑", "◒"];
    let quarter = (asteroid.rotation.rem_euclid(std::f32::consts::TAU) / std::f32::consts::FRAC_PI_2) as usize;
    let cols = ((asteroid.w / CELL_W).round() as usize).max(2);
    let rows = ((asteroid.h / CELL_H).round() as usize).max(1);
    let left = Grid::col(asteroid.x);
    let top = Grid::row(asteroid.y);
    for r in 0..rows {
        put(out, grid, left, top + r as i32, &"▓".repeat(cols), C_ASTEROID)?;
    }
    put(
        out,
        grid,
        left + cols as i32 / 2,
        top + rows as i32 / 2,
        CORES[quarter % CORES.len()],
        C_ASTEROID,
    )
}

fn draw_satellite<W: Write>(
    out: &mut W,
    grid: &Grid,
    satellite: &Satellite,
    sprites: &SpriteSheet,
) -> std::io::Result<()> {
    let (cx, cy) = satellite.rect().center();
    match sprites.satellite(satellite.tier) {
        SatelliteArt::Sprite(sprite) => draw_sprite(out, grid, sprite, cx, cy, C_SATELLITE),
        SatelliteArt::Placeholder(glyph) => {
            let label = format!("{}{}", glyph, satellite.lives_granted());
            put(out, grid, Grid::col(cx), Grid::row(cy), &label, C_SATELLITE)
        }
    }
}

fn draw_bullet<W: Write>(out: &mut W, grid: &Grid, bullet: &Bullet) -> std::io::Result<()> {
    let (cx, cy) = bullet.rect().center();
    let (glyph, color) = match bullet.owner {
        BulletOwner::Player => ("║", C_BULLET_PLAYER),
        BulletOwner::Alien => ("↓", C_BULLET_ALIEN),
    };
    put(out, grid, Grid::col(cx), Grid::row(cy), glyph, color)
}

fn draw_effect<W: Write>(out: &mut W, grid: &Grid, effect: &Effect) -> std::io::Result<()> {
    let (text, color) = match effect.kind {
        EffectKind::BonusBurst => (format!("✸ {} ✸", effect.text), C_BONUS_BURST),
        EffectKind::PickupText => (effect.text.clone(), C_PICKUP_TEXT),
    };
    let col = Grid::col(effect.x) - text.chars().count() as i32 / 2;
    put(out, grid, col, Grid::row(effect.y), &text, color)
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let cols = (state.width / CELL_W) as u16;

    // Score, hits, level and alien legend — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>5}", state.score)))?;
    out.queue(style::SetForegroundColor(C_HUD_HITS))?;
    out.queue(Print(format!("  Hits:{:>3}", state.hits)))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("  Level:{:>3}", state.level)))?;
    out.queue(style::SetForegroundColor(C_HUD_LEGEND))?;
    out.queue(Print(format!("  [{}]", legend_for_level(state.level))))?;

    // Power-up tag + lives — right
    let power_tag = if state.player.double_shot { "[⇈ DOUBLE] " } else { "" };
    let lives_str = if state.lives <= 10 {
        format!("Lives:{}", "■".repeat(state.lives as usize))
    } else {
        format!("Lives:■×{}", state.lives)
    };
    let right_len = (power_tag.chars().count() + lives_str.chars().count()) as u16;
    out.queue(cursor::MoveTo(cols.saturating_sub(right_len + 1), 0))?;
    if !power_tag.is_empty() {
        out.queue(style::SetForegroundColor(C_POWERUP_ACTIVE))?;
        out.queue(Print(power_tag))?;
    }
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    put_row(
        out,
        grid,
        1,
        (grid.rows + HUD_ROWS as i32) as u16,
        "←→↑↓ / WASD : Move   SPACE : Shoot   P : Pause   T : Stars   R : Restart   Q : Quit",
        C_HINT,
    )
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered_lines<W: Write>(
    out: &mut W,
    grid: &Grid,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let start_row = grid.rows / 2 - lines.len() as i32 / 2;
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = grid.cols / 2 - msg.chars().count() as i32 / 2;
        put(out, grid, col, start_row + i as i32, msg, *color)?;
    }
    Ok(())
}

fn draw_paused<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    draw_centered_lines(
        out,
        grid,
        &[
            ("╔══════════════════╗", Color::Cyan),
            ("║      PAUSED      ║", Color::Cyan),
            ("╚══════════════════╝", Color::Cyan),
            ("P - Resume  Q - Quit", Color::White),
        ],
    )
}

fn draw_game_over<W: Write>(out: &mut W, grid: &Grid, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    draw_centered_lines(
        out,
        grid,
        &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (score_line.as_str(), Color::Yellow),
            ("R - Play Again  Q - Quit", Color::White),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use galactic_invaders::compute::init_state;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn playfield_excludes_hud_and_hint_rows() {
        let (w, h) = playfield_size(100, 40);
        assert_eq!(w, 100.0 * CELL_W);
        assert_eq!(h, 38.0 * CELL_H);
    }

    #[test]
    fn render_writes_a_frame_for_every_status() {
        let (w, h) = playfield_size(80, 30);
        let mut state = init_state(w, h, &mut StdRng::seed_from_u64(3));
        let sprites = SpriteSheet::builtin();
        let view = View { sprites: &sprites, show_stars: true };
        for status in [GameStatus::Playing, GameStatus::Paused, GameStatus::GameOver] {
            state.status = status;
            let mut buf: Vec<u8> = Vec::new();
            render(&mut buf, &state, &view).unwrap();
            assert!(!buf.is_empty());
        }
    }

    #[test]
    fn put_clips_offscreen_text() {
        let grid = Grid { cols: 10, rows: 5 };
        let mut buf: Vec<u8> = Vec::new();
        put(&mut buf, &grid, -3, 2, "abcdef", Color::White).unwrap();
        let written = String::from_utf8_lossy(&buf);
        assert!(written.contains("def"));
        assert!(!written.contains("abc"));

        let mut buf: Vec<u8> = Vec::new();
        put(&mut buf, &grid, 0, 7, "zzz", Color::White).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn controls_hint_fits_narrow_terminals() {
        let grid = Grid { cols: 20, rows: 5 };
        let mut buf: Vec<u8> = Vec::new();
        draw_controls_hint(&mut buf, &grid).unwrap();
        let written = String::from_utf8_lossy(&buf);
        assert!(written.contains("WASD"));
        assert!(!written.contains("Quit"));
    }
}

/// Glyph art for every entity, with graceful fallback.
///
/// Art can be overridden from a directory of plain-text files (one sprite per
/// file, one line per row).  Missing files never fail the game:
/// * an alien tier falls back to the nearest lower tier that loaded,
///   ending at the built-in tier-0 art;
/// * the special alien falls back to a secondary sprite;
/// * a satellite falls back to a placeholder glyph.

use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};

/// Alien art tiers: levels 1-2, 3-4, …, 11-12, 13+.
pub const ALIEN_TIERS: usize = 7;
pub const SATELLITE_TIERS: usize = 3;
pub const SATELLITE_PLACEHOLDER: char = '+';

const LEGENDS: [&str; ALIEN_TIERS] = [
    "Level 1-2",
    "Level 3-4",
    "Level 5-6",
    "Level 7-8",
    "Level 9-10",
    "Level 11-12",
    "Level 13+",
];

/// Art tier for aliens spawned at `level`.
pub fn tier_for_level(level: u32) -> usize {
    ((level.max(1) - 1) / 2).min(ALIEN_TIERS as u32 - 1) as usize
}

/// HUD legend for the alien type active at `level`.
pub fn legend_for_level(level: u32) -> &'static str {
    LEGENDS[tier_for_level(level)]
}

// ── Sprite ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    rows: Vec<String>,
}

impl Sprite {
    pub fn new(rows: &[&str]) -> Self {
        Sprite {
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Parse a text file body.  Trailing whitespace and trailing blank lines
    /// are dropped; an empty body yields `None`.
    pub fn parse(text: &str) -> Option<Sprite> {
        let mut rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        while rows.last().map_or(false, |r| r.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            None
        } else {
            Some(Sprite { rows })
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// What to draw for a satellite.
#[derive(Debug, PartialEq)]
pub enum SatelliteArt<'a> {
    Sprite(&'a Sprite),
    Placeholder(char),
}

// ── Built-in art ──────────────────────────────────────────────────────────────

fn builtin_player() -> Sprite {
    Sprite::new(&["  ▲  ", " /█\\ ", "<═╩═>"])
}

fn builtin_alien(tier: usize) -> Sprite {
    match tier {
        0 => Sprite::new(&["<-▼->", " [_] "]),
        1 => Sprite::new(&["(◉_◉)", " /^\\ "]),
        2 => Sprite::new(&["{▓▓▓}", " ╵ ╵ "]),
        3 => Sprite::new(&["<◆◆◆>", " \\_/ "]),
        4 => Sprite::new(&["[o_o]", " ╱ ╲ "]),
        5 => Sprite::new(&["«◎-◎»", " ╲▾╱ "]),
        _ => Sprite::new(&["╠◉◉◉╣", " ▼▼▼ "]),
    }
}

fn builtin_special() -> Sprite {
    Sprite::new(&["╭══════╮", "║◉ ◉◉ ◉║", "╰▼────▼╯"])
}

fn builtin_special_secondary() -> Sprite {
    Sprite::new(&["<██████>", " ◉ ◉◉ ◉ ", "  ▼  ▼  "])
}

fn builtin_satellite(tier: usize) -> Sprite {
    match tier {
        0 => Sprite::new(&["-o-"]),
        1 => Sprite::new(&["=◊="]),
        _ => Sprite::new(&["≡*≡"]),
    }
}

fn alien_file(tier: usize) -> String {
    if tier == 0 {
        "alien.txt".to_string()
    } else {
        format!("alien{}.txt", tier + 1)
    }
}

fn read_sprite(path: &Path) -> io::Result<Sprite> {
    let text = fs::read_to_string(path)?;
    Sprite::parse(&text).ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "empty sprite"))
}

/// Load one override, logging and swallowing failures.
fn try_load(dir: &Path, name: &str) -> Option<Sprite> {
    let path = dir.join(name);
    match read_sprite(&path) {
        Ok(sprite) => Some(sprite),
        Err(e) => {
            warn!("Sprite {} unavailable ({}); using fallback", path.display(), e);
            None
        }
    }
}

// ── Sprite sheet ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct SpriteSheet {
    pub player: Sprite,
    /// Last resort for every alien tier.
    base_alien: Sprite,
    aliens: [Option<Sprite>; ALIEN_TIERS],
    special: Option<Sprite>,
    special_secondary: Sprite,
    satellites: [Option<Sprite>; SATELLITE_TIERS],
}

impl SpriteSheet {
    /// Every sprite from the built-in art.
    pub fn builtin() -> Self {
        let mut sheet = Self::bare();
        for tier in 0..ALIEN_TIERS {
            sheet.aliens[tier] = Some(builtin_alien(tier));
        }
        sheet.special = Some(builtin_special());
        for tier in 0..SATELLITE_TIERS {
            sheet.satellites[tier] = Some(builtin_satellite(tier));
        }
        sheet
    }

    /// Only what the fallback chain needs: player, tier-0 alien and the
    /// secondary special sprite.
    fn bare() -> Self {
        SpriteSheet {
            player: builtin_player(),
            base_alien: builtin_alien(0),
            aliens: Default::default(),
            special: None,
            special_secondary: builtin_special_secondary(),
            satellites: Default::default(),
        }
    }

    /// Load art from `dir`.  Files: `player.txt`, `alien.txt`,
    /// `alien2.txt` … `alien7.txt`, `special.txt`, `satellite1.txt` …
    /// `satellite3.txt`.
    pub fn load(dir: &Path) -> Self {
        let mut sheet = Self::bare();
        if let Some(player) = try_load(dir, "player.txt") {
            sheet.player = player;
        }
        for tier in 0..ALIEN_TIERS {
            sheet.aliens[tier] = try_load(dir, &alien_file(tier));
        }
        sheet.special = try_load(dir, "special.txt");
        for tier in 0..SATELLITE_TIERS {
            sheet.satellites[tier] = try_load(dir, &format!("satellite{}.txt", tier + 1));
        }
        let loaded = sheet.aliens.iter().filter(|a| a.is_some()).count();
        info!("Loaded {} of {} alien tiers from {}", loaded, ALIEN_TIERS, dir.display());
        sheet
    }

    /// Art for an alien tier; a missing tier borrows the nearest lower one.
    pub fn alien(&self, tier: usize) -> &Sprite {
        let top = tier.min(ALIEN_TIERS - 1);
        (0..=top)
            .rev()
            .find_map(|t| self.aliens[t].as_ref())
            .unwrap_or(&self.base_alien)
    }

    pub fn alien_for_level(&self, level: u32) -> &Sprite {
        self.alien(tier_for_level(level))
    }

    pub fn special(&self) -> &Sprite {
        self.special.as_ref().unwrap_or(&self.special_secondary)
    }

    pub fn satellite(&self, tier: usize) -> SatelliteArt<'_> {
        match self.satellites.get(tier).and_then(Option::as_ref) {
            Some(sprite) => SatelliteArt::Sprite(sprite),
            None => SatelliteArt::Placeholder(SATELLITE_PLACEHOLDER),
        }
    }
}

#![forbid(unsafe_code)]

//! Character-level text effects: decrypt reveal and glitch corruption.
//!
//! Both effects are tick-driven and take the rng by argument, so a frame
//! sequence is fully determined by (text, config, seed). Punctuation that
//! carries the site's visual language (`_`, `.`, `-`, separators) is locked
//! and never scrambled.
//!
//! # Invariants
//!
//! 1. A frame always has the same character count as the source text.
//! 2. Locked characters render literally in every frame.
//! 3. `DecryptReveal` resolves monotonically: once a character is revealed
//!    it stays revealed, and the final frame equals the source text.

use rand::Rng;

/// Glyph pool for unresolved decrypt characters.
const SCRAMBLE_CHARS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?/~`";

/// Glyph pool for random-mode glitches.
const GLITCH_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+[]{}<>?/\\|";

/// Characters that are never scrambled.
fn is_locked(c: char) -> bool {
    matches!(c, ' ' | '_' | '.' | '-' | '>' | '/' | ':')
}

fn pick(pool: &[u8], rng: &mut impl Rng) -> char {
    pool[rng.random_range(0..pool.len())] as char
}

/// Visually-similar substitutions for glitch mode, upper-case keyed.
fn similar_options(upper: char) -> &'static [char] {
    match upper {
        'A' => &['A', '4', '@'],
        'B' => &['B', '8'],
        'C' => &['C', '(', '<'],
        'D' => &['D', '0'],
        'E' => &['E', '3'],
        'F' => &['F', '7'],
        'G' => &['G', '6'],
        'H' => &['H', '#'],
        'I' => &['I', '1', '|'],
        'J' => &['J', '7'],
        'K' => &['K', 'X'],
        'L' => &['L', '1', '|'],
        'M' => &['M', 'N', 'W'],
        'N' => &['N', 'M'],
        'O' => &['O', '0'],
        'P' => &['P', '9'],
        'Q' => &['Q', '0'],
        'R' => &['R', 'K'],
        'S' => &['S', '5', '$'],
        'T' => &['T', '7', '+'],
        'U' => &['U', 'V'],
        'V' => &['V', 'U'],
        'W' => &['W', 'M'],
        'X' => &['X', 'K'],
        'Y' => &['Y', 'V'],
        'Z' => &['Z', '2'],
        '0' => &['0', 'O'],
        '1' => &['1', 'I', '|'],
        '2' => &['2', 'Z'],
        '3' => &['3', 'E'],
        '4' => &['4', 'A'],
        '5' => &['5', 'S'],
        '6' => &['6', 'G'],
        '7' => &['7', 'T'],
        '8' => &['8', 'B'],
        '9' => &['9', 'P'],
        _ => &[],
    }
}

/// Pick a look-alike for `c`, preserving case. `None` when no substitution
/// exists or the retries kept landing on the original.
fn similar_char(c: char, rng: &mut impl Rng) -> Option<char> {
    let upper = c.to_ascii_uppercase();
    let options = similar_options(upper);
    if options.is_empty() {
        return None;
    }
    let mut next = options[rng.random_range(0..options.len())];
    let mut attempts = 0;
    while next == upper && attempts < 5 {
        next = options[rng.random_range(0..options.len())];
        attempts += 1;
    }
    if next == upper {
        return None;
    }
    if c.is_ascii_lowercase() && next.is_ascii_alphabetic() {
        Some(next.to_ascii_lowercase())
    } else {
        Some(next)
    }
}

// ---------------------------------------------------------------------------
// DecryptReveal
// ---------------------------------------------------------------------------

/// Characters resolved per tick (a character takes three ticks to settle).
const REVEAL_STEP: f32 = 1.0 / 3.0;

/// Progressive left-to-right reveal with a scrambled tail.
#[derive(Debug, Clone)]
pub struct DecryptReveal {
    chars: Vec<char>,
    iteration: f32,
}

impl DecryptReveal {
    /// Start a reveal over `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            iteration: 0.0,
        }
    }

    /// Whether every character has resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.iteration >= self.chars.len() as f32
    }

    /// Advance one tick and render the frame.
    pub fn tick(&mut self, rng: &mut impl Rng) -> String {
        let frame = self.frame(rng);
        if !self.is_resolved() {
            self.iteration += REVEAL_STEP;
        }
        frame
    }

    /// Render the current frame without advancing.
    pub fn frame(&self, rng: &mut impl Rng) -> String {
        self.chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if is_locked(c) || (i as f32) < self.iteration {
                    c
                } else {
                    pick(SCRAMBLE_CHARS, rng)
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// GlitchText
// ---------------------------------------------------------------------------

/// How glitched characters are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlitchMode {
    /// Look-alike substitutions, one active glitch at a time.
    #[default]
    Similar,
    /// Arbitrary glyphs, up to two concurrent glitches.
    Random,
}

/// Ticks a glitch stays on screen (min..=max).
const GLITCH_HOLD: std::ops::RangeInclusive<u64> = 2..=3;
/// Ticks between glitches of one character (min..=max).
const GLITCH_GAP: std::ops::RangeInclusive<u64> = 5..=26;

/// Sparse, per-character glitch corruption over a fixed text.
///
/// Each mutable character carries its own "next glitch at" tick, drawn
/// uniformly from [`GLITCH_GAP`]; when it fires (and the concurrency cap
/// allows), the character shows a substitute for a few ticks. Intended
/// cadence is ~80ms per tick.
#[derive(Debug, Clone)]
pub struct GlitchText {
    chars: Vec<char>,
    mode: GlitchMode,
    /// Per-character tick at which the next glitch may start.
    next_at: Vec<u64>,
    /// Per-character tick until which the current glitch holds.
    until: Vec<u64>,
    glyph: Vec<char>,
    tick: u64,
}

impl GlitchText {
    /// Create a glitcher over `text`. Initial schedules come from `rng`.
    pub fn new(text: &str, mode: GlitchMode, rng: &mut impl Rng) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let next_at = chars
            .iter()
            .map(|&c| {
                if is_locked(c) {
                    u64::MAX
                } else {
                    rng.random_range(GLITCH_GAP)
                }
            })
            .collect();
        let len = chars.len();
        Self {
            chars,
            mode,
            next_at,
            until: vec![0; len],
            glyph: vec![' '; len],
            tick: 0,
        }
    }

    /// Maximum concurrently glitched characters for the mode.
    fn max_active(&self) -> usize {
        match self.mode {
            GlitchMode::Similar => 1,
            GlitchMode::Random => 2,
        }
    }

    /// Whether any character is currently corrupted.
    #[must_use]
    pub fn is_glitching(&self) -> bool {
        self.until.iter().any(|&u| self.tick < u)
    }

    /// Advance one tick and render the frame.
    pub fn tick(&mut self, rng: &mut impl Rng) -> String {
        self.tick += 1;
        let now = self.tick;
        let mut active = self.until.iter().filter(|&&u| now < u).count();

        for i in 0..self.chars.len() {
            if now < self.next_at[i] || active >= self.max_active() {
                continue;
            }
            let c = self.chars[i];
            let substitute = match self.mode {
                GlitchMode::Similar => similar_char(c, rng),
                GlitchMode::Random => Some(pick(GLITCH_CHARS, rng)),
            };
            if let Some(glyph) = substitute
                && glyph != c
            {
                self.glyph[i] = glyph;
                self.until[i] = now + rng.random_range(GLITCH_HOLD);
                active += 1;
            }
            self.next_at[i] = now + rng.random_range(GLITCH_GAP);
        }

        self.chars
            .iter()
            .enumerate()
            .map(|(i, &c)| if now < self.until[i] { self.glyph[i] } else { c })
            .collect()
    }
}

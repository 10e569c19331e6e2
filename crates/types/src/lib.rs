//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the scorer.
//! All types are plain data with no behavior beyond classification and formatting,
//! making them usable in any context (frame validation, scoring, serialized score cards).
//!
//! # Game Shape
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PINS` | 10 | Pins standing at the start of every frame |
//! | `REGULAR_FRAMES` | 9 | Two-throw frames before the final frame |
//! | `FRAMES_PER_GAME` | 10 | Regular frames plus the final frame |
//! | `MAX_THROWS` | 21 | Longest possible throw stream (9 × 2 + 3) |
//! | `PERFECT_SCORE` | 300 | Twelve strikes in a row |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{Mark, ScoreLine, FRAMES_PER_GAME, PINS};
//!
//! // Parse a mark (case-insensitive)
//! assert_eq!(Mark::from_str("Strike"), Some(Mark::Strike));
//! assert_eq!(Mark::Spare.symbol(), Some('/'));
//!
//! // One row of a score card
//! let line = ScoreLine::new("X", 30, 30);
//! assert_eq!(line.display, "X");
//!
//! assert_eq!(PINS, 10);
//! assert_eq!(FRAMES_PER_GAME, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Pins standing at the start of a frame (10)
pub const PINS: u8 = 10;

/// Number of two-throw frames that precede the final frame (9)
pub const REGULAR_FRAMES: usize = 9;

/// Frames in a complete game (10)
pub const FRAMES_PER_GAME: usize = REGULAR_FRAMES + 1;

/// Upper bound on throws in one game: two per regular frame plus three in the final frame
pub const MAX_THROWS: usize = REGULAR_FRAMES * 2 + 3;

/// Score of a perfect game (300)
pub const PERFECT_SCORE: u32 = 300;

/// Pins knocked down by a single throw (0-10)
pub type Throw = u8;


/// How a frame was closed out
///
/// - **Strike**: all ten pins on the first throw
/// - **Spare**: all ten pins across both throws, without a strike
/// - **Open**: pins left standing after the second throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Strike,
    Spare,
    Open,
}

impl Mark {
    /// Parse mark from string (case-insensitive)
    ///
    /// Accepts full names or the scorecard symbols "x" and "/".
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::Mark;
    ///
    /// assert_eq!(Mark::from_str("X"), Some(Mark::Strike));
    /// assert_eq!(Mark::from_str("spare"), Some(Mark::Spare));
    /// assert_eq!(Mark::from_str("open"), Some(Mark::Open));
    /// assert_eq!(Mark::from_str("split"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strike" | "x" => Some(Mark::Strike),
            "spare" | "/" => Some(Mark::Spare),
            "open" => Some(Mark::Open),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Strike => "strike",
            Mark::Spare => "spare",
            Mark::Open => "open",
        }
    }

    /// Scorecard symbol for the mark, if it has one
    pub fn symbol(&self) -> Option<char> {
        match self {
            Mark::Strike => Some('X'),
            Mark::Spare => Some('/'),
            Mark::Open => None,
        }
    }

    /// Whether the mark earns lookahead bonus throws
    pub fn earns_bonus(&self) -> bool {
        !matches!(self, Mark::Open)
    }
}

/// One scored row of a score card: what the frame shows, what it scored,
/// and the running total through that frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreLine {
    pub display: String,
    pub frame_score: u32,
    pub cumulative: u32,
}

impl ScoreLine {
    pub fn new(display: impl Into<String>, frame_score: u32, cumulative: u32) -> Self {
        Self {
            display: display.into(),
            frame_score,
            cumulative,
        }
    }
}

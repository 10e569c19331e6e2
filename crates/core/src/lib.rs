//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the frame rules, game lifecycle and score calculation.
//! It has **zero dependencies** on UI, storage, or I/O, making it:
//!
//! - **Deterministic**: The same frames always produce the same score card
//! - **Testable**: Every rule is covered by unit tests beside the code
//! - **Portable**: Can be embedded in any front end (terminal, web, lane hardware)
//! - **Fast**: Fixed-capacity storage; scoring allocates only the display strings
//!
//! # Module Structure
//!
//! - [`frame`]: Regular and final frames, validated at construction
//! - [`game`]: Nine regular frames plus the final frame, with lifecycle checks
//! - [`scoring`]: Frame scores with strike/spare lookahead over the flattened throw stream
//! - [`snapshot`]: Serializable score card with row rendering
//! - [`error`]: Frame and game errors
//!
//! # Game Rules
//!
//! - **Strike**: 10 plus the next two throws, wherever they fall
//! - **Spare**: 10 plus the next throw
//! - **Open frame**: pins knocked down
//! - **Final frame**: a strike or spare earns a fill ball; the frame scores its own throws
//!
//! # Example
//!
//! ```
//! use tenpin_core::{FinalFrame, Frame, Game};
//!
//! let mut game = Game::new();
//! for _ in 0..9 {
//!     game.add_frame(Frame::strike()).unwrap();
//! }
//! game.end_game(FinalFrame::new(10, 10, Some(10)).unwrap()).unwrap();
//!
//! assert!(game.is_complete());
//! let scores = game.scores();
//! assert_eq!(scores.len(), 10);
//! assert_eq!(scores[9].cumulative, 300);
//! ```
//!
//! # Logging
//!
//! Frame additions, rejections and game completion are reported through `tracing` at
//! debug level, and per-frame scoring at trace level. No subscriber is installed here.

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use error::{FrameError, GameError, GameResult};
pub use frame::{FinalFrame, Frame, FrameThrows, GameFrame};
pub use game::Game;
pub use scoring::{calculate_frame_scores, running_totals, score_frames};
pub use snapshot::ScoreCard;

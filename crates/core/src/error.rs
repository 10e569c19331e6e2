//! Error types for frame construction and game assembly.

use thiserror::Error;

use crate::types::Throw;

/// Result type alias for game operations.
pub type GameResult<T> = std::result::Result<T, GameError>;

/// Why a set of throws cannot form a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    /// A single throw knocked down more pins than stand on the deck
    #[error("throw of {throw} pins is out of range 0-10")]
    ThrowOutOfRange { throw: Throw },

    /// Two throws of a regular frame add up to more than ten pins
    #[error("throws {first} and {second} knock down more than 10 pins")]
    TooManyPins { first: Throw, second: Throw },

    /// Final frame carries a fill ball without a strike or spare
    #[error("fill ball {fill} not earned by open final frame {first} {second}")]
    UnearnedFill {
        first: Throw,
        second: Throw,
        fill: Throw,
    },
}

/// Errors reported while adding frames to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid frame: {0}")]
    InvalidFrame(#[from] FrameError),

    /// An eleventh regular frame was offered; the tenth must be a final frame
    #[error("too many frames: a game holds 9 regular frames before the final frame")]
    TooManyFrames,

    /// The final frame was offered before all regular frames were played
    #[error("premature final frame: only {regular_frames} of 9 regular frames played")]
    PrematureFinalFrame { regular_frames: usize },

    #[error("game already complete")]
    GameAlreadyComplete,

    /// A roll sequence ended partway through a frame
    #[error("frame {frame} is missing its second throw")]
    UnfinishedFrame { frame: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_error_display() {
        let err = FrameError::TooManyPins {
            first: 10,
            second: 1,
        };
        assert_eq!(err.to_string(), "throws 10 and 1 knock down more than 10 pins");

        let err = FrameError::UnearnedFill {
            first: 2,
            second: 5,
            fill: 3,
        };
        assert!(err.to_string().contains("fill ball 3"));
    }

    #[test]
    fn game_error_wraps_frame_error() {
        let err: GameError = FrameError::ThrowOutOfRange { throw: 11 }.into();
        assert_eq!(err, GameError::InvalidFrame(FrameError::ThrowOutOfRange { throw: 11 }));
        assert_eq!(err.to_string(), "invalid frame: throw of 11 pins is out of range 0-10");
    }

    #[test]
    fn premature_final_frame_reports_progress() {
        let err = GameError::PrematureFinalFrame { regular_frames: 4 };
        assert!(err.to_string().contains("only 4 of 9"));
    }
}

//! Game module - frame sequencing and lifecycle
//!
//! A game is nine regular frames followed by one final frame. Frames are appended in
//! order and the game completes when the final frame is added; after that every append
//! is rejected.
//!
//! ```text
//! Open (0..=9 regular frames) --end_game--> Complete
//! ```

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::{GameError, GameResult};
use crate::frame::{FinalFrame, Frame, GameFrame};
use crate::scoring::score_frames;
use crate::snapshot::ScoreCard;
use crate::types::{ScoreLine, Throw, FRAMES_PER_GAME, PINS, REGULAR_FRAMES};

/// One player's game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    frames: ArrayVec<Frame, REGULAR_FRAMES>,
    final_frame: Option<FinalFrame>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a game from a raw sequence of rolls
    ///
    /// Rolls are split into frames the way a scorer would record them: a strike closes
    /// a regular frame after one roll, anything else after two. The final frame takes
    /// two rolls plus a fill ball when the first two reach ten pins.
    ///
    /// A partial sequence yields an open game. A sequence that stops partway through a
    /// frame is an error, as is any roll after the final frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_core::Game;
    ///
    /// let game = Game::from_rolls(&[10; 12]).unwrap();
    /// assert!(game.is_complete());
    /// assert_eq!(game.total(), 300);
    /// ```
    pub fn from_rolls(rolls: &[Throw]) -> GameResult<Self> {
        let mut game = Self::new();
        let mut rest = rolls;

        while !rest.is_empty() {
            if game.is_complete() {
                return Err(GameError::GameAlreadyComplete);
            }
            let frame_number = game.frame_count() + 1;

            if game.frames.len() < REGULAR_FRAMES {
                let (frame, used) = match rest {
                    [first, ..] if *first == PINS => (Frame::strike(), 1),
                    [first, second, ..] => (Frame::new(*first, *second)?, 2),
                    [first, ..] => {
                        Frame::new(*first, 0)?;
                        return Err(GameError::UnfinishedFrame {
                            frame: frame_number,
                        });
                    }
                    [] => break,
                };
                game.add_frame(frame)?;
                rest = &rest[used..];
            } else {
                let (first, second) = match rest {
                    [first, second, ..] => (*first, *second),
                    _ => {
                        return Err(GameError::UnfinishedFrame {
                            frame: frame_number,
                        })
                    }
                };
                let earned = u16::from(first) + u16::from(second) >= u16::from(PINS);
                let fill = if earned { rest.get(2).copied() } else { None };
                game.end_game(FinalFrame::new(first, second, fill)?)?;
                rest = &rest[2 + usize::from(fill.is_some())..];
            }
        }

        Ok(game)
    }

    /// Append one of the nine regular frames
    pub fn add_frame(&mut self, frame: Frame) -> GameResult<()> {
        if self.is_complete() {
            debug!(error = %GameError::GameAlreadyComplete, "frame rejected");
            return Err(GameError::GameAlreadyComplete);
        }
        if self.frames.is_full() {
            debug!(error = %GameError::TooManyFrames, "frame rejected");
            return Err(GameError::TooManyFrames);
        }
        self.frames.push(frame);
        debug!(
            frame = self.frames.len(),
            mark = frame.mark().as_str(),
            "frame added"
        );
        Ok(())
    }

    /// Add the final frame, completing the game
    pub fn end_game(&mut self, frame: FinalFrame) -> GameResult<()> {
        if self.is_complete() {
            debug!(error = %GameError::GameAlreadyComplete, "final frame rejected");
            return Err(GameError::GameAlreadyComplete);
        }
        if !self.frames.is_full() {
            let err = GameError::PrematureFinalFrame {
                regular_frames: self.frames.len(),
            };
            debug!(error = %err, "final frame rejected");
            return Err(err);
        }
        self.final_frame = Some(frame);
        debug!(total = self.total(), "game complete");
        Ok(())
    }

    /// Append either kind of frame
    pub fn add(&mut self, frame: GameFrame) -> GameResult<()> {
        match frame {
            GameFrame::Regular(frame) => self.add_frame(frame),
            GameFrame::Final(frame) => self.end_game(frame),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.final_frame.is_some()
    }

    /// Number of frames held, final frame included
    pub fn frame_count(&self) -> usize {
        self.frames.len() + usize::from(self.final_frame.is_some())
    }

    pub fn regular_frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn final_frame(&self) -> Option<FinalFrame> {
        self.final_frame
    }

    /// Frames held so far, in the order they were added
    pub fn frames(&self) -> ArrayVec<GameFrame, FRAMES_PER_GAME> {
        self.frames
            .iter()
            .copied()
            .map(GameFrame::Regular)
            .chain(self.final_frame.map(GameFrame::Final))
            .collect()
    }

    /// Display string, frame score and running total for every frame held
    ///
    /// Scores of an incomplete game are provisional: a strike or spare whose bonus
    /// throws have not been played yet is scored without them.
    pub fn scores(&self) -> Vec<ScoreLine> {
        score_frames(&self.frames())
    }

    /// Running total through the last frame held
    pub fn total(&self) -> u32 {
        self.scores().last().map_or(0, |line| line.cumulative)
    }

    pub fn snapshot_into(&self, out: &mut ScoreCard) {
        out.lines = self.scores();
        out.complete = self.is_complete();
    }

    pub fn score_card(&self) -> ScoreCard {
        let mut card = ScoreCard::default();
        self.snapshot_into(&mut card);
        card
    }
}

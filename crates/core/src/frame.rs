//! Frame module - validated throws for a single frame
//!
//! A regular frame holds at most two throws that together never exceed ten pins.
//! The final (tenth) frame resets the deck after a strike or spare, so its throws are
//! only checked individually, and it may carry a third "fill" throw once earned.
//!
//! Both kinds are unified by [`GameFrame`], which is what the scoring engine consumes.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::FrameError;
use crate::types::{Mark, Throw, PINS};

/// Throws a frame contributes to the flattened throw stream (at most three)
pub type FrameThrows = ArrayVec<Throw, 3>;

#[inline]
fn check_throw(throw: Throw) -> Result<Throw, FrameError> {
    if throw > PINS {
        return Err(FrameError::ThrowOutOfRange { throw });
    }
    Ok(throw)
}

fn classify(first: Throw, second: Throw) -> Mark {
    if first == PINS {
        Mark::Strike
    } else if first + second == PINS {
        Mark::Spare
    } else {
        Mark::Open
    }
}

/// One of the nine regular frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    first: Throw,
    second: Throw,
}

impl Frame {
    /// Create a frame from two throws
    ///
    /// A strike is written as `(10, 0)`; see [`Frame::strike`].
    pub fn new(first: Throw, second: Throw) -> Result<Self, FrameError> {
        let first = check_throw(first)?;
        let second = check_throw(second)?;
        if first + second > PINS {
            return Err(FrameError::TooManyPins { first, second });
        }
        Ok(Self { first, second })
    }

    pub fn strike() -> Self {
        Self {
            first: PINS,
            second: 0,
        }
    }

    pub fn first(&self) -> Throw {
        self.first
    }

    pub fn second(&self) -> Throw {
        self.second
    }

    pub fn mark(&self) -> Mark {
        classify(self.first, self.second)
    }

    pub fn is_strike(&self) -> bool {
        self.first == PINS
    }

    pub fn is_spare(&self) -> bool {
        !self.is_strike() && self.first + self.second == PINS
    }

    pub fn is_open(&self) -> bool {
        self.first + self.second < PINS
    }

    /// Pins knocked down in this frame alone
    pub fn total(&self) -> u32 {
        u32::from(self.first) + u32::from(self.second)
    }

    /// Throws this frame contributes to the throw stream
    ///
    /// A strike contributes a single throw; the unused second ball is not a throw.
    pub fn to_throws(&self) -> FrameThrows {
        let mut throws = FrameThrows::new();
        throws.push(self.first);
        if !self.is_strike() {
            throws.push(self.second);
        }
        throws
    }

    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mark() {
            Mark::Strike => f.write_str("X"),
            Mark::Spare => write!(f, "{}/", self.first),
            Mark::Open => write!(f, "{} {}", self.first, self.second),
        }
    }
}

/// The tenth frame, with an optional fill ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FinalFrame {
    first: Throw,
    second: Throw,
    fill: Option<Throw>,
}

impl FinalFrame {
    /// Create the final frame
    ///
    /// Each throw must be in range. A fill ball is only allowed when the first two
    /// throws reach ten pins; a strike or spare without its fill ball is accepted.
    pub fn new(first: Throw, second: Throw, fill: Option<Throw>) -> Result<Self, FrameError> {
        let first = check_throw(first)?;
        let second = check_throw(second)?;
        if let Some(fill) = fill {
            check_throw(fill)?;
            if first + second < PINS {
                return Err(FrameError::UnearnedFill {
                    first,
                    second,
                    fill,
                });
            }
        }
        Ok(Self {
            first,
            second,
            fill,
        })
    }

    pub fn first(&self) -> Throw {
        self.first
    }

    pub fn second(&self) -> Throw {
        self.second
    }

    pub fn fill(&self) -> Option<Throw> {
        self.fill
    }

    /// Strike, spare, or open
    ///
    /// The deck is not checked between the first two throws of the final frame, so
    /// `first < 10 && first + second > 10` is accepted. Such a frame has none of the
    /// strike/spare/open flags set; it earns no bonus, so it is marked [`Mark::Open`].
    pub fn mark(&self) -> Mark {
        classify(self.first, self.second)
    }

    pub fn is_strike(&self) -> bool {
        self.first == PINS
    }

    pub fn is_spare(&self) -> bool {
        !self.is_strike() && self.first + self.second == PINS
    }

    pub fn is_open(&self) -> bool {
        self.first + self.second < PINS
    }

    /// Pins knocked down across all throws, fill ball included
    pub fn total(&self) -> u32 {
        self.to_throws().iter().map(|&t| u32::from(t)).sum()
    }

    pub fn to_throws(&self) -> FrameThrows {
        let mut throws = FrameThrows::new();
        throws.push(self.first);
        throws.push(self.second);
        if let Some(fill) = self.fill {
            throws.push(fill);
        }
        throws
    }

    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FinalFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mark() {
            Mark::Strike => f.write_str("X"),
            Mark::Spare => {
                write!(f, "{}/", self.first)?;
                if let Some(fill) = self.fill {
                    write!(f, "{fill}")?;
                }
                Ok(())
            }
            Mark::Open => write!(f, "{} {}", self.first, self.second),
        }
    }
}

/// Either kind of frame, as held by a game and consumed by the scoring engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameFrame {
    Regular(Frame),
    Final(FinalFrame),
}

impl GameFrame {
    pub fn first(&self) -> Throw {
        match self {
            GameFrame::Regular(frame) => frame.first(),
            GameFrame::Final(frame) => frame.first(),
        }
    }

    pub fn second(&self) -> Throw {
        match self {
            GameFrame::Regular(frame) => frame.second(),
            GameFrame::Final(frame) => frame.second(),
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            GameFrame::Regular(frame) => frame.mark(),
            GameFrame::Final(frame) => frame.mark(),
        }
    }

    pub fn is_strike(&self) -> bool {
        match self {
            GameFrame::Regular(frame) => frame.is_strike(),
            GameFrame::Final(frame) => frame.is_strike(),
        }
    }

    pub fn is_spare(&self) -> bool {
        match self {
            GameFrame::Regular(frame) => frame.is_spare(),
            GameFrame::Final(frame) => frame.is_spare(),
        }
    }

    pub fn is_open(&self) -> bool {
        match self {
            GameFrame::Regular(frame) => frame.is_open(),
            GameFrame::Final(frame) => frame.is_open(),
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, GameFrame::Final(_))
    }

    pub fn total(&self) -> u32 {
        match self {
            GameFrame::Regular(frame) => frame.total(),
            GameFrame::Final(frame) => frame.total(),
        }
    }

    pub fn to_throws(&self) -> FrameThrows {
        match self {
            GameFrame::Regular(frame) => frame.to_throws(),
            GameFrame::Final(frame) => frame.to_throws(),
        }
    }

    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GameFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameFrame::Regular(frame) => fmt::Display::fmt(frame, f),
            GameFrame::Final(frame) => fmt::Display::fmt(frame, f),
        }
    }
}

impl From<Frame> for GameFrame {
    fn from(frame: Frame) -> Self {
        GameFrame::Regular(frame)
    }
}

impl From<FinalFrame> for GameFrame {
    fn from(frame: FinalFrame) -> Self {
        GameFrame::Final(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_throw_over_ten() {
        assert_eq!(
            Frame::new(11, 0),
            Err(FrameError::ThrowOutOfRange { throw: 11 })
        );
        assert_eq!(
            Frame::new(0, 11),
            Err(FrameError::ThrowOutOfRange { throw: 11 })
        );
    }

    #[test]
    fn test_rejects_frame_over_ten_pins() {
        assert_eq!(
            Frame::new(10, 1),
            Err(FrameError::TooManyPins {
                first: 10,
                second: 1
            })
        );
        assert!(Frame::new(1, 10).is_err());
        assert!(Frame::new(6, 5).is_err());
    }

    #[test]
    fn test_classification() {
        let strike = Frame::strike();
        assert!(strike.is_strike());
        assert!(!strike.is_spare());
        assert!(!strike.is_open());
        assert_eq!(strike.mark(), Mark::Strike);

        let spare = Frame::new(7, 3).unwrap();
        assert!(spare.is_spare());
        assert!(!spare.is_open());
        assert_eq!(spare.mark(), Mark::Spare);

        let open = Frame::new(6, 2).unwrap();
        assert!(open.is_open());
        assert_eq!(open.mark(), Mark::Open);

        // Gutter then all ten is a spare, not a strike.
        let late_spare = Frame::new(0, 10).unwrap();
        assert!(late_spare.is_spare());
        assert_eq!(late_spare.to_string(), "0/");
    }

    #[test]
    fn test_to_throws() {
        assert_eq!(Frame::strike().to_throws().as_slice(), &[10]);
        assert_eq!(Frame::new(7, 3).unwrap().to_throws().as_slice(), &[7, 3]);
        assert_eq!(Frame::new(0, 0).unwrap().to_throws().as_slice(), &[0, 0]);

        let last = FinalFrame::new(10, 10, Some(10)).unwrap();
        assert_eq!(last.to_throws().as_slice(), &[10, 10, 10]);
        let last = FinalFrame::new(2, 5, None).unwrap();
        assert_eq!(last.to_throws().as_slice(), &[2, 5]);
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(Frame::strike().display_string(), "X");
        assert_eq!(Frame::new(6, 4).unwrap().display_string(), "6/");
        assert_eq!(Frame::new(2, 6).unwrap().display_string(), "2 6");
    }

    #[test]
    fn test_final_frame_validation() {
        assert!(FinalFrame::new(11, 0, None).is_err());
        assert!(FinalFrame::new(0, 11, None).is_err());
        assert_eq!(
            FinalFrame::new(10, 10, Some(11)),
            Err(FrameError::ThrowOutOfRange { throw: 11 })
        );
        assert_eq!(
            FinalFrame::new(2, 5, Some(3)),
            Err(FrameError::UnearnedFill {
                first: 2,
                second: 5,
                fill: 3
            })
        );
        assert!(FinalFrame::new(10, 10, Some(10)).is_ok());
        assert!(FinalFrame::new(7, 3, Some(3)).is_ok());
        assert!(FinalFrame::new(7, 3, None).is_ok());
    }

    #[test]
    fn test_final_frame_display_strings() {
        assert_eq!(FinalFrame::new(10, 0, None).unwrap().to_string(), "X");
        assert_eq!(FinalFrame::new(10, 10, Some(10)).unwrap().to_string(), "X");
        assert_eq!(FinalFrame::new(2, 5, None).unwrap().to_string(), "2 5");
        assert_eq!(FinalFrame::new(7, 3, Some(3)).unwrap().to_string(), "7/3");
        assert_eq!(FinalFrame::new(7, 3, None).unwrap().to_string(), "7/");
    }

    #[test]
    fn test_final_frame_over_ten_without_strike() {
        let frame = FinalFrame::new(3, 10, Some(4)).unwrap();
        assert!(!frame.is_strike());
        assert!(!frame.is_spare());
        assert!(!frame.is_open());
        assert_eq!(frame.mark(), Mark::Open);
        assert!(!frame.mark().earns_bonus());
        assert_eq!(frame.to_string(), "3 10");
        assert_eq!(frame.total(), 17);
    }

    #[test]
    fn test_totals() {
        assert_eq!(Frame::strike().total(), 10);
        assert_eq!(Frame::new(1, 9).unwrap().total(), 10);
        assert_eq!(FinalFrame::new(10, 10, Some(10)).unwrap().total(), 30);
        assert_eq!(FinalFrame::new(7, 3, Some(3)).unwrap().total(), 13);
    }

    #[test]
    fn test_game_frame_delegates() {
        let regular: GameFrame = Frame::new(9, 1).unwrap().into();
        assert!(regular.is_spare());
        assert!(!regular.is_final());
        assert_eq!(regular.to_string(), "9/");

        let last: GameFrame = FinalFrame::new(7, 3, Some(3)).unwrap().into();
        assert!(last.is_final());
        assert_eq!(last.display_string(), "7/3");
        assert_eq!(last.to_throws().len(), 3);
    }
}

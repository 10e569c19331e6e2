//! Scoring module - ten-pin frame scores with strike and spare lookahead
//!
//! Scoring rules:
//! - Open frame: pins knocked down in the frame.
//! - Spare: 10 plus the next throw.
//! - Strike: 10 plus the next two throws. The bonus throws are taken from the flattened
//!   throw stream, so a strike followed by a strike reaches into the frame after next.
//! - Final frame: its own throws, fill ball included. It never looks ahead.
//!
//! Scoring a partial game is best effort: bonus throws that have not been thrown yet
//! count as nothing, so a trailing strike or spare is under-scored until the following
//! frames arrive.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::frame::GameFrame;
use crate::types::{Mark, ScoreLine, Throw, FRAMES_PER_GAME, MAX_THROWS, PINS};

/// Pin counts of every frame laid end to end, sized for the longest legal game
pub type ThrowStream = ArrayVec<Throw, MAX_THROWS>;

/// Per-frame values for one game
pub type FrameValues = ArrayVec<u32, FRAMES_PER_GAME>;

/// Flatten frames into a single throw stream
///
/// Returns the stream together with the index of each frame's first throw in it.
/// Frames past the tenth are ignored. Throws past `MAX_THROWS` are dropped, which only
/// happens for frame sequences no legal game produces (e.g. several final frames).
pub fn flatten_throws(frames: &[GameFrame]) -> (ThrowStream, ArrayVec<usize, FRAMES_PER_GAME>) {
    let mut stream = ThrowStream::new();
    let mut starts = ArrayVec::new();
    for frame in frames.iter().take(FRAMES_PER_GAME) {
        starts.push(stream.len());
        for throw in frame.to_throws() {
            if stream.try_push(throw).is_err() {
                break;
            }
        }
    }
    (stream, starts)
}

/// Sum up to `count` throws starting at `from`; throws not yet thrown count as zero
fn lookahead(stream: &[Throw], from: usize, count: usize) -> u32 {
    stream
        .iter()
        .skip(from)
        .take(count)
        .map(|&t| u32::from(t))
        .sum()
}

/// Score a single frame given the throw stream and the index of its first throw
pub fn calculate_frame_score(frame: &GameFrame, stream: &[Throw], start: usize) -> u32 {
    let frame = match frame {
        GameFrame::Final(last) => return last.total(),
        GameFrame::Regular(frame) => frame,
    };
    let mark = frame.mark();
    if !mark.earns_bonus() {
        return frame.total();
    }
    // Bonus throws start right after the strike ball, or after both spare balls.
    let (offset, count) = match mark {
        Mark::Strike => (1, 2),
        _ => (2, 1),
    };
    u32::from(PINS) + lookahead(stream, start + offset, count)
}

/// Score every frame
///
/// The throw stream is built once and each frame indexes into it.
pub fn calculate_frame_scores(frames: &[GameFrame]) -> FrameValues {
    let (stream, starts) = flatten_throws(frames);
    frames
        .iter()
        .zip(starts.iter())
        .enumerate()
        .map(|(i, (frame, &start))| {
            let score = calculate_frame_score(frame, &stream, start);
            trace!(frame = i + 1, mark = frame.mark().as_str(), score, "scored frame");
            score
        })
        .collect()
}

/// Running totals of a list of frame scores
pub fn running_totals(scores: &[u32]) -> FrameValues {
    scores
        .iter()
        .take(FRAMES_PER_GAME)
        .scan(0u32, |total, &score| {
            *total += score;
            Some(*total)
        })
        .collect()
}

/// Build the display/score/cumulative rows for a sequence of frames
pub fn score_frames(frames: &[GameFrame]) -> Vec<ScoreLine> {
    let scores = calculate_frame_scores(frames);
    let totals = running_totals(&scores);
    frames
        .iter()
        .zip(scores.iter().zip(totals.iter()))
        .map(|(frame, (&score, &total))| ScoreLine::new(frame.display_string(), score, total))
        .collect()
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::ScoreLine;

/// Scored view of a game at one point in time.
///
/// Renders as three space-separated rows: frame marks, frame scores, running totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreCard {
    pub lines: Vec<ScoreLine>,
    pub complete: bool,
}

impl ScoreCard {
    pub fn clear(&mut self) {
        self.lines.clear();
        self.complete = false;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Final running total, or 0 before the first frame
    pub fn total(&self) -> u32 {
        self.lines.last().map_or(0, |line| line.cumulative)
    }

    pub fn marks_row(&self) -> String {
        self.row(|line| line.display.clone())
    }

    pub fn scores_row(&self) -> String {
        self.row(|line| line.frame_score.to_string())
    }

    pub fn totals_row(&self) -> String {
        self.row(|line| line.cumulative.to_string())
    }

    fn row(&self, cell: impl Fn(&ScoreLine) -> String) -> String {
        self.lines.iter().map(cell).collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.marks_row())?;
        writeln!(f, "{}", self.scores_row())?;
        write!(f, "{}", self.totals_row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ScoreCard {
        ScoreCard {
            lines: vec![
                ScoreLine::new("X", 20, 20),
                ScoreLine::new("7/", 17, 37),
                ScoreLine::new("7 2", 9, 46),
            ],
            complete: false,
        }
    }

    #[test]
    fn rows_join_with_single_spaces() {
        let card = card();
        assert_eq!(card.marks_row(), "X 7/ 7 2");
        assert_eq!(card.scores_row(), "20 17 9");
        assert_eq!(card.totals_row(), "20 37 46");
        assert_eq!(card.to_string(), "X 7/ 7 2\n20 17 9\n20 37 46");
        assert_eq!(card.total(), 46);
    }

    #[test]
    fn json_round_trip() {
        let card = card();
        let json = serde_json::to_string(&card).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["complete"], false);
        assert_eq!(v["lines"][1]["display"], "7/");
        assert_eq!(v["lines"][2]["cumulative"], 46);

        let back: ScoreCard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn clear_resets_to_default() {
        let mut card = card();
        card.complete = true;
        card.clear();
        assert_eq!(card, ScoreCard::default());
        assert_eq!(card.total(), 0);
        assert!(card.is_empty());
    }
}

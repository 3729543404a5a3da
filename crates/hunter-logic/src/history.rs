//! Read-only move history consumed by the hunters

use core::ops::Range;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HunterError;
use crate::strategy::Move;

/// Ordered record of one player's moves plus running counts.
///
/// `cooperations + defections == len()` holds after every operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HistoryRepr", into = "HistoryRepr")]
pub struct History {
    moves: Vec<Move>,
    cooperations: usize,
    defections: usize,
}

#[derive(Serialize, Deserialize)]
struct HistoryRepr {
    moves: Vec<Move>,
}

impl From<HistoryRepr> for History {
    fn from(repr: HistoryRepr) -> Self {
        History::from_moves(repr.moves)
    }
}

impl From<History> for HistoryRepr {
    fn from(history: History) -> Self {
        HistoryRepr { moves: history.moves }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
            cooperations: 0,
            defections: 0,
        }
    }

    /// Build a history, counting moves as they are appended.
    pub fn from_moves<I: IntoIterator<Item = Move>>(moves: I) -> Self {
        let mut history = Self::new();
        for m in moves {
            history.push(m);
        }
        history
    }

    /// Adopt counts maintained by the caller, rejecting any that disagree
    /// with the recorded moves.
    pub fn from_counts(
        moves: Vec<Move>,
        cooperations: usize,
        defections: usize,
    ) -> Result<Self, HunterError> {
        let history = Self::from_moves(moves);
        if history.cooperations != cooperations || history.defections != defections {
            return Err(HunterError::CountMismatch {
                len: history.len(),
                cooperations,
                defections,
            });
        }
        Ok(history)
    }

    pub fn push(&mut self, m: Move) {
        match m {
            Move::Cooperate => self.cooperations += 1,
            Move::Defect => self.defections += 1,
        }
        self.moves.push(m);
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn cooperations(&self) -> usize {
        self.cooperations
    }

    pub fn defections(&self) -> usize {
        self.defections
    }

    /// Cooperations inside `range`, clamped to the recorded length.
    pub fn cooperations_in(&self, range: Range<usize>) -> usize {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.moves[start..end]
            .iter()
            .filter(|m| **m == Move::Cooperate)
            .count()
    }

    /// Compact `C`/`D` rendering, e.g. `"CDDC"`.
    pub fn to_compact(&self) -> String {
        self.moves.iter().map(|m| m.as_char()).collect()
    }
}

impl FromStr for History {
    type Err = HunterError;

    /// Parse a compact history such as `"CDCD"`. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut history = History::with_capacity(s.len());
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            history.push(Move::try_from(c)?);
        }
        Ok(history)
    }
}

impl FromIterator<Move> for History {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        History::from_moves(iter)
    }
}

/// Both sides of a match as seen by the acting player
#[derive(Clone, Copy, Debug)]
pub struct MatchView<'a> {
    pub own: &'a History,
    pub opponent: &'a History,
}

impl<'a> MatchView<'a> {
    pub fn new(own: &'a History, opponent: &'a History) -> Self {
        Self { own, opponent }
    }
}

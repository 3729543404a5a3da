//! Periodicity detection over the opponent's history
//!
//! A history has period `p` when tiling its first `p` moves reproduces it
//! exactly. Periods are tried in increasing order, so the first match is
//! the minimal one.

use log::{debug, trace};

use crate::config::DetectorConfig;
use crate::history::MatchView;
use crate::strategy::Move;

/// Repeat `block` until it is `len` moves long.
///
/// An empty block yields an empty vector.
pub fn tile(block: &[Move], len: usize) -> Vec<Move> {
    if block.is_empty() {
        return Vec::new();
    }
    (0..len).map(|i| block[i % block.len()]).collect()
}

/// Smallest period `p` in `1..=n/2` whose tiling reproduces `moves`.
fn minimal_period(moves: &[Move]) -> Option<usize> {
    let n = moves.len();
    (1..=n / 2).find(|&period| tile(&moves[..period], n).as_slice() == moves)
}

/// Minimal period (at least 2) of the whole history.
///
/// A history made of a single repeated move reports `None`: constant
/// opponents belong to the defector and cooperator hunters, and the search
/// stops there without trying longer periods.
pub fn detect_cycle(history: &[Move]) -> Option<usize> {
    match minimal_period(history) {
        Some(1) => None,
        found => found,
    }
}

/// Minimal period of the last `offset` moves, period 1 included.
pub fn detect_eventual_cycle(history: &[Move], offset: usize) -> Option<usize> {
    let tail = &history[history.len().saturating_sub(offset)..];
    minimal_period(tail)
}

/// Cycle Hunter: defect against any opponent whose whole history is periodic
pub fn cycle_hunter(view: &MatchView<'_>, _config: &DetectorConfig) -> Move {
    match detect_cycle(view.opponent.moves()) {
        Some(period) => {
            debug!(
                "cycle hunter: period {} over {} opponent rounds",
                period,
                view.opponent.len()
            );
            Move::Defect
        }
        None => Move::Cooperate,
    }
}

/// Eventual Cycle Hunter: defect against an opponent that settled into a cycle
pub fn eventual_cycle_hunter(view: &MatchView<'_>, config: &DetectorConfig) -> Move {
    let opponent = view.opponent;

    if opponent.len() < config.min_rounds_eventual {
        return Move::Cooperate;
    }
    // Unconditional cooperation would otherwise read as a period-1 cycle.
    if opponent.len() == opponent.cooperations() {
        trace!("eventual cycle hunter: sparing a pure cooperator");
        return Move::Cooperate;
    }

    match detect_eventual_cycle(opponent.moves(), config.eventual_window) {
        Some(period) => {
            debug!(
                "eventual cycle hunter: period {} in last {} opponent moves",
                period,
                config.eventual_window.min(opponent.len())
            );
            Move::Defect
        }
        None => Move::Cooperate,
    }
}

//! Hunters for opponents that never change their move

use log::debug;

use crate::config::DetectorConfig;
use crate::history::MatchView;
use crate::strategy::Move;

/// Defector Hunter: defect once every opponent move so far was a defection
pub fn defector_hunter(view: &MatchView<'_>, config: &DetectorConfig) -> Move {
    let opponent = view.opponent;
    if view.own.len() >= config.min_rounds_constant && opponent.len() == opponent.defections() {
        debug!("defector hunter: opponent defected all {} rounds", opponent.len());
        return Move::Defect;
    }
    Move::Cooperate
}

/// Cooperator Hunter: defect once every opponent move so far was a cooperation
pub fn cooperator_hunter(view: &MatchView<'_>, config: &DetectorConfig) -> Move {
    let opponent = view.opponent;
    if view.own.len() >= config.min_rounds_constant && opponent.len() == opponent.cooperations() {
        debug!("cooperator hunter: opponent cooperated all {} rounds", opponent.len());
        return Move::Defect;
    }
    Move::Cooperate
}

/// Alternator Hunter: defect against strict C/D alternation
///
/// The opponent must have at least one recorded move; every adjacent pair
/// must differ over the whole history.
pub fn alternator_hunter(view: &MatchView<'_>, config: &DetectorConfig) -> Move {
    if view.own.len() < config.min_rounds_alternator {
        return Move::Cooperate;
    }

    let moves = view.opponent.moves();
    if !moves.is_empty() && moves.windows(2).all(|pair| pair[0] != pair[1]) {
        debug!("alternator hunter: opponent alternated over {} rounds", moves.len());
        return Move::Defect;
    }
    Move::Cooperate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use proptest::prelude::*;

    fn decide(f: fn(&MatchView<'_>, &DetectorConfig) -> Move, own: &str, opp: &str) -> Move {
        let own: History = own.parse().unwrap();
        let opp: History = opp.parse().unwrap();
        f(&MatchView::new(&own, &opp), &DetectorConfig::standard())
    }

    #[test]
    fn test_defector_hunter_waits_four_rounds() {
        assert_eq!(decide(defector_hunter, "CCC", "DDD"), Move::Cooperate);
        assert_eq!(decide(defector_hunter, "CCCC", "DDDD"), Move::Defect);
    }

    #[test]
    fn test_defector_hunter_single_cooperation() {
        assert_eq!(decide(defector_hunter, "CCCCCC", "DDCDDD"), Move::Cooperate);
        assert_eq!(decide(defector_hunter, "CCCCCC", "CDDDDD"), Move::Cooperate);
    }

    #[test]
    fn test_cooperator_hunter_waits_four_rounds() {
        assert_eq!(decide(cooperator_hunter, "CCC", "CCC"), Move::Cooperate);
        assert_eq!(decide(cooperator_hunter, "CCCC", "CCCC"), Move::Defect);
    }

    #[test]
    fn test_cooperator_hunter_single_defection() {
        assert_eq!(decide(cooperator_hunter, "DDDDDD", "CCCCCD"), Move::Cooperate);
    }

    #[test]
    fn test_cooperator_hunter_keeps_defecting() {
        // Its own defections don't matter, only the opponent's record.
        assert_eq!(decide(cooperator_hunter, "CCCCDDDD", "CCCCCCCC"), Move::Defect);
    }

    #[test]
    fn test_alternator_hunter_waits_six_rounds() {
        assert_eq!(decide(alternator_hunter, "CCCCC", "CDCDC"), Move::Cooperate);
        assert_eq!(decide(alternator_hunter, "CCCCCC", "CDCDCD"), Move::Defect);
        assert_eq!(decide(alternator_hunter, "CCCCCC", "DCDCDC"), Move::Defect);
    }

    #[test]
    fn test_alternator_hunter_broken_alternation() {
        assert_eq!(decide(alternator_hunter, "CCCCCCC", "CDCDCDD"), Move::Cooperate);
        assert_eq!(decide(alternator_hunter, "CCCCCC", "CCDCDC"), Move::Cooperate);
    }

    #[test]
    fn test_alternator_hunter_empty_opponent() {
        assert_eq!(decide(alternator_hunter, "CCCCCC", ""), Move::Cooperate);
    }

    #[test]
    fn test_custom_threshold() {
        let own: History = "CC".parse().unwrap();
        let opp: History = "DD".parse().unwrap();
        let config = DetectorConfig { min_rounds_constant: 2, ..DetectorConfig::standard() };
        assert_eq!(defector_hunter(&MatchView::new(&own, &opp), &config), Move::Defect);
    }

    fn any_move() -> impl Strategy<Value = Move> {
        prop_oneof![Just(Move::Cooperate), Just(Move::Defect)]
    }

    proptest! {
        #[test]
        fn prop_constant_opponents_hunted(n in 4usize..64, own_moves in proptest::collection::vec(any_move(), 64)) {
            let own = History::from_moves(own_moves[..n].iter().copied());
            let defector = History::from_moves(std::iter::repeat(Move::Defect).take(n));
            let cooperator = History::from_moves(std::iter::repeat(Move::Cooperate).take(n));
            let config = DetectorConfig::standard();

            prop_assert_eq!(defector_hunter(&MatchView::new(&own, &defector), &config), Move::Defect);
            prop_assert_eq!(cooperator_hunter(&MatchView::new(&own, &defector), &config), Move::Cooperate);
            prop_assert_eq!(cooperator_hunter(&MatchView::new(&own, &cooperator), &config), Move::Defect);
            prop_assert_eq!(defector_hunter(&MatchView::new(&own, &cooperator), &config), Move::Cooperate);
        }

        #[test]
        fn prop_one_cooperation_spares_defector(n in 4usize..64, at in 0usize..64) {
            let at = at % n;
            let opp = History::from_moves((0..n).map(|i| if i == at { Move::Cooperate } else { Move::Defect }));
            let own = History::from_moves(std::iter::repeat(Move::Cooperate).take(n));
            prop_assert_eq!(
                defector_hunter(&MatchView::new(&own, &opp), &DetectorConfig::standard()),
                Move::Cooperate
            );
        }
    }
}

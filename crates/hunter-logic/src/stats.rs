//! Statistical hunters: stationary cooperation rates and memoryless responses

use log::{debug, trace};

use crate::config::DetectorConfig;
use crate::history::{History, MatchView};
use crate::strategy::Move;

/// Combined cooperation ratio of both players over `[start, end)`.
///
/// Halved so that the result stays in `[0, 1]`. The caller guarantees
/// `end > start`.
fn window_ratio(own: &History, opponent: &History, start: usize, end: usize) -> f64 {
    let count = opponent.cooperations_in(start..end) + own.cooperations_in(start..end);
    0.5 * count as f64 / (end - start) as f64
}

/// Math Constant Hunter: defect when the cooperation rate looks stationary
///
/// Compares the first half, the middle half and the second half of the
/// match. Fixed-probability players (including many random ones) keep the
/// three ratios close together.
pub fn math_constant_hunter(view: &MatchView<'_>, config: &DetectorConfig) -> Move {
    let (own, opponent) = (view.own, view.opponent);
    let n = own.len();

    if n < config.min_rounds_ratio || opponent.cooperations() == 0 || opponent.defections() == 0 {
        return Move::Cooperate;
    }

    let windows = [(0, n / 2), (n / 4, 3 * n / 4), (n / 2, n)];
    if windows.iter().any(|(start, end)| end <= start) {
        return Move::Cooperate;
    }
    let [r1, r2, r3] = windows.map(|(start, end)| window_ratio(own, opponent, start, end));
    trace!("math constant hunter: ratios {:.3} {:.3} {:.3}", r1, r2, r3);

    if (r1 - r2).abs() < config.ratio_tolerance && (r1 - r3).abs() < config.ratio_tolerance {
        debug!("math constant hunter: stationary cooperation ratio {:.3} over {} rounds", r1, n);
        return Move::Defect;
    }
    Move::Cooperate
}

/// How often the opponent answered our `given` move at round `i` with
/// `response` at round `i + 1`, as a fraction of our `given` moves.
///
/// Returns `None` unless we played `given` more than `min_samples` times.
fn response_probability(
    own: &[Move],
    opponent: &[Move],
    given: Move,
    response: Move,
    min_samples: usize,
) -> Option<f64> {
    let samples = own.iter().filter(|m| **m == given).count();
    if samples <= min_samples {
        return None;
    }
    let hits = own
        .iter()
        .zip(opponent.iter().skip(1))
        .filter(|(mine, theirs)| **mine == given && **theirs == response)
        .count();
    Some(hits as f64 / samples as f64)
}

/// Random Hunter: defect when the opponent's replies look like coin flips
///
/// A memoryless random player answers cooperation with cooperation, and
/// defection with defection, about half of the time.
pub fn random_hunter(view: &MatchView<'_>, config: &DetectorConfig) -> Move {
    let n = view.own.len();
    if n <= config.min_rounds_random {
        return Move::Cooperate;
    }

    // Our last move has no recorded reply yet.
    let own = &view.own.moves()[..n - 1];
    let opponent = view.opponent.moves();
    let samples = config.min_response_samples;

    let probabilities: Vec<f64> = [
        response_probability(own, opponent, Move::Cooperate, Move::Cooperate, samples),
        response_probability(own, opponent, Move::Defect, Move::Defect, samples),
    ]
    .into_iter()
    .flatten()
    .collect();
    trace!("random hunter: response probabilities {:?}", probabilities);

    if !probabilities.is_empty()
        && probabilities
            .iter()
            .all(|p| (p - 0.5).abs() < config.response_tolerance)
    {
        debug!("random hunter: responses look random over {} rounds", n);
        return Move::Defect;
    }
    Move::Cooperate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(f: fn(&MatchView<'_>, &DetectorConfig) -> Move, own: &str, opp: &str) -> Move {
        let own: History = own.parse().unwrap();
        let opp: History = opp.parse().unwrap();
        f(&MatchView::new(&own, &opp), &DetectorConfig::standard())
    }

    #[test]
    fn test_window_ratio() {
        let own: History = "CCCC".parse().unwrap();
        let opp: History = "CDCD".parse().unwrap();
        assert_eq!(window_ratio(&own, &opp, 0, 4), 0.75);
        assert_eq!(window_ratio(&own, &opp, 1, 2), 0.5);
    }

    #[test]
    fn test_math_constant_stationary_ratio() {
        assert_eq!(decide(math_constant_hunter, "CCCCCCCC", "CDCDCDCD"), Move::Defect);
    }

    #[test]
    fn test_math_constant_ratio_shift() {
        // Ratios 1.0, 0.75, 0.5
        assert_eq!(decide(math_constant_hunter, "CCCCCCCC", "CCCCDDDD"), Move::Cooperate);
    }

    #[test]
    fn test_math_constant_needs_eight_rounds() {
        assert_eq!(decide(math_constant_hunter, "CCCCCCC", "CDCDCDC"), Move::Cooperate);
    }

    #[test]
    fn test_math_constant_needs_mixed_opponent() {
        assert_eq!(decide(math_constant_hunter, "CCCCCCCC", "CCCCCCCC"), Move::Cooperate);
        assert_eq!(decide(math_constant_hunter, "CCCCCCCC", "DDDDDDDD"), Move::Cooperate);
    }

    #[test]
    fn test_math_constant_uneven_length() {
        // n = 10: windows [0,5), [2,7), [5,10)
        assert_eq!(decide(math_constant_hunter, "CDCDCDCDCD", "DCDCDCDCDC"), Move::Defect);
    }

    #[test]
    fn test_response_probability() {
        let own: Vec<Move> = "CCCCCCD".parse::<History>().unwrap().moves().to_vec();
        let opp: Vec<Move> = "CCDCDCDC".parse::<History>().unwrap().moves().to_vec();
        // Replies to our six C's: C D C D C D
        assert_eq!(
            response_probability(&own, &opp, Move::Cooperate, Move::Cooperate, 5),
            Some(0.5)
        );
        assert_eq!(response_probability(&own, &opp, Move::Defect, Move::Defect, 5), None);
        assert_eq!(response_probability(&own, &opp, Move::Cooperate, Move::Cooperate, 6), None);
    }

    // Own moves alternate; opponent replies are close to even after each (0.5 and 0.4).
    const BALANCED_OWN: &str = "CDCDCDCDCDCDCDCDCDCDC";
    const BALANCED_OPP: &str = "CCDCDCDCDCCDCDCDCDCDC";

    #[test]
    fn test_random_hunter_balanced_responses() {
        assert_eq!(decide(random_hunter, BALANCED_OWN, BALANCED_OPP), Move::Defect);
    }

    #[test]
    fn test_random_hunter_predictable_responses() {
        // Opponent always cooperates after our cooperation.
        assert_eq!(
            decide(random_hunter, BALANCED_OWN, "CCCCCCCCCCCCCCCCCCCCC"),
            Move::Cooperate
        );
        // Tit for tat mirrors us exactly.
        assert_eq!(
            decide(random_hunter, BALANCED_OWN, "CCDCDCDCDCDCDCDCDCDCD"),
            Move::Cooperate
        );
    }

    #[test]
    fn test_random_hunter_needs_more_than_ten_rounds() {
        assert_eq!(decide(random_hunter, "CCCCCCCCCC", "CDDCCDDCCD"), Move::Cooperate);
    }

    #[test]
    fn test_random_hunter_too_few_samples() {
        // Five cooperations and five defections before the last move: neither counts.
        assert_eq!(decide(random_hunter, "CDCDCDCDCDC", "CCDDCCDDCCD"), Move::Cooperate);
    }

    #[test]
    fn test_random_hunter_single_probability() {
        // Only our cooperations have enough samples; replies split 6/6.
        assert_eq!(
            decide(random_hunter, "CCCCCCCCCCCCD", "CCDCDCDCDCDCD"),
            Move::Defect
        );
    }
}

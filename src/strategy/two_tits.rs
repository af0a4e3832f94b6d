use std::collections::VecDeque;

use crate::moves::Move;

use super::Strategy;

/// Defects if either other player defected in either of the last two
/// observed rounds; otherwise cooperates. The first two rounds are always
/// cooperative since fewer than two rounds have been observed.
#[derive(Debug, Clone, Default)]
pub struct TwoTitsForTat {
    // The opponents' move pairs from at most the two most recent rounds.
    recent: VecDeque<[Move; 2]>,
}

impl Strategy for TwoTitsForTat {
    fn identify(&self) -> &str {
        "TwoTits"
    }

    fn decide(&mut self, self_history: &[Move], _opponent_a: &[Move], _opponent_b: &[Move]) -> Move {
        if self_history.len() < 2 {
            return Move::Cooperate;
        }
        let punished = self
            .recent
            .iter()
            .any(|pair| pair[0].is_defect() || pair[1].is_defect());
        if punished {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn on_round_end(&mut self, _own: Move, opponent_a: Move, opponent_b: Move) {
        if self.recent.len() == 2 {
            self.recent.pop_front();
        }
        self.recent.push_back([opponent_a, opponent_b]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::{Cooperate as C, Defect as D};

    #[test]
    fn test_cooperates_for_first_two_rounds() {
        let mut s = TwoTitsForTat::default();
        assert_eq!(s.decide(&[], &[], &[]), C);
        s.on_round_end(C, D, C);
        assert_eq!(s.decide(&[C], &[D], &[C]), C);
    }

    #[test]
    fn test_defects_while_window_holds_a_defection() {
        let mut s = TwoTitsForTat::default();
        s.on_round_end(C, D, C);
        s.on_round_end(C, C, C);
        assert_eq!(s.decide(&[C, C], &[D, C], &[C, C]), D);
    }

    #[test]
    fn test_old_defection_ages_out_of_window() {
        let mut s = TwoTitsForTat::default();
        // A defection three rounds in the past must not cause a Defect now.
        s.on_round_end(C, D, C);
        s.on_round_end(D, C, C);
        s.on_round_end(C, C, C);
        assert_eq!(s.decide(&[C, D, C], &[D, C, C], &[C, C, C]), C);
    }

    #[test]
    fn test_window_never_exceeds_two_rounds() {
        let mut s = TwoTitsForTat::default();
        for _ in 0..5 {
            s.on_round_end(C, C, C);
        }
        assert_eq!(s.recent.len(), 2);
    }
}

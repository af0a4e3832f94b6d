use crate::moves::Move;

use super::Strategy;

/// Cooperates on round one; thereafter cooperates iff both other players
/// cooperated last round.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn identify(&self) -> &str {
        "TitForTat"
    }

    fn decide(&mut self, self_history: &[Move], opponent_a: &[Move], opponent_b: &[Move]) -> Move {
        if self_history.is_empty() {
            return Move::Cooperate;
        }
        match (opponent_a.last(), opponent_b.last()) {
            (Some(Move::Cooperate), Some(Move::Cooperate)) => Move::Cooperate,
            _ => Move::Defect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::{Cooperate as C, Defect as D};

    #[test]
    fn test_first_round_cooperates() {
        assert_eq!(TitForTat.decide(&[], &[], &[]), C);
    }

    #[test]
    fn test_retaliates_after_any_defection() {
        assert_eq!(TitForTat.decide(&[C], &[D], &[C]), D);
        assert_eq!(TitForTat.decide(&[C], &[C], &[D]), D);
        assert_eq!(TitForTat.decide(&[C], &[D], &[D]), D);
    }

    #[test]
    fn test_recovers_when_both_cooperate() {
        // Only the most recent round matters.
        assert_eq!(TitForTat.decide(&[C, D], &[D, C], &[D, C]), C);
    }
}

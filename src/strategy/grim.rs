use crate::moves::Move;

use super::Strategy;

/// Cooperates until any other player ever defects, then defects forever.
///
/// The trigger is monotonic: there is no recovery, no matter how many
/// cooperative rounds follow.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrimTrigger {
    triggered: bool,
}

impl Strategy for GrimTrigger {
    fn identify(&self) -> &str {
        "Grim"
    }

    fn decide(&mut self, _self_history: &[Move], _opponent_a: &[Move], _opponent_b: &[Move]) -> Move {
        if self.triggered {
            Move::Defect
        } else {
            Move::Cooperate
        }
    }

    fn on_round_end(&mut self, _own: Move, opponent_a: Move, opponent_b: Move) {
        if opponent_a.is_defect() || opponent_b.is_defect() {
            self.triggered = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::{Cooperate as C, Defect as D};

    #[test]
    fn test_cooperates_until_triggered() {
        let mut s = GrimTrigger::default();
        assert_eq!(s.decide(&[], &[], &[]), C);
        s.on_round_end(C, C, C);
        assert_eq!(s.decide(&[C], &[C], &[C]), C);
    }

    #[test]
    fn test_trigger_is_permanent() {
        let mut s = GrimTrigger::default();
        s.on_round_end(C, D, C);
        assert_eq!(s.decide(&[C], &[D], &[C]), D);
        // Later cooperative rounds never reset the trigger.
        for _ in 0..10 {
            s.on_round_end(D, C, C);
            assert_eq!(s.decide(&[C], &[C], &[C]), D);
        }
    }

    #[test]
    fn test_either_opponent_triggers() {
        let mut s = GrimTrigger::default();
        s.on_round_end(C, C, D);
        assert_eq!(s.decide(&[C], &[C], &[D]), D);
    }
}

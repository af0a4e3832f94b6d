use crate::moves::Move;

use super::Strategy;

/// Cooperates unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysCooperate;

impl Strategy for AlwaysCooperate {
    fn identify(&self) -> &str {
        "AlwaysC"
    }

    fn decide(&mut self, _self_history: &[Move], _opponent_a: &[Move], _opponent_b: &[Move]) -> Move {
        Move::Cooperate
    }
}

/// Defects unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDefect;

impl Strategy for AlwaysDefect {
    fn identify(&self) -> &str {
        "AlwaysD"
    }

    fn decide(&mut self, _self_history: &[Move], _opponent_a: &[Move], _opponent_b: &[Move]) -> Move {
        Move::Defect
    }
}

use rand::{rng, Rng};

use crate::config;
use crate::moves::Move;

use super::Strategy;

/// Cooperates with a configurable probability (`prob=` key, default 0.5).
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    cooperate_prob: f64,
}

impl RandomStrategy {
    pub fn new(cooperate_prob: f64) -> Self {
        Self {
            cooperate_prob: cooperate_prob.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Strategy for RandomStrategy {
    fn identify(&self) -> &str {
        "Random"
    }

    fn decide(&mut self, _self_history: &[Move], _opponent_a: &[Move], _opponent_b: &[Move]) -> Move {
        if rng().random_bool(self.cooperate_prob) {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }

    fn configure(&mut self, config: &str) {
        for (key, value) in config::key_values(config) {
            if key == "prob" {
                if let Ok(p) = value.parse::<f64>() {
                    if (0.0..=1.0).contains(&p) {
                        self.cooperate_prob = p;
                    }
                }
            }
        }
    }
}

use tracing::warn;

use crate::config;
use crate::moves::Move;

use super::{make_builtin, Strategy, TitForTat};

/// Delegates to a committee of sub-strategy advisors; the majority vote
/// wins.
///
/// The default committee is AlwaysC, TitForTat, and Grim. `members=`
/// config lines (comma-separated built-in tokens, accumulated across
/// lines) replace it; an unknown token falls back to a TitForTat
/// advisor. Every advisor sees the same
/// histories through the forwarded `decide` and `on_round_end` calls. An
/// exact vote tie resolves to Defect.
pub struct MetaMajority {
    advisors: Vec<Box<dyn Strategy>>,
}

impl MetaMajority {
    fn make_advisor(token: &str) -> Box<dyn Strategy> {
        make_builtin(token).unwrap_or_else(|| {
            warn!(token, "unknown advisor token, substituting TitForTat");
            Box::new(TitForTat)
        })
    }

    fn default_committee() -> Vec<Box<dyn Strategy>> {
        vec![
            Self::make_advisor("AlwaysC"),
            Self::make_advisor("TitForTat"),
            Self::make_advisor("Grim"),
        ]
    }
}

impl Default for MetaMajority {
    fn default() -> Self {
        Self {
            advisors: Self::default_committee(),
        }
    }
}

impl Strategy for MetaMajority {
    fn identify(&self) -> &str {
        "MetaMajority"
    }

    fn decide(&mut self, self_history: &[Move], opponent_a: &[Move], opponent_b: &[Move]) -> Move {
        let mut votes_c = 0_usize;
        let mut votes_d = 0_usize;
        for advisor in self.advisors.iter_mut() {
            match advisor.decide(self_history, opponent_a, opponent_b) {
                Move::Cooperate => votes_c += 1,
                Move::Defect => votes_d += 1,
            }
        }
        // Exact tie is resolved conservatively.
        if votes_c > votes_d {
            Move::Cooperate
        } else {
            Move::Defect
        }
    }

    fn on_round_end(&mut self, own: Move, opponent_a: Move, opponent_b: Move) {
        for advisor in self.advisors.iter_mut() {
            advisor.on_round_end(own, opponent_a, opponent_b);
        }
    }

    fn configure(&mut self, config: &str) {
        // Advisors accumulate across `members=` lines; the committee is
        // replaced once at the end, and only if any token was named.
        let mut members: Vec<Box<dyn Strategy>> = Vec::new();
        for (key, value) in config::key_values(config) {
            if key == "members" {
                members.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|token| !token.is_empty())
                        .map(Self::make_advisor),
                );
            }
        }
        if !members.is_empty() {
            self.advisors = members;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::{Cooperate as C, Defect as D};

    #[test]
    fn test_default_committee_cooperates_at_start() {
        let mut s = MetaMajority::default();
        assert_eq!(s.decide(&[], &[], &[]), C);
    }

    #[test]
    fn test_default_committee_turns_on_observed_defection() {
        let mut s = MetaMajority::default();
        // After one defection: TitForTat votes D, Grim is triggered and
        // votes D, AlwaysC votes C. Majority defects.
        s.on_round_end(C, D, C);
        assert_eq!(s.decide(&[C], &[D], &[C]), D);
    }

    #[test]
    fn test_even_committee_tie_resolves_to_defect() {
        let mut s = MetaMajority::default();
        s.configure("members=AlwaysC,AlwaysD\n");
        assert_eq!(s.advisors.len(), 2);
        assert_eq!(s.decide(&[], &[], &[]), D);
    }

    #[test]
    fn test_members_config_replaces_committee() {
        let mut s = MetaMajority::default();
        s.configure("members= AlwaysD , AlwaysD, AlwaysC\n");
        assert_eq!(s.advisors.len(), 3);
        assert_eq!(s.decide(&[], &[], &[]), D);
    }

    #[test]
    fn test_members_accumulate_across_lines() {
        let mut s = MetaMajority::default();
        s.configure("members=AlwaysD\nmembers=AlwaysD,AlwaysC\n");
        assert_eq!(s.advisors.len(), 3);
        assert_eq!(s.decide(&[], &[], &[]), D);
    }

    #[test]
    fn test_unknown_member_falls_back_to_tit_for_tat() {
        let mut s = MetaMajority::default();
        s.configure("members=NoSuchStrategy\n");
        assert_eq!(s.advisors.len(), 1);
        // TitForTat fallback: cooperates on round one.
        assert_eq!(s.decide(&[], &[], &[]), C);
        assert_eq!(s.decide(&[C], &[D], &[C]), D);
    }

    #[test]
    fn test_empty_members_keeps_committee() {
        let mut s = MetaMajority::default();
        s.configure("members=\n");
        assert_eq!(s.advisors.len(), 3);
    }
}

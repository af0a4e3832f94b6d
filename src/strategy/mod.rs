//! `Strategy` is the capability contract every participant implements.
//!
//! Built-in strategies are provided here; externally compiled strategies
//! loaded through [`crate::registry::plugin`] satisfy the same trait, so
//! the engine never needs to tell them apart.
mod always;
mod grim;
mod meta;
mod random;
mod tit_for_tat;
mod two_tits;

pub use always::{AlwaysCooperate, AlwaysDefect};
pub use grim::GrimTrigger;
pub use meta::MetaMajority;
pub use random::RandomStrategy;
pub use tit_for_tat::TitForTat;
pub use two_tits::TwoTitsForTat;

use crate::moves::Move;

/// The decision-making contract for one player across one match.
///
/// An instance is owned by exactly one logical player for its whole
/// lifetime; no thread-safety is promised for a single instance. Tournament
/// mode creates fresh instances per match, so no state carries between
/// matches.
pub trait Strategy {
    /// Stable name, used as the leaderboard key and for locating the
    /// per-strategy config file.
    fn identify(&self) -> &str;

    /// Choose this round's move from the three histories as of the end of
    /// the previous round (all empty on round one). Internal state
    /// accumulated from [`Strategy::on_round_end`] may be consulted.
    fn decide(&mut self, self_history: &[Move], opponent_a: &[Move], opponent_b: &[Move]) -> Move;

    /// Called once per round after all three moves are fixed. The only
    /// place internal state may be updated.
    fn on_round_end(&mut self, _own: Move, _opponent_a: Move, _opponent_b: Move) {}

    /// Apply strategy-specific `key=value` settings. Called at most once,
    /// before the first `decide`. Unknown or malformed keys are ignored.
    fn configure(&mut self, _config: &str) {}
}

/// Construct a built-in strategy by name or alias, case-insensitive.
pub fn make_builtin(token: &str) -> Option<Box<dyn Strategy>> {
    match token.to_ascii_lowercase().as_str() {
        "alwaysc" | "ac" => Some(Box::new(AlwaysCooperate)),
        "alwaysd" | "ad" => Some(Box::new(AlwaysDefect)),
        "random" | "rnd" => Some(Box::<RandomStrategy>::default()),
        "titfortat" | "tft" => Some(Box::new(TitForTat)),
        "grim" => Some(Box::<GrimTrigger>::default()),
        "twotits" | "tt" => Some(Box::<TwoTitsForTat>::default()),
        "metamajority" | "meta" => Some(Box::<MetaMajority>::default()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_builtin_aliases_case_insensitive() {
        for token in [
            "AlwaysC",
            "ac",
            "ALWAYSD",
            "ad",
            "Random",
            "rnd",
            "TitForTat",
            "TFT",
            "grim",
            "TwoTits",
            "tt",
            "MetaMajority",
            "meta",
        ] {
            assert!(make_builtin(token).is_some(), "expected builtin for {token}");
        }
    }

    #[test]
    fn test_make_builtin_unknown_is_none() {
        assert!(make_builtin("NotAStrategy").is_none());
        assert!(make_builtin("").is_none());
    }

    #[test]
    fn test_identify_matches_canonical_names() {
        for (token, name) in [
            ("ac", "AlwaysC"),
            ("ad", "AlwaysD"),
            ("rnd", "Random"),
            ("tft", "TitForTat"),
            ("grim", "Grim"),
            ("tt", "TwoTits"),
            ("meta", "MetaMajority"),
        ] {
            assert_eq!(make_builtin(token).unwrap().identify(), name);
        }
    }
}

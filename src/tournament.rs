//! All 3-player matchups from a roster, aggregated into a leaderboard.
use std::collections::HashMap;

use tracing::{event, Level};

use crate::errors::TournamentError;
use crate::payoff::PayoffTable;
use crate::registry::StrategyRegistry;
use crate::sim::{SimulationBuilder, PLAYERS};

/// Per-match totals keyed by the three participant names, in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub names: [String; PLAYERS],
    pub totals: [i64; PLAYERS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaderboardEntry {
    pub name: String,
    pub total: i64,
}

/// Grand totals keyed by strategy name.
///
/// Entries remember first-appearance order, so the final standings are
/// deterministic: descending total, ties kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    index: HashMap<String, usize>,
}

impl Leaderboard {
    pub fn add(&mut self, name: &str, total: i64) {
        match self.index.get(name) {
            Some(&idx) => self.entries[idx].total += total,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(LeaderboardEntry {
                    name: name.to_string(),
                    total,
                });
            }
        }
    }

    pub fn total(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&idx| self.entries[idx].total)
    }

    /// Entries sorted by descending grand total; a stable sort keeps
    /// first-appearance order among ties.
    pub fn standings(&self) -> Vec<LeaderboardEntry> {
        let mut standings = self.entries.clone();
        standings.sort_by_key(|entry| std::cmp::Reverse(entry.total));
        standings
    }
}

/// The full outcome of a tournament run.
#[derive(Debug, Clone)]
pub struct TournamentResult {
    pub matches: Vec<MatchResult>,
    pub leaderboard: Leaderboard,
}

/// Enumerates every unordered 3-element subset of the roster in nested
/// ascending index order and runs one match per subset, with fresh
/// strategy instances each time.
pub struct Tournament {
    payoff: PayoffTable,
    registry: StrategyRegistry,
    roster: Vec<String>,
    rounds: usize,
}

impl Tournament {
    pub fn new(
        payoff: PayoffTable,
        registry: StrategyRegistry,
        roster: Vec<String>,
        rounds: usize,
    ) -> Self {
        Self {
            payoff,
            registry,
            roster,
            rounds,
        }
    }

    /// The number of matches a full run will play: C(n, 3).
    pub fn total_matches(&self) -> usize {
        let n = self.roster.len();
        if n < PLAYERS {
            0
        } else {
            n * (n - 1) * (n - 2) / 6
        }
    }

    pub fn run(&self) -> Result<TournamentResult, TournamentError> {
        let n = self.roster.len();
        if n < PLAYERS {
            return Err(TournamentError::RosterTooSmall(n));
        }

        event!(
            Level::INFO,
            roster = n,
            matches = self.total_matches(),
            rounds = self.rounds,
            "starting tournament"
        );

        let mut matches = Vec::with_capacity(self.total_matches());
        let mut leaderboard = Leaderboard::default();

        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let result = self.run_match([&self.roster[i], &self.roster[j], &self.roster[k]])?;
                    for (name, total) in result.names.iter().zip(result.totals) {
                        leaderboard.add(name, total);
                    }
                    matches.push(result);
                }
            }
        }

        event!(Level::INFO, matches = matches.len(), "tournament complete");
        Ok(TournamentResult {
            matches,
            leaderboard,
        })
    }

    fn run_match(&self, tokens: [&str; PLAYERS]) -> Result<MatchResult, TournamentError> {
        // Fresh instances every match; nothing carries over, even for the
        // same token in different matches.
        let mut players = Vec::with_capacity(PLAYERS);
        for token in tokens {
            let player =
                self.registry
                    .create(token)
                    .map_err(|source| TournamentError::Resolve {
                        name: token.to_string(),
                        source,
                    })?;
            players.push(player);
        }

        let mut sim = SimulationBuilder::default()
            .payoff(self.payoff)
            .players(players)
            .rounds(self.rounds)
            .build()?;
        let names = sim.player_names();
        sim.run();

        Ok(MatchResult {
            names,
            totals: sim.totals(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoadError;

    fn tournament(roster: &[&str], rounds: usize) -> Tournament {
        Tournament::new(
            PayoffTable::default(),
            StrategyRegistry::default(),
            roster.iter().map(|s| s.to_string()).collect(),
            rounds,
        )
    }

    #[test]
    fn test_roster_of_three_is_a_single_match() {
        let t = tournament(&["AlwaysD", "AlwaysC", "AlwaysC"], 4);
        let result = t.run().unwrap();
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].totals, [36, 12, 12]);
        // With one match, grand totals equal the match totals.
        assert_eq!(result.leaderboard.total("AlwaysD"), Some(36));
        // Both AlwaysC seats accumulate under the one shared name.
        assert_eq!(result.leaderboard.total("AlwaysC"), Some(24));
    }

    #[test]
    fn test_roster_of_four_plays_four_matches() {
        let t = tournament(&["AlwaysC", "AlwaysD", "TitForTat", "Grim"], 5);
        assert_eq!(t.total_matches(), 4);
        let result = t.run().unwrap();
        assert_eq!(result.matches.len(), 4);

        // First triple is roster indices (0, 1, 2) with canonical names.
        assert_eq!(
            result.matches[0].names,
            ["AlwaysC".to_string(), "AlwaysD".to_string(), "TitForTat".to_string()]
        );
    }

    #[test]
    fn test_standings_sorted_descending() {
        let t = tournament(&["AlwaysD", "AlwaysC", "AlwaysC", "Grim"], 3);
        let result = t.run().unwrap();
        let standings = result.leaderboard.standings();
        for pair in standings.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_standings_ties_keep_first_appearance_order() {
        let mut lb = Leaderboard::default();
        lb.add("B", 10);
        lb.add("A", 10);
        lb.add("C", 20);
        let standings = lb.standings();
        let names: Vec<&str> = standings.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_roster_too_small_fails() {
        let t = tournament(&["AlwaysC", "AlwaysD"], 5);
        match t.run() {
            Err(TournamentError::RosterTooSmall(2)) => {}
            other => panic!("expected RosterTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn test_unresolvable_roster_entry_fails_cleanly() {
        let t = tournament(&["AlwaysC", "AlwaysD", "NoSuchStrategy"], 5);
        match t.run() {
            Err(TournamentError::Resolve {
                name,
                source: LoadError::NotFound(_),
            }) => assert_eq!(name, "NoSuchStrategy"),
            other => panic!("expected Resolve error, got {other:?}"),
        }
    }

    #[test]
    fn test_fresh_instances_per_match() {
        // Grim appears in several matches; if its trigger leaked across
        // matches it would defect against pure cooperators too.
        let t = tournament(&["Grim", "AlwaysD", "AlwaysC", "AlwaysC"], 5);
        let result = t.run().unwrap();
        // Triple (0, 2, 3) = Grim with the two cooperators.
        let coop_match = result
            .matches
            .iter()
            .find(|m| m.names[0] == "Grim" && m.names[1] == "AlwaysC")
            .unwrap();
        assert_eq!(coop_match.totals, [35, 35, 35]);
    }
}

//! `pd-arena` is a simulation engine for the three-player iterated
//! prisoner's dilemma.
//!
//! The building blocks:
//!
//! - [`Move`] and [`PayoffTable`]: the pure game definition. The payoff
//!   table can be overridden row by row from a text source.
//! - [`Strategy`]: the trait every participant implements. Built-in
//!   strategies live in [`strategy`]; externally compiled ones are loaded
//!   through the plugin ABI in [`registry::plugin`].
//! - [`StrategyRegistry`]: resolves a textual token to a ready strategy
//!   instance, applying any per-strategy config file.
//! - [`Simulation`]: one match of N rounds among exactly three strategies,
//!   producing a per-round log.
//! - [`Tournament`]: every 3-player matchup from a roster, aggregated into
//!   a leaderboard.
//!
//! # Example
//!
//! ```
//! use pd_arena::{PayoffTable, SimulationBuilder, StrategyRegistry};
//!
//! let registry = StrategyRegistry::default();
//! let players = vec![
//!     registry.create("TitForTat").unwrap(),
//!     registry.create("AlwaysC").unwrap(),
//!     registry.create("Grim").unwrap(),
//! ];
//! let mut sim = SimulationBuilder::default()
//!     .payoff(PayoffTable::default())
//!     .players(players)
//!     .rounds(10)
//!     .build()
//!     .unwrap();
//! sim.run();
//! assert_eq!(sim.records().len(), 10);
//! ```
pub mod config;
pub mod errors;
pub mod moves;
pub mod payoff;
pub mod registry;
pub mod sim;
pub mod strategy;
pub mod tournament;

pub use moves::Move;
pub use payoff::PayoffTable;
pub use registry::StrategyRegistry;
pub use sim::{RoundRecord, Simulation, SimulationBuilder};
pub use strategy::Strategy;
pub use tournament::{Leaderboard, MatchResult, Tournament, TournamentResult};

//! One match of N rounds among exactly three strategies.
use std::io::{BufRead, Write};

use tracing::trace;

use crate::errors::SimulationError;
use crate::moves::Move;
use crate::payoff::PayoffTable;
use crate::strategy::Strategy;

pub const PLAYERS: usize = 3;

/// The three simultaneous moves and resulting payoffs of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRecord {
    pub moves: [Move; PLAYERS],
    pub scores: [i64; PLAYERS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchState {
    NotStarted,
    Running,
    Finished,
}

/// Drives one match. Built through [`SimulationBuilder`].
///
/// Decisions for a round are computed for all three players before any
/// history or payoff update, so no player ever sees the current round's
/// moves of the other two.
pub struct Simulation {
    payoff: PayoffTable,
    players: Vec<Box<dyn Strategy>>,
    rounds: usize,
    histories: [Vec<Move>; PLAYERS],
    totals: [i64; PLAYERS],
    records: Vec<RoundRecord>,
    state: MatchState,
}

/// Builder for [`Simulation`]. Players and a payoff table are required;
/// the round count defaults to 50.
///
/// # Examples
///
/// ```
/// use pd_arena::strategy::{AlwaysCooperate, AlwaysDefect};
/// use pd_arena::{PayoffTable, SimulationBuilder, Strategy};
///
/// let players: Vec<Box<dyn Strategy>> = vec![
///     Box::new(AlwaysDefect),
///     Box::new(AlwaysCooperate),
///     Box::new(AlwaysCooperate),
/// ];
/// let mut sim = SimulationBuilder::default()
///     .payoff(PayoffTable::default())
///     .players(players)
///     .rounds(4)
///     .build()
///     .unwrap();
/// sim.run();
/// assert_eq!(sim.totals(), [36, 12, 12]);
/// ```
pub struct SimulationBuilder {
    payoff: Option<PayoffTable>,
    players: Option<Vec<Box<dyn Strategy>>>,
    rounds: usize,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            payoff: None,
            players: None,
            rounds: 50,
        }
    }
}

impl SimulationBuilder {
    pub fn payoff(mut self, payoff: PayoffTable) -> Self {
        self.payoff = Some(payoff);
        self
    }

    pub fn players(mut self, players: Vec<Box<dyn Strategy>>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn build(self) -> Result<Simulation, SimulationError> {
        let payoff = self.payoff.ok_or(SimulationError::NeedPayoffTable)?;
        let players = self.players.ok_or(SimulationError::NeedPlayers)?;
        if players.len() != PLAYERS {
            return Err(SimulationError::WrongPlayerCount(players.len()));
        }
        if self.rounds == 0 {
            return Err(SimulationError::ZeroRounds);
        }
        Ok(Simulation {
            payoff,
            players,
            rounds: self.rounds,
            histories: Default::default(),
            totals: [0; PLAYERS],
            records: Vec::with_capacity(self.rounds),
            state: MatchState::NotStarted,
        })
    }
}

impl Simulation {
    /// The per-round log so far.
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    /// Accumulated totals per player.
    pub fn totals(&self) -> [i64; PLAYERS] {
        self.totals
    }

    pub fn is_complete(&self) -> bool {
        self.state == MatchState::Finished
    }

    /// The names of the three players in seat order.
    pub fn player_names(&self) -> [String; PLAYERS] {
        [
            self.players[0].identify().to_string(),
            self.players[1].identify().to_string(),
            self.players[2].identify().to_string(),
        ]
    }

    /// Play a single round. Does nothing once the match is finished.
    pub fn run_round(&mut self) {
        if self.state == MatchState::Finished {
            return;
        }
        self.state = MatchState::Running;

        // All three decisions are fixed before anything else changes.
        let histories = &self.histories;
        let mut moves = [Move::Cooperate; PLAYERS];
        for (i, player) in self.players.iter_mut().enumerate() {
            moves[i] = player.decide(
                &histories[i],
                &histories[(i + 1) % PLAYERS],
                &histories[(i + 2) % PLAYERS],
            );
        }

        let scores = self.payoff.scores(moves[0], moves[1], moves[2]);
        for i in 0..PLAYERS {
            self.histories[i].push(moves[i]);
            self.totals[i] += scores[i];
        }
        for (i, player) in self.players.iter_mut().enumerate() {
            player.on_round_end(moves[i], moves[(i + 1) % PLAYERS], moves[(i + 2) % PLAYERS]);
        }

        self.records.push(RoundRecord { moves, scores });
        trace!(
            round = self.records.len(),
            ?moves,
            ?scores,
            totals = ?self.totals,
            "round complete"
        );

        if self.records.len() >= self.rounds {
            self.state = MatchState::Finished;
        }
    }

    /// End the match early. The log collected so far stays valid.
    pub fn abort(&mut self) {
        self.state = MatchState::Finished;
    }

    /// Run every remaining round without pausing and return the full log.
    pub fn run(&mut self) -> &[RoundRecord] {
        while !self.is_complete() {
            self.run_round();
        }
        &self.records
    }

    /// Run interactively: pause before each round for operator input on
    /// `input`, echoing moves, scores, and running totals to `output`.
    ///
    /// A line starting with `q` (or `Q`) aborts the match, leaving a
    /// partial log; end-of-input counts as a plain Enter.
    pub fn run_interactive<R, W>(&mut self, input: &mut R, output: &mut W) -> std::io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        while !self.is_complete() {
            write!(
                output,
                "\n[round {}] Press Enter for next, or 'q' to quit: ",
                self.records.len() + 1
            )?;
            output.flush()?;

            let mut line = String::new();
            input.read_line(&mut line)?;
            // Only the first character counts; " q" is a plain Enter.
            if line.starts_with(['q', 'Q']) {
                self.abort();
                break;
            }

            self.run_round();
            if let Some(record) = self.records.last() {
                writeln!(
                    output,
                    " moves: [{} {} {}]  scores: [{} {} {}]  totals: [{} {} {}]",
                    record.moves[0],
                    record.moves[1],
                    record.moves[2],
                    record.scores[0],
                    record.scores[1],
                    record.scores[2],
                    self.totals[0],
                    self.totals[1],
                    self.totals[2],
                )?;
            }
        }
        Ok(())
    }
}

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pd_arena::errors::{LoadError, SimulationError, TournamentError};
use pd_arena::{PayoffTable, SimulationBuilder, Strategy, StrategyRegistry, Tournament};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Pause before each round and echo every round.
    Detailed,
    /// Run all rounds and print only the final totals.
    Fast,
    /// Every 3-player matchup from the roster, with a leaderboard.
    Tournament,
}

#[derive(Parser, Debug)]
#[command(
    name = "pd-arena",
    about = "Run three-player iterated prisoner's dilemma matches",
    long_about = "Give three or more strategy names (built-ins, or plugin tokens like\n\
                  'plugin:Name' / a module path). Three names play a single match;\n\
                  more than three defaults to a tournament."
)]
struct Args {
    /// Strategy tokens; at least three
    #[arg(required = true, num_args = 3..)]
    strategies: Vec<String>,

    /// Match mode; defaults to detailed for 3 strategies, tournament for more
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Rounds per match
    #[arg(short, long, default_value_t = 50)]
    steps: usize,

    /// Directory with per-strategy <Name>.cfg files
    #[arg(long)]
    configs: Option<PathBuf>,

    /// Directory searched for strategy plugin modules
    #[arg(long, default_value = "plugins")]
    plugins: PathBuf,

    /// Payoff table override file
    #[arg(long)]
    matrix: Option<PathBuf>,
}

type Result<T> = std::result::Result<T, ArenaError>;

#[derive(Debug, Error)]
enum ArenaError {
    #[error("failed to resolve strategy '{name}'")]
    Resolve {
        name: String,
        #[source]
        source: LoadError,
    },
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Tournament(#[from] TournamentError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = Args::parse();
    args.steps = args.steps.max(1);

    let payoff = match &args.matrix {
        Some(path) => PayoffTable::from_file(path),
        None => PayoffTable::default(),
    };

    let mut registry = StrategyRegistry::default().with_plugins_dir(&args.plugins);
    if let Some(configs) = &args.configs {
        registry = registry.with_configs_dir(configs);
    }

    let mode = args.mode.unwrap_or(if args.strategies.len() > 3 {
        Mode::Tournament
    } else {
        Mode::Detailed
    });

    match mode {
        Mode::Detailed | Mode::Fast => run_match(&args, payoff, &registry, mode),
        Mode::Tournament => run_tournament(&args, payoff, registry),
    }
}

fn run_match(args: &Args, payoff: PayoffTable, registry: &StrategyRegistry, mode: Mode) -> Result<()> {
    let mut players: Vec<Box<dyn Strategy>> = Vec::with_capacity(3);
    for name in args.strategies.iter().take(3) {
        let player = registry.create(name).map_err(|source| ArenaError::Resolve {
            name: name.clone(),
            source,
        })?;
        players.push(player);
    }

    println!("Mode: {mode:?}, steps={}", args.steps);
    println!(
        "Players: [{}, {}, {}]",
        players[0].identify(),
        players[1].identify(),
        players[2].identify()
    );

    let mut sim = SimulationBuilder::default()
        .payoff(payoff)
        .players(players)
        .rounds(args.steps)
        .build()?;

    if mode == Mode::Detailed {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        sim.run_interactive(&mut stdin.lock(), &mut stdout.lock())?;
    } else {
        sim.run();
        let totals = sim.totals();
        let mut stdout = std::io::stdout().lock();
        writeln!(
            stdout,
            "Final totals: [{} {} {}]",
            totals[0], totals[1], totals[2]
        )?;
    }
    Ok(())
}

fn run_tournament(args: &Args, payoff: PayoffTable, registry: StrategyRegistry) -> Result<()> {
    println!("Mode: tournament, steps={}", args.steps);

    let tournament = Tournament::new(payoff, registry, args.strategies.clone(), args.steps);
    let result = tournament.run()?;

    for m in &result.matches {
        println!(
            "Match: [{}, {}, {}] -> totals: [{} {} {}]",
            m.names[0], m.names[1], m.names[2], m.totals[0], m.totals[1], m.totals[2]
        );
    }

    println!("\n=== Leaderboard (sum over all matches) ===");
    for (rank, entry) in result.leaderboard.standings().iter().enumerate() {
        println!("{}. {} : {}", rank + 1, entry.name, entry.total);
    }
    Ok(())
}

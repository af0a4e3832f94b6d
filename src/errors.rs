use std::path::PathBuf;

use thiserror::Error;

/// Errors from resolving a strategy token to a live instance.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("strategy '{0}' is not a built-in and no matching plugin module was found")]
    NotFound(String),

    #[error("failed to open plugin module {path}")]
    OpenModule {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("plugin module {path} is missing required symbol `{symbol}`")]
    MissingSymbol {
        path: PathBuf,
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("plugin module {path} constructor returned a null strategy")]
    NullStrategy { path: PathBuf },
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SimulationError {
    #[error("Builder needs a payoff table")]
    NeedPayoffTable,

    #[error("Builder needs players")]
    NeedPlayers,

    #[error("a match needs exactly 3 players, got {0}")]
    WrongPlayerCount(usize),

    #[error("a match needs at least 1 round")]
    ZeroRounds,
}

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("a tournament roster needs at least 3 strategies, got {0}")]
    RosterTooSmall(usize),

    #[error("failed to resolve roster entry '{name}'")]
    Resolve {
        name: String,
        #[source]
        source: LoadError,
    },

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

//! Resolves a strategy token to a ready instance.
//!
//! Resolution order: a `plugin:` prefix forces external-module loading;
//! otherwise the token is matched case-insensitively against the built-in
//! alias table, and only then treated as an external module reference.
//! After construction the registry applies the per-strategy config file,
//! if one exists in the configured directory.
pub mod plugin;

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::LoadError;
use crate::strategy::{make_builtin, Strategy};

pub use plugin::PluginStrategy;

/// An explicit factory for strategy instances. The driver constructs one
/// and passes it wherever strategies need to be resolved; there is no
/// ambient global table.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    configs_dir: Option<PathBuf>,
    plugins_dir: PathBuf,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self {
            configs_dir: None,
            plugins_dir: PathBuf::from("plugins"),
        }
    }
}

/// A token that already carries a path separator or the platform's library
/// extension is used verbatim rather than expanded.
fn is_verbatim(token: &str) -> bool {
    token.contains('/') || token.contains('\\') || token.ends_with(DLL_SUFFIX)
}

/// Expand a module token to the path the loader will open. Bare names get
/// the conventional `<plugins>/<prefix><name><ext>` form.
fn module_path(plugins_dir: &Path, token: &str) -> PathBuf {
    if is_verbatim(token) {
        PathBuf::from(token)
    } else {
        plugins_dir.join(format!("{DLL_PREFIX}{token}{DLL_SUFFIX}"))
    }
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding `<StrategyName>.cfg` files. A missing file is
    /// never an error; the strategy starts with defaults.
    pub fn with_configs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.configs_dir = Some(dir.into());
        self
    }

    /// Directory searched for external modules referenced by bare name.
    pub fn with_plugins_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plugins_dir = dir.into();
        self
    }

    /// Resolve a token to a configured, ready strategy instance.
    pub fn create(&self, token: &str) -> Result<Box<dyn Strategy>, LoadError> {
        let mut strategy: Box<dyn Strategy> = if let Some(forced) = token.strip_prefix("plugin:") {
            self.load_module(forced)?
        } else if let Some(builtin) = make_builtin(token) {
            builtin
        } else {
            self.load_module(token)?
        };
        self.apply_config(strategy.as_mut());
        Ok(strategy)
    }

    fn load_module(&self, token: &str) -> Result<Box<dyn Strategy>, LoadError> {
        let path = module_path(&self.plugins_dir, token);
        // A bare token whose conventional file is absent is a plain
        // "not found"; explicit paths get the loader's own error.
        if !is_verbatim(token) && !path.exists() {
            return Err(LoadError::NotFound(token.to_string()));
        }
        Ok(Box::new(PluginStrategy::load(&path)?))
    }

    fn apply_config(&self, strategy: &mut dyn Strategy) {
        let Some(dir) = &self.configs_dir else {
            return;
        };
        let path = dir.join(format!("{}.cfg", strategy.identify()));
        if !path.is_file() {
            return;
        }
        match std::fs::read_to_string(&path) {
            Ok(contents) => strategy.configure(&contents),
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read strategy config, keeping defaults");
            }
        }
    }
}

//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use atelier_commerce::catalog::Catalog;
use atelier_commerce::{Currency, Price};
use tracing::debug;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;
use crate::session::SessionStore;

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Artwork catalog.
    pub catalog: Catalog,
    /// Session storage.
    pub session: SessionStore,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };
        debug!(config = ?config_path, "configuration loaded");
        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        let catalog = match &config.catalog.path {
            Some(path) => {
                let path = resolve(&cwd, path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("Invalid catalog: {}", path.display()))?
            }
            None => Catalog::from_json(BUILTIN_CATALOG).context("Invalid built-in catalog")?,
        };
        debug!(artworks = catalog.len(), "catalog loaded");

        let session = SessionStore::new(resolve(&cwd, &config.session.dir));

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog,
            session,
        })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest config file wins. A file that exists but does not parse
    /// is an error rather than a reason to keep searching.
    fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = CliConfig::load(&config_path)
                        .with_context(|| format!("Invalid config: {}", config_path.display()))?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Display currency.
    pub fn currency(&self) -> Currency {
        self.config.currency()
    }

    /// Format a price for display (e.g., "₹16,000").
    pub fn price(&self, price: Price) -> String {
        self.currency().format(price)
    }
}

/// Resolve a path relative to the working directory.
fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

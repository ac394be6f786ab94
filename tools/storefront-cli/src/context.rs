//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::fixtures::demo_catalog;
use storefront_commerce::catalog::StaticCatalog;
use storefront_commerce::cart::PricingCalculator;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration was read from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find a config file in the directory tree, starting at `start`.
    pub fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the configured catalog, or the demo catalog when none is set.
    pub fn catalog(&self) -> Result<StaticCatalog> {
        match &self.config.store.catalog_path {
            Some(path) => load_catalog(&self.resolve_path(path)),
            None => Ok(demo_catalog()),
        }
    }

    /// Pricing calculator for the configured store.
    pub fn calculator(&self) -> Result<PricingCalculator> {
        self.config.calculator()
    }

    /// Resolve a path relative to the config file's directory, or the working
    /// directory when no config file was loaded.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path());
        resolve(base, path)
    }
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Read a catalog file. `.toml` files are read as TOML, anything else as JSON.
pub fn load_catalog(path: &Path) -> Result<StaticCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))
    } else {
        StaticCatalog::from_json(&content)
            .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))
    }
}

//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::cart::{PricingCalculator, UnknownShippingPolicy};
use storefront_commerce::checkout::default_shipping_methods;
use storefront_commerce::Currency;
use tracing_subscriber::{fmt, EnvFilter};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Checkout configuration.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// The configured currency.
    pub fn currency(&self) -> Result<Currency> {
        match Currency::from_code(&self.store.currency) {
            Some(currency) => Ok(currency),
            None => bail!("Unsupported currency: {}", self.store.currency),
        }
    }

    /// Build the pricing calculator for this store.
    pub fn calculator(&self) -> Result<PricingCalculator> {
        let currency = self.currency()?;
        let policy = if self.checkout.strict_shipping {
            UnknownShippingPolicy::Reject
        } else {
            UnknownShippingPolicy::Free
        };
        Ok(PricingCalculator::new(currency, default_shipping_methods(currency))
            .with_unknown_shipping(policy))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// ISO currency code (default: USD).
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Catalog file (JSON or TOML). The demo catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            catalog_path: None,
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutConfig {
    /// Shipping method selected when a checkout starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_shipping: Option<String>,

    /// Reject unknown shipping methods while pricing instead of charging
    /// nothing for them.
    #[serde(default)]
    pub strict_shipping: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "warn" or "storefront_commerce=debug".
    #[serde(default = "default_level")]
    pub level: String,

    /// "pretty" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber. `RUST_LOG` takes precedence over
    /// the configured level; `verbose` raises the level to debug.
    pub fn init(&self, verbose: bool) {
        let level = if verbose { "debug" } else { self.level.as_str() };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        // Logs go to stderr so JSON command output on stdout stays parseable.
        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        if let Err(e) = result {
            eprintln!("Failed to initialize logging: {}", e);
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[store]
currency = "USD"
# catalog_path = "catalog.json"

[checkout]
default_shipping = "standard"
strict_shipping = false

[logging]
level = "warn"
format = "pretty"
"#
    .to_string()
}

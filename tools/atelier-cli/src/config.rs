//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atelier_commerce::Currency;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["atelier.toml", ".atelier.toml", "atelier.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront presentation.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Checkout behaviour.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Session storage.
    #[serde(default)]
    pub session: SessionConfig,
}

impl CliConfig {
    /// Load config from a file.
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

    /// The display currency, falling back to INR for unknown codes.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.storefront.currency).unwrap_or_default()
    }

    /// Problems that would make the storefront misbehave.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.storefront.name.trim().is_empty() {
            errors.push("storefront.name is required".to_string());
        }
        if Currency::from_code(&self.storefront.currency).is_none() {
            errors.push(format!(
                "storefront.currency '{}' is not a supported currency code",
                self.storefront.currency
            ));
        }
        if self.session.dir.as_os_str().is_empty() {
            errors.push("session.dir must not be empty".to_string());
        }

        errors
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Storefront presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Shop name shown in headers.
    #[serde(default = "default_name")]
    pub name: String,

    /// Currency code used to display prices.
    ///
    /// Only the symbol changes. Catalog amounts are shown as stored, with no
    /// conversion, so this should match the currency the catalog is priced in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_name() -> String {
    "Atelier".to_string()
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            currency: default_currency(),
        }
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Checkout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated order-processing time in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_processing_delay_ms() -> u64 {
    1500
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

/// Session storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory holding the cart and submissions, relative to the
    /// working directory unless absolute.
    #[serde(default = "default_session_dir")]
    pub dir: PathBuf,
}

fn default_session_dir() -> PathBuf {
    PathBuf::from(".atelier")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: default_session_dir(),
        }
    }
}

/// Generate a default atelier.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Atelier storefront configuration

[storefront]
name = "{name}"
currency = "INR"

[catalog]
# path = "catalog.json"

[checkout]
processing_delay_ms = 1500

[session]
dir = ".atelier"
"#,
        name = name
    )
}

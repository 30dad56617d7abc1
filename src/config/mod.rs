//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default Stripe API base URL. Overridable so tests can point the
/// processor at a local stub.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

fn default_currency() -> String {
    "cad".to_string()
}

fn default_form_url() -> String {
    "/".to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Complete configuration for the checkout service.
///
/// The processor secret is a plain field here on purpose: the caller decides
/// where it comes from (environment, file, secret manager) and injects it at
/// construction time. The handlers never read ambient process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Secret key used to authenticate against the payment processor
    pub secret_key: String,

    /// ISO currency code for every charge (single fixed currency)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Where the failure page links back to (the originating order form)
    #[serde(default = "default_form_url")]
    pub form_url: String,

    /// Base URL of the payment processor API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Socket address the service binary binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl CheckoutConfig {
    /// Create a configuration with the given secret and defaults for the rest
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            currency: default_currency(),
            form_url: default_form_url(),
            api_base: default_api_base(),
            bind_addr: default_bind_addr(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{path}'"))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("failed to parse config")?;
        Ok(config)
    }

    /// Assemble configuration from environment variables.
    ///
    /// Used by the service binary only; library code always receives the
    /// config as a value. `STRIPE_SECRET_KEY` is required, the rest fall back
    /// to defaults.
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .context("STRIPE_SECRET_KEY must be set")?;
        let mut config = Self::new(secret_key);
        if let Ok(currency) = std::env::var("CHECKOUT_CURRENCY") {
            config.currency = currency;
        }
        if let Ok(form_url) = std::env::var("CHECKOUT_FORM_URL") {
            config.form_url = form_url;
        }
        if let Ok(api_base) = std::env::var("CHECKOUT_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(bind_addr) = std::env::var("CHECKOUT_BIND_ADDR") {
            config.bind_addr = bind_addr;
        }
        Ok(config)
    }
}

//! Gateway configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FingateError;

/// Issuer account of the BIZ token.
pub const DEFAULT_ISSUER: &str = "bf42S78serP2BeSx7HGtwQR2QASYaHVqyb";

pub const DEFAULT_CURRENCY: &str = "BIZ";

/// Transfer rate applied to outgoing payments.
pub const DEFAULT_FEE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Ledger node endpoint, e.g. `wss://...`
    pub server: String,
    /// Sign transactions locally instead of sending the secret to the node
    pub local_sign: bool,
    pub fee: u32,
    pub currency: String,
    pub issuer: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            local_sign: true,
            fee: DEFAULT_FEE,
            currency: DEFAULT_CURRENCY.to_string(),
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, FingateError> {
        let config: Self = toml::from_str(input).map_err(|e| FingateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FingateError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FingateError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), FingateError> {
        if self.server.is_empty() {
            return Err(FingateError::Config("server endpoint is empty".into()));
        }
        if self.currency.is_empty() {
            return Err(FingateError::Config("currency is empty".into()));
        }
        Ok(())
    }
}

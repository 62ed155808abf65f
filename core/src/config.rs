//! Runtime configuration for the admin tooling.

use crate::error::ExchangeResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Path of the SQLite database file.
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Fixed RNG seed. None seeds from entropy; set it to replay a run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// How many demo participants `exchange-admin --demo` creates.
    #[serde(default = "default_demo_participants")]
    pub demo_participants: usize,
}

fn default_db_path() -> String {
    "exchange.db".to_string()
}

fn default_demo_participants() -> usize {
    5
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            seed: None,
            demo_participants: default_demo_participants(),
        }
    }
}

impl ExchangeConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &str) -> ExchangeResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {path}: {e}"))?;
        Ok(serde_json::from_str(&text)?)
    }
}

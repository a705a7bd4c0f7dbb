use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;

use crate::domain::assumptions::Assumptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub assumptions: Assumptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Pretty-print the JSON report
    pub pretty: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("SOLAR_SIZER__").split("__"));
        Ok(figment.extract()?)
    }
}

use anyhow::{Context, Result};
use solar_sizer::config::Config;
use solar_sizer::request::SizingRequest;
use solar_sizer::sizing::SizingModel;
use solar_sizer::telemetry::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;

    let path = std::env::args()
        .nth(1)
        .context("usage: solar-sizer <request.toml>")?;
    let request = SizingRequest::from_path(&path)?;

    // Assumptions in the request file win over the configured defaults
    let assumptions = request
        .assumptions
        .clone()
        .unwrap_or_else(|| cfg.assumptions.clone());

    let profile = request.into_profile()?;
    info!(appliances = profile.len(), "sizing solar PV system");

    let model = SizingModel::new(assumptions);
    let report = model.size(&profile)?;

    let json = if cfg.report.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}

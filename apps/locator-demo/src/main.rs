mod config;
mod error;
mod scenario;

use crate::config::{DemoConfig, DEFAULT_CONFIG_PATH};

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = DemoConfig::load_or_default(&path)?;

    let _ = env_logger::builder()
        .parse_filters(&cfg.log_filter)
        .parse_default_env()
        .is_test(false)
        .try_init();

    log::info!("locator-demo: config={path} operations={}", cfg.operations);

    scenario::run_all(cfg.operations)?;

    log::info!("locator-demo: all scenarios passed");
    Ok(())
}

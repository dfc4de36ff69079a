use stockkeep_cli::{DemoConfig, run_demo};

fn main() -> anyhow::Result<()> {
    stockkeep_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(path = %config.inventory_path.display(), "running inventory demo");

    let stdout = std::io::stdout();
    run_demo(&config, &mut stdout.lock())?;
    Ok(())
}

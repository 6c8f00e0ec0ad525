fn main() -> anyhow::Result<()> {
    stocktrack_observability::init();

    let config = stocktrack_cli::DemoConfig::from_env();
    tracing::debug!(?config, "starting demo");

    let stdout = std::io::stdout();
    stocktrack_cli::demo::run(&config, stdout.lock())
}

use anyhow::Result;
use rebuild_fixture::{
    config::Config,
    constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER},
    entropy::RandEntropy,
    generate, survey,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_cli()?;
    init_tracing(config.verbose);

    let mut entropy = RandEntropy::from_os();
    generate(&config, &mut entropy)?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        let listing = survey::survey(&config.target)?;
        tracing::debug!("Fixture contents:\n{}", listing.render());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

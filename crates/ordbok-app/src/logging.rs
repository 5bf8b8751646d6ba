use ordbok_config::logging::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. RUST_LOG wins over the configured filter.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

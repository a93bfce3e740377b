use tracing_subscriber::EnvFilter;

const ENV_LOG_LEVEL: &str = "MDNS_PUB_LOG_LEVEL";

/// Initialises the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `--log-level` flag, then the
/// `MDNS_PUB_LOG_LEVEL` environment variable, then `info`.
pub fn init_logging(cli_level: Option<&str>) {
    let default_level = cli_level
        .map(str::to_string)
        .or_else(|| std::env::var(ENV_LOG_LEVEL).ok())
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

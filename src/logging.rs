use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging with a default filter.
///
/// `RUST_LOG` overrides the default, which is `info` for this crate and
/// `warn` for everything else. Logs go to stderr so stdout stays clean for
/// the rendered tables.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,otp_tables=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

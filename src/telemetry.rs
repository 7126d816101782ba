use std::io;
use tracing_subscriber::EnvFilter;

pub const SERVER_DIRECTIVES: &str = "info,tower_http=info";
pub const CLI_DIRECTIVES: &str = "warn";

/// `RUST_LOG` wins; otherwise falls back to `default_directives`.
pub fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Logs go to stderr so stdout stays free for rendered output.
pub fn init_tracing(default_directives: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directives))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

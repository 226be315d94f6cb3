#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr; stdout carries the menu.
pub(crate) fn init_tracing(directive: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_new(directive) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("ignoring invalid log filter {directive:?}: {err}");
            EnvFilter::new(crate::config::DEFAULT_LOG_FILTER)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber.
///
/// The level is read from the `LOGLEVEL` environment variable
/// (`ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`) and defaults to `INFO`.
/// Calling it more than once is harmless: only the first call installs it.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string()));

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        tracing::subscriber::set_global_default(subscriber)
            .unwrap_or_else(|e| eprintln!("Error setting default subscriber: {e}"));
        tracing::debug!("Log level set to: {}", level);
    });
}

/// Maps a textual log level to a `tracing::Level`, falling back to `INFO`
#[must_use]
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "DEBUG" => Level::DEBUG,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}

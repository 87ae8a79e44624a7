/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/5/25
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::{debug, Level};

static INIT: Once = Once::new();

fn level_from_str(value: &str) -> Level {
    match value.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global `tracing` subscriber once, honouring `LOGLEVEL`.
///
/// Safe to call from every test; later calls are no-ops.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string());
        let level = level_from_str(&log_level);

        let subscriber = tracing_subscriber::fmt().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}

//! Tracing setup: compact stderr diagnostics by default, a JSON trace
//! file when `--logs` is set, nothing at all under `--no-logs`.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_subscriber::fmt::time::UtcTime;

use crate::config::AppConfig;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Path of the JSON trace file used with `--logs`.
pub fn trace_log_path() -> PathBuf {
    env::var("IRMIX_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("irmix_trace.jsonl"))
}

pub fn init_tracing(config: &AppConfig) {
    if config.no_logs {
        return;
    }
    let file_log = config.logs;

    let _ = TRACING_INIT.get_or_init(|| {
        if file_log {
            let path = trace_log_path();
            let file = match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => file,
                Err(_) => return,
            };
            let subscriber = tracing_subscriber::fmt()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false)
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        } else {
            // stderr keeps diagnostics apart from the stdout session echo
            let subscriber = tracing_subscriber::fmt()
                .compact()
                .with_target(false)
                .with_writer(io::stderr)
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
    });
}

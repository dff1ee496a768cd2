//! Logging Infrastructure
//!
//! Structured logging setup. `RUST_LOG` wins over the configured level when
//! set; a log directory adds a daily rolling file next to stdout.

use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Initialize the logger with optional file output
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "bistro-server");
            let _ = subscriber
                .with_writer(std::io::stdout.and(file_appender))
                .try_init();
            return;
        }
        eprintln!("Log directory {dir} does not exist, logging to stdout only");
    }

    let _ = subscriber.try_init();
}

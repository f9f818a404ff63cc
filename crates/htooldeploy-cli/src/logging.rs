//! Console and log file output.
//!
//! The console shows messages at the level picked with `--verbosity`;
//! everything down to DEBUG also goes to a per-run file under the temp dir.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map `--verbosity` (0..=3) to the console level.
pub fn console_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// `<tmp>/htooldeploy/htooldeploy_<unix seconds>.log`
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir()
        .join("htooldeploy")
        .join(format!("htooldeploy_{}.log", chrono::Utc::now().timestamp()))
}

/// Install the global subscriber.
///
/// Returns the log file path, or `None` when the file could not be opened;
/// console output works either way. `RUST_LOG` overrides the console level.
pub fn init(verbosity: u8) -> Option<PathBuf> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(console_level(verbosity).into())
        .from_env_lossy();
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(false)
        .with_filter(console_filter);

    let path = log_file_path();
    let file_layer = match open_log_file(&path) {
        Ok(file) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(LevelFilter::DEBUG),
        ),
        Err(err) => {
            eprintln!("Could not create log file {}: {err}", path.display());
            None
        }
    };
    let logging_to_file = file_layer.is_some();

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    logging_to_file.then_some(path)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

//! Logging setup for Folio
//!
//! Installs a `tracing` subscriber with an `EnvFilter` (`RUST_LOG` wins over
//! the configured default level), a console layer (pretty or JSON lines),
//! and an optional JSON file layer written through `tracing-appender`.
//!
//! ```ignore
//! use folio_logging::{FolioSubscriberBuilder, LogConfig};
//!
//! let _guard = FolioSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```

pub mod config;

pub use config::{ConsoleConfig, FileConfig, LogConfig, RotationStrategy};

use std::fs::{self, File};
use std::str::FromStr;

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("invalid console level '{0}'")]
    Level(String),

    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to create rolling appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Builder for configuring and installing the Folio logging subscriber
pub struct FolioSubscriberBuilder {
    config: LogConfig,
}

impl Default for FolioSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FolioSubscriberBuilder {
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Install the subscriber globally.
    ///
    /// Returns the file writer guard, which must be kept alive for the
    /// duration of the program. Setup failures are reported on stderr and
    /// leave logging disabled.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: logging disabled: {e}");
                None
            }
        }
    }

    /// Install the subscriber globally, reporting failures to the caller.
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.config.default_level)?,
        };

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;

        let console = &self.config.console;
        if console.enabled {
            let level = match &console.level {
                Some(level) => parse_level(level)?,
                None => LevelFilter::TRACE,
            };
            let layer = if console.pretty {
                tracing_subscriber::fmt::layer()
                    .with_ansi(console.ansi)
                    .with_target(true)
                    .with_filter(level)
                    .boxed()
            } else {
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_filter(level)
                    .boxed()
            };
            layers.push(layer);
        }

        if let Some(file_config) = &self.config.file {
            let (writer, file_guard) = create_file_writer(file_config)?;
            guard = Some(file_guard);
            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(writer)
                    .boxed(),
            );
        }

        tracing_subscriber::registry()
            .with(layers)
            .with(env_filter)
            .try_init()?;

        Ok(guard)
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    LevelFilter::from_str(level).map_err(|_| LoggingError::Level(level.to_string()))
}

/// Opens the writer for file output. `Never` truncates a single file;
/// the rotating strategies append and prune old files.
fn create_file_writer(config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    fs::create_dir_all(&config.directory)?;

    let rotation = match config.rotation {
        RotationStrategy::Never => {
            let path = config.directory.join(format!("{}.log", config.prefix));
            let file = File::create(path)?;
            return Ok(tracing_appender::non_blocking(file));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };

    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&config.prefix)
        .filename_suffix("log");
    if let Some(max) = config.max_files {
        builder = builder.max_log_files(max);
    }
    let appender = builder.build(&config.directory)?;
    Ok(tracing_appender::non_blocking(appender))
}

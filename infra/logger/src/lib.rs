//! # Logger
//!
//! Installs the process-wide `tracing` subscriber.
//!
//! * Console output goes to **stderr** so command output on stdout stays machine-readable.
//! * Optional rolling file output through a non-blocking writer; keep the returned
//!   [`Logger`] alive until shutdown so buffered lines are flushed.
//! * `RUST_LOG` is honoured; [`LoggerBuilder::env_filter`] sets a programmatic default.
//!
//! ## Example
//!
//! ```rust
//! # use ncraft_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("ncraft")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Line format shared by the console and file layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug)]
struct Settings {
    console: bool,
    format: LogFormat,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    env_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            format: LogFormat::Compact,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Builder for the global subscriber. A name is mandatory; file-only knobs become
/// available after [`LoggerBuilder::path`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    settings: Settings,
    name: N,
    file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { settings: self.settings, name: WithName(name.into()), file: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Adds a directive string such as `ncraft_availability=debug,reqwest=warn`.
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Emits JSON lines on every enabled output.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.settings.format = LogFormat::Json;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.settings.format = format;
        self
    }

    /// Enables rolling file output under `path`.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut settings = self.settings;
        settings.path = Some(path.into());
        LoggerBuilder { settings, name: self.name, file: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// [`LoggerError::Subscriber`] if a global subscriber is already set,
    /// [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    /// a bad filter or no enabled output, [`LoggerError::Appender`] when the
    /// log directory cannot be used.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: WithName(name), .. } = self;
        validate(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            let console = layer().with_writer(std::io::stderr);
            layers.push(match settings.format {
                LogFormat::Compact => console.compact().with_ansi(true).boxed(),
                LogFormat::Json => console.json().with_ansi(false).boxed(),
            });
        }

        let guard = match &settings.path {
            Some(path) => {
                let (file_layer, guard) = file_layer(&settings, &name, path)?;
                layers.push(file_layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable the console or set a path.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed subscriber. Holds the file writer guard, if any.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: NoName, file: PhantomData }
    }

    /// Returns the file writer guard, if file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers");
        }
    }
}

/// Parses a level name (`trace`, `debug`, `info`, `warn`, `error`, `off`).
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}

fn file_layer(
    settings: &Settings,
    name: &str,
    path: &Path,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create path: {}", path.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(settings.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(path)
        .context(format!("Log directory {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let base = layer().with_writer(writer).with_ansi(false);
    let boxed = match settings.format {
        LogFormat::Compact => base.boxed(),
        LogFormat::Json => base.json().boxed(),
    };

    Ok((boxed, guard))
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid env filter '{filter}': {e}").into(),
            context: None,
        }),
    }
}

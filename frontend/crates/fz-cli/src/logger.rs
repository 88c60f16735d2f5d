use crate::error::{CliError, Result as CliResult};

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, debug};

/// HTTP stack crates that are chatty at debug level.
const NOISY_TARGETS: [&str; 3] = ["reqwest", "hyper_util", "rustls"];

/// Where log lines end up.
enum Sink {
    /// Interactive use: short `LEVEL message` lines on stderr.
    Terminal { colored: bool },
    /// Timestamped lines with the emitting module, appended to a file.
    File(File),
}

impl Sink {
    fn open(log_file: Option<&Path>, colored: bool) -> CliResult<Self> {
        let Some(path) = log_file else {
            return Ok(Self::Terminal { colored });
        };

        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(Self::File)
            .map_err(|e| {
                CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
            })
    }

    fn dispatch(self) -> Dispatch {
        match self {
            Self::Terminal { colored: true } => {
                let colors = ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red);

                Dispatch::new()
                    .format(move |out, message, record| {
                        out.finish(format_args!("{:>5} {message}", colors.color(record.level())))
                    })
                    .chain(std::io::stderr())
            }
            Self::Terminal { colored: false } => Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("{:>5} {message}", record.level()))
                })
                .chain(std::io::stderr()),
            Self::File(file) => Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{date} {level} {target}] {message}",
                        date = humantime::format_rfc3339_millis(SystemTime::now()),
                        level = record.level(),
                        target = record.target(),
                    ))
                })
                .chain(file),
        }
    }
}

/// Level applied to the HTTP stack: never more verbose than `warn`.
pub fn dependency_level(level: LevelFilter) -> LevelFilter {
    level.min(LevelFilter::Warn)
}

/// Install the global logger.
///
/// stdout is reserved for command output, so terminal logging goes to stderr.
/// `colored` is ignored when `log_file` is set.
#[track_caller]
pub fn initialize(
    log_level: fz_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level = *log_level;
    let sink = Sink::open(log_file.as_deref(), colored)?;

    NOISY_TARGETS
        .into_iter()
        .fold(Dispatch::new().level(level), |dispatch, target| {
            dispatch.level_for(target, dependency_level(level))
        })
        .chain(sink.dispatch())
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => debug!("Logging at {level} to {}", path.display()),
        None => debug!("Logging at {level} to stderr"),
    }

    Ok(())
}

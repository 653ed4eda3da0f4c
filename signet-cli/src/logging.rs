//! Logging initialisation for the signet CLI.
//!
//! Diagnostics always go to `stderr`; `stdout` carries only rendered graphs.
//! `RUST_LOG` wins when set. Otherwise the default filter follows the `-v`
//! count, so `-vv` surfaces the generators' `debug` spans.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting `human` or `json` log output.
pub const LOG_FORMAT_ENV: &str = "SIGNET_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Supported log encodings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, tagged with the enclosing span.
    Json,
}

/// Resolved logging configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogSettings {
    /// Output encoding.
    pub format: LogFormat,
    /// Filter applied when `RUST_LOG` is unset.
    pub default_directive: &'static str,
}

impl LogSettings {
    /// Builds settings for `verbosity` (the number of `-v` flags), reading
    /// the format from [`LOG_FORMAT_ENV`].
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the format variable is not Unicode or
    /// names an unsupported format.
    pub fn from_env(verbosity: u8) -> Result<Self, LoggingError> {
        let format = match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => parse_log_format(&raw)?,
            Err(env::VarError::NotPresent) => LogFormat::default(),
            Err(err @ env::VarError::NotUnicode(_)) => {
                return Err(LoggingError::InvalidUnicode {
                    name: LOG_FORMAT_ENV,
                    source: err,
                });
            }
        };
        Ok(Self {
            format,
            default_directive: default_directive(verbosity),
        })
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `SIGNET_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Installs global structured logging for `verbosity` unless it is already
/// configured. Later calls are no-ops.
///
/// # Errors
/// Returns [`LoggingError`] if [`LogSettings::from_env`] rejects the
/// environment. A subscriber installed elsewhere is reported on `stderr`
/// and otherwise tolerated.
pub fn init_logging(verbosity: u8) -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let settings = LogSettings::from_env(verbosity)?;
    if let Err(LoggingError::InstallFailed { source }) = install_subscriber(settings) {
        eprintln!("structured logging already configured elsewhere: {source}");
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(settings: LogSettings) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_directive));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = match settings.format {
        LogFormat::Json => fmt_layer.json().with_current_span(true).boxed(),
        LogFormat::Human => fmt_layer.compact().boxed(),
    };

    // Another logger may already own the `log` slot; keep it if so.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,signet=info,signet_cli=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    fn parse_log_format_accepts_supported_values(#[case] raw: &str, #[case] expected: LogFormat) {
        let format = parse_log_format(raw).expect("format must parse");
        assert_eq!(format, expected);
    }

    #[test]
    fn parse_log_format_rejects_unknown_values() {
        let err = parse_log_format("yaml").expect_err("yaml is not supported");
        match err {
            LoggingError::UnsupportedFormat { provided } => assert_eq!(provided, "yaml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case(0, "warn,signet=info,signet_cli=info")]
    #[case(1, "info")]
    #[case(2, "debug")]
    #[case(3, "trace")]
    #[case(9, "trace")]
    fn verbosity_selects_default_filter(#[case] verbosity: u8, #[case] expected: &str) {
        assert_eq!(default_directive(verbosity), expected);
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(0).expect("logging must initialise");
        init_logging(2).expect("subsequent calls must be no-ops");
    }
}

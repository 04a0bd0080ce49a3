//! Structured logging setup.
//!
//! Installs a global `tracing-subscriber` fmt subscriber described by a
//! [`LoggingConfig`]. `RUST_LOG` takes precedence over the configured level.

use crate::config::LoggingConfig;
use crate::error::{CodecError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// # Errors
/// Returns `CodecError::LoggingError` if the configuration is invalid, the log
/// file cannot be opened, or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(CodecError::LoggingError(errors.join("; ")));
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(config.log_level).into())
    });

    let writer = make_writer(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(!config.log_to_file);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| CodecError::LoggingError(e.to_string()))?;

    tracing::debug!(app = %config.app_name, level = %config.log_level, "logging initialised");
    Ok(())
}

fn make_writer(config: &LoggingConfig) -> Result<BoxMakeWriter> {
    let file = match (config.log_to_file, config.log_file_path.as_deref()) {
        (true, Some(path)) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| CodecError::LoggingError(format!("Failed to open log file: {e}")))?,
        ),
        _ => None,
    };

    Ok(match (config.log_to_console, file) {
        (true, Some(file)) => BoxMakeWriter::new(std::io::stderr.and(Mutex::new(file))),
        (false, Some(file)) => BoxMakeWriter::new(Mutex::new(file)),
        (_, None) => BoxMakeWriter::new(std::io::stderr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected_before_install() {
        let config = LoggingConfig {
            log_to_file: true,
            log_file_path: None,
            ..LoggingConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(CodecError::LoggingError(_))
        ));
    }

    #[test]
    fn test_second_install_fails() {
        let config = LoggingConfig::default();
        // The first call may already lose to another test in this binary.
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(CodecError::LoggingError(_))
        ));
    }
}

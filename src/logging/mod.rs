//! Tracing setup
//!
//! Builds the subscriber from [`LoggingConfig`]. One-shot commands log to
//! stderr; the terminal dashboard logs to a file because it owns the screen.

use crate::config::{LogFormat, LoggingConfig};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// `logging.file`, or nowhere when it is empty
    File,
}

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level
/// and any component-specific log levels configured in the LoggingConfig.
///
/// # Examples
///
/// ```
/// use spmon::config::LoggingConfig;
/// use spmon::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("poller".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     component_levels: Some(component_levels),
///     ..LoggingConfig::default()
/// };
///
/// let filter_str = build_filter_directives(&config);
/// assert_eq!(filter_str, "info,spmon::poller=debug");
/// ```
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",spmon::{}={}", component, level));
        }
    }

    filter_str
}

fn make_writer(
    config: &LoggingConfig,
    target: LogTarget,
) -> Result<(BoxMakeWriter, bool), Box<dyn std::error::Error>> {
    match (target, &config.file) {
        (LogTarget::Stderr, _) => Ok((BoxMakeWriter::new(std::io::stderr), true)),
        (LogTarget::File, Some(path)) if !path.as_os_str().is_empty() => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok((BoxMakeWriter::new(Mutex::new(file)), false))
        }
        (LogTarget::File, _) => Ok((BoxMakeWriter::new(std::io::sink), false)),
    }
}

/// Initialize tracing based on configuration
pub fn init_tracing(
    config: &LoggingConfig,
    target: LogTarget,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let (writer, ansi) = make_writer(config, target)?;

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_ansi(ansi)
                        .with_writer(writer),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
                .try_init()?;
        }
    }

    Ok(())
}

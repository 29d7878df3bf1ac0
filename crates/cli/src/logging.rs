//! Logging setup.
//!
//! All logging output is directed to stderr to preserve stdout for program
//! output. Format and filter come from CLI flags first, then environment:
//!
//! * `FEATURE_DEMO_LOG_FORMAT` - `json` for JSON lines, anything else for text
//! * `FEATURE_DEMO_LOG` - filter directives, e.g. `registry=debug`
//! * `RUST_LOG` - fallback when `FEATURE_DEMO_LOG` is unset or invalid
//!
//! With nothing set, only warnings and errors are logged.

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{LogFormat, LogLevel};

const LOG_ENV: &str = "FEATURE_DEMO_LOG";
const LOG_FORMAT_ENV: &str = "FEATURE_DEMO_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs the global tracing subscriber. Must be called at most once.
pub fn init(format: Option<LogFormat>, level: Option<LogLevel>) -> Result<()> {
    let filter = create_env_filter(level);
    let format = format.unwrap_or_else(format_from_env);

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .with(filter)
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(filter)
            .try_init(),
    }
    .context("failed to install tracing subscriber")?;

    tracing::debug!(?format, "Logging initialized");
    Ok(())
}

fn format_from_env() -> LogFormat {
    match std::env::var(LOG_FORMAT_ENV) {
        Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

fn create_env_filter(level: Option<LogLevel>) -> EnvFilter {
    if let Some(level) = level {
        return EnvFilter::new(level.as_directive());
    }

    // An unparsable FEATURE_DEMO_LOG falls through to RUST_LOG.
    if let Some(filter) = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
    {
        return filter;
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

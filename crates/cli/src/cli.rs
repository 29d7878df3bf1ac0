use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use github::RepositoryLocator;

use crate::console::Console;
use crate::demo;

/// Build a named feature registry and print it.
#[derive(Debug, Parser)]
#[command(name = "feature-demo", version)]
pub struct Cli {
    /// Log output format (overrides FEATURE_DEMO_LOG_FORMAT)
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Log verbosity (overrides FEATURE_DEMO_LOG and RUST_LOG)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Defaults to `demo` with its default arguments
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add features to a registry, echoing each one, then list them
    Demo(DemoArgs),
    /// Print the owner/repo a GitHub repository URL points at
    ParseUrl {
        /// Repository URL, e.g. https://github.com/owner/repo.git
        url: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    /// Registry name
    #[arg(long, default_value = demo::DEFAULT_NAME)]
    pub name: String,

    /// Feature to add; repeat for several. Defaults to the built-in three.
    #[arg(long = "feature", value_name = "FEATURE")]
    pub features: Vec<String>,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            name: demo::DEFAULT_NAME.to_owned(),
            features: Vec::new(),
        }
    }
}

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    Text,
    /// JSON structured format
    Json,
}

/// Log level options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Informational messages and above
    Info,
    /// Debug messages and above
    Debug,
    /// All messages including trace
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl Cli {
    /// Runs the selected command, writing program output to `console`.
    pub fn dispatch<W: Write>(self, console: &mut Console<W>) -> Result<()> {
        match self.command {
            None => {
                demo::run(&DemoArgs::default(), console)?;
            }
            Some(Commands::Demo(args)) => {
                demo::run(&args, console)?;
            }
            Some(Commands::ParseUrl { url }) => {
                let locator = RepositoryLocator::parse(&url)
                    .with_context(|| format!("cannot parse repository URL '{url}'"))?;
                tracing::info!(owner = %locator.owner, repo = %locator.repo, "Parsed repository URL");
                console.line(&locator).context("failed to write to stdout")?;
            }
        }
        console.flush().context("failed to flush stdout")
    }
}

// NOTE: Command Organization Rationale
//
// Why `show` reads stdin by default?
// - The usual producer is `curl .../predict-all | oncoview show`
// - A file argument is still accepted for saved responses

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

use crate::presentation::ViewMode;

#[derive(Parser)]
#[command(name = "oncoview")]
#[command(about = "Present multi-model breast cancer subtype predictions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (default: $ONCOVIEW_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a prediction response from a file or stdin
    Show {
        /// Payload file (JSON); reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Toggle the probability breakdown of a model (repeatable)
        #[arg(long = "expand", value_name = "MODEL")]
        expand: Vec<String>,

        /// Expand the probability breakdown of every model
        #[arg(long, conflicts_with = "expand")]
        expand_all: bool,

        /// Information density of the text output
        #[arg(long, value_enum)]
        mode: Option<ViewModeArg>,
    },

    /// List the known cancer subtype categories
    Classes,

    /// Inspect or edit the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Map a probability label to a category code
    SetAlias {
        /// Class label as it appears in the probabilities of a response
        label: String,

        #[arg(allow_negative_numbers = true)]
        code: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewModeArg {
    Minimal,
    Compact,
    Standard,
    Verbose,
}

impl From<ViewModeArg> for ViewMode {
    fn from(mode: ViewModeArg) -> Self {
        match mode {
            ViewModeArg::Minimal => ViewMode::Minimal,
            ViewModeArg::Compact => ViewMode::Compact,
            ViewModeArg::Standard => ViewMode::Standard,
            ViewModeArg::Verbose => ViewMode::Verbose,
        }
    }
}

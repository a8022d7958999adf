//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for stylegate commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Maps the CLI choice to the termcolor equivalent
    pub fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

impl From<crate::config::OutputFormat> for OutputFormat {
    fn from(format: crate::config::OutputFormat) -> Self {
        match format {
            crate::config::OutputFormat::Human => OutputFormat::Human,
            crate::config::OutputFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

impl From<crate::config::ColorOption> for ColorChoice {
    fn from(color: crate::config::ColorOption) -> Self {
        match color {
            crate::config::ColorOption::Auto => ColorChoice::Auto,
            crate::config::ColorOption::Always => ColorChoice::Always,
            crate::config::ColorOption::Never => ColorChoice::Never,
        }
    }
}

/// Stylegate CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "stylegate")]
#[command(about = "Layered style-rule enforcement with glob-scoped severity overrides")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (defaults to the `[output]` setting in the config)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "stylegate.toml")]
    pub config: String,
}

/// Available stylegate subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate enabled rules against files and report violations
    Check {
        /// Paths to check (defaults to current directory)
        #[arg(default_value = ".")]
        paths: Vec<String>,

        /// Output format (defaults to the `[output]` setting in the config)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Treat warn-severity violations as non-fatal
        #[arg(long)]
        allow_warnings: bool,
    },

    /// List the rule catalog with default severities
    List {
        /// Output format (defaults to the `[output]` setting in the config)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Print the effective rule set for one file path
    Resolve {
        /// File path to resolve
        path: String,

        /// Output format (defaults to the `[output]` setting in the config)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Initialize stylegate in this repository
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

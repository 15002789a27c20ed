use crate::tracing::{LogLevel, TracingFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pkgscan")]
#[command(about = "Validate package.json manifests and list monorepo workspaces")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'r',
        long,
        global = true,
        env = "PKGSCAN_ROOT",
        help = "Repository root containing the top-level package.json",
        default_value = "."
    )]
    pub root: PathBuf,

    #[arg(
        short = 'l',
        long,
        global = true,
        env = "PKGSCAN_LOG_LEVEL",
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        global = true,
        env = "PKGSCAN_LOG_FORMAT",
        help = "Log output format",
        default_value = "compact",
        value_enum
    )]
    pub log_format: TracingFormat,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub json: bool,
}

impl Cli {
    /// Log format after applying the `--json` shorthand.
    pub const fn effective_log_format(&self) -> TracingFormat {
        if self.json {
            TracingFormat::Json
        } else {
            self.log_format
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Validate the root manifest as a polyrepo or monorepo")]
    Validate,
    #[command(about = "List the workspaces of a monorepo")]
    Workspaces {
        #[arg(long, short = 'R', help = "Descend into nested monorepos")]
        recursive: bool,
        #[arg(
            long,
            help = "Output format",
            default_value = "text",
            value_enum
        )]
        format: OutputFormat,
    },
    #[command(about = "Show version information")]
    Version,
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One entry per line
    Text,
    /// A JSON array
    Json,
}

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vmc_core::Action;
use vmc_model::Status;

#[derive(Parser)]
#[command(
    name = "vmc",
    version,
    about = "Vintage machine catalog - track which machines are checked out or in repair",
    long_about = "Track the availability of catalog machines.\n\n\
                  Statuses are kept in a local storage file and projected onto\n\
                  catalog and detail pages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Config file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Storage file (overrides the config file).
    #[arg(long = "storage", value_name = "PATH", global = true)]
    pub storage: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List machines with their statuses.
    List,

    /// Show the status of one machine.
    Status(SlugArgs),

    /// Press one of a machine's detail page toggles.
    Toggle(ToggleArgs),

    /// Press the single checkout/return control.
    Checkout(SlugArgs),

    /// Set a machine's status directly.
    Set(SetArgs),

    /// Print the catalog page, or a machine's detail page, as HTML.
    Render(RenderArgs),

    /// Forget every stored status.
    Clear,
}

#[derive(Parser)]
pub struct SlugArgs {
    /// Machine identifier.
    #[arg(value_name = "SLUG")]
    pub slug: String,
}

#[derive(Parser)]
pub struct ToggleArgs {
    /// Machine identifier.
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Which toggle to press.
    #[arg(value_enum)]
    pub toggle: ToggleArg,
}

#[derive(Parser)]
pub struct SetArgs {
    /// Machine identifier.
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// New status.
    #[arg(value_enum)]
    pub status: StatusArg,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Render this machine's detail page instead of the catalog.
    #[arg(long = "slug", value_name = "SLUG")]
    pub slug: Option<String>,

    /// Use the single checkout/return control on detail pages.
    #[arg(long = "legacy")]
    pub legacy: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ToggleArg {
    Available,
    Repairing,
}

impl From<ToggleArg> for Action {
    fn from(arg: ToggleArg) -> Self {
        match arg {
            ToggleArg::Available => Action::ToggleAvailable,
            ToggleArg::Repairing => Action::ToggleRepairing,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Available,
    CheckedOut,
    Repairing,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Available => Status::Available,
            StatusArg::CheckedOut => Status::CheckedOut,
            StatusArg::Repairing => Status::Repairing,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

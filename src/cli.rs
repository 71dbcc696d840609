// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Runtime names are accepted as free-form "--<name>" switches.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
///
/// Runtime names are matched after clap has taken its own options, so a
/// runtime whose name equals one of [`RESERVED_SWITCHES`] can't be selected
/// with `--<name>`.
#[derive(Parser)]
#[command(name = "xrruntime")]
#[command(about = "Lists installed OpenXR runtimes and selects one by name")]
#[command(version)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Display the runtimes that are installed and available
    #[arg(short, long)]
    pub list: bool,

    /// Show help, including one option per installed runtime
    #[arg(short, long)]
    pub help: bool,

    /// Create a commented runtime list at the config path if there is none
    #[arg(long)]
    pub init: bool,

    /// Print runtimes as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Runtime list to read instead of the well-known location
    #[arg(short, long, env = "XRRUNTIME_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Runtime to select, e.g. --SteamVR (case-insensitive)
    #[arg(value_name = "--RUNTIME", allow_hyphen_values = true)]
    pub runtimes: Vec<String>,
}

/// Switch names handled before runtime selection.
pub const RESERVED_SWITCHES: &[&str] = &[
    "list", "help", "init", "json", "config", "verbose", "version", "l", "h", "?",
];

/// True when `--<name>` would trigger a built-in option instead of selecting
/// the runtime.
pub fn is_reserved_switch(name: &str) -> bool {
    RESERVED_SWITCHES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

impl Cli {
    /// True when nothing but logging options was given.
    pub fn is_empty(&self) -> bool {
        !self.list && !self.help && !self.init && self.runtimes.is_empty()
    }
}

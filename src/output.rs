// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports human-readable text and JSON lines for scripting.

use crate::cli::is_reserved_switch;
use serde::Serialize;
use xrruntime::error::Result;
use xrruntime::runtime::{RuntimeCandidate, RuntimeList};

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly text
    Normal,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Print a plain message (suppressed in json mode).
    pub fn message(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) -> Result<()> {
        match self.mode {
            OutputMode::Normal => eprintln!("Error: {message}"),
            OutputMode::Json => eprintln!(
                "{}",
                serde_json::to_string(&JsonEvent::Error { message })?
            ),
        }
        Ok(())
    }

    /// Print the runtime list: present names in text mode, every candidate in json mode.
    pub fn runtimes(&self, runtimes: &RuntimeList) -> Result<()> {
        match self.mode {
            OutputMode::Normal => {
                let mut any = false;
                for runtime in runtimes.present() {
                    println!("{}", runtime.name);
                    any = true;
                }
                if !any {
                    println!(
                        "No runtime found! Do you have one installed, and is it listed in your runtimes.txt?"
                    );
                }
            }
            OutputMode::Json => {
                for runtime in runtimes {
                    println!("{}", serde_json::to_string(&JsonEvent::Runtime(runtime))?);
                }
            }
        }
        Ok(())
    }

    /// Print the loader override for a selected runtime.
    pub fn selected(&self, runtime: &RuntimeCandidate) -> Result<()> {
        match self.mode {
            OutputMode::Normal => println!("XR_RUNTIME_JSON={}", runtime.file),
            OutputMode::Json => {
                println!("{}", serde_json::to_string(&JsonEvent::Selected(runtime))?);
            }
        }
        Ok(())
    }

    /// Usage text, listing a switch for each present runtime.
    pub fn help(&self, runtimes: &RuntimeList) {
        print!(
            r#"
Usage: xrruntime [option]

Options:
    --list      Displays a list of runtimes that are on the system and
                available. This list can be extended by editing the
                runtimes.txt file (see --init).
    --init      Creates a commented runtimes.txt if there isn't one.
    --json      Prints runtimes as JSON lines.
    --help      Shows this help information.

"#
        );
        let mut any = false;
        for runtime in runtimes.present() {
            if is_reserved_switch(&runtime.name) {
                println!(
                    "    {:<12}Shares a name with a built-in option; set XR_RUNTIME_JSON={} yourself.",
                    runtime.name, runtime.file
                );
            } else {
                println!(
                    "    --{:<10}Prints the XR_RUNTIME_JSON override selecting {}.",
                    runtime.name, runtime.name
                );
            }
            any = true;
        }
        if !any {
            println!(
                "    --[runtime] Make sure you've installed an OpenXR runtime, and it's listed\n                in runtimes.txt! None were found."
            );
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonEvent<'a> {
    Runtime(&'a RuntimeCandidate),
    Selected(&'a RuntimeCandidate),
    Error { message: &'a str },
}

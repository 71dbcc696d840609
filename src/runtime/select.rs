// ABOUTME: Runtime selection by name, as typed on the command line.
// ABOUTME: Case-insensitive; reports unknown names and installed-but-missing runtimes apart.

use snafu::Snafu;

use super::types::{RuntimeCandidate, RuntimeList};

/// Why a runtime could not be selected.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SelectionError {
    #[snafu(display("no runtime named '{name}' is listed"))]
    Unknown { name: String },

    #[snafu(display("{name} isn't installed, or the runtime list isn't pointing to the right place! [{file}]"))]
    NotPresent { name: String, file: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionErrorKind {
    /// No candidate has that name.
    Unknown,
    /// Candidates exist but none is present.
    NotPresent,
}

impl SelectionError {
    pub fn kind(&self) -> SelectionErrorKind {
        match self {
            SelectionError::Unknown { .. } => SelectionErrorKind::Unknown,
            SelectionError::NotPresent { .. } => SelectionErrorKind::NotPresent,
        }
    }
}

/// Strip switch decoration: `--SteamVR`, `-steamvr`, and `/SteamVR` all name `SteamVR`.
pub fn normalize_flag(arg: &str) -> &str {
    let arg = arg.strip_prefix('/').unwrap_or(arg);
    arg.trim_start_matches('-')
}

impl RuntimeList {
    /// The present runtime called `name`, ignoring ASCII case.
    pub fn select(&self, name: &str) -> Result<&RuntimeCandidate, SelectionError> {
        let mut first_match = None;
        for candidate in self.named(name) {
            if candidate.present {
                return Ok(candidate);
            }
            first_match.get_or_insert(candidate);
        }

        match first_match {
            Some(candidate) => NotPresentSnafu {
                name: candidate.name.clone(),
                file: candidate.file.clone(),
            }
            .fail(),
            None => UnknownSnafu { name }.fail(),
        }
    }
}

// ABOUTME: Parser for the runtime list DSL: "<platform> <name> <path>" per line.
// ABOUTME: Skips comments and blank lines; the path keeps any embedded spaces.

use thiserror::Error;

use crate::runtime::{CandidateSource, Platform, RuntimeCandidate, UnknownPlatform};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error(transparent)]
    UnknownPlatform(#[from] UnknownPlatform),

    #[error("missing runtime name and manifest path")]
    MissingName,

    #[error("missing manifest path after runtime name '{0}'")]
    MissingPath(String),
}

/// One parsed line of a runtime list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    pub platform: Platform,
    pub name: String,
    pub path: String,
}

impl ConfigLine {
    /// Parse a single line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// Tokens are split on the first two single spaces only, so
    /// `windows SteamVR C:\Program Files (x86)\...` keeps the full path.
    pub fn parse(line: &str) -> Result<Option<Self>, LineError> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (platform, rest) = match line.split_once(' ') {
            Some(parts) => parts,
            None => {
                line.parse::<Platform>()?;
                return Err(LineError::MissingName);
            }
        };
        let platform = platform.parse::<Platform>()?;

        let (name, path) = rest
            .split_once(' ')
            .ok_or_else(|| LineError::MissingPath(rest.to_string()))?;
        if path.is_empty() {
            return Err(LineError::MissingPath(name.to_string()));
        }

        Ok(Some(ConfigLine {
            platform,
            name: name.to_string(),
            path: path.to_string(),
        }))
    }

    pub fn into_candidate(self, source: CandidateSource) -> RuntimeCandidate {
        RuntimeCandidate::new(self.platform, self.name, self.path, source)
    }
}

/// A line that was rejected, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub number: usize,
    pub error: LineError,
}

/// Parse a whole runtime list, keeping valid lines in order.
pub fn parse_runtime_list(text: &str) -> (Vec<ConfigLine>, Vec<RejectedLine>) {
    let mut lines = Vec::new();
    let mut rejected = Vec::new();

    for (idx, raw) in text.split('\n').enumerate() {
        match ConfigLine::parse(raw) {
            Ok(Some(line)) => lines.push(line),
            Ok(None) => {}
            Err(error) => rejected.push(RejectedLine {
                number: idx + 1,
                error,
            }),
        }
    }

    (lines, rejected)
}

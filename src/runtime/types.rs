// ABOUTME: Runtime candidate data model: platforms, sources, and the candidate list.
// ABOUTME: Includes Platform enum, RuntimeCandidate struct, and RuntimeList.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The operating system a runtime registration applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    None,
    Windows,
    Linux,
}

impl Platform {
    /// The platform this binary was built for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::None
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::None => write!(f, "none"),
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

/// Error returned when a platform id is not `windows` or `linux`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform '{0}' (expected 'windows' or 'linux')")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    /// Case-sensitive: `Linux` is not a platform id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

/// Where a candidate came from. Variant order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    UserConfig,
    Defaults,
    Registry,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateSource::UserConfig => write!(f, "user config"),
            CandidateSource::Defaults => write!(f, "defaults"),
            CandidateSource::Registry => write!(f, "registry"),
        }
    }
}

/// A single discoverable OpenXR runtime registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeCandidate {
    pub platform: Platform,
    /// Display name and dedup key. Empty until resolved from the manifest.
    pub name: String,
    /// Path to the runtime's JSON manifest.
    pub file: String,
    pub source: CandidateSource,
    /// Marked disabled by the OS registration.
    pub disabled: bool,
    /// Computed by discovery; never set by a source.
    pub present: bool,
}

impl RuntimeCandidate {
    pub fn new(
        platform: Platform,
        name: impl Into<String>,
        file: impl Into<String>,
        source: CandidateSource,
    ) -> Self {
        Self {
            platform,
            name: name.into(),
            file: file.into(),
            source,
            disabled: false,
            present: false,
        }
    }

    pub fn manifest_exists(&self) -> bool {
        !self.file.is_empty() && Path::new(&self.file).exists()
    }
}

/// The ordered result of a discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuntimeList(Vec<RuntimeCandidate>);

impl RuntimeList {
    pub fn new(candidates: Vec<RuntimeCandidate>) -> Self {
        Self(candidates)
    }

    pub fn as_slice(&self) -> &[RuntimeCandidate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuntimeCandidate> {
        self.0.iter()
    }

    /// Candidates that are installed and usable, in priority order.
    pub fn present(&self) -> impl Iterator<Item = &RuntimeCandidate> {
        self.0.iter().filter(|c| c.present)
    }

    /// All candidates whose name matches, ignoring ASCII case.
    pub fn named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a RuntimeCandidate> {
        self.0.iter().filter(move |c| c.name.eq_ignore_ascii_case(name))
    }
}

impl<'a> IntoIterator for &'a RuntimeList {
    type Item = &'a RuntimeCandidate;
    type IntoIter = std::slice::Iter<'a, RuntimeCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

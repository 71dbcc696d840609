// ABOUTME: Diagnostics accumulator for non-fatal warnings during runtime discovery.
// ABOUTME: Collects problems that degrade to a fallback instead of failing discovery.

/// Collects non-fatal warnings during a discovery pass.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Warnings of a single kind.
    pub fn of_kind(&self, kind: WarningKind) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}

/// A non-fatal warning collected during discovery.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// A config line that could not be turned into a candidate.
    pub fn malformed_line(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::MalformedLine,
            message: message.into(),
        }
    }

    /// The user config exists but could not be read.
    pub fn unreadable_config(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::UnreadableConfig,
            message: message.into(),
        }
    }

    /// The OS registry could not be enumerated.
    pub fn registry(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::Registry,
            message: message.into(),
        }
    }

    /// A `~` path could not be expanded.
    pub fn home_unresolved(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::HomeUnresolved,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Unknown platform id or missing path in a config line.
    MalformedLine,
    /// User config file exists but reading it failed.
    UnreadableConfig,
    /// Registry enumeration failed (Windows only).
    Registry,
    /// No user could be determined for home expansion.
    HomeUnresolved,
}

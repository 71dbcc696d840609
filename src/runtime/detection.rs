// ABOUTME: Runtime discovery: merges the user list, built-in defaults, and OS registrations.
// ABOUTME: Expands '~', resolves manifest names, then marks the first present entry per name.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::home::HomeDir;
use super::manifest;
use super::registry::{self, RegisteredRuntime};
use super::types::{CandidateSource, Platform, RuntimeCandidate, RuntimeList};
use crate::config::{self, DEFAULT_RUNTIMES, parse_runtime_list};
use crate::diagnostics::{Diagnostics, Warning};

/// Result of a discovery pass. Discovery never fails; problems are recorded
/// in `diagnostics` and degrade to the remaining sources.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub runtimes: RuntimeList,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
enum HomeSource {
    Env,
    Fixed(Option<HomeDir>),
}

#[derive(Debug, Clone)]
enum RegistrySource {
    Os,
    Fixed(Vec<RegisteredRuntime>),
}

/// Configures and runs a discovery pass.
///
/// Source priority, highest first:
/// 1. The user's runtime list (when the file exists)
/// 2. The built-in defaults
/// 3. OS registrations (Windows `AvailableRuntimes` key)
#[derive(Debug, Clone)]
pub struct RuntimeDiscovery {
    platform: Platform,
    user_config: Option<PathBuf>,
    defaults: String,
    home: HomeSource,
    registry: RegistrySource,
}

impl Default for RuntimeDiscovery {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl RuntimeDiscovery {
    /// Discovery evaluated for `platform`, using the host's environment,
    /// the built-in defaults, and the host registry.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            user_config: None,
            defaults: DEFAULT_RUNTIMES.to_string(),
            home: HomeSource::Env,
            registry: RegistrySource::Os,
        }
    }

    /// Read the user's runtime list from `path`.
    pub fn user_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_config = Some(path.into());
        self
    }

    /// Replace the built-in defaults.
    pub fn defaults(mut self, text: impl Into<String>) -> Self {
        self.defaults = text.into();
        self
    }

    /// Expand `~` with a fixed home directory instead of the environment.
    pub fn home(mut self, home: Option<HomeDir>) -> Self {
        self.home = HomeSource::Fixed(home);
        self
    }

    /// Use these registrations instead of querying the OS registry.
    pub fn registered(mut self, runtimes: Vec<RegisteredRuntime>) -> Self {
        self.registry = RegistrySource::Fixed(runtimes);
        self
    }

    pub fn run(&self) -> Discovery {
        let mut diagnostics = Diagnostics::default();

        let mut candidates = self.collect(&mut diagnostics);
        if self.platform == Platform::Linux {
            self.expand_home(&mut candidates, &mut diagnostics);
        }
        resolve_names(&mut candidates);
        mark_present(&mut candidates, self.platform);

        Discovery {
            runtimes: RuntimeList::new(candidates),
            diagnostics,
        }
    }

    fn collect(&self, diagnostics: &mut Diagnostics) -> Vec<RuntimeCandidate> {
        let mut candidates = Vec::new();

        if let Some(path) = &self.user_config {
            match config::read_user_config(path) {
                Ok(Some(text)) => {
                    let label = path.display().to_string();
                    push_lines(&mut candidates, &text, &label, CandidateSource::UserConfig, diagnostics);
                }
                Ok(None) => {
                    tracing::debug!(path = %path.display(), "no user runtime list, using defaults");
                }
                Err(e) => diagnostics.warn(Warning::unreadable_config(format!(
                    "could not read {}: {e}",
                    path.display()
                ))),
            }
        }

        push_lines(
            &mut candidates,
            &self.defaults,
            "built-in defaults",
            CandidateSource::Defaults,
            diagnostics,
        );

        let registered = match &self.registry {
            RegistrySource::Os => registry::available_runtimes().unwrap_or_else(|e| {
                diagnostics.warn(Warning::registry(e.to_string()));
                Vec::new()
            }),
            RegistrySource::Fixed(runtimes) => runtimes.clone(),
        };
        candidates.extend(registered.into_iter().map(RegisteredRuntime::into_candidate));

        candidates
    }

    fn expand_home(&self, candidates: &mut [RuntimeCandidate], diagnostics: &mut Diagnostics) {
        let needs_home = candidates.iter().any(|c| c.file.starts_with('~'));
        if !needs_home {
            return;
        }

        let home = match &self.home {
            HomeSource::Env => HomeDir::from_env(),
            HomeSource::Fixed(home) => home.clone(),
        };

        for candidate in candidates.iter_mut().filter(|c| c.file.starts_with('~')) {
            let Some(home) = &home else {
                diagnostics.warn(Warning::home_unresolved(format!(
                    "cannot expand '{}': neither USER nor SUDO_USER is set",
                    candidate.file
                )));
                continue;
            };
            match home.expand(&candidate.file) {
                Some(file) => candidate.file = file,
                None => diagnostics.warn(Warning::home_unresolved(format!(
                    "cannot expand '{}': only '~' and '~/' are supported",
                    candidate.file
                ))),
            }
        }
    }
}

/// Discover runtimes on this host, reading the user list at `config_path`.
pub fn discover(config_path: Option<&Path>) -> Discovery {
    let discovery = RuntimeDiscovery::default();
    match config_path {
        Some(path) => discovery.user_config(path).run(),
        None => discovery.run(),
    }
}

fn push_lines(
    candidates: &mut Vec<RuntimeCandidate>,
    text: &str,
    label: &str,
    source: CandidateSource,
    diagnostics: &mut Diagnostics,
) {
    let (lines, rejected) = parse_runtime_list(text);
    for reject in rejected {
        diagnostics.warn(Warning::malformed_line(format!(
            "{label}:{}: {}",
            reject.number, reject.error
        )));
    }
    candidates.extend(lines.into_iter().map(|line| line.into_candidate(source)));
}

fn resolve_names(candidates: &mut [RuntimeCandidate]) {
    for candidate in candidates
        .iter_mut()
        .filter(|c| c.name.is_empty() && c.manifest_exists())
    {
        candidate.name = manifest::resolve_name(&candidate.file);
        tracing::debug!(file = %candidate.file, name = %candidate.name, "resolved runtime name");
    }
}

/// First present entry per name wins; list order is priority order.
fn mark_present(candidates: &mut [RuntimeCandidate], platform: Platform) {
    let mut present_names: HashSet<String> = HashSet::new();

    for candidate in candidates.iter_mut() {
        candidate.present = !present_names.contains(&candidate.name)
            && candidate.platform == platform
            && !candidate.disabled
            && candidate.manifest_exists();

        if candidate.present {
            present_names.insert(candidate.name.clone());
        }
        tracing::debug!(
            name = %candidate.name,
            file = %candidate.file,
            source = %candidate.source,
            present = candidate.present,
            "evaluated runtime candidate"
        );
    }
}

// ABOUTME: OpenXR runtime discovery for Windows and Linux.
// ABOUTME: Merges configured, built-in, and OS-registered runtimes and checks which are installed.

mod detection;
mod home;
mod manifest;
mod registry;
mod select;
mod types;

pub use detection::{Discovery, RuntimeDiscovery, discover};
pub use home::HomeDir;
pub use manifest::{UNKNOWN_NAME, name_from_json, name_from_path, resolve_name};
pub use registry::{AVAILABLE_RUNTIMES_KEY, RegisteredRuntime, RegistryError, available_runtimes};
pub use select::{SelectionError, SelectionErrorKind, normalize_flag};
pub use types::{CandidateSource, Platform, RuntimeCandidate, RuntimeList, UnknownPlatform};

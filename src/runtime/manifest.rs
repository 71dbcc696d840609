// ABOUTME: Best-effort display names from OpenXR runtime manifest files.
// ABOUTME: Reads runtime.name from the JSON, falling back to the manifest's file stem.

use serde::Deserialize;
use std::path::Path;

/// Name used when neither the manifest nor its path yields one.
pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    runtime: Option<ManifestRuntime>,
}

#[derive(Debug, Deserialize)]
struct ManifestRuntime {
    #[serde(default)]
    name: Option<String>,
}

/// Extract `runtime.name` from manifest JSON.
///
/// Wrong types anywhere on the path to the name count as "no name".
pub fn name_from_json(json: &str) -> Option<String> {
    match serde_json::from_str::<Manifest>(json) {
        Ok(manifest) => manifest
            .runtime
            .and_then(|r| r.name)
            .filter(|n| !n.is_empty()),
        Err(e) => {
            tracing::debug!(error = %e, "manifest is not usable JSON");
            None
        }
    }
}

/// The manifest's base name: the text between the last path separator and
/// the last `.`, e.g. `MyRuntime` for `C:\x\y\MyRuntime.json`.
///
/// Both `/` and `\` count as separators, whatever the host platform.
pub fn name_from_path(file: &str) -> Option<&str> {
    let start = file.rfind(['/', '\\'])? + 1;
    let end = file.rfind('.')?;
    (end > start).then(|| &file[start..end])
}

/// Resolve a display name for an existing manifest, never failing.
pub fn resolve_name(file: &str) -> String {
    let from_json = std::fs::read_to_string(Path::new(file))
        .map_err(|e| tracing::debug!(file, error = %e, "could not read manifest"))
        .ok()
        .and_then(|json| name_from_json(&json));

    from_json
        .or_else(|| name_from_path(file).map(str::to_string))
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_runtime_name() {
        let json = r#"{
            "file_format_version": "1.0.0",
            "runtime": { "name": "Monado", "library_path": "../../lib/libopenxr_monado.so" }
        }"#;
        assert_eq!(name_from_json(json), Some("Monado".into()));
    }

    #[test]
    fn missing_or_mistyped_name_is_none() {
        assert_eq!(name_from_json("{}"), None);
        assert_eq!(name_from_json(r#"{"runtime": {}}"#), None);
        assert_eq!(name_from_json(r#"{"runtime": {"name": 7}}"#), None);
        assert_eq!(name_from_json(r#"{"runtime": "SteamVR"}"#), None);
        assert_eq!(name_from_json(r#"{"runtime": {"name": ""}}"#), None);
        assert_eq!(name_from_json("not json"), None);
        assert_eq!(name_from_json("[]"), None);
    }

    #[test]
    fn path_stem_handles_both_separators() {
        assert_eq!(name_from_path(r"C:\x\y\MyRuntime.json"), Some("MyRuntime"));
        assert_eq!(
            name_from_path("/usr/share/openxr/1/openxr_monado.json"),
            Some("openxr_monado")
        );
    }

    #[test]
    fn path_stem_requires_separator_and_extension() {
        assert_eq!(name_from_path("MyRuntime.json"), None);
        assert_eq!(name_from_path("/opt/runtime"), None);
        assert_eq!(name_from_path("/opt.d/runtime"), None);
        assert_eq!(name_from_path("/opt/.json"), None);
    }

    #[test]
    fn resolve_falls_back_to_stem_then_unknown() {
        let dir = tempfile::tempdir().unwrap();

        let named = dir.path().join("named.json");
        std::fs::write(&named, r#"{"runtime": {"name": "Fancy Runtime"}}"#).unwrap();
        assert_eq!(resolve_name(named.to_str().unwrap()), "Fancy Runtime");

        let unnamed = dir.path().join("MyRuntime.json");
        std::fs::write(&unnamed, "{}").unwrap();
        assert_eq!(resolve_name(unnamed.to_str().unwrap()), "MyRuntime");

        let broken = dir.path().join("broken");
        std::fs::write(&broken, "{").unwrap();
        assert_eq!(resolve_name(broken.to_str().unwrap()), UNKNOWN_NAME);
    }
}

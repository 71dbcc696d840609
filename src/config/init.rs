// ABOUTME: Config scaffolding for first-time users.
// ABOUTME: Creates a commented runtimes.txt template without ever overwriting one.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{Error, Result};

use super::defaults::TEMPLATE;

/// Outcome of [`ensure_config_exists`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateStatus {
    Created,
    AlreadyExists,
}

/// Write the commented template to `path` unless a file is already there.
///
/// Missing parent directories are created. Callers should log a returned
/// error and carry on with discovery; the defaults still apply.
pub fn ensure_config_exists(path: &Path) -> Result<TemplateStatus> {
    if path.exists() {
        return Ok(TemplateStatus::AlreadyExists);
    }

    let template_err = |source| Error::Template {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(template_err)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(TemplateStatus::AlreadyExists);
        }
        Err(e) => return Err(template_err(e)),
    };
    file.write_all(TEMPLATE.as_bytes()).map_err(template_err)?;

    tracing::debug!(path = %path.display(), "created runtime list template");
    Ok(TemplateStatus::Created)
}

// ABOUTME: OS-native runtime registrations from the Khronos AvailableRuntimes registry key.
// ABOUTME: Windows only; other platforms report no registrations.

use super::types::{CandidateSource, Platform, RuntimeCandidate};

/// `HKEY_LOCAL_MACHINE` subkey listing installed runtimes.
pub const AVAILABLE_RUNTIMES_KEY: &str = r"SOFTWARE\Khronos\OpenXR\1\AvailableRuntimes";

/// Error enumerating the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to open HKLM\\{key} (error {code})")]
    Open { key: &'static str, code: u32 },

    #[error("failed to enumerate value {index} of HKLM\\{key} (error {code})")]
    Enumerate {
        key: &'static str,
        index: u32,
        code: u32,
    },
}

/// One value under the `AvailableRuntimes` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredRuntime {
    /// Value name: the manifest path.
    pub manifest: String,
    /// `Some(data)` when the value is a `REG_DWORD`.
    pub dword: Option<u32>,
}

impl RegisteredRuntime {
    /// A non-zero DWORD means the runtime is disabled.
    pub fn is_disabled(&self) -> bool {
        self.dword.is_some_and(|v| v != 0)
    }

    pub fn into_candidate(self) -> RuntimeCandidate {
        let disabled = self.is_disabled();
        let mut candidate =
            RuntimeCandidate::new(Platform::Windows, "", self.manifest, CandidateSource::Registry);
        candidate.disabled = disabled;
        candidate
    }
}

/// Enumerate registered runtimes. A missing key yields an empty list.
#[cfg(windows)]
pub fn available_runtimes() -> Result<Vec<RegisteredRuntime>, RegistryError> {
    use windows::Win32::Foundation::{
        ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_NO_MORE_ITEMS, ERROR_SUCCESS,
    };
    use windows::Win32::System::Registry::{
        HKEY, HKEY_LOCAL_MACHINE, KEY_READ, REG_DWORD, RegCloseKey, RegEnumValueW,
        RegOpenKeyExW,
    };
    use windows::core::{HSTRING, PWSTR};

    // Registry value names are limited to 16383 characters.
    const MAX_VALUE_NAME: usize = 16_384;
    const MAX_VALUE_DATA: usize = 4_096;

    let subkey = HSTRING::from(AVAILABLE_RUNTIMES_KEY);
    let mut key = HKEY::default();
    let status =
        unsafe { RegOpenKeyExW(HKEY_LOCAL_MACHINE, &subkey, Some(0), KEY_READ, &mut key) };
    if status == ERROR_FILE_NOT_FOUND {
        return Ok(Vec::new());
    }
    if status != ERROR_SUCCESS {
        return Err(RegistryError::Open {
            key: AVAILABLE_RUNTIMES_KEY,
            code: status.0,
        });
    }

    let mut runtimes = Vec::new();
    let mut name = vec![0u16; MAX_VALUE_NAME];
    let mut data = vec![0u8; MAX_VALUE_DATA];
    let mut result = Ok(());
    for index in 0u32.. {
        let mut name_len = name.len() as u32;
        let mut value_type = 0u32;
        let mut data_len = data.len() as u32;
        let mut status = unsafe {
            RegEnumValueW(
                key,
                index,
                Some(PWSTR(name.as_mut_ptr())),
                &raw mut name_len,
                None,
                Some(&raw mut value_type),
                Some(data.as_mut_ptr()),
                Some(&raw mut data_len),
            )
        };
        if status == ERROR_MORE_DATA {
            // Oversized data can't be a DWORD flag; only the name and type are needed.
            tracing::debug!(index, "registry value data exceeds buffer, reading name only");
            name_len = name.len() as u32;
            data_len = 0;
            status = unsafe {
                RegEnumValueW(
                    key,
                    index,
                    Some(PWSTR(name.as_mut_ptr())),
                    &raw mut name_len,
                    None,
                    Some(&raw mut value_type),
                    None,
                    None,
                )
            };
        }
        if status == ERROR_NO_MORE_ITEMS {
            break;
        }
        if status != ERROR_SUCCESS {
            result = Err(RegistryError::Enumerate {
                key: AVAILABLE_RUNTIMES_KEY,
                index,
                code: status.0,
            });
            break;
        }

        let manifest = String::from_utf16_lossy(&name[..name_len as usize]);
        let dword = (value_type == REG_DWORD.0 && data_len == 4)
            .then(|| u32::from_le_bytes([data[0], data[1], data[2], data[3]]));
        runtimes.push(RegisteredRuntime { manifest, dword });
    }

    unsafe {
        let _ = RegCloseKey(key);
    }
    result.map(|()| runtimes)
}

#[cfg(not(windows))]
pub fn available_runtimes() -> Result<Vec<RegisteredRuntime>, RegistryError> {
    Ok(Vec::new())
}

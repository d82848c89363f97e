//! Launch-at-login storage in the HKCU Run registry key.
//!
//! Values live under
//! `HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Run`
//! and are launched by Explorer on user logon. No elevation is
//! required since HKCU is per-user.

use hidebar_core::{HidebarResult, RunKey};
use windows::Win32::Foundation::ERROR_FILE_NOT_FOUND;
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, KEY_QUERY_VALUE, KEY_SET_VALUE, REG_SAM_FLAGS, REG_SZ,
    REG_VALUE_TYPE, RegCloseKey, RegDeleteValueW, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW,
};
use windows::core::PCWSTR;

use crate::wide;

const RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

/// The current user's Run key.
#[derive(Debug, Clone, Copy, Default)]
pub struct HkcuRunKey;

impl RunKey for HkcuRunKey {
    fn read(&self, name: &str) -> Option<String> {
        let key = open_run_key(KEY_QUERY_VALUE).ok()?;
        let value = query_string_value(key, name);
        close_key(key);
        value
    }

    fn write(&self, name: &str, value: &str) -> HidebarResult<()> {
        let key = open_run_key(KEY_SET_VALUE)?;
        let result = set_string_value(key, name, value);
        close_key(key);
        Ok(result?)
    }

    fn delete(&self, name: &str) -> HidebarResult<()> {
        let key = open_run_key(KEY_SET_VALUE)?;
        let result = delete_value(key, name);
        close_key(key);
        Ok(result?)
    }
}

/// Opens the HKCU Run key with the given access rights.
fn open_run_key(access: REG_SAM_FLAGS) -> Result<HKEY, String> {
    let wide_key = wide(RUN_KEY);
    let mut key = HKEY::default();
    // SAFETY: RegOpenKeyExW is a standard Win32 registry API. We pass valid
    // pointers and close the key after use.
    let status = unsafe {
        RegOpenKeyExW(
            HKEY_CURRENT_USER,
            PCWSTR(wide_key.as_ptr()),
            None,
            access,
            &mut key,
        )
    };
    if status.is_err() {
        return Err(format!("could not open registry key: {status:?}"));
    }
    Ok(key)
}

/// Reads a `REG_SZ` value. Missing, empty or other-typed values are `None`.
fn query_string_value(key: HKEY, name: &str) -> Option<String> {
    let wide_name = wide(name);
    let mut kind = REG_VALUE_TYPE::default();
    let mut size = 0u32;
    // SAFETY: a null data pointer asks only for the type and byte size.
    let status = unsafe {
        RegQueryValueExW(
            key,
            PCWSTR(wide_name.as_ptr()),
            None,
            Some(&raw mut kind),
            None,
            Some(&raw mut size),
        )
    };
    if status.is_err() || !is_plain_string(kind) || size == 0 {
        return None;
    }

    let mut buf = vec![0u16; (size as usize).div_ceil(2)];
    // SAFETY: buf holds at least `size` bytes; the API writes at most that.
    let status = unsafe {
        RegQueryValueExW(
            key,
            PCWSTR(wide_name.as_ptr()),
            None,
            None,
            Some(buf.as_mut_ptr().cast()),
            Some(&raw mut size),
        )
    };
    if status.is_err() {
        return None;
    }

    // The stored data may or may not carry its terminator.
    let len = (size as usize / 2).min(buf.len());
    let text = &buf[..len];
    let end = text.iter().position(|&c| c == 0).unwrap_or(text.len());
    Some(String::from_utf16_lossy(&text[..end]))
}

/// Only `REG_SZ` holds a literal path. `REG_EXPAND_SZ` would need
/// environment expansion before it could be compared, so it reads as
/// missing.
fn is_plain_string(kind: REG_VALUE_TYPE) -> bool {
    kind == REG_SZ
}

/// Writes a REG_SZ value under the opened key.
fn set_string_value(key: HKEY, name: &str, value: &str) -> Result<(), String> {
    let wide_name = wide(name);
    let wide_value = wide(value);
    // SAFETY: reinterpreting a &[u16] as &[u8] is safe; the layout is
    // contiguous and we compute the correct byte length.
    let bytes: &[u8] =
        unsafe { std::slice::from_raw_parts(wide_value.as_ptr().cast(), wide_value.len() * 2) };
    // SAFETY: RegSetValueExW is a standard Win32 registry API. We pass the
    // correct byte length for the wide-string value.
    let status =
        unsafe { RegSetValueExW(key, PCWSTR(wide_name.as_ptr()), None, REG_SZ, Some(bytes)) };
    if status.is_err() {
        return Err(format!("could not write registry value: {status:?}"));
    }
    Ok(())
}

/// Deletes a value from the opened key. A missing value is not an error.
fn delete_value(key: HKEY, name: &str) -> Result<(), String> {
    let wide_name = wide(name);
    // SAFETY: RegDeleteValueW is a standard Win32 registry API.
    let status = unsafe { RegDeleteValueW(key, PCWSTR(wide_name.as_ptr())) };
    if status.is_err() && status != ERROR_FILE_NOT_FOUND {
        return Err(format!("could not delete registry value: {status:?}"));
    }
    Ok(())
}

/// Closes an open registry key handle.
fn close_key(key: HKEY) {
    // SAFETY: RegCloseKey is safe to call on any valid HKEY.
    let _ = unsafe { RegCloseKey(key) };
}

#[cfg(test)]
mod tests {
    use windows::Win32::System::Registry::{REG_DWORD, REG_EXPAND_SZ};

    use super::*;

    #[test]
    fn only_plain_strings_are_read() {
        assert!(is_plain_string(REG_SZ));
        assert!(!is_plain_string(REG_EXPAND_SZ));
        assert!(!is_plain_string(REG_DWORD));
    }
}

//! Windows lock screen personalization policy.

use std::ffi::OsStr;
use std::io;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows::Win32::Foundation::ERROR_SUCCESS;
use windows::Win32::System::Registry::{
    HKEY, HKEY_LOCAL_MACHINE, KEY_SET_VALUE, REG_DWORD, REG_OPTION_NON_VOLATILE, REG_SZ,
    RegCloseKey, RegCreateKeyExW, RegSetValueExW,
};
use windows::core::PCWSTR;

const PERSONALIZATION_KEY: &str = r"SOFTWARE\Policies\Microsoft\Windows\Personalization";

fn wide(value: &OsStr) -> Vec<u16> { value.encode_wide().chain(std::iter::once(0)).collect() }

fn check(status: windows::Win32::Foundation::WIN32_ERROR) -> io::Result<()> {
    if status == ERROR_SUCCESS {
        Ok(())
    } else {
        Err(io::Error::from_raw_os_error(status.0.cast_signed()))
    }
}

/// Points the lock screen at `image` and prevents users from changing it.
///
/// # Errors
///
/// Returns an error if the policy key cannot be opened or written, usually
/// because the process is not elevated.
pub fn apply_lock_screen_policy(image: &Path) -> io::Result<()> {
    let subkey = wide(OsStr::new(PERSONALIZATION_KEY));
    let image_name = wide(OsStr::new("LockScreenImage"));
    let lock_name = wide(OsStr::new("NoChangingLockScreen"));
    let image_value = wide(image.as_os_str());

    // REG_SZ data is the little-endian UTF-16 string including its terminator.
    let image_bytes: Vec<u8> = image_value.iter().flat_map(|unit| unit.to_le_bytes()).collect();
    let lock_bytes = 1u32.to_le_bytes();

    let mut key = HKEY::default();

    // SAFETY: every string passed is NUL-terminated and outlives the calls, and
    // the key handle is closed before returning.
    unsafe {
        check(RegCreateKeyExW(
            HKEY_LOCAL_MACHINE,
            PCWSTR(subkey.as_ptr()),
            0,
            PCWSTR::null(),
            REG_OPTION_NON_VOLATILE,
            KEY_SET_VALUE,
            None,
            &raw mut key,
            None,
        ))?;

        let result = check(RegSetValueExW(
            key,
            PCWSTR(image_name.as_ptr()),
            0,
            REG_SZ,
            Some(&image_bytes),
        ))
        .and_then(|()| {
            check(RegSetValueExW(
                key,
                PCWSTR(lock_name.as_ptr()),
                0,
                REG_DWORD,
                Some(&lock_bytes),
            ))
        });

        let _ = RegCloseKey(key);
        result?;
    }

    tracing::info!(image = %image.display(), "lock screen policy applied");
    Ok(())
}

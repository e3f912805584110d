//! Loaded module enumeration and name resolution
//!
//! Provides the per-process PSAPI queries:
//! - Module handles via `EnumProcessModules`
//! - Module base names via `GetModuleBaseNameW`
//! - Full module paths via `GetModuleFileNameExW`

use windows::Win32::Foundation::HMODULE;
use windows::Win32::System::ProcessStatus::{
    EnumProcessModules, GetModuleBaseNameW, GetModuleFileNameExW,
};

use crate::constants::MAX_PATH_LEN;
use crate::ffi::ProcessHandle;

use super::buffer::{byte_len, entries_returned, note_if_full, wide_to_string};
use super::error::{ProcessError, ProcessResult};

/// Lists the modules loaded into `process`, at most `capacity` of them.
/// The first entry is the process's own executable.
pub fn enumerate_modules(process: &ProcessHandle, capacity: usize) -> ProcessResult<Vec<HMODULE>> {
    let mut modules = vec![HMODULE::default(); capacity];
    let mut bytes_needed: u32 = 0;

    // SAFETY: The pointer and byte length describe `modules` exactly, and
    // the process handle stays open for the duration of the call.
    unsafe {
        EnumProcessModules(
            process.as_raw(),
            modules.as_mut_ptr(),
            byte_len::<HMODULE>(modules.len()),
            &mut bytes_needed,
        )
    }
    .map_err(|e| ProcessError::WinApi {
        api: "EnumProcessModules",
        code: e.code().0,
    })?;

    let count = entries_returned::<HMODULE>(bytes_needed, modules.len());
    if capacity > 1 {
        note_if_full("modules", count, capacity);
    }

    modules.truncate(count);
    Ok(modules)
}

/// Gets the base name of a module (e.g. "kernel32.dll").
pub fn get_module_base_name(process: &ProcessHandle, module: HMODULE) -> ProcessResult<String> {
    let mut buffer = [0u16; MAX_PATH_LEN];

    // SAFETY: The buffer is a valid, writable slice and the handle is open.
    let len = unsafe { GetModuleBaseNameW(process.as_raw(), module, &mut buffer) };
    if len == 0 {
        return Err(last_error("GetModuleBaseNameW"));
    }

    Ok(wide_to_string(&buffer, len))
}

/// Gets the full file-system path of a module.
pub fn get_module_file_name(process: &ProcessHandle, module: HMODULE) -> ProcessResult<String> {
    let mut buffer = [0u16; MAX_PATH_LEN];

    // SAFETY: The buffer is a valid, writable slice and the handle is open.
    let len = unsafe { GetModuleFileNameExW(process.as_raw(), module, &mut buffer) };
    if len == 0 {
        return Err(last_error("GetModuleFileNameExW"));
    }

    Ok(wide_to_string(&buffer, len))
}

/// Builds a ProcessError from the calling thread's last Win32 error.
fn last_error(api: &'static str) -> ProcessError {
    ProcessError::WinApi {
        api,
        code: windows::core::Error::from_win32().code().0,
    }
}

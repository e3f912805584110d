//! Safe RAII wrapper for process HANDLEs
//!
//! The handle is closed when the wrapper goes out of scope, so every
//! exit path of an inspection releases it exactly once.

use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Threading::{OpenProcess, PROCESS_ACCESS_RIGHTS};

/// A safe wrapper around a Windows process HANDLE.
/// Automatically closes the handle when dropped.
#[derive(Debug)]
pub struct ProcessHandle {
    handle: HANDLE,
    pid: u32,
}

impl ProcessHandle {
    /// Opens a process by PID with the specified access rights.
    ///
    /// # Returns
    /// * `Ok(ProcessHandle)` - A wrapped handle to the process
    /// * `Err` - If the process cannot be opened (access denied, process exited, etc.)
    pub fn open(pid: u32, access: PROCESS_ACCESS_RIGHTS) -> windows::core::Result<Self> {
        // SAFETY: OpenProcess has no preconditions; failure comes back as Err
        // and no handle is created in that case.
        let handle = unsafe { OpenProcess(access, false, pid)? };
        Ok(Self { handle, pid })
    }

    /// Returns the raw HANDLE for use with Win32 APIs.
    ///
    /// The returned value must not be used after the ProcessHandle is dropped.
    pub fn as_raw(&self) -> HANDLE {
        self.handle
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // SAFETY: We own this handle and it's valid (we got it from OpenProcess).
        // CloseHandle is called exactly once, here.
        if let Err(e) = unsafe { CloseHandle(self.handle) } {
            tracing::warn!(pid = self.pid, error = %e, "CloseHandle failed");
        }
    }
}

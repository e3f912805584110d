//! The live Win32 implementation of `ProcessSource`

use windows::Win32::Foundation::HMODULE;
use windows::Win32::System::Threading::{PROCESS_QUERY_INFORMATION, PROCESS_VM_READ};

use crate::ffi::ProcessHandle;

use super::error::{EnumerationResult, ProcessError, ProcessResult};
use super::modules::{enumerate_modules, get_module_base_name, get_module_file_name};
use super::processes::enumerate_process_ids;
use super::source::ProcessSource;

/// Reads processes and modules of the local machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Source;

impl ProcessSource for Win32Source {
    type Handle = ProcessHandle;
    type Module = HMODULE;

    fn process_ids(&self, capacity: usize) -> EnumerationResult<Vec<u32>> {
        enumerate_process_ids(capacity)
    }

    fn open(&self, pid: u32) -> ProcessResult<ProcessHandle> {
        ProcessHandle::open(pid, PROCESS_QUERY_INFORMATION | PROCESS_VM_READ).map_err(|e| {
            ProcessError::OpenFailed {
                pid,
                code: e.code().0,
            }
        })
    }

    fn modules(&self, process: &ProcessHandle, capacity: usize) -> ProcessResult<Vec<HMODULE>> {
        enumerate_modules(process, capacity)
    }

    fn base_name(&self, process: &ProcessHandle, module: HMODULE) -> ProcessResult<String> {
        get_module_base_name(process, module)
    }

    fn file_name(&self, process: &ProcessHandle, module: HMODULE) -> ProcessResult<String> {
        get_module_file_name(process, module)
    }
}

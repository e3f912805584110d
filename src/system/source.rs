//! The OS boundary used by the inspector
//!
//! `ProcessSource` covers the three enumeration calls the report needs
//! (list processes, list modules, resolve a module) plus acquiring the
//! process handle those calls run against.

use super::error::{EnumerationResult, ProcessResult};

/// Access to the running processes of a host.
pub trait ProcessSource {
    /// An open process. Dropping it releases the underlying OS handle.
    type Handle;

    /// A loaded module, as identified by the OS.
    type Module: Copy;

    /// Lists at most `capacity` process IDs in the order the OS reports them.
    fn process_ids(&self, capacity: usize) -> EnumerationResult<Vec<u32>>;

    /// Opens `pid` with query-information and memory-read access.
    fn open(&self, pid: u32) -> ProcessResult<Self::Handle>;

    /// Lists at most `capacity` modules loaded into the process, in OS order.
    /// The primary module comes first.
    fn modules(&self, process: &Self::Handle, capacity: usize) -> ProcessResult<Vec<Self::Module>>;

    /// Resolves the base name of a module (e.g. "notepad.exe").
    fn base_name(&self, process: &Self::Handle, module: Self::Module) -> ProcessResult<String>;

    /// Resolves the full file-system path of a module.
    fn file_name(&self, process: &Self::Handle, module: Self::Module) -> ProcessResult<String>;
}

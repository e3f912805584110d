//! A fabricated process table for tests
//!
//! Lets the inspector and report run against a known set of processes,
//! including ones that deny access or have unresolvable modules.

use std::cell::Cell;
use std::rc::Rc;

use super::error::{EnumerationError, EnumerationResult, ProcessError, ProcessResult};
use super::source::ProcessSource;

const ERROR_ACCESS_DENIED: i32 = 0x8007_0005_u32 as i32;
const ERROR_PARTIAL_COPY: i32 = 0x8007_012B_u32 as i32;

/// One module of a fake process. `None` means its path cannot be resolved.
pub type FakeModule = Option<&'static str>;

/// A process in the fake table.
#[derive(Debug, Clone)]
pub struct FakeProcess {
    pub pid: u32,
    /// `None` makes base-name resolution fail
    pub name: Option<&'static str>,
    pub modules: Vec<FakeModule>,
    /// Opening the process fails
    pub denied: bool,
    /// Module enumeration fails after the handle is opened
    pub modules_fail: bool,
}

impl FakeProcess {
    pub fn new(pid: u32, name: &'static str, modules: &[&'static str]) -> Self {
        Self {
            pid,
            name: Some(name),
            modules: modules.iter().map(|&m| Some(m)).collect(),
            denied: false,
            modules_fail: false,
        }
    }

    pub fn denied(pid: u32) -> Self {
        Self {
            pid,
            name: None,
            modules: Vec::new(),
            denied: true,
            modules_fail: false,
        }
    }
}

/// Counts handle opens and releases so tests can check they pair up.
#[derive(Debug, Default)]
pub struct HandleCounter {
    pub opened: Cell<usize>,
    pub closed: Cell<usize>,
}

/// Handle to a fake process. Dropping it bumps the release counter.
#[derive(Debug)]
pub struct FakeHandle {
    index: usize,
    counter: Rc<HandleCounter>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.counter.closed.set(self.counter.closed.get() + 1);
    }
}

/// Fabricated OS layer.
#[derive(Debug, Default)]
pub struct FakeSource {
    pub processes: Vec<FakeProcess>,
    /// Enumeration itself fails
    pub enumeration_fails: bool,
    pub handles: Rc<HandleCounter>,
}

impl FakeSource {
    pub fn new(processes: Vec<FakeProcess>) -> Self {
        Self {
            processes,
            ..Self::default()
        }
    }

    fn process(&self, handle: &FakeHandle) -> &FakeProcess {
        &self.processes[handle.index]
    }
}

impl ProcessSource for FakeSource {
    type Handle = FakeHandle;
    type Module = usize;

    fn process_ids(&self, capacity: usize) -> EnumerationResult<Vec<u32>> {
        if self.enumeration_fails {
            return Err(EnumerationError::WinApi {
                api: "EnumProcesses",
                code: ERROR_ACCESS_DENIED,
            });
        }
        let ids: Vec<u32> = self.processes.iter().take(capacity).map(|p| p.pid).collect();
        if ids.is_empty() {
            return Err(EnumerationError::Empty);
        }
        Ok(ids)
    }

    fn open(&self, pid: u32) -> ProcessResult<FakeHandle> {
        let index = self
            .processes
            .iter()
            .position(|p| p.pid == pid && !p.denied)
            .ok_or(ProcessError::OpenFailed {
                pid,
                code: ERROR_ACCESS_DENIED,
            })?;
        self.handles.opened.set(self.handles.opened.get() + 1);
        Ok(FakeHandle {
            index,
            counter: Rc::clone(&self.handles),
        })
    }

    fn modules(&self, process: &FakeHandle, capacity: usize) -> ProcessResult<Vec<usize>> {
        let process = self.process(process);
        if process.modules_fail {
            return Err(ProcessError::WinApi {
                api: "EnumProcessModules",
                code: ERROR_PARTIAL_COPY,
            });
        }
        // The primary module always exists in a real process, even when
        // the fake has no resolvable paths.
        let count = process.modules.len().max(1);
        Ok((0..count.min(capacity)).collect())
    }

    fn base_name(&self, process: &FakeHandle, _module: usize) -> ProcessResult<String> {
        self.process(process)
            .name
            .map(str::to_string)
            .ok_or(ProcessError::WinApi {
                api: "GetModuleBaseNameW",
                code: ERROR_PARTIAL_COPY,
            })
    }

    fn file_name(&self, process: &FakeHandle, module: usize) -> ProcessResult<String> {
        self.process(process)
            .modules
            .get(module)
            .copied()
            .flatten()
            .map(str::to_string)
            .ok_or(ProcessError::WinApi {
                api: "GetModuleFileNameExW",
                code: ERROR_PARTIAL_COPY,
            })
    }
}

//! Per-process inspection
//!
//! Opens one process, resolves its name and module paths, and releases
//! the handle again. Every failure is absorbed here.

use crate::constants::{MAX_MODULES, UNKNOWN_PROCESS_NAME};
use crate::system::ProcessSource;

/// What one inspection pass saw of a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSnapshot {
    /// Process ID
    pub pid: u32,
    /// Base name of the primary module, or "Unknown"
    pub name: String,
    /// Full paths of the modules that could be resolved, in OS order
    pub modules: Vec<String>,
}

/// Inspects a single process.
///
/// Returns `None` if the process cannot be opened. Once it is open, the
/// handle is released when this function returns, on every path.
pub fn inspect<S: ProcessSource>(source: &S, pid: u32) -> Option<ProcessSnapshot> {
    let process = match source.open(pid) {
        Ok(handle) => handle,
        Err(e) => {
            tracing::debug!(pid, error = %e, "skipping process");
            return None;
        }
    };

    let name = query_name(source, &process, pid);
    let modules = query_module_paths(source, &process, pid);

    Some(ProcessSnapshot { pid, name, modules })
}

/// Resolves the base name of the primary module, falling back to "Unknown".
fn query_name<S: ProcessSource>(source: &S, process: &S::Handle, pid: u32) -> String {
    let primary = match source.modules(process, 1) {
        Ok(modules) => modules.first().copied(),
        Err(e) => {
            tracing::debug!(pid, error = %e, "cannot find primary module");
            None
        }
    };

    primary
        .and_then(|module| match source.base_name(process, module) {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::debug!(pid, error = %e, "cannot resolve process name");
                None
            }
        })
        .unwrap_or_else(|| UNKNOWN_PROCESS_NAME.to_string())
}

/// Resolves the full path of every loaded module, dropping the ones that fail.
fn query_module_paths<S: ProcessSource>(source: &S, process: &S::Handle, pid: u32) -> Vec<String> {
    let modules = match source.modules(process, MAX_MODULES) {
        Ok(modules) => modules,
        Err(e) => {
            tracing::debug!(pid, error = %e, "cannot enumerate modules");
            return Vec::new();
        }
    };

    modules
        .into_iter()
        .filter_map(|module| match source.file_name(process, module) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(pid, error = %e, "omitting module");
                None
            }
        })
        .collect()
}

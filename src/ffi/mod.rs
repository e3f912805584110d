//! FFI module - Safe wrappers around Win32 handles
//!
//! Handles are closed via CloseHandle when they go out of scope.

mod handles;

pub use handles::ProcessHandle;

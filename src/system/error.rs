//! Error types for the OS boundary
//!
//! Enumeration errors are fatal for the whole run. Process errors are
//! absorbed by the inspector and only ever show up in debug logs.

use thiserror::Error;

// ============================================================================
// Enumeration Error
// ============================================================================

/// Errors from listing the running processes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    /// Windows API call failed with an error code
    #[error("{api} failed (error code: 0x{code:08X})")]
    WinApi {
        /// Name of the failing API function
        api: &'static str,
        /// Windows error code (HRESULT)
        code: i32,
    },

    /// The OS reported zero processes, which means the query itself is broken
    #[error("process enumeration returned no processes")]
    Empty,
}

// ============================================================================
// Process Error
// ============================================================================

/// Errors from querying a single process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// Process could not be opened (exited, or access denied)
    #[error("cannot open process {pid:#x} (error code: 0x{code:08X})")]
    OpenFailed {
        /// The process identifier
        pid: u32,
        /// Windows error code (HRESULT)
        code: i32,
    },

    /// Windows API call failed with an error code
    #[error("{api} failed (error code: 0x{code:08X})")]
    WinApi {
        /// Name of the failing API function
        api: &'static str,
        /// Windows error code (HRESULT)
        code: i32,
    },
}

// ============================================================================
// Result type aliases
// ============================================================================

/// Result type for process enumeration
pub type EnumerationResult<T> = Result<T, EnumerationError>;

/// Result type for per-process queries
pub type ProcessResult<T> = Result<T, ProcessError>;

//! Centralized constants for the application
//!
//! Every compiled-in limit lives here. There are no flags or config
//! files, so changing a capacity means changing it in this module.

// ============================================================================
// Application Info
// ============================================================================

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Application version from Cargo.toml
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Enumeration Capacities
// ============================================================================

/// Maximum number of process IDs requested from the OS.
/// Anything beyond this is silently dropped.
pub const MAX_PROCESSES: usize = 1 << 14;

/// Maximum number of module handles requested per process.
pub const MAX_MODULES: usize = 1 << 14;

/// Length (in UTF-16 units) of the buffers used for module names and paths.
/// Matches Win32 `MAX_PATH`; longer names are truncated by the OS.
pub const MAX_PATH_LEN: usize = 260;

// ============================================================================
// Report
// ============================================================================

/// Name printed when a process's primary module cannot be resolved
pub const UNKNOWN_PROCESS_NAME: &str = "Unknown";

// ============================================================================
// Logging
// ============================================================================

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

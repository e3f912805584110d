//! System module - Process and module enumeration
//!
//! This module wraps the PSAPI calls behind the `ProcessSource` trait.
//! The Win32 implementation only exists on Windows; everything else is
//! platform-independent.

#[cfg_attr(not(windows), allow(dead_code))]
pub mod buffer;
pub mod error;
pub mod source;

#[cfg(windows)]
pub mod modules;
#[cfg(windows)]
pub mod processes;
#[cfg(windows)]
pub mod win32;

#[cfg(test)]
pub mod fake;

pub use source::ProcessSource;
#[cfg(windows)]
pub use win32::Win32Source;

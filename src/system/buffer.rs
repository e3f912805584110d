//! Helpers for the fixed-capacity buffer protocol of the PSAPI calls
//!
//! `EnumProcesses` and `EnumProcessModules` fill a caller-sized array and
//! report a byte count. That count is converted back into an element
//! count here, using the element type's real size.

use std::mem;

/// Number of valid entries after a call that reported `bytes` for an
/// array of `T` with room for `capacity` entries.
///
/// `EnumProcessModules` reports the bytes it *needed*, which can exceed
/// what was passed in, so the result is clamped to `capacity`.
pub fn entries_returned<T>(bytes: u32, capacity: usize) -> usize {
    let size = mem::size_of::<T>();
    if size == 0 {
        return 0;
    }
    (bytes as usize / size).min(capacity)
}

/// Size in bytes of an array of `capacity` entries of `T`, as the `u32`
/// the Win32 calls expect. Saturates rather than wrapping.
pub fn byte_len<T>(capacity: usize) -> u32 {
    u32::try_from(capacity.saturating_mul(mem::size_of::<T>())).unwrap_or(u32::MAX)
}

/// Records at debug level that a list filled its buffer. Truncation is
/// silent, so this never shows up under the default log filter.
pub fn note_if_full(list: &'static str, count: usize, capacity: usize) {
    if count == capacity {
        tracing::debug!(list, capacity, "list filled its buffer, extra entries dropped");
    }
}

/// Converts a wide-string buffer filled up to `len` units into a String.
pub fn wide_to_string(buffer: &[u16], len: u32) -> String {
    let len = (len as usize).min(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

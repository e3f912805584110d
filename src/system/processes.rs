//! Process enumeration using the PSAPI
//!
//! `EnumProcesses` takes a pre-sized array and fills as much of it as it
//! can. If more processes exist than fit, the extra ones are silently
//! dropped.

use windows::Win32::System::ProcessStatus::EnumProcesses;

use super::buffer::{byte_len, entries_returned, note_if_full};
use super::error::{EnumerationError, EnumerationResult};

/// Lists the IDs of running processes, at most `capacity` of them.
///
/// # Returns
/// * `Ok(Vec<u32>)` - Process IDs in the order the OS reports them
/// * `Err(EnumerationError::WinApi)` - If `EnumProcesses` fails
/// * `Err(EnumerationError::Empty)` - If the OS reports zero processes
pub fn enumerate_process_ids(capacity: usize) -> EnumerationResult<Vec<u32>> {
    let mut ids = vec![0u32; capacity];
    let mut bytes_returned: u32 = 0;

    // SAFETY: The pointer and byte length describe `ids` exactly, and
    // `bytes_returned` is a valid out-pointer.
    unsafe {
        EnumProcesses(
            ids.as_mut_ptr(),
            byte_len::<u32>(ids.len()),
            &mut bytes_returned,
        )
    }
    .map_err(|e| EnumerationError::WinApi {
        api: "EnumProcesses",
        code: e.code().0,
    })?;

    let count = entries_returned::<u32>(bytes_returned, ids.len());
    if count == 0 {
        return Err(EnumerationError::Empty);
    }
    note_if_full("processes", count, capacity);

    ids.truncate(count);
    Ok(ids)
}

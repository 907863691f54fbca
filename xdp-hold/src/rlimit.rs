//! Memlock limit elevation
//!
//! Loading an eBPF object pins its maps and program memory, which counts
//! against `RLIMIT_MEMLOCK`. The limit must be raised before the filter
//! object is created.

use crate::errors::{Result, XdpHoldError};

/// Raise the process's locked-memory limit to unlimited.
///
/// Needed for older kernels that don't use the new memcg based accounting,
/// see https://lwn.net/Articles/837122/. Raising an already-unlimited limit
/// is a no-op, so this is safe to call more than once per process.
pub fn raise_memlock() -> Result<()> {
    let rlim = libc::rlimit {
        rlim_cur: libc::RLIM_INFINITY,
        rlim_max: libc::RLIM_INFINITY,
    };
    let ret = unsafe { libc::setrlimit(libc::RLIMIT_MEMLOCK, &rlim) };
    if ret != 0 {
        return Err(XdpHoldError::MemlockPermission {
            source: anyhow::Error::from(std::io::Error::last_os_error()),
        });
    }
    Ok(())
}

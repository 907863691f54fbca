//! Interface name resolution
//!
//! Resolving the name is the first step of the lifecycle and has no side
//! effects, so a typo aborts the run before any privilege or kernel resource
//! is touched.

use std::ffi::CString;

use crate::errors::{Result, XdpHoldError};

/// A network interface, resolved from its name to the kernel's ifindex.
///
/// The index is owned by the OS and stable for the process lifetime; this
/// type merely references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    index: u32,
}

impl Interface {
    /// Look up `name` via `if_nametoindex(3)`.
    pub fn resolve(name: &str) -> Result<Self> {
        let c_name = CString::new(name).map_err(|_| XdpHoldError::InterfaceNotFound {
            name: name.to_string(),
        })?;

        let index = unsafe { libc::if_nametoindex(c_name.as_ptr()) };
        if index == 0 {
            return Err(XdpHoldError::InterfaceNotFound {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl std::fmt::Display for Interface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ifindex {})", self.name, self.index)
    }
}

//! Core XdpHook trait definition
//!
//! The trait is the seam between the lifecycle orchestration and the kernel:
//! the production implementation drives aya, tests substitute a recording
//! mock.

use aya::programs::XdpFlags;

use crate::errors::{Result, XdpHoldError};
use crate::iface::Interface;

/// Which hook implementation tier an attachment requests.
///
/// Generic mode is driver-independent but slower; driver and offload modes
/// are faster but only exist where the driver or NIC implements them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttachMode {
    #[default]
    Generic,
    Driver,
    Offload,
}

impl AttachMode {
    pub fn all() -> Vec<AttachMode> {
        vec![Self::Generic, Self::Driver, Self::Offload]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttachMode::Generic => "generic",
            AttachMode::Driver => "driver",
            AttachMode::Offload => "offload",
        }
    }

    /// The kernel-facing flags for this tier. Detach must present the same
    /// flags as the paired attach; the attachment record captures the mode
    /// so the two cannot diverge.
    pub fn flags(&self) -> XdpFlags {
        match self {
            AttachMode::Generic => XdpFlags::SKB_MODE,
            AttachMode::Driver => XdpFlags::DRV_MODE,
            AttachMode::Offload => XdpFlags::HW_MODE,
        }
    }
}

impl std::fmt::Display for AttachMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AttachMode {
    type Err = XdpHoldError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "generic" => Ok(AttachMode::Generic),
            "driver" => Ok(AttachMode::Driver),
            "offload" => Ok(AttachMode::Offload),
            _ => Err(XdpHoldError::InvalidMode {
                mode: s.to_string(),
                valid_modes: AttachMode::all()
                    .iter()
                    .map(|m| m.as_str().to_string())
                    .collect(),
            }),
        }
    }
}

/// Abstract interface over the in-kernel attachment slot.
///
/// At most one attachment exists per hook at a time; attach and detach are
/// acquire/release of that slot. Implementations keep the mode used at
/// attach time so detach always presents matching flags.
pub trait XdpHook {
    /// Attach the loaded filter to `iface`'s ingress path in `mode`.
    ///
    /// On failure the filter stays loaded but unattached; the caller's
    /// cleanup is limited to destroying the filter object.
    fn attach(&mut self, iface: &Interface, mode: AttachMode) -> Result<()>;

    /// Remove the live attachment, using the flags captured at attach time.
    fn detach(&mut self) -> Result<()>;

    /// Whether an attachment is currently live.
    fn is_attached(&self) -> bool;

    /// The mode of the live attachment, if any.
    fn attached_mode(&self) -> Option<AttachMode>;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod attach_mode_tests {
        use super::*;

        #[test]
        fn should_convert_mode_to_string() {
            assert_eq!(AttachMode::Generic.as_str(), "generic");
            assert_eq!(AttachMode::Driver.as_str(), "driver");
            assert_eq!(AttachMode::Offload.as_str(), "offload");
        }

        #[test]
        fn should_parse_valid_mode_from_string() {
            assert_eq!("generic".parse::<AttachMode>().unwrap(), AttachMode::Generic);
            assert_eq!("driver".parse::<AttachMode>().unwrap(), AttachMode::Driver);
            assert_eq!("offload".parse::<AttachMode>().unwrap(), AttachMode::Offload);
        }

        #[test]
        fn should_reject_invalid_mode_string() {
            let result = "native".parse::<AttachMode>();
            assert!(result.is_err());

            if let Err(XdpHoldError::InvalidMode { mode, valid_modes }) = result {
                assert_eq!(mode, "native");
                assert_eq!(valid_modes.len(), 3);
            } else {
                panic!("Expected InvalidMode error");
            }
        }

        #[test]
        fn should_default_to_generic() {
            assert_eq!(AttachMode::default(), AttachMode::Generic);
        }

        #[test]
        fn should_map_modes_to_distinct_flags() {
            assert_eq!(AttachMode::Generic.flags(), XdpFlags::SKB_MODE);
            assert_eq!(AttachMode::Driver.flags(), XdpFlags::DRV_MODE);
            assert_eq!(AttachMode::Offload.flags(), XdpFlags::HW_MODE);
        }

        #[test]
        fn should_list_all_modes() {
            let all = AttachMode::all();
            assert_eq!(all.len(), 3);
            assert!(all.contains(&AttachMode::Generic));
            assert!(all.contains(&AttachMode::Driver));
            assert!(all.contains(&AttachMode::Offload));
        }
    }
}

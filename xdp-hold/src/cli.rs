//! Command line arguments
//!
//! Lenient form: both positionals are optional and default to `eth0` / 30
//! seconds. Validation happens before any privileged work so a bad mode
//! string aborts the run cheaply.

use std::time::Duration;

use clap::Parser;

use crate::errors::Result;
use crate::filter::AttachMode;

#[derive(Debug, Clone, Parser)]
#[clap(
    name = "xdp-hold",
    about = "Attach a pass-through XDP filter to an interface, hold it, then detach"
)]
pub struct Args {
    /// Interface to attach to
    #[clap(default_value = "eth0")]
    pub iface: String,

    /// How long to keep the filter attached, in seconds
    #[clap(default_value_t = 30)]
    pub hold_secs: u64,

    /// Hook tier to request; generic works on any driver, driver and offload
    /// need support from the NIC driver or hardware
    #[clap(short, long, default_value = "generic")]
    pub mode: String,
}

impl Args {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.iface.is_empty() {
            return Err("interface name must not be empty".to_string());
        }
        self.mode
            .parse::<AttachMode>()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    pub fn attach_mode(&self) -> Result<AttachMode> {
        self.mode.parse()
    }

    pub fn hold(&self) -> Duration {
        Duration::from_secs(self.hold_secs)
    }
}

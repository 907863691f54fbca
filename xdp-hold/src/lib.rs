pub mod cli;
pub mod errors;
pub mod filter;
pub mod iface;
pub mod lifecycle;
pub mod rlimit;

pub use cli::Args;
pub use errors::{Result, XdpHoldError};
pub use filter::{AttachMode, XdpFilter, XdpHook};
pub use iface::Interface;
pub use lifecycle::HoldOutcome;

//! Filter object and attachment management
//!
//! Two halves: the [`XdpHook`] trait describing acquire/release of the
//! per-interface attachment slot, and [`XdpFilter`], the aya-backed
//! implementation owning the in-kernel object.

pub mod hook;
pub mod xdp;

pub use hook::{AttachMode, XdpHook};
pub use xdp::{Attachment, XdpFilter};

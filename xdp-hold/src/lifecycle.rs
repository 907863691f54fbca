//! Lifecycle orchestration
//!
//! The linear attach → hold → detach sequence over an already-loaded filter.
//! Detach runs whenever the attach succeeded, on both the elapsed and the
//! interrupted path; a failed attach propagates immediately and nothing is
//! detached.

use std::time::Duration;

use log::info;
use tokio::{signal, time};

use crate::errors::Result;
use crate::filter::{AttachMode, XdpHook};
use crate::iface::Interface;

/// How the hold interval ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    /// The full interval passed.
    Elapsed,
    /// Ctrl-C arrived first; the filter was detached early.
    Interrupted,
}

/// Attach `hook` to `iface`, hold for `hold`, then detach.
///
/// The hold is interruptible: Ctrl-C ends it early and falls through to the
/// same detach path, so the attachment never outlives the run.
pub async fn run<H: XdpHook>(
    hook: &mut H,
    iface: &Interface,
    mode: AttachMode,
    hold: Duration,
) -> Result<HoldOutcome> {
    hook.attach(iface, mode)?;

    let outcome = tokio::select! {
        _ = time::sleep(hold) => HoldOutcome::Elapsed,
        _ = signal::ctrl_c() => {
            info!("interrupt received, detaching early");
            HoldOutcome::Interrupted
        }
    };

    hook.detach()?;
    Ok(outcome)
}

#![no_std]
#![no_main]

use aya_ebpf::{bindings::xdp_action, macros::xdp, programs::XdpContext};
use aya_log_ebpf::debug;

/// Placeholder filter body: every packet gets the same verdict. Replace with
/// real classification logic.
#[xdp]
pub fn xdp_hold(ctx: XdpContext) -> u32 {
    debug!(&ctx, "pass");
    xdp_action::XDP_PASS
}

#[cfg(not(test))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[link_section = "license"]
#[no_mangle]
static LICENSE: [u8; 13] = *b"Dual MIT/GPL\0";

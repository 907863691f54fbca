//! XDP-backed filter object
//!
//! Wraps the opened eBPF object and the single ingress attachment slot.
//! Open and load are separate phases: open parses and validates the object
//! bytes, load pushes the program through the in-kernel verifier. The kernel
//! object lives exactly as long as this value; dropping it releases the
//! program and maps, and tears down a still-live attachment with them.

use aya::programs::xdp::{Xdp, XdpLinkId};
use aya::Ebpf;
use aya_log::EbpfLogger;
use log::{info, warn};

use super::hook::{AttachMode, XdpHook};
use crate::errors::{Result, XdpHoldError};
use crate::iface::Interface;

/// Name of the entry function in the embedded object.
const PROGRAM_NAME: &str = "xdp_hold";

/// A live attachment: the interface, the mode used to create it, and the
/// kernel link. Detach reuses the mode captured here, so attach and detach
/// flags can never diverge.
pub struct Attachment {
    iface: String,
    if_index: u32,
    mode: AttachMode,
    link_id: XdpLinkId,
}

impl Attachment {
    pub fn iface(&self) -> &str {
        &self.iface
    }

    pub fn if_index(&self) -> u32 {
        self.if_index
    }

    pub fn mode(&self) -> AttachMode {
        self.mode
    }
}

pub struct XdpFilter {
    ebpf: Ebpf,
    attachment: Option<Attachment>,
}

impl XdpFilter {
    /// Parse and validate the compiled filter object.
    ///
    /// The bytes are an opaque artifact produced by the eBPF build; nothing
    /// is attached yet. Kernel-side log forwarding is initialized here so
    /// the filter's own diagnostics surface through the process logger.
    pub fn open(data: &[u8]) -> Result<Self> {
        let mut ebpf = Ebpf::load(data).map_err(|e| XdpHoldError::ObjectOpen {
            source: anyhow::Error::from(e),
        })?;

        if let Err(e) = EbpfLogger::init(&mut ebpf) {
            warn!("failed to initialize eBPF logger: {e}");
        }

        Ok(Self {
            ebpf,
            attachment: None,
        })
    }

    /// Push the program through the kernel verifier.
    ///
    /// Must succeed before [`XdpHook::attach`]. A rejected program leaves
    /// the object open but unloaded; the caller destroys it by dropping.
    pub fn load(&mut self) -> Result<()> {
        let program = self.program_mut()?;
        program.load().map_err(|e| XdpHoldError::ProgramLoad {
            program_name: PROGRAM_NAME.to_string(),
            source: anyhow::Error::from(e),
        })?;
        Ok(())
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    fn program_mut(&mut self) -> Result<&mut Xdp> {
        let program =
            self.ebpf
                .program_mut(PROGRAM_NAME)
                .ok_or_else(|| XdpHoldError::ProgramNotFound {
                    program_name: PROGRAM_NAME.to_string(),
                })?;

        program.try_into().map_err(|e| XdpHoldError::ProgramLoad {
            program_name: PROGRAM_NAME.to_string(),
            source: anyhow::anyhow!("not an XDP program: {e:?}"),
        })
    }
}

impl XdpHook for XdpFilter {
    fn attach(&mut self, iface: &Interface, mode: AttachMode) -> Result<()> {
        if let Some(attachment) = &self.attachment {
            return Err(XdpHoldError::AlreadyAttached {
                iface: attachment.iface.clone(),
            });
        }

        let program = self.program_mut()?;
        let link_id = program
            .attach_to_if_index(iface.index(), mode.flags())
            .map_err(|e| XdpHoldError::Attach {
                iface: iface.name().to_string(),
                if_index: iface.index(),
                source: anyhow::Error::from(e),
            })?;

        info!("attached {mode} filter to {iface}");
        self.attachment = Some(Attachment {
            iface: iface.name().to_string(),
            if_index: iface.index(),
            mode,
            link_id,
        });
        Ok(())
    }

    fn detach(&mut self) -> Result<()> {
        let attachment = self.attachment.take().ok_or(XdpHoldError::NotAttached)?;

        let program = self.program_mut()?;
        program
            .detach(attachment.link_id)
            .map_err(|e| XdpHoldError::Detach {
                iface: attachment.iface.clone(),
                if_index: attachment.if_index,
                source: anyhow::Error::from(e),
            })?;

        info!(
            "detached filter from {} (ifindex {})",
            attachment.iface, attachment.if_index
        );
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    fn attached_mode(&self) -> Option<AttachMode> {
        self.attachment.as_ref().map(|a| a.mode)
    }
}

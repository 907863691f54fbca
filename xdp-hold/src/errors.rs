//! Unified error types for xdp-hold
//!
//! One variant per lifecycle step, each carrying enough context (operation,
//! interface name/ifindex, underlying error) to diagnose a failed run from a
//! single log line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XdpHoldError {
    #[error("no interface named {name:?}")]
    InterfaceNotFound { name: String },

    #[error("failed to raise RLIMIT_MEMLOCK: {source}")]
    MemlockPermission { source: anyhow::Error },

    #[error("failed to open filter object: {source}")]
    ObjectOpen { source: anyhow::Error },

    #[error("program {program_name:?} not found in filter object")]
    ProgramNotFound { program_name: String },

    #[error("kernel rejected program {program_name:?}: {source}")]
    ProgramLoad {
        program_name: String,
        source: anyhow::Error,
    },

    #[error("failed to attach to {iface} (ifindex {if_index}): {source}")]
    Attach {
        iface: String,
        if_index: u32,
        source: anyhow::Error,
    },

    #[error("failed to detach from {iface} (ifindex {if_index}): {source}")]
    Detach {
        iface: String,
        if_index: u32,
        source: anyhow::Error,
    },

    #[error("filter already attached to {iface}")]
    AlreadyAttached { iface: String },

    #[error("no live attachment to detach")]
    NotAttached,

    #[error("invalid attach mode: {mode}. Valid modes: {valid_modes:?}")]
    InvalidMode {
        mode: String,
        valid_modes: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, XdpHoldError>;

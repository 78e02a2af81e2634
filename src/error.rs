//! Typed errors for the two fatal conditions this crate never panics on:
//! an image that can't be loaded, and a VM that hits an undefined opcode
//! or trap vector. Host I/O failures (a failed flush or write) are
//! deliberately *not* represented here -- per spec they are best-effort
//! and are logged, not surfaced as errors.

use std::path::PathBuf;

/// Failure to load an object image into memory.
#[derive(Debug, thiserror::Error)]
#[error("failed to load image {}: {source}", path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A fatal condition encountered while executing an instruction.
///
/// Both variants are unrecoverable within the VM: execution stops and the
/// error is handed back to the caller instead of panicking or aborting the
/// process.
#[derive(Debug, thiserror::Error)]
pub enum VmError {
    #[error("illegal opcode {opcode:#06b} ({name})")]
    IllegalOpcode { opcode: u16, name: &'static str },

    #[error("unknown trap vector {vector:#04x}")]
    UnknownTrap { vector: u16 },
}

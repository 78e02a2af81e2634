//! LC-3 instruction interpreter: a flat 65536-word address space, the
//! register file, the image loader, and the fetch-decode-execute loop.

pub mod error;
pub mod vm;

pub use error::{LoadError, VmError};
pub use vm::Vm;

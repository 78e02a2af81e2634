//! The host adapter boundary: everything the interpreter needs from the
//! surrounding terminal that isn't architectural VM state.
//!
//! The distilled ISA spec calls these two external collaborators without
//! specifying their shape. This module gives them one: a small trait the
//! memory-mapped I/O intercept and the character traps can be written
//! against, a production implementation backed by `termios`/`mio`, and an
//! in-memory implementation for tests.

pub mod keyboard;
pub mod terminal;

use std::collections::VecDeque;
use std::io;

pub use terminal::TerminalHost;

/// Everything the VM needs from the outside world: raw-mode character I/O,
/// plus non-blocking keyboard-ready polling for the `KBSR` memory-mapped
/// register.
pub trait Host {
    /// Non-blocking: true iff a character is currently available to read.
    /// Must re-poll on every call rather than caching a prior result.
    fn key_ready(&mut self) -> bool;

    /// Consumes and returns the character that made `key_ready` true.
    /// Only meaningful to call right after `key_ready` returned `true`.
    fn read_key(&mut self) -> u16;

    /// Blocking read of a single character (used by GETC/IN).
    fn blocking_read_char(&mut self) -> io::Result<u8>;

    /// Writes one character to the host's output stream.
    fn write_char(&mut self, c: u8) -> io::Result<()>;

    /// Flushes the output stream.
    fn flush(&mut self) -> io::Result<()>;

    /// Narrows the trait object back to its concrete type. Lets tests
    /// recover a [`RecordingHost`] from a `&mut dyn Host` to inspect
    /// captured output.
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

/// An in-memory `Host` for tests: a scripted input queue and a captured
/// output buffer, with `key_ready` reporting whatever the test preloaded.
#[derive(Default)]
pub struct RecordingHost {
    input: VecDeque<u8>,
    pub output: Vec<u8>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues bytes that `blocking_read_char`/`key_ready`+`read_key` will
    /// hand out in order.
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    pub fn output_as_string(&self) -> String {
        self.output.iter().map(|&b| b as char).collect()
    }
}

impl Host for RecordingHost {
    fn key_ready(&mut self) -> bool {
        !self.input.is_empty()
    }

    fn read_key(&mut self) -> u16 {
        self.input.pop_front().unwrap_or(0) as u16
    }

    fn blocking_read_char(&mut self) -> io::Result<u8> {
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left"))
    }

    fn write_char(&mut self, c: u8) -> io::Result<()> {
        self.output.push(c);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

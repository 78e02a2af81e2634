//! Raw-mode terminal setup: disables canonical-mode line buffering and
//! echo on construction, restores the original mode on `Drop` so the
//! terminal comes back however the process exits.

use std::io::{self, Read, Write};

use termios::{tcsetattr, Termios};
use termios::{BRKINT, ECHO, ICANON, ICRNL, IGNBRK, IGNCR, INLCR, ISTRIP, IXON, PARMRK, TCSANOW};

use super::keyboard::KeyboardPoller;
use super::Host;

/// Disables input buffering for the lifetime of the value, restoring the
/// original terminal settings on drop.
struct RawModeGuard {
    original: Termios,
}

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        let original = Termios::from_fd(0)?;

        let mut raw = original;
        raw.c_iflag &= IGNBRK | BRKINT | PARMRK | ISTRIP | INLCR | IGNCR | ICRNL | IXON;
        raw.c_lflag &= !(ICANON | ECHO);
        tcsetattr(0, TCSANOW, &raw)?;

        Ok(Self { original })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Best-effort: there is nothing sensible to do if restoring the
        // terminal fails on the way out.
        let _ = tcsetattr(0, TCSANOW, &self.original);
    }
}

/// Production `Host`: a real terminal in raw mode, with non-blocking
/// keyboard-ready polling via `mio`.
pub struct TerminalHost {
    _raw_mode: RawModeGuard,
    poller: KeyboardPoller,
}

impl TerminalHost {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            _raw_mode: RawModeGuard::enable()?,
            poller: KeyboardPoller::new()?,
        })
    }
}

impl Host for TerminalHost {
    fn key_ready(&mut self) -> bool {
        self.poller.poll_ready().unwrap_or(false)
    }

    fn read_key(&mut self) -> u16 {
        self.blocking_read_char().unwrap_or(0) as u16
    }

    fn blocking_read_char(&mut self) -> io::Result<u8> {
        let mut buf = [0u8];
        io::stdin().read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn write_char(&mut self, c: u8) -> io::Result<()> {
        io::stdout().write_all(&[c])
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

//! Non-blocking keyboard-ready polling for stdin, backed by `mio`.
//!
//! The ISA spec requires `mem_read(KBSR)` to poll the host without
//! blocking the interpreter loop. A plain blocking read on stdin would
//! violate that, so this polls with a zero timeout instead.

use std::io;
use std::os::unix::io::AsRawFd;

use mio::unix::SourceFd;
use mio::{Events, Interest, Poll, Token};

const STDIN: Token = Token(0);

pub struct KeyboardPoller {
    poll: Poll,
    events: Events,
}

impl KeyboardPoller {
    pub fn new() -> io::Result<Self> {
        let poll = Poll::new()?;
        let stdin_fd = io::stdin().as_raw_fd();
        let mut source_fd = SourceFd(&stdin_fd);
        poll.registry()
            .register(&mut source_fd, STDIN, Interest::READABLE)?;

        Ok(Self {
            poll,
            events: Events::with_capacity(1),
        })
    }

    /// Returns whether stdin currently has a byte ready to read, without
    /// blocking.
    pub fn poll_ready(&mut self) -> io::Result<bool> {
        self.poll
            .poll(&mut self.events, Some(std::time::Duration::from_secs(0)))?;
        Ok(self
            .events
            .iter()
            .any(|event| event.token() == STDIN && event.is_readable()))
    }
}

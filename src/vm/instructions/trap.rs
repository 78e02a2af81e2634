use crate::vm::{Memory, Registers};

use std::convert::TryFrom;

pub enum TrapCode {
    Getc,
    Out,
    Puts,
    In,
    Putsp,
    Halt,
}

impl TryFrom<u16> for TrapCode {
    type Error = ();

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        use TrapCode::*;

        let trap_code = match value {
            0x20 => Getc,
            0x21 => Out,
            0x22 => Puts,
            0x23 => In,
            0x24 => Putsp,
            0x25 => Halt,
            _ => return Err(()),
        };

        Ok(trap_code)
    }
}

/// Flushes the host's output stream, logging (not panicking) on failure.
/// The host is best-effort: a broken pipe on stdout shouldn't crash the
/// interpreter mid-program.
fn flush(mem: &mut Memory) {
    if let Err(e) = mem.host_mut().flush() {
        tracing::warn!(error = %e, "failed to flush host output");
    }
}

fn write_char(mem: &mut Memory, c: u8) {
    if let Err(e) = mem.host_mut().write_char(c) {
        tracing::warn!(error = %e, "failed to write host output");
    }
}

pub fn getc(regs: &mut Registers, mem: &mut Memory) {
    let c = mem.host_mut().blocking_read_char().unwrap_or(0) as u16;
    regs.write(0, c);
    regs.update_cond_flags(c);
}

pub fn out(regs: &Registers, mem: &mut Memory) {
    write_char(mem, regs.read(0) as u8);
    flush(mem);
}

pub fn puts(regs: &Registers, mem: &mut Memory) {
    let mut mem_addr = regs.read(0);
    loop {
        let chr = mem.read(mem_addr);
        if chr == 0x0000 {
            break;
        }
        write_char(mem, chr as u8);
        mem_addr = mem_addr.wrapping_add(1);
    }
    flush(mem);
}

pub fn putsp(regs: &Registers, mem: &mut Memory) {
    let mut mem_addr = regs.read(0);
    loop {
        let word = mem.read(mem_addr);
        if word == 0x0000 {
            break;
        }
        let [chr2, chr1] = word.to_be_bytes();
        write_char(mem, chr1);
        write_char(mem, chr2);
        mem_addr = mem_addr.wrapping_add(1);
    }
    flush(mem);
}

pub fn r#in(regs: &mut Registers, mem: &mut Memory) {
    for &c in b"Enter a character: " {
        write_char(mem, c);
    }
    flush(mem);
    let c = mem.host_mut().blocking_read_char().unwrap_or(0);
    write_char(mem, c); // echo, since raw mode suppresses the terminal's own echo
    let value = c as u16;
    regs.write(0, value);
    regs.update_cond_flags(value);
    flush(mem);
}

pub fn halt(mem: &mut Memory) {
    for &c in b"HALT" {
        write_char(mem, c);
    }
    flush(mem);
}

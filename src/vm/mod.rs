//! The LC-3 virtual machine: register file, flat memory, and the
//! fetch-decode-execute loop that drives them.

pub mod bits;
pub mod host;
mod instructions;
pub mod loader;
pub mod memory;
pub mod opcode;
pub mod registers;

use host::Host;
use memory::Memory;
use opcode::Opcode;
use registers::Registers;

use crate::error::VmError;

use std::convert::TryFrom;
use std::io::Read;
use std::path::Path;

pub struct Vm {
    regs: Registers,
    mem: Memory,
    running: bool,
}

impl Vm {
    /// Creates a VM backed by the given host adapter. Production code wants
    /// [`Vm::with_terminal`]; tests construct a [`host::RecordingHost`]
    /// directly and pass it here.
    pub fn new(host: Box<dyn Host>) -> Self {
        Self {
            regs: Registers::new(),
            mem: Memory::new(host),
            running: false,
        }
    }

    /// Creates a VM backed by a real terminal in raw mode.
    pub fn with_terminal() -> std::io::Result<Self> {
        Ok(Self::new(Box::new(host::TerminalHost::new()?)))
    }

    /// Loads an object image from an arbitrary reader, starting at the
    /// origin address encoded in its first word.
    pub fn load_program<R: Read>(&mut self, reader: R) -> std::io::Result<()> {
        loader::load(&mut self.mem, reader)
    }

    /// Opens and loads the image at `path`.
    pub fn load_file(&mut self, path: &Path) -> Result<(), crate::error::LoadError> {
        loader::load_file(&mut self.mem, path)
    }

    /// Reads a general register (R0..R7). Intended for tests and tooling
    /// that drive the VM without a real terminal.
    pub fn register(&self, index: u16) -> u16 {
        self.regs.read(index)
    }

    /// Reads a memory cell, polling the host if it is the KBSR.
    pub fn memory_at(&mut self, address: u16) -> u16 {
        self.mem.read(address)
    }

    /// Writes a memory cell directly, bypassing the loader. Intended for
    /// tests that hand-assemble a program in place.
    pub fn write_memory(&mut self, address: u16, value: u16) {
        self.mem.write(address, value);
    }

    /// The host adapter, for tests that need to inspect captured output or
    /// queue scripted input after construction.
    pub fn host_mut(&mut self) -> &mut dyn Host {
        self.mem.host_mut()
    }

    /// Runs the fetch-decode-execute loop until a `HALT` trap fires or a
    /// fatal [`VmError`] is encountered.
    pub fn run(&mut self) -> Result<(), VmError> {
        self.running = true;
        self.main_loop()
    }

    pub fn abort(&mut self) {
        self.running = false;
    }

    fn main_loop(&mut self) -> Result<(), VmError> {
        while self.running {
            let instr = self.mem.read(self.regs.pc);
            self.regs.pc = self.regs.pc.wrapping_add(1);
            let (regs, mem) = (&mut self.regs, &mut self.mem);
            let opcode = Opcode::try_from(instr >> 12).expect("opcode is masked to 4 bits");
            match opcode {
                Opcode::Br => instructions::br(instr, regs),
                Opcode::Add => instructions::add(instr, regs),
                Opcode::Ld => instructions::ld(instr, regs, mem),
                Opcode::St => instructions::st(instr, regs, mem),
                Opcode::Jsr => instructions::jsr(instr, regs),
                Opcode::And => instructions::and(instr, regs),
                Opcode::Ldr => instructions::ldr(instr, regs, mem),
                Opcode::Str => instructions::str(instr, regs, mem),
                Opcode::Rti => {
                    return Err(VmError::IllegalOpcode {
                        opcode: instr >> 12,
                        name: opcode.name(),
                    })
                }
                Opcode::Not => instructions::not(instr, regs),
                Opcode::Ldi => instructions::ldi(instr, regs, mem),
                Opcode::Sti => instructions::sti(instr, regs, mem),
                Opcode::Jmp => instructions::jmp(instr, regs),
                Opcode::Res => {
                    return Err(VmError::IllegalOpcode {
                        opcode: instr >> 12,
                        name: opcode.name(),
                    })
                }
                Opcode::Lea => instructions::lea(instr, regs),
                Opcode::Trap => {
                    let should_halt = instructions::trap(instr, regs, mem)?;
                    if should_halt {
                        self.running = false;
                    }
                }
            };
        }
        Ok(())
    }
}

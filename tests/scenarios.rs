//! End-to-end scenarios: hand-assembled LC-3 programs driven through the
//! public `Vm` API with a scripted `RecordingHost`, exercising the
//! instruction set the way a real object image would.

use lc3_vm::vm::host::RecordingHost;
use lc3_vm::Vm;

fn vm_with_program(words: &[u16]) -> Vm {
    let mut vm = Vm::new(Box::new(RecordingHost::new()));
    for (offset, &word) in words.iter().enumerate() {
        vm.write_memory(0x3000u16.wrapping_add(offset as u16), word);
    }
    vm
}

fn output_of(vm: &mut Vm) -> String {
    vm.host_mut()
        .as_any_mut()
        .downcast_mut::<RecordingHost>()
        .expect("test host is always a RecordingHost")
        .output_as_string()
}

const TRAP_HALT: u16 = 0xF025;
const TRAP_OUT: u16 = 0xF021;
const TRAP_PUTS: u16 = 0xF022;
const TRAP_GETC: u16 = 0xF020;

#[test]
fn puts_prints_a_null_terminated_string_then_halts() {
    // LEA R0, #2 ; PUTS ; HALT ; .STRINGZ "hi"
    let lea = (0b1110 << 12) | (0 << 9) | 2; // LEA R0, PC+2
    let mut vm = vm_with_program(&[lea, TRAP_PUTS, TRAP_HALT]);
    vm.write_memory(0x3003, b'h' as u16);
    vm.write_memory(0x3004, b'i' as u16);
    vm.write_memory(0x3005, 0x0000);

    vm.run().expect("well-formed program halts cleanly");
    assert_eq!(output_of(&mut vm), "hi");
}

#[test]
fn getc_then_out_echoes_one_scripted_character() {
    // GETC ; OUT ; HALT
    let mut vm = vm_with_program(&[TRAP_GETC, TRAP_OUT, TRAP_HALT]);
    vm.host_mut()
        .as_any_mut()
        .downcast_mut::<RecordingHost>()
        .unwrap()
        .push_input(b"Q");

    vm.run().unwrap();
    assert_eq!(vm.register(0), b'Q' as u16);
    assert_eq!(output_of(&mut vm), "Q");
}

#[test]
fn jsr_and_ret_round_trip_through_a_subroutine() {
    // JSR #1 ; HALT ; ADD R0, R0, #1 ; RET
    let jsr = (0b0100 << 12) | (1 << 11) | 1; // JSR PC+1 -> lands on ADD at 0x3002
    let add_imm = (0b0001 << 12) | (0 << 9) | (0 << 6) | 0x20 | 1; // ADD R0, R0, #1
    let ret = (0b1100 << 12) | (7 << 6); // JMP R7
    let mut vm = vm_with_program(&[jsr, TRAP_HALT, add_imm, ret]);
    vm.run().unwrap();
    assert_eq!(vm.register(0), 1);
}

#[test]
fn st_then_ld_round_trips_a_value_through_memory() {
    // ADD R1, R1, #7 ; ST R1, #3 ; LD R2, #2 ; HALT
    let add_imm = (0b0001 << 12) | (1 << 9) | (1 << 6) | 0x20 | 7;
    let st = (0b0011 << 12) | (1 << 9) | 3;
    let ld = (0b0010 << 12) | (2 << 9) | 2;
    let mut vm = vm_with_program(&[add_imm, st, ld, TRAP_HALT]);
    vm.run().unwrap();
    assert_eq!(vm.register(2), 7);
}

#[test]
fn illegal_opcode_stops_execution_with_a_vm_error() {
    let rti = 0b1000 << 12;
    let mut vm = vm_with_program(&[rti]);
    let err = vm.run().unwrap_err();
    assert!(err.to_string().contains("RTI"));
}

#[test]
fn unknown_trap_vector_stops_execution_with_a_vm_error() {
    let unknown_trap = 0xF0FF;
    let mut vm = vm_with_program(&[unknown_trap]);
    let err = vm.run().unwrap_err();
    assert!(err.to_string().contains("0xff"));
}

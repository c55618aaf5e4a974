//! # Shift Kernel
//!
//! ASL, LSR, ROL, and ROR: read a byte, transform it, write it back.
//! In accumulator mode the byte is A itself; in the memory modes it is
//! the byte at the effective address. The carry flag always receives the
//! bit shifted out, and Z/N track the written result (N is never set by
//! LSR, and after ROR it equals the carry that rotated in).

use crate::addressing::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;
use crate::status::Status;

/// Executes one shift/rotate against the resolved target.
pub(crate) fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic, target: Operand) {
    let input = match target {
        Operand::Accumulator => cpu.a,
        Operand::Address(addr) => cpu.bus.read(addr),
        _ => unreachable!("{mnemonic} resolved to a non-writable operand"),
    };

    let carry_in = cpu.p.contains(Status::CARRY);
    let (result, carry_out) = match mnemonic {
        Mnemonic::Asl => shift_left(input),
        Mnemonic::Lsr => shift_right(input),
        Mnemonic::Rol => rotate_left(input, carry_in),
        Mnemonic::Ror => rotate_right(input, carry_in),
        other => unreachable!("{other} is not a shift or rotate"),
    };

    cpu.p.set(Status::CARRY, carry_out);
    cpu.p.set_zn(result);

    match target {
        Operand::Accumulator => cpu.a = result,
        Operand::Address(addr) => cpu.bus.write(addr, result),
        _ => unreachable!(),
    }
}

/// Shift left one bit; bit 7 falls out into carry.
fn shift_left(value: u8) -> (u8, bool) {
    (value << 1, value & 0x80 != 0)
}

/// Shift right one bit; bit 0 falls out into carry.
fn shift_right(value: u8) -> (u8, bool) {
    (value >> 1, value & 0x01 != 0)
}

/// Rotate left through carry: carry-in becomes bit 0, bit 7 falls out.
fn rotate_left(value: u8, carry_in: bool) -> (u8, bool) {
    ((value << 1) | carry_in as u8, value & 0x80 != 0)
}

/// Rotate right through carry: carry-in becomes bit 7, bit 0 falls out.
fn rotate_right(value: u8, carry_in: bool) -> (u8, bool) {
    ((value >> 1) | (carry_in as u8) << 7, value & 0x01 != 0)
}

//! # Argument Kernel
//!
//! Instructions that consume their operand as a value and never write it
//! back: loads, the accumulator ALU group, BIT, and the three compares.
//! The dispatch loop has already read the byte, whether it came from an
//! immediate operand or from memory.

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;
use crate::status::Status;

/// Executes one value-consuming instruction against `value`.
pub(crate) fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic, value: u8) {
    match mnemonic {
        Mnemonic::Adc => adc(cpu, value),
        Mnemonic::Sbc => sbc(cpu, value),

        Mnemonic::And => {
            cpu.a &= value;
            cpu.p.set_zn(cpu.a);
        }
        Mnemonic::Eor => {
            cpu.a ^= value;
            cpu.p.set_zn(cpu.a);
        }
        Mnemonic::Ora => {
            cpu.a |= value;
            cpu.p.set_zn(cpu.a);
        }

        Mnemonic::Bit => {
            // Z from the mask, N and V straight from the operand's top
            // bits. A itself is untouched.
            cpu.p.set(Status::ZERO, cpu.a & value == 0);
            cpu.p.set(Status::NEGATIVE, value & 0x80 != 0);
            cpu.p.set(Status::OVERFLOW, value & 0x40 != 0);
        }

        Mnemonic::Cmp => {
            let a = cpu.a;
            compare(cpu, a, value);
        }
        Mnemonic::Cpx => {
            let x = cpu.x;
            compare(cpu, x, value);
        }
        Mnemonic::Cpy => {
            let y = cpu.y;
            compare(cpu, y, value);
        }

        Mnemonic::Lda => {
            cpu.a = value;
            cpu.p.set_zn(cpu.a);
        }
        Mnemonic::Ldx => {
            cpu.x = value;
            cpu.p.set_zn(cpu.x);
        }
        Mnemonic::Ldy => {
            cpu.y = value;
            cpu.p.set_zn(cpu.y);
        }

        other => unreachable!("{other} does not take a value operand"),
    }
}

/// Add with carry. Binary only: the D flag is ignored.
///
/// C reports unsigned overflow out of bit 7. V reports signed overflow:
/// both operands shared a sign bit and the result's differs.
fn adc<B: Bus>(cpu: &mut Cpu<'_, B>, value: u8) {
    let carry_in = cpu.p.contains(Status::CARRY) as u16;
    let sum = cpu.a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.p.set(Status::CARRY, sum > 0xFF);
    cpu.p
        .set(Status::OVERFLOW, (cpu.a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.a = result;
    cpu.p.set_zn(result);
}

/// Subtract with borrow (A - M - (1 - C)). Binary only.
///
/// C is the no-borrow flag. V is set when A and M had different sign
/// bits and the result's sign left A's.
fn sbc<B: Bus>(cpu: &mut Cpu<'_, B>, value: u8) {
    let borrow = !cpu.p.contains(Status::CARRY) as u16;
    let diff = (cpu.a as u16)
        .wrapping_sub(value as u16)
        .wrapping_sub(borrow);
    let result = diff as u8;

    cpu.p.set(Status::CARRY, diff < 0x100);
    cpu.p
        .set(Status::OVERFLOW, (cpu.a ^ result) & (cpu.a ^ value) & 0x80 != 0);
    cpu.a = result;
    cpu.p.set_zn(result);
}

/// Shared CMP/CPX/CPY core: C means reg >= M, Z/N come from the
/// truncated difference.
fn compare<B: Bus>(cpu: &mut Cpu<'_, B>, register: u8, value: u8) {
    cpu.p.set(Status::CARRY, register >= value);
    cpu.p.set_zn(register.wrapping_sub(value));
}

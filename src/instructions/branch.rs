//! # Branch Kernel
//!
//! The eight conditional branches. By the time the kernel runs, PC
//! already points at the instruction following the branch, so a taken
//! branch just adds the sign-extended displacement to it. Branches never
//! touch the flags.

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;
use crate::status::Status;

/// Executes one branch. `displacement` is the signed byte that followed
/// the opcode.
pub(crate) fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic, displacement: i8) {
    let taken = match mnemonic {
        Mnemonic::Bcc => !cpu.p.contains(Status::CARRY),
        Mnemonic::Bcs => cpu.p.contains(Status::CARRY),
        Mnemonic::Bne => !cpu.p.contains(Status::ZERO),
        Mnemonic::Beq => cpu.p.contains(Status::ZERO),
        Mnemonic::Bpl => !cpu.p.contains(Status::NEGATIVE),
        Mnemonic::Bmi => cpu.p.contains(Status::NEGATIVE),
        Mnemonic::Bvc => !cpu.p.contains(Status::OVERFLOW),
        Mnemonic::Bvs => cpu.p.contains(Status::OVERFLOW),
        other => unreachable!("{other} is not a branch"),
    };

    if taken {
        cpu.pc = cpu.pc.wrapping_add_signed(displacement as i16);
    }
}

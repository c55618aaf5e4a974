//! # Command Kernel
//!
//! Implied-mode instructions: flag set/clear, register steps and
//! transfers, stack pushes and pulls, and the BRK/RTI/RTS trio. None of
//! these carry operand bytes; everything they need is already in the
//! register file or on the stack.

use crate::bus::Bus;
use crate::cpu::{Cpu, IRQ_VECTOR};
use crate::opcodes::Mnemonic;
use crate::status::Status;

/// Executes one implied-mode instruction.
pub(crate) fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic) {
    match mnemonic {
        Mnemonic::Clc => cpu.p.remove(Status::CARRY),
        Mnemonic::Cld => cpu.p.remove(Status::DECIMAL),
        Mnemonic::Cli => cpu.p.remove(Status::IRQ_DISABLE),
        Mnemonic::Clv => cpu.p.remove(Status::OVERFLOW),
        Mnemonic::Sec => cpu.p.insert(Status::CARRY),
        Mnemonic::Sed => cpu.p.insert(Status::DECIMAL),
        Mnemonic::Sei => cpu.p.insert(Status::IRQ_DISABLE),

        Mnemonic::Dex => {
            cpu.x = cpu.x.wrapping_sub(1);
            cpu.p.set_zn(cpu.x);
        }
        Mnemonic::Dey => {
            cpu.y = cpu.y.wrapping_sub(1);
            cpu.p.set_zn(cpu.y);
        }
        Mnemonic::Inx => {
            cpu.x = cpu.x.wrapping_add(1);
            cpu.p.set_zn(cpu.x);
        }
        Mnemonic::Iny => {
            cpu.y = cpu.y.wrapping_add(1);
            cpu.p.set_zn(cpu.y);
        }

        Mnemonic::Tax => {
            cpu.x = cpu.a;
            cpu.p.set_zn(cpu.x);
        }
        Mnemonic::Tay => {
            cpu.y = cpu.a;
            cpu.p.set_zn(cpu.y);
        }
        Mnemonic::Txa => {
            cpu.a = cpu.x;
            cpu.p.set_zn(cpu.a);
        }
        Mnemonic::Tya => {
            cpu.a = cpu.y;
            cpu.p.set_zn(cpu.a);
        }
        Mnemonic::Tsx => {
            cpu.x = cpu.s;
            cpu.p.set_zn(cpu.x);
        }
        // TXS is the one transfer that leaves the flags alone.
        Mnemonic::Txs => cpu.s = cpu.x,

        Mnemonic::Nop => {}

        Mnemonic::Pha => {
            let a = cpu.a;
            cpu.push(a);
        }
        Mnemonic::Php => {
            let p = cpu.p.pushed();
            cpu.push(p);
        }
        Mnemonic::Pla => {
            cpu.a = cpu.pop();
            cpu.p.set_zn(cpu.a);
        }
        Mnemonic::Plp => {
            let byte = cpu.pop();
            cpu.p = Status::pulled(byte);
        }

        Mnemonic::Brk => {
            // PC has already advanced past the BRK opcode.
            let return_addr = cpu.pc;
            cpu.push_word(return_addr);
            cpu.p.insert(Status::BREAK);
            let p = cpu.p.pushed();
            cpu.push(p);
            cpu.pc = cpu.read_vector(IRQ_VECTOR);
        }
        Mnemonic::Rti => {
            let byte = cpu.pop();
            cpu.p = Status::pulled(byte);
            cpu.pc = cpu.pop_word();
        }
        Mnemonic::Rts => {
            // JSR pushed the address of its own last operand byte.
            cpu.pc = cpu.pop_word().wrapping_add(1);
        }

        other => unreachable!("{other} is not an implied-mode instruction"),
    }
}

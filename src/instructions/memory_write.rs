//! # Memory-Write Kernel
//!
//! Instructions that consume an effective address: the two jumps, the
//! three stores, and the in-memory increment/decrement. The dispatch
//! loop has already resolved the address, including the indirect-jump
//! page-wrap quirk for JMP.

use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;

/// Executes one address-consuming instruction against `addr`.
pub(crate) fn execute<B: Bus>(cpu: &mut Cpu<'_, B>, mnemonic: Mnemonic, addr: u16) {
    match mnemonic {
        Mnemonic::Jmp => cpu.pc = addr,

        Mnemonic::Jsr => {
            // Push the address of the last operand byte; RTS adds one
            // back when it returns.
            let return_addr = cpu.pc.wrapping_sub(1);
            cpu.push_word(return_addr);
            cpu.pc = addr;
        }

        Mnemonic::Inc => {
            let result = cpu.bus.read(addr).wrapping_add(1);
            cpu.bus.write(addr, result);
            cpu.p.set_zn(result);
        }
        Mnemonic::Dec => {
            let result = cpu.bus.read(addr).wrapping_sub(1);
            cpu.bus.write(addr, result);
            cpu.p.set_zn(result);
        }

        Mnemonic::Sta => {
            let a = cpu.a;
            cpu.bus.write(addr, a);
        }
        Mnemonic::Stx => {
            let x = cpu.x;
            cpu.bus.write(addr, x);
        }
        Mnemonic::Sty => {
            let y = cpu.y;
            cpu.bus.write(addr, y);
        }

        other => unreachable!("{other} does not take an address operand"),
    }
}

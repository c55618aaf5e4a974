//! # Decode Tables
//!
//! The static instruction metadata the dispatch loop runs on:
//!
//! - [`OPCODE_TABLE`]: a dense 256-entry table mapping each opcode byte
//!   to its mnemonic, addressing mode, and base cycle count. `None`
//!   entries are the 105 unofficial opcodes.
//! - [`Mnemonic::category`]: maps each of the 56 documented mnemonics to
//!   the semantic kernel that executes it.
//! - [`AddressingMode::operand_bytes`]: instruction length, minus the
//!   opcode byte itself.
//!
//! All three are `const` data; nothing here is ever mutated.

use crate::addressing::AddressingMode;
use std::fmt;

/// The 56 documented 6502 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

/// Semantic kernel a mnemonic dispatches to.
///
/// The category decides what the dispatch loop hands the kernel: nothing
/// (Command), a signed displacement (Branch), the operand value
/// (Argument), the effective address (MemoryWrite), or a
/// read-transform-write target (AccumulatorWrite).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Implied-mode register/flag/stack operations plus BRK/RTI/RTS.
    Command,
    /// The eight conditional branches (relative mode).
    Branch,
    /// Reads its operand as a value; never writes memory.
    Argument,
    /// Consumes an effective address: jumps, stores, and INC/DEC.
    MemoryWrite,
    /// Shifts and rotates, targeting A or a memory byte in place.
    AccumulatorWrite,
}

impl Mnemonic {
    /// The kernel this mnemonic belongs to.
    pub const fn category(self) -> Category {
        use Mnemonic::*;
        match self {
            Brk | Clc | Cld | Cli | Clv | Dex | Dey | Inx | Iny | Nop | Pha | Php | Pla
            | Plp | Rti | Rts | Sec | Sed | Sei | Tax | Tay | Tsx | Txa | Txs | Tya => {
                Category::Command
            }
            Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs => Category::Branch,
            Adc | And | Bit | Cmp | Cpx | Cpy | Eor | Lda | Ldx | Ldy | Ora | Sbc => {
                Category::Argument
            }
            Dec | Inc | Jmp | Jsr | Sta | Stx | Sty => Category::MemoryWrite,
            Asl | Lsr | Rol | Ror => Category::AccumulatorWrite,
        }
    }

    /// Canonical assembler spelling, for diagnostics and tracing.
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC", Bcs => "BCS",
            Beq => "BEQ", Bit => "BIT", Bmi => "BMI", Bne => "BNE", Bpl => "BPL",
            Brk => "BRK", Bvc => "BVC", Bvs => "BVS", Clc => "CLC", Cld => "CLD",
            Cli => "CLI", Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR", Inc => "INC",
            Inx => "INX", Iny => "INY", Jmp => "JMP", Jsr => "JSR", Lda => "LDA",
            Ldx => "LDX", Ldy => "LDY", Lsr => "LSR", Nop => "NOP", Ora => "ORA",
            Pha => "PHA", Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC", Sec => "SEC",
            Sed => "SED", Sei => "SEI", Sta => "STA", Stx => "STX", Sty => "STY",
            Tax => "TAX", Tay => "TAY", Tsx => "TSX", Txa => "TXA", Txs => "TXS",
            Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode-table entry for one documented opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,
    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,
    /// Base cycle cost. Page-crossing and branch-taken penalties are not
    /// modeled in this core.
    pub cycles: u8,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> Option<Opcode> {
    Some(Opcode {
        mnemonic,
        mode,
        cycles,
    })
}

/// Unofficial opcode: no decode entry.
const ILL: Option<Opcode> = None;

use AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, Indirect, IndirectX,
    IndirectY, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};
use Mnemonic::*;

/// Complete 256-entry decode table indexed by opcode byte.
///
/// The single source of truth for instruction decoding: 151 documented
/// opcodes carry their mnemonic, addressing mode, and base cycle count;
/// the remaining 105 unofficial opcodes are `None` and make `step`
/// emit a diagnostic instead of executing.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.cycles, 2);
///
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [Option<Opcode>; 256] = [
    // 0x00
    op(Brk, Implied, 7),    op(Ora, IndirectX, 6),  ILL,                    ILL,
    ILL,                    op(Ora, ZeroPage, 3),   op(Asl, ZeroPage, 5),   ILL,
    op(Php, Implied, 3),    op(Ora, Immediate, 2),  op(Asl, Accumulator, 2), ILL,
    ILL,                    op(Ora, Absolute, 4),   op(Asl, Absolute, 6),   ILL,
    // 0x10
    op(Bpl, Relative, 2),   op(Ora, IndirectY, 5),  ILL,                    ILL,
    ILL,                    op(Ora, ZeroPageX, 4),  op(Asl, ZeroPageX, 6),  ILL,
    op(Clc, Implied, 2),    op(Ora, AbsoluteY, 4),  ILL,                    ILL,
    ILL,                    op(Ora, AbsoluteX, 4),  op(Asl, AbsoluteX, 7),  ILL,
    // 0x20
    op(Jsr, Absolute, 6),   op(And, IndirectX, 6),  ILL,                    ILL,
    op(Bit, ZeroPage, 3),   op(And, ZeroPage, 3),   op(Rol, ZeroPage, 5),   ILL,
    op(Plp, Implied, 4),    op(And, Immediate, 2),  op(Rol, Accumulator, 2), ILL,
    op(Bit, Absolute, 4),   op(And, Absolute, 4),   op(Rol, Absolute, 6),   ILL,
    // 0x30
    op(Bmi, Relative, 2),   op(And, IndirectY, 5),  ILL,                    ILL,
    ILL,                    op(And, ZeroPageX, 4),  op(Rol, ZeroPageX, 6),  ILL,
    op(Sec, Implied, 2),    op(And, AbsoluteY, 4),  ILL,                    ILL,
    ILL,                    op(And, AbsoluteX, 4),  op(Rol, AbsoluteX, 7),  ILL,
    // 0x40
    op(Rti, Implied, 6),    op(Eor, IndirectX, 6),  ILL,                    ILL,
    ILL,                    op(Eor, ZeroPage, 3),   op(Lsr, ZeroPage, 5),   ILL,
    op(Pha, Implied, 3),    op(Eor, Immediate, 2),  op(Lsr, Accumulator, 2), ILL,
    op(Jmp, Absolute, 3),   op(Eor, Absolute, 4),   op(Lsr, Absolute, 6),   ILL,
    // 0x50
    op(Bvc, Relative, 2),   op(Eor, IndirectY, 5),  ILL,                    ILL,
    ILL,                    op(Eor, ZeroPageX, 4),  op(Lsr, ZeroPageX, 6),  ILL,
    op(Cli, Implied, 2),    op(Eor, AbsoluteY, 4),  ILL,                    ILL,
    ILL,                    op(Eor, AbsoluteX, 4),  op(Lsr, AbsoluteX, 7),  ILL,
    // 0x60
    op(Rts, Implied, 6),    op(Adc, IndirectX, 6),  ILL,                    ILL,
    ILL,                    op(Adc, ZeroPage, 3),   op(Ror, ZeroPage, 5),   ILL,
    op(Pla, Implied, 4),    op(Adc, Immediate, 2),  op(Ror, Accumulator, 2), ILL,
    op(Jmp, Indirect, 5),   op(Adc, Absolute, 4),   op(Ror, Absolute, 6),   ILL,
    // 0x70
    op(Bvs, Relative, 2),   op(Adc, IndirectY, 5),  ILL,                    ILL,
    ILL,                    op(Adc, ZeroPageX, 4),  op(Ror, ZeroPageX, 6),  ILL,
    op(Sei, Implied, 2),    op(Adc, AbsoluteY, 4),  ILL,                    ILL,
    ILL,                    op(Adc, AbsoluteX, 4),  op(Ror, AbsoluteX, 7),  ILL,
    // 0x80
    ILL,                    op(Sta, IndirectX, 6),  ILL,                    ILL,
    op(Sty, ZeroPage, 3),   op(Sta, ZeroPage, 3),   op(Stx, ZeroPage, 3),   ILL,
    op(Dey, Implied, 2),    ILL,                    op(Txa, Implied, 2),    ILL,
    op(Sty, Absolute, 4),   op(Sta, Absolute, 4),   op(Stx, Absolute, 4),   ILL,
    // 0x90
    op(Bcc, Relative, 2),   op(Sta, IndirectY, 6),  ILL,                    ILL,
    op(Sty, ZeroPageX, 4),  op(Sta, ZeroPageX, 4),  op(Stx, ZeroPageY, 4),  ILL,
    op(Tya, Implied, 2),    op(Sta, AbsoluteY, 5),  op(Txs, Implied, 2),    ILL,
    ILL,                    op(Sta, AbsoluteX, 5),  ILL,                    ILL,
    // 0xA0
    op(Ldy, Immediate, 2),  op(Lda, IndirectX, 6),  op(Ldx, Immediate, 2),  ILL,
    op(Ldy, ZeroPage, 3),   op(Lda, ZeroPage, 3),   op(Ldx, ZeroPage, 3),   ILL,
    op(Tay, Implied, 2),    op(Lda, Immediate, 2),  op(Tax, Implied, 2),    ILL,
    op(Ldy, Absolute, 4),   op(Lda, Absolute, 4),   op(Ldx, Absolute, 4),   ILL,
    // 0xB0
    op(Bcs, Relative, 2),   op(Lda, IndirectY, 5),  ILL,                    ILL,
    op(Ldy, ZeroPageX, 4),  op(Lda, ZeroPageX, 4),  op(Ldx, ZeroPageY, 4),  ILL,
    op(Clv, Implied, 2),    op(Lda, AbsoluteY, 4),  op(Tsx, Implied, 2),    ILL,
    op(Ldy, AbsoluteX, 4),  op(Lda, AbsoluteX, 4),  op(Ldx, AbsoluteY, 4),  ILL,
    // 0xC0
    op(Cpy, Immediate, 2),  op(Cmp, IndirectX, 6),  ILL,                    ILL,
    op(Cpy, ZeroPage, 3),   op(Cmp, ZeroPage, 3),   op(Dec, ZeroPage, 5),   ILL,
    op(Iny, Implied, 2),    op(Cmp, Immediate, 2),  op(Dex, Implied, 2),    ILL,
    op(Cpy, Absolute, 4),   op(Cmp, Absolute, 4),   op(Dec, Absolute, 6),   ILL,
    // 0xD0
    op(Bne, Relative, 2),   op(Cmp, IndirectY, 5),  ILL,                    ILL,
    ILL,                    op(Cmp, ZeroPageX, 4),  op(Dec, ZeroPageX, 6),  ILL,
    op(Cld, Implied, 2),    op(Cmp, AbsoluteY, 4),  ILL,                    ILL,
    ILL,                    op(Cmp, AbsoluteX, 4),  op(Dec, AbsoluteX, 7),  ILL,
    // 0xE0
    op(Cpx, Immediate, 2),  op(Sbc, IndirectX, 6),  ILL,                    ILL,
    op(Cpx, ZeroPage, 3),   op(Sbc, ZeroPage, 3),   op(Inc, ZeroPage, 5),   ILL,
    op(Inx, Implied, 2),    op(Sbc, Immediate, 2),  op(Nop, Implied, 2),    ILL,
    op(Cpx, Absolute, 4),   op(Sbc, Absolute, 4),   op(Inc, Absolute, 6),   ILL,
    // 0xF0
    op(Beq, Relative, 2),   op(Sbc, IndirectY, 5),  ILL,                    ILL,
    ILL,                    op(Sbc, ZeroPageX, 4),  op(Inc, ZeroPageX, 6),  ILL,
    op(Sed, Implied, 2),    op(Sbc, AbsoluteY, 4),  ILL,                    ILL,
    ILL,                    op(Sbc, AbsoluteX, 4),  op(Inc, AbsoluteX, 7),  ILL,
];

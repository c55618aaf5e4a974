//! # Addressing Modes
//!
//! The 13 ways a 6502 instruction locates its operand. The mode decides
//! how many bytes follow the opcode and how they combine with the index
//! registers into an effective address (or an immediate value).

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the opcode.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator.
    ///
    /// Examples: ASL A, LSR A, ROL A, ROR A
    Accumulator,

    /// 8-bit constant embedded in the instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address into the zero page ($0000-$00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero-page address plus X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero-page address plus Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit displacement for branches, applied to the address of
    /// the following instruction.
    ///
    /// Example: BNE loop
    Relative,

    /// Full little-endian 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address plus X (no wrap).
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address plus Y (no wrap).
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Jump through a 16-bit pointer. Only JMP uses this mode, and it
    /// inherits the NMOS page-boundary bug: a pointer at $xxFF fetches
    /// its high byte from $xx00 instead of crossing the page.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (operand + X) mod 256 names a zero-page pointer
    /// which is dereferenced.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the operand names a zero-page pointer; Y is
    /// added after the dereference.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode (0, 1, or 2).
    pub const fn operand_bytes(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// A resolved operand, produced by the CPU's addressing resolver after
/// the operand bytes have been consumed from the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// Implied mode: nothing to resolve.
    None,
    /// Accumulator mode: A is both source and destination.
    Accumulator,
    /// Immediate mode: the operand byte itself.
    Immediate(u8),
    /// Relative mode: signed branch displacement.
    Displacement(i8),
    /// Every memory mode: the effective 16-bit address.
    Address(u16),
}

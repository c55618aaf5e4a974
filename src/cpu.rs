//! # CPU State and Execution
//!
//! The [`Cpu`] struct holds the register file and drives the
//! fetch-decode-execute loop. One call to [`Cpu::step`] runs exactly one
//! instruction to completion and reports its base cycle cost; `reset`,
//! `irq`, and `nmi` are the three hardware signal entry points.
//!
//! The CPU borrows its [`Bus`] for its whole lifetime: the bus is a
//! collaborator supplied by the host, not a part of the CPU.
//!
//! ## Execution model
//!
//! - `step` is atomic from the caller's view; there is no partial
//!   instruction state between calls.
//! - Only base cycle counts are reported. Page-crossing and branch-taken
//!   penalties are not modeled.
//! - The D flag is tracked but ADC/SBC always operate in binary.
//! - Unofficial opcodes are diagnosed through the `log` facade, charged
//!   a nominal single cycle, and otherwise skipped.

use log::{trace, warn};

use crate::addressing::{AddressingMode, Operand};
use crate::bus::Bus;
use crate::instructions;
use crate::opcodes::{Category, OPCODE_TABLE};
use crate::status::Status;

/// NMI vector location ($FFFA/$FFFB, little-endian).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector location ($FFFC/$FFFD, little-endian).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector location ($FFFE/$FFFF, little-endian).
pub const IRQ_VECTOR: u16 = 0xFFFE;
/// Base of the hardware stack page ($0100-$01FF).
pub const STACK_PAGE: u16 = 0x0100;

/// 6502 CPU register file and execution context.
///
/// Generic over the bus implementation, which it borrows for its whole
/// lifetime. Construction performs a reset, so the program counter comes
/// up pointing at whatever the reset vector names.
///
/// # Examples
///
/// ```
/// use mos6502::{Cpu, FlatRam};
///
/// let mut ram = FlatRam::new();
/// ram.load(0xFFFC, &[0x00, 0x80]); // reset vector -> $8000
/// ram.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = Cpu::new(&mut ram);
/// assert_eq!(cpu.pc(), 0x8000);
///
/// let cycles = cpu.step();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x8002);
/// ```
pub struct Cpu<'b, B: Bus> {
    /// Accumulator.
    pub(crate) a: u8,
    /// X index register.
    pub(crate) x: u8,
    /// Y index register.
    pub(crate) y: u8,
    /// Stack pointer: low byte of an address in the $01xx page.
    pub(crate) s: u8,
    /// Program counter. Points at the next opcode whenever `step` returns.
    pub(crate) pc: u16,
    /// Status register.
    pub(crate) p: Status,
    /// Base cycles accumulated since the last reset. Observability only.
    pub(crate) cycles: u64,
    /// The host-supplied bus.
    pub(crate) bus: &'b mut B,
}

impl<'b, B: Bus> Cpu<'b, B> {
    /// Binds a CPU to `bus` and resets it.
    pub fn new(bus: &'b mut B) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0xFF,
            pc: 0,
            p: Status::UNUSED,
            cycles: 0,
            bus,
        };
        cpu.reset();
        cpu
    }

    /// Hardware reset.
    ///
    /// Clears A, X, and Y, parks the stack pointer at $FF, restores the
    /// status register to its power-on value (only bit 5 set), and loads
    /// PC from the reset vector at $FFFC/$FFFD. The cycle counter starts
    /// over.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.s = 0xFF;
        self.p = Status::UNUSED;
        self.pc = self.read_word(RESET_VECTOR);
        self.cycles = 0;
        trace!("reset: pc={:04X}", self.pc);
    }

    /// Maskable interrupt request.
    ///
    /// Ignored while the I flag is set. Otherwise pushes PC (high byte
    /// first), clears B, sets I, pushes the status register, and jumps
    /// through the IRQ vector at $FFFE/$FFFF.
    pub fn irq(&mut self) {
        if self.p.contains(Status::IRQ_DISABLE) {
            return;
        }
        trace!("irq: from pc={:04X}", self.pc);
        self.push_word(self.pc);
        self.p.remove(Status::BREAK);
        self.p.insert(Status::IRQ_DISABLE);
        self.push(self.p.pushed());
        self.pc = self.read_word(IRQ_VECTOR);
    }

    /// Non-maskable interrupt.
    ///
    /// Same entry sequence as [`Cpu::irq`] but unconditional, and jumps
    /// through the NMI vector at $FFFA/$FFFB.
    pub fn nmi(&mut self) {
        trace!("nmi: from pc={:04X}", self.pc);
        self.push_word(self.pc);
        self.p.remove(Status::BREAK);
        self.p.insert(Status::IRQ_DISABLE);
        self.push(self.p.pushed());
        self.pc = self.read_word(NMI_VECTOR);
    }

    /// Executes one instruction and returns its base cycle count.
    ///
    /// Fetches the opcode at PC, resolves the operand bytes per the
    /// addressing mode (each fetch advancing PC), and routes to the
    /// kernel for the mnemonic's category. Legal opcodes cost 2-7
    /// cycles.
    ///
    /// An unofficial opcode is not executed: `step` logs a warning,
    /// charges one nominal cycle, and leaves all state untouched except
    /// the one-byte PC advance from the opcode fetch.
    pub fn step(&mut self) -> u8 {
        let at = self.pc;
        let opcode = self.fetch_byte();

        let Some(decoded) = OPCODE_TABLE[opcode as usize] else {
            warn!("unofficial opcode ${:02X} at ${:04X}, skipping", opcode, at);
            self.cycles += 1;
            return 1;
        };

        let operand = self.resolve(decoded.mode);
        match decoded.mnemonic.category() {
            Category::Command => instructions::command::execute(self, decoded.mnemonic),
            Category::Branch => {
                let Operand::Displacement(displacement) = operand else {
                    unreachable!("{} decoded without a relative operand", decoded.mnemonic);
                };
                instructions::branch::execute(self, decoded.mnemonic, displacement);
            }
            Category::Argument => {
                let value = match operand {
                    Operand::Immediate(value) => value,
                    Operand::Address(addr) => self.bus.read(addr),
                    _ => unreachable!("{} decoded without a value operand", decoded.mnemonic),
                };
                instructions::argument::execute(self, decoded.mnemonic, value);
            }
            Category::MemoryWrite => {
                let Operand::Address(addr) = operand else {
                    unreachable!("{} decoded without an address operand", decoded.mnemonic);
                };
                instructions::memory_write::execute(self, decoded.mnemonic, addr);
            }
            Category::AccumulatorWrite => {
                instructions::shift::execute(self, decoded.mnemonic, operand);
            }
        }

        self.cycles += decoded.cycles as u64;
        decoded.cycles
    }

    // ========== Addressing ==========

    /// Consumes the operand bytes for `mode` from the instruction
    /// stream, advancing PC, and computes the effective operand.
    fn resolve(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            AddressingMode::Relative => Operand::Displacement(self.fetch_byte() as i8),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                Operand::Address(self.fetch_byte().wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                Operand::Address(self.fetch_byte().wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                Operand::Address(self.fetch_word().wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                Operand::Address(self.fetch_word().wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                Operand::Address(self.read_word_bugged(ptr))
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.x);
                Operand::Address(self.read_word_zero_page(zp))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                Operand::Address(self.read_word_zero_page(zp).wrapping_add(self.y as u16))
            }
        }
    }

    /// Reads the byte at PC and advances PC by one.
    fn fetch_byte(&mut self) -> u8 {
        let byte = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Reads a little-endian word from the instruction stream.
    fn fetch_word(&mut self) -> u16 {
        let low = self.fetch_byte() as u16;
        let high = self.fetch_byte() as u16;
        (high << 8) | low
    }

    /// Little-endian word read at an arbitrary address (vectors).
    fn read_word(&mut self, addr: u16) -> u16 {
        let low = self.bus.read(addr) as u16;
        let high = self.bus.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Little-endian word read that wraps within the zero page.
    fn read_word_zero_page(&mut self, zp: u8) -> u16 {
        let low = self.bus.read(zp as u16) as u16;
        let high = self.bus.read(zp.wrapping_add(1) as u16) as u16;
        (high << 8) | low
    }

    /// Little-endian word read reproducing the NMOS indirect-jump bug:
    /// a pointer at $xxFF takes its high byte from $xx00.
    fn read_word_bugged(&mut self, ptr: u16) -> u16 {
        let low = self.bus.read(ptr) as u16;
        let high_addr = if ptr & 0x00FF == 0x00FF {
            ptr & 0xFF00
        } else {
            ptr.wrapping_add(1)
        };
        let high = self.bus.read(high_addr) as u16;
        (high << 8) | low
    }

    // ========== Stack ==========

    /// Pushes a byte: write at $0100+S, then decrement S.
    pub(crate) fn push(&mut self, value: u8) {
        self.bus.write(STACK_PAGE | self.s as u16, value);
        self.s = self.s.wrapping_sub(1);
    }

    /// Pops a byte: increment S, then read from $0100+S.
    pub(crate) fn pop(&mut self) -> u8 {
        self.s = self.s.wrapping_add(1);
        self.bus.read(STACK_PAGE | self.s as u16)
    }

    /// Pushes a word, high byte first, so the low byte sits at the lower
    /// address.
    pub(crate) fn push_word(&mut self, word: u16) {
        self.push((word >> 8) as u8);
        self.push((word & 0xFF) as u8);
    }

    /// Pops a word: low byte first, then high.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let low = self.pop() as u16;
        let high = self.pop() as u16;
        (high << 8) | low
    }

    /// Little-endian word read for instruction kernels (BRK's vector).
    pub(crate) fn read_vector(&mut self, addr: u16) -> u16 {
        self.read_word(addr)
    }

    // ========== Register accessors ==========

    /// Accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Stack pointer. The full stack address is $0100+SP.
    pub fn sp(&self) -> u8 {
        self.s
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Status register as typed flags.
    pub fn p(&self) -> Status {
        self.p
    }

    /// Status register packed as a byte, bit 5 reading as 1.
    pub fn status(&self) -> u8 {
        self.p.pushed()
    }

    /// Base cycles accumulated since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Shared access to the bus.
    pub fn bus(&self) -> &B {
        &*self.bus
    }

    /// Mutable access to the bus, e.g. for seeding memory mid-test.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut *self.bus
    }

    // ========== Register setters (debugging and tests) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.s = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the status register wholesale.
    pub fn set_p(&mut self, value: Status) {
        self.p = value;
    }

    /// Sets or clears the carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set(Status::CARRY, value);
    }

    /// Sets or clears the zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set(Status::ZERO, value);
    }

    /// Sets or clears the interrupt-disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set(Status::IRQ_DISABLE, value);
    }

    /// Sets or clears the decimal flag. ADC/SBC stay binary either way.
    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set(Status::DECIMAL, value);
    }

    /// Sets or clears the overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set(Status::OVERFLOW, value);
    }

    /// Sets or clears the negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set(Status::NEGATIVE, value);
    }

    // ========== Flag accessors ==========

    /// Carry flag.
    pub fn flag_c(&self) -> bool {
        self.p.contains(Status::CARRY)
    }

    /// Zero flag.
    pub fn flag_z(&self) -> bool {
        self.p.contains(Status::ZERO)
    }

    /// Interrupt-disable flag.
    pub fn flag_i(&self) -> bool {
        self.p.contains(Status::IRQ_DISABLE)
    }

    /// Decimal flag.
    pub fn flag_d(&self) -> bool {
        self.p.contains(Status::DECIMAL)
    }

    /// Break flag.
    pub fn flag_b(&self) -> bool {
        self.p.contains(Status::BREAK)
    }

    /// Overflow flag.
    pub fn flag_v(&self) -> bool {
        self.p.contains(Status::OVERFLOW)
    }

    /// Negative flag.
    pub fn flag_n(&self) -> bool {
        self.p.contains(Status::NEGATIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::FlatRam;

    #[test]
    fn new_binds_and_resets() {
        let mut ram = FlatRam::new();
        ram.load(0xFFFC, &[0x00, 0x80]);

        let cpu = Cpu::new(&mut ram);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status(), 0b0010_0000);
        assert_eq!(cpu.cycles(), 0);
    }

    #[test]
    fn stack_push_pop_discipline() {
        let mut ram = FlatRam::new();
        let mut cpu = Cpu::new(&mut ram);

        cpu.push(0x42);
        assert_eq!(cpu.sp(), 0xFE);
        assert_eq!(cpu.bus().read(0x01FF), 0x42);
        assert_eq!(cpu.pop(), 0x42);
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    fn word_push_leaves_low_byte_at_lower_address() {
        let mut ram = FlatRam::new();
        let mut cpu = Cpu::new(&mut ram);

        cpu.push_word(0x1234);
        assert_eq!(cpu.bus().read(0x01FF), 0x12); // high
        assert_eq!(cpu.bus().read(0x01FE), 0x34); // low
        assert_eq!(cpu.pop_word(), 0x1234);
    }

    #[test]
    fn stack_pointer_wraps_without_check() {
        let mut ram = FlatRam::new();
        let mut cpu = Cpu::new(&mut ram);

        cpu.set_sp(0x00);
        cpu.push(0x99);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.bus().read(0x0100), 0x99);
        assert_eq!(cpu.pop(), 0x99);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn unofficial_opcode_advances_pc_by_one() {
        let mut ram = FlatRam::new();
        ram.load(0xFFFC, &[0x00, 0x80]);
        ram.load(0x8000, &[0x02]); // unofficial

        let mut cpu = Cpu::new(&mut ram);
        let cycles = cpu.step();
        assert_eq!(cycles, 1);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.cycles(), 1);
    }

    #[test]
    fn zero_page_indexed_wraps_within_page() {
        let mut ram = FlatRam::new();
        ram.load(0xFFFC, &[0x00, 0x80]);
        ram.load(0x8000, &[0xB5, 0xF0]); // LDA $F0,X
        ram.load(0x0010, &[0x77]); // $F0 + $20 wraps to $10

        let mut cpu = Cpu::new(&mut ram);
        cpu.set_x(0x20);
        cpu.step();
        assert_eq!(cpu.a(), 0x77);
    }

    #[test]
    fn indirect_pointer_high_byte_wraps_within_page() {
        let mut ram = FlatRam::new();
        ram.load(0xFFFC, &[0x00, 0x80]);
        ram.load(0x8000, &[0x6C, 0xFF, 0x10]); // JMP ($10FF)
        ram.load(0x10FF, &[0x34]);
        ram.load(0x1000, &[0x12]);
        ram.load(0x1100, &[0x56]); // must NOT be used

        let mut cpu = Cpu::new(&mut ram);
        cpu.step();
        assert_eq!(cpu.pc(), 0x1234);
    }

    #[test]
    fn indirect_x_pointer_wraps_in_zero_page() {
        let mut ram = FlatRam::new();
        ram.load(0xFFFC, &[0x00, 0x80]);
        ram.load(0x8000, &[0xA1, 0xFE]); // LDA ($FE,X) with X=1 -> pointer at $FF/$00
        ram.load(0x00FF, &[0x00]);
        ram.load(0x0000, &[0x40]); // high byte from $00, not $100
        ram.load(0x4000, &[0x55]);

        let mut cpu = Cpu::new(&mut ram);
        cpu.set_x(0x01);
        cpu.step();
        assert_eq!(cpu.a(), 0x55);
    }
}

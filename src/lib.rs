//! # mos6502
//!
//! An instruction-set interpreter for the NMOS 6502: the fetch/decode/
//! execute engine, the register and flag model, the 13 addressing-mode
//! resolvers, and the reset/IRQ/NMI entry points, wired to a host-
//! supplied memory bus.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{Cpu, FlatRam};
//!
//! // 64KB of flat memory, reset vector pointing at $8000.
//! let mut ram = FlatRam::new();
//! ram.load(0xFFFC, &[0x00, 0x80]);
//!
//! // LDA #$01 / ADC #$02
//! ram.load(0x8000, &[0xA9, 0x01, 0x69, 0x02]);
//!
//! let mut cpu = Cpu::new(&mut ram);
//! cpu.step();
//! cpu.step();
//! assert_eq!(cpu.a(), 0x03);
//! assert_eq!(cpu.pc(), 0x8004);
//! ```
//!
//! ## Architecture
//!
//! - **Bus as a capability**: the CPU borrows a [`Bus`] (`read`/`write`
//!   over a 16-bit address space) and owns nothing else. [`FlatRam`]
//!   serves simple programs; [`MappedBus`] composes [`Device`]s into a
//!   realistic memory map.
//! - **Table-driven decode**: [`OPCODE_TABLE`] maps all 256 opcode bytes
//!   to mnemonic, addressing mode, and base cycles; the 105 unofficial
//!   opcodes decode to nothing and are skipped with a diagnostic.
//! - **Category kernels**: each mnemonic belongs to one of five
//!   [`Category`] kernels, which is all the dispatch loop needs to know
//!   to route a resolved operand.
//! - **Host-driven signals**: [`Cpu::reset`], [`Cpu::irq`], and
//!   [`Cpu::nmi`] are plain method calls; pacing and interrupt polling
//!   live in the host loop.
//!
//! ## Fidelity notes
//!
//! Base cycle counts only (no page-crossing or branch-taken penalties),
//! binary ADC/SBC regardless of the D flag, and no undocumented-opcode
//! behaviors. The JMP-indirect page-boundary bug *is* reproduced, as are
//! the zero-page wraps of the indexed and indirect modes.

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod opcodes;
pub mod status;

mod instructions;

pub use addressing::AddressingMode;
pub use bus::{Bus, FlatRam};
pub use cpu::{Cpu, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_PAGE};
pub use devices::{Device, InterruptSource, MapError, MappedBus, RamDevice, RomDevice};
pub use opcodes::{Category, Mnemonic, Opcode, OPCODE_TABLE};
pub use status::Status;

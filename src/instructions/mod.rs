//! # Instruction Kernels
//!
//! One module per dispatch category. The dispatch loop resolves the
//! operand first, so each kernel has a single, fixed operand contract:
//!
//! - **command**: implied-mode operations; no operand at all
//! - **branch**: the eight conditional branches; a signed displacement
//! - **argument**: value consumers (loads, ALU, compares); a byte
//! - **memory_write**: address consumers (jumps, stores, INC/DEC)
//! - **shift**: read-modify-write shifts/rotates on A or a memory byte
//!
//! Kernels mutate CPU registers and flags directly and never touch the
//! program counter except where the instruction semantics say so (jumps,
//! branches, returns).

pub(crate) mod argument;
pub(crate) mod branch;
pub(crate) mod command;
pub(crate) mod memory_write;
pub(crate) mod shift;

//! Tests for CMP, CPX, and CPY: carry means "register >= operand", Z/N
//! come from the truncated difference, and no register changes.

use mos6502::{Cpu, FlatRam};

fn boot(program: &[u8]) -> FlatRam {
    let mut ram = FlatRam::new();
    ram.load(0xFFFC, &[0x00, 0x80]);
    ram.load(0x8000, program);
    ram
}

#[test]
fn cmp_equal_sets_carry_and_zero() {
    let mut ram = boot(&[0xC9, 0x42]); // CMP #$42
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_a(0x42);

    cpu.step();

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42); // untouched
}

#[test]
fn cmp_greater_sets_carry_only() {
    let mut ram = boot(&[0xC9, 0x10]); // CMP #$10
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_a(0x50);

    cpu.step();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn cmp_less_clears_carry_and_sets_n_from_difference() {
    let mut ram = boot(&[0xC9, 0x50]); // CMP #$50
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_a(0x10);

    cpu.step();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n()); // 0x10 - 0x50 = 0xC0
}

#[test]
fn cmp_zero_page() {
    let mut ram = boot(&[0xC5, 0x10]); // CMP $10
    ram.load(0x0010, &[0x30]);
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_a(0x40);

    let cycles = cpu.step();

    assert!(cpu.flag_c());
    assert_eq!(cycles, 3);
}

#[test]
fn cpx_compares_x() {
    let mut ram = boot(&[0xE0, 0x05]); // CPX #$05
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_x(0x05);

    cpu.step();

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.x(), 0x05);
}

#[test]
fn cpy_compares_y() {
    let mut ram = boot(&[0xC0, 0x80]); // CPY #$80
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_y(0x7F);

    cpu.step();

    assert!(!cpu.flag_c());
    assert!(cpu.flag_n()); // 0x7F - 0x80 = 0xFF
    assert_eq!(cpu.y(), 0x7F);
}

//! Tests for PHA/PLA/PHP/PLP and stack-pointer discipline.

use mos6502::{Bus, Cpu, FlatRam, Status};

fn boot(program: &[u8]) -> FlatRam {
    let mut ram = FlatRam::new();
    ram.load(0xFFFC, &[0x00, 0x80]);
    ram.load(0x8000, program);
    ram
}

#[test]
fn pha_writes_then_decrements() {
    let mut ram = boot(&[0x48]); // PHA
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_a(0x42);

    let cycles = cpu.step();

    assert_eq!(cpu.bus().read(0x01FF), 0x42);
    assert_eq!(cpu.sp(), 0xFE);
    assert_eq!(cycles, 3);
}

#[test]
fn pha_pla_round_trip() {
    let mut ram = boot(&[0x48, 0xA9, 0x00, 0x68]); // PHA / LDA #$00 / PLA
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_a(0x80);

    cpu.step(); // PHA
    cpu.step(); // LDA #$00 clobbers A and sets Z
    assert!(cpu.flag_z());

    let cycles = cpu.step(); // PLA
    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_n()); // PLA re-evaluates N/Z from the pulled value
    assert!(!cpu.flag_z());
    assert_eq!(cycles, 4);
}

#[test]
fn pla_zero_sets_z() {
    let mut ram = boot(&[0x68]); // PLA with a zero already on the stack
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_sp(0xFE); // stack top at $01FF holds 0x00

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn php_pushes_with_bit5_high() {
    let mut ram = boot(&[0x08]); // PHP
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_flag_c(true);
    cpu.set_flag_z(true);

    cpu.step();

    assert_eq!(cpu.bus().read(0x01FF), 0b0010_0011);
    assert_eq!(cpu.sp(), 0xFE);
}

#[test]
fn plp_restores_pushed_flags() {
    let mut ram = boot(&[0x08, 0x18, 0x28]); // PHP / CLC / PLP
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);

    cpu.step(); // PHP
    cpu.step(); // CLC
    assert!(!cpu.flag_c());

    let cycles = cpu.step(); // PLP
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cycles, 4);
}

#[test]
fn plp_forces_bit5() {
    let mut ram = boot(&[0x28]); // PLP pulling 0x00
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_sp(0xFE);

    cpu.step();

    assert_eq!(cpu.p(), Status::UNUSED);
}

#[test]
fn stack_wraps_at_bottom() {
    let mut ram = boot(&[0x48, 0x68]); // PHA / PLA
    let mut cpu = Cpu::new(&mut ram);
    cpu.set_sp(0x00);
    cpu.set_a(0x5A);

    cpu.step(); // push at $0100, S wraps to $FF
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.bus().read(0x0100), 0x5A);

    cpu.set_a(0x00);
    cpu.step(); // pop wraps back
    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.sp(), 0x00);
}

//! Tests for the bus implementations: FlatRam and the device-backed
//! MappedBus.

use mos6502::{Bus, Cpu, MappedBus, RamDevice, RomDevice};

#[test]
fn flat_ram_covers_whole_address_space() {
    let mut ram = mos6502::FlatRam::new();
    ram.write(0x0000, 0x01);
    ram.write(0x8000, 0x80);
    ram.write(0xFFFF, 0xFF);

    assert_eq!(ram.read(0x0000), 0x01);
    assert_eq!(ram.read(0x8000), 0x80);
    assert_eq!(ram.read(0xFFFF), 0xFF);
}

#[test]
fn mapped_bus_routes_by_base_address() {
    let mut bus = MappedBus::new();
    bus.map(0x0000, Box::new(RamDevice::new(0x100))).unwrap();
    bus.map(0x1000, Box::new(RamDevice::new(0x100))).unwrap();

    bus.write(0x0042, 0xAA);
    bus.write(0x1042, 0xBB);

    assert_eq!(bus.read(0x0042), 0xAA);
    assert_eq!(bus.read(0x1042), 0xBB);
}

#[test]
fn unmapped_reads_float_and_writes_vanish() {
    let mut bus = MappedBus::new();
    bus.map(0x0000, Box::new(RamDevice::new(0x100))).unwrap();

    assert_eq!(bus.read(0x5000), 0xFF);
    bus.write(0x5000, 0x42); // no device: dropped
    assert_eq!(bus.read(0x5000), 0xFF);
}

#[test]
fn overlap_is_rejected_and_bus_unchanged() {
    let mut bus = MappedBus::new();
    bus.map(0x1000, Box::new(RamDevice::new(0x1000))).unwrap();

    assert!(bus.map(0x1800, Box::new(RamDevice::new(0x1000))).is_err());
    assert!(bus.map(0x0800, Box::new(RamDevice::new(0x1000))).is_err());
    assert!(bus.map(0x1400, Box::new(RamDevice::new(0x0100))).is_err());

    // The original mapping still answers.
    bus.write(0x1234, 0x77);
    assert_eq!(bus.read(0x1234), 0x77);
}

#[test]
fn device_flush_against_top_of_memory() {
    let mut bus = MappedBus::new();
    bus.map(0xE000, Box::new(RamDevice::new(0x2000))).unwrap();

    bus.write(0xFFFE, 0xAD);
    bus.write(0xFFFF, 0xDE);
    assert_eq!(bus.read(0xFFFE), 0xAD);
    assert_eq!(bus.read(0xFFFF), 0xDE);

    // Anything overlapping the top region is rejected.
    assert!(bus.map(0xF000, Box::new(RamDevice::new(0x100))).is_err());
}

#[test]
fn rom_serves_image_and_ignores_writes() {
    let mut bus = MappedBus::new();
    let image = vec![0xEA; 0x100];
    bus.map(0xC000, Box::new(RomDevice::new(image))).unwrap();

    assert_eq!(bus.read(0xC000), 0xEA);
    bus.write(0xC000, 0x00);
    assert_eq!(bus.read(0xC000), 0xEA);
}

#[test]
fn device_downcast_reaches_concrete_type() {
    let mut bus = MappedBus::new();
    bus.map(0x2000, Box::new(RamDevice::new(0x100))).unwrap();

    bus.device_at_mut::<RamDevice>(0x2000)
        .unwrap()
        .load(0x10, &[0x01, 0x02]);

    assert_eq!(bus.read(0x2010), 0x01);
    assert_eq!(bus.read(0x2011), 0x02);

    // Wrong type or unmapped address both come back empty.
    assert!(bus.device_at::<RomDevice>(0x2000).is_none());
    assert!(bus.device_at::<RamDevice>(0x9000).is_none());
}

#[test]
fn cpu_runs_from_a_rom_ram_map() {
    let mut bus = MappedBus::new();
    bus.map(0x0000, Box::new(RamDevice::new(0x4000))).unwrap();

    // ROM occupies $C000-$FFFF; vectors live in its last page.
    let mut image = vec![0x00; 0x4000];
    image[0x0000] = 0xA9; // LDA #$42
    image[0x0001] = 0x42;
    image[0x0002] = 0x8D; // STA $0010
    image[0x0003] = 0x10;
    image[0x0004] = 0x00;
    image[0x3FFC] = 0x00; // reset vector -> $C000
    image[0x3FFD] = 0xC0;
    bus.map(0xC000, Box::new(RomDevice::new(image))).unwrap();

    let mut cpu = Cpu::new(&mut bus);
    assert_eq!(cpu.pc(), 0xC000);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.bus().read(0x0010), 0x42);
    assert_eq!(cpu.pc(), 0xC005);
}

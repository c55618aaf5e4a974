//! # Memory-Mapped Devices
//!
//! A composed alternative to [`crate::FlatRam`]: hardware components
//! implement the offset-based [`Device`] trait and register themselves
//! with a [`MappedBus`] at a base address. The bus routes CPU accesses
//! to whichever device claims the address, returns a floating-bus value
//! for unmapped reads, and drops unmapped writes.
//!
//! Interrupt-capable devices additionally implement
//! [`InterruptSource`]; [`MappedBus::irq_pending`] ORs their lines
//! together so a host loop can decide when to call [`crate::Cpu::irq`].

use std::any::Any;
use std::fmt;
use std::ops::RangeInclusive;

use crate::bus::Bus;

pub mod interrupts;
pub mod ram;
pub mod rom;

pub use interrupts::InterruptSource;
pub use ram::RamDevice;
pub use rom::RomDevice;

/// A memory-mapped hardware component.
///
/// Devices see offsets relative to their own base address (0 to
/// `size() - 1`), so the same device can be mapped anywhere. Reads and
/// writes must not panic; a read-only device simply ignores writes.
///
/// # Examples
///
/// ```
/// use mos6502::Device;
/// use std::any::Any;
///
/// struct Latch {
///     value: u8,
/// }
///
/// impl Device for Latch {
///     fn read(&self, _offset: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.value = value;
///     }
///
///     fn size(&self) -> u16 {
///         1
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn as_any_mut(&mut self) -> &mut dyn Any {
///         self
///     }
/// }
/// ```
pub trait Device {
    /// Reads the byte at `offset` within the device.
    fn read(&self, offset: u16) -> u8;

    /// Writes `value` at `offset` within the device.
    fn write(&mut self, offset: u16, value: u8);

    /// The number of bytes of address space the device occupies.
    fn size(&self) -> u16;

    /// Downcast support, so hosts can reach device-specific methods
    /// after registration.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The device's interrupt line, if it has one.
    ///
    /// Plain memory devices keep the default `None`; interrupt-capable
    /// devices override this to expose their [`InterruptSource`].
    fn as_interrupt_source(&self) -> Option<&dyn InterruptSource> {
        None
    }
}

/// Inclusive address range occupied by a mapped device.
///
/// Ranges that would run past $FFFF are clamped to it, so a device can
/// sit flush against the top of the address space.
#[derive(Debug, Clone)]
struct AddressRange(RangeInclusive<u16>);

impl AddressRange {
    fn new(base: u16, size: u16) -> Self {
        let (end_plus_one, overflowed) = base.overflowing_add(size);
        let end = if overflowed {
            0xFFFF
        } else {
            end_plus_one.wrapping_sub(1)
        };
        Self(base..=end)
    }

    #[inline]
    fn contains(&self, addr: u16) -> bool {
        self.0.contains(&addr)
    }

    fn overlaps(&self, other: &AddressRange) -> bool {
        self.0.start() <= other.0.end() && self.0.end() >= other.0.start()
    }
}

/// Error returned when a device registration would overlap an existing
/// mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapError {
    /// Base address of the rejected device.
    pub new_base: u16,
    /// Size of the rejected device.
    pub new_size: u16,
    /// Base address of the mapping it collided with.
    pub existing_base: u16,
    /// Size of the mapping it collided with.
    pub existing_size: u16,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "device at ${:04X}-${:04X} overlaps existing device at ${:04X}-${:04X}",
            self.new_base,
            self.new_base
                .saturating_add(self.new_size)
                .saturating_sub(1),
            self.existing_base,
            self.existing_base
                .saturating_add(self.existing_size)
                .saturating_sub(1),
        )
    }
}

impl std::error::Error for MapError {}

struct Mapping {
    base: u16,
    device: Box<dyn Device>,
}

impl Mapping {
    fn range(&self) -> AddressRange {
        AddressRange::new(self.base, self.device.size())
    }
}

/// Bus implementation that routes accesses to registered devices.
///
/// Unmapped reads return the floating-bus value (0xFF unless changed
/// with [`MappedBus::set_unmapped_value`]); unmapped writes are ignored.
///
/// # Examples
///
/// ```
/// use mos6502::{Bus, MappedBus, RamDevice, RomDevice};
///
/// let mut bus = MappedBus::new();
/// bus.map(0x0000, Box::new(RamDevice::new(0x4000))).unwrap();
/// bus.map(0xC000, Box::new(RomDevice::new(vec![0xEA; 0x4000]))).unwrap();
///
/// bus.write(0x1234, 0x42);
/// assert_eq!(bus.read(0x1234), 0x42);
/// assert_eq!(bus.read(0xC000), 0xEA);
/// assert_eq!(bus.read(0x8000), 0xFF); // unmapped
/// ```
pub struct MappedBus {
    mappings: Vec<Mapping>,
    unmapped_value: u8,
}

impl MappedBus {
    /// Creates an empty bus. Unmapped reads return 0xFF.
    pub fn new() -> Self {
        Self {
            mappings: Vec::new(),
            unmapped_value: 0xFF,
        }
    }

    /// Changes the value returned for unmapped reads.
    pub fn set_unmapped_value(&mut self, value: u8) {
        self.unmapped_value = value;
    }

    /// Registers `device` at `base`, claiming `base..base+size`.
    ///
    /// Fails with [`MapError`] if the range overlaps any existing
    /// mapping; the bus is unchanged on failure.
    pub fn map(&mut self, base: u16, device: Box<dyn Device>) -> Result<(), MapError> {
        let new_range = AddressRange::new(base, device.size());

        for mapping in &self.mappings {
            if new_range.overlaps(&mapping.range()) {
                return Err(MapError {
                    new_base: base,
                    new_size: device.size(),
                    existing_base: mapping.base,
                    existing_size: mapping.device.size(),
                });
            }
        }

        self.mappings.push(Mapping { base, device });
        Ok(())
    }

    fn find(&self, addr: u16) -> Option<(&dyn Device, u16)> {
        self.mappings
            .iter()
            .find(|mapping| mapping.range().contains(addr))
            .map(|mapping| (mapping.device.as_ref(), addr - mapping.base))
    }

    fn find_mut(&mut self, addr: u16) -> Option<(&mut (dyn Device + '_), u16)> {
        self.mappings
            .iter_mut()
            .find(|mapping| mapping.range().contains(addr))
            .map(move |mapping| (&mut *mapping.device as &mut dyn Device, addr - mapping.base))
    }

    /// The device mapped at `addr`, downcast to its concrete type.
    pub fn device_at<T: Device + 'static>(&self, addr: u16) -> Option<&T> {
        self.find(addr)
            .and_then(|(device, _)| device.as_any().downcast_ref::<T>())
    }

    /// Mutable variant of [`MappedBus::device_at`].
    pub fn device_at_mut<T: Device + 'static>(&mut self, addr: u16) -> Option<&mut T> {
        self.find_mut(addr)
            .and_then(|(device, _)| device.as_any_mut().downcast_mut::<T>())
    }

    /// Whether any mapped device is asserting its interrupt line.
    ///
    /// The 6502 IRQ line is level-sensitive and shared: this is the
    /// wired-OR of every device's line, and it stays high until every
    /// source has been acknowledged. Hosts poll it between steps and
    /// call [`crate::Cpu::irq`] while it reads true.
    pub fn irq_pending(&self) -> bool {
        self.mappings
            .iter()
            .filter_map(|mapping| mapping.device.as_interrupt_source())
            .any(|source| source.interrupt_pending())
    }
}

impl Default for MappedBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for MappedBus {
    fn read(&self, addr: u16) -> u8 {
        match self.find(addr) {
            Some((device, offset)) => device.read(offset),
            None => self.unmapped_value,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some((device, offset)) = self.find_mut(addr) {
            device.write(offset, value);
        }
    }
}

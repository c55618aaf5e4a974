//! Interrupt line plumbing for memory-mapped devices.
//!
//! The 6502's IRQ input is a single shared, level-sensitive line: it is
//! active while *any* device holds its interrupt pending, and only goes
//! quiet once every device has been acknowledged through its own
//! registers. [`InterruptSource`] is the per-device end of that wire;
//! [`super::MappedBus::irq_pending`] is the wired-OR a host polls.

/// The interrupt line of a single device.
///
/// A device asserting its line keeps `interrupt_pending` true until the
/// running program acknowledges it device-specifically (typically by
/// reading a status register or writing a control register).
///
/// # Examples
///
/// ```
/// use mos6502::InterruptSource;
///
/// struct Timer {
///     expired: bool,
/// }
///
/// impl InterruptSource for Timer {
///     fn interrupt_pending(&self) -> bool {
///         self.expired
///     }
/// }
/// ```
pub trait InterruptSource {
    /// Whether this device is currently asserting its interrupt line.
    fn interrupt_pending(&self) -> bool;
}

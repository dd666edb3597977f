//! CPU interrupt inputs as seen from a peripheral chip.

/// The CPU's interrupt inputs.
///
/// A chip is handed one of these by whoever drives it; it never owns the
/// CPU. Each call asserts the line once.
pub trait InterruptLines {
    /// Assert the maskable interrupt input.
    fn irq(&mut self);

    /// Assert the non-maskable interrupt input.
    fn nmi(&mut self);
}

/// Interrupt lines that just count assertions.
///
/// Useful when running a chip without a CPU attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineLatch {
    /// Number of IRQ assertions seen.
    pub irqs: u32,
    /// Number of NMI assertions seen.
    pub nmis: u32,
}

impl LineLatch {
    #[must_use]
    pub const fn new() -> Self {
        Self { irqs: 0, nmis: 0 }
    }

    /// Forget everything seen so far.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl InterruptLines for LineLatch {
    fn irq(&mut self) {
        self.irqs += 1;
    }

    fn nmi(&mut self) {
        self.nmis += 1;
    }
}

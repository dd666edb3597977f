//! Register-block interface between the bus decoder and a chip.

/// A memory-mapped chip as seen by the bus decoder.
///
/// The decoder works out which chip an address belongs to and passes the
/// low address byte through. How the chip folds that byte onto its own
/// registers (mirroring) is the chip's business.
pub trait Peripheral {
    /// Read a register. Reads may have side effects on the chip.
    fn peek(&mut self, address: u8) -> u8;

    /// Write a register.
    fn poke(&mut self, address: u8, value: u8);
}

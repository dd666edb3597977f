//! Power-on register values.

/// Configuration for constructing a [`Cia1`](crate::Cia1).
///
/// `init()` puts these values back into the port registers; everything
/// else powers on as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CiaConfig {
    /// Port A data.
    pub port_a: u8,
    /// Port B data.
    pub port_b: u8,
    /// Port A direction. Column select lines, so all outputs.
    pub ddr_a: u8,
    /// Port B direction. Row sense lines, so all inputs.
    pub ddr_b: u8,
}

impl Default for CiaConfig {
    fn default() -> Self {
        Self {
            port_a: 0x00,
            port_b: 0xFF,
            ddr_a: 0xFF,
            ddr_b: 0x00,
        }
    }
}

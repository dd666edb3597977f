//! Interrupt control register.
//!
//! Writes to $xD update the enable mask; reads return the status
//! snapshot. Both use the same bit layout:
//!
//! | Bit | Source                                   |
//! |-----|------------------------------------------|
//! | 0   | Timer A underflow                        |
//! | 1   | Timer B underflow                        |
//! | 2   | TOD alarm                                |
//! | 3   | Serial register full/empty               |
//! | 4   | FLAG pin                                 |
//! | 7   | write: set/clear fill; read: IRQ asserted |

pub const TIMER_A: u8 = 0x01;
pub const TIMER_B: u8 = 0x02;
pub const TOD_ALARM: u8 = 0x04;
pub const SERIAL: u8 = 0x08;
pub const FLAG: u8 = 0x10;
/// Read: the chip asserted its IRQ output. Write: the fill value.
pub const IRQ: u8 = 0x80;

const SOURCES: u8 = 0x7F;

/// New enable mask after writing `value` to the ICR.
///
/// Bits 0-6 of `value` choose which mask bits to overwrite; bit 7 is what
/// they are overwritten with. Unselected bits keep their old value.
#[must_use]
pub const fn blend_mask(old: u8, value: u8) -> u8 {
    let select = value & SOURCES;
    let fill = if value & IRQ != 0 { SOURCES } else { 0 };
    (old & !select) | (fill & select)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_clear_single_source() {
        let mask = blend_mask(0x00, 0x81);
        assert_eq!(mask, 0x01);
        assert_eq!(blend_mask(mask, 0x01), 0x00);
    }

    #[test]
    fn unselected_bits_are_untouched() {
        assert_eq!(blend_mask(0x12, 0x81), 0x13);
        assert_eq!(blend_mask(0x13, 0x02), 0x11);
        assert_eq!(blend_mask(0x55, 0x80), 0x55);
        assert_eq!(blend_mask(0x55, 0x00), 0x55);
    }

    #[test]
    fn fill_never_reaches_bit_seven() {
        assert_eq!(blend_mask(0x00, 0xFF), 0x7F);
        assert_eq!(blend_mask(0x7F, 0x7F), 0x00);
    }
}

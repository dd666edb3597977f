//! The CIA register file.
//!
//! Every register exists twice: a *real* plane holding the live value, and
//! a *latched* plane holding a snapshot. Timers use the latched plane as
//! their reload value; the time-of-day clock uses it to freeze a reading.

/// The sixteen register roles, in address order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    /// Port A data.
    Pra = 0x0,
    /// Port B data.
    Prb = 0x1,
    /// Port A data direction (1 = output).
    Ddra = 0x2,
    /// Port B data direction (1 = output).
    Ddrb = 0x3,
    TimerALo = 0x4,
    TimerAHi = 0x5,
    TimerBLo = 0x6,
    TimerBHi = 0x7,
    TodTenths = 0x8,
    TodSeconds = 0x9,
    TodMinutes = 0xA,
    TodHours = 0xB,
    /// Serial data register.
    Sdr = 0xC,
    /// Interrupt control (write: enable mask) / status (read).
    Icr = 0xD,
    /// Timer A control.
    Cra = 0xE,
    /// Timer B control.
    Crb = 0xF,
}

impl Register {
    pub const ALL: [Register; 16] = [
        Register::Pra,
        Register::Prb,
        Register::Ddra,
        Register::Ddrb,
        Register::TimerALo,
        Register::TimerAHi,
        Register::TimerBLo,
        Register::TimerBHi,
        Register::TodTenths,
        Register::TodSeconds,
        Register::TodMinutes,
        Register::TodHours,
        Register::Sdr,
        Register::Icr,
        Register::Cra,
        Register::Crb,
    ];

    /// Decode a bus address. The chip mirrors its 16 registers across the
    /// whole block it occupies, so only the low nibble matters.
    #[must_use]
    pub const fn from_address(address: u8) -> Self {
        Self::ALL[(address & 0x0F) as usize]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

const REAL: usize = 0;
const LATCHED: usize = 1;

/// Both register planes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterBank {
    planes: [[u8; 16]; 2],
}

impl RegisterBank {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            planes: [[0; 16]; 2],
        }
    }

    /// Zero both planes.
    pub fn clear(&mut self) {
        self.planes = [[0; 16]; 2];
    }

    #[must_use]
    pub const fn real(&self, reg: Register) -> u8 {
        self.planes[REAL][reg.index()]
    }

    pub fn set_real(&mut self, reg: Register, value: u8) {
        self.planes[REAL][reg.index()] = value;
    }

    #[must_use]
    pub const fn latched(&self, reg: Register) -> u8 {
        self.planes[LATCHED][reg.index()]
    }

    pub fn set_latched(&mut self, reg: Register, value: u8) {
        self.planes[LATCHED][reg.index()] = value;
    }

    /// Write the same value to both planes.
    pub fn set_both(&mut self, reg: Register, value: u8) {
        self.set_real(reg, value);
        self.set_latched(reg, value);
    }

    /// Copy the latched value over the real one.
    pub fn latch_to_real(&mut self, reg: Register) {
        self.planes[REAL][reg.index()] = self.planes[LATCHED][reg.index()];
    }

    /// Snapshot the real value into the latched plane.
    pub fn real_to_latch(&mut self, reg: Register) {
        self.planes[LATCHED][reg.index()] = self.planes[REAL][reg.index()];
    }

    /// Real value of a `lo`/`hi` register pair as one 16-bit word.
    #[must_use]
    pub const fn real_word(&self, lo: Register, hi: Register) -> u16 {
        u16::from_le_bytes([self.real(lo), self.real(hi)])
    }

    /// Latched value of a `lo`/`hi` register pair as one 16-bit word.
    #[must_use]
    pub const fn latched_word(&self, lo: Register, hi: Register) -> u16 {
        u16::from_le_bytes([self.latched(lo), self.latched(hi)])
    }

    pub fn set_real_word(&mut self, lo: Register, hi: Register, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.set_real(lo, low);
        self.set_real(hi, high);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_mirror_every_sixteen() {
        assert_eq!(Register::from_address(0x00), Register::Pra);
        assert_eq!(Register::from_address(0x0D), Register::Icr);
        assert_eq!(Register::from_address(0x1D), Register::Icr);
        assert_eq!(Register::from_address(0xFF), Register::Crb);
        for (i, reg) in Register::ALL.iter().enumerate() {
            assert_eq!(reg.index(), i);
        }
    }

    #[test]
    fn planes_are_independent() {
        let mut bank = RegisterBank::new();
        bank.set_real(Register::TimerALo, 0x12);
        bank.set_latched(Register::TimerALo, 0x34);
        assert_eq!(bank.real(Register::TimerALo), 0x12);
        assert_eq!(bank.latched(Register::TimerALo), 0x34);
    }

    #[test]
    fn latch_round_trip_restores_value() {
        let mut bank = RegisterBank::new();
        for v in [0x00, 0x01, 0x7F, 0x80, 0xFF] {
            bank.set_real(Register::TimerALo, v);
            bank.real_to_latch(Register::TimerALo);
            bank.latch_to_real(Register::TimerALo);
            bank.real_to_latch(Register::TimerALo);
            assert_eq!(bank.real(Register::TimerALo), v);
            assert_eq!(bank.latched(Register::TimerALo), v);
        }
    }

    #[test]
    fn words_are_little_endian_pairs() {
        let mut bank = RegisterBank::new();
        bank.set_real_word(Register::TimerBLo, Register::TimerBHi, 0xABCD);
        assert_eq!(bank.real(Register::TimerBLo), 0xCD);
        assert_eq!(bank.real(Register::TimerBHi), 0xAB);
        assert_eq!(bank.real_word(Register::TimerBLo, Register::TimerBHi), 0xABCD);
        assert_eq!(bank.latched_word(Register::TimerBLo, Register::TimerBHi), 0);
    }
}

//! Time-of-day read latch.
//!
//! Reading hours freezes a copy of all four TOD registers; reads then come
//! from the copy until tenths is read, so a program walking hours, minutes,
//! seconds, tenths sees one consistent time.

use super::Cia1;
use crate::registers::Register;

const TOD_REGISTERS: [Register; 4] = [
    Register::TodHours,
    Register::TodMinutes,
    Register::TodSeconds,
    Register::TodTenths,
];

impl Cia1 {
    pub(super) fn latch_tod(&mut self) {
        self.tod_latched = true;
        for reg in TOD_REGISTERS {
            self.bank.real_to_latch(reg);
        }
    }

    pub(super) fn read_tod(&self, reg: Register) -> u8 {
        if self.tod_latched {
            self.bank.latched(reg)
        } else {
            self.bank.real(reg)
        }
    }

    /// The clock itself does not run: nothing advances the TOD registers
    /// except the host writing them.
    #[allow(clippy::unused_self)]
    pub(super) fn update_tod(&mut self) {}
}

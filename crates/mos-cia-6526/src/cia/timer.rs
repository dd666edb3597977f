//! Timer A and Timer B.
//!
//! A timer's counter and its reload latch are the real and latched planes
//! of the same register pair. Writing the counter bytes sets both; counting
//! touches only the real plane; underflow copies the latch back.

use emu_core::{InterruptLines, Ticks};

use super::Cia1;
use crate::control;
use crate::icr;
use crate::registers::Register;

/// Which of the two timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    A,
    B,
}

impl TimerId {
    /// Low and high counter registers.
    #[must_use]
    pub const fn counter_registers(self) -> (Register, Register) {
        match self {
            Self::A => (Register::TimerALo, Register::TimerAHi),
            Self::B => (Register::TimerBLo, Register::TimerBHi),
        }
    }

    #[must_use]
    pub const fn control_register(self) -> Register {
        match self {
            Self::A => Register::Cra,
            Self::B => Register::Crb,
        }
    }

    /// Status/mask bit for this timer's underflow.
    #[must_use]
    pub const fn interrupt_flag(self) -> u8 {
        match self {
            Self::A => icr::TIMER_A,
            Self::B => icr::TIMER_B,
        }
    }
}

/// What happens when a running timer underflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Reload and keep counting.
    Continuous,
    /// Reload and stop.
    OneShot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running(RunMode),
}

impl TimerState {
    /// Decode the start and run-mode bits of a control register.
    #[must_use]
    pub const fn from_control(cr: u8) -> Self {
        if cr & control::START == 0 {
            Self::Stopped
        } else if cr & control::ONE_SHOT != 0 {
            Self::Running(RunMode::OneShot)
        } else {
            Self::Running(RunMode::Continuous)
        }
    }
}

/// What a timer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Elapsed system clock ticks.
    Clock,
    /// Pulses on the CNT pin.
    Cnt,
    /// Timer A underflows (Timer B only).
    TimerA,
    /// Timer A underflows while CNT is high (Timer B only).
    TimerAWithCnt,
}

impl InputSource {
    #[must_use]
    pub const fn decode(timer: TimerId, cr: u8) -> Self {
        match timer {
            TimerId::A => {
                if cr & control::CRA_CNT == 0 {
                    Self::Clock
                } else {
                    Self::Cnt
                }
            }
            TimerId::B => match cr & control::CRB_INPUT {
                control::CRB_INPUT_CLOCK => Self::Clock,
                control::CRB_INPUT_CNT => Self::Cnt,
                control::CRB_INPUT_TIMER_A => Self::TimerA,
                _ => Self::TimerAWithCnt,
            },
        }
    }
}

impl Cia1 {
    /// Write CRA/CRB. A set force-load bit copies the latch into the
    /// counter straight away, running or not.
    pub(super) fn write_control(&mut self, timer: TimerId, value: u8) {
        self.bank.set_real(timer.control_register(), value);
        if value & control::FORCE_LOAD != 0 {
            let (lo, hi) = timer.counter_registers();
            self.bank.latch_to_real(lo);
            self.bank.latch_to_real(hi);
        }
    }

    /// Advance one timer by the input it saw since the last update.
    ///
    /// `a_underflowed` is Timer A's result from this same update; Timer B
    /// counts it when cascaded. Returns whether this timer underflowed.
    pub(super) fn update_timer<L: InterruptLines>(
        &mut self,
        timer: TimerId,
        elapsed: Ticks,
        a_underflowed: bool,
        lines: &mut L,
    ) -> bool {
        let cr = self.bank.real(timer.control_register());
        let TimerState::Running(mode) = TimerState::from_control(cr) else {
            return false;
        };

        let decrement = match InputSource::decode(timer, cr) {
            // Only the low 16 bits of the delta reach the counter.
            InputSource::Clock => elapsed.get() as u16,
            InputSource::TimerA => u16::from(a_underflowed),
            InputSource::Cnt => {
                // CNT pulse counting is not emulated; the counter holds.
                log::trace!("timer {timer:?}: CNT input not emulated");
                return false;
            }
            InputSource::TimerAWithCnt => {
                // Gated cascade needs the CNT pin; the counter holds.
                log::trace!("timer {timer:?}: CNT-gated cascade not emulated");
                return false;
            }
        };

        let (lo, hi) = timer.counter_registers();
        let count = self.bank.real_word(lo, hi);
        let next = count.wrapping_sub(decrement);
        self.bank.set_real_word(lo, hi, next);

        if next <= count {
            return false;
        }

        self.underflow(timer, cr, mode, lines);
        true
    }

    fn underflow<L: InterruptLines>(
        &mut self,
        timer: TimerId,
        cr: u8,
        mode: RunMode,
        lines: &mut L,
    ) {
        log::trace!("timer {timer:?} underflow");
        self.isr |= timer.interrupt_flag();

        match (cr & control::PB_ON != 0, cr & control::OUT_TOGGLE != 0) {
            (false, _) => {}
            (true, false) => {
                // Pulse on PB6 (A) / PB7 (B): port B output not emulated.
                log::trace!("timer {timer:?}: PB pulse output not emulated");
            }
            (true, true) => {
                // Toggle PB6 (A) / PB7 (B): port B output not emulated.
                log::trace!("timer {timer:?}: PB toggle output not emulated");
            }
        }

        if mode == RunMode::OneShot {
            self.bank.set_real(timer.control_register(), cr & !control::START);
        }

        if self.bank.real(Register::Icr) & timer.interrupt_flag() != 0 {
            log::debug!("timer {timer:?} underflow: asserting IRQ");
            self.isr |= icr::IRQ;
            lines.irq();
        }

        let (lo, hi) = timer.counter_registers();
        self.bank.latch_to_real(hi);
        self.bank.latch_to_real(lo);
    }
}

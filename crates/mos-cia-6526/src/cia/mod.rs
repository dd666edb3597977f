//! CIA #1: keyboard scanning, Timer A/B → IRQ, time-of-day clock.
//!
//! # Registers
//!
//! | Reg | Read                       | Write                        |
//! |-----|----------------------------|------------------------------|
//! | $x0 | Port A data                | Port A data (DDR-masked)     |
//! | $x1 | Keyboard rows (scan)       | Port B data (DDR-masked)     |
//! | $x2 | Port A DDR                 | Port A DDR                   |
//! | $x3 | Port B DDR                 | Port B DDR                   |
//! | $x4 | Timer A low (count)        | Timer A low (count + latch)  |
//! | $x5 | Timer A high (count)       | Timer A high (count + latch) |
//! | $x6 | Timer B low (count)        | Timer B low (count + latch)  |
//! | $x7 | Timer B high (count)       | Timer B high (count + latch) |
//! | $x8 | TOD 10ths (releases latch) | TOD 10ths                    |
//! | $x9 | TOD seconds                | TOD seconds                  |
//! | $xA | TOD minutes                | TOD minutes                  |
//! | $xB | TOD hours (latches)        | TOD hours                    |
//! | $xC | Serial data                | Serial data                  |
//! | $xD | Interrupt status           | Interrupt enable mask        |
//! | $xE | Control A                  | Control A (force load)       |
//! | $xF | Control B                  | Control B (force load)       |
//!
//! Reading the status register does not acknowledge it: status bits stay
//! set until the chip is reset.

mod timer;
mod tod;

pub use timer::{InputSource, RunMode, TimerId, TimerState};

use emu_core::{InterruptLines, Observable, Peripheral, TickSource, Ticks, Value};

use crate::config::CiaConfig;
use crate::icr;
use crate::keyboard::KeyboardMatrix;
use crate::keymap::{self, KeyCode};
use crate::registers::{Register, RegisterBank};

/// CIA #1 instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cia1 {
    config: CiaConfig,
    /// Real and latched register planes.
    bank: RegisterBank,
    keyboard: KeyboardMatrix,
    /// Interrupt status as returned by a read of $xD.
    isr: u8,
    /// Tick count seen at the end of the previous update.
    last_tick: Ticks,
    /// TOD reads come from the latched plane while set.
    tod_latched: bool,
}

impl Cia1 {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CiaConfig::default())
    }

    #[must_use]
    pub fn with_config(config: CiaConfig) -> Self {
        let mut cia = Self {
            config,
            bank: RegisterBank::new(),
            keyboard: KeyboardMatrix::new(),
            isr: 0,
            last_tick: Ticks::ZERO,
            tod_latched: false,
        };
        cia.init();
        cia
    }

    /// Power-on reset.
    pub fn init(&mut self) {
        log::debug!("CIA1 reset");
        self.bank.clear();
        self.keyboard.release_all();
        self.isr = 0;
        self.last_tick = Ticks::ZERO;
        self.tod_latched = false;

        self.bank.set_real(Register::Pra, self.config.port_a);
        self.bank.set_real(Register::Prb, self.config.port_b);
        self.bank.set_real(Register::Ddra, self.config.ddr_a);
        self.bank.set_real(Register::Ddrb, self.config.ddr_b);
    }

    /// Tear the chip down. It holds no outside resources.
    pub fn destroy(self) {
        log::debug!("CIA1 destroyed");
    }

    /// Read a register. `address` is mirrored every 16 bytes.
    pub fn peek(&mut self, address: u8) -> u8 {
        match Register::from_address(address) {
            Register::Icr => self.isr,
            Register::Prb => self.scan_keyboard(),
            Register::TodHours => {
                self.latch_tod();
                self.read_tod(Register::TodHours)
            }
            reg @ (Register::TodMinutes | Register::TodSeconds) => self.read_tod(reg),
            Register::TodTenths => {
                let value = self.read_tod(Register::TodTenths);
                self.tod_latched = false;
                value
            }
            reg => self.bank.real(reg),
        }
    }

    /// Write a register. `address` is mirrored every 16 bytes.
    pub fn poke(&mut self, address: u8, value: u8) {
        match Register::from_address(address) {
            Register::Pra => self.write_port(Register::Pra, Register::Ddra, value),
            Register::Prb => self.write_port(Register::Prb, Register::Ddrb, value),
            reg @ (Register::TimerALo
            | Register::TimerAHi
            | Register::TimerBLo
            | Register::TimerBHi) => self.bank.set_both(reg, value),
            Register::Icr => {
                let mask = icr::blend_mask(self.bank.real(Register::Icr), value);
                self.bank.set_real(Register::Icr, mask);
            }
            Register::Cra => self.write_control(TimerId::A, value),
            Register::Crb => self.write_control(TimerId::B, value),
            reg => self.bank.set_real(reg, value),
        }
    }

    /// Run one tick batch, reading the current count from `clock`.
    pub fn update<C: TickSource, L: InterruptLines>(&mut self, clock: &C, lines: &mut L) {
        self.update_at(clock.now(), lines);
    }

    /// Run one tick batch ending at `now`.
    ///
    /// Timer A runs before Timer B so a cascaded Timer B sees this batch's
    /// Timer A underflow.
    pub fn update_at<L: InterruptLines>(&mut self, now: Ticks, lines: &mut L) {
        let elapsed = now.elapsed_since(self.last_tick);

        let a_underflowed = self.update_timer(TimerId::A, elapsed, false, lines);
        self.update_timer(TimerId::B, elapsed, a_underflowed, lines);
        self.update_tod();
        self.update_keyboard();

        self.last_tick = now;
    }

    /// Press a key. RESTORE is not in the matrix; it asserts NMI instead.
    pub fn key_down<L: InterruptLines>(&mut self, code: KeyCode, lines: &mut L) {
        if code == KeyCode::RESTORE {
            log::debug!("RESTORE pressed: asserting NMI");
            lines.nmi();
            return;
        }
        match keymap::position(code) {
            Some(pos) => self.keyboard.press(pos),
            None => log::trace!("key down {:#04X}: not in matrix", code.0),
        }
    }

    pub fn key_up(&mut self, code: KeyCode) {
        match keymap::position(code) {
            Some(pos) => self.keyboard.release(pos),
            None => log::trace!("key up {:#04X}: not in matrix", code.0),
        }
    }

    /// Bits of Port A set as outputs and holding 0.
    fn driven_columns(&self) -> u8 {
        !self.bank.real(Register::Pra) & self.bank.real(Register::Ddra)
    }

    fn scan_keyboard(&self) -> u8 {
        self.keyboard.scan(self.driven_columns())
    }

    /// Only bits set as outputs in `ddr` take the new value.
    fn write_port(&mut self, port: Register, ddr: Register, value: u8) {
        let mask = self.bank.real(ddr);
        let old = self.bank.real(port);
        self.bank.set_real(port, (value & mask) | (old & !mask));
    }

    /// Keys change only through `key_down`/`key_up`.
    #[allow(clippy::unused_self)]
    fn update_keyboard(&mut self) {}

    // Debug accessors

    #[must_use]
    pub fn config(&self) -> &CiaConfig {
        &self.config
    }

    #[must_use]
    pub fn registers(&self) -> &RegisterBank {
        &self.bank
    }

    /// Direct register access, bypassing bus side effects. Hosts use it
    /// to drive the TOD registers.
    pub fn registers_mut(&mut self) -> &mut RegisterBank {
        &mut self.bank
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardMatrix {
        &self.keyboard
    }

    /// Status snapshot, as a read of $xD would return it.
    #[must_use]
    pub fn interrupt_status(&self) -> u8 {
        self.isr
    }

    /// Interrupt enable mask.
    #[must_use]
    pub fn interrupt_mask(&self) -> u8 {
        self.bank.real(Register::Icr)
    }

    /// Current count of a timer.
    #[must_use]
    pub fn counter(&self, timer: TimerId) -> u16 {
        let (lo, hi) = timer.counter_registers();
        self.bank.real_word(lo, hi)
    }

    /// Reload value of a timer.
    #[must_use]
    pub fn latch(&self, timer: TimerId) -> u16 {
        let (lo, hi) = timer.counter_registers();
        self.bank.latched_word(lo, hi)
    }

    #[must_use]
    pub fn timer_state(&self, timer: TimerId) -> TimerState {
        TimerState::from_control(self.bank.real(timer.control_register()))
    }

    #[must_use]
    pub fn tod_latched(&self) -> bool {
        self.tod_latched
    }

    #[must_use]
    pub fn last_tick(&self) -> Ticks {
        self.last_tick
    }
}

impl Default for Cia1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Peripheral for Cia1 {
    fn peek(&mut self, address: u8) -> u8 {
        Cia1::peek(self, address)
    }

    fn poke(&mut self, address: u8, value: u8) {
        Cia1::poke(self, address, value);
    }
}

const QUERY_PATHS: &[&str] = &[
    "pra",
    "prb",
    "ddra",
    "ddrb",
    "timer_a",
    "timer_a.latch",
    "timer_b",
    "timer_b.latch",
    "cra",
    "crb",
    "icr.mask",
    "icr.status",
    "tod.latched",
    "tod.hours",
    "tod.minutes",
    "tod.seconds",
    "tod.tenths",
    "sdr",
    "keyboard",
];

impl Observable for Cia1 {
    fn query(&self, path: &str) -> Option<Value> {
        let real = |reg| Value::U8(self.bank.real(reg));
        let value = match path {
            "pra" => real(Register::Pra),
            "prb" => real(Register::Prb),
            "ddra" => real(Register::Ddra),
            "ddrb" => real(Register::Ddrb),
            "timer_a" => self.counter(TimerId::A).into(),
            "timer_a.latch" => self.latch(TimerId::A).into(),
            "timer_b" => self.counter(TimerId::B).into(),
            "timer_b.latch" => self.latch(TimerId::B).into(),
            "cra" => real(Register::Cra),
            "crb" => real(Register::Crb),
            "icr.mask" => self.interrupt_mask().into(),
            "icr.status" => self.isr.into(),
            "tod.latched" => self.tod_latched.into(),
            "tod.hours" => real(Register::TodHours),
            "tod.minutes" => real(Register::TodMinutes),
            "tod.seconds" => real(Register::TodSeconds),
            "tod.tenths" => real(Register::TodTenths),
            "sdr" => real(Register::Sdr),
            "keyboard" => Value::from(&self.keyboard.columns()[..]),
            _ => return None,
        };
        Some(value)
    }

    fn query_paths(&self) -> &'static [&'static str] {
        QUERY_PATHS
    }
}

//! Timer control register bits (CRA at $xE, CRB at $xF).
//!
//! | Bit | CRA                       | CRB                         |
//! |-----|---------------------------|-----------------------------|
//! | 0   | start                     | start                       |
//! | 1   | underflow on PB6          | underflow on PB7            |
//! | 2   | PB6 toggle (1) / pulse    | PB7 toggle (1) / pulse      |
//! | 3   | one-shot (1) / continuous | one-shot (1) / continuous   |
//! | 4   | force load (strobe)       | force load (strobe)         |
//! | 5   | count CNT pulses          | input select, low bit       |
//! | 6   | serial port direction     | input select, high bit      |
//! | 7   | TOD 50 Hz                 | TOD write sets alarm        |

pub const START: u8 = 0x01;
pub const PB_ON: u8 = 0x02;
pub const OUT_TOGGLE: u8 = 0x04;
pub const ONE_SHOT: u8 = 0x08;
pub const FORCE_LOAD: u8 = 0x10;

/// CRA: count CNT pulses instead of clock ticks.
pub const CRA_CNT: u8 = 0x20;

/// CRB: two-bit input selector.
pub const CRB_INPUT: u8 = 0x60;
pub const CRB_INPUT_CLOCK: u8 = 0x00;
pub const CRB_INPUT_CNT: u8 = 0x20;
pub const CRB_INPUT_TIMER_A: u8 = 0x40;
pub const CRB_INPUT_TIMER_A_CNT: u8 = 0x60;

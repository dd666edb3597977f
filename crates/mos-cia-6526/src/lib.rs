//! MOS 6526 Complex Interface Adapter, wired as CIA #1.
//!
//! CIA #1 scans the keyboard matrix (Port A drives columns, Port B senses
//! rows), runs two 16-bit interval timers that raise the CPU's IRQ, and
//! holds the time-of-day registers. The bus decoder calls `peek`/`poke`;
//! the main loop calls `update` once per tick batch; the input layer calls
//! `key_down`/`key_up`.
//!
//! Not emulated: CNT pin counting, timer output on PB6/PB7, and the TOD
//! clock advancing on its own. Those paths exist and do nothing.

mod cia;
pub mod config;
pub mod control;
pub mod icr;
pub mod keyboard;
pub mod keymap;
pub mod registers;

pub use cia::{Cia1, InputSource, RunMode, TimerId, TimerState};
pub use config::CiaConfig;
pub use keyboard::KeyboardMatrix;
pub use keymap::{KeyCode, MatrixPosition};
pub use registers::{Register, RegisterBank};

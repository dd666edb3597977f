//! Core traits and types for register-accurate chip emulation.
//!
//! Chips are plain owned values. Everything they need from the rest of the
//! machine (elapsed time, the CPU's interrupt inputs) arrives through the
//! traits in this crate, so a chip can be driven headlessly.

mod clock;
mod lines;
mod observable;
mod peripheral;
mod ticks;

pub use clock::{SteppedClock, TickSource};
pub use lines::{InterruptLines, LineLatch};
pub use observable::{Observable, Value};
pub use peripheral::Peripheral;
pub use ticks::Ticks;

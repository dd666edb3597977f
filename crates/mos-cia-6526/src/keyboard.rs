//! Keyboard matrix state.
//!
//! One byte per column, one bit per row, active low: a clear bit is a
//! held key. This is exactly what Port B sees when the column is driven.

use crate::keymap::MatrixPosition;

/// Pressed-state bitmap for the 8x8 matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardMatrix {
    columns: [u8; 8],
}

impl KeyboardMatrix {
    #[must_use]
    pub const fn new() -> Self {
        Self { columns: [0xFF; 8] }
    }

    pub fn press(&mut self, pos: MatrixPosition) {
        self.columns[pos.column as usize & 7] &= !pos.row_mask;
    }

    pub fn release(&mut self, pos: MatrixPosition) {
        self.columns[pos.column as usize & 7] |= pos.row_mask;
    }

    pub fn release_all(&mut self) {
        self.columns = [0xFF; 8];
    }

    #[must_use]
    pub const fn columns(&self) -> &[u8; 8] {
        &self.columns
    }

    /// Scan the matrix.
    ///
    /// `driven_low` has a bit set for every column the port is actively
    /// pulling low. The rows of all driven columns are wired-ANDed; columns
    /// left floating contribute nothing.
    #[must_use]
    pub fn scan(&self, driven_low: u8) -> u8 {
        self.columns
            .iter()
            .enumerate()
            .filter(|&(col, _)| driven_low & (1 << col) != 0)
            .fold(0xFF, |rows, (_, &column)| rows & column)
    }
}

impl Default for KeyboardMatrix {
    fn default() -> Self {
        Self::new()
    }
}

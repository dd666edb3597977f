//! Key codes and their keyboard matrix positions.
//!
//! The input layer hands the chip one byte per key. Printable keys use
//! their ASCII code; keys with no printable face use the constants on
//! [`KeyCode`] in the `0x80..` range.
//!
//! Matrix layout (column = Port A bit driven low, row = Port B bit read):
//!
//! | Col | Row0 | Row1 | Row2 | Row3 | Row4 | Row5 | Row6 | Row7  |
//! |-----|------|------|------|------|------|------|------|-------|
//! | 0   | DEL  | RET  | →    | F7   | F1   | F3   | F5   | ↓     |
//! | 1   | 3    | W    | A    | 4    | Z    | S    | E    | LSHFT |
//! | 2   | 5    | R    | D    | 6    | C    | F    | T    | X     |
//! | 3   | 7    | Y    | G    | 8    | B    | H    | U    | V     |
//! | 4   | 9    | I    | J    | 0    | M    | K    | O    | N     |
//! | 5   | +    | P    | L    | -    | .    | :    | @    | ,     |
//! | 6   | £    | *    | ;    | HOME | RSHFT| =    | ↑    | /     |
//! | 7   | 1    | ←    | CTRL | 2    | SPC  | C=   | Q    | STOP  |

/// A key as delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u8);

impl KeyCode {
    pub const RUN_STOP: Self = Self(0x80);
    pub const LEFT_SHIFT: Self = Self(0x81);
    pub const RIGHT_SHIFT: Self = Self(0x82);
    pub const CURSOR_DOWN: Self = Self(0x83);
    pub const CURSOR_RIGHT: Self = Self(0x84);
    pub const F1: Self = Self(0x85);
    pub const F3: Self = Self(0x86);
    pub const F5: Self = Self(0x87);
    pub const F7: Self = Self(0x88);
    pub const COMMODORE: Self = Self(0x89);
    pub const HOME: Self = Self(0x8A);
    pub const CTRL: Self = Self(0x8B);
    pub const LEFT_ARROW: Self = Self(0x8C);
    pub const POUND: Self = Self(0x8D);
    pub const DELETE: Self = Self(0x8E);
    /// Not part of the matrix: wired straight to the CPU's NMI input.
    pub const RESTORE: Self = Self(0x8F);

    pub const RETURN: Self = Self(b'\n');
    pub const SPACE: Self = Self(b' ');
    /// The up-arrow key.
    pub const UP_ARROW: Self = Self(b'^');
}

impl From<u8> for KeyCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

/// Where a key sits in the 8x8 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixPosition {
    /// Column index (0-7), selected by driving Port A bit `column` low.
    pub column: u8,
    /// Row bitmask, read back on Port B.
    pub row_mask: u8,
}

impl MatrixPosition {
    const fn at(column: u8, row: u8) -> Self {
        Self {
            column,
            row_mask: 1 << row,
        }
    }
}

/// Look up a key's matrix position. RESTORE and unknown codes have none.
#[must_use]
pub fn position(code: KeyCode) -> Option<MatrixPosition> {
    KEY_TABLE[code.0 as usize]
}

static KEY_TABLE: [Option<MatrixPosition>; 256] = build_table();

const fn build_table() -> [Option<MatrixPosition>; 256] {
    const LAYOUT: [(KeyCode, u8, u8); 64] = [
        // (key, column, row)
        (KeyCode::RUN_STOP, 7, 7),
        (KeyCode(b'/'), 6, 7),
        (KeyCode(b','), 5, 7),
        (KeyCode(b'N'), 4, 7),
        (KeyCode(b'V'), 3, 7),
        (KeyCode(b'X'), 2, 7),
        (KeyCode::LEFT_SHIFT, 1, 7),
        (KeyCode::CURSOR_DOWN, 0, 7),
        (KeyCode(b'Q'), 7, 6),
        (KeyCode::UP_ARROW, 6, 6),
        (KeyCode(b'@'), 5, 6),
        (KeyCode(b'O'), 4, 6),
        (KeyCode(b'U'), 3, 6),
        (KeyCode(b'T'), 2, 6),
        (KeyCode(b'E'), 1, 6),
        (KeyCode::F5, 0, 6),
        (KeyCode::COMMODORE, 7, 5),
        (KeyCode(b'='), 6, 5),
        (KeyCode(b':'), 5, 5),
        (KeyCode(b'K'), 4, 5),
        (KeyCode(b'H'), 3, 5),
        (KeyCode(b'F'), 2, 5),
        (KeyCode(b'S'), 1, 5),
        (KeyCode::F3, 0, 5),
        (KeyCode::SPACE, 7, 4),
        (KeyCode::RIGHT_SHIFT, 6, 4),
        (KeyCode(b'.'), 5, 4),
        (KeyCode(b'M'), 4, 4),
        (KeyCode(b'B'), 3, 4),
        (KeyCode(b'C'), 2, 4),
        (KeyCode(b'Z'), 1, 4),
        (KeyCode::F1, 0, 4),
        (KeyCode(b'2'), 7, 3),
        (KeyCode::HOME, 6, 3),
        (KeyCode(b'-'), 5, 3),
        (KeyCode(b'0'), 4, 3),
        (KeyCode(b'8'), 3, 3),
        (KeyCode(b'6'), 2, 3),
        (KeyCode(b'4'), 1, 3),
        (KeyCode::F7, 0, 3),
        (KeyCode::CTRL, 7, 2),
        (KeyCode(b';'), 6, 2),
        (KeyCode(b'L'), 5, 2),
        (KeyCode(b'J'), 4, 2),
        (KeyCode(b'G'), 3, 2),
        (KeyCode(b'D'), 2, 2),
        (KeyCode(b'A'), 1, 2),
        (KeyCode::CURSOR_RIGHT, 0, 2),
        (KeyCode::LEFT_ARROW, 7, 1),
        (KeyCode(b'*'), 6, 1),
        (KeyCode(b'P'), 5, 1),
        (KeyCode(b'I'), 4, 1),
        (KeyCode(b'Y'), 3, 1),
        (KeyCode(b'R'), 2, 1),
        (KeyCode(b'W'), 1, 1),
        (KeyCode::RETURN, 0, 1),
        (KeyCode(b'1'), 7, 0),
        (KeyCode::POUND, 6, 0),
        (KeyCode(b'+'), 5, 0),
        (KeyCode(b'9'), 4, 0),
        (KeyCode(b'7'), 3, 0),
        (KeyCode(b'5'), 2, 0),
        (KeyCode(b'3'), 1, 0),
        (KeyCode::DELETE, 0, 0),
    ];

    let mut table = [None; 256];
    let mut i = 0;
    while i < LAYOUT.len() {
        let (key, column, row) = LAYOUT[i];
        table[key.0 as usize] = Some(MatrixPosition::at(column, row));
        i += 1;
    }
    table
}

//! 屏幕的可见尺寸
//!
//! 只用于 [`crate::lcd::Lcd::set_cursor_checked`] 的边界检查，
//! 未经检查的 [`crate::lcd::Lcd::set_cursor`] 并不关心屏幕有多大

use core::fmt;

/// 两行模式下，每一行 DDRAM 的长度
pub const TWO_LINE_DDRAM_WIDTH: u8 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    columns: u8,
    rows: u8,
}

impl Geometry {
    pub const LCD1602: Self = Self::new(16, 2);

    pub const fn new(columns: u8, rows: u8) -> Self {
        assert!(rows == 1 || rows == 2, "only 1 or 2 rows are supported");
        assert!(
            columns > 0 && columns <= TWO_LINE_DDRAM_WIDTH,
            "columns should between 1 and 40"
        );

        Self { columns, rows }
    }

    pub fn get_columns(&self) -> u8 {
        self.columns
    }

    pub fn get_rows(&self) -> u8 {
        self.rows
    }

    pub fn contains(&self, row: u8, column: u8) -> bool {
        row < self.rows && column < self.columns
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::LCD1602
    }
}

/// 光标位置超出了屏幕范围
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorOutOfRange {
    pub row: u8,
    pub column: u8,
    pub geometry: Geometry,
}

impl fmt::Display for CursorOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cursor ({}, {}) is outside of a {}x{} display",
            self.row, self.column, self.geometry.columns, self.geometry.rows
        )
    }
}

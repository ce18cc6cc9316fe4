//! Character display trait
//!
//! The display is a 128x64 monochrome panel used purely as a text terminal:
//! 8 rows (pages) of 21 six-pixel character cells.

use core::fmt::Write;

use heapless::String;

/// Number of text rows
pub const DISPLAY_ROWS: u8 = 8;

/// Width of one character cell in pixels
pub const CHAR_WIDTH: u8 = 6;

/// Number of whole character cells per row
pub const DISPLAY_COLS: u8 = 21;

/// Width used when rendering numeric values
///
/// Values are left-aligned and padded so a shorter value overwrites the
/// digits of a longer one.
pub const NUMBER_WIDTH: usize = 3;

/// Text output to the status display
///
/// Transmission is open-loop: nothing is read back from the panel, so none
/// of these operations can report failure.
pub trait TextDisplay {
    /// Send the controller bring-up sequence (once, at boot)
    fn init(&mut self);

    /// Blank every row
    fn clear(&mut self);

    /// Move the write position
    ///
    /// - `column`: pixel column (0-127)
    /// - `row`: text row (0-7)
    fn set_cursor(&mut self, column: u8, row: u8);

    /// Draw one printable ASCII character at the write position and advance
    fn put_char(&mut self, c: u8);

    /// Draw a string at the write position
    fn print(&mut self, text: &str) {
        for c in text.bytes() {
            self.put_char(c);
        }
    }
}

/// Helpers for drawing status screens
pub trait TextDisplayExt: TextDisplay {
    /// Draw `text` starting at character cell `col` of `row`
    fn print_at(&mut self, col: u8, row: u8, text: &str) {
        self.set_cursor(col * CHAR_WIDTH, row);
        self.print(text);
    }

    /// Draw `value` left-aligned in a [`NUMBER_WIDTH`] field at cell `col`
    fn print_number_at(&mut self, col: u8, row: u8, value: u16) {
        let mut buf: String<8> = String::new();
        // u16 always fits in 8 characters
        let _ = write!(buf, "{:<width$}", value, width = NUMBER_WIDTH);
        self.print_at(col, row, &buf);
    }
}

// Blanket implementation for all TextDisplay types
impl<T: TextDisplay> TextDisplayExt for T {}

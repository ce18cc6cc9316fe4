//! SSD1306 OLED as a text terminal
//!
//! Drives a 128x64 panel over the write-only two-wire bus. The panel is
//! used in page addressing terms only: a row is one 8-pixel page, and a
//! character is six column bytes streamed from the font.

use embedded_hal::delay::DelayNs;
use hotplate_core::traits::TextDisplay;
use hotplate_core::traits::display::DISPLAY_ROWS;

use super::font;
use crate::bus::{SignalLines, Stream, TwoWire};

/// Panel width in pixel columns
pub const WIDTH: usize = 128;

/// Controller bring-up for a 128x64 panel with the internal charge pump
#[rustfmt::skip]
pub const INIT_SEQUENCE: [u8; 26] = [
    0xAE,       // display off
    0xD5, 0x80, // clock divide ratio / oscillator frequency
    0xA8, 0x3F, // multiplex ratio: 64 lines
    0xD3, 0x00, // display offset
    0x40,       // start line 0
    0x8D, 0x14, // charge pump on
    0x20, 0x00, // horizontal addressing
    0xC8,       // COM scan direction remapped
    0xDA, 0x12, // COM pins: alternative configuration
    0x81, 0x8F, // contrast
    0xD9, 0xC2, // pre-charge period
    0xDB, 0x40, // VCOMH deselect level
    0xA4,       // resume to RAM content
    0xA6,       // normal (not inverted)
    0x2E,       // scrolling off
    0xA1,       // segment remap (column 127 at SEG0)
    0xAF,       // display on
];

/// Command to select page `row`
const fn page_address(row: u8) -> u8 {
    0xB0 | (row & 0x07)
}

/// Commands to move to page `row`, pixel column `column`
///
/// The column start address is split into a high and a low nibble command.
pub const fn cursor_commands(column: u8, row: u8) -> [u8; 3] {
    [page_address(row), 0x10 | (column >> 4), column & 0x0F]
}

/// SSD1306 text display
pub struct Ssd1306<L, T> {
    bus: TwoWire<L, T>,
}

impl<L: SignalLines, T: DelayNs> Ssd1306<L, T> {
    /// Create the driver; call [`TextDisplay::init`] before drawing
    pub fn new(bus: TwoWire<L, T>) -> Self {
        Self { bus }
    }

    /// Get access to the underlying bus
    pub fn bus(&self) -> &TwoWire<L, T> {
        &self.bus
    }

    /// Release the bus
    pub fn release(self) -> TwoWire<L, T> {
        self.bus
    }
}

impl<L: SignalLines, T: DelayNs> TextDisplay for Ssd1306<L, T> {
    fn init(&mut self) {
        self.bus.write(Stream::Command, &INIT_SEQUENCE);
    }

    fn clear(&mut self) {
        for row in 0..DISPLAY_ROWS {
            self.set_cursor(0, row);
            self.bus
                .write_iter(Stream::Data, core::iter::repeat(0).take(WIDTH));
        }
    }

    fn set_cursor(&mut self, column: u8, row: u8) {
        self.bus.write(Stream::Command, &cursor_commands(column, row));
    }

    fn put_char(&mut self, c: u8) {
        self.bus.write(Stream::Data, font::glyph(c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::two_wire::testing::{Decoder, NoDelay};
    use crate::bus::two_wire::DEFAULT_ADDRESS;
    use hotplate_core::traits::TextDisplayExt;

    const WRITE_ADDRESS: u8 = DEFAULT_ADDRESS << 1;

    fn display() -> Ssd1306<Decoder, NoDelay> {
        let bus = TwoWire::new(Decoder::new(), NoDelay::default(), DEFAULT_ADDRESS);
        Ssd1306::new(bus.with_hold_ns(0))
    }

    fn transactions(display: Ssd1306<Decoder, NoDelay>) -> heapless::Vec<heapless::Vec<u8, 160>, 64> {
        let (decoder, _) = display.release().release();
        decoder.finish()
    }

    #[test]
    fn test_init_is_one_command_transaction() {
        let mut display = display();
        display.init();

        let sent = transactions(display);
        assert_eq!(sent.len(), 1);
        assert_eq!(&sent[0][..2], &[WRITE_ADDRESS, 0x00]);
        assert_eq!(&sent[0][2..], &INIT_SEQUENCE);
        assert_eq!(sent[0].last(), Some(&0xAF));
    }

    #[test]
    fn test_segment_remap_set_once() {
        // No argument byte in the sequence falls in 0xA0..=0xA1
        let remaps: heapless::Vec<u8, 4> = INIT_SEQUENCE
            .iter()
            .copied()
            .filter(|b| (0xA0..=0xA1).contains(b))
            .collect();
        assert_eq!(remaps.as_slice(), &[0xA1]);
    }

    #[test]
    fn test_cursor_nibbles() {
        assert_eq!(cursor_commands(0, 0), [0xB0, 0x10, 0x00]);
        assert_eq!(cursor_commands(64, 3), [0xB3, 0x14, 0x00]);
        assert_eq!(cursor_commands(36, 7), [0xB7, 0x12, 0x04]);
        assert_eq!(cursor_commands(127, 5), [0xB5, 0x17, 0x0F]);
    }

    #[test]
    fn test_put_char_streams_glyph() {
        let mut display = display();
        display.put_char(b'A');

        let sent = transactions(display);
        assert_eq!(sent.len(), 1);
        assert_eq!(&sent[0][..2], &[WRITE_ADDRESS, 0x40]);
        assert_eq!(&sent[0][2..], font::glyph(b'A'));
    }

    #[test]
    fn test_clear_blanks_every_page() {
        let mut display = display();
        display.clear();

        let sent = transactions(display);
        assert_eq!(sent.len(), 16);

        for (page, pair) in sent.chunks(2).enumerate() {
            assert_eq!(
                pair[0].as_slice(),
                &[WRITE_ADDRESS, 0x00, 0xB0 | page as u8, 0x10, 0x00]
            );
            assert_eq!(&pair[1][..2], &[WRITE_ADDRESS, 0x40]);
            assert_eq!(pair[1].len(), 2 + WIDTH);
            assert!(pair[1][2..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_print_at_positions_then_streams() {
        let mut display = display();
        display.print_at(2, 3, "Hi");

        let sent = transactions(display);
        assert_eq!(sent.len(), 3);
        // Cell 2 is pixel column 12
        assert_eq!(&sent[0][2..], &[0xB3, 0x10, 0x0C]);
        assert_eq!(&sent[1][2..], font::glyph(b'H'));
        assert_eq!(&sent[2][2..], font::glyph(b'i'));
    }
}

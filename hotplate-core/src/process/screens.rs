//! Status screens
//!
//! Static text is drawn once when a screen is entered; per-tick updates
//! only redraw the fields that change.

use crate::config::SetPointKind;
use crate::traits::{TextDisplay, TextDisplayExt};
use crate::units::Celsius;
use crate::VERSION;

use super::phase::Phase;
use super::program::Mode;

const TITLE_ROW: u8 = 0;
const TEMP_ROW: u8 = 3;
const TARGET_ROW: u8 = 5;
const REMAINING_ROW: u8 = 6;
const OUTPUT_ROW: u8 = 7;

/// First menu entry row; entries follow on consecutive rows
const MENU_ROW: u8 = 3;

const TEMP_LABEL: &str = "Temp: ";
const TARGET_LABEL: &str = "Target: ";
const REMAINING_LABEL: &str = "Left: ";
const OUTPUT_LABEL: &str = "Heater: ";

/// Cell just past a label
fn after(label: &str) -> u8 {
    label.len() as u8
}

/// Cell just past a number field that starts at `col`
fn after_number(col: u8) -> u8 {
    col + crate::traits::display::NUMBER_WIDTH as u8
}

/// Boot banner
pub fn splash<D: TextDisplay>(display: &mut D) {
    display.clear();
    display.print_at(0, TITLE_ROW, "PCB Hot Plate");
    display.print_at(0, TEMP_ROW, VERSION);
}

/// Mode menu frame
pub fn mode_menu<D: TextDisplay>(display: &mut D) {
    display.clear();
    display.print_at(0, TITLE_ROW, "Select mode");
    for (row, mode) in (MENU_ROW..).zip(Mode::ALL) {
        display.print_at(2, row, mode.label());
    }
}

/// Menu marker next to the highlighted mode
pub fn mode_marker<D: TextDisplay>(display: &mut D, highlighted: Mode) {
    for (row, mode) in (MENU_ROW..).zip(Mode::ALL) {
        let marker = if mode == highlighted { ">" } else { " " };
        display.print_at(0, row, marker);
    }
}

/// Set-point editor frame
pub fn editor<D: TextDisplay>(display: &mut D, kind: SetPointKind) {
    display.clear();
    display.print_at(0, TITLE_ROW, kind.title());
    display.print_at(0, TEMP_ROW, kind.label());
}

/// Value being edited
pub fn editor_value<D: TextDisplay>(display: &mut D, kind: SetPointKind, value: u8) {
    let col = after(kind.label());
    display.print_number_at(col, TEMP_ROW, value as u16);
    display.print_at(after_number(col), TEMP_ROW, kind.unit().suffix());
}

/// Phase frame
pub fn phase<D: TextDisplay>(display: &mut D, phase: &Phase) {
    display.clear();
    display.print_at(0, TITLE_ROW, phase.title());
    display.print_at(0, TEMP_ROW, TEMP_LABEL);
    display.print_at(after_number(after(TEMP_LABEL)), TEMP_ROW, "C");

    if let Some(target) = phase.target() {
        let col = after(TARGET_LABEL);
        display.print_at(0, TARGET_ROW, TARGET_LABEL);
        display.print_number_at(col, TARGET_ROW, target.degrees());
        display.print_at(after_number(col), TARGET_ROW, "C");
    }

    if let Phase::Hold { .. } = phase {
        display.print_at(0, REMAINING_ROW, REMAINING_LABEL);
        display.print_at(after_number(after(REMAINING_LABEL)), REMAINING_ROW, "s");
    }

    display.print_at(0, OUTPUT_ROW, OUTPUT_LABEL);
    output(display, false);
}

/// Current plate temperature
pub fn temperature<D: TextDisplay>(display: &mut D, measured: Celsius) {
    display.print_number_at(after(TEMP_LABEL), TEMP_ROW, measured.degrees());
}

/// Hold seconds left
pub fn remaining<D: TextDisplay>(display: &mut D, seconds: u8) {
    display.print_number_at(after(REMAINING_LABEL), REMAINING_ROW, seconds as u16);
}

/// Heater output marker
pub fn output<D: TextDisplay>(display: &mut D, on: bool) {
    let text = if on { "ON " } else { "OFF" };
    display.print_at(after(OUTPUT_LABEL), OUTPUT_ROW, text);
}

/// Under-voltage warning
pub fn fault<D: TextDisplay>(display: &mut D) {
    display.clear();
    display.print_at(0, TITLE_ROW, "Voltage is too low!");
    display.print_at(0, TEMP_ROW, "Press select");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::display::{CHAR_WIDTH, DISPLAY_COLS, DISPLAY_ROWS};

    /// Character grid mirroring the panel
    struct Grid {
        cells: [[u8; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize],
        cursor: (usize, usize),
    }

    impl Grid {
        fn new() -> Self {
            Self {
                cells: [[b' '; DISPLAY_COLS as usize]; DISPLAY_ROWS as usize],
                cursor: (0, 0),
            }
        }

        fn row(&self, row: usize) -> &str {
            core::str::from_utf8(&self.cells[row]).unwrap().trim_end()
        }
    }

    impl TextDisplay for Grid {
        fn init(&mut self) {}

        fn clear(&mut self) {
            *self = Self::new();
        }

        fn set_cursor(&mut self, column: u8, row: u8) {
            self.cursor = ((column / CHAR_WIDTH) as usize, row as usize);
        }

        fn put_char(&mut self, c: u8) {
            let (col, row) = self.cursor;
            self.cells[row][col] = c;
            self.cursor.0 += 1;
        }
    }

    #[test]
    fn test_splash() {
        let mut grid = Grid::new();
        splash(&mut grid);
        assert_eq!(grid.row(0), "PCB Hot Plate");
        assert_eq!(grid.row(3), "Version 1.0");
    }

    #[test]
    fn test_editor_line() {
        let mut grid = Grid::new();
        editor(&mut grid, SetPointKind::NormalTemp);
        editor_value(&mut grid, SetPointKind::NormalTemp, 100);
        assert_eq!(grid.row(0), "Set temperature");
        assert_eq!(grid.row(3), "Set Temp: 100C");

        // Shrinking value leaves no stale digit
        editor_value(&mut grid, SetPointKind::NormalTemp, 99);
        assert_eq!(grid.row(3), "Set Temp: 99 C");
    }

    #[test]
    fn test_seconds_editor_unit() {
        let mut grid = Grid::new();
        editor(&mut grid, SetPointKind::SoakSeconds);
        editor_value(&mut grid, SetPointKind::SoakSeconds, 5);
        assert_eq!(grid.row(3), "Soak: 5  s");
    }

    #[test]
    fn test_hold_screen() {
        let mut grid = Grid::new();
        let hold = Phase::Hold {
            target: Celsius(150),
            seconds: 45,
        };
        phase(&mut grid, &hold);
        temperature(&mut grid, Celsius(148));
        remaining(&mut grid, 45);
        output(&mut grid, true);

        assert_eq!(grid.row(0), "Holding...");
        assert_eq!(grid.row(3), "Temp: 148C");
        assert_eq!(grid.row(5), "Target: 150C");
        assert_eq!(grid.row(6), "Left: 45 s");
        assert_eq!(grid.row(7), "Heater: ON");
    }

    #[test]
    fn test_cool_screen_has_no_target() {
        let mut grid = Grid::new();
        phase(&mut grid, &Phase::Cool);
        temperature(&mut grid, Celsius(61));

        assert_eq!(grid.row(0), "Cooling...");
        assert_eq!(grid.row(3), "Temp: 61 C");
        assert_eq!(grid.row(5), "");
        assert_eq!(grid.row(7), "Heater: OFF");
    }

    #[test]
    fn test_mode_menu_marker() {
        let mut grid = Grid::new();
        mode_menu(&mut grid);
        mode_marker(&mut grid, Mode::Curve);

        assert_eq!(grid.row(3), "  Normal");
        assert_eq!(grid.row(4), "> Curve");
    }

    #[test]
    fn test_fault_screen() {
        let mut grid = Grid::new();
        fault(&mut grid);
        assert_eq!(grid.row(0), "Voltage is too low!");
        assert_eq!(grid.row(3), "Press select");
    }
}

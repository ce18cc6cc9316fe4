//! Write-only two-wire bus
//!
//! An I2C-style master driven entirely by toggling two lines. Every
//! transaction is the same ordered sequence of (line, level) operations:
//!
//! ```text
//! start:  Data↑ Clock↑ Data↓ Clock↓
//! byte:   8 × (Data=bit Clock↑ Clock↓), MSB first
//!         then Data↑ Clock↑ Clock↓ (acknowledge clock, line released)
//! stop:   Data↓ Clock↑ Data↑
//! ```
//!
//! Each transaction carries the 7-bit address in the write direction and
//! a control byte selecting the command or data stream. Acknowledges are
//! clocked but never read, so writes cannot fail.

use embedded_hal::delay::DelayNs;
use hotplate_hal::{Level, OutputPin};

/// Default peripheral address of SSD1306-class panels
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Default minimum time each line level is held
pub const DEFAULT_HOLD_NS: u32 = 1_250;

/// One of the two bus lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Clock (SCL)
    Clock,
    /// Data (SDA)
    Data,
}

/// Capability to drive the two bus lines
///
/// This is the only hardware-specific piece of the bus.
pub trait SignalLines {
    /// Drive `line` to `level`
    fn drive(&mut self, line: Line, level: Level);
}

/// Bus lines on two GPIO outputs
pub struct PinPair<C, D> {
    clock: C,
    data: D,
}

impl<C: OutputPin, D: OutputPin> PinPair<C, D> {
    /// Create the line pair; both lines idle high
    pub fn new(mut clock: C, mut data: D) -> Self {
        clock.set_high();
        data.set_high();
        Self { clock, data }
    }

    /// Release the pins
    pub fn release(self) -> (C, D) {
        (self.clock, self.data)
    }
}

impl<C: OutputPin, D: OutputPin> SignalLines for PinPair<C, D> {
    fn drive(&mut self, line: Line, level: Level) {
        match line {
            Line::Clock => self.clock.set_level(level),
            Line::Data => self.data.set_level(level),
        }
    }
}

/// Stream selected by the control byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Stream {
    /// Following bytes are controller commands
    Command = 0x00,
    /// Following bytes are display RAM data
    Data = 0x40,
}

/// Bit-banged two-wire master
pub struct TwoWire<L, T> {
    lines: L,
    delay: T,
    address: u8,
    hold_ns: u32,
}

impl<L: SignalLines, T: DelayNs> TwoWire<L, T> {
    /// Create a bus talking to `address` with the default hold time
    pub fn new(lines: L, delay: T, address: u8) -> Self {
        Self {
            lines,
            delay,
            address,
            hold_ns: DEFAULT_HOLD_NS,
        }
    }

    /// Set the minimum time each level is held (0 disables the delay)
    pub fn with_hold_ns(mut self, hold_ns: u32) -> Self {
        self.hold_ns = hold_ns;
        self
    }

    /// Get access to the underlying lines
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Release the lines and delay
    pub fn release(self) -> (L, T) {
        (self.lines, self.delay)
    }

    /// Send one transaction: address, control byte, then `bytes`
    pub fn write(&mut self, stream: Stream, bytes: &[u8]) {
        self.write_iter(stream, bytes.iter().copied());
    }

    /// Send one transaction from an iterator of payload bytes
    pub fn write_iter(&mut self, stream: Stream, bytes: impl IntoIterator<Item = u8>) {
        self.start();
        self.send(self.address << 1);
        self.send(stream as u8);
        for byte in bytes {
            self.send(byte);
        }
        self.stop();
    }

    fn set(&mut self, line: Line, level: Level) {
        self.lines.drive(line, level);
        if self.hold_ns > 0 {
            self.delay.delay_ns(self.hold_ns);
        }
    }

    fn start(&mut self) {
        self.set(Line::Data, Level::High);
        self.set(Line::Clock, Level::High);
        self.set(Line::Data, Level::Low);
        self.set(Line::Clock, Level::Low);
    }

    fn send(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.set(Line::Data, Level::from(byte & (1 << bit) != 0));
            self.set(Line::Clock, Level::High);
            self.set(Line::Clock, Level::Low);
        }

        // Acknowledge clock with the data line released
        self.set(Line::Data, Level::High);
        self.set(Line::Clock, Level::High);
        self.set(Line::Clock, Level::Low);
    }

    fn stop(&mut self) {
        self.set(Line::Data, Level::Low);
        self.set(Line::Clock, Level::High);
        self.set(Line::Data, Level::High);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Line recorder and an independent decoder for the recorded waveform

    use super::*;
    use heapless::Vec;

    /// Records every line operation
    pub struct RecordingLines {
        pub ops: Vec<(Line, Level), 2048>,
    }

    impl RecordingLines {
        pub fn new() -> Self {
            Self { ops: Vec::new() }
        }
    }

    impl SignalLines for RecordingLines {
        fn drive(&mut self, line: Line, level: Level) {
            self.ops.push((line, level)).unwrap();
        }
    }

    /// Delay that returns immediately, counting calls
    #[derive(Default)]
    pub struct NoDelay {
        pub calls: usize,
    }

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {
            self.calls += 1;
        }
    }

    /// Payload of one transaction, address byte first
    pub type Transaction = Vec<u8, 160>;

    /// Rebuilds transactions from line levels the way a receiver sees them
    ///
    /// Data is sampled on each rising clock edge; a data edge while the
    /// clock is high is a start or stop condition. Every ninth bit is the
    /// acknowledge slot and must be released (high).
    pub struct Decoder {
        clock: Level,
        data: Level,
        current: Option<Transaction>,
        shift: u16,
        bits: u8,
        pub transactions: Vec<Transaction, 64>,
    }

    impl Decoder {
        pub fn new() -> Self {
            Self {
                clock: Level::High,
                data: Level::High,
                current: None,
                shift: 0,
                bits: 0,
                transactions: Vec::new(),
            }
        }

        /// Decode a recorded waveform in one go
        pub fn decode(ops: &[(Line, Level)]) -> Vec<Transaction, 64> {
            let mut decoder = Self::new();
            for &(line, level) in ops {
                decoder.feed(line, level);
            }
            decoder.finish()
        }

        /// Check the bus is idle and take the decoded transactions
        pub fn finish(self) -> Vec<Transaction, 64> {
            assert!(self.current.is_none(), "unterminated transaction");
            self.transactions
        }

        pub fn feed(&mut self, line: Line, level: Level) {
            match line {
                Line::Data => {
                    if self.clock.is_high() && self.data != level {
                        if level == Level::Low {
                            assert!(self.current.is_none(), "start inside a transaction");
                            self.current = Some(Vec::new());
                        } else {
                            let done = self.current.take().expect("stop without start");
                            // The clock rise just before a stop samples one stray bit
                            assert_eq!(self.bits, 1, "stop in the middle of a byte");
                            self.transactions.push(done).unwrap();
                        }
                        self.bits = 0;
                        self.shift = 0;
                    }
                    self.data = level;
                }
                Line::Clock => {
                    let rising = level.is_high() && !self.clock.is_high();
                    self.clock = level;

                    if let (true, Some(bytes)) = (rising, self.current.as_mut()) {
                        self.shift = (self.shift << 1) | self.data.is_high() as u16;
                        self.bits += 1;
                        if self.bits == 9 {
                            assert_eq!(self.shift & 1, 1, "acknowledge slot not released");
                            bytes.push((self.shift >> 1) as u8).unwrap();
                            self.bits = 0;
                            self.shift = 0;
                        }
                    }
                }
            }
        }
    }

    impl SignalLines for Decoder {
        fn drive(&mut self, line: Line, level: Level) {
            self.feed(line, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use proptest::prelude::*;

    fn bus() -> TwoWire<RecordingLines, NoDelay> {
        TwoWire::new(RecordingLines::new(), NoDelay::default(), DEFAULT_ADDRESS)
    }

    #[test]
    fn test_exact_framing_of_one_byte() {
        let mut bus = bus().with_hold_ns(0);
        bus.write(Stream::Command, &[]);

        use Level::{High as H, Low as L};
        use Line::{Clock as C, Data as D};

        let ops = &bus.lines().ops;
        // Start condition
        assert_eq!(&ops[..4], &[(D, H), (C, H), (D, L), (C, L)]);
        // Address 0x3C << 1 = 0x78 = 0111_1000, first bit is 0
        assert_eq!(&ops[4..7], &[(D, L), (C, H), (C, L)]);
        assert_eq!(&ops[7..10], &[(D, H), (C, H), (C, L)]);
        // Acknowledge clock after eight bits
        assert_eq!(&ops[28..31], &[(D, H), (C, H), (C, L)]);
        // Stop condition ends the transaction
        assert_eq!(&ops[ops.len() - 3..], &[(D, L), (C, H), (D, H)]);
        // start + 2 bytes × 9 clocks × 3 ops + stop
        assert_eq!(ops.len(), 4 + 2 * 27 + 3);
    }

    #[test]
    fn test_transaction_header() {
        let mut bus = bus();
        bus.write(Stream::Data, &[0xA5, 0x00, 0xFF]);

        let decoded = Decoder::decode(&bus.lines().ops);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].as_slice(), &[0x78, 0x40, 0xA5, 0x00, 0xFF]);
    }

    #[test]
    fn test_command_stream_control_byte() {
        let mut bus = bus();
        bus.write(Stream::Command, &[0xAF]);

        let decoded = Decoder::decode(&bus.lines().ops);
        assert_eq!(decoded[0].as_slice(), &[0x78, 0x00, 0xAF]);
    }

    #[test]
    fn test_hold_time_after_every_level() {
        let mut bus = bus();
        bus.write(Stream::Command, &[0x00]);

        let ops = bus.lines().ops.len();
        let (_, delay) = bus.release();
        assert_eq!(delay.calls, ops);
    }

    #[test]
    fn test_zero_hold_skips_delay() {
        let mut bus = bus().with_hold_ns(0);
        bus.write(Stream::Command, &[0x00]);

        let (_, delay) = bus.release();
        assert_eq!(delay.calls, 0);
    }

    proptest! {
        #[test]
        fn prop_payload_survives_the_wire(payload in prop::collection::vec(any::<u8>(), 0..32)) {
            let mut bus = bus().with_hold_ns(0);
            bus.write(Stream::Data, &payload);

            let decoded = Decoder::decode(&bus.lines().ops);
            prop_assert_eq!(decoded.len(), 1);
            prop_assert_eq!(&decoded[0][2..], payload.as_slice());
        }
    }
}

//! MAX7219 cascade driver (SPI)
//!
//! Eight MAX7219 chips, each driving one 8x8 matrix, are daisy-chained on
//! a single SPI bus with a shared chip-select line.
//!
//! # Protocol
//!
//! Every chip takes 16-bit commands (register, data) MSB first. While
//! chip-select is low the commands shift through the chain; the rising edge
//! latches whatever each chip holds. One transaction therefore carries one
//! command per chip, the bytes for the farthest chip first.
//!
//! A frame is eight transactions, one per chip-local row: digit register
//! `row + 1` with the row's eight pixels as data (MSB = leftmost column).

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use scoreboard_core::matrix::{Framebuffer, CASCADED_MATRIXES, ROWS_IN_MATRIX};
use scoreboard_core::traits::{MatrixPanel, PanelError};

/// MAX7219 register addresses
pub mod reg {
    /// First digit (row) register; rows 0-7 use 0x01-0x08
    pub const DIGIT0: u8 = 0x01;
    /// BCD decode selection
    pub const DECODE_MODE: u8 = 0x09;
    /// LED intensity (0x00-0x0F)
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned digits minus one
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// Shutdown / normal operation
    pub const SHUTDOWN: u8 = 0x0C;
    /// Display test (all LEDs on)
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// SHUTDOWN register: blank the display, keep register contents
const SHUTDOWN_MODE: u8 = 0x00;
/// SHUTDOWN register: normal operation
const NORMAL_OPERATION: u8 = 0x01;
/// DISPLAY_TEST register values
const TEST_ON: u8 = 0x01;
const TEST_OFF: u8 = 0x00;
/// Scan all eight digits
const SCAN_ALL_DIGITS: u8 = 0x07;
/// Raw segment data on every digit
const NO_DECODE: u8 = 0x00;

/// Bytes in one cascade transaction
pub const PACKET_LEN: usize = CASCADED_MATRIXES * 2;

/// One command for every chip in the chain
pub type Packet = [u8; PACKET_LEN];

/// Build a packet writing the same register value on every chip
pub fn build_register_packet(register: u8, value: u8) -> Packet {
    let mut packet = [0u8; PACKET_LEN];
    for command in packet.chunks_exact_mut(2) {
        command[0] = register;
        command[1] = value;
    }
    packet
}

/// Build the packet for one chip-local row of the framebuffer
///
/// Chip 0 (top left, nearest the controller) is sent last.
pub fn build_row_packet(fb: &Framebuffer, local_row: usize) -> Packet {
    let mut packet = [0u8; PACKET_LEN];
    for (slot, command) in packet.chunks_exact_mut(2).enumerate() {
        let chip = CASCADED_MATRIXES - 1 - slot;
        command[0] = reg::DIGIT0 + local_row as u8;
        command[1] = fb.chip_row(chip, local_row);
    }
    packet
}

/// Chain of MAX7219 chips forming the scoreboard panel
pub struct Max7219Cascade<SPI, CS> {
    spi: SPI,
    cs: CS,
    fb: Framebuffer,
}

impl<SPI, CS> Max7219Cascade<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a driver with a blank framebuffer
    ///
    /// Nothing is sent until [`initialize`](MatrixPanel::initialize).
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            fb: Framebuffer::new(),
        }
    }

    /// Give back the bus and the chip-select pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    /// Shift one packet through the chain and latch it
    ///
    /// Chip-select is raised again even if the bus write failed.
    fn transfer(&mut self, packet: &Packet) -> Result<(), PanelError> {
        self.cs.set_low().map_err(|_| PanelError::ChipSelect)?;
        let written = self
            .spi
            .write(packet)
            .and_then(|_| self.spi.flush())
            .map_err(|_| PanelError::Bus);
        let latched = self.cs.set_high().map_err(|_| PanelError::ChipSelect);
        written.and(latched)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), PanelError> {
        self.transfer(&build_register_packet(register, value))
    }
}

impl<SPI, CS> MatrixPanel for Max7219Cascade<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.fb
    }

    fn initialize(&mut self, brightness: u8) -> Result<(), PanelError> {
        self.write_register(reg::SHUTDOWN, SHUTDOWN_MODE)?;
        self.write_register(reg::DISPLAY_TEST, TEST_OFF)?;
        self.write_register(reg::SCAN_LIMIT, SCAN_ALL_DIGITS)?;
        self.write_register(reg::DECODE_MODE, NO_DECODE)?;
        self.write_register(reg::INTENSITY, brightness)?;
        // Row registers power up undefined; sync them before leaving shutdown
        self.redraw()?;
        self.write_register(reg::SHUTDOWN, NORMAL_OPERATION)
    }

    fn redraw(&mut self) -> Result<(), PanelError> {
        for local_row in 0..ROWS_IN_MATRIX {
            let packet = build_row_packet(&self.fb, local_row);
            self.transfer(&packet)?;
        }
        Ok(())
    }

    fn turn_on(&mut self) -> Result<(), PanelError> {
        self.write_register(reg::SHUTDOWN, NORMAL_OPERATION)
    }

    fn turn_off(&mut self) -> Result<(), PanelError> {
        self.write_register(reg::SHUTDOWN, SHUTDOWN_MODE)
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), PanelError> {
        self.write_register(reg::INTENSITY, level)
    }

    fn set_test_mode(&mut self, on: bool) -> Result<(), PanelError> {
        self.write_register(reg::DISPLAY_TEST, if on { TEST_ON } else { TEST_OFF })
    }
}

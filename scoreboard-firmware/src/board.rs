//! Board wiring and the concrete types built from it
//!
//! | Signal       | Pin     |
//! |--------------|---------|
//! | Matrix CLK   | GPIO 14 (SPI1 SCK) |
//! | Matrix DIN   | GPIO 15 (SPI1 TX)  |
//! | Matrix CS    | GPIO 13 |
//! | Bluetooth RX | GPIO 17 (UART0 RX) |
//! | Bluetooth TX | GPIO 16 (UART0 TX) |
//! | Status LED   | GPIO 25 |

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Spi};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use scoreboard_core::config::ConfigStore;
use scoreboard_core::matrix::SharedPanel;
use scoreboard_core::score::ScoreModel;
use scoreboard_core::view::ViewScheduler;
use scoreboard_drivers::display::Max7219Cascade;

use crate::clock::RtcClock;

/// SPI clock for the MAX7219 chain
pub const SPI_FREQUENCY_HZ: u32 = 5_000_000;

/// Bluetooth module baud rate
pub const UART_BAUDRATE: u32 = 9600;

/// Raw mutex shared by every cross-task structure
pub type BoardMutex = CriticalSectionRawMutex;

/// The 4x2 MAX7219 cascade on SPI1
pub type Cascade = Max7219Cascade<Spi<'static, SPI1, Blocking>, Output<'static>>;

pub type Panel = SharedPanel<BoardMutex, Cascade>;

pub type Score = ScoreModel<BoardMutex>;

pub type Config = ConfigStore<BoardMutex>;

pub type Scheduler = ViewScheduler<'static, BoardMutex, Cascade, RtcClock>;

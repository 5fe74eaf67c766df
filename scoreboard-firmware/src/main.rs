//! Scoreboard - LED dot-matrix scoreboard firmware
//!
//! Drives a 16x32 panel of eight cascaded MAX7219 chips from an RP2040.
//! The panel alternates or scrolls between the score and the time of day
//! while commands arrive over a Bluetooth serial module.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::rtc::Rtc;
use embassy_rp::spi::{self, Phase, Polarity, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use scoreboard_core::config::ConfigStore;
use scoreboard_core::matrix::SharedPanel;
use scoreboard_core::score::ScoreModel;
use scoreboard_core::traits::MatrixPanel;
use scoreboard_core::view::ViewScheduler;
use scoreboard_drivers::display::Max7219Cascade;

use crate::board::{Config, Panel, Scheduler, Score};
use crate::clock::RtcClock;
use crate::config::{ConfigPersistence, FlashStorage};
use crate::controller::Controller;

mod board;
mod channels;
mod clock;
mod config;
mod controller;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    RTC_IRQ => embassy_rp::rtc::InterruptHandler;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// Shared board state, referenced by several tasks
static SCORE: Score = ScoreModel::new();
static CONFIG: StaticCell<Config> = StaticCell::new();
static PANEL: StaticCell<Panel> = StaticCell::new();
static CLOCK: StaticCell<RtcClock> = StaticCell::new();
static VIEW: StaticCell<Scheduler> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Scoreboard firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Settings survive power cycles
    let mut persistence = ConfigPersistence::new(FlashStorage::new(p.FLASH, p.DMA_CH0));
    let display_config = persistence.load_or_default().await;
    let config: &'static Config = CONFIG.init(ConfigStore::new(display_config));

    // Matrix chain: SPI mode 2 (clock idles high, sample on the first edge)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = board::SPI_FREQUENCY_HZ;
    spi_config.polarity = Polarity::IdleHigh;
    spi_config.phase = Phase::CaptureOnFirstTransition;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_14, p.PIN_15, spi_config);
    let cs = Output::new(p.PIN_13, Level::High);

    let mut cascade = Max7219Cascade::new(spi, cs);
    match cascade.initialize(display_config.brightness) {
        Ok(()) => info!("Matrix initialized"),
        Err(e) => warn!("Matrix init failed: {:?}", e),
    }
    let panel: &'static Panel = PANEL.init(SharedPanel::new(cascade));

    let clock: &'static RtcClock = CLOCK.init(RtcClock::new(Rtc::new(p.RTC, Irqs)));
    let view: &'static Scheduler = VIEW.init(ViewScheduler::new(panel, &SCORE, clock, config));
    let controller = Controller::new(panel, &SCORE, clock, config, view);

    // Bluetooth module on UART0
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::UART_BAUDRATE;
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_16, p.PIN_17, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", board::UART_BAUDRATE);

    let led = Output::new(p.PIN_25, Level::Low);

    spawner.spawn(tasks::heartbeat_task(led)).unwrap();
    spawner.spawn(tasks::view_task(view)).unwrap();
    spawner.spawn(tasks::command_rx_task(rx)).unwrap();
    spawner.spawn(tasks::reply_tx_task(tx)).unwrap();
    spawner.spawn(tasks::controller_task(controller)).unwrap();
    spawner.spawn(tasks::config_save_task(persistence)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

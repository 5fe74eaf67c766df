//! Scoreboard remote control protocol
//!
//! The scoreboard is controlled from a phone over a Bluetooth serial
//! module. The link carries plain ASCII lines:
//!
//! ```text
//! SET_SCORE=3:12\r\n      ->  OK\r\n
//! SET_TIME=18:45\r\n      ->  OK\r\n
//! GET_SCORE\r\n           ->  SCORE=3:12\r\n
//! BOGUS\r\n               ->  ERR\r\n
//! ```
//!
//! [`LineAssembler`] splits the byte stream into lines, [`Command`] parses
//! a line and [`Reply`] formats the answer.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod command;
pub mod line;
pub mod reply;

pub use command::{Command, CommandError, ViewStyle};
pub use line::{Line, LineAssembler, LineError, MAX_LINE_LEN};
pub use reply::{Reply, ReplyLine, MAX_REPLY_LEN};

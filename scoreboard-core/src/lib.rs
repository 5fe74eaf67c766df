//! Board-agnostic core logic for the scoreboard firmware
//!
//! This crate contains all rendering and scheduling logic that does not
//! depend on specific hardware implementations:
//!
//! - Framebuffer model for a grid of cascaded 8x8 matrices
//! - Digit fonts and placement rules
//! - Score model with its change animation
//! - Cooperative view scheduler (alternate / scroll)
//! - Display configuration
//! - Hardware abstraction traits (panel, clock)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod font;
pub mod matrix;
pub mod render;
pub mod score;
pub mod traits;
pub mod view;

#[cfg(test)]
mod testing;

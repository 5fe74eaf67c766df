//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in scoreboard-core:
//!
//! - Display drivers (MAX7219 cascade over SPI)

#![no_std]
#![deny(unsafe_code)]

pub mod display;

//! Hardware abstraction traits
//!
//! These traits define the interface between the rendering logic
//! and hardware-specific implementations.

pub mod clock;
pub mod display;

pub use clock::{TimeOfDay, TimeSource};
pub use display::{
    MatrixPanel, PanelError, PanelExt, INITIAL_BRIGHTNESS, MAX_BRIGHTNESS, MIN_BRIGHTNESS,
};

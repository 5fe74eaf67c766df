//! View scheduling
//!
//! [`ViewScheduler`] owns the animation loop; [`RenderSet`] is the cyclic
//! list of items it walks, rebuilt from the configuration on every entry.

pub mod render_set;
pub mod scheduler;

pub use render_set::{RenderSet, MAX_ITEMS};
pub use scheduler::{
    ViewMode, ViewScheduler, ALTERNATE_DWELL_MS, HALT_POLL_MS, INFO_GAP, INFO_WIDTH,
    SCROLL_IN_STEP_MS, SCROLL_STEP_MS,
};

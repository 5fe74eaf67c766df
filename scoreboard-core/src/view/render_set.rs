//! Cyclic collection of the items being shown

use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::Vec;

use crate::config::DisplayConfig;
use crate::render::{InfoItem, TimeView};
use crate::score::ScoreModel;

/// Room for every item kind the board knows
pub const MAX_ITEMS: usize = 4;

/// Items in display order with a wrapping cursor
pub struct RenderSet<'a, M: RawMutex, T> {
    items: Vec<InfoItem<'a, M, T>, MAX_ITEMS>,
    cursor: usize,
}

impl<'a, M: RawMutex, T> RenderSet<'a, M, T> {
    /// Build the set for a configuration; the cursor starts at the first item
    pub fn build(config: &DisplayConfig, score: &'a ScoreModel<M>, clock: &'a T) -> Self {
        let mut items = Vec::new();
        if config.use_score {
            let _ = items.push(InfoItem::Score(score));
        }
        if config.use_time {
            let _ = items.push(InfoItem::Time(TimeView::new(clock)));
        }
        Self { items, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Next item, wrapping around at the end
    pub fn next(&mut self) -> Option<InfoItem<'a, M, T>> {
        let item = *self.items.get(self.cursor)?;
        self.cursor = (self.cursor + 1) % self.items.len();
        Some(item)
    }
}

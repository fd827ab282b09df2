//! Message feed with insert-and-shift animation
//!
//! New blocks enter at the feed baseline (lift 0). Every older block is
//! lifted by the new block's height plus spacing, each through its own
//! tween. A block that is still moving when another insert arrives has its
//! tween replaced by one starting from where it currently is, so lifts
//! always settle on the exact accumulated target.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::LayoutBlock;
use crate::animation::timing::is_valid_span;
use crate::animation::{Easing, TweenHandle, TweenScheduler};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

/// Side of the feed a message is drawn on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// Who said it and how to draw them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    pub speaker: String,
    pub side: Side,
    /// Avatar resource id; `None` means draw the default avatar
    pub avatar: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub id: EntryId,
    pub meta: EntryMeta,
    pub block: LayoutBlock,
    /// Current upward offset from the feed baseline
    pub lift: f64,
    /// Offset the entry settles on once its shift completes
    pub target_lift: f64,
    shift: Option<TweenHandle>,
}

impl FeedEntry {
    /// Whether a shift tween is still moving this entry
    pub fn is_shifting(&self) -> bool {
        self.shift.is_some()
    }
}

/// Ordered message blocks, oldest first
#[derive(Debug, Clone, Default)]
pub struct Feed {
    entries: VecDeque<FeedEntry>,
    next_id: u64,
    /// Maximum number of kept entries; 0 keeps everything
    max_entries: usize,
    /// Curve of the lift animation
    shift_easing: Easing,
}

impl Feed {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Self::default()
        }
    }

    pub fn with_shift_easing(mut self, easing: Easing) -> Self {
        self.shift_easing = easing;
        self
    }

    /// Append a block at the baseline and lift every older block
    ///
    /// When the feed exceeds its cap the oldest entries are evicted along
    /// with their running tweens.
    pub fn insert_and_shift(
        &mut self,
        tweens: &mut TweenScheduler<Feed>,
        block: LayoutBlock,
        meta: EntryMeta,
        spacing: f64,
        shift_duration: f64,
    ) -> Result<EntryId> {
        if !is_valid_span(shift_duration) {
            return Err(Error::InvalidDuration(shift_duration));
        }

        let shift = block.height + spacing;
        for entry in &mut self.entries {
            if let Some(handle) = entry.shift.take() {
                tweens.cancel(handle);
            }
            entry.target_lift += shift;

            let id = entry.id;
            let handle = tweens.schedule_eased(
                entry.lift,
                entry.target_lift,
                shift_duration,
                self.shift_easing,
                move |feed: &mut Feed, lift| feed.set_lift(id, lift),
                move |feed: &mut Feed| feed.finish_shift(id),
            )?;
            entry.shift = Some(handle);
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        debug!(entry = id.0, speaker = %meta.speaker, height = block.height, "Feed insert");
        self.entries.push_back(FeedEntry {
            id,
            meta,
            block,
            lift: 0.0,
            target_lift: 0.0,
            shift: None,
        });

        while self.max_entries > 0 && self.entries.len() > self.max_entries {
            if let Some(evicted) = self.entries.pop_front() {
                if let Some(handle) = evicted.shift {
                    tweens.cancel(handle);
                }
                debug!(entry = evicted.id.0, "Feed evicted oldest entry");
            }
        }

        Ok(id)
    }

    fn set_lift(&mut self, id: EntryId, lift: f64) {
        if let Some(entry) = self.get_mut(id) {
            entry.lift = lift;
        }
    }

    fn finish_shift(&mut self, id: EntryId) {
        if let Some(entry) = self.get_mut(id) {
            entry.lift = entry.target_lift;
            entry.shift = None;
        }
    }

    fn get_mut(&mut self, id: EntryId) -> Option<&mut FeedEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn get(&self, id: EntryId) -> Option<&FeedEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = &FeedEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn shift_easing(&self) -> Easing {
        self.shift_easing
    }

    /// Drop every entry; callers clear the tween scheduler alongside
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

use std::collections::HashSet;

use tracing::{debug, info};

use super::{Scene, SceneKind};
use crate::animation::timing::millis_to_secs;
use crate::animation::{Pulse, TimerId, Timers, TweenScheduler};
use crate::config::ChatConfig;
use crate::dialogue::{tokenize, ChatData};
use crate::geometry::Point;
use crate::layout::{
    layout, EntryId, EntryMeta, Feed, FeedEntry, FlowToken, LayoutStyle, MonospaceMeasure, Side,
};
use crate::Result;

/// Message as seen by a renderer
#[derive(Debug, Clone, Copy)]
pub struct MessageView<'a> {
    pub entry: &'a FeedEntry,
    /// Root-space top-left corner of the block
    pub position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChatEvent {
    NextMessage,
}

/// "Magic Words": dialogue lines appear one by one and push older ones up
#[derive(Debug)]
pub struct ChatScene {
    config: ChatConfig,
    data: ChatData,
    emoji_names: HashSet<String>,
    style: LayoutStyle,
    measure: MonospaceMeasure,
    feed: Feed,
    tweens: TweenScheduler<Feed>,
    timers: Timers<ChatEvent>,
    message_timer: Option<TimerId>,
    next_line: usize,
    title_pulse: Pulse,
    disposed: bool,
}

impl ChatScene {
    pub fn new(config: &ChatConfig, data: ChatData) -> Result<Self> {
        let mut timers = Timers::new();
        let message_timer = timers.every(
            millis_to_secs(config.message_interval_ms),
            ChatEvent::NextMessage,
        )?;

        info!(
            "Chat scene: {} dialogue lines, message every {}ms",
            data.dialogue.len(),
            config.message_interval_ms
        );

        Ok(Self {
            emoji_names: data.emoji_names(),
            style: LayoutStyle {
                max_line_width: config.max_line_width,
                line_height: config.line_height,
                image_size: config.image_size,
            },
            measure: MonospaceMeasure::new(config.char_width),
            feed: Feed::new(config.max_messages).with_shift_easing(config.shift_easing),
            tweens: TweenScheduler::new(),
            timers,
            message_timer: Some(message_timer),
            next_line: 0,
            title_pulse: Pulse::title(),
            disposed: false,
            config: config.clone(),
            data,
        })
    }

    /// Lay out a message and insert it at the bottom of the feed
    pub fn insert_message(&mut self, speaker: &str, tokens: Vec<FlowToken>) -> Result<EntryId> {
        let block = layout(&tokens, &self.style, &self.measure);
        let meta = EntryMeta {
            speaker: speaker.to_string(),
            side: self.side_for(speaker),
            avatar: self.data.avatar(speaker).map(|avatar| avatar.url.clone()),
        };

        self.feed.insert_and_shift(
            &mut self.tweens,
            block,
            meta,
            self.config.spacing,
            millis_to_secs(self.config.shift_duration_ms),
        )
    }

    /// Insert the next dialogue line
    ///
    /// Returns `Ok(None)` once the dialogue is exhausted; the message timer
    /// is stopped at that point.
    pub fn next_message(&mut self) -> Result<Option<EntryId>> {
        if self.disposed {
            return Ok(None);
        }
        let Some(line) = self.data.dialogue.get(self.next_line).cloned() else {
            if let Some(timer) = self.message_timer.take() {
                self.timers.cancel(timer);
                debug!("Dialogue finished");
            }
            return Ok(None);
        };
        self.next_line += 1;

        let tokens = tokenize(&line.text, &self.emoji_names);
        self.insert_message(&line.name, tokens).map(Some)
    }

    /// Avatar side from the dialogue data, else the local speaker sits left
    pub fn side_for(&self, speaker: &str) -> Side {
        match self.data.avatar(speaker) {
            Some(avatar) => avatar.position,
            None if speaker == self.config.local_speaker => Side::Left,
            None => Side::Right,
        }
    }

    /// Messages oldest first with their root-space positions
    pub fn messages(&self) -> Vec<MessageView<'_>> {
        self.feed
            .iter()
            .map(|entry| {
                let x = match entry.meta.side {
                    Side::Left => self.config.left_x,
                    Side::Right => self.config.right_x,
                };
                MessageView {
                    entry,
                    position: Point::new(x, self.config.baseline - entry.lift),
                }
            })
            .collect()
    }

    pub fn data(&self) -> &ChatData {
        &self.data
    }

    pub fn emoji_url(&self, name: &str) -> Option<&str> {
        self.data.emoji_url(name)
    }

    /// Dialogue lines shown so far
    pub fn shown(&self) -> usize {
        self.next_line
    }

    /// All lines shown and every shift settled
    pub fn is_finished(&self) -> bool {
        self.next_line >= self.data.dialogue.len() && self.tweens.is_empty()
    }
}

impl Scene for ChatScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Chat
    }

    fn title_scale(&self) -> f64 {
        self.title_pulse.value()
    }

    fn advance(&mut self, delta: f64) {
        if self.disposed {
            return;
        }
        self.tweens.advance(delta, &mut self.feed);
        self.title_pulse.advance(delta);
        for event in self.timers.advance(delta) {
            match event {
                ChatEvent::NextMessage => {
                    if let Err(e) = self.next_message() {
                        tracing::warn!("Failed to insert message: {}", e);
                    }
                }
            }
        }
    }

    fn dispose(&mut self) {
        self.tweens.clear();
        self.timers.clear();
        self.message_timer = None;
        self.feed.clear();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

//! Recurring interval timers owned by a scene
//!
//! Replaces ambient interval callbacks with an explicit list of timed tasks.
//! Timers never invoke anything themselves: `advance()` returns the events
//! that fired and the owning scene handles them after its own state has been
//! stepped, so a handler can never run while a previous one is incomplete.

use super::timing::is_valid_span;
use crate::{Error, Result};

/// Identifies one recurring timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct IntervalTimer<E> {
    id: TimerId,
    /// Period in seconds
    interval: f64,
    /// Time since the last fire
    elapsed: f64,
    event: E,
}

/// Set of recurring timers producing events of type `E`
#[derive(Debug, Clone)]
pub struct Timers<E> {
    timers: Vec<IntervalTimer<E>>,
    next_id: u64,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E: Clone> Timers<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a timer that yields `event` every `interval` seconds
    pub fn every(&mut self, interval: f64, event: E) -> Result<TimerId> {
        if !is_valid_span(interval) {
            return Err(Error::InvalidInterval(interval));
        }

        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(IntervalTimer {
            id,
            interval,
            elapsed: 0.0,
            event,
        });
        Ok(id)
    }

    /// Change a timer's period and restart its phase
    ///
    /// Returns `Ok(false)` when the timer no longer exists.
    pub fn set_interval(&mut self, id: TimerId, interval: f64) -> Result<bool> {
        if !is_valid_span(interval) {
            return Err(Error::InvalidInterval(interval));
        }

        match self.timers.iter_mut().find(|timer| timer.id == id) {
            Some(timer) => {
                timer.interval = interval;
                timer.elapsed = 0.0;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Current period of a timer
    pub fn interval(&self, id: TimerId) -> Option<f64> {
        self.timers
            .iter()
            .find(|timer| timer.id == id)
            .map(|timer| timer.interval)
    }

    /// Stop a timer; returns `false` if it was already gone
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    /// Stop every timer
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Advance all timers by `delta` seconds and collect the fired events
    ///
    /// Each timer fires at most once per call. Periods missed during a long
    /// frame are coalesced into that single fire while the phase is kept.
    /// Events come back in timer registration order.
    pub fn advance(&mut self, delta: f64) -> Vec<E> {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let mut fired = Vec::new();

        for timer in &mut self.timers {
            timer.elapsed += delta;
            if timer.elapsed >= timer.interval {
                timer.elapsed -= timer.interval;
                if timer.elapsed >= timer.interval {
                    timer.elapsed %= timer.interval;
                }
                fired.push(timer.event.clone());
            }
        }

        fired
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

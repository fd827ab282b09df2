//! Tween scheduler
//!
//! Owns every in-flight interpolation of one scene. The scheduler is generic
//! over the world type `T` it animates: callbacks are typed closures bound at
//! schedule time and receive `&mut T` on every step, so a tween can never
//! outlive the state it writes to once the scheduler is cleared.

use super::easing::Easing;
use super::timing::{is_valid_span, lerp, progress};
use crate::{Error, Result};

/// Per-step callback receiving the interpolated value
pub type UpdateFn<T> = Box<dyn FnMut(&mut T, f64)>;
/// Completion callback, invoked once in the same pass as the final update
pub type CompleteFn<T> = Box<dyn FnOnce(&mut T)>;

/// Identifies one scheduled interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenHandle(u64);

/// Active interpolation state
struct ActiveTween<T> {
    handle: TweenHandle,
    /// Starting value
    from: f64,
    /// Target value
    to: f64,
    /// Time accumulated so far, always within [0, duration]
    elapsed: f64,
    /// Total duration in seconds
    duration: f64,
    easing: Easing,
    on_update: UpdateFn<T>,
    on_complete: Option<CompleteFn<T>>,
}

impl<T> ActiveTween<T> {
    fn value(&self, t: f64) -> f64 {
        if t >= 1.0 {
            self.to
        } else {
            lerp(self.from, self.to, self.easing.apply(t))
        }
    }
}

/// Scheduler of in-flight interpolations
///
/// Call `schedule()` to start a tween, then `advance()` once per frame with
/// the frame delta and the world the callbacks mutate.
pub struct TweenScheduler<T> {
    active: Vec<ActiveTween<T>>,
    next_id: u64,
}

impl<T> Default for TweenScheduler<T> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> std::fmt::Debug for TweenScheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenScheduler")
            .field("active", &self.active.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<T> TweenScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a linear interpolation from `from` to `to` over `duration` seconds
    pub fn schedule<U, C>(
        &mut self,
        from: f64,
        to: f64,
        duration: f64,
        on_update: U,
        on_complete: C,
    ) -> Result<TweenHandle>
    where
        U: FnMut(&mut T, f64) + 'static,
        C: FnOnce(&mut T) + 'static,
    {
        self.schedule_eased(from, to, duration, Easing::Linear, on_update, on_complete)
    }

    /// Schedule an interpolation with an easing preset
    ///
    /// Rejects non-positive or non-finite durations; a zero-length tween is
    /// never silently completed.
    pub fn schedule_eased<U, C>(
        &mut self,
        from: f64,
        to: f64,
        duration: f64,
        easing: Easing,
        on_update: U,
        on_complete: C,
    ) -> Result<TweenHandle>
    where
        U: FnMut(&mut T, f64) + 'static,
        C: FnOnce(&mut T) + 'static,
    {
        if !is_valid_span(duration) {
            return Err(Error::InvalidDuration(duration));
        }

        let handle = TweenHandle(self.next_id);
        self.next_id += 1;

        self.active.push(ActiveTween {
            handle,
            from,
            to,
            elapsed: 0.0,
            duration,
            easing,
            on_update: Box::new(on_update),
            on_complete: Some(Box::new(on_complete)),
        });

        Ok(handle)
    }

    /// Advance every active tween by `delta` seconds
    ///
    /// Tweens are stepped in scheduling order. A tween that reaches full
    /// progress gets its final update and its completion callback in this
    /// same pass and is retired immediately. Negative or non-finite deltas
    /// are treated as zero.
    ///
    /// Returns the number of tweens completed during this call.
    pub fn advance(&mut self, delta: f64, target: &mut T) -> usize {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let mut completed = 0;

        self.active.retain_mut(|tween| {
            tween.elapsed = (tween.elapsed + delta).min(tween.duration);
            let t = progress(tween.elapsed, tween.duration);
            let value = tween.value(t);
            (tween.on_update)(target, value);

            if t >= 1.0 {
                if let Some(on_complete) = tween.on_complete.take() {
                    on_complete(target);
                }
                completed += 1;
                false
            } else {
                true
            }
        });

        completed
    }

    /// Cancel a tween without running its completion callback
    ///
    /// Returns `false` when the handle already completed or was cancelled.
    pub fn cancel(&mut self, handle: TweenHandle) -> bool {
        let before = self.active.len();
        self.active.retain(|tween| tween.handle != handle);
        self.active.len() != before
    }

    /// Cancel every active tween
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Check whether a tween is still in flight
    pub fn is_active(&self, handle: TweenHandle) -> bool {
        self.active.iter().any(|tween| tween.handle == handle)
    }

    /// Current progress of an in-flight tween
    pub fn progress(&self, handle: TweenHandle) -> Option<f64> {
        self.active
            .iter()
            .find(|tween| tween.handle == handle)
            .map(|tween| progress(tween.elapsed, tween.duration))
    }

    /// Number of tweens in flight
    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

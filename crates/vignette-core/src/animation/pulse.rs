//! Decorative oscillators stepped by frame time.

use super::timing::is_valid_span;

/// Smallest title scale
pub const TITLE_PULSE_MIN: f64 = 0.95;
/// Largest title scale
pub const TITLE_PULSE_MAX: f64 = 1.05;
/// Scale change per second (0.0002 per frame at 60 fps)
pub const TITLE_PULSE_RATE: f64 = 0.012;

/// Value bouncing between two bounds at a constant rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    value: f64,
    min: f64,
    max: f64,
    rate: f64,
    rising: bool,
}

impl Pulse {
    /// Start halfway between the bounds, moving up
    pub fn new(min: f64, max: f64, rate: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: (min + max) / 2.0,
            min,
            max,
            rate,
            rising: true,
        }
    }

    /// Scale pulse used by every scene title
    pub fn title() -> Self {
        Self::new(TITLE_PULSE_MIN, TITLE_PULSE_MAX, TITLE_PULSE_RATE)
    }

    pub fn advance(&mut self, delta: f64) {
        let span = self.max - self.min;
        if !is_valid_span(delta) || !is_valid_span(span) || !is_valid_span(self.rate) {
            return;
        }

        // A full round trip leaves the pulse where it started
        let mut step = (self.rate * delta) % (2.0 * span);
        while step > 0.0 {
            if self.rising {
                let room = self.max - self.value;
                if step < room {
                    self.value += step;
                    break;
                }
                self.value = self.max;
                self.rising = false;
                step -= room;
            } else {
                let room = self.value - self.min;
                if step < room {
                    self.value -= step;
                    break;
                }
                self.value = self.min;
                self.rising = true;
                step -= room;
            }
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position between the bounds in [0, 1]
    pub fn phase(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.0
        } else {
            ((self.value - self.min) / span).clamp(0.0, 1.0)
        }
    }

    pub fn is_rising(&self) -> bool {
        self.rising
    }
}

/// Trailing dots appended to a label, one more per interval
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingDots {
    label: String,
    dots: usize,
    elapsed: f64,
    interval: f64,
}

impl LoadingDots {
    pub const MAX_DOTS: usize = 3;

    pub fn new(label: impl Into<String>, interval: f64) -> Self {
        Self {
            label: label.into(),
            dots: 0,
            elapsed: 0.0,
            interval,
        }
    }

    pub fn advance(&mut self, delta: f64) {
        if !is_valid_span(delta) || !is_valid_span(self.interval) {
            return;
        }
        self.elapsed += delta;
        let steps = (self.elapsed / self.interval).floor();
        if steps >= 1.0 {
            self.elapsed -= steps * self.interval;
            let cycle = (Self::MAX_DOTS + 1) as f64;
            self.dots = ((self.dots as f64 + steps) % cycle) as usize;
        }
    }

    pub fn dots(&self) -> usize {
        self.dots
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.label, ".".repeat(self.dots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_pulse_bounces_within_bounds() {
        let mut pulse = Pulse::title();
        assert_eq!(pulse.value(), 1.0);

        let mut peak = pulse.value();
        let mut trough = pulse.value();
        for _ in 0..2000 {
            pulse.advance(1.0 / 60.0);
            peak = peak.max(pulse.value());
            trough = trough.min(pulse.value());
            assert!((TITLE_PULSE_MIN..=TITLE_PULSE_MAX).contains(&pulse.value()));
        }
        assert!((peak - TITLE_PULSE_MAX).abs() < 1e-3);
        assert!((trough - TITLE_PULSE_MIN).abs() < 1e-3);
    }

    #[test]
    fn test_pulse_turns_at_bounds() {
        let mut pulse = Pulse::new(0.0, 1.0, 1.0);
        pulse.advance(0.25);
        assert!((pulse.value() - 0.75).abs() < 1e-9);
        assert!(pulse.is_rising());

        pulse.advance(0.5);
        assert!((pulse.value() - 0.75).abs() < 1e-9);
        assert!(!pulse.is_rising());

        pulse.advance(1.0);
        assert!((pulse.value() - 0.25).abs() < 1e-9);
        assert!(pulse.is_rising());
        assert!((pulse.phase() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_pulse_ignores_bad_delta() {
        let mut pulse = Pulse::title();
        pulse.advance(-1.0);
        pulse.advance(f64::NAN);
        assert_eq!(pulse, Pulse::title());
    }

    #[test]
    fn test_loading_dots_cycle() {
        let mut loading = LoadingDots::new("LOADING", 1.0);
        assert_eq!(loading.text(), "LOADING");

        loading.advance(0.5);
        assert_eq!(loading.dots(), 0);
        loading.advance(0.5);
        assert_eq!(loading.text(), "LOADING.");
        loading.advance(2.0);
        assert_eq!(loading.text(), "LOADING...");
        loading.advance(1.0);
        assert_eq!(loading.text(), "LOADING");

        // Several intervals in one step
        loading.advance(6.0);
        assert_eq!(loading.dots(), 2);
    }
}

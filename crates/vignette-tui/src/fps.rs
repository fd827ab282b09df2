use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Frames drawn during the last second
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: VecDeque<Instant>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a frame drawn at `now`
    pub fn record(&mut self, now: Instant) {
        self.frames.push_back(now);
        while let Some(&oldest) = self.frames.front() {
            if now.duration_since(oldest) > WINDOW {
                self.frames.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn fps(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_frames_in_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::new();
        for i in 0..30 {
            counter.record(start + Duration::from_millis(i * 10));
        }
        assert_eq!(counter.fps(), 30);
    }

    #[test]
    fn test_old_frames_drop_out() {
        let start = Instant::now();
        let mut counter = FpsCounter::new();
        for i in 0..10 {
            counter.record(start + Duration::from_millis(i * 100));
        }
        counter.record(start + Duration::from_millis(2500));
        assert_eq!(counter.fps(), 1);
    }
}

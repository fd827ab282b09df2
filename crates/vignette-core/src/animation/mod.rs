//! Time-driven animation primitives shared by every scene
//!
//! # Layers
//!
//! ## Atomic
//! - `timing` - Progress and interpolation math
//! - `easing` - Easing presets mapping [0, 1] to [0, 1]
//!
//! ## Molecular
//! - `tween` - Scheduler of in-flight interpolations over a world type
//! - `timers` - Recurring interval timers owned by a scene
//! - `pulse` - Bouncing oscillators for title and loading effects
//!
//! # Usage
//!
//! ```ignore
//! use vignette_core::animation::TweenScheduler;
//!
//! let mut tweens: TweenScheduler<f64> = TweenScheduler::new();
//! tweens.schedule(0.0, 100.0, 0.5, |value, v| *value = v, |_| {})?;
//!
//! // Once per frame
//! tweens.advance(delta, &mut value);
//! ```

// Atomic
pub mod easing;
pub mod timing;

// Molecular
pub mod pulse;
pub mod timers;
pub mod tween;

pub use easing::Easing;
pub use pulse::{LoadingDots, Pulse};
pub use timers::{TimerId, Timers};
pub use tween::{TweenHandle, TweenScheduler};

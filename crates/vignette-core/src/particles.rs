//! Bounded particle pool
//!
//! Particles live in a fixed-capacity arena of slots. Dead particles hand
//! their slot back through a free list, so a running fire never allocates
//! after construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;

/// Lifetime distribution: `base` scaled by a factor in `[min_factor, max_factor]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeRange {
    pub base: f64,
    pub min_factor: f64,
    pub max_factor: f64,
}

impl LifeRange {
    pub fn new(base: f64, min_factor: f64, max_factor: f64) -> Self {
        Self {
            base,
            min_factor,
            max_factor,
        }
    }
}

/// Motion and decay parameters shared by every particle of a pool
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub capacity: usize,
    /// Upward drift in units per second
    pub rise_speed: f64,
    /// Maximum horizontal sway in units per second
    pub sway: f64,
    /// Range of the initial scale
    pub scale_range: (f64, f64),
    /// Fraction of the initial scale left at the end of life
    pub min_scale: f64,
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            rise_speed: 120.0,
            sway: 60.0,
            scale_range: (0.3, 0.5),
            min_scale: 0.3,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Root-space position
    pub position: Point,
    /// Per-particle sway bias in [-1, 1]
    pub velocity_bias: f64,
    pub remaining_life: f64,
    pub total_life: f64,
    pub base_scale: f64,
    pub scale: f64,
    pub alpha: f64,
}

impl Particle {
    /// Fraction of life left, clamped to [0, 1]
    #[inline]
    pub fn life_fraction(&self) -> f64 {
        if self.total_life <= 0.0 {
            0.0
        } else {
            (self.remaining_life / self.total_life).clamp(0.0, 1.0)
        }
    }
}

/// Fixed-capacity particle arena
#[derive(Debug)]
pub struct ParticlePool {
    slots: Vec<Option<Particle>>,
    free: Vec<usize>,
    live: usize,
    config: ParticleConfig,
    rng: StdRng,
}

impl ParticlePool {
    pub fn new(config: ParticleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let capacity = config.capacity;

        Self {
            slots: vec![None; capacity],
            // Reversed so the lowest slot is handed out first
            free: (0..capacity).rev().collect(),
            live: 0,
            config,
            rng,
        }
    }

    /// Spawn one particle near `origin`
    ///
    /// Returns `false` and drops the request when the pool is full.
    pub fn try_spawn(&mut self, origin: Point, jitter_radius: f64, life: LifeRange) -> bool {
        let Some(slot) = self.free.pop() else {
            return false;
        };

        let jitter = sample(&mut self.rng, -jitter_radius.abs(), jitter_radius.abs());
        let factor = sample(&mut self.rng, life.min_factor, life.max_factor);
        let total_life = life.base * factor;
        let (scale_lo, scale_hi) = self.config.scale_range;
        let base_scale = sample(&mut self.rng, scale_lo, scale_hi);
        let velocity_bias = sample(&mut self.rng, -1.0, 1.0);

        self.slots[slot] = Some(Particle {
            position: Point::new(origin.x + jitter, origin.y),
            velocity_bias,
            remaining_life: total_life,
            total_life,
            base_scale,
            scale: base_scale,
            alpha: 1.0,
        });
        self.live += 1;
        true
    }

    /// Age, move and fade every live particle by `delta` seconds
    ///
    /// A particle whose life reaches zero is removed in this same call and
    /// never observed with negative life.
    pub fn advance(&mut self, delta: f64) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let rise = self.config.rise_speed * delta;
        let sway = self.config.sway * delta;
        let min_scale = self.config.min_scale.clamp(0.0, 1.0);

        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(particle) = slot.as_mut() else {
                continue;
            };

            particle.remaining_life -= delta;
            if particle.remaining_life <= 0.0 {
                *slot = None;
                self.free.push(index);
                self.live -= 1;
                continue;
            }

            let wobble: f64 = self.rng.gen_range(-1.0..=1.0);
            particle.position.y -= rise;
            particle.position.x += (wobble + particle.velocity_bias) * 0.5 * sway;
            particle.alpha = particle.life_fraction();
            particle.scale = particle.base_scale * (min_scale + (1.0 - min_scale) * particle.alpha);
        }
    }

    /// Remove every particle
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.free.clear();
        self.free.extend((0..self.slots.len()).rev());
        self.live = 0;
    }

    /// Live particles in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().flatten()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }
}

/// Uniform sample in `[lo, hi]`, tolerating swapped or collapsed bounds
fn sample(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if hi - lo <= f64::EPSILON || !lo.is_finite() || !hi.is_finite() {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

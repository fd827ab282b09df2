use tracing::info;

use super::{Scene, SceneKind};
use crate::animation::timing::millis_to_secs;
use crate::animation::{Pulse, Timers};
use crate::config::FireConfig;
use crate::geometry::Point;
use crate::particles::{LifeRange, Particle, ParticleConfig, ParticlePool};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FireEvent {
    Spawn,
}

/// "Phoenix Flame": a small bounded fire above a campfire
#[derive(Debug)]
pub struct FireScene {
    config: FireConfig,
    pool: ParticlePool,
    timers: Timers<FireEvent>,
    spawned: u64,
    dropped: u64,
    title_pulse: Pulse,
    disposed: bool,
}

impl FireScene {
    pub fn new(config: &FireConfig) -> Result<Self> {
        let pool = ParticlePool::new(ParticleConfig {
            capacity: config.capacity,
            rise_speed: config.rise_speed,
            sway: config.sway,
            scale_range: (config.scale_min, config.scale_max),
            min_scale: config.min_scale,
            seed: config.seed,
        });

        let mut timers = Timers::new();
        timers.every(millis_to_secs(config.spawn_interval_ms), FireEvent::Spawn)?;

        info!(
            "Fire scene: {} particles max, spawn every {}ms",
            config.capacity, config.spawn_interval_ms
        );

        Ok(Self {
            config: config.clone(),
            pool,
            timers,
            spawned: 0,
            dropped: 0,
            title_pulse: Pulse::title(),
            disposed: false,
        })
    }

    /// Try to add one particle just above the campfire
    ///
    /// Returns `false` when the fire already holds its maximum.
    pub fn spawn_particle(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let origin = Point::new(
            self.config.position.x,
            self.config.position.y - self.config.spawn_lift,
        );
        let life = LifeRange::new(
            self.config.base_life,
            self.config.life_min_factor,
            self.config.life_max_factor,
        );

        if self.pool.try_spawn(origin, self.config.jitter_radius, life) {
            self.spawned += 1;
            true
        } else {
            self.dropped += 1;
            false
        }
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.pool.iter()
    }

    pub fn particle_count(&self) -> usize {
        self.pool.len()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Root-space position of the campfire
    pub fn campfire(&self) -> Point {
        self.config.position
    }

    /// Number of successful spawns so far
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Number of spawns dropped because the fire was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Scene for FireScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Fire
    }

    fn title_scale(&self) -> f64 {
        self.title_pulse.value()
    }

    fn advance(&mut self, delta: f64) {
        if self.disposed {
            return;
        }
        self.title_pulse.advance(delta);
        self.pool.advance(delta);
        for event in self.timers.advance(delta) {
            match event {
                FireEvent::Spawn => {
                    self.spawn_particle();
                }
            }
        }
    }

    fn dispose(&mut self) {
        self.timers.clear();
        self.pool.clear();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> FireScene {
        FireScene::new(&FireConfig {
            seed: Some(7),
            ..FireConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_burst_is_capped() {
        let mut scene = scene();
        let accepted = (0..15).filter(|_| scene.spawn_particle()).count();
        assert_eq!(accepted, 10);
        assert_eq!(scene.particle_count(), 10);
        assert_eq!(scene.dropped(), 5);
    }

    #[test]
    fn test_timer_spawns_above_campfire() {
        let mut scene = scene();
        scene.advance(0.05);
        assert_eq!(scene.particle_count(), 1);

        let particle = scene.particles().next().copied().unwrap();
        assert_eq!(particle.position.y, 380.0);
        assert!((particle.position.x - 600.0).abs() <= 15.0);
        assert_eq!(scene.campfire(), Point::new(600.0, 400.0));
    }

    #[test]
    fn test_fire_never_exceeds_capacity() {
        let mut scene = scene();
        for _ in 0..600 {
            scene.advance(1.0 / 60.0);
            assert!(scene.particle_count() <= scene.capacity());
            for particle in scene.particles() {
                assert!(particle.remaining_life > 0.0);
                assert!((0.0..=1.0).contains(&particle.alpha));
            }
        }
        assert!(scene.spawned() > 10);
    }

    #[test]
    fn test_dispose_clears_particles() {
        let mut scene = scene();
        for _ in 0..5 {
            scene.spawn_particle();
        }
        scene.dispose();
        assert_eq!(scene.particle_count(), 0);

        scene.advance(1.0);
        assert_eq!(scene.particle_count(), 0);
        assert!(!scene.spawn_particle());
    }
}

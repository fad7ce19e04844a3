//! The bunny swarm: an append-only collection updated once per frame

use glam::Vec2;

use crate::entity::{Bounds, Bunny, Rect};
use crate::rng::SpawnRng;

/// Starting capacity of the bunny storage
pub const DEFAULT_CAPACITY: usize = 64;

/// Owns every bunny. Bunnies are only ever appended, so `len()` never
/// decreases over the lifetime of a swarm.
#[derive(Debug, Clone)]
pub struct Swarm {
    bunnies: Vec<Bunny>,
}

impl Swarm {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bunnies: Vec::with_capacity(capacity),
        }
    }

    /// Append a single bunny
    pub fn spawn(&mut self, bunny: Bunny) {
        self.bunnies.push(bunny);
    }

    /// Spawn `count` bunnies centred on `center` with random velocities.
    ///
    /// Each velocity component is uniform in `[-max_speed, max_speed]`.
    /// Returns the number of bunnies added.
    pub fn spawn_burst<R: SpawnRng + ?Sized>(
        &mut self,
        center: Vec2,
        size: Vec2,
        count: usize,
        max_speed: f32,
        rng: &mut R,
    ) -> usize {
        let speed = max_speed.abs();
        let rect = Rect::centered_on(center, size);

        self.bunnies.reserve(count);
        for _ in 0..count {
            let velocity = Vec2::new(
                rng.random_range(-speed, speed),
                rng.random_range(-speed, speed),
            );
            self.bunnies.push(Bunny::new(rect, velocity));
        }

        log::debug!(
            "Spawned {} bunnies at ({:.0}, {:.0}), total {}",
            count,
            center.x,
            center.y,
            self.bunnies.len()
        );
        count
    }

    /// Spawn `count` bunnies with top-left corners scattered over `bounds`
    pub fn spawn_scattered<R: SpawnRng + ?Sized>(
        &mut self,
        bounds: Bounds,
        size: Vec2,
        count: usize,
        max_speed: f32,
        rng: &mut R,
    ) -> usize {
        let speed = max_speed.abs();

        self.bunnies.reserve(count);
        for _ in 0..count {
            let rect = Rect::new(
                rng.random_range(0.0, bounds.width),
                rng.random_range(0.0, bounds.height),
                size.x,
                size.y,
            );
            let velocity = Vec2::new(
                rng.random_range(-speed, speed),
                rng.random_range(-speed, speed),
            );
            self.bunnies.push(Bunny::new(rect, velocity));
        }
        count
    }

    /// Advance every bunny by `dt` seconds and reflect off the bounds.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn update(&mut self, dt: f32, bounds: Bounds) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        for bunny in &mut self.bunnies {
            bunny.step(dt, bounds);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bunnies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bunnies.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bunnies.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bunny> {
        self.bunnies.iter()
    }

    pub fn as_slice(&self) -> &[Bunny] {
        &self.bunnies
    }
}

impl Default for Swarm {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Swarm {
    type Item = &'a Bunny;
    type IntoIter = std::slice::Iter<'a, Bunny>;

    fn into_iter(self) -> Self::IntoIter {
        self.bunnies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    const BOUNDS: Bounds = Bounds::new(352.0, 430.0);
    const SIZE: Vec2 = Vec2::new(26.0, 37.0);

    #[test]
    fn test_new_swarm_is_empty() {
        let swarm = Swarm::new();
        assert!(swarm.is_empty());
        assert!(swarm.capacity() >= DEFAULT_CAPACITY);
    }

    #[test]
    fn test_spawn_burst_centres_on_click() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let mut swarm = Swarm::new();
        let added = swarm.spawn_burst(Vec2::new(100.0, 200.0), SIZE, 1000, 50.0, &mut rng);

        assert_eq!(added, 1000);
        assert_eq!(swarm.len(), 1000);
        for bunny in &swarm {
            assert_eq!(bunny.rect, Rect::new(87.0, 181.5, 26.0, 37.0));
            assert!(bunny.velocity.x.abs() <= 50.0);
            assert!(bunny.velocity.y.abs() <= 50.0);
        }
    }

    #[test]
    fn test_spawn_burst_negative_speed_is_magnitude() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let mut swarm = Swarm::new();
        swarm.spawn_burst(Vec2::ZERO, SIZE, 100, -10.0, &mut rng);
        assert!(swarm.iter().all(|b| b.velocity.abs().max_element() <= 10.0));
    }

    #[test]
    fn test_spawn_scattered_within_bounds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let mut swarm = Swarm::new();
        swarm.spawn_scattered(BOUNDS, SIZE, 500, 50.0, &mut rng);

        assert_eq!(swarm.len(), 500);
        for bunny in &swarm {
            assert!((0.0..=BOUNDS.width).contains(&bunny.rect.x));
            assert!((0.0..=BOUNDS.height).contains(&bunny.rect.y));
            assert_eq!(bunny.rect.size(), SIZE);
        }
    }

    #[test]
    fn test_update_zero_dt_keeps_positions() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(4);
        let mut swarm = Swarm::new();
        swarm.spawn_scattered(BOUNDS, SIZE, 200, 50.0, &mut rng);
        let before: Vec<Rect> = swarm.iter().map(|b| b.rect).collect();

        swarm.update(0.0, BOUNDS);

        let after: Vec<Rect> = swarm.iter().map(|b| b.rect).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_ignores_negative_and_nan_dt() {
        let mut swarm = Swarm::new();
        swarm.spawn(Bunny::new(Rect::new(50.0, 50.0, 26.0, 37.0), Vec2::new(10.0, 10.0)));

        swarm.update(-1.0, BOUNDS);
        swarm.update(f32::NAN, BOUNDS);
        swarm.update(f32::INFINITY, BOUNDS);

        assert_eq!(swarm.as_slice()[0].rect.position(), Vec2::new(50.0, 50.0));
        assert_eq!(swarm.as_slice()[0].velocity, Vec2::new(10.0, 10.0));
    }
}

//! RNG trait abstraction for spawning
//!
//! Lets the swarm spawn with `thread_rng()` in the app and with a seeded
//! xoshiro generator in tests and benchmarks.

/// Random number source used when spawning bunnies
pub trait SpawnRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_unit(&mut self) -> f32;

    /// Random f32 in [min, max], never panics on an empty or inverted range
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.gen_unit() * (max - min)
    }
}

impl<T: rand::Rng> SpawnRng for T {
    fn gen_unit(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}

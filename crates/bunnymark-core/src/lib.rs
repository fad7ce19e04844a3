//! # Bunnymark Core
//!
//! Windowing-free simulation for the Bunnymark demo: a swarm of textured
//! rectangles that move linearly and bounce off the edges of the visible
//! area, plus the frame timing and once-per-second HUD label refresh that
//! drive the overlay.

pub mod background;
pub mod entity;
pub mod labels;
pub mod rng;
pub mod swarm;
pub mod timing;

pub use background::Background;
pub use entity::{Bounds, Bunny, Rect};
pub use labels::HudLabels;
pub use rng::SpawnRng;
pub use swarm::Swarm;
pub use timing::{FpsCounter, FrameClock, RefreshTimer};

/// Common imports for internal use
pub mod prelude {
    pub use crate::entity::{Bounds, Bunny, Rect};
    pub use crate::rng::SpawnRng;
    pub use crate::swarm::Swarm;
    pub use glam::Vec2;
}

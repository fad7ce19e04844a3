//! Rendering module for the sprite swarm

mod renderer;

pub use renderer::{Renderer, SpriteInstance};

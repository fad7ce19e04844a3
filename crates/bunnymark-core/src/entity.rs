//! Entity types: sprite rectangles, bunnies and the visible area

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in physical pixels (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centred on `center`
    pub fn centered_on(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Rectangle packed as `[x, y, w, h]` for GPU instance data
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.w, self.h]
    }
}

/// A moving sprite: where it is and how fast it travels (pixels/sec)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bunny {
    pub rect: Rect,
    pub velocity: Vec2,
}

impl Bunny {
    pub fn new(rect: Rect, velocity: Vec2) -> Self {
        Self { rect, velocity }
    }

    /// Advance one step and reflect velocity on boundary crossings.
    ///
    /// Position is never corrected, so a bunny may sit past an edge for a
    /// frame; the flipped velocity carries it back.
    #[inline]
    pub fn step(&mut self, dt: f32, bounds: Bounds) {
        self.rect.x += self.velocity.x * dt;
        self.rect.y += self.velocity.y * dt;

        if self.rect.x < 0.0 || self.rect.x + self.rect.w > bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.rect.y < 0.0 || self.rect.y + self.rect.h > bounds.height {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Visible area the swarm bounces inside, in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Whether the rectangle lies fully inside the area
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0.0
            && rect.y >= 0.0
            && rect.x + rect.w <= self.width
            && rect.y + rect.h <= self.height
    }
}

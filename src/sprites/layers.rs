//! Draw order for world sprites.

/// Render order of world sprites. Lower values render behind higher values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawLayer {
    Platform = 0,
    Pickup = 10,
    Enemy = 20,
    Player = 30,
    /// Particle bursts, drawn over everything in the world
    Effect = 40,
}

impl DrawLayer {
    /// Convert to Z coordinate for 2D ordering.
    pub fn z(&self) -> f32 {
        (*self as i32) as f32 * 0.1
    }
}

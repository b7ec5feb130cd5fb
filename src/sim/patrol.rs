//! Back-and-forth enemy movement between two x bounds.

use bevy::prelude::*;

/// Horizontal patrol range and speed for one enemy
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    pub min_x: f32,
    pub max_x: f32,
    pub speed: f32,
}

impl Patrol {
    pub fn around(center_x: f32, half_range: f32, speed: f32) -> Self {
        Self {
            min_x: center_x - half_range,
            max_x: center_x + half_range,
            speed,
        }
    }
}

/// Horizontal velocity for an enemy at `x` currently moving at `velocity_x`.
///
/// Reverses only at the bounds; in between the velocity is left alone.
pub fn steer(x: f32, velocity_x: f32, patrol: &Patrol) -> f32 {
    if x <= patrol.min_x {
        patrol.speed
    } else if x >= patrol.max_x {
        -patrol.speed
    } else {
        velocity_x
    }
}

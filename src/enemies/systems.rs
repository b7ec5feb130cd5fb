//! Enemies domain: patrol steering.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::enemies::Enemy;
use crate::sim::{Patrol, steer};

/// Reverse each enemy at the ends of its patrol range.
pub(crate) fn apply_patrol(
    mut query: Query<(&Transform, &Patrol, &mut LinearVelocity), With<Enemy>>,
) {
    for (transform, patrol, mut velocity) in &mut query {
        let steered = steer(transform.translation.x, velocity.x, patrol);
        if steered != velocity.x {
            debug!(
                "Enemy at x={:.0} turned, velocity {:.0} -> {:.0}",
                transform.translation.x, velocity.x, steered
            );
            velocity.x = steered;
        }
    }
}

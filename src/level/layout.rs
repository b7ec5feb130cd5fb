//! Level domain: deterministic placement of batteries and enemies.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{CollectibleSpawnRule, EnemySpawnRule};
use crate::sim::Patrol;

/// Where one enemy starts and how it patrols
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub position: Vec2,
    pub patrol: Patrol,
}

fn jitter(rng: &mut ChaCha8Rng, amount: f32) -> f32 {
    if amount > 0.0 {
        rng.random_range(-amount..=amount)
    } else {
        0.0
    }
}

/// Evenly spaced battery positions, each nudged by a seeded offset.
pub fn collectible_positions(rule: &CollectibleSpawnRule, seed: u64) -> Vec<Vec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..rule.count)
        .map(|i| {
            let x = rule.start_x + i as f32 * rule.spacing + jitter(&mut rng, rule.jitter_x);
            let y = rule.base_y + jitter(&mut rng, rule.jitter_y);
            Vec2::new(x, y)
        })
        .collect()
}

/// Enemy start points with patrol ranges centered on them.
///
/// Uses its own stream derived from `seed` so changing the battery rule
/// does not move the enemies.
pub fn enemy_layout(rule: &EnemySpawnRule, seed: u64) -> Vec<EnemySpawn> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    (0..rule.count)
        .map(|i| {
            let x = rule.start_x + i as f32 * rule.spacing;
            let speed = (rule.speed + jitter(&mut rng, rule.speed_jitter)).max(1.0);
            EnemySpawn {
                position: Vec2::new(x, rule.y),
                patrol: Patrol::around(x, rule.patrol_half_range, speed),
            }
        })
        .collect()
}

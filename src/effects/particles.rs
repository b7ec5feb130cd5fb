//! Effects domain: short particle bursts.

use std::f32::consts::TAU;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::content::GameplayTuning;
use crate::movement::ParticleBurstRequested;
use crate::sim::EffectColor;
use crate::sprites::{DrawLayer, GeneratedTextures};

const PARTICLE_SIZE: f32 = 5.0;
const MIN_PARTICLE_SPEED: f32 = 60.0;
const MAX_PARTICLE_SPEED: f32 = 180.0;

#[derive(Component, Debug)]
pub struct Particle {
    pub velocity: Vec2,
    pub remaining_ms: f32,
    pub lifetime_ms: f32,
}

/// Tint for each burst kind.
pub fn burst_color(color: EffectColor) -> Color {
    match color {
        EffectColor::Pickup => Color::srgb(0.3, 1.0, 0.45),
        EffectColor::Damage => Color::srgb(1.0, 0.25, 0.25),
        EffectColor::Dash => Color::srgb(0.3, 0.95, 1.0),
        EffectColor::Respawn => Color::WHITE,
    }
}

/// Opacity left after `remaining_ms` of `lifetime_ms`, linear to zero.
pub fn fade(remaining_ms: f32, lifetime_ms: f32) -> f32 {
    if lifetime_ms <= 0.0 {
        return 0.0;
    }
    (remaining_ms / lifetime_ms).clamp(0.0, 1.0)
}

pub(crate) fn spawn_particle_bursts(
    mut commands: Commands,
    mut bursts: MessageReader<ParticleBurstRequested>,
    tuning: Res<GameplayTuning>,
    textures: Res<GeneratedTextures>,
) {
    let presentation = &tuning.presentation;
    let mut rng = rand::rng();

    for burst in bursts.read() {
        let color = burst_color(burst.color);
        for _ in 0..presentation.particle_count {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(MIN_PARTICLE_SPEED..MAX_PARTICLE_SPEED);

            commands.spawn((
                Particle {
                    velocity: Vec2::from_angle(angle) * speed,
                    remaining_ms: presentation.particle_lifetime_ms,
                    lifetime_ms: presentation.particle_lifetime_ms,
                },
                Sprite {
                    image: textures.particle.clone(),
                    color,
                    custom_size: Some(Vec2::splat(PARTICLE_SIZE)),
                    ..default()
                },
                Transform::from_xyz(burst.position.x, burst.position.y, DrawLayer::Effect.z()),
            ));
        }
    }
}

/// Drift, fade and expire particles. Does not run while paused.
pub(crate) fn age_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Particle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut transform, mut sprite) in &mut query {
        particle.remaining_ms -= dt * 1000.0;
        if particle.remaining_ms <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }

        transform.translation.x += particle.velocity.x * dt;
        transform.translation.y += particle.velocity.y * dt;
        sprite
            .color
            .set_alpha(fade(particle.remaining_ms, particle.lifetime_ms));
    }
}

pub(crate) fn cleanup_particles(mut commands: Commands, query: Query<Entity, With<Particle>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

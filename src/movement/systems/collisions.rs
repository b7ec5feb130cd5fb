//! Movement domain: floor and wall probes, sensor contact tracking.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::enemies::EnemyHurtbox;
use crate::level::Collectible;
use crate::movement::{GameLayer, Player, PlayerBody, PlayerContacts};
use crate::sim::{BodyReadout, Overlap};

/// Gap below the feet that still counts as standing
const FLOOR_PROBE_DISTANCE: f32 = 4.0;
/// Gap to a wall that still counts as pressing against it
const WALL_PROBE_DISTANCE: f32 = 2.0;
/// Probe rays start this far inside the player's box
const PROBE_INSET: f32 = 2.0;

pub(crate) fn read_body_state(
    spatial_query: SpatialQuery,
    query: Query<(&Transform, &Collider, &LinearVelocity), With<Player>>,
    mut body: ResMut<PlayerBody>,
) {
    let Ok((transform, collider, velocity)) = query.single() else {
        body.readout = BodyReadout::default();
        return;
    };

    // Only level geometry blocks the player; sensors and enemies are ignored
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    let half = match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => Vec2::new(12.0, 16.0),
    };
    let center = transform.translation.truncate();

    let foot_y = center.y - half.y + PROBE_INSET;
    let feet = [
        Vec2::new(center.x - half.x + PROBE_INSET, foot_y),
        Vec2::new(center.x, foot_y),
        Vec2::new(center.x + half.x - PROBE_INSET, foot_y),
    ];
    let touching_floor = feet.iter().any(|&origin| {
        spatial_query
            .cast_ray(
                origin,
                Dir2::NEG_Y,
                FLOOR_PROBE_DISTANCE + PROBE_INSET,
                true,
                &ground_filter,
            )
            .is_some()
    });

    let flank_offset = half.y - PROBE_INSET;
    let flanks = [
        center + Vec2::new(0.0, flank_offset),
        center,
        center - Vec2::new(0.0, flank_offset),
    ];
    let reach = half.x + WALL_PROBE_DISTANCE;
    let blocked = |direction: Dir2| {
        flanks.iter().any(|&origin| {
            spatial_query
                .cast_ray(origin, direction, reach, true, &ground_filter)
                .is_some()
        })
    };

    body.readout = BodyReadout {
        position: center,
        velocity: velocity.0,
        on_floor: touching_floor,
        blocked_left: blocked(Dir2::NEG_X),
        blocked_right: blocked(Dir2::X),
    };
}

/// Keep the set of colliders the player is inside up to date.
pub(crate) fn track_player_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    player_query: Query<Entity, With<Player>>,
    mut contacts: ResMut<PlayerContacts>,
) {
    let Some(player_entity) = player_query.iter().next() else {
        // Consume events if no player
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        if let Some(other) = other_collider(event.collider1, event.collider2, player_entity) {
            contacts.touching.insert(other);
        }
    }

    for event in collision_end_events.read() {
        if let Some(other) = other_collider(event.collider1, event.collider2, player_entity) {
            contacts.touching.remove(&other);
        }
    }
}

/// Turn current contacts into this frame's overlap list.
///
/// Contacts with anything that is not a battery or a hurtbox, or that no
/// longer exists, are dropped.
pub(crate) fn gather_overlaps(
    mut contacts: ResMut<PlayerContacts>,
    hurtboxes: Query<&EnemyHurtbox>,
    collectibles: Query<(), With<Collectible>>,
) {
    let contacts = &mut *contacts;
    contacts
        .touching
        .retain(|entity| hurtboxes.contains(*entity) || collectibles.contains(*entity));

    let mut touching: Vec<Entity> = contacts.touching.iter().copied().collect();
    touching.sort();

    contacts.overlaps.clear();
    for entity in touching {
        if let Ok(hurtbox) = hurtboxes.get(entity) {
            contacts.overlaps.push(Overlap::Enemy(hurtbox.enemy));
        } else {
            contacts.overlaps.push(Overlap::Collectible(entity));
        }
    }
}

/// The collider in a pair that is not the player, if the player is involved.
pub(crate) fn other_collider(a: Entity, b: Entity, player: Entity) -> Option<Entity> {
    if a == player {
        Some(b)
    } else if b == player {
        Some(a)
    } else {
        None
    }
}

/// Consume collision messages left over from before the scene started.
pub(crate) fn drain_stale_collision_events(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
) {
    for _ in collision_start_events.read() {}
    for _ in collision_end_events.read() {}
}

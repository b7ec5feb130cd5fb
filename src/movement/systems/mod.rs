//! Movement domain: system modules for the player and the gameplay step.

pub(crate) mod collisions;
pub(crate) mod gameplay;
pub(crate) mod input;

pub(crate) use collisions::{
    drain_stale_collision_events, gather_overlaps, read_body_state, track_player_contacts,
};
pub(crate) use gameplay::{
    blink_invulnerable_player, end_session, run_gameplay_frame, start_session,
};
pub(crate) use input::read_input;

//! Movement domain: runs the gameplay step and applies its output.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::content::GameplayTuning;
use crate::core::{GameState, GameplayPaused, SceneTransitionRequested};
use crate::movement::{
    CollectibleTaken, GameSession, HudChanged, LevelResetRequested, MovementInput,
    ParticleBurstRequested, PauseChanged, Player, PlayerBody, PlayerContacts, PlayerRespawned,
};
use crate::sim::{self, FrameEvent};

/// Length of one on/off phase of the damage blink
const BLINK_PHASE_MS: f64 = 100.0;
const BLINK_ALPHA: f32 = 0.3;

#[derive(SystemParam)]
pub(crate) struct FrameMessages<'w> {
    particles: MessageWriter<'w, ParticleBurstRequested>,
    hud: MessageWriter<'w, HudChanged>,
    taken: MessageWriter<'w, CollectibleTaken>,
    respawned: MessageWriter<'w, PlayerRespawned>,
    resets: MessageWriter<'w, LevelResetRequested>,
    pause: MessageWriter<'w, PauseChanged>,
    transitions: MessageWriter<'w, SceneTransitionRequested>,
}

impl FrameMessages<'_> {
    fn dispatch(&mut self, event: FrameEvent) {
        match event {
            FrameEvent::ParticleEffect { position, color } => {
                self.particles
                    .write(ParticleBurstRequested { position, color });
            }
            FrameEvent::HudChanged { lives, batteries } => {
                self.hud.write(HudChanged { lives, batteries });
            }
            FrameEvent::CollectibleTaken(entity) => {
                self.taken.write(CollectibleTaken { entity });
            }
            FrameEvent::CheckpointReached(at) => {
                debug!("Checkpoint advanced to ({:.0}, {:.0})", at.x, at.y);
            }
            FrameEvent::Respawned { at } => {
                self.respawned.write(PlayerRespawned { at });
            }
            FrameEvent::FullReset => {
                self.resets.write(LevelResetRequested);
            }
            FrameEvent::SceneTransition(scene) => {
                self.transitions.write(SceneTransitionRequested {
                    to: GameState::from(scene),
                });
            }
            FrameEvent::PauseChanged(paused) => {
                self.pause.write(PauseChanged { paused });
            }
        }
    }
}

pub(crate) fn start_session(
    mut commands: Commands,
    tuning: Res<GameplayTuning>,
    mut input: ResMut<MovementInput>,
    mut body: ResMut<PlayerBody>,
    mut contacts: ResMut<PlayerContacts>,
) {
    let session = GameSession::new(&tuning);
    info!(
        "Gameplay session started: {} lives, checkpoint at ({:.0}, {:.0})",
        session.0.life.lives, session.0.life.checkpoint.x, session.0.life.checkpoint.y
    );
    commands.insert_resource(session);

    *input = MovementInput::default();
    *body = PlayerBody::default();
    contacts.clear();
}

pub(crate) fn end_session(mut commands: Commands, mut physics_time: ResMut<Time<Physics>>) {
    commands.remove_resource::<GameSession>();
    physics_time.unpause();
}

/// Advance the session by one frame and push the result back into the world.
pub(crate) fn run_gameplay_frame(
    time: Res<Time>,
    tuning: Res<GameplayTuning>,
    input: Res<MovementInput>,
    body: Res<PlayerBody>,
    contacts: Res<PlayerContacts>,
    mut session: ResMut<GameSession>,
    mut paused: ResMut<GameplayPaused>,
    mut physics_time: ResMut<Time<Physics>>,
    mut player_query: Query<(&mut Transform, &mut LinearVelocity), With<Player>>,
    mut messages: FrameMessages,
) {
    let delta_ms = time.delta_secs() * 1000.0;
    let output = sim::step(
        &mut session.0,
        &input.frame,
        &body.readout,
        &contacts.overlaps,
        delta_ms,
        &tuning,
    );

    if let Ok((mut transform, mut velocity)) = player_query.single_mut() {
        if let Some(new_velocity) = output.velocity {
            velocity.0 = new_velocity;
        }
        if let Some(at) = output.teleport {
            transform.translation.x = at.x;
            transform.translation.y = at.y;
        }
    }

    for event in output.events {
        if let FrameEvent::PauseChanged(is_paused) = event {
            paused.paused = is_paused;
            if is_paused {
                physics_time.pause();
            } else {
                physics_time.unpause();
            }
            info!("Gameplay {}", if is_paused { "paused" } else { "resumed" });
        }
        messages.dispatch(event);
    }
}

/// Flash the player while the damage grace window is open.
pub(crate) fn blink_invulnerable_player(
    session: Res<GameSession>,
    mut query: Query<&mut Sprite, With<Player>>,
) {
    let session = &session.0;
    let alpha = if session.life.invulnerable && blink_hidden(session.schedule.now_ms()) {
        BLINK_ALPHA
    } else {
        1.0
    };

    for mut sprite in &mut query {
        sprite.color = Color::srgba(1.0, 1.0, 1.0, alpha);
    }
}

/// Whether the blink is in its faded phase at `now_ms`.
pub(crate) fn blink_hidden(now_ms: f64) -> bool {
    (now_ms.max(0.0) / BLINK_PHASE_MS) as u64 % 2 == 1
}

//! Gameplay rules, independent of the engine.
//!
//! Everything here is a plain function of its inputs:
//! - No ECS queries, no `Time`, no physics handles
//! - Durations in milliseconds, supplied by the caller
//! - Deferred effects are data, processed by the frame loop
//!
//! The Bevy systems in `movement`, `enemies` and `level` translate engine
//! state into these types and apply the results.

pub mod frame;
pub mod lifecycle;
pub mod motion;
pub mod patrol;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use frame::{
    BodyReadout, EffectColor, FrameEvent, FrameInput, FrameOutput, Overlap, Scene, Session, step,
};
pub use lifecycle::{LifeOutcome, LifeState};
pub use motion::MotionState;
pub use patrol::{Patrol, steer};
pub use schedule::{DeferredEffect, Schedule};

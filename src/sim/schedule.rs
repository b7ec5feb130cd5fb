//! Deferred one-shot effects keyed on the session clock.

/// What a scheduled record does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredEffect {
    /// Dash cooldown elapsed
    RestoreDash,
    /// Damage grace window elapsed
    EndInvulnerability,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledEffect {
    pub fire_at_ms: f64,
    /// Frame that created the record; it may only fire on a later frame
    pub scheduled_frame: u64,
    pub effect: DeferredEffect,
}

/// Clock plus pending effects. Only advances while gameplay is running.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    now_ms: f64,
    frame: u64,
    pending: Vec<ScheduledEffect>,
}

impl Schedule {
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pending(&self) -> &[ScheduledEffect] {
        &self.pending
    }

    /// Queue `effect` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: f32, effect: DeferredEffect) {
        self.pending.push(ScheduledEffect {
            fire_at_ms: self.now_ms + f64::from(delay_ms.max(0.0)),
            scheduled_frame: self.frame,
            effect,
        });
    }

    /// Start a new frame of `delta_ms` and drain every effect that is due.
    ///
    /// Returned effects are in scheduling order.
    pub fn advance(&mut self, delta_ms: f32) -> Vec<DeferredEffect> {
        self.frame += 1;
        self.now_ms += f64::from(delta_ms.max(0.0));

        let now = self.now_ms;
        let frame = self.frame;
        let mut due = Vec::new();
        self.pending.retain(|record| {
            let fire = record.fire_at_ms <= now && record.scheduled_frame < frame;
            if fire {
                due.push(record.effect);
            }
            !fire
        });
        due
    }
}

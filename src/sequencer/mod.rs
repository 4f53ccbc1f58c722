// SPDX-License-Identifier: MPL-2.0
//! The timeline sequencer: a cooperative executor for demo scripts.
//!
//! The sequencer owns the narrative state and the header metrics, and
//! advances them by applying script steps whose offsets have elapsed on a
//! virtual clock. The clock is fed from the outside (the stage ticks it
//! with wall-clock deltas; tests feed synthetic durations), so the core
//! never touches a real timer.
//!
//! Cancellation contract: installing a new script replaces every pending
//! step of the old one. The manual gift click therefore cancels the
//! scripted auto-continuation outright — the two branches can never mutate
//! state into each other. Once the pending queue is drained the sequencer
//! is idle and `advance` is a no-op, so a stray late tick cannot mutate
//! anything either.

pub mod script;
mod speed;

pub use script::{Script, Step, Transition};
pub use speed::PlaybackSpeed;

use crate::domain::review::fixtures;
use crate::domain::{FlowKind, Metrics, NarrativeState, Phase};
use std::collections::VecDeque;
use std::time::Duration;

/// Executes scripts against the narrative state on a virtual clock.
#[derive(Debug)]
pub struct Sequencer {
    state: NarrativeState,
    metrics: Metrics,
    pending: VecDeque<Step>,
    /// Virtual time at which the current script was installed.
    anchor: Duration,
    /// Virtual time elapsed since mount.
    elapsed: Duration,
    speed: PlaybackSpeed,
}

impl Sequencer {
    /// Creates a sequencer with the mount script installed and the clock
    /// at zero. Nothing happens until the first `advance`.
    #[must_use]
    pub fn new(speed: PlaybackSpeed) -> Self {
        let mut sequencer = Self {
            state: NarrativeState::default(),
            metrics: Metrics::new(),
            pending: VecDeque::new(),
            anchor: Duration::ZERO,
            elapsed: Duration::ZERO,
            speed,
        };
        sequencer.install(script::mount_script());
        sequencer
    }

    /// Replaces all pending steps with `script`, anchored at the current
    /// virtual time.
    fn install(&mut self, script: Script) {
        self.pending = script.steps().iter().copied().collect();
        self.anchor = self.elapsed;
    }

    /// Advances the virtual clock by a wall-clock delta (scaled by the
    /// playback speed) and applies every step that has come due, strictly
    /// in script order. No-op once the queue is drained.
    pub fn advance(&mut self, delta: Duration) {
        self.advance_virtual(self.speed.scale(delta));
    }

    /// Advances the virtual clock directly, bypassing speed scaling. The
    /// stage uses this to split a tick at an instant it must observe (the
    /// gift landing) without the scaling applying twice.
    pub fn advance_virtual(&mut self, delta: Duration) {
        self.elapsed += delta;
        while let Some(step) = self.pending.front().copied() {
            if self.anchor + step.at > self.elapsed {
                break;
            }
            self.pending.pop_front();
            self.apply(step.transition);
        }
    }

    /// Handles the "Send Recovery Gift" click. Only valid while the manager
    /// portal is showing; otherwise the click is ignored and `false` is
    /// returned. On success the pending auto-continuation is cancelled and
    /// the recovery script starts from the current instant.
    pub fn gift_click(&mut self) -> bool {
        if !self.state.manager_portal_visible {
            return false;
        }
        self.install(script::recovery_script());
        // Apply the zero-offset step right away so the portal hides on the
        // same frame as the click.
        self.advance(Duration::ZERO);
        true
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::EnterActive => {
                self.state.phase = Phase::Active;
            }
            Transition::PresentReview { flow, review } => {
                self.state.flow_kind = flow;
                self.state.current_review = Some(review);
            }
            Transition::OpenManagerPortal => {
                self.state.manager_portal_visible = true;
            }
            Transition::ClearStage => {
                self.state.clear_stage();
            }
            Transition::ShowGift => {
                self.state.gift_visible = true;
            }
            Transition::BeginRecovery => {
                self.state.flow_kind = FlowKind::Recovery;
                self.state.manager_portal_visible = false;
                self.state.gift_visible = true;
            }
            Transition::DeliverManagerResponse => {
                self.state.manager_response = Some(fixtures::MANAGER_APOLOGY);
            }
            Transition::MarkRecovered => {
                self.state.recovered_visible = true;
            }
            Transition::Publish { rating_delta } => {
                self.state.platform_publish_visible = true;
                self.metrics.record_published(rating_delta);
            }
        }
        debug_assert!(self.state.is_consistent(), "transition broke an invariant");
    }

    /// True once every scheduled step has run.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Virtual time since mount. Drives render-side idle animations.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    #[must_use]
    pub fn state(&self) -> &NarrativeState {
        &self.state
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(PlaybackSpeed::default())
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The animated demo stage.
//!
//! The stage owns the timeline [`Sequencer`] plus the one render-local
//! transient: the gift-flight animation started by the portal button. The
//! gift flies for a second before the recovery handler actually fires, so
//! the click cannot outrun its own animation. All timing flows
//! through `tick`, so the stage is as virtual-clock testable as the
//! sequencer underneath it.

mod view;

pub use view::ViewEnv;

use crate::domain::{FlowKind, NarrativeState, Phase};
use crate::sequencer::{PlaybackSpeed, Sequencer};
use crate::ui::components::manager_portal;
use std::f32::consts::TAU;
use std::time::Duration;

/// Gift flight time before the recovery handler fires (virtual clock).
pub const GIFT_FLIGHT: Duration = Duration::from_millis(1_000);

/// Bobbing period of the floating review bubble.
const FLOAT_PERIOD: Duration = Duration::from_secs(2);
/// Peak-to-peak bobbing travel in logical pixels.
const FLOAT_RANGE: f32 = 15.0;

/// Messages consumed by the stage.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Portal(manager_portal::Message),
}

/// Stage state: the sequencer plus the transient flight animation.
#[derive(Debug)]
pub struct State {
    sequencer: Sequencer,
    /// Virtual instant the gift was launched, while a flight is running.
    gift_launched_at: Option<Duration>,
}

impl State {
    #[must_use]
    pub fn new(speed: PlaybackSpeed) -> Self {
        Self {
            sequencer: Sequencer::new(speed),
            gift_launched_at: None,
        }
    }

    /// Advances all stage timing by a wall-clock delta. Completing the gift
    /// flight hands the click to the sequencer, which cancels the pending
    /// auto-continuation.
    ///
    /// While a flight is pending the tick is split at the landing instant,
    /// so script steps due after the landing always see the recovery script
    /// rather than the cancelled continuation, however coarse the tick.
    pub fn tick(&mut self, delta: Duration) {
        let step = self.sequencer.speed().scale(delta);

        if let Some(launched_at) = self.gift_launched_at {
            let to_landing =
                (launched_at + GIFT_FLIGHT).saturating_sub(self.sequencer.elapsed());
            if step >= to_landing {
                self.sequencer.advance_virtual(to_landing);
                self.gift_launched_at = None;
                // Rejected if the portal already left the stage.
                let _ = self.sequencer.gift_click();
                self.sequencer.advance_virtual(step - to_landing);
                return;
            }
        }

        self.sequencer.advance_virtual(step);
    }

    /// Handles a stage message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Portal(manager_portal::Message::SendGift) => {
                if self.state().manager_portal_visible && self.gift_launched_at.is_none() {
                    self.gift_launched_at = Some(self.sequencer.elapsed());
                }
            }
        }
    }

    /// Whether the periodic tick subscription should stay alive.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        !self.sequencer.is_idle()
            || self.gift_launched_at.is_some()
            || self.state().current_review.is_some()
    }

    #[must_use]
    pub fn state(&self) -> &NarrativeState {
        self.sequencer.state()
    }

    #[must_use]
    pub fn metrics(&self) -> &crate::domain::Metrics {
        self.sequencer.metrics()
    }

    #[must_use]
    pub fn gift_in_flight(&self) -> bool {
        self.gift_launched_at.is_some()
    }

    /// Bobbing offset for the review bubble, in the 0..FLOAT_RANGE band.
    #[must_use]
    pub fn float_offset(&self) -> f32 {
        let t = self.sequencer.elapsed().as_secs_f32() / FLOAT_PERIOD.as_secs_f32();
        (1.0 + (t * TAU).sin()) * 0.5 * FLOAT_RANGE
    }

    /// Pulse value for the platform badge star, 0.0–1.0.
    #[must_use]
    pub fn publish_pulse(&self) -> f32 {
        let t = self.sequencer.elapsed().as_secs_f32() * 2.0;
        (1.0 + (t * TAU).sin()) * 0.5
    }

    /// i18n key of the status line matching the narrative progress.
    #[must_use]
    pub fn status_key(&self) -> &'static str {
        let state = self.state();
        if state.phase == Phase::Intro {
            return "status-intro";
        }
        if state.platform_publish_visible {
            return "status-published";
        }
        if state.recovered_visible {
            return "status-recovered";
        }
        match state.flow_kind {
            FlowKind::Recovery => "status-recovery",
            FlowKind::Positive => "status-positive",
            FlowKind::None => {
                if self.gift_in_flight() {
                    "status-recovery"
                } else if state.manager_portal_visible {
                    "status-portal"
                } else if state.current_review.is_some() {
                    "status-negative"
                } else {
                    "status-intro"
                }
            }
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(PlaybackSpeed::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_ms(state: &mut State, ms: u64) {
        state.tick(Duration::from_millis(ms));
    }

    #[test]
    fn send_gift_ignored_before_portal() {
        let mut state = State::default();
        tick_ms(&mut state, 2_000);
        state.update(Message::Portal(manager_portal::Message::SendGift));
        assert!(!state.gift_in_flight());
    }

    #[test]
    fn gift_flight_delays_the_recovery_handler() {
        let mut state = State::default();
        tick_ms(&mut state, 3_500);
        state.update(Message::Portal(manager_portal::Message::SendGift));
        assert!(state.gift_in_flight());
        // Portal stays up during the flight.
        tick_ms(&mut state, 999);
        assert!(state.state().manager_portal_visible);
        // Flight lands: the recovery branch begins and the portal hides.
        tick_ms(&mut state, 1);
        assert!(!state.gift_in_flight());
        assert!(!state.state().manager_portal_visible);
        assert_eq!(state.state().flow_kind, FlowKind::Recovery);
    }

    #[test]
    fn second_click_during_flight_is_ignored() {
        let mut state = State::default();
        tick_ms(&mut state, 3_500);
        state.update(Message::Portal(manager_portal::Message::SendGift));
        let launched = state.gift_launched_at;
        tick_ms(&mut state, 200);
        state.update(Message::Portal(manager_portal::Message::SendGift));
        assert_eq!(state.gift_launched_at, launched);
    }

    #[test]
    fn coarse_tick_lands_the_gift_before_later_steps() {
        let mut state = State::default();
        tick_ms(&mut state, 3_500);
        state.update(Message::Portal(manager_portal::Message::SendGift));
        // One tick spanning both the landing and the cancelled script's
        // stage-clear offset: the recovery must win, not the continuation.
        tick_ms(&mut state, 13_000);
        assert_eq!(state.state().flow_kind, FlowKind::Recovery);
        assert!(state.state().recovered_visible);
        assert!(state.state().current_review.is_some());
    }

    #[test]
    fn status_tracks_the_narrative() {
        let mut state = State::default();
        assert_eq!(state.status_key(), "status-intro");
        tick_ms(&mut state, 1_500);
        assert_eq!(state.status_key(), "status-negative");
        tick_ms(&mut state, 2_000);
        assert_eq!(state.status_key(), "status-portal");
        state.update(Message::Portal(manager_portal::Message::SendGift));
        tick_ms(&mut state, 1_000);
        assert_eq!(state.status_key(), "status-recovery");
        tick_ms(&mut state, 2_500);
        assert_eq!(state.status_key(), "status-recovered");
        tick_ms(&mut state, 2_000);
        assert_eq!(state.status_key(), "status-published");
    }

    #[test]
    fn needs_ticks_while_script_pending() {
        let state = State::default();
        assert!(state.needs_ticks());
    }

    #[test]
    fn float_offset_stays_in_band() {
        let mut state = State::default();
        for _ in 0..100 {
            tick_ms(&mut state, 37);
            let offset = state.float_offset();
            assert!((0.0..=FLOAT_RANGE).contains(&offset));
        }
    }
}

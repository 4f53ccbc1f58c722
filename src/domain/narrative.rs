// SPDX-License-Identifier: MPL-2.0
//! Narrative state driving the whole demo.
//!
//! `NarrativeState` is the single mutable record the sequencer advances.
//! The render layer reads it and maps flags to visible elements; nothing
//! else writes to it. It lives exactly as long as the stage component and
//! is never persisted.

use super::review::{Rating, Review};

/// Top-level demo phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Only the explanatory two-column illustration is shown.
    #[default]
    Intro,
    /// The animated stage is running.
    Active,
}

/// Which narrative branch the stage is currently telling.
///
/// Recovery and Positive are variants of the same enum, so the two branches
/// can never be flagged simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowKind {
    #[default]
    None,
    /// Negative review being won back with a manager gift.
    Recovery,
    /// Positive review being published to the review platform.
    Positive,
}

/// The mutable tuple of flags the sequencer scripts through.
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrativeState {
    pub phase: Phase,
    pub current_review: Option<&'static Review>,
    pub flow_kind: FlowKind,
    pub manager_portal_visible: bool,
    pub recovered_visible: bool,
    pub platform_publish_visible: bool,
    pub gift_visible: bool,
    pub manager_response: Option<&'static str>,
}

impl NarrativeState {
    /// Resets every per-flow flag while keeping the phase. Used between the
    /// recovery story and the positive story.
    pub fn clear_stage(&mut self) {
        self.current_review = None;
        self.flow_kind = FlowKind::None;
        self.manager_portal_visible = false;
        self.recovered_visible = false;
        self.platform_publish_visible = false;
        self.gift_visible = false;
        self.manager_response = None;
    }

    /// Rating to render: maxed out once the review has been recovered.
    #[must_use]
    pub fn display_rating(&self) -> Option<Rating> {
        self.current_review.map(|review| {
            if self.recovered_visible {
                Rating::MAX
            } else {
                review.rating
            }
        })
    }

    /// Review body to render: swaps to the fixture's recovery text once the
    /// gift has landed.
    #[must_use]
    pub fn display_text(&self) -> Option<&'static str> {
        self.current_review.map(|review| {
            if self.recovered_visible {
                review.recovery_text.unwrap_or(review.text)
            } else {
                review.text
            }
        })
    }

    /// Checks the cross-flag invariants. The sequencer debug-asserts this
    /// after every transition; tests call it directly.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.recovered_visible && self.flow_kind != FlowKind::Recovery {
            return false;
        }
        if self.manager_portal_visible && self.current_review.is_none() {
            return false;
        }
        if self.current_review.is_some() && self.phase == Phase::Intro {
            return false;
        }
        true
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Data-driven timeline scripts.
//!
//! A script is an ordered list of `(offset, transition)` steps relative to
//! an anchor instant (mount for the main script, the gift click for the
//! recovery script). Keeping the timeline as data lets tests fast-forward
//! a virtual clock instead of sleeping on real timers.

use crate::domain::review::{fixtures, Review};
use crate::domain::FlowKind;
use std::time::Duration;

/// A single state mutation the sequencer can apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Flip the phase from Intro to Active; the status area becomes visible.
    EnterActive,
    /// Float a review onto the stage and select the narrative branch.
    PresentReview {
        flow: FlowKind,
        review: &'static Review,
    },
    /// Show the manager portal under the current review.
    OpenManagerPortal,
    /// Reset every per-flow flag between stories.
    ClearStage,
    /// Pin the gift badge onto the current review.
    ShowGift,
    /// Start the manual recovery branch: hide the portal, show the gift.
    BeginRecovery,
    /// Attach the fixed manager apology to the review.
    DeliverManagerResponse,
    /// Swap the review to its recovered form (text and stars).
    MarkRecovered,
    /// Publish to the review platform and move the header metrics.
    Publish { rating_delta: f32 },
}

/// One scheduled step of a script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Offset from the script's anchor instant.
    pub at: Duration,
    pub transition: Transition,
}

impl Step {
    fn new(at_ms: u64, transition: Transition) -> Self {
        Self {
            at: Duration::from_millis(at_ms),
            transition,
        }
    }
}

/// An ordered timeline of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Builds a script from steps, sorting by offset. The sort is stable,
    /// so steps sharing an offset keep their authored order.
    #[must_use]
    pub fn new(mut steps: Vec<Step>) -> Self {
        steps.sort_by_key(|step| step.at);
        Self { steps }
    }

    /// Steps in scheduled order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Total running time of the script.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.steps.last().map_or(Duration::ZERO, |step| step.at)
    }
}

/// Metrics bump for the scripted positive-publication flow.
pub const POSITIVE_RATING_DELTA: f32 = 0.3;
/// Metrics bump for the manual recovery flow.
pub const RECOVERY_RATING_DELTA: f32 = 0.2;

/// The fixed timeline executed once per stage mount.
///
/// Tells the negative-review story up to the waiting manager portal, then —
/// unless the user takes the manual path first — clears the stage and runs
/// the scripted positive-publication cycle.
#[must_use]
pub fn mount_script() -> Script {
    Script::new(vec![
        Step::new(1_000, Transition::EnterActive),
        Step::new(
            1_500,
            Transition::PresentReview {
                flow: FlowKind::None,
                review: &fixtures::negative()[0],
            },
        ),
        Step::new(3_500, Transition::OpenManagerPortal),
        Step::new(15_500, Transition::ClearStage),
        Step::new(
            16_500,
            Transition::PresentReview {
                flow: FlowKind::Positive,
                review: &fixtures::positive()[0],
            },
        ),
        Step::new(17_500, Transition::ShowGift),
        Step::new(
            18_500,
            Transition::Publish {
                rating_delta: POSITIVE_RATING_DELTA,
            },
        ),
    ])
}

/// The manual recovery timeline, anchored at the gift click.
#[must_use]
pub fn recovery_script() -> Script {
    Script::new(vec![
        Step::new(0, Transition::BeginRecovery),
        Step::new(500, Transition::DeliverManagerResponse),
        Step::new(2_500, Transition::MarkRecovered),
        Step::new(
            4_500,
            Transition::Publish {
                rating_delta: RECOVERY_RATING_DELTA,
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_steps_by_offset() {
        let script = Script::new(vec![
            Step::new(300, Transition::ShowGift),
            Step::new(100, Transition::EnterActive),
            Step::new(200, Transition::OpenManagerPortal),
        ]);
        let offsets: Vec<u64> = script
            .steps()
            .iter()
            .map(|step| step.at.as_millis() as u64)
            .collect();
        assert_eq!(offsets, vec![100, 200, 300]);
    }

    #[test]
    fn mount_script_is_ordered_and_ends_with_publish() {
        let script = mount_script();
        let mut previous = Duration::ZERO;
        for step in script.steps() {
            assert!(step.at >= previous);
            previous = step.at;
        }
        assert!(matches!(
            script.steps().last().unwrap().transition,
            Transition::Publish { .. }
        ));
        assert_eq!(script.duration(), Duration::from_millis(18_500));
    }

    #[test]
    fn mount_script_presents_first_negative_fixture() {
        let script = mount_script();
        let presented = script.steps().iter().find_map(|step| match step.transition {
            Transition::PresentReview { review, .. } => Some(review),
            _ => None,
        });
        assert_eq!(presented.unwrap().id.0, 4);
    }

    #[test]
    fn recovery_script_starts_immediately() {
        let script = recovery_script();
        assert_eq!(script.steps()[0].at, Duration::ZERO);
        assert_eq!(script.steps()[0].transition, Transition::BeginRecovery);
        assert_eq!(script.duration(), Duration::from_millis(4_500));
    }
}

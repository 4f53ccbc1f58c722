// SPDX-License-Identifier: MPL-2.0
//! End-to-end timeline scenarios, driven entirely by the virtual clock.

use approx::assert_abs_diff_eq;
use review_flow::domain::review::fixtures;
use review_flow::domain::{FlowKind, Phase};
use review_flow::sequencer::{PlaybackSpeed, Sequencer};
use review_flow::ui::stage;
use std::time::Duration;

const EPSILON: f32 = 1e-5;

fn advance_ms(sequencer: &mut Sequencer, ms: u64) {
    sequencer.advance(Duration::from_millis(ms));
}

#[test]
fn scripted_opening_hits_its_marks() {
    let mut sequencer = Sequencer::default();

    advance_ms(&mut sequencer, 1_000);
    assert_eq!(sequencer.state().phase, Phase::Active);

    advance_ms(&mut sequencer, 500);
    let review = sequencer.state().current_review.expect("review on stage");
    assert_eq!(review.id.0, 4);

    advance_ms(&mut sequencer, 2_000);
    assert!(sequencer.state().manager_portal_visible);
    assert!(sequencer.state().is_consistent());
}

#[test]
fn auto_continuation_publishes_the_positive_story() {
    let mut sequencer = Sequencer::default();

    // Let the whole mount script play out without a click.
    advance_ms(&mut sequencer, 15_500);
    assert!(sequencer.state().current_review.is_none());
    assert!(!sequencer.state().manager_portal_visible);

    advance_ms(&mut sequencer, 1_000);
    assert_eq!(sequencer.state().flow_kind, FlowKind::Positive);
    assert_eq!(
        sequencer.state().current_review.unwrap().id,
        fixtures::positive()[0].id
    );

    advance_ms(&mut sequencer, 1_000);
    assert!(sequencer.state().gift_visible);

    advance_ms(&mut sequencer, 1_000);
    assert!(sequencer.state().platform_publish_visible);
    assert_abs_diff_eq!(
        sequencer.metrics().average_rating(),
        3.5,
        epsilon = EPSILON
    );
    assert_eq!(sequencer.metrics().total_reviews(), 46);
    assert!(sequencer.is_idle());
}

#[test]
fn manual_recovery_round_trip() {
    let mut sequencer = Sequencer::default();
    advance_ms(&mut sequencer, 3_500);
    assert!(sequencer.gift_click());

    // The portal hides and the gift appears on the same frame as the click.
    assert!(!sequencer.state().manager_portal_visible);
    assert!(sequencer.state().gift_visible);
    assert_eq!(sequencer.state().flow_kind, FlowKind::Recovery);

    advance_ms(&mut sequencer, 500);
    assert_eq!(
        sequencer.state().manager_response,
        Some(fixtures::MANAGER_APOLOGY)
    );

    advance_ms(&mut sequencer, 2_000);
    assert!(sequencer.state().recovered_visible);
    assert_eq!(
        sequencer.state().display_text(),
        fixtures::negative()[0].recovery_text
    );
    assert_eq!(sequencer.state().display_rating().unwrap().value(), 5);

    advance_ms(&mut sequencer, 2_000);
    assert!(sequencer.state().platform_publish_visible);
    assert_abs_diff_eq!(
        sequencer.metrics().average_rating(),
        3.4,
        epsilon = EPSILON
    );
    assert_eq!(sequencer.metrics().total_reviews(), 46);
}

#[test]
fn manual_path_cancels_the_scripted_continuation() {
    let mut sequencer = Sequencer::default();
    advance_ms(&mut sequencer, 3_500);
    assert!(sequencer.gift_click());

    // Sail far past every offset of the cancelled mount script.
    advance_ms(&mut sequencer, 60_000);
    assert_eq!(sequencer.state().flow_kind, FlowKind::Recovery);
    assert!(sequencer.state().recovered_visible);
    assert_eq!(sequencer.state().current_review.unwrap().id.0, 4);
    // Only the recovery publication moved the metrics.
    assert_eq!(sequencer.metrics().total_reviews(), 46);
}

#[test]
fn metrics_are_monotonic_across_a_full_session() {
    let mut sequencer = Sequencer::default();
    let mut previous_rating = sequencer.metrics().average_rating();
    let mut previous_total = sequencer.metrics().total_reviews();

    for _ in 0..400 {
        advance_ms(&mut sequencer, 100);
        let rating = sequencer.metrics().average_rating();
        let total = sequencer.metrics().total_reviews();
        assert!(rating >= previous_rating);
        assert!(total >= previous_total);
        previous_rating = rating;
        previous_total = total;
    }
}

#[test]
fn review_is_present_whenever_the_portal_shows() {
    let mut sequencer = Sequencer::default();
    for _ in 0..800 {
        advance_ms(&mut sequencer, 25);
        if sequencer.state().manager_portal_visible {
            assert!(sequencer.state().current_review.is_some());
        }
        assert!(sequencer.state().is_consistent());
    }
}

#[test]
fn stage_click_runs_the_full_recovery_through_the_flight() {
    let mut stage = stage::State::default();
    stage.tick(Duration::from_millis(3_500));
    stage.update(stage::Message::Portal(
        review_flow::ui::components::manager_portal::Message::SendGift,
    ));

    // Flight (1s) + response (0.5s) + recovered (2s) + published (2s).
    stage.tick(Duration::from_millis(1_000));
    assert!(stage.state().gift_visible);
    stage.tick(Duration::from_millis(500));
    assert_eq!(stage.state().manager_response, Some(fixtures::MANAGER_APOLOGY));
    stage.tick(Duration::from_millis(2_000));
    assert!(stage.state().recovered_visible);
    stage.tick(Duration::from_millis(2_000));
    assert!(stage.state().platform_publish_visible);
}

#[test]
fn faster_playback_reaches_the_same_states_sooner() {
    let mut fast = Sequencer::new(PlaybackSpeed::new(2.0));
    let mut real = Sequencer::default();

    fast.advance(Duration::from_millis(1_750));
    real.advance(Duration::from_millis(3_500));

    assert_eq!(
        fast.state().manager_portal_visible,
        real.state().manager_portal_visible
    );
    assert_eq!(fast.state().flow_kind, real.state().flow_kind);
}

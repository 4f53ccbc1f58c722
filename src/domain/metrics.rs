// SPDX-License-Identifier: MPL-2.0
//! Derived display counters shown in the stage header.
//!
//! Metrics are cosmetic: they only ever move when the sequencer completes a
//! flow, and they reset with the stage. The trend series is an explicit
//! fixed-size sliding window, evicting the oldest point on push.

use std::collections::VecDeque;

/// Number of points kept in the trend sparkline.
pub const TREND_WINDOW: usize = 8;

const SEED_AVERAGE: f32 = 3.2;
const SEED_TOTAL: u32 = 45;
const MAX_AVERAGE: f32 = 5.0;

/// Fixed-capacity sliding window of trend values.
#[derive(Debug, Clone)]
pub struct TrendSeries {
    points: VecDeque<f32>,
}

impl TrendSeries {
    /// Seeds the window with a gentle upward ramp starting at `base`.
    #[must_use]
    pub fn seeded(base: f32) -> Self {
        let points = (0..TREND_WINDOW)
            .map(|i| base + i as f32 * 0.1)
            .collect();
        Self { points }
    }

    /// Pushes a new point, evicting the oldest once the window is full.
    pub fn push(&mut self, value: f32) {
        if self.points.len() == TREND_WINDOW {
            self.points.pop_front();
        }
        self.points.push_back(value);
    }

    /// Most recent point.
    #[must_use]
    pub fn last(&self) -> Option<f32> {
        self.points.back().copied()
    }

    /// Points in chronological order.
    pub fn points(&self) -> impl Iterator<Item = f32> + '_ {
        self.points.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for TrendSeries {
    fn default() -> Self {
        Self::seeded(SEED_AVERAGE)
    }
}

/// Header counters: average rating, review count, and the trend window.
#[derive(Debug, Clone)]
pub struct Metrics {
    average_rating: f32,
    total_reviews: u32,
    trend: TrendSeries,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed flow: bumps the average by `rating_delta`
    /// (clamped to the five-star ceiling), counts one more review, and
    /// extends the trend from its latest point.
    pub fn record_published(&mut self, rating_delta: f32) {
        self.average_rating = (self.average_rating + rating_delta).min(MAX_AVERAGE);
        self.total_reviews = self.total_reviews.saturating_add(1);
        let next = self.trend.last().unwrap_or(self.average_rating) + rating_delta;
        self.trend.push(next.min(MAX_AVERAGE));
    }

    #[must_use]
    pub fn average_rating(&self) -> f32 {
        self.average_rating
    }

    #[must_use]
    pub fn total_reviews(&self) -> u32 {
        self.total_reviews
    }

    #[must_use]
    pub fn trend(&self) -> &TrendSeries {
        &self.trend
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            average_rating: SEED_AVERAGE,
            total_reviews: SEED_TOTAL,
            trend: TrendSeries::default(),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Domain types for the demo narrative.
//!
//! These modules hold plain data: the fixture reviews the demo animates,
//! the narrative state the sequencer mutates, and the derived display
//! metrics. None of them schedule anything on their own.

pub mod metrics;
pub mod narrative;
pub mod review;

pub use metrics::{Metrics, TrendSeries};
pub use narrative::{FlowKind, NarrativeState, Phase};
pub use review::{Rating, Review, ReviewId};

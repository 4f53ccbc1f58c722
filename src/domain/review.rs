// SPDX-License-Identifier: MPL-2.0
//! Review fixture data and supporting newtypes.
//!
//! The demo never ingests real reviews: everything shown on screen comes
//! from the fixed sample set below. Fixtures are `'static` and immutable;
//! the sequencer only ever borrows them.

use std::fmt;

/// Unique identifier for a fixture review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub u32);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Star rating, guaranteed to be within the 1–5 range.
///
/// This newtype enforces validity at the type level, so a fixture or a
/// display computation can never produce a zero- or six-star review.
///
/// # Example
///
/// ```
/// use review_flow::domain::Rating;
///
/// let stars = Rating::new(4);
/// assert_eq!(stars.value(), 4);
///
/// // Values outside range are clamped
/// assert_eq!(Rating::new(0).value(), 1);
/// assert_eq!(Rating::new(9).value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    /// Creates a new rating, clamping to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Returns the value as u8.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true for ratings a platform would surface as positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 >= 4
    }

    /// Const constructor for fixture tables. Panics at compile time on an
    /// out-of-range literal instead of clamping silently.
    #[must_use]
    pub const fn new_const(value: u8) -> Self {
        assert!(value >= 1 && value <= 5);
        Self(value)
    }
}

/// A single sample review shown by the demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub rating: Rating,
    pub text: &'static str,
    pub emoji: &'static str,
    pub customer_name: &'static str,
    /// Follow-up text shown once the manager gift lands. Only negative
    /// fixtures carry one.
    pub recovery_text: Option<&'static str>,
}

/// Fixture reviews and fixed narrative strings.
pub mod fixtures {
    use super::{Rating, Review, ReviewId};

    /// Apology posted by the manager during the recovery flow.
    pub const MANAGER_APOLOGY: &str = "We're sorry about your experience. \
        Please accept this small gift as a token of our commitment to making \
        things right.";

    const POSITIVE: [Review; 3] = [
        Review {
            id: ReviewId(1),
            rating: Rating::MAX,
            text: "Amazing service! The staff went above and beyond!",
            emoji: "😊",
            customer_name: "Sarah M.",
            recovery_text: None,
        },
        Review {
            id: ReviewId(2),
            rating: Rating::MAX,
            text: "Best dining experience ever! Will definitely return!",
            emoji: "🤩",
            customer_name: "John D.",
            recovery_text: None,
        },
        Review {
            id: ReviewId(3),
            rating: Rating::MAX,
            text: "Outstanding food and impeccable service!",
            emoji: "😍",
            customer_name: "Mike R.",
            recovery_text: None,
        },
    ];

    const NEGATIVE: [Review; 2] = [
        Review {
            id: ReviewId(4),
            rating: Rating::new_const(2),
            text: "Service was slow today",
            emoji: "😕",
            customer_name: "Alex P.",
            recovery_text: Some(
                "Thank you for the thoughtful gift! Service was much better this time!",
            ),
        },
        Review {
            id: ReviewId(5),
            rating: Rating::new_const(1),
            text: "Food wasn't up to usual standards",
            emoji: "😞",
            customer_name: "Chris L.",
            recovery_text: Some(
                "The manager's response was great! Much improved experience!",
            ),
        },
    ];

    /// The positive sample set (all five stars).
    #[must_use]
    pub fn positive() -> &'static [Review] {
        &POSITIVE
    }

    /// The negative sample set, each with a recovery follow-up.
    #[must_use]
    pub fn negative() -> &'static [Review] {
        &NEGATIVE
    }
}

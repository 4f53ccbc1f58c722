// SPDX-License-Identifier: MPL-2.0
//! Pure sub-views of the stage.
//!
//! Each component renders from borrowed narrative state and holds no
//! narrative logic of its own; the one interactive component (the manager
//! portal) only reports its button press upward.

pub mod manager_portal;
pub mod metrics_header;
pub mod platform_badge;
pub mod review_bubble;

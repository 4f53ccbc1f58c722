// SPDX-License-Identifier: MPL-2.0
//! `review_flow` is a scripted review-recovery demo built with the Iced GUI framework.
//!
//! It plays a fixed narrative — a negative review being won back with a
//! manager gift, then a positive review being published to a review
//! platform — driven by a data-driven timeline sequencer over a virtual
//! clock. It also demonstrates internationalization with Fluent and user
//! preference management.

#![doc(html_root_url = "https://docs.rs/review_flow/0.2.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod sequencer;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`stage`] - The animated demo stage (owns the timeline sequencer)
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Pure sub-views (review bubble, manager portal, platform badge, metrics header)
//! - [`widgets`] - Custom Iced widgets (trend sparkline)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod stage;
pub mod styles;
pub mod widgets;

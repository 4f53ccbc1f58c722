// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::stage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Stage(stage::Message),
    /// Periodic tick driving the timeline and render animations.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional timeline speed multiplier (clamped to 0.25x - 4.0x).
    pub speed: Option<f32>,
}

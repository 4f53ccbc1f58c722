// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick cadence while the stage animates. 50ms keeps the bobbing smooth
/// without redrawing a decorative demo at full frame rate.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Creates the periodic tick subscription driving the timeline.
///
/// The subscription is dropped as soon as the stage stops needing ticks, so
/// no timer outlives the demo and teardown cannot observe a late mutation.
pub fn create_tick_subscription(stage_running: bool) -> Subscription<Message> {
    if stage_running {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

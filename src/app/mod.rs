// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the localized chrome and the demo stage together
//! and translates top-level messages into stage ticks. Policy decisions
//! (window sizing, tick gating, locale and speed resolution) stay close to
//! the update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::sequencer::PlaybackSpeed;
use crate::ui::stage;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the stage and localization.
pub struct App {
    pub i18n: I18n,
    stage: stage::State,
    /// Wall-clock instant of the previous tick, for delta computation.
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.stage.state().phase)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load config: {err}");
            config::Config::default()
        });
        let i18n = I18n::new(flags.lang.clone(), &config);
        let speed = PlaybackSpeed::new(
            flags
                .speed
                .or(config.playback_speed)
                .unwrap_or(config::DEFAULT_PLAYBACK_SPEED),
        );

        let app = App {
            i18n,
            stage: stage::State::new(speed),
            last_tick: None,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.stage.needs_ticks())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                let delta = self
                    .last_tick
                    .map_or(std::time::Duration::ZERO, |previous| {
                        now.saturating_duration_since(previous)
                    });
                self.last_tick = Some(now);
                self.stage.tick(delta);
            }
            Message::Stage(stage_message) => {
                self.stage.update(stage_message);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        self.stage
            .view(stage::ViewEnv { i18n: &self.i18n })
            .map(Message::Stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phase;
    use std::time::Duration;

    fn new_app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn new_starts_in_intro() {
        let app = new_app();
        assert_eq!(app.stage.state().phase, Phase::Intro);
        assert!(app.stage.needs_ticks());
    }

    #[test]
    fn first_tick_establishes_baseline_without_advancing() {
        let mut app = new_app();
        let _ = app.update(Message::Tick(Instant::now()));
        // No delta could be computed yet, so the narrative has not moved.
        assert_eq!(app.stage.state().phase, Phase::Intro);
    }

    #[test]
    fn ticks_advance_the_narrative() {
        let mut app = new_app();
        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        let _ = app.update(Message::Tick(start + Duration::from_millis(1_600)));
        assert_eq!(app.stage.state().phase, Phase::Active);
        assert!(app.stage.state().current_review.is_some());
    }

    #[test]
    fn cli_speed_overrides_config() {
        let flags = Flags {
            lang: None,
            speed: Some(4.0),
        };
        let (mut app, _) = App::new(flags);
        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        // 250ms of wall clock is a full second of virtual time at 4x.
        let _ = app.update(Message::Tick(start + Duration::from_millis(260)));
        assert_eq!(app.stage.state().phase, Phase::Active);
    }
}

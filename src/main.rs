// SPDX-License-Identifier: MPL-2.0
use review_flow::app::{self, Flags};
use review_flow::config;
use review_flow::sequencer::PlaybackSpeed;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        speed: args.opt_value_from_str("--speed").unwrap_or(None),
    };

    // CLI overrides become the saved preferences for the next launch.
    if flags.lang.is_some() || flags.speed.is_some() {
        let mut config = config::load().unwrap_or_default();
        if let Some(lang) = &flags.lang {
            config.language = Some(lang.clone());
        }
        if let Some(speed) = flags.speed {
            config.playback_speed = Some(PlaybackSpeed::new(speed).value());
        }
        if let Err(err) = config::save(&config) {
            eprintln!("Failed to save preferences: {err}");
        }
    }

    app::run(flags)
}

// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the metrics header and the intro columns.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Review bubble surface, tinted by sentiment.
pub fn bubble(positive: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (fill, edge) = if positive {
            (palette::POSITIVE_100, palette::POSITIVE_500)
        } else {
            (palette::NEGATIVE_100, palette::NEGATIVE_500)
        };
        container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                color: edge,
                width: 2.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Small circular badge pinned to a bubble corner (gift, platform).
pub fn badge(fill: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

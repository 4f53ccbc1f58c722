// SPDX-License-Identifier: MPL-2.0
//! External review platform indicator.
//!
//! Shown when a flow publishes, with a pulsing star while the publication
//! animation runs. The four dots are the platform's brand mark.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Alignment, Color, Element};

const DOT_COLORS: [Color; 4] = [
    Color::from_rgb(0.898, 0.224, 0.208), // red
    Color::from_rgb(0.945, 0.651, 0.125), // yellow
    Color::from_rgb(0.263, 0.702, 0.404), // green
    Color::from_rgb(0.3, 0.6, 0.9),       // blue
];

/// Contextual data needed to render the badge.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Pulse scale for the star, 0.0–1.0 (render-only animation).
    pub pulse: f32,
}

/// Render the platform badge.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut dots = Row::new().spacing(spacing::XXS / 2.0);
    for color in DOT_COLORS {
        dots = dots.push(Text::new("●").size(typography::CAPTION / 2.0).color(color));
    }

    let mark = Column::new()
        .align_x(Alignment::Center)
        .push(
            Text::new("G")
                .size(typography::TITLE_MD)
                .color(palette::PRIMARY_500),
        )
        .push(dots);

    let star_size = sizing::STAR_SIZE + ctx.pulse * (sizing::STAR_SIZE / 3.0);
    let star = Text::new("★").size(star_size).color(palette::STAR_400);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .push(mark)
        .push(Text::new(ctx.i18n.tr("platform-badge-label")).size(typography::BODY))
        .push(star);

    Container::new(content)
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

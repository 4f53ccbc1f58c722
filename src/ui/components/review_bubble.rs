// SPDX-License-Identifier: MPL-2.0
//! Floating review bubble.
//!
//! Renders the current review with its emoji, star row, body text, and —
//! once the recovery flow delivers it — the manager response panel. Corner
//! badges signal the gift and the platform publication.

use crate::domain::NarrativeState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{Element, Length, Padding};

/// Contextual data needed to render the bubble.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a NarrativeState,
    /// Vertical bobbing offset in logical pixels (render-only animation).
    pub float_offset: f32,
}

/// Render the review bubble, or an empty element when no review is on stage.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(review) = ctx.state.current_review else {
        return Column::new().into();
    };

    let recovered = ctx.state.recovered_visible;
    let positive = recovered || review.rating.is_positive();

    let emoji = if recovered { "😊" } else { review.emoji };
    let text = ctx.state.display_text().unwrap_or(review.text);
    let stars = ctx
        .state
        .display_rating()
        .map_or(0, |rating| rating.value());

    let mut star_row = Row::new().spacing(spacing::XXS);
    for _ in 0..stars {
        star_row = star_row.push(
            Text::new("★")
                .size(sizing::STAR_SIZE)
                .color(palette::STAR_400),
        );
    }

    let mut body = Column::new()
        .spacing(spacing::XXS)
        .push(star_row)
        .push(Text::new(text).size(typography::BODY))
        .push(
            Text::new(review.customer_name)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    if let Some(response) = ctx.state.manager_response {
        let label = ctx.i18n.tr("bubble-manager-response-label");
        body = body.push(
            Container::new(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Text::new(label)
                            .size(typography::CAPTION)
                            .color(palette::PRIMARY_600),
                    )
                    .push(Text::new(response).size(typography::CAPTION)),
            )
            .padding(spacing::XS)
            .style(styles::container::badge(palette::PRIMARY_100)),
        );
    }

    let mut badges = Row::new().spacing(spacing::XS);
    if ctx.state.gift_visible {
        badges = badges.push(
            Container::new(Text::new("🎁").size(sizing::ICON_SM))
                .padding(spacing::XXS)
                .style(styles::container::badge(palette::GIFT_100)),
        );
    }
    if ctx.state.platform_publish_visible {
        badges = badges.push(
            Container::new(Text::new("🌐").size(sizing::ICON_SM))
                .padding(spacing::XXS)
                .style(styles::container::badge(palette::PRIMARY_100)),
        );
    }

    let content = Row::new()
        .spacing(spacing::SM)
        .push(Text::new(emoji).size(typography::EMOJI))
        .push(body);

    let bubble = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(badges)
            .push(content),
    )
    .padding(spacing::MD)
    .max_width(sizing::BUBBLE_MAX_WIDTH)
    .style(styles::container::bubble(positive));

    // The bobbing is plain top padding; containers cannot be offset
    // negatively, so the offset is kept in the 0..FLOAT_RANGE band.
    container(bubble)
        .padding(Padding::ZERO.top(ctx.float_offset))
        .width(Length::Shrink)
        .into()
}

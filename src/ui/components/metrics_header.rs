// SPDX-License-Identifier: MPL-2.0
//! Header metric cards: average rating, review count, and trend sparkline.

use crate::domain::Metrics;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::Sparkline;
use iced::widget::{Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub metrics: &'a Metrics,
}

/// Render the three metric cards.
///
/// The sparkline is a canvas widget holding its own geometry cache, so the
/// message type must be `'static` on top of the view lifetime.
pub fn view<'a, Message: 'a + 'static>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let rating_value = Row::new()
        .spacing(spacing::XXS)
        .align_y(Alignment::Center)
        .push(
            Text::new(format!("{:.1}", ctx.metrics.average_rating()))
                .size(typography::TITLE_MD)
                .color(palette::PRIMARY_600),
        )
        .push(
            Text::new("★")
                .size(sizing::STAR_SIZE)
                .color(palette::STAR_400),
        );
    let rating_card = card(
        ctx.i18n.tr("metrics-rating-label"),
        rating_value.into(),
    );

    let reviews_card = card(
        ctx.i18n.tr("metrics-reviews-label"),
        Text::new(ctx.metrics.total_reviews().to_string())
            .size(typography::TITLE_MD)
            .color(palette::PRIMARY_600)
            .into(),
    );

    let trend_card = card(
        ctx.i18n.tr("metrics-trend-label"),
        Sparkline::new(ctx.metrics.trend(), palette::POSITIVE_500).into_element(),
    );

    Row::new()
        .spacing(spacing::MD)
        .push(rating_card)
        .push(reviews_card)
        .push(trend_card)
        .width(Length::Fill)
        .into()
}

fn card<'a, Message: 'a>(label: String, value: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(label)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_700),
            )
            .push(value),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Stage rendering: maps narrative flags to visible elements.
//!
//! The mapping contract: `current_review` → review bubble,
//! `manager_portal_visible` → portal panel, `platform_publish_visible` →
//! platform badge, `gift_visible` → gift badge on the bubble. Everything
//! else here is cosmetic.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::components::{manager_portal, metrics_header, platform_badge, review_bubble};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::domain::Phase;
use iced::widget::{Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

/// Environment required to render the stage.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Render the stage for the current narrative state.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let content = match self.state().phase {
            Phase::Intro => intro(env.i18n),
            Phase::Active => self.active(env.i18n),
        };

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .into()
    }

    fn active<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = metrics_header::view(metrics_header::ViewContext {
            i18n,
            metrics: self.metrics(),
        });

        let status = Text::new(i18n.tr(self.status_key()))
            .size(typography::BODY)
            .color(palette::GRAY_700);

        let mut floor = Row::new()
            .spacing(spacing::LG)
            .align_y(Alignment::End)
            .width(Length::Fill);

        if self.state().manager_portal_visible {
            floor = floor.push(
                manager_portal::view(manager_portal::ViewContext {
                    i18n,
                    gift_in_flight: self.gift_in_flight(),
                })
                .map(Message::Portal),
            );
        } else if self.gift_in_flight() {
            // The gift travelling from the portal towards the bubble.
            floor = floor.push(Text::new("🎁").size(typography::EMOJI));
        }

        if self.state().platform_publish_visible {
            floor = floor.push(platform_badge::view(platform_badge::ViewContext {
                i18n,
                pulse: self.publish_pulse(),
            }));
        }

        let bubble = review_bubble::view(review_bubble::ViewContext {
            i18n,
            state: self.state(),
            float_offset: self.float_offset(),
        });

        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(status)
            .push(
                Container::new(bubble)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill),
            )
            .push(floor)
            .into()
    }
}

fn intro<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("intro-title")).size(typography::TITLE_LG);

    let negative = intro_column(
        "😕",
        i18n.tr("intro-negative-title"),
        i18n.tr("intro-negative-caption"),
    );
    let positive = intro_column(
        "🤩",
        i18n.tr("intro-positive-title"),
        i18n.tr("intro-positive-caption"),
    );

    Column::new()
        .spacing(spacing::XL)
        .align_x(Alignment::Center)
        .push(title)
        .push(
            Row::new()
                .spacing(spacing::XL)
                .push(negative)
                .push(positive),
        )
        .into()
}

fn intro_column<'a>(emoji: &'a str, title: String, caption: String) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Alignment::Center)
            .push(Text::new(emoji).size(typography::EMOJI))
            .push(Text::new(title).size(typography::BODY))
            .push(
                Text::new(caption)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_700),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

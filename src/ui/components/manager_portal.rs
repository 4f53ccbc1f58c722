// SPDX-License-Identifier: MPL-2.0
//! Manager portal panel with the "Send Recovery Gift" control.
//!
//! The portal is the only inbound surface of the demo: its button press is
//! forwarded verbatim to the sequencer's gift handler (after the local
//! flight animation completes). While the gift is in flight the button is
//! disabled so the click cannot be repeated.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{Alignment, Element};

/// Messages emitted by the portal.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    SendGift,
}

/// Contextual data needed to render the portal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// True while the gift flight animation runs.
    pub gift_in_flight: bool,
}

/// Render the manager portal.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let avatar = Container::new(Text::new("👤").size(sizing::ICON_MD))
        .padding(spacing::XS)
        .style(styles::container::badge(palette::PRIMARY_100));

    let title = Text::new(ctx.i18n.tr("portal-title")).size(typography::BODY);

    let label = ctx.i18n.tr("portal-send-gift");
    let send_button = if ctx.gift_in_flight {
        button(Text::new(label).size(typography::BODY)).style(styles::button::disabled())
    } else {
        button(Text::new(label).size(typography::BODY))
            .on_press(Message::SendGift)
            .style(styles::button::gift)
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .push(avatar)
        .push(title)
        .push(send_button);

    Container::new(content)
        .padding(spacing::LG)
        .width(sizing::PORTAL_WIDTH)
        .style(styles::container::panel)
        .into()
}

//! Section Divider
//!
//! A short amber bar that sits between a slide's badge and its body.

use iced::widget::{container, Space};
use iced::{border, Border, Element, Length, Theme};

use crate::Message;
use super::palette;

/// Render the 60x3 accent bar
pub fn view_section_divider() -> Element<'static, Message> {
    container(Space::new().width(Length::Fixed(60.0)).height(Length::Fixed(3.0)))
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::AMBER.into()),
            border: Border {
                radius: border::radius(2.0),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

//! Small building blocks shared by the slide views

use iced::widget::{container, row, text, Container};
use iced::{border, Border, Color, Element, Font, Padding, Theme};

use deck_core::content::Stat;

use crate::Message;
use super::palette;

/// Bold variant of the default font
pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Uppercase pill shown above slide headings
pub fn badge(label: &str, color: Color) -> Element<'static, Message> {
    container(text(label.to_uppercase()).size(11).font(BOLD).color(color))
        .padding(Padding::from([4, 14]))
        .style(move |_theme: &Theme| container::Style {
            background: Some(palette::faded(color, 0.09).into()),
            border: Border {
                color: palette::faded(color, 0.25),
                width: 1.0,
                radius: border::radius(100.0),
            },
            ..container::Style::default()
        })
        .into()
}

/// Rounded translucent panel with an optional coloured edge
pub fn panel<'a>(content: impl Into<Element<'a, Message>>, edge: Option<Color>) -> Container<'a, Message> {
    container(content)
        .padding(Padding::from([18, 20]))
        .style(move |_theme: &Theme| container::Style {
            background: Some(palette::white(0.02).into()),
            border: Border {
                color: edge.unwrap_or(palette::white(0.06)),
                width: if edge.is_some() { 2.0 } else { 1.0 },
                radius: border::radius(12.0),
            },
            ..container::Style::default()
        })
}

/// Large figure with a caption, e.g. "81.35 %  R² Explained"
pub fn stat_card(stat: &Stat) -> Element<'static, Message> {
    let color = palette::accent(stat.accent);
    let figure = match stat.unit {
        Some(unit) => row![
            text(stat.value).size(34).font(Font::MONOSPACE).color(color),
            text(unit).size(16).color(palette::white(0.4)),
        ]
        .spacing(2),
        None => row![text(stat.value).size(34).font(Font::MONOSPACE).color(color)],
    };

    panel(
        iced::widget::column![
            figure,
            text(stat.label.to_uppercase()).size(11).color(palette::white(0.4)),
        ]
        .spacing(10)
        .align_x(iced::Alignment::Center),
        None,
    )
    .width(iced::Length::FillPortion(1))
    .into()
}

/// Monospace block for the model formula
pub fn formula_block(formula: &'static str) -> Element<'static, Message> {
    container(text(formula).size(14).font(Font::MONOSPACE).color(palette::FORMULA_TEXT))
        .padding(Padding::from([20, 28]))
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.35).into()),
            border: Border {
                color: palette::faded(palette::AMBER, 0.15),
                width: 1.0,
                radius: border::radius(12.0),
            },
            ..container::Style::default()
        })
        .into()
}

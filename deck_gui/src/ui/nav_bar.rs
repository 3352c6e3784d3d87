//! Navigation Bar (Bottom)
//!
//! Prev button, one dot per slide (label as tooltip), Next button, and the
//! "n / N — label" position line. Prev is disabled on the first slide and
//! Next on the last.

use iced::widget::{button, column, container, row, text, tooltip, Row, Space};
use iced::{border, Alignment, Background, Border, Element, Length, Padding, Theme};

use deck_core::{NavCommand, SlideId, SlideNavigator};

use crate::Message;
use super::shared::{blocks, palette};

/// Render the navigation controls for the navigator's current state
pub fn view_nav_bar(navigator: &SlideNavigator) -> Element<'static, Message> {
    let current = navigator.current();

    let prev = nav_button("← Prev", NavCommand::Prev, !navigator.is_first(), false);
    let next = nav_button("Next →", NavCommand::Next, !navigator.is_last(), true);

    let dots = Row::with_children(
        SlideId::ALL
            .iter()
            .map(|slide| view_dot(*slide, slide.index() == current)),
    )
    .spacing(8)
    .align_y(Alignment::Center);

    let position = SlideId::from_index(current)
        .map(|slide| slide.position_label())
        .unwrap_or_default();

    column![
        row![prev, dots, next]
            .spacing(16)
            .align_y(Alignment::Center),
        text(position.to_uppercase())
            .size(11)
            .font(blocks::BOLD)
            .color(palette::white(0.2)),
    ]
    .spacing(14)
    .align_x(Alignment::Center)
    .padding(Padding::from([16, 0]))
    .width(Length::Fill)
    .into()
}

fn nav_button(label: &'static str, command: NavCommand, enabled: bool, primary: bool) -> Element<'static, Message> {
    let accent = if primary { palette::AMBER } else { palette::white(0.6) };

    button(text(label).size(14).font(blocks::BOLD))
        .on_press_maybe(enabled.then_some(Message::Navigate(command)))
        .padding(Padding::from([10, 18]))
        .style(move |_theme: &Theme, status| {
            let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
            let (text_color, edge) = match status {
                button::Status::Disabled => (palette::white(0.15), palette::white(0.08)),
                _ => (accent, palette::faded(accent, 0.25)),
            };
            button::Style {
                background: Some(Background::Color(if hovered {
                    palette::faded(accent, 0.12)
                } else {
                    palette::white(0.05)
                })),
                text_color,
                border: Border {
                    color: edge,
                    width: 1.0,
                    radius: border::radius(10.0),
                },
                ..button::Style::default()
            }
        })
        .into()
}

fn view_dot(slide: SlideId, active: bool) -> Element<'static, Message> {
    let width = if active { 24.0 } else { 8.0 };
    let fill = if active { palette::AMBER } else { palette::white(0.1) };

    let dot = button(Space::new().width(Length::Fixed(width)).height(Length::Fixed(8.0)))
        .on_press(Message::Navigate(NavCommand::GoTo(slide.index())))
        .padding(0)
        .style(move |_theme: &Theme, status| {
            let hovered = matches!(status, button::Status::Hovered);
            button::Style {
                background: Some(Background::Color(if hovered && !active {
                    palette::white(0.3)
                } else {
                    fill
                })),
                border: Border {
                    radius: border::radius(4.0),
                    ..Border::default()
                },
                ..button::Style::default()
            }
        });

    tooltip(
        dot,
        container(text(slide.label()).size(11).color(palette::TEXT))
            .padding(Padding::from([4, 8]))
            .style(container::rounded_box),
        tooltip::Position::Top,
    )
    .into()
}

//! Text-only slide bodies
//!
//! Title tags, problem cards, objectives, methodology steps and summary
//! takeaways.

use iced::widget::{column, container, row, text, Column, Row, Space};
use iced::{border, Alignment, Border, Element, Font, Length, Padding, Theme};

use deck_core::content::{Card, Objective};

use crate::Message;
use super::shared::{blocks, palette};

/// Title slide: a row of technique tags
pub fn view_tags(tags: &'static [&'static str]) -> Element<'static, Message> {
    let chips = tags.iter().map(|tag| {
        container(text(*tag).size(12).font(blocks::BOLD).color(palette::white(0.6)))
            .padding(Padding::from([8, 18]))
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::white(0.04).into()),
                border: Border {
                    color: palette::white(0.08),
                    width: 1.0,
                    radius: border::radius(8.0),
                },
                ..container::Style::default()
            })
            .into()
    });

    column![
        Space::new().height(20),
        Row::with_children(chips).spacing(12),
    ]
    .into()
}

/// Problem slide: risk cards in a two-column grid
pub fn view_cards(cards: &'static [Card]) -> Element<'static, Message> {
    let rows = cards.chunks(2).map(|pair| {
        Row::with_children(pair.iter().map(view_card))
            .spacing(16)
            .into()
    });

    Column::with_children(rows).spacing(16).into()
}

fn view_card(card: &Card) -> Element<'static, Message> {
    blocks::panel(
        column![
            text(card.icon).size(24),
            Space::new().height(10),
            text(card.title).size(14).font(blocks::BOLD).color(palette::TEXT),
            Space::new().height(6),
            text(card.description).size(13).color(palette::white(0.45)),
        ],
        None,
    )
    .width(Length::FillPortion(1))
    .into()
}

/// Objectives slide: numbered objectives with a coloured edge
pub fn view_objectives(objectives: &'static [Objective]) -> Element<'static, Message> {
    let items = objectives.iter().map(|objective| {
        let color = palette::accent(objective.accent);
        blocks::panel(
            row![
                text(objective.number).size(28).font(Font::MONOSPACE).color(color),
                column![
                    text(objective.title).size(16).font(blocks::BOLD).color(palette::TEXT),
                    text(objective.description).size(13).color(palette::white(0.45)),
                ]
                .spacing(4),
            ]
            .spacing(20)
            .align_y(Alignment::Start),
            Some(palette::faded(color, 0.6)),
        )
        .width(Length::Fill)
        .into()
    });

    Column::with_children(items).spacing(16).into()
}

/// Methodology slide: numbered steps, the last one highlighted
pub fn view_steps(steps: &'static [&'static str]) -> Element<'static, Message> {
    let last = steps.len().saturating_sub(1);
    let items = steps.iter().enumerate().map(|(i, step)| {
        let marker_color = if i == last { palette::INDIGO } else { palette::white(0.4) };
        row![
            container(text((i + 1).to_string()).size(10).font(blocks::BOLD).color(marker_color))
                .width(Length::Fixed(22.0))
                .height(Length::Fixed(22.0))
                .center_x(Length::Fixed(22.0))
                .center_y(Length::Fixed(22.0))
                .style(move |_theme: &Theme| container::Style {
                    background: Some(palette::faded(marker_color, 0.15).into()),
                    border: Border {
                        color: palette::faded(marker_color, 0.4),
                        width: 1.0,
                        radius: border::radius(11.0),
                    },
                    ..container::Style::default()
                }),
            text(*step).size(13.5).color(palette::white(0.65)),
        ]
        .spacing(14)
        .align_y(Alignment::Center)
        .into()
    });

    Column::with_children(items).spacing(12).into()
}

/// Summary slide: bulleted takeaways
pub fn view_takeaways(items: &'static [&'static str]) -> Element<'static, Message> {
    let rows = items.iter().map(|item| {
        blocks::panel(
            row![
                container(Space::new().width(Length::Fixed(8.0)).height(Length::Fixed(8.0)))
                    .style(|_theme: &Theme| container::Style {
                        background: Some(palette::AMBER.into()),
                        border: Border {
                            radius: border::radius(4.0),
                            ..Border::default()
                        },
                        ..container::Style::default()
                    }),
                text(*item).size(14).color(palette::white(0.55)),
            ]
            .spacing(14)
            .align_y(Alignment::Center),
            None,
        )
        .width(Length::Fill)
        .into()
    });

    Column::with_children(rows).spacing(14).max_width(520).into()
}

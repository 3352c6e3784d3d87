//! Model slides
//!
//! The regression formula with its fit statistics, and the fly ash
//! hypothesis test results.

use iced::widget::{column, row, text, Column, Row, Space};
use iced::{Element, Font, Length};

use deck_core::content::{HypothesisTest, Stat};

use crate::Message;
use super::shared::{blocks, palette};

/// Formula block followed by a row of stat cards
pub fn view_formula(formula: &'static str, stats: &'static [Stat]) -> Element<'static, Message> {
    column![
        blocks::formula_block(formula),
        Space::new().height(28),
        Row::with_children(stats.iter().map(blocks::stat_card))
            .spacing(12)
            .width(Length::Fill),
    ]
    .into()
}

/// One panel per test: name, hypothesis, p-value line, verdict
pub fn view_tests(tests: &'static [HypothesisTest]) -> Element<'static, Message> {
    let panels = tests.iter().map(|t| {
        let color = palette::accent(t.accent);
        blocks::panel(
            column![
                row![
                    text(t.test).size(11).font(Font::MONOSPACE).color(color),
                    text(t.hypothesis).size(12).color(palette::white(0.3)),
                ]
                .spacing(10),
                text(t.result).size(13).color(palette::white(0.6)),
                text(t.verdict).size(14).font(blocks::BOLD).color(palette::TEXT),
            ]
            .spacing(5),
            Some(palette::faded(color, 0.6)),
        )
        .width(Length::Fill)
        .into()
    });

    Column::with_children(panels).spacing(16).into()
}

//! Business impact slide
//!
//! Before/after cement costs for one project, the total saving and three
//! headline figures. Costs come from [`ImpactScenario::summarize`].

use iced::widget::{column, container, row, text, Column, Space};
use iced::{border, Alignment, Border, Color, Element, Font, Length, Padding, Theme};

use deck_core::calculations::impact::{format_pounds_whole, ImpactScenario, MixOption};

use crate::Message;
use super::shared::{blocks, palette};

/// Render the comparison for `scenario`
pub fn view(scenario: &ImpactScenario, strength_note: &'static str, co2_note: &'static str) -> Element<'static, Message> {
    let summary = scenario.summarize();

    let before = view_mix_panel(
        "BEFORE: CONSERVATIVE MIX",
        &scenario.baseline,
        summary.baseline_cost_per_m3,
        summary.baseline_total,
        palette::RED,
    );
    let after = view_mix_panel(
        "AFTER: MODEL-OPTIMISED MIX",
        &scenario.optimised,
        summary.optimised_cost_per_m3,
        summary.optimised_total,
        palette::GREEN,
    );

    let headline = container(
        row![
            column![
                text("Saving on this single project").size(12).color(palette::white(0.4)),
                text(format_pounds_whole(summary.project_saving))
                    .size(32)
                    .font(Font::MONOSPACE)
                    .color(palette::GREEN),
            ]
            .spacing(4),
            Space::new().width(Length::Fill),
            view_figure(format!("{:.1}%", summary.reduction_percent), "COST REDUCTION"),
            view_figure(strength_note.to_string(), "PREDICTED STRENGTH"),
            view_figure(co2_note.to_string(), "CO₂ REDUCED"),
        ]
        .spacing(24)
        .align_y(Alignment::Center),
    )
    .padding(Padding::from([22, 28]))
    .width(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(palette::faded(palette::GREEN, 0.06).into()),
        border: Border {
            color: palette::faded(palette::GREEN, 0.2),
            width: 1.0,
            radius: border::radius(14.0),
        },
        ..container::Style::default()
    });

    column![
        row![before, after].spacing(16),
        Space::new().height(24),
        headline,
    ]
    .into()
}

fn view_mix_panel(
    title: &'static str,
    mix: &MixOption,
    cost_per_m3: f64,
    total: f64,
    color: Color,
) -> Element<'static, Message> {
    let line = |label: &'static str, value: String| {
        row![
            text(label).size(13).color(palette::white(0.5)),
            text(value).size(13).font(blocks::BOLD).color(palette::TEXT),
        ]
        .spacing(6)
    };

    let slag = if mix.slag_kg_m3 > 0.0 {
        format!("{:.0} kg/m³", mix.slag_kg_m3)
    } else {
        "0 kg".to_string()
    };

    let body: Column<'static, Message> = column![
        text(title).size(11).font(blocks::BOLD).color(color),
        Space::new().height(8),
        line("Cement:", format!("{:.0} kg/m³", mix.cement_kg_m3)),
        line("Slag:", slag),
        line("Cost:", format!("£{:.2}/m³ cement alone", cost_per_m3)),
        row![
            text("Total cement cost:").size(13).color(palette::white(0.5)),
            text(format_pounds_whole(total)).size(13).font(blocks::BOLD).color(color),
        ]
        .spacing(6),
    ]
    .spacing(4);

    container(body)
        .padding(24)
        .width(Length::FillPortion(1))
        .style(move |_theme: &Theme| container::Style {
            background: Some(palette::faded(color, 0.04).into()),
            border: Border {
                color: palette::faded(color, 0.12),
                width: 1.0,
                radius: border::radius(14.0),
            },
            ..container::Style::default()
        })
        .into()
}

fn view_figure(value: String, caption: &'static str) -> Element<'static, Message> {
    column![
        text(value).size(20).font(Font::MONOSPACE).color(palette::AMBER),
        text(caption).size(10).color(palette::white(0.3)),
    ]
    .align_x(Alignment::Center)
    .into()
}

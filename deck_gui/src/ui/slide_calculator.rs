//! Live calculator slide
//!
//! Shows:
//! - One slider per mix field, clamped to the field's range
//! - Predicted strength (one decimal, MPa) coloured by tier
//! - Cement cost saving against the 400 kg/m³ baseline
//! - Tier icon and label

use iced::widget::{button, column, container, row, slider, text, Column, Space};
use iced::{border, Alignment, Border, Color, Element, Font, Length, Padding, Theme};

use deck_core::calculations::strength::BASELINE_CEMENT_KG_M3;
use deck_core::{estimate, MixField, MixInputs};

use crate::Message;
use super::shared::{blocks, palette};

/// Render sliders and the live result side by side
pub fn view(mix: &MixInputs) -> Element<'static, Message> {
    row![
        view_sliders(mix).width(Length::FillPortion(3)),
        view_result(mix),
    ]
    .spacing(28)
    .align_y(Alignment::Start)
    .into()
}

fn slider_color(field: MixField) -> Color {
    match field {
        MixField::Cement => palette::AMBER,
        MixField::Slag => palette::GREEN,
        MixField::Water => palette::BLUE,
        MixField::Superplasticizer => palette::PURPLE,
        MixField::Age => palette::RED,
    }
}

fn view_sliders(mix: &MixInputs) -> Column<'static, Message> {
    let mut sliders: Column<'static, Message> = column![].spacing(18);

    for field in MixField::ALL {
        let value = mix.get(field);
        let color = slider_color(field);

        let header = row![
            text(field.display_name()).size(13).font(blocks::BOLD).color(palette::white(0.6)),
            Space::new().width(Length::Fill),
            text(format!("{:.0} {}", value, field.unit()))
                .size(13)
                .font(Font::MONOSPACE)
                .color(color),
        ]
        .align_y(Alignment::Center);

        let control = slider(field.range(), value, move |v| Message::MixChanged(field, v))
            .step(1.0)
            .style(move |theme: &Theme, status| {
                let mut style = slider::default(theme, status);
                style.rail.backgrounds = (color.into(), palette::white(0.1).into());
                style.handle.background = color.into();
                style
            });

        sliders = sliders.push(column![header, control].spacing(5));
    }

    sliders.push(
        button(text("Reset mix").size(11))
            .on_press(Message::ResetMix)
            .padding(Padding::from([4, 10]))
            .style(button::secondary),
    )
}

fn view_result(mix: &MixInputs) -> Element<'static, Message> {
    let result = estimate(mix);
    let strength_color = palette::tier(result.tier);
    let saving_color = if result.is_saving() { palette::GREEN } else { palette::RED };

    let saving_box = container(
        column![
            text(format!("vs {:.0} kg/m³ cement baseline", BASELINE_CEMENT_KG_M3))
                .size(11)
                .color(palette::white(0.35)),
            row![
                text(result.saving_display())
                    .size(20)
                    .font(Font::MONOSPACE)
                    .color(saving_color),
                text("/m³ saving").size(12).color(palette::white(0.35)),
            ]
            .spacing(4)
            .align_y(Alignment::End),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .padding(Padding::from([12, 18]))
    .width(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.3).into()),
        border: Border {
            radius: border::radius(10.0),
            ..Border::default()
        },
        ..container::Style::default()
    });

    container(
        column![
            text("PREDICTED STRENGTH").size(11).color(palette::white(0.4)),
            Space::new().height(8),
            text(result.strength_display())
                .size(52)
                .font(Font::MONOSPACE)
                .color(strength_color),
            text("MPa").size(14).color(palette::white(0.4)),
            Space::new().height(24),
            saving_box,
            Space::new().height(14),
            text(result.tier.to_string()).size(12).color(palette::white(0.5)),
        ]
        .align_x(Alignment::Center),
    )
    .padding(28)
    .width(Length::FillPortion(2))
    .style(move |_theme: &Theme| container::Style {
        background: Some(palette::faded(strength_color, 0.05).into()),
        border: Border {
            color: palette::faded(strength_color, 0.2),
            width: 1.0,
            radius: border::radius(20.0),
        },
        ..container::Style::default()
    })
    .into()
}

//! Slide Stage
//!
//! Renders the current slide: badge, heading, lead paragraph, the
//! slide-specific body and an optional footnote. While a transition is in
//! flight the stage is covered by a background-coloured veil whose opacity
//! follows the navigator, and the content drops by up to 8px.

use iced::widget::{column, container, row, scrollable, stack, text, Column, Space};
use iced::{Element, Length, Padding, Theme};

use deck_core::content::{self, SlideBody, SlideContent};
use deck_core::SlideId;

use crate::{App, Message};
use super::shared::{blocks, divider, palette};
use super::{slide_calculator, slide_impact, slide_model, slide_text};

/// Largest downward offset of the content while hidden (px)
const DROP_PX: f32 = 8.0;

/// Render the slide area for the navigator's current slide
pub fn view_stage(app: &App, slide: SlideId, visibility: f32) -> Element<'_, Message> {
    let content = content::content(slide);
    let hidden = (1.0 - visibility).clamp(0.0, 1.0);

    let mut body = column![
        Space::new().height(Length::Fixed(DROP_PX * hidden)),
        view_heading(&content),
        Space::new().height(20),
        view_body(app, &content),
    ];
    if let Some(note) = content.footnote {
        body = body
            .push(Space::new().height(24))
            .push(text(note).size(13).color(palette::white(0.35)));
    }
    let body = body.max_width(760);

    let page = container(scrollable(
        container(body)
            .padding(Padding::from([48, 56]))
            .center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(palette::white(0.015).into()),
        ..container::Style::default()
    });

    if hidden > 0.0 {
        let veil = container(Space::new().width(Length::Fill).height(Length::Fill))
            .style(move |_theme: &Theme| container::Style {
                background: Some(palette::faded(palette::BACKGROUND, hidden).into()),
                ..container::Style::default()
            });
        stack![page, veil].into()
    } else {
        page.into()
    }
}

/// Badge, heading (with emphasized word) and lead paragraph
fn view_heading(content: &SlideContent) -> Column<'static, Message> {
    let (before, emphasis, after) = content.heading_parts();
    let heading_size = if content.slide == SlideId::Title { 52 } else { 36 };

    let mut heading = row![text(before).size(heading_size).font(blocks::BOLD).color(palette::TEXT)];
    if let Some((word, accent)) = emphasis {
        heading = heading
            .push(text(word).size(heading_size).font(blocks::BOLD).color(palette::accent(accent)))
            .push(text(after).size(heading_size).font(blocks::BOLD).color(palette::TEXT));
    }

    let mut block = column![
        blocks::badge(content.badge, palette::accent(content.accent)),
        Space::new().height(12),
        divider::view_section_divider(),
        Space::new().height(12),
        heading,
    ];
    if let Some(lead) = content.lead {
        block = block.push(text(lead).size(15).color(palette::white(0.45)));
    }
    block.spacing(4)
}

/// Dispatch to the view for this slide's body
fn view_body<'a>(app: &'a App, content: &SlideContent) -> Element<'a, Message> {
    match content.body {
        SlideBody::Tags(tags) => slide_text::view_tags(tags),
        SlideBody::Cards(cards) => slide_text::view_cards(cards),
        SlideBody::Objectives(objectives) => slide_text::view_objectives(objectives),
        SlideBody::Steps(steps) => slide_text::view_steps(steps),
        SlideBody::Takeaways(items) => slide_text::view_takeaways(items),
        SlideBody::Formula { formula, stats } => slide_model::view_formula(formula, stats),
        SlideBody::Tests(tests) => slide_model::view_tests(tests),
        SlideBody::Calculator => slide_calculator::view(&app.mix),
        SlideBody::Impact { strength_note, co2_note } => {
            slide_impact::view(&app.impact, strength_note, co2_note)
        }
    }
}

//! # StrataForge Deck
//!
//! Nine-slide presentation on predicting concrete compressive strength,
//! built with Iced. Navigation goes through [`SlideNavigator`]; the live
//! calculator slide re-evaluates the strength model on every slider change.
//!
//! ## Controls
//!
//! - ArrowRight / Space: next slide
//! - ArrowLeft: previous slide
//! - Prev / Next buttons and one dot per slide
//!
//! The key listener is a subscription, so it is installed once when the
//! window opens and dropped when it closes.

mod ui;

use std::time::{Duration, Instant};

use iced::widget::{column, container};
use iced::{event, keyboard, window, Element, Event, Length, Size, Subscription, Task, Theme};

use deck_core::calculations::ImpactScenario;
use deck_core::{
    DeckKey, DeckSettings, MixField, MixInputs, NavCommand, NavOutcome, SlideId, SlideNavigator,
};

use ui::shared::palette;

/// Frame interval for transition ticks
const TICK_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> iced::Result {
    if let Err(e) = deck_core::logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let settings = DeckSettings::from_env_or_default();
    let window_size = Size::new(settings.window_width, settings.window_height);
    tracing::info!(start_slide = settings.start_slide, "starting StrataForge deck");

    iced::application(move || App::new(&settings), App::update, App::view)
        .title("StrataForge: Predicting Concrete Strength")
        .subscription(App::subscription)
        .window_size(window_size)
        .run()
}

/// Application state
pub struct App {
    pub navigator: SlideNavigator,
    /// Calculator inputs; kept while moving between slides
    pub mix: MixInputs,
    /// Scenario shown on the impact slide
    pub impact: ImpactScenario,
    /// Time of the latest input or tick, used for the fade level
    pub last_tick: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(NavCommand),
    Tick(Instant),
    MixChanged(MixField, f64),
    ResetMix,
}

impl App {
    fn new(settings: &DeckSettings) -> (Self, Task<Message>) {
        let app = App {
            navigator: SlideNavigator::new(settings.start_slide, settings.transition),
            mix: MixInputs::default(),
            impact: ImpactScenario::warehouse_foundation(),
            last_tick: Instant::now(),
        };
        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(command) => {
                let now = Instant::now();
                self.last_tick = now;
                if let NavOutcome::Started { from, to } = command.apply(&mut self.navigator, now) {
                    tracing::info!(from, to, "navigating to {}", slide_label(to));
                }
            }
            Message::Tick(now) => {
                self.last_tick = now;
                self.navigator.advance(now);
            }
            Message::MixChanged(field, value) => {
                self.mix.set(field, value);
            }
            Message::ResetMix => {
                self.mix = MixInputs::default();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let slide = SlideId::from_index(self.navigator.current()).unwrap_or(SlideId::Title);
        let visibility = self.navigator.visibility(self.last_tick);

        let content = column![
            ui::stage::view_stage(self, slide, visibility),
            ui::nav_bar::view_nav_bar(&self.navigator),
        ];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::BACKGROUND.into()),
                text_color: Some(palette::TEXT),
                ..container::Style::default()
            })
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = event::listen_with(handle_event);

        if self.navigator.is_transitioning() {
            Subscription::batch([keys, iced::time::every(TICK_INTERVAL).map(Message::Tick)])
        } else {
            keys
        }
    }
}

fn slide_label(index: usize) -> &'static str {
    SlideId::from_index(index).map(|s| s.label()).unwrap_or("?")
}

/// Translate window key presses into navigation commands
fn handle_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            deck_key(&key).map(|k| Message::Navigate(NavCommand::for_key(k)))
        }
        _ => None,
    }
}

fn deck_key(key: &keyboard::Key) -> Option<DeckKey> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::ArrowRight) => Some(DeckKey::ArrowRight),
        keyboard::Key::Named(Named::ArrowLeft) => Some(DeckKey::ArrowLeft),
        keyboard::Key::Named(Named::Space) => Some(DeckKey::Space),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&DeckSettings::default()).0
    }

    #[test]
    fn test_key_mapping() {
        use keyboard::key::Named;
        assert_eq!(deck_key(&keyboard::Key::Named(Named::ArrowRight)), Some(DeckKey::ArrowRight));
        assert_eq!(deck_key(&keyboard::Key::Named(Named::Space)), Some(DeckKey::Space));
        assert_eq!(deck_key(&keyboard::Key::Named(Named::ArrowLeft)), Some(DeckKey::ArrowLeft));
        assert_eq!(deck_key(&keyboard::Key::Named(Named::Enter)), None);
    }

    #[test]
    fn test_navigate_then_tick() {
        let mut app = app();
        let _ = app.update(Message::Navigate(NavCommand::Next));
        assert!(app.navigator.is_transitioning());

        // a second press inside the transition window is dropped
        let _ = app.update(Message::Navigate(NavCommand::Next));

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(app.navigator.current(), 1);
        assert!(!app.navigator.is_transitioning());
    }

    #[test]
    fn test_slider_changes_are_clamped() {
        let mut app = app();
        let _ = app.update(Message::MixChanged(MixField::Water, 999.0));
        assert_eq!(app.mix.water_kg_m3, 250.0);

        let _ = app.update(Message::ResetMix);
        assert_eq!(app.mix, MixInputs::default());
    }

    #[test]
    fn test_start_slide_from_settings() {
        let settings = DeckSettings {
            start_slide: SlideId::Calculator.index(),
            ..DeckSettings::default()
        };
        let (app, _) = App::new(&settings);
        assert_eq!(app.navigator.current(), 6);
    }
}

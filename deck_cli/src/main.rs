//! # StrataForge Terminal Presenter
//!
//! Line-oriented version of the deck for terminals and remote sessions.
//! Prints the current slide, then reads one command per line:
//!
//! - `n` or empty line: next slide
//! - `p`: previous slide
//! - `1`..`9`: jump to a slide
//! - `c`: enter a mix and print the strength estimate
//! - `q`: quit

use std::io::{self, BufRead, Write};
use std::time::Instant;

use deck_core::calculations::impact::{format_pounds_whole, ImpactScenario};
use deck_core::content::{self, SlideBody, SlideContent};
use deck_core::{
    estimate, DeckError, DeckResult, DeckSettings, MixField, MixInputs, NavCommand, NavOutcome,
    SlideId, SlideNavigator, TransitionTiming, SLIDE_COUNT,
};

/// A parsed line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Navigate(NavCommand),
    Calculate,
    Quit,
}

fn parse_command(line: &str) -> DeckResult<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "n" | "next" => Ok(Command::Navigate(NavCommand::Next)),
        "p" | "prev" => Ok(Command::Navigate(NavCommand::Prev)),
        "c" | "calc" => Ok(Command::Calculate),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => {
            let number: usize = other
                .parse()
                .map_err(|_| DeckError::invalid_input("command", other, "Expected n, p, c, q or a slide number"))?;
            if number == 0 || number > SLIDE_COUNT {
                return Err(DeckError::slide_out_of_range(number.saturating_sub(1), SLIDE_COUNT));
            }
            Ok(Command::Navigate(NavCommand::GoTo(number - 1)))
        }
    }
}

fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

/// Ask for each mix field, keeping the current value on empty input
fn prompt_mix(current: MixInputs) -> MixInputs {
    let mut mix = current;
    for field in MixField::ALL {
        let label = format!(
            "{} ({}, {:.0}-{:.0}) [{:.0}]: ",
            field.display_name(),
            field.unit(),
            field.min(),
            field.max(),
            mix.get(field)
        );
        let Some(raw) = prompt(&label) else {
            break;
        };
        if raw.trim().is_empty() {
            continue;
        }
        match MixInputs::parse_value(field, &raw) {
            Ok(value) => {
                mix.set(field, value);
                if mix.get(field) != value {
                    println!("  clamped to {:.0} {}", mix.get(field), field.unit());
                }
            }
            Err(e) => println!("  {} (keeping {:.0})", e, mix.get(field)),
        }
    }
    mix
}

fn print_prediction(mix: &MixInputs) {
    let result = estimate(mix);

    println!();
    println!("═══════════════════════════════════════");
    println!("  STRENGTH PREDICTION");
    println!("═══════════════════════════════════════");
    for field in MixField::ALL {
        println!("  {:<17} {:>5.0} {}", field.display_name(), mix.get(field), field.unit());
    }
    println!();
    println!("  Predicted strength: {} MPa", result.strength_display());
    println!("  Saving vs 400 kg/m³ baseline: {}/m³", result.saving_display());
    println!("  {}", result.tier);
    println!("═══════════════════════════════════════");
    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&serde_json::json!({ "inputs": mix, "result": result })) {
        println!("{}", json);
    }
}

fn print_slide(slide: SlideId, mix: &MixInputs) {
    let content = content::content(slide);
    println!();
    println!("── {} ──", slide.position_label());
    println!("[{}]", content.badge.to_uppercase());
    println!("{}", content.heading);
    if let Some(lead) = content.lead {
        println!("{}", lead);
    }
    println!();
    print_body(&content, mix);
    if let Some(note) = content.footnote {
        println!();
        println!("{}", note);
    }
    println!();
}

fn print_body(content: &SlideContent, mix: &MixInputs) {
    match content.body {
        SlideBody::Tags(tags) => println!("  {}", tags.join("  ·  ")),
        SlideBody::Cards(cards) => {
            for card in cards {
                println!("  {} {}: {}", card.icon, card.title, card.description);
            }
        }
        SlideBody::Objectives(objectives) => {
            for o in objectives {
                println!("  {}  {}", o.number, o.title);
                println!("      {}", o.description);
            }
        }
        SlideBody::Steps(steps) => {
            for (i, step) in steps.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
        }
        SlideBody::Formula { formula, stats } => {
            for line in formula.lines() {
                println!("    {}", line);
            }
            println!();
            for stat in stats {
                println!("  {}{}  {}", stat.value, stat.unit.unwrap_or(""), stat.label);
            }
        }
        SlideBody::Tests(tests) => {
            for t in tests {
                println!("  {}  {}", t.test, t.hypothesis);
                println!("      {}", t.result);
                println!("      {}", t.verdict);
            }
        }
        SlideBody::Calculator => {
            let result = estimate(mix);
            println!(
                "  Current mix → {} MPa, {}/m³ ({})",
                result.strength_display(),
                result.saving_display(),
                result.tier
            );
            println!("  Type 'c' to enter a different mix.");
        }
        SlideBody::Impact { strength_note, co2_note } => {
            let scenario = ImpactScenario::warehouse_foundation();
            let summary = scenario.summarize();
            println!(
                "  Before: {:.0} kg/m³ cement, £{:.2}/m³, total {}",
                scenario.baseline.cement_kg_m3,
                summary.baseline_cost_per_m3,
                format_pounds_whole(summary.baseline_total)
            );
            println!(
                "  After:  {:.0} kg/m³ cement + {:.0} kg/m³ slag, £{:.2}/m³, total {}",
                scenario.optimised.cement_kg_m3,
                scenario.optimised.slag_kg_m3,
                summary.optimised_cost_per_m3,
                format_pounds_whole(summary.optimised_total)
            );
            println!(
                "  Saving: {} ({:.1}% cost reduction, {} predicted, {} CO₂)",
                format_pounds_whole(summary.project_saving),
                summary.reduction_percent,
                strength_note,
                co2_note
            );
        }
        SlideBody::Takeaways(items) => {
            for item in items {
                println!("  • {}", item);
            }
        }
    }
}

fn main() {
    if let Err(e) = deck_core::logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let settings = DeckSettings::from_env_or_default();
    // The terminal redraws whole slides, so transitions complete immediately.
    let mut navigator = SlideNavigator::new(settings.start_slide, TransitionTiming::instant());
    let mut mix = MixInputs::default();

    println!("StrataForge - Predicting Concrete Strength");
    println!("==========================================");
    println!("Commands: n (next), p (prev), 1-{} (jump), c (calculator), q (quit)", SLIDE_COUNT);

    let mut shown: Option<usize> = None;
    loop {
        let current = navigator.current();
        if shown != Some(current) {
            match SlideId::from_index(current) {
                Ok(slide) => print_slide(slide, &mix),
                Err(e) => eprintln!("Error: {}", e),
            }
            shown = Some(current);
        }

        let Some(line) = prompt("> ") else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Calculate) => {
                mix = prompt_mix(mix);
                print_prediction(&mix);
            }
            Ok(Command::Navigate(command)) => {
                let now = Instant::now();
                let outcome = command.apply(&mut navigator, now);
                tracing::debug!(?command, ?outcome, "terminal navigation");
                match outcome {
                    NavOutcome::Started { .. } => {
                        navigator.advance(now);
                    }
                    NavOutcome::AlreadyThere => println!("(already at the {} slide)", edge_name(&navigator)),
                    NavOutcome::Busy | NavOutcome::OutOfRange => {}
                }
            }
            Err(e) => println!("{}", e),
        }
    }
}

fn edge_name(navigator: &SlideNavigator) -> &'static str {
    if navigator.is_last() {
        "last"
    } else if navigator.is_first() {
        "first"
    } else {
        "requested"
    }
}

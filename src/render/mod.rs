//! Terminal presentation of breed records: a compact table for browsing
//! and a full card for single-breed inspection.

pub mod cards;
pub mod table;

pub use cards::breed_card;
pub use table::breed_table;

use colored::Colorize;

use studbook_core::{CareLevel, SpanRange, Trainability};

/// `110–175 lbs`, with equal endpoints collapsed to a single number.
pub fn format_span(span: &SpanRange, unit: &str) -> String {
    format!("{} {}", span_text(span), unit)
}

fn span_text(span: &SpanRange) -> String {
    if span.min == span.max {
        format!("{}", span.min)
    } else {
        format!("{}–{}", span.min, span.max)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Visible width in characters. Span cells hold an en dash, so byte length
/// over-counts.
fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Care scale colors, green at the undemanding end.
fn level_color(level: CareLevel, text: &str) -> String {
    match level {
        CareLevel::Low => text.green(),
        CareLevel::Moderate => text.yellow(),
        CareLevel::High => text.red(),
    }
    .to_string()
}

fn trainability_color(level: Trainability, text: &str) -> String {
    match level {
        Trainability::VeryEasy | Trainability::Easy => text.green(),
        Trainability::Moderate => text.yellow(),
        Trainability::Hard => text.red(),
    }
    .to_string()
}

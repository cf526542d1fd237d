use studbook_core::{Breed, RatedBreed};

use super::{display_width, level_color, span_text, trainability_color, yes_no};

const HEADERS: [&str; 12] = [
    "Breed",
    "Origin",
    "Weight (lbs)",
    "Height (in)",
    "Life (yrs)",
    "Exercise",
    "Grooming",
    "Shedding",
    "Trainability",
    "Kids",
    "Dogs",
    "Svc",
];

// Columns carrying a scale value, colored after padding so the escape
// codes stay out of the width math.
const EXERCISE_COL: usize = 5;
const GROOMING_COL: usize = 6;
const SHEDDING_COL: usize = 7;
const TRAINABILITY_COL: usize = 8;

/// Render breeds as a width-aligned text table, one row per breed.
pub fn breed_table(rows: &[RatedBreed]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| display_width(h)).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = render_line(&header, &widths, None);
    out.push('\n');
    out.push_str(&separator(&widths));
    for (row, breed) in cells.iter().zip(rows) {
        out.push('\n');
        out.push_str(&render_line(row, &widths, Some(&breed.breed)));
    }
    out
}

fn row_cells(row: &RatedBreed) -> Vec<String> {
    let b = &row.breed;
    vec![
        b.name.clone(),
        b.origin.clone(),
        span_text(&b.weight_lbs),
        span_text(&b.height_in),
        span_text(&b.lifespan_yrs),
        b.exercise.to_string(),
        b.grooming.to_string(),
        b.shedding.to_string(),
        b.trainability.to_string(),
        yes_no(b.good_with_kids).to_string(),
        yes_no(b.good_with_dogs).to_string(),
        b.service_dog_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "–".to_string()),
    ]
}

fn render_line(cells: &[String], widths: &[usize], source: Option<&Breed>) -> String {
    let mut parts = Vec::with_capacity(cells.len());
    for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
        // The last column is never padded, keeping lines free of trailing
        // whitespace.
        let padded = if idx + 1 == cells.len() {
            cell.clone()
        } else {
            pad(cell, *width)
        };
        parts.push(match source {
            Some(breed) => paint(idx, &padded, breed),
            None => padded,
        });
    }
    parts.join("  ")
}

fn separator(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ")
}

fn pad(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(gap))
}

fn paint(idx: usize, padded: &str, breed: &Breed) -> String {
    match idx {
        EXERCISE_COL => level_color(breed.exercise, padded),
        GROOMING_COL => level_color(breed.grooming, padded),
        SHEDDING_COL => level_color(breed.shedding, padded),
        TRAINABILITY_COL => trainability_color(breed.trainability, padded),
        _ => padded.to_string(),
    }
}

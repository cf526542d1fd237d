use std::collections::HashSet;

use crate::models::{Breed, SpanRange};
use crate::ratings::RatingsMap;

/// Plausibility windows for a large-breed record; values outside these almost
/// always mean a scrape or data-entry mistake rather than a real dog.
pub const WEIGHT_BOUNDS: [f64; 2] = [20.0, 300.0];
pub const HEIGHT_BOUNDS: [f64; 2] = [15.0, 45.0];
pub const LIFESPAN_BOUNDS: [f64; 2] = [3.0, 25.0];

/// Semantic checks the JSON Schema cannot express. Accumulates every problem
/// instead of stopping at the first.
pub fn validate_breeds(breeds: &[Breed]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_slugs: HashSet<&str> = HashSet::new();

    for (idx, breed) in breeds.iter().enumerate() {
        let label = format!("Breed #{} ('{}')", idx + 1, breed.name);

        check_span(&mut errors, &label, "weight_lbs", &breed.weight_lbs, WEIGHT_BOUNDS);
        check_span(&mut errors, &label, "height_in", &breed.height_in, HEIGHT_BOUNDS);
        check_span(&mut errors, &label, "lifespan_yrs", &breed.lifespan_yrs, LIFESPAN_BOUNDS);

        if breed.temperament.is_empty() {
            errors.push(format!("{}: temperament list is empty", label));
        }
        if breed.purpose.is_empty() {
            errors.push(format!("{}: purpose list is empty", label));
        }

        if let Some(score) = breed.service_dog_score {
            if !(1..=5).contains(&score) {
                errors.push(format!(
                    "{}: service_dog_score {} outside 1-5",
                    label, score
                ));
            }
        }

        if !seen_names.insert(breed.name.as_str()) {
            errors.push(format!("{}: duplicate breed name", label));
        }
        if let Some(slug) = breed.dogtime_slug.as_deref() {
            if !seen_slugs.insert(slug) {
                errors.push(format!("{}: duplicate dogtime_slug '{}'", label, slug));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_span(
    errors: &mut Vec<String>,
    label: &str,
    field: &str,
    span: &SpanRange,
    bounds: [f64; 2],
) {
    if span.min > span.max {
        errors.push(format!(
            "{}: {} min {} exceeds max {}",
            label, field, span.min, span.max
        ));
    }
    if span.min < bounds[0] || span.max > bounds[1] {
        errors.push(format!(
            "{}: {} {}-{} outside plausible window {}-{}",
            label, field, span.min, span.max, bounds[0], bounds[1]
        ));
    }
}

/// Check a ratings map: every score must sit on the 1-5 star scale. Trait
/// names are left alone; the scrape keeps whatever the site lists and the
/// app only reads the traits it knows.
pub fn validate_ratings(ratings: &RatingsMap) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (slug, traits) in ratings {
        if traits.is_empty() {
            errors.push(format!("Ratings for '{}': no traits recorded", slug));
        }
        for (trait_name, score) in traits {
            if !(1..=5).contains(score) {
                errors.push(format!(
                    "Ratings for '{}': trait '{}' score {} outside 1-5",
                    slug, trait_name, score
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

use colored::Colorize;

use studbook_core::{RatedBreed, RATING_CATEGORIES};

use super::{format_span, level_color, trainability_color, yes_no};

/// Render one breed as a detail card: identity line, aligned stat rows,
/// then rating pips grouped by category when the breed has ratings.
pub fn breed_card(row: &RatedBreed) -> String {
    let b = &row.breed;
    let mut out = String::new();
    out.push_str(&b.name.bold().to_string());
    out.push('\n');
    out.push_str(&format!("{} • {}\n\n", b.origin, b.purpose.join(", ")));

    let stats = stat_rows(row);
    let label_width = stats
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in &stats {
        out.push_str(&format!("  {:<label_width$}  {}\n", label, value));
    }

    if let Some(ratings) = &row.ratings {
        for category in RATING_CATEGORIES {
            let scored: Vec<(&str, u8)> = category
                .traits
                .iter()
                .filter_map(|t| ratings.get(t.trait_name).map(|&score| (t.label, score)))
                .collect();
            if scored.is_empty() {
                continue;
            }
            out.push('\n');
            out.push_str(&category.label.bold().to_string());
            out.push('\n');
            let width = scored
                .iter()
                .map(|(label, _)| label.chars().count())
                .max()
                .unwrap_or(0);
            for (label, score) in scored {
                out.push_str(&format!("  {:<width$}  {}\n", label, pips(score)));
            }
        }
    }
    out
}

fn stat_rows(row: &RatedBreed) -> Vec<(&'static str, String)> {
    let b = &row.breed;
    let mut rows = vec![
        ("Weight", format_span(&b.weight_lbs, "lbs")),
        ("Height", format_span(&b.height_in, "in")),
        ("Lifespan", format_span(&b.lifespan_yrs, "yrs")),
        ("Coat", b.coat.clone()),
        ("Exercise", level_color(b.exercise, b.exercise.as_str())),
        ("Grooming", level_color(b.grooming, b.grooming.as_str())),
        ("Shedding", level_color(b.shedding, b.shedding.as_str())),
        (
            "Trainability",
            trainability_color(b.trainability, b.trainability.as_str()),
        ),
        ("Kids", yes_no(b.good_with_kids).to_string()),
        ("Dogs", yes_no(b.good_with_dogs).to_string()),
        ("Temperament", b.temperament.join(", ")),
        ("Health", b.health_notes.clone()),
    ];
    if let Some(score) = b.service_dog_score {
        rows.push(("Service score", format!("{}/5", score)));
    }
    if let Some(url) = &b.source_url {
        rows.push(("Source", url.clone()));
    }
    rows
}

/// Five-slot pip bar, filled up to the score.
fn pips(score: u8) -> String {
    let filled = usize::from(score.min(5));
    format!("{}{}", "●".repeat(filled), "○".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use studbook_core::{attach_ratings, embedded_breeds, RatingsMap};

    fn dane() -> RatedBreed {
        let breeds = embedded_breeds().unwrap();
        attach_ratings(&breeds, &RatingsMap::new())
            .into_iter()
            .find(|r| r.breed.name == "Great Dane")
            .unwrap()
    }

    #[test]
    fn test_card_shows_identity_and_spans() {
        let card = breed_card(&dane());
        assert!(card.contains("Great Dane"));
        assert!(card.contains("Germany"));
        assert!(card.contains("110–175 lbs"));
        assert!(card.contains("28–32 in"));
        assert!(card.contains("7–10 yrs"));
    }

    #[test]
    fn test_card_collapses_flat_lifespan() {
        let breeds = embedded_breeds().unwrap();
        let leonberger = attach_ratings(&breeds, &RatingsMap::new())
            .into_iter()
            .find(|r| r.breed.name == "Leonberger")
            .unwrap();
        let card = breed_card(&leonberger);
        assert!(card.contains("7 yrs"));
        assert!(!card.contains("7–7"));
    }

    #[test]
    fn test_card_groups_ratings_by_category() {
        let mut row = dane();
        row.ratings = Some(BTreeMap::from([
            ("Easy To Train".to_string(), 4u8),
            ("Adaptability - Overall".to_string(), 3u8),
        ]));
        let card = breed_card(&row);
        assert!(card.contains("Adaptability"));
        assert!(card.contains("●●●○○"));
        assert!(card.contains("Trainability"));
        assert!(card.contains("●●●●○"));
        // Categories with no scored traits stay out of the card.
        assert!(!card.contains("Friendliness"));
    }

    #[test]
    fn test_card_without_ratings_has_no_pips() {
        let card = breed_card(&dane());
        assert!(!card.contains('●'));
        assert!(!card.contains("Adaptability"));
    }

    #[test]
    fn test_unscored_breed_omits_service_row() {
        let card = breed_card(&dane());
        assert!(!card.contains("Service score"));

        let mut scored = dane();
        scored.breed.service_dog_score = Some(5);
        assert!(breed_card(&scored).contains("Service score"));
        assert!(breed_card(&scored).contains("5/5"));
    }

    #[test]
    fn test_dataset_trait_names_outside_inventory_are_skipped() {
        let mut row = dane();
        row.ratings = Some(BTreeMap::from([("Floofiness".to_string(), 5u8)]));
        let card = breed_card(&row);
        assert!(!card.contains("Floofiness"));
        assert!(!card.contains('●'));
    }
}

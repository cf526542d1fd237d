use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;

use studbook_core::{RATING_CATEGORIES, RATING_SCALE};

use crate::cli::Cli;
use crate::render::breed_card;
use crate::services::JsonOut;
use crate::state::Session;

/// Full card for one breed, looked up by case-insensitive name.
pub fn handle_show(cli: &Cli, session: &Session, name: &str) -> anyhow::Result<()> {
    match session.find(name) {
        Some(row) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut { ok: true, data: row })?
                );
            } else {
                print!("{}", breed_card(row));
            }
            Ok(())
        }
        None => {
            let suggestions = session.similar_names(name);
            if !suggestions.is_empty() {
                eprintln!("Did you mean: {}?", suggestions.join(", "));
            }
            anyhow::bail!("no breed named '{}'", name)
        }
    }
}

#[derive(Serialize)]
struct RangesReport {
    weight: [f64; 2],
    height: [f64; 2],
    lifespan: [f64; 2],
    service_score: [u8; 2],
    facets: BTreeMap<String, Vec<String>>,
    rating_keys: Vec<RatingKeyGroup>,
}

#[derive(Serialize)]
struct RatingKeyGroup {
    category: String,
    keys: Vec<RatingKeyEntry>,
}

#[derive(Serialize)]
struct RatingKeyEntry {
    key: String,
    label: String,
    trait_name: String,
}

/// Reference sheet for filter building: derived numeric bounds, facet
/// domains, and the rating trait keys accepted by `--rating` and `--sort`.
pub fn handle_ranges(cli: &Cli, session: &Session) -> anyhow::Result<()> {
    let report = RangesReport {
        weight: session.bounds.weight,
        height: session.bounds.height,
        lifespan: session.bounds.lifespan,
        service_score: RATING_SCALE,
        facets: session
            .domains
            .iter()
            .map(|(facet, values)| (facet.as_str().to_string(), values.to_vec()))
            .collect(),
        rating_keys: RATING_CATEGORIES
            .iter()
            .map(|category| RatingKeyGroup {
                category: category.label.to_string(),
                keys: category
                    .traits
                    .iter()
                    .map(|t| RatingKeyEntry {
                        key: t.key.to_string(),
                        label: t.label.to_string(),
                        trait_name: t.trait_name.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data: report })?
        );
        return Ok(());
    }

    println!("{}", "Numeric windows".bold());
    println!("  weight         {}..{} lbs", report.weight[0], report.weight[1]);
    println!("  height         {}..{} in", report.height[0], report.height[1]);
    println!("  lifespan       {}..{} yrs", report.lifespan[0], report.lifespan[1]);
    println!(
        "  service-score  {}..{}",
        report.service_score[0], report.service_score[1]
    );

    println!("\n{}", "Facets".bold());
    for (facet, values) in session.domains.iter() {
        println!("  {}: {}", facet, values.join(", "));
    }

    println!(
        "\n{}",
        "Rating trait keys (for --rating KEY=LO..HI and --sort KEY)".bold()
    );
    for group in &report.rating_keys {
        let keys: Vec<&str> = group.keys.iter().map(|k| k.key.as_str()).collect();
        println!("  {}: {}", group.category, keys.join(", "));
    }
    Ok(())
}

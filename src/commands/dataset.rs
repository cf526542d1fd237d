use colored::Colorize;
use serde::Serialize;

use studbook_core::{
    save_breeds, service_band, service_score_percent, validate_breeds, validate_breeds_json,
    validate_ratings,
};

use crate::cli::Cli;
use crate::errors::{map_dataset_save_error, report_failure};
use crate::services::source::DataSource;
use crate::services::{FileSource, JsonOut};
use crate::state::Session;

#[derive(Serialize)]
struct ValidationReport {
    checked: usize,
    problems: Vec<String>,
}

/// Schema and semantic checks over the loaded dataset. Exits nonzero when
/// anything is wrong, listing every problem rather than the first.
pub fn handle_validate(cli: &Cli, session: &Session) -> anyhow::Result<()> {
    let breeds = session.raw_breeds();
    let mut problems: Vec<String> = Vec::new();

    let as_json = serde_json::to_value(&breeds)?;
    if let Err(errors) = validate_breeds_json(&as_json) {
        problems.extend(errors);
    }
    if let Err(errors) = validate_breeds(&breeds) {
        problems.extend(errors);
    }
    if let Err(errors) = validate_ratings(&session.ratings) {
        problems.extend(errors);
    }

    if cli.json {
        let ok = problems.is_empty();
        let report = ValidationReport {
            checked: breeds.len(),
            problems,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data: &report })?
        );
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    if problems.is_empty() {
        println!(
            "{} {} breeds checked, no problems found",
            "ok:".green().bold(),
            breeds.len()
        );
        return Ok(());
    }

    eprintln!(
        "{} {} problem(s) in {} breeds",
        "error:".red().bold(),
        problems.len(),
        breeds.len()
    );
    for (idx, problem) in problems.iter().enumerate() {
        eprintln!("  {}. {}", idx + 1, problem);
    }
    std::process::exit(1);
}

#[derive(Serialize)]
struct ScoreRow {
    name: String,
    percent: f64,
    band: u8,
    stored: Option<u8>,
}

#[derive(Serialize)]
struct ScoreReport {
    rankings: Vec<ScoreRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<usize>,
}

/// Service-aptitude ranking over every fully rated breed, best first.
/// `--write` stores the derived 1-5 bands back into a directory dataset.
/// `loaded_from` is the source that actually supplied the session's breeds.
pub fn handle_score(
    cli: &Cli,
    session: &Session,
    data: Option<&str>,
    loaded_from: &str,
    write: bool,
) -> anyhow::Result<()> {
    let mut rankings: Vec<ScoreRow> = session
        .breeds
        .iter()
        .filter_map(|row| {
            let ratings = row.ratings.as_ref()?;
            let percent = service_score_percent(ratings)?;
            Some(ScoreRow {
                name: row.breed.name.clone(),
                percent,
                band: service_band(percent),
                stored: row.breed.service_dog_score,
            })
        })
        .collect();
    rankings.sort_by(|a, b| b.percent.total_cmp(&a.percent));

    let updated = if write {
        Some(write_bands(session, data, loaded_from, &rankings)?)
    } else {
        None
    };

    if cli.json {
        let report = ScoreReport { rankings, updated };
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data: report })?
        );
        return Ok(());
    }

    if rankings.is_empty() {
        println!("No breeds carry the full set of scored traits.");
        return Ok(());
    }
    for row in &rankings {
        println!("{}\t{:.1}\t{}/5", row.name, row.percent, row.band);
    }
    if let Some(count) = updated {
        println!("stored {} updated band(s)", count);
    }
    Ok(())
}

/// Store derived bands into the breeds file of a directory-sourced dataset.
/// Returns how many records actually changed.
fn write_bands(
    session: &Session,
    data: Option<&str>,
    loaded_from: &str,
    rankings: &[ScoreRow],
) -> anyhow::Result<usize> {
    let Some(dir) = data else {
        anyhow::bail!("--write needs a directory dataset; pass --data DIR");
    };
    if dir.starts_with("http://") || dir.starts_with("https://") {
        anyhow::bail!("--write needs a local directory, not a URL");
    }
    // If the directory failed to load, the session holds fallback data;
    // writing it back would replace the user's file with the snapshot.
    let expected = FileSource::new(dir).describe();
    if loaded_from != expected {
        anyhow::bail!(
            "refusing to write: breeds were loaded from {}, not from {}",
            loaded_from,
            expected
        );
    }

    let mut breeds = session.raw_breeds();
    let mut updated = 0usize;
    for breed in &mut breeds {
        let Some(rank) = rankings.iter().find(|r| r.name == breed.name) else {
            continue;
        };
        if breed.service_dog_score != Some(rank.band) {
            breed.service_dog_score = Some(rank.band);
            updated += 1;
        }
    }

    let path = FileSource::new(dir).breeds_path();
    if let Err(error) = save_breeds(&path, &breeds) {
        let (headline, message, details) = map_dataset_save_error(&error, &path);
        report_failure(&headline, &message, &details);
        std::process::exit(1);
    }
    Ok(updated)
}

use colored::Colorize;

use studbook_core::name_to_slug;

use crate::cli::Cli;
use crate::services::{ApiError, BreedApi, JsonOut, SourceChain, ADD_ROUTE, REMOVE_ROUTE};
use crate::state::Session;

/// Add a breed through the curation API, then reload the dataset so the
/// session reflects the change.
pub fn handle_add(
    cli: &Cli,
    chain: &SourceChain,
    session: &mut Session,
    name: &str,
) -> anyhow::Result<()> {
    mutate(cli, chain, session, name, ADD_ROUTE)
}

/// Remove a breed through the curation API.
pub fn handle_remove(
    cli: &Cli,
    chain: &SourceChain,
    session: &mut Session,
    name: &str,
) -> anyhow::Result<()> {
    mutate(cli, chain, session, name, REMOVE_ROUTE)
}

fn mutate(
    cli: &Cli,
    chain: &SourceChain,
    session: &mut Session,
    name: &str,
    route: &str,
) -> anyhow::Result<()> {
    let api = BreedApi::new(&cli.api);
    let result = match route {
        ADD_ROUTE => api.add(name),
        _ => api.remove(name),
    };
    let response = match result {
        Ok(response) => response,
        // Transport failure takes the offline path; HTTP error statuses
        // already arrive as parsed responses.
        Err(ApiError::Http(_)) => api.offline_fallback(route, name),
        Err(error) => return Err(error.into()),
    };

    if cli.json {
        let ok = response.ok;
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data: &response })?
        );
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    if !response.ok {
        let message = response
            .error
            .clone()
            .unwrap_or_else(|| "the API rejected the request".to_string());
        eprintln!("{} {}", "error:".red().bold(), message);
        if let Some(hint) = &response.cli {
            eprintln!("Run it by hand once the server is up:");
            eprintln!("  {}", hint.dimmed());
        }
        std::process::exit(1);
    }

    match route {
        ADD_ROUTE => {
            println!(
                "{} {}",
                "added".green().bold(),
                response.breed_name().unwrap_or(name)
            );
            // Ratings and images key on the slug; predict it when the server
            // response leaves it out.
            let slug = response
                .breed
                .as_ref()
                .and_then(|b| b.dogtime_slug.clone())
                .or_else(|| response.slug.clone())
                .unwrap_or_else(|| name_to_slug(response.breed_name().unwrap_or(name)));
            println!("  slug: {}", slug);
            if let Some(placeholders) = &response.placeholders {
                if !placeholders.is_empty() {
                    eprintln!(
                        "{}",
                        format!(
                            "note: placeholder fields pending curation: {}",
                            placeholders.join(", ")
                        )
                        .yellow()
                    );
                }
            }
        }
        _ => {
            println!(
                "{} {}",
                "removed".green().bold(),
                response.name.as_deref().unwrap_or(name)
            );
            if let Some(files) = &response.removed_files {
                for file in files {
                    println!("  - {}", file);
                }
            }
        }
    }

    // Mutations land on the server's copy; reload to pick them up. The
    // mutation already succeeded, so a reload failure only skips the recount.
    if let Ok(bundle) = chain.load() {
        session.absorb(bundle.breeds, bundle.ratings);
        println!("dataset now holds {} breeds", session.breeds.len());
    }
    Ok(())
}

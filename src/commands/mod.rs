//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `browse.rs` — filter/sort/render the loaded dataset.
//! - `export.rs` — the same pipeline, serialized as CSV.
//! - `inspect.rs` — single-breed cards and the `ranges` reference.
//! - `manage.rs` — add/remove through the curation API.
//! - `dataset.rs` — validation and service-aptitude scoring.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate dataset logic to `studbook-core` and IO to `services/*`.
//! - Keep behavior and output schema stable.

pub mod browse;
pub mod dataset;
pub mod export;
pub mod inspect;
pub mod manage;

pub use browse::handle_browse;
pub use dataset::{handle_score, handle_validate};
pub use export::handle_export;
pub use inspect::{handle_ranges, handle_show};
pub use manage::{handle_add, handle_remove};

use colored::Colorize;

use studbook_core::{Facet, FilterState, SortDirection, SortKey};

use crate::cli::{FilterArgs, SortArgs};

/// Overlay command-line filter flags onto a pass-everything state. Flags
/// that were not given leave the seeded windows and facet sets alone.
pub fn apply_filter_args(state: &mut FilterState, args: &FilterArgs) {
    if let Some(query) = &args.search {
        state.query = query.clone();
    }
    if let Some(window) = args.weight {
        state.weight = window;
    }
    if let Some(window) = args.height {
        state.height = window;
    }
    if let Some(window) = args.lifespan {
        state.lifespan = window;
    }
    if let Some(window) = args.service_score {
        state.service_score = window;
    }

    let facet_args: [(Facet, &[String]); 8] = [
        (Facet::Origin, &args.origin),
        (Facet::Exercise, &args.exercise),
        (Facet::Grooming, &args.grooming),
        (Facet::Shedding, &args.shedding),
        (Facet::Trainability, &args.trainability),
        (Facet::Coat, &args.coat),
        (Facet::Purpose, &args.purpose),
        (Facet::Temperament, &args.temperament),
    ];
    for (facet, values) in facet_args {
        if !values.is_empty() {
            state.allowed.insert(facet, values.to_vec());
        }
    }
    if let Some(flag) = args.kids {
        state
            .allowed
            .insert(Facet::Kids, vec![flag.as_str().to_string()]);
    }
    if let Some(flag) = args.dogs {
        state
            .allowed
            .insert(Facet::Dogs, vec![flag.as_str().to_string()]);
    }
    for (key, window) in &args.rating {
        state.rating.insert(key.clone(), *window);
    }
}

/// Sort selection from `--sort`/`--desc`. Unknown fields become the no-op
/// key, with a note so typos do not pass silently.
pub fn sort_selection(order: &SortArgs) -> (SortKey, SortDirection) {
    let key = SortKey::parse(&order.sort);
    if key == SortKey::Unrecognized {
        eprintln!(
            "{}",
            format!("note: unknown sort field '{}', order left as loaded", order.sort).yellow()
        );
    }
    let direction = if order.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    (key, direction)
}

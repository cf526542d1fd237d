use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use crate::domain::{DatasetBounds, Facet};
use crate::models::RatedBreed;
use crate::ratings::rating_trait;

/// Full rating scale; a trait filter equal to this is inactive.
pub const RATING_SCALE: [u8; 2] = [1, 5];

/// One immutable snapshot of every active predicate. Built once per query,
/// never mutated by the filter pass itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Free-text needle; empty or whitespace matches everything.
    pub query: String,
    /// Accepted weight window (lbs); breeds pass on span overlap.
    pub weight: [f64; 2],
    /// Accepted height window (in).
    pub height: [f64; 2],
    /// Accepted lifespan window (yrs).
    pub lifespan: [f64; 2],
    /// Service-aptitude window; only restrictive when narrower than 1..=5.
    pub service_score: [u8; 2],
    /// Allowed values per facet; an absent or empty entry means unrestricted.
    pub allowed: HashMap<Facet, Vec<String>>,
    /// Per-trait rating windows keyed by trait selector; `[1,5]` is inactive
    /// and unknown selectors are ignored.
    pub rating: HashMap<String, [u8; 2]>,
}

impl FilterState {
    /// The pass-everything state for a dataset with the given bounds.
    pub fn for_bounds(bounds: &DatasetBounds) -> FilterState {
        FilterState {
            query: String::new(),
            weight: bounds.weight,
            height: bounds.height,
            lifespan: bounds.lifespan,
            service_score: RATING_SCALE,
            allowed: HashMap::new(),
            rating: HashMap::new(),
        }
    }
}

/// Case/width-insensitive fold used for substring search.
fn normalize_query(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

fn search_haystack(breed: &RatedBreed) -> String {
    let b = &breed.breed;
    let mut parts: Vec<&str> = vec![&b.name, &b.origin];
    parts.extend(b.temperament.iter().map(String::as_str));
    parts.extend(b.purpose.iter().map(String::as_str));
    parts.join(" ")
}

/// True when the breed satisfies every active predicate. Predicates AND
/// together; values within one facet's allowed set OR.
pub fn matches_filters(breed: &RatedBreed, filters: &FilterState) -> bool {
    let b = &breed.breed;

    let needle = normalize_query(filters.query.trim());
    if !needle.is_empty() && !normalize_query(&search_haystack(breed)).contains(&needle) {
        return false;
    }

    if !b.weight_lbs.overlaps(filters.weight[0], filters.weight[1]) {
        return false;
    }
    if !b.height_in.overlaps(filters.height[0], filters.height[1]) {
        return false;
    }
    if !b.lifespan_yrs.overlaps(filters.lifespan[0], filters.lifespan[1]) {
        return false;
    }

    let [svc_lo, svc_hi] = filters.service_score;
    if svc_lo > 1 || svc_hi < 5 {
        match b.service_dog_score {
            Some(score) if score >= svc_lo && score <= svc_hi => {}
            // A breed without a score is excluded once the window narrows.
            _ => return false,
        }
    }

    for (facet, required_values) in &filters.allowed {
        if required_values.is_empty() {
            continue;
        }
        let breed_values = facet.values_of(b);
        let matches = required_values
            .iter()
            .any(|rv| breed_values.iter().any(|bv| bv == rv));
        if !matches {
            return false;
        }
    }

    for (selector, &[lo, hi]) in &filters.rating {
        if lo <= RATING_SCALE[0] && hi >= RATING_SCALE[1] {
            continue;
        }
        let Some(trait_info) = rating_trait(selector) else {
            continue;
        };
        match breed.rating(trait_info.trait_name) {
            Some(score) if score >= lo && score <= hi => {}
            _ => return false,
        }
    }

    true
}

/// Filter breeds, preserving input order.
pub fn filter_breeds(breeds: &[RatedBreed], filters: &FilterState) -> Vec<RatedBreed> {
    breeds
        .iter()
        .filter(|breed| matches_filters(breed, filters))
        .cloned()
        .collect()
}

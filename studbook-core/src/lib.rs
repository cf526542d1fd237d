// Public modules
pub mod domain;
pub mod export;
pub mod filtering;
pub mod io;
pub mod models;
pub mod ratings;
pub mod schema;
pub mod scoring;
pub mod slug;
pub mod sorting;
pub mod validation;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use domain::{derive_bounds, derive_domains, DatasetBounds, Facet, FacetDomains};
pub use export::{to_csv, CSV_COLUMNS};
pub use filtering::{filter_breeds, matches_filters, FilterState, RATING_SCALE};
pub use io::{
    embedded_breeds, load_breeds, load_ratings, parse_breeds, parse_ratings, save_breeds,
    DatasetError, BREEDS_FILE, RATINGS_FILE,
};
pub use models::{Breed, CareLevel, RatedBreed, SpanRange, Trainability};
pub use ratings::{
    attach_ratings, rating_category_of, rating_trait, RatingCategory, RatingTrait, RatingsMap,
    RATING_CATEGORIES,
};
pub use schema::{breeds_schema, validate_against_schema, validate_breeds_json};
pub use scoring::{service_band, service_score_percent};
pub use slug::name_to_slug;
pub use sorting::{
    normalize_for_sorting, sort_breeds, strip_leading_articles, SortDirection, SortKey,
};
pub use validation::{validate_breeds, validate_ratings};

use studbook_core::models::Breed;
use studbook_core::ratings::{attach_ratings, RatingsMap};
use studbook_core::{
    derive_bounds, derive_domains, filter_breeds, sort_breeds, DatasetBounds, FacetDomains,
    FilterState, RatedBreed, SortDirection, SortKey,
};

/// Latch for seeding filter spans from derived bounds. The transition to
/// `Initialized` happens once, on the first non-empty dataset; reloads after
/// that never touch spans the user may have narrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeInit {
    Uninitialized,
    Initialized,
}

/// In-memory session: the joined dataset plus the user's view over it.
#[derive(Debug)]
pub struct Session {
    pub breeds: Vec<RatedBreed>,
    pub ratings: RatingsMap,
    pub bounds: DatasetBounds,
    pub domains: FacetDomains,
    pub filters: FilterState,
    pub sort_key: SortKey,
    pub direction: SortDirection,
    range_init: RangeInit,
}

impl Session {
    pub fn new() -> Session {
        Session {
            breeds: Vec::new(),
            ratings: RatingsMap::new(),
            bounds: DatasetBounds::FALLBACK,
            domains: derive_domains(&[]),
            filters: FilterState::for_bounds(&DatasetBounds::FALLBACK),
            sort_key: SortKey::Name,
            direction: SortDirection::Ascending,
            range_init: RangeInit::Uninitialized,
        }
    }

    /// Replace the dataset: re-join ratings, re-derive bounds and domains.
    /// Filter spans are seeded from the bounds only on the first non-empty
    /// absorb; later reloads leave them alone even if the new data's
    /// extremes moved.
    pub fn absorb(&mut self, breeds: Vec<Breed>, ratings: RatingsMap) {
        self.breeds = attach_ratings(&breeds, &ratings);
        self.ratings = ratings;
        self.bounds = derive_bounds(&breeds);
        self.domains = derive_domains(&breeds);

        if self.range_init == RangeInit::Uninitialized && !self.breeds.is_empty() {
            self.filters.weight = self.bounds.weight;
            self.filters.height = self.bounds.height;
            self.filters.lifespan = self.bounds.lifespan;
            self.range_init = RangeInit::Initialized;
        }
    }

    /// The filtered, sorted view. Pure read; the session is untouched.
    pub fn visible(&self) -> Vec<RatedBreed> {
        let mut rows = filter_breeds(&self.breeds, &self.filters);
        sort_breeds(&mut rows, self.sort_key, self.direction);
        rows
    }

    /// Case-insensitive lookup by display name.
    pub fn find(&self, name: &str) -> Option<&RatedBreed> {
        self.breeds
            .iter()
            .find(|b| b.breed.name.eq_ignore_ascii_case(name))
    }

    /// Names close to a failed lookup, for the "did you mean" hint.
    pub fn similar_names(&self, name: &str) -> Vec<&str> {
        let needle = name.to_lowercase();
        self.breeds
            .iter()
            .map(|b| b.breed.name.as_str())
            .filter(|candidate| {
                let hay = candidate.to_lowercase();
                hay.contains(&needle) || needle.contains(&hay)
            })
            .take(5)
            .collect()
    }

    /// The raw records, for callers that persist or re-derive.
    pub fn raw_breeds(&self) -> Vec<Breed> {
        self.breeds.iter().map(|b| b.breed.clone()).collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

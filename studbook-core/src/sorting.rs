use std::cmp::Ordering;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::models::RatedBreed;
use crate::ratings::{rating_trait, RatingTrait};

/// Closed set of sortable fields. Anything else parses to `Unrecognized`,
/// which compares everything equal and so leaves the order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Origin,
    WeightMin,
    WeightMax,
    /// Span minimum of `height_in`.
    Height,
    /// Span maximum of `lifespan_yrs`.
    Lifespan,
    Coat,
    /// First listed purpose.
    Purpose,
    Exercise,
    Grooming,
    Shedding,
    Trainability,
    /// First listed temperament.
    Temperament,
    Kids,
    Dogs,
    ServiceScore,
    Rating(&'static RatingTrait),
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortKey {
    /// Map a field name to its key. Never fails; unknown names (including
    /// unknown rating selectors) become the `Unrecognized` no-op.
    pub fn parse(field: &str) -> SortKey {
        match field {
            "name" => SortKey::Name,
            "origin" => SortKey::Origin,
            "weight_min" => SortKey::WeightMin,
            "weight_max" => SortKey::WeightMax,
            "height" => SortKey::Height,
            "lifespan" => SortKey::Lifespan,
            "coat" => SortKey::Coat,
            "purpose" => SortKey::Purpose,
            "exercise" => SortKey::Exercise,
            "grooming" => SortKey::Grooming,
            "shedding" => SortKey::Shedding,
            "trainability" => SortKey::Trainability,
            "temperament" => SortKey::Temperament,
            "kids" => SortKey::Kids,
            "dogs" => SortKey::Dogs,
            "service_dog_score" => SortKey::ServiceScore,
            other => match rating_trait(other) {
                Some(t) => SortKey::Rating(t),
                None => SortKey::Unrecognized,
            },
        }
    }

    /// Compare two breeds on this key alone.
    pub fn compare(&self, a: &RatedBreed, b: &RatedBreed) -> Ordering {
        let (x, y) = (&a.breed, &b.breed);
        match self {
            SortKey::Name => cmp_normalized(&x.name, &y.name),
            SortKey::Origin => cmp_normalized(&x.origin, &y.origin),
            SortKey::WeightMin => x.weight_lbs.min.total_cmp(&y.weight_lbs.min),
            SortKey::WeightMax => x.weight_lbs.max.total_cmp(&y.weight_lbs.max),
            SortKey::Height => x.height_in.min.total_cmp(&y.height_in.min),
            SortKey::Lifespan => x.lifespan_yrs.max.total_cmp(&y.lifespan_yrs.max),
            SortKey::Coat => cmp_normalized(&x.coat, &y.coat),
            SortKey::Purpose => cmp_normalized(first(&x.purpose), first(&y.purpose)),
            SortKey::Exercise => x.exercise.cmp(&y.exercise),
            SortKey::Grooming => x.grooming.cmp(&y.grooming),
            SortKey::Shedding => x.shedding.cmp(&y.shedding),
            SortKey::Trainability => x.trainability.cmp(&y.trainability),
            SortKey::Temperament => cmp_normalized(first(&x.temperament), first(&y.temperament)),
            SortKey::Kids => x.good_with_kids.cmp(&y.good_with_kids),
            SortKey::Dogs => x.good_with_dogs.cmp(&y.good_with_dogs),
            // Missing scores order before every real score.
            SortKey::ServiceScore => x.service_dog_score.cmp(&y.service_dog_score),
            SortKey::Rating(t) => a.rating(t.trait_name).cmp(&b.rating(t.trait_name)),
            SortKey::Unrecognized => Ordering::Equal,
        }
    }
}

/// Stable in-place sort; descending reverses the comparator, so ties still
/// keep their input order.
pub fn sort_breeds(breeds: &mut [RatedBreed], key: SortKey, direction: SortDirection) {
    breeds.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn first(values: &[String]) -> &str {
    values.first().map(String::as_str).unwrap_or_default()
}

fn cmp_normalized(a: &str, b: &str) -> Ordering {
    match normalize_for_sorting(a).cmp(&normalize_for_sorting(b)) {
        // Ties fall back to the raw strings so the order stays total.
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Normalize string for library science sorting
/// - Strip leading articles (a, an, the)
/// - Normalize unicode (NFD then lowercase)
/// - Remove stray whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading articles following library science conventions
pub fn strip_leading_articles(s: &str) -> String {
    let re = Regex::new(r"^(?i)(the|a|an)\s+").unwrap();
    re.replace(s, "").to_string()
}

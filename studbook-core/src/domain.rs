use std::fmt;
use std::str::FromStr;

use crate::models::{Breed, CareLevel, Trainability};

/// Global dataset extents per numeric dimension, `[min of mins, max of maxes]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetBounds {
    pub weight: [f64; 2],
    pub height: [f64; 2],
    pub lifespan: [f64; 2],
}

impl DatasetBounds {
    /// Extents used when no records are loaded, wide enough for any large breed.
    pub const FALLBACK: DatasetBounds = DatasetBounds {
        weight: [0.0, 300.0],
        height: [0.0, 45.0],
        lifespan: [0.0, 25.0],
    };
}

/// Derive global bounds from the loaded records. An empty dataset yields
/// [`DatasetBounds::FALLBACK`].
pub fn derive_bounds(breeds: &[Breed]) -> DatasetBounds {
    if breeds.is_empty() {
        return DatasetBounds::FALLBACK;
    }
    let extent = |lo: fn(&Breed) -> f64, hi: fn(&Breed) -> f64| -> [f64; 2] {
        breeds.iter().fold([f64::INFINITY, f64::NEG_INFINITY], |acc, b| {
            [acc[0].min(lo(b)), acc[1].max(hi(b))]
        })
    };
    DatasetBounds {
        weight: extent(|b| b.weight_lbs.min, |b| b.weight_lbs.max),
        height: extent(|b| b.height_in.min, |b| b.height_in.max),
        lifespan: extent(|b| b.lifespan_yrs.min, |b| b.lifespan_yrs.max),
    }
}

/// The closed set of categorical facets a breed can be narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Origin,
    Exercise,
    Grooming,
    Shedding,
    Trainability,
    Coat,
    Purpose,
    Temperament,
    Kids,
    Dogs,
}

impl Facet {
    pub const ALL: [Facet; 10] = [
        Facet::Origin,
        Facet::Exercise,
        Facet::Grooming,
        Facet::Shedding,
        Facet::Trainability,
        Facet::Coat,
        Facet::Purpose,
        Facet::Temperament,
        Facet::Kids,
        Facet::Dogs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Origin => "origin",
            Facet::Exercise => "exercise",
            Facet::Grooming => "grooming",
            Facet::Shedding => "shedding",
            Facet::Trainability => "trainability",
            Facet::Coat => "coat",
            Facet::Purpose => "purpose",
            Facet::Temperament => "temperament",
            Facet::Kids => "kids",
            Facet::Dogs => "dogs",
        }
    }

    /// The comparable string values a breed exposes for this facet. Boolean
    /// facets map to `Yes`/`No`; multi-valued facets return every element.
    pub fn values_of(&self, breed: &Breed) -> Vec<String> {
        let yes_no = |flag: bool| vec![if flag { "Yes" } else { "No" }.to_string()];
        match self {
            Facet::Origin => vec![breed.origin.clone()],
            Facet::Exercise => vec![breed.exercise.to_string()],
            Facet::Grooming => vec![breed.grooming.to_string()],
            Facet::Shedding => vec![breed.shedding.to_string()],
            Facet::Trainability => vec![breed.trainability.to_string()],
            Facet::Coat => vec![breed.coat.clone()],
            Facet::Purpose => breed.purpose.clone(),
            Facet::Temperament => breed.temperament.clone(),
            Facet::Kids => yes_no(breed.good_with_kids),
            Facet::Dogs => yes_no(breed.good_with_dogs),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown facet '{}'", s))
    }
}

/// Distinct selectable values per facet, each in its display order.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetDomains {
    domains: Vec<(Facet, Vec<String>)>,
}

impl FacetDomains {
    pub fn values(&self, facet: Facet) -> &[String] {
        self.domains
            .iter()
            .find(|(f, _)| *f == facet)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Facet, &[String])> {
        self.domains.iter().map(|(f, v)| (*f, v.as_slice()))
    }
}

/// Harvest the distinct values of every facet. Scale-backed facets keep the
/// canonical scale order, restricted to values actually present; free-form
/// facets sort lexicographically; boolean facets are always `Yes`/`No`.
pub fn derive_domains(breeds: &[Breed]) -> FacetDomains {
    let domains = Facet::ALL
        .iter()
        .map(|&facet| (facet, facet_domain(breeds, facet)))
        .collect();
    FacetDomains { domains }
}

fn facet_domain(breeds: &[Breed], facet: Facet) -> Vec<String> {
    match facet {
        Facet::Exercise | Facet::Grooming | Facet::Shedding => CareLevel::ALL
            .iter()
            .filter(|level| breeds.iter().any(|b| level_of(b, facet) == **level))
            .map(|level| level.to_string())
            .collect(),
        Facet::Trainability => Trainability::ALL
            .iter()
            .filter(|t| breeds.iter().any(|b| b.trainability == **t))
            .map(|t| t.to_string())
            .collect(),
        Facet::Kids | Facet::Dogs => vec!["Yes".to_string(), "No".to_string()],
        Facet::Origin | Facet::Coat | Facet::Purpose | Facet::Temperament => {
            let mut values: Vec<String> = breeds
                .iter()
                .flat_map(|b| facet.values_of(b))
                .collect();
            values.sort();
            values.dedup();
            values
        }
    }
}

fn level_of(breed: &Breed, facet: Facet) -> CareLevel {
    match facet {
        Facet::Exercise => breed.exercise,
        Facet::Grooming => breed.grooming,
        Facet::Shedding => breed.shedding,
        _ => unreachable!("level_of is only called for care-level facets"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpanRange;
    use crate::test_support::{breed_with, kennel};

    #[test]
    fn test_bounds_cover_extremes() {
        let bounds = derive_bounds(&kennel());
        assert_eq!(bounds.weight, [50.0, 175.0]);
        assert_eq!(bounds.height, [21.5, 33.0]);
        assert_eq!(bounds.lifespan, [7.0, 14.0]);
    }

    #[test]
    fn test_empty_dataset_uses_fallback() {
        assert_eq!(derive_bounds(&[]), DatasetBounds::FALLBACK);
        assert_eq!(DatasetBounds::FALLBACK.weight, [0.0, 300.0]);
    }

    #[test]
    fn test_single_breed_bounds() {
        let one = vec![breed_with("Solo", |b| {
            b.weight_lbs = SpanRange { min: 77.0, max: 99.0 };
        })];
        let bounds = derive_bounds(&one);
        assert_eq!(bounds.weight, [77.0, 99.0]);
    }

    #[test]
    fn test_scale_facets_keep_canonical_order() {
        // kennel grooming: Low, Moderate, High all present
        let domains = derive_domains(&kennel());
        assert_eq!(domains.values(Facet::Grooming), ["Low", "Moderate", "High"]);
        // only Easy, Moderate, Hard trainability present, canonical order kept
        assert_eq!(
            domains.values(Facet::Trainability),
            ["Easy", "Moderate", "Hard"]
        );
    }

    #[test]
    fn test_free_form_facets_sort_lexicographically() {
        let domains = derive_domains(&kennel());
        assert_eq!(
            domains.values(Facet::Origin),
            ["Germany", "Japan", "Russia"]
        );
        assert_eq!(
            domains.values(Facet::Purpose),
            ["Companion", "Guardian", "Hunting", "Working"]
        );
    }

    #[test]
    fn test_boolean_facets_are_fixed() {
        let domains = derive_domains(&[]);
        assert_eq!(domains.values(Facet::Kids), ["Yes", "No"]);
        assert_eq!(domains.values(Facet::Dogs), ["Yes", "No"]);
    }

    #[test]
    fn test_facet_parses_by_name() {
        assert_eq!("temperament".parse::<Facet>().ok(), Some(Facet::Temperament));
        assert!("colour".parse::<Facet>().is_err());
    }
}

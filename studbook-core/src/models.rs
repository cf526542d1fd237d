use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// One breed record as stored in `large_dog_breeds.json`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Breed {
    pub name: String,
    pub origin: String,
    pub weight_lbs: SpanRange,
    pub height_in: SpanRange,
    pub lifespan_yrs: SpanRange,
    pub temperament: Vec<String>,
    pub purpose: Vec<String>,
    pub grooming: CareLevel,
    pub exercise: CareLevel,
    pub shedding: CareLevel,
    pub trainability: Trainability,
    pub good_with_kids: bool,
    pub good_with_dogs: bool,
    pub coat: String,
    pub health_notes: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_dog_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dogtime_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Closed numeric span, e.g. a weight of 110–175 lbs.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpanRange {
    pub min: f64,
    pub max: f64,
}

impl SpanRange {
    /// True when this span and `[lo, hi]` share at least one point.
    pub fn overlaps(&self, lo: f64, hi: f64) -> bool {
        self.max >= lo && self.min <= hi
    }
}

/// Three-step care scale. Declaration order is the canonical sort order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CareLevel {
    Low,
    Moderate,
    High,
}

impl CareLevel {
    pub const ALL: [CareLevel; 3] = [CareLevel::Low, CareLevel::Moderate, CareLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            CareLevel::Low => "Low",
            CareLevel::Moderate => "Moderate",
            CareLevel::High => "High",
        }
    }
}

impl fmt::Display for CareLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trainability scale. Declaration order is the canonical sort order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trainability {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    Easy,
    Moderate,
    Hard,
}

impl Trainability {
    pub const ALL: [Trainability; 4] = [
        Trainability::VeryEasy,
        Trainability::Easy,
        Trainability::Moderate,
        Trainability::Hard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Trainability::VeryEasy => "Very Easy",
            Trainability::Easy => "Easy",
            Trainability::Moderate => "Moderate",
            Trainability::Hard => "Hard",
        }
    }
}

impl fmt::Display for Trainability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A breed joined with its dogtime ratings, the shape the filter/sort/export
/// pipeline operates on. `ratings` is `None` when the breed has no entry in
/// the ratings map or the ratings feature is unavailable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RatedBreed {
    #[serde(flatten)]
    pub breed: Breed,
    pub ratings: Option<BTreeMap<String, u8>>,
}

impl RatedBreed {
    /// Score for one dataset trait name, if this breed has ratings at all.
    pub fn rating(&self, trait_name: &str) -> Option<u8> {
        self.ratings.as_ref().and_then(|r| r.get(trait_name)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breed_from_json(value: serde_json::Value) -> Breed {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_breed_deserializes_dataset_record() {
        let breed = breed_from_json(serde_json::json!({
            "name": "Great Dane",
            "origin": "Germany",
            "weight_lbs": {"min": 110, "max": 175},
            "height_in": {"min": 28, "max": 32},
            "lifespan_yrs": {"min": 7, "max": 10},
            "temperament": ["Friendly", "Patient", "Dependable"],
            "purpose": ["Guardian", "Companion"],
            "grooming": "Low",
            "exercise": "Moderate",
            "shedding": "Moderate",
            "trainability": "Easy",
            "good_with_kids": true,
            "good_with_dogs": true,
            "coat": "Short",
            "health_notes": "Bloat risk; cardiomyopathy",
            "color": "#64748b",
            "service_dog_score": 4,
            "dogtime_slug": "great-dane"
        }));

        assert_eq!(breed.name, "Great Dane");
        assert_eq!(breed.weight_lbs.min, 110.0);
        assert_eq!(breed.trainability, Trainability::Easy);
        assert_eq!(breed.service_dog_score, Some(4));
        assert_eq!(breed.dogtime_slug.as_deref(), Some("great-dane"));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let breed = breed_from_json(serde_json::json!({
            "name": "Plott Hound",
            "origin": "United States",
            "weight_lbs": {"min": 40, "max": 60},
            "height_in": {"min": 20, "max": 25},
            "lifespan_yrs": {"min": 12, "max": 14},
            "temperament": ["Loyal"],
            "purpose": ["Hunting"],
            "grooming": "Low",
            "exercise": "High",
            "shedding": "Low",
            "trainability": "Moderate",
            "good_with_kids": true,
            "good_with_dogs": false,
            "coat": "Short",
            "health_notes": "Generally healthy",
            "color": "#0f766e"
        }));

        assert_eq!(breed.service_dog_score, None);
        assert_eq!(breed.dogtime_slug, None);
        assert_eq!(breed.source_url, None);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let breed = breed_from_json(serde_json::json!({
            "name": "Akita",
            "origin": "Japan",
            "weight_lbs": {"min": 70, "max": 130},
            "height_in": {"min": 24, "max": 28},
            "lifespan_yrs": {"min": 10, "max": 13},
            "temperament": ["Dignified"],
            "purpose": ["Guardian"],
            "grooming": "Moderate",
            "exercise": "Moderate",
            "shedding": "High",
            "trainability": "Hard",
            "good_with_kids": false,
            "good_with_dogs": false,
            "coat": "Double",
            "health_notes": "Hip dysplasia",
            "color": "#b45309",
            "verified": true,
            "verification_date": "2025-05-01"
        }));

        assert_eq!(breed.extra.get("verified"), Some(&serde_json::json!(true)));
        let back = serde_json::to_value(&breed).unwrap();
        assert_eq!(back["verification_date"], "2025-05-01");
    }

    #[test]
    fn test_trainability_rename_and_order() {
        let t: Trainability = serde_json::from_value(serde_json::json!("Very Easy")).unwrap();
        assert_eq!(t, Trainability::VeryEasy);
        assert!(Trainability::VeryEasy < Trainability::Easy);
        assert!(Trainability::Moderate < Trainability::Hard);
        assert!(CareLevel::Low < CareLevel::Moderate);
        assert!(CareLevel::Moderate < CareLevel::High);
    }

    #[test]
    fn test_span_overlap_boundaries() {
        let span = SpanRange { min: 90.0, max: 100.0 };
        assert!(span.overlaps(70.0, 90.0));
        assert!(span.overlaps(100.0, 120.0));
        assert!(!span.overlaps(70.0, 89.0));
        assert!(!span.overlaps(101.0, 120.0));
    }
}

//! Fixture builders shared by the module tests.

use std::collections::{BTreeMap, HashMap};

use crate::models::{Breed, CareLevel, RatedBreed, SpanRange, Trainability};
use crate::ratings::RatingsMap;

pub(crate) fn breed(name: &str) -> Breed {
    Breed {
        name: name.to_string(),
        origin: "Germany".to_string(),
        weight_lbs: SpanRange { min: 50.0, max: 90.0 },
        height_in: SpanRange { min: 22.0, max: 27.0 },
        lifespan_yrs: SpanRange { min: 9.0, max: 13.0 },
        temperament: vec!["Loyal".to_string(), "Alert".to_string()],
        purpose: vec!["Working".to_string()],
        grooming: CareLevel::Moderate,
        exercise: CareLevel::Moderate,
        shedding: CareLevel::Moderate,
        trainability: Trainability::Easy,
        good_with_kids: true,
        good_with_dogs: true,
        coat: "Double".to_string(),
        health_notes: "Generally healthy".to_string(),
        color: "#334155".to_string(),
        service_dog_score: None,
        dogtime_slug: Some(crate::slug::name_to_slug(name)),
        source_url: None,
        extra: HashMap::new(),
    }
}

pub(crate) fn breed_with(name: &str, tweak: impl FnOnce(&mut Breed)) -> Breed {
    let mut b = breed(name);
    tweak(&mut b);
    b
}

pub(crate) fn rated(breed: Breed, ratings: Option<BTreeMap<String, u8>>) -> RatedBreed {
    RatedBreed { breed, ratings }
}

pub(crate) fn ratings_map(entries: &[(&str, &[(&str, u8)])]) -> RatingsMap {
    entries
        .iter()
        .map(|(slug, traits)| {
            let scores = traits
                .iter()
                .map(|(name, score)| (name.to_string(), *score))
                .collect::<BTreeMap<String, u8>>();
            (slug.to_string(), scores)
        })
        .collect()
}

/// A small kennel with deliberately varied fields, in insertion order:
/// Great Dane, Akita, Borzoi, Boxer.
pub(crate) fn kennel() -> Vec<Breed> {
    vec![
        breed_with("Great Dane", |b| {
            b.weight_lbs = SpanRange { min: 110.0, max: 175.0 };
            b.height_in = SpanRange { min: 28.0, max: 32.0 };
            b.lifespan_yrs = SpanRange { min: 7.0, max: 10.0 };
            b.temperament = vec!["Friendly".to_string(), "Patient".to_string()];
            b.purpose = vec!["Guardian".to_string(), "Companion".to_string()];
            b.grooming = CareLevel::Low;
            b.exercise = CareLevel::Moderate;
            b.shedding = CareLevel::Moderate;
            b.trainability = Trainability::Easy;
            b.coat = "Short".to_string();
            b.service_dog_score = Some(4);
        }),
        breed_with("Akita", |b| {
            b.origin = "Japan".to_string();
            b.weight_lbs = SpanRange { min: 70.0, max: 130.0 };
            b.height_in = SpanRange { min: 24.0, max: 28.0 };
            b.lifespan_yrs = SpanRange { min: 10.0, max: 13.0 };
            b.temperament = vec!["Dignified".to_string(), "Loyal".to_string()];
            b.purpose = vec!["Guardian".to_string()];
            b.grooming = CareLevel::Moderate;
            b.exercise = CareLevel::Moderate;
            b.shedding = CareLevel::High;
            b.trainability = Trainability::Hard;
            b.good_with_kids = false;
            b.good_with_dogs = false;
        }),
        breed_with("Borzoi", |b| {
            b.origin = "Russia".to_string();
            b.weight_lbs = SpanRange { min: 60.0, max: 105.0 };
            b.height_in = SpanRange { min: 26.0, max: 33.0 };
            b.lifespan_yrs = SpanRange { min: 9.0, max: 14.0 };
            b.temperament = vec!["Quiet".to_string(), "Gentle".to_string()];
            b.purpose = vec!["Hunting".to_string()];
            b.grooming = CareLevel::High;
            b.exercise = CareLevel::High;
            b.shedding = CareLevel::High;
            b.trainability = Trainability::Moderate;
            b.good_with_dogs = false;
            b.coat = "Silky".to_string();
            b.service_dog_score = Some(2);
        }),
        breed_with("Boxer", |b| {
            b.weight_lbs = SpanRange { min: 50.0, max: 80.0 };
            b.height_in = SpanRange { min: 21.5, max: 25.0 };
            b.lifespan_yrs = SpanRange { min: 10.0, max: 12.0 };
            b.temperament = vec!["Playful".to_string(), "Energetic".to_string()];
            b.purpose = vec!["Companion".to_string(), "Working".to_string()];
            b.grooming = CareLevel::Low;
            b.exercise = CareLevel::High;
            b.shedding = CareLevel::Moderate;
            b.trainability = Trainability::Easy;
            b.coat = "Short".to_string();
            b.service_dog_score = Some(5);
        }),
    ]
}

/// `kennel()` joined against an empty ratings map.
pub(crate) fn rated_kennel() -> Vec<RatedBreed> {
    kennel().into_iter().map(|b| rated(b, None)).collect()
}

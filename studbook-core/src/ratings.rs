use std::collections::{BTreeMap, HashMap};

use crate::models::{Breed, RatedBreed};

/// Parsed `breed_ratings.json`: dogtime slug -> trait name -> score (1-5).
pub type RatingsMap = HashMap<String, BTreeMap<String, u8>>;

/// One scored trait within a rating category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingTrait {
    /// Stable key used in filter/sort selectors, e.g. `rat_train`.
    pub key: &'static str,
    /// Short display label.
    pub label: &'static str,
    /// Exact trait name as it appears in the ratings dataset.
    pub trait_name: &'static str,
    /// Category-summary trait rather than an individual one.
    pub is_overall: bool,
}

/// A dogtime rating category and its traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub traits: &'static [RatingTrait],
}

const fn t(key: &'static str, label: &'static str, trait_name: &'static str) -> RatingTrait {
    RatingTrait { key, label, trait_name, is_overall: false }
}

const fn overall(key: &'static str, label: &'static str, trait_name: &'static str) -> RatingTrait {
    RatingTrait { key, label, trait_name, is_overall: true }
}

/// The full dogtime trait inventory, in display order.
pub const RATING_CATEGORIES: &[RatingCategory] = &[
    RatingCategory {
        key: "adaptability",
        label: "Adaptability",
        traits: &[
            overall("rat_adapt_ovr", "Overall", "Adaptability - Overall"),
            t("rat_apt", "Apt Living", "Adapts Well To Apartment Living"),
            t("rat_novice", "Novice Owners", "Good For Novice Dog Owners"),
            t("rat_sens", "Sensitivity", "Sensitivity Level"),
            t("rat_alone", "Alone", "Tolerates Being Alone"),
            t("rat_cold", "Cold Weather", "Tolerates Cold Weather"),
            t("rat_hot", "Hot Weather", "Tolerates Hot Weather"),
        ],
    },
    RatingCategory {
        key: "friendliness",
        label: "Friendliness",
        traits: &[
            overall("rat_friend_ovr", "Overall", "All-around friendliness - Overall"),
            t("rat_family", "Family", "Best Family Dogs"),
            t("rat_kids", "Kids", "Kid-Friendly"),
            t("rat_dogs", "Dogs", "Dog Friendly"),
            t("rat_strangers", "Strangers", "Friendly Toward Strangers"),
        ],
    },
    RatingCategory {
        key: "health",
        label: "Health & Grooming",
        traits: &[
            overall("rat_health_ovr", "Overall", "Health And Grooming Needs - Overall"),
            t("rat_shed", "Shedding", "Shedding"),
            t("rat_drool", "Drooling", "Drooling Potential"),
            t("rat_groom", "Easy Groom", "Easy To Groom"),
            t("rat_health", "Gen Health", "General Health"),
            t("rat_weight", "Wt Gain", "Potential For Weight Gain"),
        ],
    },
    RatingCategory {
        key: "trainability",
        label: "Trainability",
        traits: &[
            overall("rat_train_ovr", "Overall", "Trainability - Overall"),
            t("rat_train", "Training", "Easy To Train"),
            t("rat_intel", "Intel", "Intelligence"),
            t("rat_mouth", "Mouthing", "Potential For Mouthiness"),
            t("rat_prey", "Prey Drive", "Prey Drive"),
            t("rat_bark", "Barking", "Tendency To Bark Or Howl"),
            t("rat_wander", "Wanderlust", "Wanderlust Potential"),
        ],
    },
    RatingCategory {
        key: "exercise",
        label: "Exercise",
        traits: &[
            overall("rat_exer_ovr", "Overall", "Exercise needs - Overall"),
            t("rat_energy", "Energy", "High Energy Level"),
            t("rat_intensity", "Intensity", "Intensity"),
            t("rat_exercise", "Exercise", "Exercise Needs"),
            t("rat_play", "Playfulness", "Potential For Playfulness"),
        ],
    },
];

/// Look up a trait by its selector key. Unknown keys return `None`; callers
/// treat that as "selector does nothing" rather than an error.
pub fn rating_trait(key: &str) -> Option<&'static RatingTrait> {
    RATING_CATEGORIES
        .iter()
        .flat_map(|cat| cat.traits.iter())
        .find(|t| t.key == key)
}

/// Category a trait key belongs to.
pub fn rating_category_of(key: &str) -> Option<&'static RatingCategory> {
    RATING_CATEGORIES
        .iter()
        .find(|cat| cat.traits.iter().any(|t| t.key == key))
}

/// Join breeds with their dogtime ratings by slug. Breeds without a slug or
/// without an entry in the map come out with `ratings: None`; an empty map
/// disables ratings for the whole dataset without being an error.
pub fn attach_ratings(breeds: &[Breed], ratings: &RatingsMap) -> Vec<RatedBreed> {
    breeds
        .iter()
        .map(|breed| {
            let joined = if ratings.is_empty() {
                None
            } else {
                breed
                    .dogtime_slug
                    .as_deref()
                    .and_then(|slug| ratings.get(slug))
                    .cloned()
            };
            RatedBreed { breed: breed.clone(), ratings: joined }
        })
        .collect()
}

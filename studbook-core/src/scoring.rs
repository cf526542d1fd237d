//! Service-aptitude composite derived from dogtime trait ratings.
//!
//! Twelve traits feed the score. Strongly correlated pairs are collapsed into
//! averaged group signals; the rest contribute alone. Positive signals add
//! `weight * value`, negative signals subtract, and the raw total is
//! normalized to 0-100 against the theoretical extremes.

use std::collections::BTreeMap;

/// Pair of correlated traits contributing one averaged signal.
#[derive(Debug, Clone, Copy)]
pub struct SignalGroup {
    pub name: &'static str,
    pub traits: [&'static str; 2],
    pub weight: f64,
    pub positive: bool,
}

/// Single-trait signal.
#[derive(Debug, Clone, Copy)]
pub struct Signal {
    pub trait_name: &'static str,
    pub weight: f64,
    pub positive: bool,
}

pub const SIGNAL_GROUPS: &[SignalGroup] = &[
    SignalGroup {
        name: "Cognitive",
        traits: ["Easy To Train", "Intelligence"],
        weight: 3.0,
        positive: true,
    },
    SignalGroup {
        name: "Public Demeanor",
        traits: ["Friendly Toward Strangers", "Dog Friendly"],
        weight: 2.0,
        positive: true,
    },
    SignalGroup {
        name: "Distraction",
        traits: ["Prey Drive", "Wanderlust Potential"],
        weight: 2.0,
        positive: false,
    },
];

pub const STANDALONE_SIGNALS: &[Signal] = &[
    Signal { trait_name: "General Health", weight: 2.0, positive: true },
    Signal { trait_name: "Sensitivity Level", weight: 1.5, positive: true },
    Signal { trait_name: "Tolerates Being Alone", weight: 1.0, positive: true },
    Signal { trait_name: "Tendency To Bark Or Howl", weight: 2.0, positive: false },
    Signal { trait_name: "Potential For Mouthiness", weight: 0.5, positive: false },
    Signal { trait_name: "Drooling Potential", weight: 0.5, positive: false },
];

/// Raw total when every positive signal is `positive_val` and every negative
/// signal is `negative_val`. Feeds the normalization extremes.
fn extreme_raw(positive_val: f64, negative_val: f64) -> f64 {
    let mut total = 0.0;
    for group in SIGNAL_GROUPS {
        total += if group.positive {
            group.weight * positive_val
        } else {
            -group.weight * negative_val
        };
    }
    for signal in STANDALONE_SIGNALS {
        total += if signal.positive {
            signal.weight * positive_val
        } else {
            -signal.weight * negative_val
        };
    }
    total
}

fn raw_extremes() -> (f64, f64) {
    // Best case scores every positive 5 and every negative 1; worst case the
    // reverse. With the tables above: +42.5 and -15.5.
    (extreme_raw(1.0, 5.0), extreme_raw(5.0, 1.0))
}

/// Composite score on 0-100, rounded to one decimal. `None` when a standalone
/// trait is missing or a group has neither of its traits; a group with one of
/// its two traits averages what it has.
pub fn service_score_percent(traits: &BTreeMap<String, u8>) -> Option<f64> {
    let mut raw = 0.0;

    for group in SIGNAL_GROUPS {
        let vals: Vec<f64> = group
            .traits
            .iter()
            .filter_map(|t| traits.get(*t).map(|v| f64::from(*v)))
            .collect();
        if vals.is_empty() {
            return None;
        }
        let avg = vals.iter().sum::<f64>() / vals.len() as f64;
        raw += if group.positive { group.weight * avg } else { -group.weight * avg };
    }

    for signal in STANDALONE_SIGNALS {
        let v = f64::from(*traits.get(signal.trait_name)?);
        raw += if signal.positive { signal.weight * v } else { -signal.weight * v };
    }

    let (raw_min, raw_max) = raw_extremes();
    let score = (raw - raw_min) / (raw_max - raw_min) * 100.0;
    Some((score * 10.0).round() / 10.0)
}

/// Collapse a 0-100 percentage onto the stored 1-5 scale in equal 20-point
/// bands; 100 lands in the top band.
pub fn service_band(percent: f64) -> u8 {
    let band = (percent / 20.0).floor() as i64 + 1;
    band.clamp(1, 5) as u8
}

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub data_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let data_dir = make_fixture_dataset(tmp.path());
        Self {
            _tmp: tmp,
            data_dir,
        }
    }

    /// Command wired to the fixture dataset directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("studbook").expect("studbook binary");
        cmd.arg("--data").arg(&self.data_dir);
        cmd
    }

    /// Command against the built-in snapshot instead of the fixture.
    pub fn bare_cmd(&self) -> Command {
        Command::cargo_bin("studbook").expect("studbook binary")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn breeds_file(&self) -> PathBuf {
        self.data_dir.join("large_dog_breeds.json")
    }

    /// Replace the fixture breeds file wholesale.
    pub fn write_breeds(&self, breeds: &Value) {
        fs::write(
            self.breeds_file(),
            serde_json::to_string_pretty(breeds).expect("serialize breeds"),
        )
        .expect("write breeds file");
    }
}

/// Four breeds with deliberately varied fields: Great Dane, Akita, Borzoi,
/// Boxer. The Great Dane carries a full set of scored rating traits; the
/// Borzoi a partial one.
fn make_fixture_dataset(base: &Path) -> PathBuf {
    let data = base.join("data");
    fs::create_dir_all(&data).expect("create data dir");

    let breeds = fixture_breeds();
    fs::write(
        data.join("large_dog_breeds.json"),
        serde_json::to_string_pretty(&breeds).expect("serialize breeds"),
    )
    .expect("write breeds file");

    let ratings = json!({
        "great-dane": {
            "Easy To Train": 3,
            "Intelligence": 5,
            "Friendly Toward Strangers": 5,
            "Dog Friendly": 5,
            "Prey Drive": 2,
            "Wanderlust Potential": 2,
            "General Health": 4,
            "Sensitivity Level": 3,
            "Tolerates Being Alone": 2,
            "Tendency To Bark Or Howl": 2,
            "Potential For Mouthiness": 3,
            "Drooling Potential": 5,
            "Adaptability - Overall": 3
        },
        "borzoi": {
            "Easy To Train": 2,
            "Intelligence": 3
        }
    });
    fs::write(
        data.join("breed_ratings.json"),
        serde_json::to_string_pretty(&ratings).expect("serialize ratings"),
    )
    .expect("write ratings file");

    data
}

pub fn fixture_breeds() -> Value {
    json!([
        {
            "name": "Great Dane",
            "origin": "Germany",
            "weight_lbs": {"min": 110, "max": 175},
            "height_in": {"min": 28, "max": 32},
            "lifespan_yrs": {"min": 7, "max": 10},
            "temperament": ["Friendly", "Patient"],
            "purpose": ["Guardian", "Companion"],
            "grooming": "Low",
            "exercise": "Moderate",
            "shedding": "Moderate",
            "trainability": "Easy",
            "good_with_kids": true,
            "good_with_dogs": true,
            "coat": "Short",
            "health_notes": "Bloat risk; cardiomyopathy",
            "color": "#c8a96e",
            "service_dog_score": 4,
            "dogtime_slug": "great-dane"
        },
        {
            "name": "Akita",
            "origin": "Japan",
            "weight_lbs": {"min": 70, "max": 130},
            "height_in": {"min": 24, "max": 28},
            "lifespan_yrs": {"min": 10, "max": 13},
            "temperament": ["Dignified", "Loyal"],
            "purpose": ["Guardian"],
            "grooming": "Moderate",
            "exercise": "Moderate",
            "shedding": "High",
            "trainability": "Hard",
            "good_with_kids": false,
            "good_with_dogs": false,
            "coat": "Double",
            "health_notes": "Hip dysplasia",
            "color": "#c87941",
            "dogtime_slug": "akita"
        },
        {
            "name": "Borzoi",
            "origin": "Russia",
            "weight_lbs": {"min": 60, "max": 105},
            "height_in": {"min": 26, "max": 33},
            "lifespan_yrs": {"min": 9, "max": 14},
            "temperament": ["Quiet", "Gentle"],
            "purpose": ["Hunting"],
            "grooming": "High",
            "exercise": "High",
            "shedding": "High",
            "trainability": "Moderate",
            "good_with_kids": true,
            "good_with_dogs": false,
            "coat": "Silky",
            "health_notes": "Generally healthy",
            "color": "#8b9e7a",
            "service_dog_score": 2,
            "dogtime_slug": "borzoi"
        },
        {
            "name": "Boxer",
            "origin": "Germany",
            "weight_lbs": {"min": 50, "max": 80},
            "height_in": {"min": 21.5, "max": 25},
            "lifespan_yrs": {"min": 10, "max": 12},
            "temperament": ["Playful", "Energetic"],
            "purpose": ["Companion", "Working"],
            "grooming": "Low",
            "exercise": "High",
            "shedding": "Moderate",
            "trainability": "Easy",
            "good_with_kids": true,
            "good_with_dogs": true,
            "coat": "Short",
            "health_notes": "Heart conditions",
            "color": "#c8854d",
            "service_dog_score": 5,
            "dogtime_slug": "boxer"
        }
    ])
}

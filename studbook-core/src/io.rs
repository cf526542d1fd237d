use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Breed;
use crate::ratings::RatingsMap;

/// Conventional file names the dataset ships under.
pub const BREEDS_FILE: &str = "large_dog_breeds.json";
pub const RATINGS_FILE: &str = "breed_ratings.json";

static EMBEDDED_BREEDS_JSON: &str = include_str!("embedded_breeds.json");

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a breeds array from JSON text.
pub fn parse_breeds(json: &str) -> Result<Vec<Breed>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a ratings map (slug -> trait -> score) from JSON text.
pub fn parse_ratings(json: &str) -> Result<RatingsMap, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_breeds<P: AsRef<Path>>(path: P) -> Result<Vec<Breed>, DatasetError> {
    parse_breeds(&read(path.as_ref())?)
}

pub fn load_ratings<P: AsRef<Path>>(path: P) -> Result<RatingsMap, DatasetError> {
    parse_ratings(&read(path.as_ref())?)
}

/// Write the breeds array back as pretty-printed JSON. Fields the models do
/// not know about ride along in each record's flatten map, so a load/save
/// cycle does not strip them.
pub fn save_breeds<P: AsRef<Path>>(path: P, breeds: &[Breed]) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(breeds)?;
    fs::write(path, json).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// The compiled-in snapshot used when no other source is reachable.
pub fn embedded_breeds() -> Result<Vec<Breed>, DatasetError> {
    parse_breeds(EMBEDDED_BREEDS_JSON)
}

fn read(path: &Path) -> Result<String, DatasetError> {
    fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

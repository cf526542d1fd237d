use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;
use studbook_core::io::{
    embedded_breeds, load_breeds, load_ratings, parse_breeds, parse_ratings, DatasetError,
    BREEDS_FILE, RATINGS_FILE,
};
use studbook_core::models::Breed;
use studbook_core::ratings::RatingsMap;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("fetch failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("every data source failed")]
    Exhausted,
}

/// One place breed data can come from.
pub trait DataSource {
    fn describe(&self) -> String;
    fn load_breeds(&self) -> Result<Vec<Breed>, SourceError>;
    fn load_ratings(&self) -> Result<RatingsMap, SourceError>;
}

/// HTTP source serving the two dataset files under a base URL.
pub struct RemoteSource {
    base: String,
}

impl RemoteSource {
    pub fn new(base: &str) -> RemoteSource {
        RemoteSource {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn fetch(&self, file: &str) -> Result<String, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        let resp = client
            .get(format!("{}/{}", self.base, file))
            .send()?
            .error_for_status()?;
        Ok(resp.text()?)
    }
}

impl DataSource for RemoteSource {
    fn describe(&self) -> String {
        self.base.clone()
    }

    fn load_breeds(&self) -> Result<Vec<Breed>, SourceError> {
        Ok(parse_breeds(&self.fetch(BREEDS_FILE)?)?)
    }

    fn load_ratings(&self) -> Result<RatingsMap, SourceError> {
        Ok(parse_ratings(&self.fetch(RATINGS_FILE)?)?)
    }
}

/// Local directory holding the same two files.
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> FileSource {
        FileSource { dir: dir.into() }
    }

    pub fn breeds_path(&self) -> PathBuf {
        self.dir.join(BREEDS_FILE)
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn load_breeds(&self) -> Result<Vec<Breed>, SourceError> {
        Ok(load_breeds(self.breeds_path())?)
    }

    fn load_ratings(&self) -> Result<RatingsMap, SourceError> {
        Ok(load_ratings(self.dir.join(RATINGS_FILE))?)
    }
}

/// Compiled-in snapshot; carries no ratings.
pub struct EmbeddedSource;

impl DataSource for EmbeddedSource {
    fn describe(&self) -> String {
        "built-in snapshot".to_string()
    }

    fn load_breeds(&self) -> Result<Vec<Breed>, SourceError> {
        Ok(embedded_breeds()?)
    }

    fn load_ratings(&self) -> Result<RatingsMap, SourceError> {
        Ok(RatingsMap::new())
    }
}

/// One loaded dataset, breeds joined with whatever ratings came along.
/// `source` is the `describe()` of the source that supplied the breeds, so
/// write paths can tell real data from fallback data.
pub struct DatasetBundle {
    pub breeds: Vec<Breed>,
    pub ratings: RatingsMap,
    pub source: String,
}

/// Ordered source attempts. The first source that yields breeds wins;
/// ratings come from that same source and degrade to an empty map on
/// failure rather than falling further down the chain.
pub struct SourceChain {
    sources: Vec<Box<dyn DataSource>>,
}

impl SourceChain {
    pub fn new(sources: Vec<Box<dyn DataSource>>) -> SourceChain {
        SourceChain { sources }
    }

    /// Chain for a user-supplied `--data` value: URLs try the network first,
    /// anything else is treated as a directory; the snapshot backstops both.
    pub fn for_data_arg(data: Option<&str>) -> SourceChain {
        let sources: Vec<Box<dyn DataSource>> = match data {
            Some(s) if s.starts_with("http://") || s.starts_with("https://") => {
                vec![Box::new(RemoteSource::new(s)), Box::new(EmbeddedSource)]
            }
            Some(s) => vec![Box::new(FileSource::new(s)), Box::new(EmbeddedSource)],
            None => vec![Box::new(EmbeddedSource)],
        };
        SourceChain::new(sources)
    }

    pub fn load(&self) -> Result<DatasetBundle, SourceError> {
        let mut last_failure = None;
        for (idx, source) in self.sources.iter().enumerate() {
            match source.load_breeds() {
                Ok(breeds) => {
                    if idx > 0 {
                        eprintln!(
                            "{}",
                            format!("note: using {}", source.describe()).yellow()
                        );
                    }
                    let ratings = source.load_ratings().unwrap_or_default();
                    return Ok(DatasetBundle {
                        breeds,
                        ratings,
                        source: source.describe(),
                    });
                }
                Err(err) => {
                    if idx + 1 < self.sources.len() {
                        eprintln!(
                            "{}",
                            format!("note: {} unavailable ({})", source.describe(), err).yellow()
                        );
                    }
                    last_failure = Some(err);
                }
            }
        }
        Err(last_failure.unwrap_or(SourceError::Exhausted))
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};
use studbook_core::models::Breed;

use crate::errors::api_unreachable_message;

const API_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What the curation endpoints answer. Failure statuses still carry this
/// shape with `ok: false` and an `error` string; the optional `cli` field is
/// a command the user can run instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<Breed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli: Option<String>,
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}

impl MutationResponse {
    /// Display name of the affected breed, wherever the server put it.
    pub fn breed_name(&self) -> Option<&str> {
        self.breed
            .as_ref()
            .map(|b| b.name.as_str())
            .or(self.name.as_deref())
    }
}

/// Client for the add/remove curation endpoints.
pub struct BreedApi {
    base: String,
}

impl BreedApi {
    pub fn new(base: &str) -> BreedApi {
        BreedApi {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn add(&self, name: &str) -> Result<MutationResponse, ApiError> {
        self.post(ADD_ROUTE, name)
    }

    pub fn remove(&self, name: &str) -> Result<MutationResponse, ApiError> {
        self.post(REMOVE_ROUTE, name)
    }

    fn post(&self, route: &str, name: &str) -> Result<MutationResponse, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(API_TIMEOUT)
            .build()?;
        let resp = client
            .post(format!("{}{}", self.base, route))
            .json(&serde_json::json!({ "name": name }))
            .send()?;
        // 4xx/5xx answers still describe the failure in the body.
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Local stand-in response for a request that never reached the server,
    /// with a curl command the user can retry by hand.
    pub fn offline_fallback(&self, route: &str, name: &str) -> MutationResponse {
        MutationResponse {
            ok: false,
            breed: None,
            placeholders: None,
            name: Some(name.to_string()),
            slug: None,
            removed_files: None,
            error: Some(api_unreachable_message(&self.base)),
            cli: Some(format!(
                "curl -X POST {}{} -H 'Content-Type: application/json' -d '{}'",
                self.base,
                route,
                serde_json::json!({ "name": name })
            )),
            extra: std::collections::HashMap::new(),
        }
    }
}

pub const ADD_ROUTE: &str = "/api/add-breed";
pub const REMOVE_ROUTE: &str = "/api/remove-breed";

use crate::error::{ApiError, ApiResult};
use serde::Deserialize;

pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";

const USER_AGENT: &str = "D2D-Automations-BinderMerge/1.0";

/// Scryfall card response, reduced to what the import needs
#[derive(Debug, Deserialize, Clone)]
pub struct ScryfallCard {
    pub name: String,
}

/// Scryfall API error response
#[derive(Debug, Deserialize)]
pub struct ScryfallError {
    pub code: String,
    pub details: String,
}

/// Blocking Scryfall client. Requests are issued one at a time.
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ScryfallClient {
    pub fn new() -> Self {
        Self::with_base_url(SCRYFALL_API_URL)
    }

    /// Client talking to a different host, e.g. a mock server in tests
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a card by set code and collector number
    pub fn fetch_card(&self, set_code: &str, collector_number: &str) -> ApiResult<ScryfallCard> {
        let url = format!("{}/cards/{}/{}", self.base_url, set_code, collector_number);

        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if status.is_success() {
            Ok(serde_json::from_str::<ScryfallCard>(&body)?)
        } else {
            match serde_json::from_str::<ScryfallError>(&body) {
                Ok(error) => Err(ApiError::ApiResponse {
                    status,
                    code: error.code,
                    details: error.details,
                }),
                Err(_) => Err(ApiError::HttpStatus(status)),
            }
        }
    }
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;

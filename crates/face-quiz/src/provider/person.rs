use serde::Deserialize;

use crate::provider::ProviderError;

/// Response body of the people-data API. Only the fields the game reads.
#[derive(Debug, Deserialize)]
pub struct PersonResponse {
    pub results: Vec<PersonRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub name: PersonName,
    pub picture: Picture,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Picture {
    pub large: String,
}

impl PersonRecord {
    /// Parse a response body and take its first record.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let response: PersonResponse = serde_json::from_str(json)?;
        response
            .results
            .into_iter()
            .next()
            .ok_or(ProviderError::MissingRecord)
    }

    /// `"First Last"`, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first.trim(), self.name.last.trim())
            .trim()
            .to_string()
    }

    pub fn image_url(&self) -> &str {
        &self.picture.large
    }
}

use face_quiz::{PersonFetcher, ProviderError};
use gloo::net::http::Request;

/// Person fetcher backed by the browser's `fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl PersonFetcher for HttpFetcher {
    async fn fetch_person(&self, url: &str) -> Result<String, ProviderError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| ProviderError::Http(err.to_string()))?;
        if !response.ok() {
            return Err(ProviderError::Status(response.status()));
        }
        response
            .text()
            .await
            .map_err(|err| ProviderError::Http(err.to_string()))
    }
}

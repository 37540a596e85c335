use contracts::domain::a001_listing::dataset::parse_dataset;
use contracts::domain::a001_listing::{Listing, LoadError};
use gloo_net::http::Request;

/// Fetch the listings dataset and keep its first entries.
pub async fn fetch_listings(url: &str) -> Result<Vec<Listing>, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    parse_dataset(&body)
}

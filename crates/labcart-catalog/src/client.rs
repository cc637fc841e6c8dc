//! Async client for the lab directory service.

use reqwest::Url;

use crate::records::{CatalogError, CatalogResult, Pathology, PathologyDetails};

/// Client for `GET /labs` and `GET /labs/{id}`.
#[derive(Debug, Clone)]
pub struct LabDirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl LabDirectoryClient {
    /// Create a client for a directory service base URL (e.g., `http://localhost:4000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// List labs serving a city.
    pub async fn list_labs(&self, city: &str) -> CatalogResult<Vec<Pathology>> {
        let url = self.endpoint(&["labs"])?;
        tracing::debug!(%url, city, "fetching lab list");

        let response = self.http.get(url.clone()).query(&[("city", city)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch one lab's detail record.
    ///
    /// The id is sent as a single path segment, so `/`, `?` and `#` in it are
    /// percent-encoded rather than changing the request.
    pub async fn get_lab(&self, lab_id: &str) -> CatalogResult<PathologyDetails> {
        let url = self.endpoint(&["labs", lab_id])?;
        tracing::debug!(%url, "fetching lab details");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Base URL with `segments` appended, each encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> CatalogResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_id_as_one_segment() {
        let client = LabDirectoryClient::new("http://localhost:4000/");
        let url = client.endpoint(&["labs", "a/b?c#d"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/labs/a%2Fb%3Fc%23d");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = LabDirectoryClient::new("http://localhost:4000/api/");
        let url = client.endpoint(&["labs"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/api/labs");
    }

    #[test]
    fn test_unusable_base_rejected() {
        let client = LabDirectoryClient::new("not a url");
        assert!(matches!(
            client.endpoint(&["labs"]),
            Err(CatalogError::InvalidUrl(_))
        ));

        let client = LabDirectoryClient::new("mailto:labs@example.com");
        assert!(matches!(
            client.endpoint(&["labs"]),
            Err(CatalogError::InvalidUrl(_))
        ));
    }
}

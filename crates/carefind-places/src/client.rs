//! HTTP client for the places nearby-search API.
//!
//! Wraps `reqwest` with API key management, typed response deserialization,
//! and the status-envelope handling the API uses: `"OK"` and
//! `"ZERO_RESULTS"` are success, anything else is surfaced as
//! [`PlacesError::Api`].

use std::collections::HashSet;
use std::time::Duration;

use reqwest::{Client, Url};

use carefind_core::{Coordinate, HospitalRecord};

use crate::error::PlacesError;
use crate::normalize::place_to_record;
use crate::types::{PlaceResult, PlacesResponse};
use crate::HEALTHCARE_CATEGORIES;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Pipe-joined category union used by keyword searches.
const KEYWORD_TYPE_UNION: &str = "hospital|health|doctor|clinic";

/// Client for the places nearby-search API.
///
/// Manages the HTTP client, API key, and endpoint URL. Use
/// [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom endpoint URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("carefind/0.1 (hospital-finder)")
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| PlacesError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs one nearby search scoped to `origin` and `radius_m` for a single
    /// category (e.g. `"hospital"`).
    ///
    /// `"ZERO_RESULTS"` is an empty success, not an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API returns a non-success status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn nearby_search(
        &self,
        origin: Coordinate,
        radius_m: u32,
        category: &str,
    ) -> Result<Vec<PlaceResult>, PlacesError> {
        let url = self.build_url(origin, radius_m, &[("type", category)]);
        let response = self.request(&url, &format!("nearby_search(type={category})")).await?;
        Self::check_envelope(response)
    }

    /// Keyword variant of the nearby search, scoped to the union of all
    /// healthcare categories.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`PlacesClient::nearby_search`].
    pub async fn search_nearby(
        &self,
        origin: Coordinate,
        keyword: &str,
        radius_m: u32,
    ) -> Result<Vec<HospitalRecord>, PlacesError> {
        let url = self.build_url(
            origin,
            radius_m,
            &[("keyword", keyword), ("type", KEYWORD_TYPE_UNION)],
        );
        let response = self
            .request(&url, &format!("search_nearby(keyword={keyword})"))
            .await?;
        let results = Self::check_envelope(response)?;
        Ok(results
            .iter()
            .filter(|p| !is_permanently_closed(p))
            .map(place_to_record)
            .collect())
    }

    /// Fetches healthcare facilities around `origin` by querying every
    /// category in [`HEALTHCARE_CATEGORIES`], deduplicating by `place_id`
    /// across categories and skipping permanently closed places.
    ///
    /// Per-category failures are logged and skipped so one bad query never
    /// aborts the rest; if everything fails or comes back empty the result
    /// is simply an empty vec, which the aggregator treats as the signal to
    /// fall back to the internal directory.
    pub async fn fetch_nearby_hospitals(
        &self,
        origin: Coordinate,
        radius_m: u32,
    ) -> Vec<HospitalRecord> {
        let mut records = Vec::new();
        let mut seen_place_ids: HashSet<String> = HashSet::new();

        for category in HEALTHCARE_CATEGORIES {
            match self.nearby_search(origin, radius_m, category).await {
                Ok(places) => {
                    tracing::debug!(category, count = places.len(), "nearby search succeeded");
                    for place in places {
                        if !seen_place_ids.insert(place.place_id.clone()) {
                            continue;
                        }
                        if is_permanently_closed(&place) {
                            continue;
                        }
                        records.push(place_to_record(&place));
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        category,
                        error = %e,
                        "nearby search failed for category; continuing with the rest"
                    );
                }
            }
        }

        tracing::info!(total = records.len(), "external places aggregation complete");
        records
    }

    /// Builds the request URL with percent-encoded query parameters:
    /// `location`, `radius`, `key`, plus the given extras.
    fn build_url(&self, origin: Coordinate, radius_m: u32, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(
                "location",
                &format!("{},{}", origin.latitude, origin.longitude),
            );
            pairs.append_pair("radius", &radius_m.to_string());
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// into the response envelope.
    async fn request(&self, url: &Url, context: &str) -> Result<PlacesResponse, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Unwraps the status envelope: `"OK"` yields results, `"ZERO_RESULTS"`
    /// yields an empty vec, anything else is an API error.
    fn check_envelope(response: PlacesResponse) -> Result<Vec<PlaceResult>, PlacesError> {
        match response.status.as_str() {
            "OK" => Ok(response.results),
            "ZERO_RESULTS" => Ok(Vec::new()),
            other => Err(PlacesError::Api(
                response
                    .error_message
                    .unwrap_or_else(|| format!("status {other}")),
            )),
        }
    }
}

fn is_permanently_closed(place: &PlaceResult) -> bool {
    place.business_status.as_deref() == Some("CLOSED_PERMANENTLY")
}

//! Google Places text search with legacy-to-v1 fallback
//!
//! The legacy text search endpoint is always tried first (cost and
//! quota preference), then the v1 endpoint when the legacy call does
//! not report an OK status. Both shapes normalize to [`PlaceResult`].

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::core::AppConfig;

const SEARCH_TIMEOUT: Duration = Duration::from_millis(4000);

// Restricts the v1 response to the attributes normalization consumes
const V1_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,places.location,places.rating,places.userRatingCount";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Legacy,
    V1,
}

/// A search hit normalized to one shape regardless of which provider
/// produced it. The maps and directions URLs derive only from the
/// place ID; the embed URL exists only when both coordinates resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    pub place_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u64>,
    pub directions_url: String,
    pub maps_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_iframe_src: Option<String>,
}

/// Outcome of one search call. Upstream failures are reported in-band
/// via `status` and `error_message` with empty results, never as an
/// error from the client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    // Outer None omits the field (success); Some(None) emits an
    // explicit null (failure with no upstream message)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<Option<String>>,
    pub results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct LegacyTextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<LegacyPlace>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LegacyPlace {
    name: String,
    formatted_address: Option<String>,
    geometry: Option<LegacyGeometry>,
    place_id: String,
    rating: Option<f64>,
    user_ratings_total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct LegacyGeometry {
    location: Option<LegacyLatLng>,
}

#[derive(Debug, Deserialize)]
struct LegacyLatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct V1TextSearchResponse {
    #[serde(default)]
    places: Vec<V1Place>,
    error: Option<V1Error>,
    status: Option<String>,
}

// In-body error payload returned by the v1 endpoint on rejected
// requests, e.g. an invalid API key
#[derive(Debug, Deserialize)]
struct V1Error {
    message: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct V1Place {
    id: String,
    name: Option<String>,
    display_name: Option<V1LocalizedText>,
    formatted_address: Option<String>,
    location: Option<V1LatLng>,
    rating: Option<f64>,
    user_rating_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct V1LocalizedText {
    text: String,
}

#[derive(Debug, Deserialize)]
struct V1LatLng {
    latitude: f64,
    longitude: f64,
}

fn directions_url(place_id: &str) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination=place_id:{place_id}")
}

fn maps_url(place_id: &str) -> String {
    format!("https://www.google.com/maps/place/?q=place_id:{place_id}")
}

// Coordinates at exactly 0.0 are treated as unknown, matching how the
// upstream payloads use them
fn embed_iframe_src(lat: Option<f64>, lng: Option<f64>) -> Option<String> {
    match (lat, lng) {
        (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => Some(format!(
            "https://www.google.com/maps?q={lat},{lng}&output=embed"
        )),
        _ => None,
    }
}

fn legacy_place_to_result(place: LegacyPlace) -> PlaceResult {
    let location = place.geometry.and_then(|g| g.location);
    let lat = location.as_ref().map(|l| l.lat);
    let lng = location.as_ref().map(|l| l.lng);
    PlaceResult {
        name: place.name,
        address: place.formatted_address,
        lat,
        lng,
        directions_url: directions_url(&place.place_id),
        maps_url: maps_url(&place.place_id),
        embed_iframe_src: embed_iframe_src(lat, lng),
        place_id: place.place_id,
        rating: place.rating,
        user_ratings_total: place.user_ratings_total,
    }
}

fn v1_place_to_result(place: V1Place) -> PlaceResult {
    let lat = place.location.as_ref().map(|l| l.latitude);
    let lng = place.location.as_ref().map(|l| l.longitude);
    let name = place
        .display_name
        .map(|d| d.text)
        .or(place.name)
        .unwrap_or_default();
    PlaceResult {
        name,
        address: place.formatted_address,
        lat,
        lng,
        directions_url: directions_url(&place.id),
        maps_url: maps_url(&place.id),
        embed_iframe_src: embed_iframe_src(lat, lng),
        place_id: place.id,
        rating: place.rating,
        user_ratings_total: place.user_rating_count,
    }
}

/// Client for the two place text search providers.
#[derive(Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    api_key: String,
    legacy_url: String,
    v1_url: String,
}

impl PlacesClient {
    pub fn new(api_key: &str, legacy_url: &str, v1_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            legacy_url: legacy_url.to_string(),
            v1_url: v1_url.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.maps_api_key,
            &config.maps_legacy_api_url,
            &config.maps_v1_api_url,
        )
    }

    async fn legacy_search(
        &self,
        query: &str,
        open_now: Option<bool>,
    ) -> Result<LegacyTextSearchResponse> {
        let mut params = vec![
            ("query", query.to_string()),
            ("key", self.api_key.clone()),
            ("language", "id".to_string()),
            ("region", "ID".to_string()),
        ];
        if open_now == Some(true) {
            params.push(("opennow", "true".to_string()));
        }

        let response = self
            .http
            .get(&self.legacy_url)
            .query(&params)
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await?
            .json()
            .await?;

        Ok(response)
    }

    async fn v1_search(
        &self,
        query: &str,
        open_now: Option<bool>,
        top_k: usize,
    ) -> Result<V1TextSearchResponse> {
        let body = json!({
            "textQuery": query,
            "openNow": open_now.unwrap_or(false),
            "maxResultCount": top_k,
            "languageCode": "id",
            "regionCode": "ID",
        });

        let response = self
            .http
            .post(&self.v1_url)
            .header("Content-Type", "application/json")
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", V1_FIELD_MASK)
            .timeout(SEARCH_TIMEOUT)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        Ok(response)
    }

    /// Search both providers in order and normalize whichever
    /// succeeds. The legacy endpoint always goes first and the v1
    /// endpoint is only consulted when legacy does not report OK; the
    /// two calls are never made concurrently.
    pub async fn search(
        &self,
        query: &str,
        open_now: Option<bool>,
        top_k: usize,
    ) -> SearchOutcome {
        let legacy = match self.legacy_search(query, open_now).await {
            Ok(resp) if resp.status == "OK" => {
                return SearchOutcome {
                    status: "OK".to_string(),
                    provider: Some(Provider::Legacy),
                    error_message: None,
                    results: resp
                        .results
                        .into_iter()
                        .take(top_k)
                        .map(legacy_place_to_result)
                        .collect(),
                };
            }
            other => other,
        };

        let v1_error = match self.v1_search(query, open_now, top_k).await {
            Ok(resp) if !resp.places.is_empty() => {
                return SearchOutcome {
                    status: "OK".to_string(),
                    provider: Some(Provider::V1),
                    error_message: None,
                    results: resp
                        .places
                        .into_iter()
                        .take(top_k)
                        .map(v1_place_to_result)
                        .collect(),
                };
            }
            Ok(resp) => resp
                .error
                .and_then(|e| e.message.or(e.status))
                .or(resp.status),
            Err(e) => Some(e.to_string()),
        };

        // Neither provider produced results. Surface whatever status
        // and message the attempts left behind for client-side debug.
        let (legacy_status, legacy_error) = match legacy {
            Ok(resp) => (Some(resp.status), resp.error_message),
            Err(_) => (None, None),
        };
        tracing::warn!(
            "Place search failed: legacy status {:?}, v1 error {:?}",
            legacy_status.as_deref(),
            v1_error.as_deref()
        );
        SearchOutcome {
            status: legacy_status
                .or_else(|| v1_error.clone())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            provider: None,
            error_message: Some(legacy_error.or(v1_error)),
            results: vec![],
        }
    }
}

//! Free-text place name lookup.
//!
//! A thin client for a Nominatim-compatible geocoding service. Lookups never
//! fail loudly: network errors, parse errors, and empty result sets all
//! collapse to "no result", so callers treat failure and absence identically.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeocodingConfig;
use crate::error::{Error, Result};

/// A resolved place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Human-readable place description from the service.
    pub display_name: String,
}

/// One raw entry of a Nominatim search response. Coordinates arrive as
/// strings and are parsed on our side.
#[derive(Debug, Clone, Deserialize)]
struct RawPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Client for place name lookups.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    endpoint: String,
}

impl Geocoder {
    /// Build a geocoder from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| Error::GeocoderInit { source })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Look up a free-text place name.
    ///
    /// Returns the first result, or `None` for an empty query, an empty
    /// result set, or any network/parse failure. Failures are logged at
    /// debug level and never propagated.
    pub async fn lookup(&self, place: &str) -> Option<GeocodeResult> {
        let place = place.trim();
        if place.is_empty() {
            return None;
        }

        let response = match self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("q", place)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                debug!(%err, "geocoding request failed");
                return None;
            }
        };

        let places: Vec<RawPlace> = match response.json().await {
            Ok(places) => places,
            Err(err) => {
                debug!(%err, "geocoding response was not parseable");
                return None;
            }
        };

        first_result(places)
    }
}

/// Pick the first usable entry out of a raw response.
fn first_result(places: Vec<RawPlace>) -> Option<GeocodeResult> {
    let place = places.into_iter().next()?;
    let latitude = place.lat.parse().ok()?;
    let longitude = place.lon.parse().ok()?;
    Some(GeocodeResult {
        latitude,
        longitude,
        display_name: place.display_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lat: &str, lon: &str, name: &str) -> RawPlace {
        RawPlace {
            lat: lat.to_string(),
            lon: lon.to_string(),
            display_name: name.to_string(),
        }
    }

    #[test]
    fn test_first_result_empty_is_none() {
        assert!(first_result(Vec::new()).is_none());
    }

    #[test]
    fn test_first_result_takes_first_entry() {
        let places = vec![
            raw("48.8566", "2.3522", "Paris, France"),
            raw("33.6617", "-95.5555", "Paris, Texas"),
        ];

        let result = first_result(places).unwrap();
        assert!((result.latitude - 48.8566).abs() < 1e-9);
        assert!((result.longitude - 2.3522).abs() < 1e-9);
        assert_eq!(result.display_name, "Paris, France");
    }

    #[test]
    fn test_first_result_unparseable_coordinates_is_none() {
        assert!(first_result(vec![raw("not-a-number", "2.0", "x")]).is_none());
        assert!(first_result(vec![raw("2.0", "", "x")]).is_none());
    }

    #[test]
    fn test_raw_response_deserializes() {
        // Shape of an actual service response, including extra fields
        let body = r#"[{"place_id": 1, "lat": "10.5", "lon": "-3.25", "display_name": "Somewhere"}]"#;
        let places: Vec<RawPlace> = serde_json::from_str(body).unwrap();
        let result = first_result(places).unwrap();
        assert!((result.latitude - 10.5).abs() < 1e-9);
        assert!((result.longitude + 3.25).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_lookup_empty_place_is_none() {
        let geocoder = Geocoder::new(&GeocodingConfig::default()).unwrap();
        assert!(geocoder.lookup("").await.is_none());
        assert!(geocoder.lookup("   ").await.is_none());
    }

    #[tokio::test]
    async fn test_lookup_unreachable_endpoint_is_none() {
        let config = GeocodingConfig {
            // Reserved TEST-NET address: connection fails fast, no real traffic
            endpoint: "http://192.0.2.1:1/search".to_string(),
            timeout_secs: 1,
            ..GeocodingConfig::default()
        };
        let geocoder = Geocoder::new(&config).unwrap();
        assert!(geocoder.lookup("anywhere").await.is_none());
    }

    #[test]
    fn test_geocode_result_serialization() {
        let result = GeocodeResult {
            latitude: 1.5,
            longitude: -2.5,
            display_name: "Test".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let parsed: GeocodeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }
}

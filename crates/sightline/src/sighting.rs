//! Synthetic sighting records.
//!
//! This module defines the sighting data produced by the discovery tick:
//! randomly placed geocoded records with a confidence score, a source label,
//! and a timestamp within the recent past.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive latitude band sightings are generated in (narrower than the
/// full globe so markers avoid the polar edges of the plot).
pub const LATITUDE_RANGE: (f64, f64) = (-70.0, 70.0);

/// Inclusive longitude band sightings are generated in.
pub const LONGITUDE_RANGE: (f64, f64) = (-170.0, 170.0);

/// How far back in time generated sighting timestamps may fall.
pub const MAX_SIGHTING_AGE_DAYS: i64 = 30;

/// The kind of source that produced a sighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SightingSource {
    /// A public social media post.
    SocialMedia,
    /// A publicly operated camera feed.
    PublicCamera,
    /// A published news report.
    NewsReport,
    /// A travel or transit record.
    TravelRecord,
    /// A first-hand witness report.
    WitnessReport,
}

impl SightingSource {
    /// All source kinds, in the order used for uniform sampling.
    pub const ALL: [Self; 5] = [
        Self::SocialMedia,
        Self::PublicCamera,
        Self::NewsReport,
        Self::TravelRecord,
        Self::WitnessReport,
    ];
}

impl std::fmt::Display for SightingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SocialMedia => write!(f, "Social Media"),
            Self::PublicCamera => write!(f, "Public Camera"),
            Self::NewsReport => write!(f, "News Report"),
            Self::TravelRecord => write!(f, "Travel Record"),
            Self::WitnessReport => write!(f, "Witness Report"),
        }
    }
}

/// A synthetic geocoded sighting record.
///
/// Created by the discovery tick while a search is active; appended to the
/// session's append-only sighting list and cleared when a new search begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightingLocation {
    /// Identifier unique within a search session, monotonically assigned.
    pub id: u32,

    /// Latitude in degrees, within [`LATITUDE_RANGE`].
    pub latitude: f64,

    /// Longitude in degrees, within [`LONGITUDE_RANGE`].
    pub longitude: f64,

    /// Synthetic confidence score in [0, 1). Used only for marker
    /// classification, not a statistically meaningful probability.
    pub confidence: f64,

    /// The kind of source the sighting is attributed to.
    pub source: SightingSource,

    /// When the sighting supposedly occurred, within the past 30 days.
    pub timestamp: DateTime<Utc>,
}

impl SightingLocation {
    /// Generate a random sighting with the given id.
    ///
    /// All draws come from the injected random source so generation is
    /// reproducible under a seeded generator; `now` anchors the timestamp.
    pub fn generate<R: Rng + ?Sized>(id: u32, rng: &mut R, now: DateTime<Utc>) -> Self {
        let latitude = rng.gen_range(LATITUDE_RANGE.0..LATITUDE_RANGE.1);
        let longitude = rng.gen_range(LONGITUDE_RANGE.0..LONGITUDE_RANGE.1);
        let confidence = rng.gen::<f64>();
        let source = SightingSource::ALL[rng.gen_range(0..SightingSource::ALL.len())];

        let max_age_secs = MAX_SIGHTING_AGE_DAYS * 24 * 60 * 60;
        #[allow(clippy::cast_possible_truncation)]
        let age_secs = (rng.gen::<f64>() * max_age_secs as f64) as i64;
        let timestamp = now - ChronoDuration::seconds(age_secs);

        Self {
            id,
            latitude,
            longitude,
            confidence,
            source,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_source_display() {
        assert_eq!(SightingSource::SocialMedia.to_string(), "Social Media");
        assert_eq!(SightingSource::PublicCamera.to_string(), "Public Camera");
        assert_eq!(SightingSource::NewsReport.to_string(), "News Report");
        assert_eq!(SightingSource::TravelRecord.to_string(), "Travel Record");
        assert_eq!(SightingSource::WitnessReport.to_string(), "Witness Report");
    }

    #[test]
    fn test_generate_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();

        for id in 0..200 {
            let sighting = SightingLocation::generate(id, &mut rng, now);

            assert_eq!(sighting.id, id);
            assert!(sighting.latitude >= LATITUDE_RANGE.0);
            assert!(sighting.latitude < LATITUDE_RANGE.1);
            assert!(sighting.longitude >= LONGITUDE_RANGE.0);
            assert!(sighting.longitude < LONGITUDE_RANGE.1);
            assert!(sighting.confidence >= 0.0);
            assert!(sighting.confidence < 1.0);
        }
    }

    #[test]
    fn test_generate_timestamp_within_past_month() {
        let mut rng = StdRng::seed_from_u64(11);
        let now = Utc::now();
        let oldest = now - ChronoDuration::days(MAX_SIGHTING_AGE_DAYS);

        for id in 0..100 {
            let sighting = SightingLocation::generate(id, &mut rng, now);
            assert!(sighting.timestamp <= now);
            assert!(sighting.timestamp >= oldest);
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let now = Utc::now();
        let a = SightingLocation::generate(0, &mut StdRng::seed_from_u64(42), now);
        let b = SightingLocation::generate(0, &mut StdRng::seed_from_u64(42), now);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sighting_serialization() {
        let sighting =
            SightingLocation::generate(3, &mut StdRng::seed_from_u64(1), Utc::now());

        let json = serde_json::to_string(&sighting).unwrap();
        let parsed: SightingLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(sighting, parsed);
    }
}

//! Search statistics simulation.
//!
//! Five independent bounded counters, each gaining a fixed step with its own
//! random gate on every progress tick. Counters are non-decreasing and
//! clamped at their caps.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Simulated coverage counters for one search session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Social media platforms queried.
    pub social_platforms: u32,
    /// Public database records checked.
    pub public_databases: u32,
    /// Camera network sources scanned.
    pub camera_networks: u32,
    /// News articles reviewed.
    pub news_sources: u32,
    /// Travel systems checked.
    pub travel_systems: u32,
}

impl SearchStats {
    /// Maximum value of `social_platforms`.
    pub const SOCIAL_PLATFORMS_CAP: u32 = 35;
    /// Maximum value of `public_databases`.
    pub const PUBLIC_DATABASES_CAP: u32 = 128;
    /// Maximum value of `camera_networks`.
    pub const CAMERA_NETWORKS_CAP: u32 = 57;
    /// Maximum value of `news_sources`.
    pub const NEWS_SOURCES_CAP: u32 = 312;
    /// Maximum value of `travel_systems`.
    pub const TRAVEL_SYSTEMS_CAP: u32 = 43;

    /// Create a fresh set of counters, all zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all five counters by one tick.
    ///
    /// Each counter draws independently; the counter gains its step only
    /// when the draw exceeds its activation threshold, and is min-clamped
    /// at its cap. No ordering is guaranteed between counters.
    pub fn record_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if rng.gen::<f64>() > 0.7 {
            self.social_platforms = (self.social_platforms + 1).min(Self::SOCIAL_PLATFORMS_CAP);
        }
        if rng.gen::<f64>() > 0.6 {
            self.public_databases = (self.public_databases + 1).min(Self::PUBLIC_DATABASES_CAP);
        }
        if rng.gen::<f64>() > 0.8 {
            self.camera_networks = (self.camera_networks + 1).min(Self::CAMERA_NETWORKS_CAP);
        }
        if rng.gen::<f64>() > 0.5 {
            self.news_sources = (self.news_sources + 2).min(Self::NEWS_SOURCES_CAP);
        }
        if rng.gen::<f64>() > 0.85 {
            self.travel_systems = (self.travel_systems + 1).min(Self::TRAVEL_SYSTEMS_CAP);
        }
    }

    /// Whether every counter has reached its cap.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.social_platforms == Self::SOCIAL_PLATFORMS_CAP
            && self.public_databases == Self::PUBLIC_DATABASES_CAP
            && self.camera_networks == Self::CAMERA_NETWORKS_CAP
            && self.news_sources == Self::NEWS_SOURCES_CAP
            && self.travel_systems == Self::TRAVEL_SYSTEMS_CAP
    }
}

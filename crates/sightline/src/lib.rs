//! `sightline` - A simulated worldwide person-search demo engine
//!
//! This library implements the search simulation behind the demo: a
//! timer-driven session producing a monotone progress curve, bounded
//! coverage statistics, a rolling activity log, and randomly discovered
//! sightings rendered on a stylized world map. There is no real search; the
//! only outbound call is an optional geocoding lookup.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod geocode;
pub mod logging;
pub mod map;
pub mod matches;
pub mod photos;
pub mod session;
pub mod sighting;

pub use config::{Config, GeocodingConfig, SimulationConfig};
pub use error::{Error, Result};
pub use geocode::{GeocodeResult, Geocoder};
pub use logging::init_logging;
pub use matches::{ConfidenceBand, MatchList, PotentialMatch};
pub use photos::PhotoSet;
pub use session::{
    SearchOrchestrator, SearchPhase, SearchProgress, SearchStats, SessionEvent, SessionEventKind,
    SessionHandle, SessionState, StatusFeed,
};
pub use sighting::{SightingLocation, SightingSource};

//! Inert reference datasets.
//!
//! Sample missing-person records and transit stops/routes. These are plain
//! lookup tables with no mutation and no protocol; richer versions can be
//! supplied without changing any other contract.

use serde::{Deserialize, Serialize};

/// Case status of a missing-person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonStatus {
    /// The person is still missing.
    Missing,
    /// The person has been found.
    Found,
    /// Status unknown.
    Unknown,
}

/// A sample missing-person record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingPerson {
    /// Record identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Recorded sex.
    pub sex: String,
    /// Date last seen (ISO date string).
    pub last_seen: String,
    /// Last known location.
    pub location: String,
    /// Free-text description.
    pub description: String,
    /// Date the case was reported (ISO date string).
    pub date_reported: String,
    /// Case status.
    pub status: PersonStatus,
}

/// Kind of transit facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// Bus stop or route.
    Bus,
    /// Metro station or line.
    Metro,
    /// Train station or line.
    Train,
}

/// A sample transit stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportStop {
    /// Stop identifier.
    pub id: String,
    /// Stop name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Facility kind.
    pub kind: TransportKind,
}

/// A sample transit route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportRoute {
    /// Route identifier.
    pub id: String,
    /// Route name.
    pub name: String,
    /// Facility kind.
    pub kind: TransportKind,
    /// Stops served by the route.
    pub stops: Vec<TransportStop>,
}

/// Sample missing-person records.
#[must_use]
pub fn sample_missing_persons() -> Vec<MissingPerson> {
    vec![
        MissingPerson {
            id: "MP001".to_string(),
            name: "John Smith".to_string(),
            age: 25,
            sex: "Male".to_string(),
            last_seen: "2024-03-15".to_string(),
            location: "Delhi, India".to_string(),
            description: "Last seen wearing blue jeans and white t-shirt".to_string(),
            date_reported: "2024-03-16".to_string(),
            status: PersonStatus::Missing,
        },
        MissingPerson {
            id: "MP002".to_string(),
            name: "Sarah Johnson".to_string(),
            age: 32,
            sex: "Female".to_string(),
            last_seen: "2024-03-10".to_string(),
            location: "Kochi, Kerala".to_string(),
            description: "Last seen near Kochi Metro Station".to_string(),
            date_reported: "2024-03-11".to_string(),
            status: PersonStatus::Missing,
        },
    ]
}

/// Sample transit stops.
#[must_use]
pub fn sample_transport_stops() -> Vec<TransportStop> {
    vec![
        TransportStop {
            id: "KM001".to_string(),
            name: "Aluva Metro Station".to_string(),
            lat: 10.1076,
            lon: 76.3519,
            kind: TransportKind::Metro,
        },
        TransportStop {
            id: "DB001".to_string(),
            name: "Delhi Central Bus Station".to_string(),
            lat: 28.6304,
            lon: 77.2177,
            kind: TransportKind::Bus,
        },
    ]
}

/// Sample transit routes.
#[must_use]
pub fn sample_transport_routes() -> Vec<TransportRoute> {
    let stops = sample_transport_stops();
    vec![TransportRoute {
        id: "KM-ROUTE-1".to_string(),
        name: "Kochi Metro Blue Line".to_string(),
        kind: TransportKind::Metro,
        stops: vec![stops[0].clone()],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_persons_not_empty() {
        let persons = sample_missing_persons();
        assert!(!persons.is_empty());
        assert!(persons.iter().all(|p| p.status == PersonStatus::Missing));
    }

    #[test]
    fn test_sample_stops_have_plausible_coordinates() {
        for stop in sample_transport_stops() {
            assert!((-90.0..=90.0).contains(&stop.lat));
            assert!((-180.0..=180.0).contains(&stop.lon));
        }
    }

    #[test]
    fn test_sample_routes_reference_stops() {
        let routes = sample_transport_routes();
        assert!(!routes.is_empty());
        assert!(!routes[0].stops.is_empty());
        assert_eq!(routes[0].kind, TransportKind::Metro);
    }

    #[test]
    fn test_datasets_serialize() {
        let persons = sample_missing_persons();
        let json = serde_json::to_string(&persons).unwrap();
        let parsed: Vec<MissingPerson> = serde_json::from_str(&json).unwrap();
        assert_eq!(persons, parsed);
    }
}

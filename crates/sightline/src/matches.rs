//! Static demonstration match results.
//!
//! Potential matches are fixed demo records revealed once a search
//! completes. They are not produced by the simulation; only the selection
//! state changes at runtime.

use serde::{Deserialize, Serialize};

/// A potential match shown in the results panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialMatch {
    /// Identifier within the demo list.
    pub id: u32,
    /// Where the potential sighting happened.
    pub location: String,
    /// Relative date string, e.g. "2 days ago".
    pub date: String,
    /// Confidence score in [0, 1].
    pub confidence: f64,
    /// Description of the source.
    pub source: String,
    /// Image reference for the result card.
    pub image: String,
    /// Free-text details.
    pub details: String,
}

/// Confidence banding used for result badges and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// Confidence of 0.8 or above.
    High,
    /// Confidence of 0.6 up to (but excluding) 0.8.
    Medium,
    /// Everything below 0.6.
    Low,
}

impl ConfidenceBand {
    /// Classify a confidence score into a band.
    #[must_use]
    pub fn classify(confidence: f64) -> Self {
        if confidence >= 0.8 {
            Self::High
        } else if confidence >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Display label for the band.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// The fixed demonstration match records.
#[must_use]
pub fn demo_matches() -> Vec<PotentialMatch> {
    vec![
        PotentialMatch {
            id: 1,
            location: "Portland, Oregon, USA".to_string(),
            date: "2 days ago".to_string(),
            confidence: 0.87,
            source: "Social Media Post".to_string(),
            image: "photo-1544005313-94ddf0286df2".to_string(),
            details: "Individual with similar features spotted in local farmer's market. \
                      Post mentioned recent arrival to the area."
                .to_string(),
        },
        PotentialMatch {
            id: 2,
            location: "Vancouver, BC, Canada".to_string(),
            date: "5 days ago".to_string(),
            confidence: 0.72,
            source: "Public Transport Camera".to_string(),
            image: "photo-1506794778202-cad84cf45f1d".to_string(),
            details: "Person with matching characteristics captured on subway security \
                      footage. Destination unknown."
                .to_string(),
        },
        PotentialMatch {
            id: 3,
            location: "Seattle, Washington, USA".to_string(),
            date: "1 week ago".to_string(),
            confidence: 0.65,
            source: "Hotel Registry".to_string(),
            image: "photo-1552058544-f2b08422138a".to_string(),
            details: "Individual with similar name checked into downtown hotel. Stay \
                      duration was approximately 3 days."
                .to_string(),
        },
    ]
}

/// An ordered match list with a selected entry.
///
/// Selection defaults to the first entry when the list is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchList {
    matches: Vec<PotentialMatch>,
    selected: Option<u32>,
}

impl MatchList {
    /// Create a list; the first entry (if any) starts selected.
    #[must_use]
    pub fn new(matches: Vec<PotentialMatch>) -> Self {
        let selected = matches.first().map(|m| m.id);
        Self { matches, selected }
    }

    /// The demo list.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_matches())
    }

    /// All matches in display order.
    #[must_use]
    pub fn matches(&self) -> &[PotentialMatch] {
        &self.matches
    }

    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The currently selected match, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&PotentialMatch> {
        let id = self.selected?;
        self.matches.iter().find(|m| m.id == id)
    }

    /// Select a match by id. Returns `false` (leaving the selection
    /// unchanged) when no such match exists.
    pub fn select(&mut self, id: u32) -> bool {
        if self.matches.iter().any(|m| m.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_classification() {
        assert_eq!(ConfidenceBand::classify(0.95), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::classify(0.8), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::classify(0.7), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::classify(0.6), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::classify(0.59), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::classify(0.0), ConfidenceBand::Low);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(ConfidenceBand::High.label(), "High");
        assert_eq!(ConfidenceBand::Medium.label(), "Medium");
        assert_eq!(ConfidenceBand::Low.label(), "Low");
    }

    #[test]
    fn test_demo_matches_shape() {
        let matches = demo_matches();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].id, 1);
        assert!(matches.iter().all(|m| (0.0..=1.0).contains(&m.confidence)));
    }

    #[test]
    fn test_list_defaults_to_first_selection() {
        let list = MatchList::demo();
        assert_eq!(list.selected().unwrap().id, 1);
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let list = MatchList::new(Vec::new());
        assert!(list.is_empty());
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_select_existing_match() {
        let mut list = MatchList::demo();
        assert!(list.select(3));
        assert_eq!(list.selected().unwrap().id, 3);
    }

    #[test]
    fn test_select_unknown_id_keeps_selection() {
        let mut list = MatchList::demo();
        assert!(!list.select(42));
        assert_eq!(list.selected().unwrap().id, 1);
    }

    #[test]
    fn test_match_serialization() {
        let matches = demo_matches();
        let json = serde_json::to_string(&matches).unwrap();
        let parsed: Vec<PotentialMatch> = serde_json::from_str(&json).unwrap();
        assert_eq!(matches, parsed);
    }
}

//! Stylized world map rendering.
//!
//! Projects sighting coordinates onto a 2D plot, classifies marker color by
//! confidence, and renders the whole scene as a standalone SVG document.

use std::fmt::Write as _;

use crate::sighting::SightingLocation;

/// Width of the map plot in SVG user units.
pub const MAP_WIDTH: f64 = 1000.0;

/// Height of the map plot in SVG user units.
pub const MAP_HEIGHT: f64 = 500.0;

/// Marker radius for a highlighted sighting.
const HIGHLIGHTED_RADIUS: f64 = 8.0;

/// Marker radius for an ordinary sighting.
const NORMAL_RADIUS: f64 = 5.0;

/// Fill opacity for a highlighted sighting.
const HIGHLIGHTED_OPACITY: f64 = 0.8;

/// Fill opacity for an ordinary sighting.
const NORMAL_OPACITY: f64 = 0.6;

/// Project latitude/longitude onto plot coordinates.
///
/// Equirectangular: `x = (lng + 180) / 360 * width`,
/// `y = (90 - lat) / 180 * height`.
#[must_use]
pub fn project(latitude: f64, longitude: f64, width: f64, height: f64) -> (f64, f64) {
    let x = (longitude + 180.0) / 360.0 * width;
    let y = (90.0 - latitude) / 180.0 * height;
    (x, y)
}

/// Marker color classes, a pure function of confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    /// High confidence (strictly above 0.7).
    Green,
    /// Low confidence (strictly below 0.3).
    Red,
    /// The middle band, including both boundary values.
    Blue,
}

impl MarkerColor {
    /// Classify a confidence score.
    ///
    /// Both thresholds are strict: a confidence of exactly 0.7 or exactly
    /// 0.3 classifies as the middle band.
    #[must_use]
    pub fn classify(confidence: f64) -> Self {
        if confidence > 0.7 {
            Self::Green
        } else if confidence < 0.3 {
            Self::Red
        } else {
            Self::Blue
        }
    }

    /// The hex fill value used in rendered output.
    #[must_use]
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#38a169",
            Self::Red => "#e53e3e",
            Self::Blue => "#3182ce",
        }
    }
}

/// Visual parameters for one rendered marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Circle radius in plot units.
    pub radius: f64,
    /// Fill opacity.
    pub opacity: f64,
}

impl MarkerStyle {
    /// Style for a marker, larger and more opaque when highlighted.
    #[must_use]
    pub fn for_marker(highlighted: bool) -> Self {
        if highlighted {
            Self {
                radius: HIGHLIGHTED_RADIUS,
                opacity: HIGHLIGHTED_OPACITY,
            }
        } else {
            Self {
                radius: NORMAL_RADIUS,
                opacity: NORMAL_OPACITY,
            }
        }
    }
}

/// Render the map scene as a standalone SVG document.
///
/// `highlighted` names the sighting (by id) that gets the enlarged marker,
/// the expanding-ring pulse, and the source label. While `searching` is
/// true a scan ripple animates from the center of the plot.
#[must_use]
pub fn render_svg(
    sightings: &[SightingLocation],
    highlighted: Option<u32>,
    searching: bool,
) -> String {
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {MAP_WIDTH} {MAP_HEIGHT}">"#
    );

    // Simplified world outline and continent shapes
    svg.push_str(concat!(
        "  <path d=\"M200,100 Q400,50 600,100 T800,150 Q900,200 800,300 T600,400 ",
        "Q400,450 200,400 T50,200 Q100,150 200,100\" fill=\"none\" ",
        "stroke=\"#a0aec0\" stroke-width=\"1\"/>\n",
        "  <path d=\"M200,150 Q300,120 350,200 T250,300 Q200,280 200,150\" fill=\"#e2e8f0\"/>\n",
        "  <path d=\"M400,150 Q500,100 600,150 T550,300 Q450,350 400,150\" fill=\"#e2e8f0\"/>\n",
        "  <path d=\"M650,200 Q750,150 800,250 T700,350 Q650,300 650,200\" fill=\"#e2e8f0\"/>\n",
        "  <path d=\"M300,350 Q400,320 450,380 T350,420 Q320,400 300,350\" fill=\"#e2e8f0\"/>\n",
    ));

    for sighting in sightings {
        let (x, y) = project(sighting.latitude, sighting.longitude, MAP_WIDTH, MAP_HEIGHT);
        let is_highlighted = highlighted == Some(sighting.id);
        let style = MarkerStyle::for_marker(is_highlighted);
        let color = MarkerColor::classify(sighting.confidence).hex();

        let _ = writeln!(
            svg,
            r#"  <circle cx="{x:.1}" cy="{y:.1}" r="{r}" fill="{color}" fill-opacity="{opacity}" stroke="white" stroke-width="1"/>"#,
            r = style.radius,
            opacity = style.opacity,
        );

        if is_highlighted {
            let _ = writeln!(
                svg,
                concat!(
                    r#"  <circle cx="{x:.1}" cy="{y:.1}" r="{outer}" fill="none" stroke="{color}" stroke-width="2" opacity="0.5">"#,
                    "\n",
                    r#"    <animate attributeName="r" from="{r}" to="{pulse}" dur="1.5s" repeatCount="indefinite"/>"#,
                    "\n",
                    r#"    <animate attributeName="opacity" from="0.5" to="0" dur="1.5s" repeatCount="indefinite"/>"#,
                    "\n  </circle>",
                ),
                x = x,
                y = y,
                outer = style.radius + 5.0,
                r = style.radius,
                pulse = style.radius + 20.0,
                color = color,
            );
            let _ = writeln!(
                svg,
                r##"  <text x="{x:.1}" y="{label_y:.1}" text-anchor="middle" fill="#4a5568" font-size="12" font-weight="bold">{source}</text>"##,
                label_y = y - 15.0,
                source = sighting.source,
            );
        }
    }

    if searching {
        let _ = writeln!(
            svg,
            concat!(
                r##"  <circle cx="{cx}" cy="{cy}" r="100" fill="none" stroke="#3182ce" stroke-width="2" opacity="0.3">"##,
                "\n",
                r#"    <animate attributeName="r" from="0" to="500" dur="4s" repeatCount="indefinite"/>"#,
                "\n",
                r#"    <animate attributeName="opacity" from="0.7" to="0" dur="4s" repeatCount="indefinite"/>"#,
                "\n  </circle>",
            ),
            cx = MAP_WIDTH / 2.0,
            cy = MAP_HEIGHT / 2.0,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

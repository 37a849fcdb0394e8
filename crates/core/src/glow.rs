//! Zone targeting for the ambient page glow.
//!
//! Each page section pulls the glow toward a fixed anchor; the caller adds
//! a little jitter and eases toward the clamped target. The easing loop
//! itself is the animation collaborator's job.

use folio_protocol::Point;

/// Glow targets never leave this band (percent of the page, both axes).
const TARGET_MIN: f64 = 20.0;
const TARGET_MAX: f64 = 80.0;

/// Scroll-intensity fade: fully bright mid-page, dimmed at the extremes.
const OPACITY_FALLOFF: f64 = 0.22;
const OPACITY_MIN: f64 = 0.76;

/// The observable page sections the glow drifts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Top,
    Work,
    About,
    Contact,
}

impl Section {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "top" => Some(Section::Top),
            "work" => Some(Section::Work),
            "about" => Some(Section::About),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Section::Top => "top",
            Section::Work => "work",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    fn anchor(self) -> Point {
        match self {
            Section::Top => Point::new(35.0, 25.0),
            Section::Work => Point::new(30.0, 55.0),
            Section::About => Point::new(70.0, 55.0),
            Section::Contact => Point::new(55.0, 35.0),
        }
    }
}

/// Compute the glow target for a section. `jitter` is the caller's random
/// offset, expected in [-5, +5] per axis; the result is clamped either way.
pub fn zone_target(section: Section, jitter: Point) -> Point {
    let anchor = section.anchor();
    Point::new(
        (anchor.x + jitter.x).clamp(TARGET_MIN, TARGET_MAX),
        (anchor.y + jitter.y).clamp(TARGET_MIN, TARGET_MAX),
    )
}

/// Glow opacity for a scroll position, where `progress` is scroll offset
/// over max scroll in [0, 1]. Brightest at mid-page.
pub fn scroll_opacity(progress: f64) -> f64 {
    let dist_from_mid = (progress - 0.5).abs() * 2.0;
    (1.0 - dist_from_mid * OPACITY_FALLOFF).clamp(OPACITY_MIN, 1.0)
}

/// Pick the section the glow should follow from observer callback entries
/// of (section, intersection ratio): the most-visible intersecting one.
/// A batch where nothing intersects elects no winner and leaves the glow
/// target unchanged.
pub fn dominant_section(entries: &[(Section, f64)]) -> Option<Section> {
    entries
        .iter()
        .filter(|(_, ratio)| *ratio > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(section, _)| *section)
}

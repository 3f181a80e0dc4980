#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geospatial reference index and location resolution.
//!
//! [`GeoIndex`] holds immutable reference data (named points, country
//! bounding boxes, water-body bounding boxes) and answers
//! nearest-neighbor and point-in-region queries over it.
//! [`resolver::describe`] turns a raw position into a human-readable
//! location string using a fixed decision tree.
//!
//! Tables are injected at construction so tests can run against a
//! minimal index instead of the full production tables in
//! [`tables::bundled`].

pub mod resolver;
pub mod tables;

use skywatch_models::Position;

/// Earth radius in nautical miles.
const EARTH_RADIUS_NM: f64 = 3440.065;

/// Nautical miles to statute miles.
const NM_TO_MI: f64 = 1.151;

/// A named reference point (air base, city, landmark).
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub name: &'static str,
}

/// What a region box represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Country,
    Water,
}

/// An axis-aligned lat/lon bounding box approximating a region.
///
/// Boxes may overlap; containment queries resolve overlap by
/// declaration order (first declared match wins).
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub name: &'static str,
    pub kind: RegionKind,
}

impl RegionBox {
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        (self.lat_min..=self.lat_max).contains(&position.latitude)
            && (self.lon_min..=self.lon_max).contains(&position.longitude)
    }

    /// Great-circle distance from a point to the nearest edge of the
    /// box, by clamping the point into the box's ranges first. Zero for
    /// points inside the box.
    #[must_use]
    pub fn edge_distance_nm(&self, position: Position) -> f64 {
        let clamped = Position::new(
            position.latitude.clamp(self.lat_min, self.lat_max),
            position.longitude.clamp(self.lon_min, self.lon_max),
        );
        haversine_nm(position, clamped)
    }
}

/// Reference tables for a [`GeoIndex`], in declaration order.
#[derive(Debug, Clone, Default)]
pub struct GeoTables {
    pub reference_points: Vec<ReferencePoint>,
    pub country_boxes: Vec<RegionBox>,
    pub water_boxes: Vec<RegionBox>,
}

/// Immutable geospatial reference index.
///
/// Read-only after construction, so queries are safe from any number
/// of threads without synchronization.
#[derive(Debug, Clone)]
pub struct GeoIndex {
    tables: GeoTables,
}

impl GeoIndex {
    #[must_use]
    pub fn new(tables: GeoTables) -> Self {
        log::debug!(
            "GeoIndex: {} reference points, {} country boxes, {} water boxes",
            tables.reference_points.len(),
            tables.country_boxes.len(),
            tables.water_boxes.len()
        );
        Self { tables }
    }

    /// Index over the bundled production tables.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(tables::bundled())
    }

    /// The nearest reference point and its distance in nautical miles.
    ///
    /// Full scan over the table; the global minimum wins, ties broken
    /// by declaration order. Returns `None` only for an empty table.
    #[must_use]
    pub fn nearest_reference(&self, position: Position) -> Option<(&ReferencePoint, f64)> {
        let mut nearest: Option<(&ReferencePoint, f64)> = None;
        for point in &self.tables.reference_points {
            let d = haversine_nm(position, Position::new(point.latitude, point.longitude));
            match nearest {
                Some((_, best)) if d >= best => {}
                _ => nearest = Some((point, d)),
            }
        }
        nearest
    }

    /// The first declared water box containing the position.
    #[must_use]
    pub fn containing_water(&self, position: Position) -> Option<&RegionBox> {
        self.tables.water_boxes.iter().find(|b| b.contains(position))
    }

    /// The first declared country box containing the position.
    #[must_use]
    pub fn containing_country(&self, position: Position) -> Option<&RegionBox> {
        self.tables
            .country_boxes
            .iter()
            .find(|b| b.contains(position))
    }

    /// All region boxes containing the position, water before country,
    /// declaration order within each kind.
    ///
    /// Water-before-country is a deliberate policy: a coastal point
    /// inside both a water box and a country box resolves to water.
    #[must_use]
    pub fn containing_regions(&self, position: Position) -> Vec<&RegionBox> {
        self.tables
            .water_boxes
            .iter()
            .chain(&self.tables.country_boxes)
            .filter(|b| b.contains(position))
            .collect()
    }

    /// Nearest country box edge and its distance in nautical miles.
    ///
    /// Used to anchor over-water positions to the closest coastline.
    #[must_use]
    pub fn nearest_country_edge(&self, position: Position) -> Option<(&RegionBox, f64)> {
        let mut nearest: Option<(&RegionBox, f64)> = None;
        for country in &self.tables.country_boxes {
            let d = country.edge_distance_nm(position);
            match nearest {
                Some((_, best)) if d >= best => {}
                _ => nearest = Some((country, d)),
            }
        }
        nearest
    }
}

/// Great-circle distance between two points in nautical miles, via the
/// haversine formula.
#[must_use]
pub fn haversine_nm(a: Position, b: Position) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    EARTH_RADIUS_NM * 2.0 * h.sqrt().asin()
}

/// Nautical miles to statute miles, rounded to the nearest integer.
#[must_use]
pub fn nm_to_rounded_mi(nm: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        (nm * NM_TO_MI).round() as i64
    }
}

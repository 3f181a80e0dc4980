//! Plain-English location resolution.
//!
//! Converts a position into a short human-readable description via a
//! fixed decision tree. The step order and distance thresholds define
//! the externally observed output strings, which downstream report
//! layers match on literally, so both are part of the contract:
//!
//! 1. Within 15 nm of a reference point: `"near {name}"`.
//! 2. Within 40 nm: `"~{mi} mi from {name}"`.
//! 3. Inside a water box: `"over {water}"`, with `", ~{mi} mi off
//!    {country}"` appended when the nearest coastline is over 5 nm away.
//! 4. Inside a country box: `"over {country}"`, with the nearest
//!    reference appended when it is within 100 nm.
//! 5. Fallback: `"~{mi} mi from {name}"`, or raw coordinates when the
//!    reference table is empty.

use skywatch_models::Position;

use crate::{GeoIndex, nm_to_rounded_mi};

/// Sentinel returned for observations without a position fix.
pub const UNKNOWN_LOCATION: &str = "unknown location";

/// Reference points closer than this read as "near".
const NEAR_NM: f64 = 15.0;

/// Reference points closer than this read as "~N mi from".
const CLOSE_NM: f64 = 40.0;

/// Over water, coastlines closer than this are not worth naming.
const OFFSHORE_NM: f64 = 5.0;

/// Over land, references farther than this are not worth naming.
const REGIONAL_NM: f64 = 100.0;

/// Describes a position in plain English.
///
/// Pure function of the position and the index's tables; identical
/// inputs always produce identical strings.
#[must_use]
pub fn describe(index: &GeoIndex, position: Option<Position>) -> String {
    let Some(position) = position else {
        return UNKNOWN_LOCATION.to_string();
    };

    let nearest = index.nearest_reference(position);

    if let Some((point, distance)) = nearest {
        if distance < NEAR_NM {
            return format!("near {}", point.name);
        }
        if distance < CLOSE_NM {
            return format!("~{} mi from {}", nm_to_rounded_mi(distance), point.name);
        }
    }

    if let Some(body) = index.containing_water(position) {
        if let Some((coast, distance)) = index.nearest_country_edge(position) {
            if distance > OFFSHORE_NM {
                return format!(
                    "over {}, ~{} mi off {}",
                    body.name,
                    nm_to_rounded_mi(distance),
                    coast.name
                );
            }
        }
        return format!("over {}", body.name);
    }

    if let Some(country) = index.containing_country(position) {
        if let Some((point, distance)) = nearest {
            if distance < REGIONAL_NM {
                return format!(
                    "over {}, ~{} mi from {}",
                    country.name,
                    nm_to_rounded_mi(distance),
                    point.name
                );
            }
        }
        return format!("over {}", country.name);
    }

    nearest.map_or_else(
        || {
            format!(
                "{}°N, {}°E",
                position.latitude, position.longitude
            )
        },
        |(point, distance)| format!("~{} mi from {}", nm_to_rounded_mi(distance), point.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoTables;

    fn bundled() -> GeoIndex {
        GeoIndex::bundled()
    }

    #[test]
    fn missing_position_is_the_sentinel() {
        assert_eq!(describe(&bundled(), None), UNKNOWN_LOCATION);
    }

    #[test]
    fn near_a_base() {
        let got = describe(&bundled(), Some(Position::new(25.10, 51.30)));
        assert_eq!(got, "near Al Udeid AB, Qatar");
    }

    #[test]
    fn close_to_a_city() {
        // ~19 nm due north of Tehran: past the "near" band, inside the
        // "~N mi from" band.
        let got = describe(&bundled(), Some(Position::new(36.0, 51.389)));
        assert_eq!(got, "~21 mi from Tehran");
    }

    #[test]
    fn over_water_close_to_shore() {
        // Central Persian Gulf; the Iran country box extends over the
        // water here, so the coastline distance collapses to zero.
        let got = describe(&bundled(), Some(Position::new(27.0, 53.0)));
        assert_eq!(got, "over the Persian Gulf");
    }

    #[test]
    fn over_open_water_names_the_nearest_coast() {
        let got = describe(&bundled(), Some(Position::new(15.0, 55.0)));
        assert_eq!(got, "over the Arabian Sea, ~67 mi off Yemen");
    }

    #[test]
    fn over_a_country_with_a_regional_reference() {
        let got = describe(&bundled(), Some(Position::new(34.0, 50.0)));
        assert_eq!(got, "over Iran, ~82 mi from Fordow");
    }

    #[test]
    fn over_a_country_far_from_any_reference() {
        let got = describe(&bundled(), Some(Position::new(38.5, 60.5)));
        assert_eq!(got, "over Iran");
    }

    #[test]
    fn fallback_distance_outside_all_boxes() {
        let got = describe(&bundled(), Some(Position::new(60.0, 20.0)));
        assert!(got.starts_with('~') && got.contains("mi from"), "got {got}");
    }

    #[test]
    fn fallback_raw_coordinates_with_empty_tables() {
        let index = GeoIndex::new(GeoTables::default());
        let got = describe(&index, Some(Position::new(25.1, 51.3)));
        assert_eq!(got, "25.1°N, 51.3°E");
    }

    #[test]
    fn describe_is_idempotent() {
        let index = bundled();
        let p = Some(Position::new(26.5, 52.0));
        assert_eq!(describe(&index, p), describe(&index, p));
    }
}

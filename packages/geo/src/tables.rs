#![allow(clippy::too_many_lines)]
//! Bundled production reference tables.
//!
//! Reference points cover US/coalition air bases, European staging
//! fields, and key regional cities. Region boxes are coarse bounding
//! boxes, not real borders; overlaps between them are resolved by
//! declaration order, so order is load-bearing.
//!
//! Sources: public airfield coordinates, OSINT community base lists.

use crate::{GeoTables, ReferencePoint, RegionBox, RegionKind};

const fn point(latitude: f64, longitude: f64, name: &'static str) -> ReferencePoint {
    ReferencePoint {
        latitude,
        longitude,
        name,
    }
}

const fn country(
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
    name: &'static str,
) -> RegionBox {
    RegionBox {
        lat_min,
        lat_max,
        lon_min,
        lon_max,
        name,
        kind: RegionKind::Country,
    }
}

const fn water(
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
    name: &'static str,
) -> RegionBox {
    RegionBox {
        lat_min,
        lat_max,
        lon_min,
        lon_max,
        name,
        kind: RegionKind::Water,
    }
}

/// The full production tables.
#[must_use]
pub fn bundled() -> GeoTables {
    GeoTables {
        reference_points: reference_points(),
        country_boxes: country_boxes(),
        water_boxes: water_boxes(),
    }
}

/// Bases, cities, and landmarks for nearest-neighbor lookup.
fn reference_points() -> Vec<ReferencePoint> {
    vec![
        // US/Coalition bases — Middle East
        point(25.117, 51.315, "Al Udeid AB, Qatar"),
        point(24.248, 54.547, "Al Dhafra AB, UAE"),
        point(29.346, 47.521, "Ali Al Salem AB, Kuwait"),
        point(32.356, 36.259, "Muwaffaq Salti AB, Jordan"),
        point(24.062, 47.580, "Prince Sultan AB, Saudi Arabia"),
        point(11.547, 43.155, "Camp Lemonnier, Djibouti"),
        point(37.002, 35.426, "Incirlik AB, Turkey"),
        point(34.590, 32.988, "RAF Akrotiri, Cyprus"),
        point(26.236, 50.577, "NSA Bahrain"),
        point(-7.313, 72.411, "Diego Garcia"),
        // US/NATO bases — European staging
        point(49.437, 7.600, "Ramstein AB, Germany"),
        point(46.032, 11.877, "Aviano AB, Italy"),
        point(37.176, -5.615, "Morón AB, Spain"),
        point(36.647, -6.349, "NAS Rota, Spain"),
        point(37.037, 22.421, "NAS Souda Bay, Crete"),
        point(37.401, 14.925, "NAS Sigonella, Sicily"),
        point(52.360, 0.486, "RAF Lakenheath, UK"),
        point(52.364, 0.773, "RAF Mildenhall, UK"),
        point(55.509, -4.587, "Prestwick, Scotland"),
        point(38.765, -27.091, "Lajes Field, Azores"),
        point(35.857, 14.513, "RAF Luqa, Malta"),
        point(40.900, 8.291, "Decimomannu AB, Sardinia"),
        // Key cities — Middle East
        point(35.689, 51.389, "Tehran"),
        point(32.621, 51.678, "Isfahan"),
        point(32.064, 52.068, "Natanz"),
        point(34.861, 50.988, "Fordow"),
        point(27.188, 56.275, "Bandar Abbas"),
        point(33.313, 44.366, "Baghdad"),
        point(29.376, 47.978, "Kuwait City"),
        point(25.286, 51.533, "Doha"),
        point(24.454, 54.654, "Abu Dhabi"),
        point(25.204, 55.271, "Dubai"),
        point(23.486, 58.382, "Muscat"),
        point(21.485, 39.193, "Jeddah"),
        point(24.713, 46.675, "Riyadh"),
        point(38.963, 35.243, "Ankara"),
        point(31.768, 35.214, "Jerusalem"),
        point(32.084, 34.782, "Tel Aviv"),
        point(33.513, 36.292, "Damascus"),
        point(36.191, 44.009, "Kirkuk"),
        point(36.335, 43.119, "Mosul"),
        point(30.508, 47.783, "Basra"),
        point(15.370, 44.206, "Sana'a"),
        point(12.778, 45.019, "Aden"),
    ]
}

/// Approximate country bounding boxes.
fn country_boxes() -> Vec<RegionBox> {
    vec![
        country(25.0, 40.0, 44.0, 63.0, "Iran"),
        country(29.0, 37.5, 39.0, 48.5, "Iraq"),
        country(16.0, 32.0, 35.0, 56.0, "Saudi Arabia"),
        country(22.5, 26.5, 51.0, 56.5, "UAE"),
        country(16.0, 26.5, 52.0, 60.0, "Oman"),
        country(28.5, 30.5, 46.5, 48.5, "Kuwait"),
        country(24.5, 26.5, 50.5, 52.0, "Qatar"),
        country(36.0, 42.0, 26.0, 45.0, "Turkey"),
        country(32.0, 37.5, 35.5, 42.0, "Syria"),
        country(29.0, 33.5, 35.0, 39.0, "Jordan"),
        country(29.0, 33.5, 34.0, 35.9, "Israel"),
        country(22.0, 31.5, 25.0, 37.0, "Egypt"),
        country(12.0, 19.0, 42.0, 54.0, "Yemen"),
        country(24.0, 37.0, 60.0, 75.0, "Pakistan"),
        country(29.0, 38.5, 60.0, 75.0, "Afghanistan"),
        country(34.0, 35.5, 32.5, 34.5, "Cyprus"),
        country(10.0, 12.0, 42.0, 44.0, "Djibouti"),
        country(-1.0, 12.0, 41.0, 51.0, "Somalia"),
        country(12.0, 18.0, 36.0, 43.0, "Eritrea"),
        // European staging areas
        country(47.0, 55.0, 5.0, 15.0, "Germany"),
        country(36.0, 47.0, 6.0, 19.0, "Italy"),
        country(36.0, 44.0, -10.0, 5.0, "Spain"),
        country(50.0, 55.0, -6.0, 2.0, "England"),
        country(55.0, 59.0, -8.0, -1.0, "Scotland"),
        country(42.0, 47.0, -5.0, 9.0, "France"),
        country(34.0, 42.0, 19.0, 30.0, "Greece"),
    ]
}

/// Water-body bounding boxes.
fn water_boxes() -> Vec<RegionBox> {
    vec![
        water(26.0, 27.5, 49.0, 56.0, "the Persian Gulf"),
        water(24.0, 26.5, 56.0, 59.0, "the Gulf of Oman"),
        water(12.0, 24.0, 36.0, 50.0, "the Red Sea"),
        water(10.0, 20.0, 50.0, 60.0, "the Arabian Sea"),
        water(24.0, 30.0, 33.0, 35.0, "the eastern Mediterranean"),
        water(34.0, 37.0, 28.0, 36.0, "the eastern Mediterranean"),
        water(12.0, 30.0, 60.0, 75.0, "the Arabian Sea"),
        water(11.0, 13.0, 43.0, 48.0, "the Gulf of Aden"),
        water(30.0, 42.0, -5.0, 15.0, "the western Mediterranean"),
        water(42.0, 48.0, -10.0, 0.0, "the Bay of Biscay"),
        water(25.5, 27.0, 56.0, 57.0, "the Strait of Hormuz"),
    ]
}

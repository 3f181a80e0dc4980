//! Per-aircraft enrichment: location, classification, origin, presence.

use skywatch_classify::{Classifier, hex};
use skywatch_geo::{GeoIndex, resolver};
use skywatch_models::{AircraftObservation, DiffResult, EnrichedAircraft};

/// Enriches one cycle's aircraft observations.
///
/// Each observation gets a resolved location string, an airframe
/// classification (feed type code first, callsign prefix fallback), a
/// country of registration from its hex address, and a new/returning
/// tag from the cycle diff. Output is ordered for reporting: classified
/// airframes first, then by descending altitude.
#[must_use]
pub fn enrich_aircraft(
    geo: &GeoIndex,
    classifier: &Classifier,
    diff: &DiffResult,
    observations: &[AircraftObservation],
) -> Vec<EnrichedAircraft> {
    let mut enriched: Vec<EnrichedAircraft> = observations
        .iter()
        .map(|observation| EnrichedAircraft {
            location: resolver::describe(geo, observation.position),
            classification: classifier
                .classify(observation.type_code.as_deref(), &observation.callsign),
            origin: hex::origin_from_hex(&observation.hex).map(ToString::to_string),
            presence: diff.presence_of(&observation.callsign),
            observation: observation.clone(),
        })
        .collect();

    enriched.sort_by_key(|aircraft| {
        (
            aircraft.classification.is_none(),
            std::cmp::Reverse(aircraft.observation.altitude_ft.unwrap_or(0)),
        )
    });
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_models::Position;

    fn observation(callsign: &str, type_code: Option<&str>, altitude_ft: Option<i32>) -> AircraftObservation {
        AircraftObservation {
            callsign: callsign.to_string(),
            hex: "ae117f".to_string(),
            registration: None,
            type_code: type_code.map(ToString::to_string),
            position: Some(Position::new(25.10, 51.30)),
            altitude_ft,
            ground_speed_kt: None,
            track_deg: None,
        }
    }

    #[test]
    fn classified_aircraft_sort_before_unknown() {
        let geo = GeoIndex::bundled();
        let classifier = Classifier::bundled();
        let diff = DiffResult::default();

        let enriched = enrich_aircraft(
            &geo,
            &classifier,
            &diff,
            &[
                observation("ZZZZ99", None, Some(40_000)),
                observation("RCH4521", Some("C17"), Some(28_000)),
            ],
        );

        assert_eq!(enriched[0].observation.callsign, "RCH4521");
        assert_eq!(enriched[1].observation.callsign, "ZZZZ99");
    }

    #[test]
    fn higher_altitude_sorts_first_within_a_class() {
        let geo = GeoIndex::bundled();
        let classifier = Classifier::bundled();
        let diff = DiffResult::default();

        let enriched = enrich_aircraft(
            &geo,
            &classifier,
            &diff,
            &[
                observation("RCH1", Some("C17"), Some(28_000)),
                observation("RCH2", Some("C17"), Some(34_000)),
            ],
        );

        assert_eq!(enriched[0].observation.callsign, "RCH2");
    }

    #[test]
    fn origin_resolved_from_hex() {
        let geo = GeoIndex::bundled();
        let classifier = Classifier::bundled();
        let enriched = enrich_aircraft(
            &geo,
            &classifier,
            &DiffResult::default(),
            &[observation("RCH4521", None, None)],
        );
        assert_eq!(enriched[0].origin.as_deref(), Some("United States"));
    }
}

#![allow(clippy::too_many_lines)]
//! Bundled callsign-prefix and ICAO type-code tables.
//!
//! Sources: OSINT community databases, ADS-B Exchange, milaircomms.com.
//! Both tables are ordered; the first matching entry wins, so a prefix
//! that shadows a longer one must be declared after it.

use skywatch_models::Classification;

use crate::ClassifierTables;

fn entry(key: &'static str, airframe: &str, role: &str) -> (&'static str, Classification) {
    (key, Classification::new(airframe, role))
}

/// The full production tables.
#[must_use]
pub fn bundled() -> ClassifierTables {
    ClassifierTables {
        callsign_prefixes: callsign_prefixes(),
        type_codes: type_codes(),
        military_prefixes: military_prefixes(),
    }
}

/// Callsign prefix -> probable airframe and role.
fn callsign_prefixes() -> Vec<(&'static str, Classification)> {
    vec![
        // Airlift
        entry("RCH", "C-17A Globemaster III", "Strategic airlift"),
        entry("REACH", "C-17A Globemaster III", "Strategic airlift"),
        entry("PACK", "C-17A Globemaster III", "Strategic airlift"),
        entry("DUKE", "C-17A Globemaster III", "Strategic airlift"),
        entry("MOOSE", "C-5M Super Galaxy", "Heavy airlift"),
        entry("FRED", "C-5M Super Galaxy", "Heavy airlift"),
        entry("CARGO", "C-17A / C-5M", "Airlift"),
        entry("HERK", "C-130J Super Hercules", "Tactical airlift"),
        entry("HERKY", "C-130J Super Hercules", "Tactical airlift"),
        // Tankers
        entry("ETHYL", "KC-135 Stratotanker", "Aerial refueling"),
        entry("JULIET", "KC-10 Extender", "Aerial refueling"),
        entry("PEARL", "KC-135 Stratotanker", "Aerial refueling"),
        entry("STEEL", "KC-46A Pegasus", "Aerial refueling"),
        entry("SHELL", "KC-135 Stratotanker", "Aerial refueling"),
        entry("TEAL", "KC-135 Stratotanker", "Aerial refueling"),
        entry("NKAC", "KC-135 Stratotanker", "Aerial refueling"),
        entry("PKSN", "KC-46A Pegasus", "Aerial refueling"),
        entry("BLUE", "KC-135 / KC-46", "Aerial refueling"),
        entry("CASA", "KC-135 Stratotanker", "Aerial refueling"),
        entry("INDY", "KC-135 Stratotanker", "Aerial refueling"),
        // Bombers
        entry("DOOM", "B-2A Spirit", "Stealth bomber — HIGH SIGNIFICANCE"),
        entry("DEATH", "B-52H Stratofortress", "Strategic bomber"),
        entry("BATT", "B-52H Stratofortress", "Strategic bomber"),
        entry("MYTEE", "B-52H Stratofortress", "Strategic bomber"),
        entry("BONE", "B-1B Lancer", "Supersonic bomber"),
        entry("LANCE", "B-1B Lancer", "Supersonic bomber"),
        entry("TIGER", "B-1B Lancer", "Supersonic bomber"),
        // ISR / SIGINT / AWACS
        entry("HOMER", "P-8A Poseidon", "Maritime patrol / ASW"),
        entry("TOPCT", "RC-135V/W Rivet Joint", "SIGINT collection"),
        entry("JAKE", "E-3 Sentry (AWACS)", "Airborne early warning"),
        entry("TITAN", "RQ-4B Global Hawk", "High-altitude ISR drone"),
        entry("FORTE", "RQ-4B Global Hawk", "High-altitude ISR drone"),
        entry("MAGIC", "E-6B Mercury", "Airborne command post — NUCLEAR C2"),
        entry("SNTRY", "E-3 Sentry (AWACS)", "Airborne early warning"),
        entry("REDEYE", "RC-135U Combat Sent", "Electronic intelligence"),
        entry("RAIDR", "MC-130J Commando II", "Special operations"),
        entry("OLIVE", "RC-135S Cobra Ball", "Missile tracking"),
        entry("MAZDA", "E-8C JSTARS", "Ground surveillance"),
        // Fighters / Strike
        entry("VIPER", "F-16 Fighting Falcon", "Multirole fighter"),
        entry("EAGLE", "F-15E Strike Eagle", "Air superiority / strike"),
        entry("HAWK", "F-15E Strike Eagle", "Air superiority"),
        entry("RAZOR", "F-22A Raptor", "Air superiority — stealth"),
        entry("STRIKE", "F-15E Strike Eagle", "Strike fighter"),
        entry("BOLT", "F-35A Lightning II", "Stealth multirole"),
        entry("WRATH", "F-15E Strike Eagle", "Strike fighter"),
        // CSAR / Medevac / Special Ops
        entry("KING", "HC-130J Combat King II", "Combat search & rescue"),
        entry("PEDRO", "HH-60W Jolly Green II", "Combat rescue helicopter"),
        entry("JOLLY", "HH-60G Pave Hawk", "Combat rescue helicopter"),
        entry("DUSTOFF", "UH-60 Black Hawk", "Medevac"),
        entry("EVAC", "C-17A / C-130J", "Aeromedical evacuation"),
        // VIP / Command
        entry("SAM", "VC-25A / C-32A", "VIP transport — SENIOR LEADER"),
        entry("VENUS", "C-37A Gulfstream V", "VIP transport"),
        entry("EXEC", "C-37A / C-40B", "Executive transport"),
        entry("SPAR", "C-40B Clipper", "Congressional / senior leader"),
        // Navy / Marine
        entry("NAVY", "P-8A / E-2D / C-2A", "Naval aviation"),
        entry("HAVOC", "AH-1Z / MV-22", "Marine attack aviation"),
        entry("CONDOR", "C-40A Clipper", "Naval logistics"),
        // UK RAF
        entry("ASCOT", "C-17 / A400M / Voyager", "RAF transport / tanker"),
        entry("RRR", "Voyager KC3 / A330 MRTT", "RAF aerial refueling"),
        // NATO
        entry("GAF", "A400M / A310", "German Air Force transport"),
        entry("FAF", "A400M / MRTT", "French Air Force"),
        entry("IAM", "C-130J / KC-767", "Italian Air Force"),
    ]
}

/// ICAO type code -> airframe and role.
fn type_codes() -> Vec<(&'static str, Classification)> {
    vec![
        // Airlift
        entry("C17", "C-17A Globemaster III", "Strategic airlift"),
        entry("C5M", "C-5M Super Galaxy", "Heavy strategic airlift"),
        entry("C5", "C-5M Super Galaxy", "Heavy strategic airlift"),
        entry("C130", "C-130 Hercules", "Tactical airlift"),
        entry("C30J", "C-130J Super Hercules", "Tactical airlift"),
        entry("C160", "C-160 Transall", "Tactical airlift"),
        entry("A400", "A400M Atlas", "Tactical/strategic airlift"),
        entry("A40M", "A400M Atlas", "Tactical/strategic airlift"),
        entry("C2", "C-2 Greyhound", "Carrier logistics"),
        // Tankers
        entry("K35R", "KC-135R Stratotanker", "Aerial refueling"),
        entry("K35E", "KC-135E Stratotanker", "Aerial refueling"),
        entry("KC35", "KC-135 Stratotanker", "Aerial refueling"),
        entry("K46", "KC-46A Pegasus", "Aerial refueling"),
        entry("KC46", "KC-46A Pegasus", "Aerial refueling"),
        entry("K10", "KC-10 Extender", "Aerial refueling"),
        entry("KC10", "KC-10 Extender", "Aerial refueling"),
        entry("MRTT", "A330 MRTT Voyager", "Aerial refueling"),
        entry("A310", "A310 MRTT", "Aerial refueling / transport"),
        entry("A332", "A330-200", "Transport / tanker variant"),
        // ISR / Surveillance
        entry("GLEX", "RQ-4B Global Hawk / Bombardier", "High-altitude ISR / Business"),
        entry("RQ4B", "RQ-4B Global Hawk", "High-altitude ISR drone"),
        entry("E3CF", "E-3 Sentry AWACS", "Airborne early warning"),
        entry("E3", "E-3 Sentry AWACS", "Airborne early warning"),
        entry("E6", "E-6B Mercury", "TACAMO / nuclear C3"),
        entry("E8", "E-8C JSTARS", "Ground surveillance"),
        entry("P8", "P-8A Poseidon", "Maritime patrol / ASW"),
        entry("P3", "P-3 Orion", "Maritime patrol"),
        entry("RC35", "RC-135", "SIGINT reconnaissance"),
        entry("E35L", "RC-135V/W Rivet Joint", "SIGINT reconnaissance"),
        entry("B350", "MC-12W / King Air", "ISR / light transport"),
        entry("BE20", "C-12 Huron", "Light transport / ISR"),
        // Bombers
        entry("B2", "B-2A Spirit", "Stealth strategic bomber"),
        entry("B52", "B-52H Stratofortress", "Strategic bomber"),
        entry("B1", "B-1B Lancer", "Strategic bomber"),
        // Fighters
        entry("F15", "F-15 Eagle/Strike Eagle", "Air superiority / strike"),
        entry("F16", "F-16 Fighting Falcon", "Multirole fighter"),
        entry("F18", "F/A-18 Hornet/Super Hornet", "Carrier multirole fighter"),
        entry("F18S", "F/A-18E/F Super Hornet", "Carrier multirole fighter"),
        entry("F22", "F-22A Raptor", "Air superiority"),
        entry("F35", "F-35 Lightning II", "Stealth multirole fighter"),
        entry("FA18", "F/A-18 Hornet", "Carrier multirole fighter"),
        entry("EUFI", "Eurofighter Typhoon", "Multirole fighter"),
        entry("RFAL", "Rafale", "Multirole fighter"),
        entry("TORN", "Tornado", "Strike / interdiction"),
        // Helicopters
        entry("H60", "UH-60 Black Hawk", "Utility helicopter"),
        entry("H47", "CH-47 Chinook", "Heavy lift helicopter"),
        entry("V22", "MV-22 Osprey", "Tiltrotor transport"),
        // VIP / Command
        entry("VC25", "VC-25A (Air Force One)", "Presidential transport"),
        entry("C40A", "C-40A Clipper", "Executive transport"),
        entry("C37A", "C-37A Gulfstream V", "Executive transport"),
    ]
}

/// Callsign prefixes that mark military traffic in unfiltered feeds.
fn military_prefixes() -> Vec<&'static str> {
    vec![
        // US Airlift (C-17, C-5, C-130)
        "RCH", "REACH", "PACK", "DUKE", "MOOSE", "FRED", "CARGO", "HERK", "HERKY",
        // US Tanker (KC-135, KC-46, KC-10)
        "ETHYL", "JULIET", "PEARL", "STEEL", "SHELL", "TEAL", "BRIT", "NKAC", "PKSN", "BLUE",
        "IRON", "CASA", "INDY",
        // US Bomber (B-2, B-52, B-1)
        "DOOM", "DEATH", "BATT", "SEVILLE", "MYTEE", "BONE", "LANCE", "TIGER",
        // US ISR / SIGINT / AWACS
        "HOMER", "TOPCT", "JAKE", "TITAN", "FORTE", "MAGIC", "SNTRY", "REDEYE", "RAIDR", "OLIVE",
        "MAZDA", "TANGO", "NCHO",
        // US Fighter / Strike
        "VIPER", "EAGLE", "HAWK", "RAZOR", "STRIKE", "TREND", "RAGE", "BOLT", "WRATH",
        // US CSAR / Medevac / Special
        "KING", "EVAC", "PEDRO", "JOLLY", "DUSTOFF",
        // US VIP / Command
        "SAM", "VENUS", "EXEC", "SPAR",
        // US Navy / Marine
        "NAVY", "HAVOC", "CONDOR",
        // UK RAF
        "ASCOT", "TARTN", "RRR",
        // Other NATO / Coalition
        "GAF", "FAF", "IAM", "BAF", "DAF",
        // Generic military patterns
        "GOLD", "SHADOW", "TORCH",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_sizes() {
        let tables = bundled();
        assert_eq!(tables.callsign_prefixes.len(), 62);
        assert_eq!(tables.type_codes.len(), 50);
        assert_eq!(tables.military_prefixes.len(), 75);
    }

    #[test]
    fn every_classified_prefix_is_also_a_military_prefix() {
        let tables = bundled();
        for (prefix, _) in &tables.callsign_prefixes {
            assert!(
                tables.military_prefixes.contains(prefix),
                "{prefix} classified but not flagged military"
            );
        }
    }
}

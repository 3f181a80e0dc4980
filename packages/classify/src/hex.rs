//! Country of registration from ICAO24 hex address ranges.
//!
//! ICAO allocates 24-bit address blocks per state of registry. The
//! ranges here are the coarse national blocks, which is enough to tell
//! an American tanker from a British one; they are not exact military
//! sub-allocations.

/// National ICAO24 address blocks, first match wins.
const HEX_RANGES: &[(u32, u32, &str)] = &[
    (0x00A0_0000, 0x00AF_FFFF, "United States"),
    (0x0040_0000, 0x0043_FFFF, "United Kingdom"),
    (0x003C_0000, 0x003F_FFFF, "Germany"),
    (0x0038_0000, 0x003B_FFFF, "France"),
    (0x0030_0000, 0x0033_FFFF, "Italy"),
    (0x0034_0000, 0x0037_FFFF, "Spain"),
    (0x0048_0000, 0x004B_FFFF, "Netherlands"),
    (0x0044_0000, 0x0044_7FFF, "Austria"),
    (0x0046_0000, 0x0046_7FFF, "Belgium"),
    (0x004C_0000, 0x004C_FFFF, "Turkey"),
    (0x0073_8000, 0x0073_FFFF, "Israel"),
    (0x0070_0000, 0x0070_FFFF, "Saudi Arabia"),
    (0x0060_0000, 0x0060_03FF, "Qatar"),
    (0x0089_6000, 0x0089_6FFF, "UAE"),
    (0x0071_0000, 0x0071_7FFF, "Jordan"),
    (0x0050_0000, 0x0050_7FFF, "Australia"),
    (0x00C0_0000, 0x00C3_FFFF, "Canada"),
    (0x007C_0000, 0x007F_FFFF, "Australia"),
];

/// Resolves an ICAO24 hex address (e.g. "ae117f") to a country name.
///
/// Unparseable or unallocated addresses yield `None`.
#[must_use]
pub fn origin_from_hex(hex: &str) -> Option<&'static str> {
    let address = u32::from_str_radix(hex.trim(), 16).ok()?;
    HEX_RANGES
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&address))
        .map(|(_, _, country)| *country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_military_block() {
        assert_eq!(origin_from_hex("ae117f"), Some("United States"));
    }

    #[test]
    fn uk_block() {
        assert_eq!(origin_from_hex("43c123"), Some("United Kingdom"));
    }

    #[test]
    fn unallocated_block_is_none() {
        assert_eq!(origin_from_hex("f00000"), None);
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(origin_from_hex(""), None);
        assert_eq!(origin_from_hex("not-hex"), None);
    }
}

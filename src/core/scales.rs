//! core/scales.rs — reference table of known 12-position scales.
//!
//! Heptatonic scales written as pitch-class wheels: bit i set means the
//! pitch class i semitones above the root is in the scale. The comparator
//! treats these as ordinary patterns; nothing here is special-cased.

use super::pattern::Pattern;

pub const KNOWN_SCALES: &[(&str, &str)] = &[
    ("Ionian (Major Scale)", "101011010101"),
    ("Harmonic Minor", "101101011001"),
    ("Harmonic Major", "101011010011"),
    ("Hungarian Minor", "101101101001"),
    ("Hungarian Major", "101010111001"),
    ("Double Harmonic", "110101011001"),
];

/// The table above, parsed. Entries are compile-time constants validated
/// by test, so parsing cannot fail.
pub fn known_scales() -> Vec<(&'static str, Pattern)> {
    KNOWN_SCALES
        .iter()
        .map(|&(name, bits)| {
            let pattern = bits.parse().expect("scale table entry is valid");
            (name, pattern)
        })
        .collect()
}

/// Look up a scale by case-insensitive name fragment ("ionian", "major").
pub fn lookup(name: &str) -> Option<(&'static str, Pattern)> {
    let needle = name.to_ascii_lowercase();
    known_scales()
        .into_iter()
        .find(|(full, _)| full.to_ascii_lowercase().contains(&needle))
}

/// Name of the first known scale whose rotation set contains `p`.
pub fn match_known_scale(p: &Pattern) -> Option<&'static str> {
    known_scales()
        .into_iter()
        .find(|(_, scale)| scale.is_rotation_of(p))
        .map(|(name, _)| name)
}

/// First rotation of `p` starting with `prefix`, or `p` unchanged if none
/// does. Used to line figures up on a common mode before drawing.
pub fn rotate_to_prefix(p: &Pattern, prefix: &Pattern) -> Pattern {
    p.rotations()
        .into_iter()
        .find(|r| r.starts_with(prefix))
        .unwrap_or_else(|| p.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries_are_twelve_position_heptatonic() {
        for (name, bits) in KNOWN_SCALES {
            let p: Pattern = bits.parse().unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(p.len(), 12, "{name}");
            assert_eq!(p.ones(), 7, "{name}");
            assert!(p.bit(0), "{name} should start on the root");
        }
    }

    #[test]
    fn matches_scales_under_rotation() {
        let ionian: Pattern = "101011010101".parse().unwrap();
        // Aeolian is the fifth mode of the major scale.
        let aeolian = ionian.rotated_left(9);
        assert_eq!(match_known_scale(&aeolian), Some("Ionian (Major Scale)"));

        let unrelated: Pattern = "111111100000".parse().unwrap();
        assert_eq!(match_known_scale(&unrelated), None);
    }

    #[test]
    fn lookup_by_fragment() {
        assert_eq!(lookup("ionian").map(|(n, _)| n), Some("Ionian (Major Scale)"));
        assert_eq!(lookup("hungarian minor").map(|(n, _)| n), Some("Hungarian Minor"));
        assert_eq!(lookup("locrian"), None);
    }

    #[test]
    fn rotate_to_prefix_finds_matching_rotation() {
        let p: Pattern = "0110".parse().unwrap();
        let prefix: Pattern = "11".parse().unwrap();
        assert_eq!(rotate_to_prefix(&p, &prefix).to_string(), "1100");

        // No rotation starts with the prefix: input returned unchanged.
        let none: Pattern = "1010".parse().unwrap();
        assert_eq!(rotate_to_prefix(&none, &prefix), none);
    }
}

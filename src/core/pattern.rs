//! core/pattern.rs — binary pattern value type and rotation utilities.
//!
//! A `Pattern` is a fixed-length cyclic bit sequence. In the musical reading
//! each index is a pitch-class slot and a set bit is an active note; nothing
//! in this module depends on that reading.

use std::fmt;
use std::str::FromStr;

use super::PatternError;

/// Fixed-length binary sequence with cyclic index semantics.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    bits: Vec<bool>,
}

impl Pattern {
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// All-zero pattern of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            bits: vec![false; n],
        }
    }

    /// All-one pattern of length `n`.
    pub fn filled(n: usize) -> Self {
        Self {
            bits: vec![true; n],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// Bit at cyclic index `i` (mod n).
    #[inline]
    pub fn bit_mod(&self, i: usize) -> bool {
        self.bits[i % self.bits.len()]
    }

    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Pattern shifted left by `i` positions: `out[j] = self[(i + j) mod n]`.
    pub fn rotated_left(&self, i: usize) -> Self {
        let n = self.bits.len();
        if n == 0 {
            return self.clone();
        }
        let i = i % n;
        let mut bits = Vec::with_capacity(n);
        bits.extend_from_slice(&self.bits[i..]);
        bits.extend_from_slice(&self.bits[..i]);
        Self { bits }
    }

    /// All `n` left rotations in offset order, identity first.
    ///
    /// The empty pattern has a single (empty) rotation.
    pub fn rotations(&self) -> Vec<Self> {
        if self.bits.is_empty() {
            return vec![self.clone()];
        }
        (0..self.bits.len()).map(|i| self.rotated_left(i)).collect()
    }

    /// True if `other` is some rotation of `self`.
    pub fn is_rotation_of(&self, other: &Self) -> bool {
        self.len() == other.len() && self.rotations().iter().any(|r| r == other)
    }

    /// True if `self` starts with the bits of `prefix`.
    pub fn starts_with(&self, prefix: &Self) -> bool {
        prefix.len() <= self.len() && self.bits[..prefix.len()] == prefix.bits[..]
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({self})")
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for (position, byte) in s.bytes().enumerate() {
            match byte {
                b'0' => bits.push(false),
                b'1' => bits.push(true),
                _ => return Err(PatternError::InvalidDigit { position, byte }),
            }
        }
        Ok(Self { bits })
    }
}

/// Positional Hamming distance (no rotation applied).
pub fn hamming(a: &Pattern, b: &Pattern) -> Result<usize, PatternError> {
    if a.len() != b.len() {
        return Err(PatternError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.bits
        .iter()
        .zip(&b.bits)
        .filter(|(x, y)| x != y)
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn parse_display_roundtrip() {
        for s in ["", "0", "1", "101011010101"] {
            assert_eq!(p(s).to_string(), s);
        }
    }

    #[test]
    fn parse_rejects_non_binary() {
        let err = "10x1".parse::<Pattern>().unwrap_err();
        assert_eq!(
            err,
            PatternError::InvalidDigit {
                position: 2,
                byte: b'x'
            }
        );
    }

    #[test]
    fn rotations_are_left_shifts_in_offset_order() {
        let rots = p("1100").rotations();
        let expect = ["1100", "1001", "0011", "0110"];
        assert_eq!(rots.len(), 4);
        for (r, e) in rots.iter().zip(expect) {
            assert_eq!(r.to_string(), e);
        }
    }

    #[test]
    fn rotating_by_n_recovers_original() {
        let a = p("1011010");
        assert_eq!(a.rotated_left(a.len()), a);
        let mut cur = a.clone();
        for _ in 0..a.len() {
            cur = cur.rotated_left(1);
        }
        assert_eq!(cur, a);
    }

    #[test]
    fn empty_pattern_has_single_empty_rotation() {
        let e = p("");
        assert_eq!(e.rotations(), vec![e.clone()]);
        assert_eq!(e.rotated_left(3), e);
    }

    #[test]
    fn hamming_counts_differing_positions() {
        assert_eq!(hamming(&p("1100"), &p("1010")).unwrap(), 2);
        assert_eq!(hamming(&p("1100"), &p("1100")).unwrap(), 0);
        assert_eq!(hamming(&p(""), &p("")).unwrap(), 0);
    }

    #[test]
    fn hamming_rejects_length_mismatch() {
        let err = hamming(&p("10"), &p("100")).unwrap_err();
        assert_eq!(err, PatternError::LengthMismatch { left: 2, right: 3 });
    }

    #[test]
    fn rotation_class_membership() {
        assert!(p("1001").is_rotation_of(&p("1100")));
        assert!(!p("1010").is_rotation_of(&p("1100")));
    }
}

//! Necklace enumeration and comparison engine (pure, no I/O).

pub mod compare;
pub mod necklace;
pub mod pattern;
pub mod scales;

/// Errors returned by the pattern core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Requested more set bits than there are positions.
    OnesOutOfRange { ones: usize, len: usize },
    /// Comparator inputs differ in length.
    LengthMismatch { left: usize, right: usize },
    /// Pattern string contains a byte other than '0' or '1'.
    InvalidDigit { position: usize, byte: u8 },
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::OnesOutOfRange { ones, len } => {
                write!(f, "cannot place {ones} ones in {len} positions")
            }
            PatternError::LengthMismatch { left, right } => {
                write!(f, "pattern lengths differ: {left} vs {right}")
            }
            PatternError::InvalidDigit { position, byte } => {
                write!(
                    f,
                    "invalid digit {:?} at position {position}, expected '0' or '1'",
                    *byte as char
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

//! core/compare.rs — pairwise pattern comparison.
//!
//! Two primitives: `dissimilarity` (minimum Hamming distance over all
//! rotational alignments, with the minimal alignments themselves) and
//! `overlap` (count of rotation/offset pairs under which one pattern's
//! leading slots coincide with the other). Family-level matrices are thin
//! loops over these.

use std::collections::HashSet;

use super::PatternError;
use super::necklace::enumerate_necklaces;
use super::pattern::{Pattern, hamming};

/// Result of `dissimilarity`: the minimum score and the alignments reaching
/// it, at most one per rotation class of the left-hand rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dissimilarity {
    pub score: usize,
    pub alignments: Vec<(Pattern, Pattern)>,
}

/// Minimum Hamming distance between any rotation of `a` and any rotation
/// of `b`, over all n² pairs.
///
/// Among minimal pairs, once a left rotation is recorded every later pair
/// whose left side is a rotation of it is dropped, so each left rotation
/// class contributes one alignment.
pub fn dissimilarity(a: &Pattern, b: &Pattern) -> Result<Dissimilarity, PatternError> {
    if a.len() != b.len() {
        return Err(PatternError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let rots_b = b.rotations();
    let mut score = usize::MAX;
    let mut minimal: Vec<(Pattern, Pattern)> = Vec::new();
    for ra in a.rotations() {
        for rb in &rots_b {
            let d = hamming(&ra, rb)?;
            if d < score {
                score = d;
                minimal.clear();
                minimal.push((ra.clone(), rb.clone()));
            } else if d == score {
                minimal.push((ra.clone(), rb.clone()));
            }
        }
    }

    let mut seen: HashSet<Pattern> = HashSet::new();
    let mut alignments = Vec::new();
    for (ra, rb) in minimal {
        if seen.contains(&ra) {
            continue;
        }
        seen.extend(ra.rotations());
        alignments.push((ra, rb));
    }

    Ok(Dissimilarity { score, alignments })
}

/// Count of (rotation, offset) pairs aligning `a` onto rotations of `b`.
///
/// For each of the n rotations of `b` and each cyclic offset i, the test is
/// `a[j] == rot[(i + j) mod n]` for j in `0..a.ones()`. Note that j walks
/// the first `a.ones()` index slots of `a`, not its set-bit positions, so
/// zeros inside that prefix must match too. This is the behavior of the
/// data this tool reproduces; see DESIGN.md before changing it.
pub fn overlap(a: &Pattern, b: &Pattern) -> Result<usize, PatternError> {
    if a.len() != b.len() {
        return Err(PatternError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let n = b.len();
    let k = a.ones();
    let mut count = 0;
    for rot in b.rotations() {
        for i in 0..n {
            if (0..k).all(|j| a.bit(j) == rot.bit_mod(i + j)) {
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Per-pattern overlap counts between two families, row-major over `fam_a`.
pub fn overlap_matrix(
    fam_a: &[Pattern],
    fam_b: &[Pattern],
) -> Result<Vec<Vec<usize>>, PatternError> {
    let mut matrix = Vec::with_capacity(fam_a.len());
    for a in fam_a {
        let mut row = Vec::with_capacity(fam_b.len());
        for b in fam_b {
            row.push(overlap(a, b)?);
        }
        matrix.push(row);
    }
    Ok(matrix)
}

/// Family-summed overlap counts for every (k1, k2) pair, as an
/// (n+1) x (n+1) matrix indexed by the two one-counts.
pub fn overlap_totals(n: usize) -> Result<Vec<Vec<u64>>, PatternError> {
    let families: Vec<Vec<Pattern>> = (0..=n)
        .map(|k| enumerate_necklaces(n, k))
        .collect::<Result<_, _>>()?;
    let mut totals = vec![vec![0u64; n + 1]; n + 1];
    for (k1, fam_a) in families.iter().enumerate() {
        for (k2, fam_b) in families.iter().enumerate() {
            let mut sum = 0u64;
            for a in fam_a {
                for b in fam_b {
                    sum += overlap(a, b)? as u64;
                }
            }
            totals[k1][k2] = sum;
        }
    }
    Ok(totals)
}

/// One family pattern scored against a reference pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestMatch {
    pub pattern: Pattern,
    pub score: usize,
    pub alignments: Vec<(Pattern, Pattern)>,
}

/// Minimal rotational dissimilarity of each family pattern against `reference`.
pub fn nearest_to_reference(
    patterns: &[Pattern],
    reference: &Pattern,
) -> Result<Vec<NearestMatch>, PatternError> {
    patterns
        .iter()
        .map(|p| {
            let d = dissimilarity(p, reference)?;
            Ok(NearestMatch {
                pattern: p.clone(),
                score: d.score,
                alignments: d.alignments,
            })
        })
        .collect()
}

/// Minimal Hamming distance of the unrotated `pattern` against the
/// rotations of `reference` (only the reference side is rotated).
pub fn min_distance_to_rotations(
    pattern: &Pattern,
    reference: &Pattern,
) -> Result<usize, PatternError> {
    let mut best = usize::MAX;
    for rot in reference.rotations() {
        best = best.min(hamming(pattern, &rot)?);
    }
    Ok(best)
}

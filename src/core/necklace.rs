//! core/necklace.rs — enumeration of rotation-distinct patterns.
//!
//! `enumerate_necklaces(n, k)` yields one representative per rotation class
//! of the k-subsets of an n-cycle, first bit fixed to 1. Representatives are
//! accepted in lexicographic generation order of the remaining one-positions,
//! so the output order is deterministic and the representative of each class
//! is whichever member is generated first.

use std::collections::HashSet;

use super::PatternError;
use super::pattern::Pattern;

/// Exact binomial coefficient C(n, k).
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc = 1u64;
    for i in 0..k {
        acc = acc * (n - i) / (i + 1);
    }
    acc
}

/// Lexicographic k-combinations of `0..n`, as ascending index tuples.
struct Combinations {
    n: usize,
    idx: Vec<usize>,
    done: bool,
}

fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        idx: (0..k).collect(),
        done: k > n,
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let out = self.idx.clone();
        let k = self.idx.len();
        // Advance to the next combination, rightmost index first.
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.idx[i] != i + self.n - k {
                self.idx[i] += 1;
                for j in i + 1..k {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
                break;
            }
        }
        Some(out)
    }
}

/// One canonical pattern per rotation class of length `n` with `k` ones.
///
/// For `k >= 1` every representative has bit 0 set. `k > n` is rejected.
pub fn enumerate_necklaces(n: usize, k: usize) -> Result<Vec<Pattern>, PatternError> {
    if k > n {
        return Err(PatternError::OnesOutOfRange { ones: k, len: n });
    }
    if k == 0 {
        return Ok(vec![Pattern::zeros(n)]);
    }
    if k == n {
        return Ok(vec![Pattern::filled(n)]);
    }

    // Bit 0 is fixed to 1; the remaining k-1 ones range over the n-1 tail
    // positions. A candidate opens a new rotation class iff none of its
    // rotations is an already accepted representative.
    let mut accepted = Vec::new();
    let mut seen: HashSet<Pattern> = HashSet::new();
    for combo in combinations(n - 1, k - 1) {
        let mut bits = vec![false; n];
        bits[0] = true;
        for &i in &combo {
            bits[i + 1] = true;
        }
        let candidate = Pattern::from_bits(bits);
        if candidate.rotations().iter().any(|r| seen.contains(r)) {
            continue;
        }
        seen.insert(candidate.clone());
        accepted.push(candidate);
    }
    Ok(accepted)
}

/// One row of the per-k census table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensusRow {
    pub k: usize,
    /// Raw first-bit-fixed placements: C(n-1, k-1), or 1 for k = 0.
    pub combinations: u64,
    /// Rotation-distinct representatives among them.
    pub necklaces: usize,
}

/// Census of combination and necklace counts for every k in `0..=n`.
pub fn necklace_census(n: usize) -> Result<Vec<CensusRow>, PatternError> {
    let mut rows = Vec::with_capacity(n + 1);
    for k in 0..=n {
        let combinations = if k == 0 {
            1
        } else {
            binomial((n - 1) as u64, (k - 1) as u64)
        };
        let necklaces = enumerate_necklaces(n, k)?.len();
        rows.push(CensusRow {
            k,
            combinations,
            necklaces,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(11, 6), 462);
        assert_eq!(binomial(12, 7), 792);
        assert_eq!(binomial(3, 5), 0);
    }

    #[test]
    fn combinations_are_lexicographic() {
        let combos: Vec<Vec<usize>> = combinations(4, 2).collect();
        assert_eq!(
            combos,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn combinations_k_zero_yields_one_empty() {
        let combos: Vec<Vec<usize>> = combinations(5, 0).collect();
        assert_eq!(combos, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn four_choose_two_splits_adjacent_and_opposite() {
        let reps = enumerate_necklaces(4, 2).unwrap();
        let strings: Vec<String> = reps.iter().map(|p| p.to_string()).collect();
        assert_eq!(strings, vec!["1100", "1010"]);
    }

    #[test]
    fn degenerate_k_values() {
        let zeros = enumerate_necklaces(5, 0).unwrap();
        assert_eq!(zeros.len(), 1);
        assert_eq!(zeros[0].to_string(), "00000");
        let ones = enumerate_necklaces(5, 5).unwrap();
        assert_eq!(ones.len(), 1);
        assert_eq!(ones[0].to_string(), "11111");
    }

    #[test]
    fn rejects_too_many_ones() {
        let err = enumerate_necklaces(4, 5).unwrap_err();
        assert_eq!(err, PatternError::OnesOutOfRange { ones: 5, len: 4 });
    }

    #[test]
    fn representatives_have_first_bit_set() {
        for k in 1..=8 {
            for rep in enumerate_necklaces(8, k).unwrap() {
                assert!(rep.bit(0), "k={k} rep={rep}");
            }
        }
    }

    #[test]
    fn twelve_position_counts_match_known_necklace_numbers() {
        let expect = [1usize, 1, 6, 19, 43, 66, 80, 66, 43, 19, 6, 1, 1];
        for (k, &want) in expect.iter().enumerate() {
            let got = enumerate_necklaces(12, k).unwrap().len();
            assert_eq!(got, want, "n=12 k={k}");
        }
    }

    #[test]
    fn census_rows_are_consistent() {
        let rows = necklace_census(6).unwrap();
        assert_eq!(rows.len(), 7);
        for row in &rows {
            if row.k == 0 {
                assert_eq!(row.combinations, 1);
            } else {
                assert_eq!(row.combinations, binomial(5, (row.k - 1) as u64));
            }
            assert_eq!(
                row.necklaces,
                enumerate_necklaces(6, row.k).unwrap().len()
            );
        }
    }
}

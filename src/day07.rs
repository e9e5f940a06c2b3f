//! # Day 7: Laboratories
//!
//! A tachyon beam enters at `S` and travels down the manifold. A beam that
//! hits a splitter (`^`) continues from the two cells beside it. Part 1
//! counts splits over the set of beam positions; part 2 follows every
//! timeline separately, tracked as a multiplicity per column.

use crate::{Answer, Error, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

const SOURCE: char = 'S';
const SPLITTER: char = '^';

/// Column indices of characters of `row` found in `symbols`.
pub fn find_occurrences(row: &str, symbols: &str) -> Vec<usize> {
    row.chars()
        .enumerate()
        .filter(|(_, c)| symbols.contains(*c))
        .map(|(i, _)| i)
        .collect()
}

/// Every index must leave room on both sides: `0 < i < len`.
pub fn validate_indices(indices: &[usize], len: usize) -> bool {
    indices.iter().all(|&i| 0 < i && i < len)
}

/// Moves the beams through one row of splitters. Returns the new beam
/// positions and the number of beams that were split.
pub fn process_layer(beams: &BTreeSet<usize>, splitters: &FxHashSet<usize>) -> (BTreeSet<usize>, u64) {
    let mut out = BTreeSet::new();
    let mut splits = 0;
    for &b in beams {
        if splitters.contains(&b) {
            out.insert(b - 1);
            out.insert(b + 1);
            splits += 1;
        } else {
            out.insert(b);
        }
    }
    (out, splits)
}

/// Same transition as [`process_layer`], counting how many timelines sit
/// in each column. A count past `u64::MAX` is an `Overflow`.
pub fn process_layer_counts(
    counts: &FxHashMap<usize, u64>,
    splitters: &FxHashSet<usize>,
) -> Result<FxHashMap<usize, u64>> {
    let mut out = FxHashMap::default();
    let mut add = |pos: usize, c: u64| -> Result<()> {
        let slot: &mut u64 = out.entry(pos).or_default();
        *slot = slot.checked_add(c).ok_or(Error::Overflow)?;
        Ok(())
    };
    for (&pos, &c) in counts {
        if splitters.contains(&pos) {
            add(pos - 1, c)?;
            add(pos + 1, c)?;
        } else {
            add(pos, c)?;
        }
    }
    Ok(out)
}

/// Returns the beam sources and one splitter set per following row.
pub fn parse_manifold(input: &str) -> Result<(BTreeSet<usize>, Vec<FxHashSet<usize>>)> {
    let symbols: String = [SOURCE, SPLITTER].iter().collect();
    let mut rows = input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());
    let (first_i, first) = rows
        .next()
        .ok_or_else(|| Error::InvalidInput("empty manifold".into()))?;
    let sources: BTreeSet<usize> = find_occurrences(first, &SOURCE.to_string())
        .into_iter()
        .collect();
    if sources.is_empty() {
        return Err(Error::parse(first_i + 1, "no beam source on the first row"));
    }
    let mut layers = vec![];
    for (i, row) in std::iter::once((first_i, first)).chain(rows) {
        let row = row.trim_end();
        if !validate_indices(&find_occurrences(row, &symbols), row.chars().count()) {
            return Err(Error::parse(i + 1, "beam source or splitter on the edge"));
        }
        if i > first_i {
            layers.push(find_occurrences(row, &SPLITTER.to_string()).into_iter().collect());
        }
    }
    Ok((sources, layers))
}

pub fn solve(input: &str) -> Result<Answer> {
    let (sources, layers) = parse_manifold(input)?;

    let mut beams = sources.clone();
    let mut splits = 0;
    for layer in &layers {
        let (next, s) = process_layer(&beams, layer);
        beams = next;
        splits += s;
    }

    let mut timelines: FxHashMap<usize, u64> = sources.iter().map(|&s| (s, 1)).collect();
    for layer in &layers {
        timelines = process_layer_counts(&timelines, layer)?;
    }
    let total = timelines
        .values()
        .try_fold(0u64, |acc, &c| acc.checked_add(c))
        .ok_or(Error::Overflow)?;
    Ok(Answer::new(splits, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const EXAMPLE: &str = "\
.......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

    fn set(v: &[usize]) -> FxHashSet<usize> {
        v.iter().copied().collect()
    }

    fn beams(v: &[usize]) -> BTreeSet<usize> {
        v.iter().copied().collect()
    }

    fn counts(v: &[(usize, u64)]) -> FxHashMap<usize, u64> {
        v.iter().copied().collect()
    }

    #[test]
    fn finds_occurrences() {
        assert_eq!(find_occurrences("abcabc", "b"), vec![1, 4]);
        assert_eq!(find_occurrences("..S.^", "S^"), vec![2, 4]);
        assert!(find_occurrences("....", "^").is_empty());
    }

    #[test]
    fn validates_indices() {
        assert!(validate_indices(&[1, 2, 3], 5));
        assert!(!validate_indices(&[0, 2], 5));
        assert!(!validate_indices(&[1, 5], 5));
        assert!(validate_indices(&[], 0));
    }

    #[test]
    fn layer_without_hits() {
        let (out, splits) = process_layer(&beams(&[3, 5]), &set(&[10]));
        assert_eq!(out, beams(&[3, 5]));
        assert_eq!(splits, 0);
    }

    #[test]
    fn layer_with_hits() {
        let (out, splits) = process_layer(&beams(&[3, 5]), &set(&[5]));
        assert_eq!(out, beams(&[3, 4, 6]));
        assert_eq!(splits, 1);

        let (out, splits) = process_layer(&beams(&[2, 4, 6]), &set(&[2, 6]));
        assert_eq!(out, beams(&[1, 3, 4, 5, 7]));
        assert_eq!(splits, 2);
    }

    #[test]
    fn layer_counts() {
        assert_eq!(process_layer_counts(&counts(&[(4, 1)]), &set(&[10])).unwrap(), counts(&[(4, 1)]));
        assert_eq!(
            process_layer_counts(&counts(&[(4, 1)]), &set(&[4])).unwrap(),
            counts(&[(3, 1), (5, 1)])
        );
        assert_eq!(
            process_layer_counts(&counts(&[(2, 1), (4, 2)]), &set(&[4])).unwrap(),
            counts(&[(2, 1), (3, 2), (5, 2)])
        );
        assert_eq!(
            process_layer_counts(&counts(&[(5, 3)]), &set(&[5])).unwrap(),
            counts(&[(4, 3), (6, 3)])
        );
    }

    #[test]
    fn random_layers() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..300 {
            let inputs: BTreeSet<usize> = (0..rng.random_range(1..=50))
                .map(|_| rng.random_range(1..=50))
                .collect();
            let layer: FxHashSet<usize> = (0..rng.random_range(0..=50))
                .map(|_| rng.random_range(1..=50))
                .collect();
            let (out, splits) = process_layer(&inputs, &layer);
            assert_eq!(splits, inputs.iter().filter(|&&b| layer.contains(&b)).count() as u64);
            for &b in &inputs {
                if layer.contains(&b) {
                    assert!(out.contains(&(b - 1)) && out.contains(&(b + 1)));
                } else {
                    assert!(out.contains(&b));
                }
            }

            let weights: FxHashMap<usize, u64> =
                inputs.iter().map(|&b| (b, rng.random_range(1..=10))).collect();
            let next = process_layer_counts(&weights, &layer).unwrap();
            assert!(next.values().all(|&c| c > 0));
            let expected: u64 = weights
                .iter()
                .map(|(p, &c)| if layer.contains(p) { 2 * c } else { c })
                .sum();
            assert_eq!(next.values().sum::<u64>(), expected);
            let positions: BTreeSet<usize> = next.keys().copied().collect();
            assert_eq!(positions, out);
        }
    }

    /// A source in the middle of a `width`-wide manifold followed by `depth`
    /// rows of splitters, each row placed so that every beam hits one.
    fn full_pyramid(width: usize, depth: usize) -> String {
        let mid = width / 2;
        let mut rows = vec![(0..width).map(|j| if j == mid { 'S' } else { '.' }).collect::<String>()];
        for k in 0..depth {
            rows.push(
                (0..width)
                    .map(|j| if 0 < j && j + 1 < width && (j + k + mid) % 2 == 0 { '^' } else { '.' })
                    .collect(),
            );
        }
        rows.join("\n")
    }

    #[test]
    fn checked_timeline_counts() {
        // Columns 2 and 4 both send timelines to column 3.
        let c = counts(&[(2, u64::MAX), (4, 1)]);
        assert!(matches!(
            process_layer_counts(&c, &set(&[2, 4])),
            Err(Error::Overflow)
        ));
        assert_eq!(
            process_layer_counts(&c, &set(&[2])).unwrap(),
            counts(&[(1, u64::MAX), (3, u64::MAX), (4, 1)])
        );
    }

    #[test]
    fn deep_manifold_overflows() {
        // 2^63 timelines still fit.
        assert_eq!(
            solve(&full_pyramid(301, 63)).unwrap(),
            Answer::new(63 * 64 / 2, 1u64 << 63)
        );
        // 2^64 timelines: every column fits, the total does not.
        assert!(matches!(solve(&full_pyramid(301, 64)), Err(Error::Overflow)));
        // Single columns overflow long before the beams reach the walls.
        assert!(matches!(solve(&full_pyramid(301, 140)), Err(Error::Overflow)));
    }

    #[test]
    fn rejects_edge_splitters() {
        assert!(solve("S..\n...\n").is_err());
        assert!(solve(".S.\n^..\n").is_err());
        assert!(solve("...\n.^.\n").is_err());
        assert!(solve("").is_err());
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).unwrap(), Answer::new(21, 40));
    }
}

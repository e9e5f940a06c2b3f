//! # Day 5: Cafeteria
//!
//! Fresh ingredient IDs are given as overlapping inclusive ranges. They are
//! coalesced into a sorted list of disjoint half-open intervals, which makes
//! membership a binary search and the number of fresh IDs a plain sum.

use crate::{Answer, Error, Result, narrow};

/// A set of `u64` stored as sorted, disjoint, non-adjacent `[start, end)`
/// intervals. Bounds are `u128` so that `u64::MAX` itself can be a member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeSet {
    intervals: Vec<(u128, u128)>,
}

impl RangeSet {
    /// Builds the set from inclusive `(lo, hi)` ranges. Overlapping and
    /// touching ranges are merged.
    pub fn from_inclusive(ranges: &[(u64, u64)]) -> Result<Self> {
        let mut half_open = Vec::with_capacity(ranges.len());
        for &(lo, hi) in ranges {
            if lo > hi {
                return Err(Error::ReversedRange { lo, hi });
            }
            half_open.push((lo as u128, hi as u128 + 1));
        }
        Ok(Self::merge(half_open))
    }

    /// Builds the set from `[start, end)` intervals; empty intervals are dropped.
    pub fn from_half_open(ranges: Vec<(u64, u64)>) -> Self {
        Self::merge(ranges.into_iter().map(|(s, e)| (s as u128, e as u128)).collect())
    }

    fn merge(mut ranges: Vec<(u128, u128)>) -> Self {
        ranges.retain(|&(s, e)| s < e);
        ranges.sort_unstable();
        let mut intervals: Vec<(u128, u128)> = Vec::with_capacity(ranges.len());
        for (s, e) in ranges {
            match intervals.last_mut() {
                Some(last) if s <= last.1 => last.1 = last.1.max(e),
                _ => intervals.push((s, e)),
            }
        }
        Self { intervals }
    }

    pub fn contains(&self, id: u64) -> bool {
        let id = id as u128;
        // First interval that ends after `id`.
        let k = self.intervals.partition_point(|&(_, e)| e <= id);
        self.intervals.get(k).is_some_and(|&(s, _)| s <= id)
    }

    /// Number of integers in the set, up to 2^64.
    pub fn len(&self) -> u128 {
        self.intervals.iter().map(|&(s, e)| e - s).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn intervals(&self) -> &[(u128, u128)] {
        &self.intervals
    }

    /// Every member in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.intervals.iter().flat_map(|&(s, e)| (s..e).map(|v| v as u64))
    }
}

/// Splits the input into inclusive ranges and the available IDs.
pub fn parse_inventory(input: &str) -> Result<(Vec<(u64, u64)>, Vec<u64>)> {
    let lines: Vec<&str> = input.trim().lines().map(str::trim).collect();
    let sep = lines
        .iter()
        .position(|l| l.is_empty())
        .ok_or_else(|| Error::InvalidInput("missing blank line between ranges and IDs".into()))?;
    let parse = |i: usize, s: &str| {
        s.trim()
            .parse::<u64>()
            .map_err(|_| Error::parse(i + 1, format!("bad number {:?}", s)))
    };
    let ranges = lines[..sep]
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let (lo, hi) = l
                .split_once('-')
                .ok_or_else(|| Error::parse(i + 1, format!("range without '-': {:?}", l)))?;
            Ok((parse(i, lo)?, parse(i, hi)?))
        })
        .collect::<Result<Vec<_>>>()?;
    let ids = lines[sep + 1..]
        .iter()
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
        .map(|(i, l)| parse(sep + 1 + i, *l))
        .collect::<Result<Vec<_>>>()?;
    Ok((ranges, ids))
}

pub fn solve(input: &str) -> Result<Answer> {
    let (ranges, ids) = parse_inventory(input)?;
    let fresh = RangeSet::from_inclusive(&ranges)?;
    let part1 = ids.iter().filter(|&&id| fresh.contains(id)).count() as u64;
    Ok(Answer::new(part1, narrow(fresh.len())?))
}

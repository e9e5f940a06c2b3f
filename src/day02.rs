//! # Day 2: Gift Shop
//!
//! Invalid product IDs are numbers made of one block of digits written several
//! times (`6464`, `123123123`). Instead of scanning each range, the IDs of a
//! given length and period are `block * M` for a fixed multiplier `M`
//! (`1001` for a 2-digit block written twice, `1010101` for a 2-digit block
//! written four times), so their sum over a range is an arithmetic series.

use crate::{Answer, Error, Result, narrow};
use itertools::Itertools;

/// Parses `lo-hi` ranges separated by commas (newlines are tolerated).
pub fn parse_ranges(input: &str) -> Result<Vec<(u64, u64)>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let (lo, hi) = s
                .split_once('-')
                .ok_or_else(|| Error::InvalidInput(format!("range without '-': {:?}", s)))?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<u64>()
                    .map_err(|_| Error::InvalidInput(format!("bad range bound in {:?}", s)))
            };
            let (lo, hi) = (parse(lo)?, parse(hi)?);
            if lo > hi {
                return Err(Error::ReversedRange { lo, hi });
            }
            Ok((lo, hi))
        })
        .collect()
}

fn num_digits(n: u64) -> u32 {
    if n == 0 { 1 } else { n.ilog10() + 1 }
}

/// Splits `[lo, hi]` into sub-ranges whose members share a digit count.
fn split_by_digits(lo: u64, hi: u64) -> impl Iterator<Item = (u32, u128, u128)> {
    (num_digits(lo)..=num_digits(hi)).filter_map(move |len| {
        let a = (lo as u128).max(10u128.pow(len - 1));
        let b = (hi as u128).min(10u128.pow(len) - 1);
        (a <= b).then_some((len, a, b))
    })
}

/// Sum of the `len`-digit numbers in `[lo, hi]` made of a `period`-digit
/// block repeated `len / period` times. Includes numbers whose smallest
/// period is a divisor of `period`.
fn sum_with_period(lo: u128, hi: u128, len: u32, period: u32) -> u128 {
    let base = 10u128.pow(period);
    let multiplier: u128 = (0..len / period).map(|i| base.pow(i)).sum();
    let first = (base / 10).max(lo.div_ceil(multiplier));
    let last = (base - 1).min(hi / multiplier);
    if first > last {
        return 0;
    }
    multiplier * (first + last) * (last - first + 1) / 2
}

/// Sum of IDs in `[lo, hi]` made of a block written exactly twice.
pub fn sum_doubled_ids(lo: u64, hi: u64) -> Result<u64> {
    let total: u128 = split_by_digits(lo, hi)
        .filter(|&(len, _, _)| len % 2 == 0)
        .map(|(len, a, b)| sum_with_period(a, b, len, len / 2))
        .sum();
    narrow(total)
}

/// Sum of IDs in `[lo, hi]` made of a block written two or more times.
pub fn sum_repeated_ids(lo: u64, hi: u64) -> Result<u64> {
    let mut total = 0u128;
    for (len, a, b) in split_by_digits(lo, hi) {
        let periods = (1..len).filter(|p| len % p == 0).collect_vec();
        // exact[i]: sum of numbers whose smallest period is periods[i].
        let mut exact: Vec<u128> = Vec::with_capacity(periods.len());
        for (i, &p) in periods.iter().enumerate() {
            let finer: u128 = (0..i)
                .filter(|&j| p % periods[j] == 0)
                .map(|j| exact[j])
                .sum();
            exact.push(sum_with_period(a, b, len, p) - finer);
        }
        total += exact.iter().sum::<u128>();
    }
    narrow(total)
}

pub fn solve(input: &str) -> Result<Answer> {
    let ranges = parse_ranges(input)?;
    let mut part1 = 0u64;
    let mut part2 = 0u64;
    for &(lo, hi) in &ranges {
        part1 = part1
            .checked_add(sum_doubled_ids(lo, hi)?)
            .ok_or(Error::Overflow)?;
        part2 = part2
            .checked_add(sum_repeated_ids(lo, hi)?)
            .ok_or(Error::Overflow)?;
    }
    Ok(Answer::new(part1, part2))
}

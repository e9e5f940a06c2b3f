//! # Day 1: Secret Entrance
//!
//! A dial with 100 positions starts at 50 and is turned by a list of
//! rotations. Part 1 counts how often the dial rests on 0, part 2 counts every
//! click that passes 0 along the way.

use crate::{Answer, Error, Result, narrow};

const START: i64 = 50;
const POSITIONS: i64 = 100;

/// Parses `L<n>` / `R<n>` lines into signed rotations (left is negative).
pub fn parse_rotations<S: AsRef<str>>(lines: &[S]) -> Result<Vec<i64>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.as_ref().trim();
            let sign = match line.chars().next() {
                Some('L') => -1,
                Some('R') => 1,
                _ => return Err(Error::parse(i + 1, format!("bad rotation {:?}", line))),
            };
            let bad = || Error::parse(i + 1, format!("bad rotation {:?}", line));
            let n: i64 = line[1..].parse().map_err(|_| bad())?;
            n.checked_mul(sign).ok_or_else(bad)
        })
        .collect()
}

/// Unwrapped dial positions: `start` followed by the position after each rotation.
pub fn cumulative_positions(rotations: &[i64], start: i64) -> Result<Vec<i64>> {
    let mut out = Vec::with_capacity(rotations.len() + 1);
    let mut cur = start;
    out.push(cur);
    for &r in rotations {
        cur = cur.checked_add(r).ok_or(Error::Overflow)?;
        out.push(cur);
    }
    Ok(out)
}

/// Number of positions (the start included) that rest on a multiple of `modulus`.
pub fn count_landings(positions: &[i64], modulus: i64) -> u64 {
    positions
        .iter()
        .filter(|&&p| p.rem_euclid(modulus) == 0)
        .count() as u64
}

/// Counts the multiples of `modulus` visited while walking between consecutive
/// positions.
///
/// Each walk from `s` to `e` covers `s` itself but stops short of `e`, which
/// is counted as the start of the following walk instead.
pub fn count_multiples_in_range(positions: &[i64], modulus: i64) -> Result<u64> {
    if positions.len() < 2 {
        return Err(Error::InvalidInput(
            "at least two positions are required".to_string(),
        ));
    }
    if modulus <= 0 {
        return Err(Error::InvalidInput(format!(
            "modulus must be positive, got {}",
            modulus
        )));
    }
    let m = modulus as i128;
    let mut multiples = 0u128;
    for w in positions.windows(2) {
        let (s, e) = (w[0] as i128, w[1] as i128);
        let k = if s <= e {
            // [s, e - 1]
            (e - 1).div_euclid(m) - (s - 1).div_euclid(m)
        } else {
            // [e + 1, s]
            s.div_euclid(m) - e.div_euclid(m)
        };
        multiples += k as u128;
    }
    narrow(multiples)
}

pub fn solve(input: &str) -> Result<Answer> {
    let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
    let rotations = parse_rotations(&lines)?;
    let positions = cumulative_positions(&rotations, START)?;
    let part1 = count_landings(&positions, POSITIONS);
    let part2 = count_multiples_in_range(&positions, POSITIONS)?;
    Ok(Answer::new(part1, part2))
}

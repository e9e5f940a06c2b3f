//! # Day 3: Lobby
//!
//! Each bank is a row of battery joltages; turning on exactly `k` of them
//! yields the number formed by their digits in order. The best choice is
//! found with a monotonic stack: a digit evicts smaller digits before it as
//! long as enough digits remain to reach `k`.

use crate::{Answer, Error, Result};

/// Parses a line of digits.
pub fn parse_bank(line: &str, line_no: usize) -> Result<Vec<u8>> {
    line.trim()
        .bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(Error::parse(
                    line_no,
                    format!("unexpected character {:?}", b as char),
                ))
            }
        })
        .collect()
}

/// Largest number formed by `k` digits of `bank`, keeping their order.
pub fn max_joltage(bank: &[u8], k: usize) -> Result<u64> {
    if k > bank.len() {
        return Err(Error::NotEnoughDigits {
            wanted: k,
            available: bank.len(),
        });
    }
    let mut drop = bank.len() - k;
    let mut stack: Vec<u8> = Vec::with_capacity(bank.len());
    for &d in bank {
        while drop > 0 && stack.last().is_some_and(|&top| top < d) {
            stack.pop();
            drop -= 1;
        }
        stack.push(d);
    }
    stack.truncate(k);
    stack.iter().try_fold(0u64, |acc, &d| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(d as u64))
            .ok_or(Error::Overflow)
    })
}

fn total_joltage(banks: &[Vec<u8>], k: usize) -> Result<u64> {
    banks.iter().try_fold(0u64, |acc, bank| {
        acc.checked_add(max_joltage(bank, k)?).ok_or(Error::Overflow)
    })
}

pub fn solve(input: &str) -> Result<Answer> {
    let banks = input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| parse_bank(l, i + 1))
        .collect::<Result<Vec<_>>>()?;
    Ok(Answer::new(total_joltage(&banks, 2)?, total_joltage(&banks, 12)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const EXAMPLE: &str = "\
987654321111111
811111111111119
234234234234278
818181911112111
";

    fn brute_force(bank: &[u8], k: usize) -> u64 {
        bank.iter()
            .combinations(k)
            .map(|c| c.iter().fold(0u64, |acc, &&d| acc * 10 + d as u64))
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn two_digit_examples() {
        let maxes = EXAMPLE
            .lines()
            .map(|l| max_joltage(&parse_bank(l, 1).unwrap(), 2).unwrap())
            .collect_vec();
        assert_eq!(maxes, vec![98, 89, 78, 92]);
    }

    #[test]
    fn twelve_digit_examples() {
        let maxes = EXAMPLE
            .lines()
            .map(|l| max_joltage(&parse_bank(l, 1).unwrap(), 12).unwrap())
            .collect_vec();
        assert_eq!(
            maxes,
            vec![987654321111, 811111111119, 434234234278, 888911112111]
        );
    }

    #[test]
    fn too_few_digits() {
        assert!(matches!(
            max_joltage(&[1, 2, 3], 4),
            Err(Error::NotEnoughDigits {
                wanted: 4,
                available: 3
            })
        ));
        assert_eq!(max_joltage(&[1, 2, 3], 3).unwrap(), 123);
        assert_eq!(max_joltage(&[1, 2, 3], 0).unwrap(), 0);
    }

    #[test]
    fn overflow_is_reported() {
        let bank = vec![9u8; 25];
        assert!(matches!(max_joltage(&bank, 21), Err(Error::Overflow)));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(matches!(
            parse_bank("12a4", 7),
            Err(Error::Parse { line: 7, .. })
        ));
    }

    #[test]
    fn stack_matches_brute_force() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..300 {
            let n = rng.random_range(1..=10);
            let bank: Vec<u8> = (0..n).map(|_| rng.random_range(1..=9)).collect();
            let k = rng.random_range(1..=n);
            assert_eq!(
                max_joltage(&bank, k).unwrap(),
                brute_force(&bank, k),
                "{:?} k={}",
                bank,
                k
            );
        }
    }

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE).unwrap(), Answer::new(357, 3121910778619));
    }
}

//! # Day 4: Printing Department
//!
//! A forklift can reach a roll of paper (`@`) when fewer than four of the
//! eight surrounding cells hold rolls. Neighbour counts come from a 3x3
//! convolution; part 2 keeps removing reachable rolls until none are left.

use crate::conv::{self, Conv2d};
use crate::{Answer, Error, Result};
use itertools::iproduct;

const ACCESS_LIMIT: u32 = 4;

/// Parses the grid into 1 (roll) and 0 (empty).
pub fn parse_grid<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Vec<u32>>> {
    let grid = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.as_ref()
                .trim()
                .chars()
                .map(|c| match c {
                    '@' => Ok(1),
                    '.' => Ok(0),
                    _ => Err(Error::parse(i + 1, format!("unexpected character {:?}", c))),
                })
                .collect::<Result<Vec<u32>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    if !conv::is_valid_matrix(&grid) {
        return Err(Error::InvalidMatrix("grid must be non-empty and rectangular"));
    }
    Ok(grid)
}

fn neighbour_kernel() -> Result<Conv2d<u32>> {
    let mut kernel = conv::constant_kernel((3, 3), 1)?;
    kernel[1][1] = 0;
    Conv2d::new(kernel)
}

/// Number of rolls in the eight cells around every cell.
pub fn neighbour_counts(grid: &[Vec<u32>]) -> Result<Vec<Vec<u32>>> {
    neighbour_kernel()?.apply(grid)
}

/// Positions of rolls with fewer than `limit` neighbouring rolls, in row-major order.
pub fn accessible(grid: &[Vec<u32>], limit: u32) -> Result<Vec<(usize, usize)>> {
    let counts = neighbour_counts(grid)?;
    Ok(iproduct!(0..grid.len(), 0..grid[0].len())
        .filter(|&(i, j)| grid[i][j] == 1 && counts[i][j] < limit)
        .collect())
}

/// Removes every accessible roll, round after round, until the grid stops
/// changing. Returns how many rolls were removed in total.
pub fn remove_until_stable(grid: &mut [Vec<u32>]) -> Result<u64> {
    let mut removed = 0;
    loop {
        let round = accessible(grid, ACCESS_LIMIT)?;
        if round.is_empty() {
            return Ok(removed);
        }
        removed += round.len() as u64;
        for (i, j) in round {
            grid[i][j] = 0;
        }
    }
}

pub fn solve(input: &str) -> Result<Answer> {
    let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut grid = parse_grid(&lines)?;
    let part1 = accessible(&grid, ACCESS_LIMIT)?.len() as u64;
    let part2 = remove_until_stable(&mut grid)?;
    Ok(Answer::new(part1, part2))
}

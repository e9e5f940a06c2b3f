//! # Day 6: Trash Compactor
//!
//! The worksheet is a grid of numbers with one operator per problem on the
//! last line. Read row by row, each column is a problem (part 1). Read the
//! cephalopod way, every character column spells one number top to bottom
//! and problems are separated by blank columns (part 2).

use crate::{Answer, Error, Result, conv::check};
use itertools::Itertools;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    /// Folds `values`; a result past `u64::MAX` is an `Overflow`.
    pub fn apply(self, values: &[u64]) -> Result<u64> {
        let folded = match self {
            Op::Add => values.iter().try_fold(0u64, |acc, &v| acc.checked_add(v)),
            Op::Mul => values.iter().try_fold(1u64, |acc, &v| acc.checked_mul(v)),
        };
        folded.ok_or(Error::Overflow)
    }
}

impl TryFrom<&str> for Op {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Op::Add),
            "*" => Ok(Op::Mul),
            _ => Err(Error::InvalidInput(format!("unknown operator {:?}", s))),
        }
    }
}

/// Reduces row `i` with `ops[i]`.
pub fn row_reduce(matrix: &[Vec<u64>], ops: &[Op]) -> Result<Vec<u64>> {
    check(matrix)?;
    row_reduce_ragged(matrix, ops)
}

/// Like [`row_reduce`] but rows may have different lengths.
pub fn row_reduce_ragged(matrix: &[Vec<u64>], ops: &[Op]) -> Result<Vec<u64>> {
    if ops.len() != matrix.len() {
        return Err(Error::InvalidMatrix("one operator per row is required"));
    }
    matrix
        .iter()
        .zip(ops)
        .map(|(row, op)| op.apply(row))
        .collect()
}

/// Reduces column `j` with `ops[j]`.
pub fn column_reduce(matrix: &[Vec<u64>], ops: &[Op]) -> Result<Vec<u64>> {
    check(matrix)?;
    if ops.len() != matrix[0].len() {
        return Err(Error::InvalidMatrix("one operator per column is required"));
    }
    ops.iter()
        .enumerate()
        .map(|(j, op)| op.apply(&matrix.iter().map(|row| row[j]).collect_vec()))
        .collect()
}

/// Reduces every row with `op`, then the row results with `op` again.
pub fn all_reduce(matrix: &[Vec<u64>], op: Op) -> Result<u64> {
    let rows = row_reduce(matrix, &vec![op; matrix.len()])?;
    op.apply(&rows)
}

/// Splits the worksheet into number lines and the operator row.
fn split_sheet(input: &str) -> Result<(Vec<&str>, Vec<Op>)> {
    let mut lines: Vec<&str> = input.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let Some(op_line) = lines.pop() else {
        return Err(Error::InvalidInput("empty worksheet".into()));
    };
    let ops = op_line
        .split_whitespace()
        .map(Op::try_from)
        .collect::<Result<Vec<_>>>()?;
    Ok((lines, ops))
}

/// Parses whitespace separated numbers row by row.
pub fn parse_rows(lines: &[&str]) -> Result<Vec<Vec<u64>>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.split_whitespace()
                .map(|v| {
                    v.parse::<u64>()
                        .map_err(|_| Error::parse(i + 1, format!("bad number {:?}", v)))
                })
                .collect()
        })
        .collect()
}

/// Reads one number per character column, top to bottom. Blank columns end
/// a problem; the result has one (possibly ragged) row per problem.
pub fn parse_columnwise(lines: &[&str]) -> Result<Vec<Vec<u64>>> {
    let grid = lines.iter().map(|l| l.chars().collect_vec()).collect_vec();
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut problems = vec![];
    let mut current = vec![];
    for j in 0..width {
        let column: String = grid.iter().map(|row| row.get(j).copied().unwrap_or(' ')).collect();
        let digits = column.trim();
        if digits.is_empty() {
            if !current.is_empty() {
                problems.push(std::mem::take(&mut current));
            }
        } else {
            let n: u64 = digits
                .parse()
                .map_err(|_| Error::InvalidInput(format!("column {}: bad number {:?}", j + 1, digits)))?;
            current.push(n);
        }
    }
    if !current.is_empty() {
        problems.push(current);
    }
    Ok(problems)
}

pub fn solve(input: &str) -> Result<Answer> {
    let (lines, ops) = split_sheet(input)?;
    let rows = parse_rows(&lines)?;
    let part1 = Op::Add.apply(&column_reduce(&rows, &ops)?)?;
    let problems = parse_columnwise(&lines)?;
    let part2 = Op::Add.apply(&row_reduce_ragged(&problems, &ops)?)?;
    Ok(Answer::new(part1, part2))
}

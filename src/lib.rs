// # aoc2025: Advent of Code 2025 solutions
//
// Every day lives in its own module and exposes `solve(input) -> Result<Answer>`
// taking the raw contents of the puzzle input. The days share nothing but the
// helpers in this file, the error type, the input readers and the timer.

use serde::Serialize;

pub mod bench;
pub mod conv;
pub mod error;
pub mod io;
pub mod puzzles;
pub mod union_find;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;

pub use error::{Error, Result};

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// A macro for convenient initialization of vectors, including nested vectors for multi-dimensional arrays.
///
/// # Examples
///
/// ```
/// use aoc2025::mat;
/// // A simple vector
/// let v1 = mat![1, 2, 3];
///
/// // A 2x3 matrix initialized with zeros
/// let m1 = mat![0; 2; 3];
/// assert_eq!(m1, vec![vec![0, 0, 0], vec![0, 0, 0]]);
/// ```
#[macro_export]
macro_rules! mat {
    ($($e:expr),*) => { vec![$($e),*] };
    ($($e:expr,)*) => { vec![$($e),*] };
    ($e:expr; $d:expr) => { vec![$e; $d] };
    ($e:expr; $d:expr $(; $ds:expr)+) => { vec![mat![$e $(; $ds)*]; $d] };
}

/// The answers to both parts of a day. Days whose second part is not solved
/// leave `part2` empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub part1: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part2: Option<u64>,
}

impl Answer {
    pub fn new(part1: u64, part2: u64) -> Self {
        Self {
            part1,
            part2: Some(part2),
        }
    }
}

/// Converts a wide intermediate into the answer type.
pub(crate) fn narrow<T: TryInto<u64>>(v: T) -> Result<u64> {
    v.try_into().map_err(|_| Error::Overflow)
}

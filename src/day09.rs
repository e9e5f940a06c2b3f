//! # Day 9: Movie Theater
//!
//! Red tiles are the corners of candidate rectangles. In part 2 the red
//! tiles, taken in order, outline a loop of green tiles and a rectangle only
//! counts if every tile in it is red or green.
//!
//! The loop is drawn on a compressed grid with one cell per distinct
//! coordinate and one cell for the open strip between each pair of
//! neighbouring coordinates. The strip exists even when the coordinates are
//! one apart: it holds no tiles, but the outside can still squeeze through
//! it between two walls. Flooding the outside from the border and taking a
//! prefix sum over outside cells that hold tiles makes each rectangle check
//! O(1).

use crate::{Answer, Error, Result, SetMinMax, mat, narrow};
use itertools::Itertools;
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point2 {
    pub x: i64,
    pub y: i64,
}

impl Point2 {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Number of tiles in the rectangle with `self` and `other` as opposite corners.
    pub fn area_with(&self, other: &Point2) -> Result<u64> {
        let side = |a: i64, b: i64| (a as i128 - b as i128).unsigned_abs() + 1;
        let area = side(self.x, other.x)
            .checked_mul(side(self.y, other.y))
            .ok_or(Error::Overflow)?;
        narrow(area)
    }
}

pub fn parse_points(input: &str) -> Result<Vec<Point2>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            let bad = || Error::parse(i + 1, format!("bad tile {:?}", l));
            let (x, y) = l.split_once(',').ok_or_else(bad)?;
            let x = x.trim().parse::<i64>().map_err(|_| bad())?;
            let y = y.trim().parse::<i64>().map_err(|_| bad())?;
            Ok(Point2::new(x, y))
        })
        .collect()
}

/// The largest rectangle with two tiles as opposite corners, with the
/// corners that realise it. The first maximal pair found wins ties.
pub fn largest_rectangle(points: &[Point2]) -> Result<(Point2, Point2, u64)> {
    if points.len() < 2 {
        return Err(Error::InvalidInput("at least two tiles are required".into()));
    }
    let mut best = (points[0], points[1], 0u64);
    for (p, q) in points.iter().tuple_combinations() {
        if best.2.setmax(p.area_with(q)?) {
            best.0 = *p;
            best.1 = *q;
        }
    }
    Ok(best)
}

/// Maps the `i`-th smallest distinct value to cell `2 * i + 1`. Even cells
/// are the strips between neighbouring values, plus a border strip on
/// each side. Returns the map and, for every cell, whether it holds any
/// tile.
fn compress(values: impl Iterator<Item = i64>) -> (FxHashMap<i64, usize>, Vec<bool>) {
    let values = values.sorted_unstable().dedup().collect_vec();
    let mut map = FxHashMap::default();
    let mut tiles = vec![false; 2 * values.len() + 1];
    for (i, &v) in values.iter().enumerate() {
        map.insert(v, 2 * i + 1);
        tiles[2 * i + 1] = true;
        if let Some(&next) = values.get(i + 1) {
            tiles[2 * i + 2] = (next as i128 - v as i128) > 1;
        }
    }
    (map, tiles)
}

/// Compressed grid with the loop drawn on it and the outside flooded.
struct Floor {
    cx: FxHashMap<i64, usize>,
    cy: FxHashMap<i64, usize>,
    // outside[y + 1][x + 1] counts outside cells holding tiles in [0, y] x [0, x].
    outside: Vec<Vec<u32>>,
}

impl Floor {
    fn new(points: &[Point2]) -> Result<Self> {
        let (cx, tx) = compress(points.iter().map(|p| p.x));
        let (cy, ty) = compress(points.iter().map(|p| p.y));
        let (w, h) = (tx.len(), ty.len());

        let mut wall = mat![false; h; w];
        for (p, q) in points.iter().circular_tuple_windows() {
            if p.x != q.x && p.y != q.y {
                return Err(Error::InvalidInput(format!(
                    "tiles {:?} and {:?} are not in the same row or column",
                    p, q
                )));
            }
            let (x1, x2) = (cx[&p.x].min(cx[&q.x]), cx[&p.x].max(cx[&q.x]));
            let (y1, y2) = (cy[&p.y].min(cy[&q.y]), cy[&p.y].max(cy[&q.y]));
            for row in &mut wall[y1..=y2] {
                row[x1..=x2].fill(true);
            }
        }

        let mut out = mat![false; h; w];
        out[0][0] = true;
        let mut stack = vec![(0usize, 0usize)];
        while let Some((y, x)) = stack.pop() {
            let neighbours = [
                (y.wrapping_sub(1), x),
                (y + 1, x),
                (y, x.wrapping_sub(1)),
                (y, x + 1),
            ];
            for (ny, nx) in neighbours {
                if ny < h && nx < w && !wall[ny][nx] && !out[ny][nx] {
                    out[ny][nx] = true;
                    stack.push((ny, nx));
                }
            }
        }

        let mut outside = mat![0u32; h + 1; w + 1];
        for y in 0..h {
            for x in 0..w {
                let counted = out[y][x] && tx[x] && ty[y];
                outside[y + 1][x + 1] =
                    outside[y][x + 1] + outside[y + 1][x] - outside[y][x] + counted as u32;
            }
        }
        Ok(Self { cx, cy, outside })
    }

    /// Whether the rectangle spanned by `p` and `q` avoids every outside tile.
    fn encloses(&self, p: &Point2, q: &Point2) -> bool {
        let (x1, x2) = (self.cx[&p.x].min(self.cx[&q.x]), self.cx[&p.x].max(self.cx[&q.x]));
        let (y1, y2) = (self.cy[&p.y].min(self.cy[&q.y]), self.cy[&p.y].max(self.cy[&q.y]));
        let s = &self.outside;
        s[y2 + 1][x2 + 1] + s[y1][x1] == s[y1][x2 + 1] + s[y2 + 1][x1]
    }
}

/// The largest rectangle with red corners that lies entirely on red or green tiles.
pub fn largest_enclosed_rectangle(points: &[Point2]) -> Result<u64> {
    if points.len() < 2 {
        return Err(Error::InvalidInput("at least two tiles are required".into()));
    }
    let floor = Floor::new(points)?;
    let mut best = 0;
    for (p, q) in points.iter().tuple_combinations() {
        let area = p.area_with(q)?;
        if area > best && floor.encloses(p, q) {
            best = area;
        }
    }
    Ok(best)
}

pub fn solve(input: &str) -> Result<Answer> {
    let points = parse_points(input)?;
    let (_, _, part1) = largest_rectangle(&points)?;
    let part2 = largest_enclosed_rectangle(&points)?;
    Ok(Answer::new(part1, part2))
}

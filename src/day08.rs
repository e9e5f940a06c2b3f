//! # Day 8: Playground
//!
//! Junction boxes hang at 3D points and are wired together closest pair
//! first (Kruskal order). Part 1 looks at the circuits after the first
//! thousand connections, part 2 at the connection that joins everything.

use crate::union_find::UnionFind;
use crate::{Answer, Error, Result, narrow};

const CONNECTIONS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point3 {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance. Each squared term fits in `u128`; their
    /// sum may not, which is an `Overflow`.
    pub fn sq_distance(&self, other: &Point3) -> Result<u128> {
        let sq = |a: i64, b: i64| (a as i128 - b as i128).unsigned_abs().pow(2);
        sq(self.x, other.x)
            .checked_add(sq(self.y, other.y))
            .and_then(|d| d.checked_add(sq(self.z, other.z)))
            .ok_or(Error::Overflow)
    }
}

pub fn parse_points(input: &str) -> Result<Vec<Point3>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            let coords: Vec<i64> = l
                .split(',')
                .map(|v| v.trim().parse::<i64>())
                .collect::<std::result::Result<_, _>>()
                .map_err(|_| Error::parse(i + 1, format!("bad point {:?}", l)))?;
            match coords[..] {
                [x, y, z] => Ok(Point3::new(x, y, z)),
                _ => Err(Error::parse(i + 1, "expected three coordinates")),
            }
        })
        .collect()
}

/// Every pair `(d², i, j)` with `j < i`, closest first. Equal distances keep
/// the order in which the pairs were generated.
pub fn closest_pairs(points: &[Point3]) -> Result<Vec<(u128, usize, usize)>> {
    let mut pairs = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);
    for i in 0..points.len() {
        for j in 0..i {
            pairs.push((points[i].sq_distance(&points[j])?, i, j));
        }
    }
    pairs.sort_by_key(|&(d, _, _)| d);
    Ok(pairs)
}

/// Connects the `k` closest pairs and multiplies the sizes of the three
/// largest circuits (or of all circuits, if there are fewer than three).
pub fn largest_circuits_product(points: &[Point3], k: usize) -> Result<u64> {
    if points.is_empty() {
        return Err(Error::InvalidInput("no junction boxes".into()));
    }
    let mut uf = UnionFind::new(points.len());
    for &(_, i, j) in closest_pairs(points)?.iter().take(k) {
        uf.union(i, j);
    }
    Ok(uf
        .component_sizes()
        .iter()
        .take(3)
        .map(|&s| s as u64)
        .product())
}

/// Keeps connecting pairs until a single circuit remains and returns the
/// product of the X coordinates of the last two boxes joined.
pub fn last_connection_product(points: &[Point3]) -> Result<i128> {
    if points.len() < 2 {
        return Err(Error::InvalidInput(
            "at least two junction boxes are required".into(),
        ));
    }
    let mut uf = UnionFind::new(points.len());
    for (_, i, j) in closest_pairs(points)? {
        if uf.union(i, j) == Some(points.len()) {
            return Ok(points[i].x as i128 * points[j].x as i128);
        }
    }
    unreachable!("all pairs connected without forming one circuit")
}

pub fn solve(input: &str) -> Result<Answer> {
    let points = parse_points(input)?;
    let part1 = largest_circuits_product(&points, CONNECTIONS)?;
    let part2 = narrow(last_connection_product(&points)?)?;
    Ok(Answer::new(part1, part2))
}

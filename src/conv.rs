//! Small dense 2D convolution toolkit over `Vec<Vec<T>>` matrices.

use crate::{Error, Result, mat};
use num_traits::Zero;
use std::ops::Mul;

/// A non-empty matrix whose rows all have the same length.
pub fn is_valid_matrix<T>(matrix: &[Vec<T>]) -> bool {
    !matrix.is_empty()
        && !matrix[0].is_empty()
        && matrix.iter().all(|row| row.len() == matrix[0].len())
}

/// Fails with `InvalidMatrix` unless [`is_valid_matrix`] holds.
pub(crate) fn check<T>(matrix: &[Vec<T>]) -> Result<()> {
    if is_valid_matrix(matrix) {
        Ok(())
    } else {
        Err(Error::InvalidMatrix("empty or ragged matrix"))
    }
}

/// A `rows x cols` matrix filled with `value`.
pub fn constant_kernel<T: Clone>((rows, cols): (usize, usize), value: T) -> Result<Vec<Vec<T>>> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidMatrix("kernel size must be positive"));
    }
    Ok(mat![value; rows; cols])
}

/// Element-wise product of two matrices of identical shape.
pub fn hadamard_product<T>(a: &[Vec<T>], b: &[Vec<T>]) -> Result<Vec<Vec<T>>>
where
    T: Copy + Mul<Output = T>,
{
    check(a)?;
    check(b)?;
    if a.len() != b.len() || a[0].len() != b[0].len() {
        return Err(Error::InvalidMatrix("shape mismatch"));
    }
    Ok(a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(&x, &y)| x * y).collect())
        .collect())
}

/// Sum of all elements.
pub fn reduce<T: Copy + Zero>(matrix: &[Vec<T>]) -> Result<T> {
    check(matrix)?;
    Ok(matrix
        .iter()
        .flatten()
        .fold(T::zero(), |acc, &v| acc + v))
}

/// Surrounds a matrix with `padding` rows and columns of zeros.
pub fn pad<T: Copy + Zero>(matrix: &[Vec<T>], padding: usize) -> Result<Vec<Vec<T>>> {
    check(matrix)?;
    let width = matrix[0].len() + 2 * padding;
    let mut out = Vec::with_capacity(matrix.len() + 2 * padding);
    out.extend(std::iter::repeat_n(vec![T::zero(); width], padding));
    for row in matrix {
        let mut padded = Vec::with_capacity(width);
        padded.extend(std::iter::repeat_n(T::zero(), padding));
        padded.extend_from_slice(row);
        padded.extend(std::iter::repeat_n(T::zero(), padding));
        out.push(padded);
    }
    out.extend(std::iter::repeat_n(vec![T::zero(); width], padding));
    Ok(out)
}

#[derive(Clone, Debug)]
pub struct Conv2d<T> {
    kernel: Vec<Vec<T>>,
}

impl<T> Conv2d<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    /// The kernel must be rectangular with odd dimensions so it has a centre.
    pub fn new(kernel: Vec<Vec<T>>) -> Result<Self> {
        check(&kernel)?;
        if kernel.len() % 2 == 0 || kernel[0].len() % 2 == 0 {
            return Err(Error::InvalidMatrix("kernel dimensions must be odd"));
        }
        Ok(Self { kernel })
    }

    pub fn kernel(&self) -> &[Vec<T>] {
        &self.kernel
    }

    /// Same-size cross-correlation with the kernel centred on each cell and
    /// zeros outside `data`.
    pub fn apply(&self, data: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
        check(data)?;
        let (kh, kw) = (self.kernel.len(), self.kernel[0].len());
        let (ph, pw) = (kh / 2, kw / 2);
        let p = ph.max(pw);
        let padded = pad(data, p)?;
        let (h, w) = (data.len(), data[0].len());
        let mut out = mat![T::zero(); h; w];
        for i in 0..h {
            for j in 0..w {
                let (top, left) = (i + p - ph, j + p - pw);
                let mut acc = T::zero();
                for (a, krow) in self.kernel.iter().enumerate() {
                    for (b, &k) in krow.iter().enumerate() {
                        acc = acc + k * padded[top + a][left + b];
                    }
                }
                out[i][j] = acc;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_matrix(rng: &mut ChaCha8Rng, rows: usize, cols: usize) -> Vec<Vec<i64>> {
        (0..rows)
            .map(|_| (0..cols).map(|_| rng.random_range(-50..=50)).collect())
            .collect()
    }

    #[test]
    fn hadamard_examples() {
        assert_eq!(
            hadamard_product(&[vec![1, 2], vec![3, 4]], &[vec![5, 6], vec![7, 8]]).unwrap(),
            vec![vec![5, 12], vec![21, 32]]
        );
        assert_eq!(
            hadamard_product(&[vec![-1, 2], vec![3, -4]], &[vec![5, -6], vec![-7, 8]]).unwrap(),
            vec![vec![-5, -12], vec![-21, -32]]
        );
        assert_eq!(
            hadamard_product(&[vec![1.0, 0.5], vec![0.25, 0.1]], &[vec![2.0, 4.0], vec![8.0, 10.0]])
                .unwrap(),
            vec![vec![2.0, 2.0], vec![2.0, 1.0]]
        );
        assert!(hadamard_product(&[vec![1, 2]], &[vec![1], vec![2]]).is_err());
    }

    #[test]
    fn reduce_examples() {
        assert_eq!(reduce(&[vec![1, 2], vec![3, 4]]).unwrap(), 10);
        assert_eq!(reduce(&[vec![-1, -2], vec![3, 0]]).unwrap(), 0);
        assert!((reduce(&[vec![1.5, 2.5], vec![3.0, 4.0]]).unwrap() - 11.0f64).abs() < 1e-9);
        assert!(reduce::<i32>(&[]).is_err());
        assert!(reduce(&[vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn constant_kernel_shape() {
        assert_eq!(constant_kernel((2, 3), 7).unwrap(), vec![vec![7; 3]; 2]);
        assert!(constant_kernel((0, 3), 1).is_err());
    }

    #[test]
    fn random_hadamard_and_reduce() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..200 {
            let (rows, cols) = (rng.random_range(1..=5), rng.random_range(1..=5));
            let a = random_matrix(&mut rng, rows, cols);
            let b = random_matrix(&mut rng, rows, cols);
            let h = hadamard_product(&a, &b).unwrap();
            for i in 0..rows {
                for j in 0..cols {
                    assert_eq!(h[i][j], a[i][j] * b[i][j]);
                }
            }
            let expected: i64 = a.iter().map(|r| r.iter().sum::<i64>()).sum();
            assert_eq!(reduce(&a).unwrap(), expected);
        }
    }

    #[test]
    fn padding_preserves_interior() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            let (rows, cols) = (rng.random_range(1..=6), rng.random_range(1..=6));
            let p = rng.random_range(0..=3);
            let m = random_matrix(&mut rng, rows, cols);
            let padded = pad(&m, p).unwrap();
            assert_eq!(padded.len(), rows + 2 * p);
            assert!(padded.iter().all(|r| r.len() == cols + 2 * p));
            for i in 0..rows {
                assert_eq!(&padded[i + p][p..p + cols], &m[i][..]);
            }
            assert_eq!(reduce(&padded).unwrap(), reduce(&m).unwrap());
        }
    }

    #[test]
    fn kernel_must_have_centre() {
        assert!(Conv2d::new(vec![vec![1, 1], vec![1, 1]]).is_err());
        assert!(Conv2d::new(vec![vec![1, 1, 1]]).is_ok());
    }

    #[test]
    fn apply_sums_neighbourhood() {
        let conv = Conv2d::new(constant_kernel((3, 3), 1).unwrap()).unwrap();
        let data = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(
            conv.apply(&data).unwrap(),
            vec![vec![12, 21, 16], vec![12, 21, 16]]
        );
    }

    #[test]
    fn apply_rectangular_kernel_matches_direct_sum() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let kernel = random_matrix(&mut rng, 1, 3);
        let conv = Conv2d::new(kernel.clone()).unwrap();
        let data = random_matrix(&mut rng, 4, 5);
        let out = conv.apply(&data).unwrap();
        for i in 0..4 {
            for j in 0..5 {
                let mut expected = 0;
                for b in 0..3 {
                    let jj = j as i64 + b as i64 - 1;
                    if (0..5).contains(&jj) {
                        expected += kernel[0][b] * data[i][jj as usize];
                    }
                }
                assert_eq!(out[i][j], expected);
            }
        }
    }
}

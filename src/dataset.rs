use crate::cluster::Point;
use crate::error::ClusterError;
use crate::{Matrix, Vector};
use ndarray::Array2;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SAMPLE_COORDINATES: [[f64; 3]; 16] = [
    [2.0, 3.0, 1.0],
    [1.0, 5.0, 2.0],
    [3.0, 4.0, 1.5],
    [5.0, 6.0, 3.0],
    [4.0, 4.0, 2.5],
    [2.0, 7.0, 3.5],
    [6.0, 3.0, 2.0],
    [6.0, 8.0, 4.0],
    [8.0, 9.0, 5.0],
    [7.0, 4.0, 3.5],
    [9.0, 7.0, 4.5],
    [10.0, 5.0, 6.0],
    [11.0, 3.0, 5.5],
    [12.0, 6.0, 7.0],
    [13.0, 4.0, 6.5],
    [14.0, 8.0, 9.0],
];

/// The 16-point demonstration set.
pub fn sample_points() -> Vec<Point> {
    SAMPLE_COORDINATES
        .iter()
        .map(|&[x, y, z]| Point::new(x, y, z))
        .collect()
}

/// Converts matrix rows into points. The first three columns are the
/// coordinates and the whole row is kept as the feature vector.
pub fn points_from_matrix(x: &Matrix) -> Result<Vec<Point>, ClusterError> {
    if x.ncols() < 3 {
        return Err(ClusterError::InvalidInput(format!(
            "Input matrix must have at least 3 columns (x, y, z), got {}",
            x.ncols()
        )));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(ClusterError::InvalidInput(
            "Input matrix contains non-finite values".to_string(),
        ));
    }

    Ok(x.rows()
        .into_iter()
        .map(|row| Point::with_features(row[0], row[1], row[2], row.to_owned()))
        .collect())
}

/// Stacks point coordinates into an `n x 3` matrix.
pub fn points_to_matrix(points: &[Point]) -> Matrix {
    let mut x = Matrix::zeros((points.len(), 3));
    for (i, point) in points.iter().enumerate() {
        x[[i, 0]] = point.x;
        x[[i, 1]] = point.y;
        x[[i, 2]] = point.z;
    }
    x
}

/// Uniform random cloud in the cube `[low, high)^3`, reproducible by seed.
pub fn random_points(n_points: usize, low: f64, high: f64, seed: u64) -> Result<Vec<Point>, ClusterError> {
    if !low.is_finite() || !high.is_finite() || !(high - low).is_finite() {
        return Err(ClusterError::InvalidInput(format!(
            "bounds must be finite with a finite span, got [{}, {})",
            low, high
        )));
    }
    if low >= high {
        return Err(ClusterError::InvalidInput(format!(
            "low ({}) must be smaller than high ({})",
            low, high
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let x: Array2<f64> = Array2::random_using((n_points, 3), Uniform::new(low, high), &mut rng);
    points_from_matrix(&x)
}

/// Coordinate-wise mean of the given points.
pub fn mean_position(points: &[Point]) -> Option<Vector> {
    if points.is_empty() {
        return None;
    }
    points_to_matrix(points).mean_axis(ndarray::Axis(0))
}

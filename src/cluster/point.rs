use crate::Vector;
use ndarray::array;

/// A single sample: a position in 3D space plus an auxiliary feature vector.
///
/// The feature vector travels with the point through every merge but is
/// never read by the distance computation.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub features: Vector,
}

impl Point {
    /// Creates a point whose feature vector mirrors its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            features: array![x, y, z],
        }
    }

    pub fn with_features(x: f64, y: f64, z: f64, features: Vector) -> Self {
        Self { x, y, z, features }
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean_distance(self.position(), other.position())
    }
}

pub fn euclidean_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

pub use ndarray::{Array1, Array2};

pub mod cluster;
pub mod dataset;
pub mod error;
pub mod metrics;

pub use cluster::{
    AgglomerativeClustering, AgglomerativeStepper, Cluster, ClusterStore, Color, Merge, Point,
    StepState,
};
pub use error::ClusterError;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

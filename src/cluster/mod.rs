//! Stepwise agglomerative clustering of 3D points.
//!
//! This module provides:
//! - `ClusterStore`: the ordered set of live clusters with merge and compaction primitives
//! - `AgglomerativeStepper`: nearest-centroid pair selection, one merge per step
//! - `AgglomerativeClustering`: an estimator that owns a store, a step counter and the merge history
//!
//! Every point starts as its own cluster. Each step merges the two clusters
//! whose centroids are closest, always folding the later cluster into the
//! earlier one, until a single cluster is left.
//!
//! # Examples
//!
//! ## Stepping through a run
//! ```rust
//! use stepcluster::{AgglomerativeClustering, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(2.0, 0.0, 0.0),
//!     Point::new(9.0, 9.0, 9.0),
//! ];
//!
//! let mut model = AgglomerativeClustering::new().random_state(42);
//! model.fit(&points).unwrap();
//!
//! let merge = model.step().unwrap().unwrap();
//! assert_eq!((merge.target, merge.source), (0, 1));
//! assert_eq!(model.n_clusters(), 2);
//!
//! for (i, cluster) in model.snapshot().iter().enumerate() {
//!     println!("Cluster {}: {} points at {:?}", i, cluster.len(), cluster.centroid());
//! }
//! ```
//!
//! ## Driving a store directly
//! ```rust
//! use stepcluster::{AgglomerativeStepper, ClusterStore, dataset::sample_points};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut store = ClusterStore::new();
//! store.initialize(&sample_points(), &mut rng).unwrap();
//!
//! let mut step_counter = 0;
//! AgglomerativeStepper::new()
//!     .advance(&mut store, 100, &mut step_counter)
//!     .unwrap();
//!
//! assert_eq!(step_counter, 15);
//! assert_eq!(store.active_count(), 1);
//! ```

mod color;
mod engine;
mod point;
mod stepper;
mod store;

pub use color::Color;
pub use engine::{AgglomerativeClustering, StepState};
pub use point::{Point, euclidean_distance};
pub use stepper::{AgglomerativeStepper, Merge};
pub use store::{Cluster, ClusterStore};

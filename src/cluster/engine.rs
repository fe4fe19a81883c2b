use super::point::Point;
use super::stepper::{AgglomerativeStepper, Merge};
use super::store::{Cluster, ClusterStore};
use crate::Matrix;
use crate::dataset::points_from_matrix;
use crate::error::ClusterError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Progress of a clustering run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Running,
    Terminal,
}

/// Stepwise agglomerative clustering over 3D points.
///
/// Owns the cluster store, the step counter, and the merge history of one
/// run. Colors are drawn from a ChaCha8 generator seeded by
/// `random_state`, or from entropy when no seed is given.
#[derive(Clone, Debug)]
pub struct AgglomerativeClustering {
    store: ClusterStore,
    stepper: AgglomerativeStepper,
    step_counter: usize,
    history: Vec<Merge>,
    random_state: Option<u64>,
}

impl AgglomerativeClustering {
    pub fn new() -> Self {
        Self {
            store: ClusterStore::new(),
            stepper: AgglomerativeStepper::new(),
            step_counter: 0,
            history: Vec::new(),
            random_state: None,
        }
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    /// Starts a fresh run: one singleton cluster per point, counter at zero.
    pub fn fit(&mut self, points: &[Point]) -> Result<(), ClusterError> {
        let mut rng = match self.random_state {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        self.store.initialize(points, &mut rng)?;
        self.step_counter = 0;
        self.history.clear();

        info!(n_points = points.len(), seeded = self.random_state.is_some(), "fitted clustering run");
        Ok(())
    }

    /// Fits on the rows of `x`. The first three columns are the coordinates;
    /// the full row becomes the feature vector.
    pub fn fit_matrix(&mut self, x: &Matrix) -> Result<(), ClusterError> {
        let points = points_from_matrix(x)?;
        self.fit(&points)
    }

    pub fn step(&mut self) -> Result<Option<Merge>, ClusterError> {
        let merge = self.stepper.step(&mut self.store, &mut self.step_counter)?;
        if let Some(merge) = &merge {
            self.history.push(merge.clone());
        }
        Ok(merge)
    }

    pub fn advance(&mut self, steps: usize) -> Result<Vec<Merge>, ClusterError> {
        let merges = self
            .stepper
            .advance(&mut self.store, steps, &mut self.step_counter)?;
        self.history.extend(merges.iter().cloned());
        Ok(merges)
    }

    /// Merges until a single cluster remains.
    pub fn run(&mut self) -> Result<Vec<Merge>, ClusterError> {
        let remaining = self.store.active_count().saturating_sub(1);
        self.advance(remaining)
    }

    pub fn snapshot(&self) -> &[Cluster] {
        self.store.snapshot()
    }

    pub fn store(&self) -> &ClusterStore {
        &self.store
    }

    pub fn step_counter(&self) -> usize {
        self.step_counter
    }

    pub fn n_clusters(&self) -> usize {
        self.store.active_count()
    }

    pub fn history(&self) -> &[Merge] {
        &self.history
    }

    pub fn state(&self) -> StepState {
        if self.store.active_count() <= 1 {
            StepState::Terminal
        } else {
            StepState::Running
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state() == StepState::Terminal
    }

    /// Current cluster index of every input point, in input order.
    pub fn labels(&self) -> Result<Vec<usize>, ClusterError> {
        if !self.store.is_initialized() {
            return Err(ClusterError::UninitializedStore);
        }

        let mut labels = vec![0; self.store.total_points()];
        for (label, cluster) in self.store.snapshot().iter().enumerate() {
            for &member in cluster.members() {
                labels[member] = label;
            }
        }
        Ok(labels)
    }
}

impl Default for AgglomerativeClustering {
    fn default() -> Self {
        Self::new()
    }
}

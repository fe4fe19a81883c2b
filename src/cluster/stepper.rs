use super::point::euclidean_distance;
use super::store::ClusterStore;
use crate::error::ClusterError;
use tracing::{debug, trace};

/// One executed merge, as reported by the stepper.
#[derive(Clone, Debug, PartialEq)]
pub struct Merge {
    /// Value of the step counter after this merge.
    pub step: usize,
    /// Index of the surviving cluster (the lower index of the pair).
    pub target: usize,
    /// Index the absorbed cluster held before compaction.
    pub source: usize,
    /// Centroid distance between the two clusters when they were merged.
    pub distance: f64,
    /// Number of points in the surviving cluster.
    pub size: usize,
}

/// Centroid-linkage agglomeration, one merge per step.
#[derive(Clone, Copy, Debug, Default)]
pub struct AgglomerativeStepper;

impl AgglomerativeStepper {
    pub fn new() -> Self {
        Self
    }

    /// Finds the pair of live clusters whose centroids are closest.
    ///
    /// Pairs are scanned with `i` ascending and `j` ascending from `i + 1`;
    /// only a strictly smaller distance replaces the current best, so ties
    /// resolve to the lowest `(i, j)`.
    pub fn closest_pair(&self, store: &ClusterStore) -> Option<(usize, usize, f64)> {
        let clusters = store.snapshot();
        let mut best: Option<(usize, usize, f64)> = None;

        for i in 0..clusters.len() {
            if clusters[i].is_empty() {
                continue;
            }
            for j in (i + 1)..clusters.len() {
                if clusters[j].is_empty() {
                    continue;
                }
                let distance = euclidean_distance(clusters[i].centroid(), clusters[j].centroid());
                trace!(i, j, distance, "pair distance");

                let closer = match best {
                    Some((_, _, min_distance)) => distance < min_distance,
                    None => !distance.is_nan(),
                };
                if closer {
                    best = Some((i, j, distance));
                }
            }
        }

        best
    }

    /// Performs a single merge, or returns `Ok(None)` once at most one
    /// cluster is left.
    pub fn step(
        &self,
        store: &mut ClusterStore,
        step_counter: &mut usize,
    ) -> Result<Option<Merge>, ClusterError> {
        if !store.is_initialized() {
            return Err(ClusterError::UninitializedStore);
        }
        if store.active_count() <= 1 {
            return Ok(None);
        }

        let Some((target, source, distance)) = self.closest_pair(store) else {
            return Ok(None);
        };

        store.merge_into(target, source)?;
        store.compact_dead();
        *step_counter += 1;

        let size = store.get(target).map_or(0, |c| c.len());
        debug!(
            step = *step_counter,
            target,
            source,
            distance,
            remaining = store.active_count(),
            "clustering step"
        );

        Ok(Some(Merge {
            step: *step_counter,
            target,
            source,
            distance,
            size,
        }))
    }

    /// Runs up to `steps` merges. Requests beyond the terminal state are
    /// dropped without error; the returned merges are the ones executed.
    pub fn advance(
        &self,
        store: &mut ClusterStore,
        steps: usize,
        step_counter: &mut usize,
    ) -> Result<Vec<Merge>, ClusterError> {
        if !store.is_initialized() {
            return Err(ClusterError::UninitializedStore);
        }

        let mut merges = Vec::new();
        for _ in 0..steps {
            match self.step(store, step_counter)? {
                Some(merge) => merges.push(merge),
                None => break,
            }
        }
        Ok(merges)
    }
}

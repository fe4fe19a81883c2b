use super::color::Color;
use super::point::Point;
use crate::error::ClusterError;
use rand::Rng;
use tracing::{debug, info};

/// A group of points with a cached centroid and a fixed display color.
///
/// Fields are private so that a snapshot handed to a renderer cannot break
/// the centroid invariant.
#[derive(Clone, Debug)]
pub struct Cluster {
    points: Vec<Point>,
    members: Vec<usize>,
    centroid: [f64; 3],
    color: Color,
}

impl Cluster {
    fn singleton(index: usize, point: Point, color: Color) -> Self {
        Self {
            centroid: point.position(),
            points: vec![point],
            members: vec![index],
            color,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Input indices of the member points, parallel to `points()`.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn centroid(&self) -> [f64; 3] {
        self.centroid
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn recompute_centroid(&mut self) {
        let n = self.points.len() as f64;
        let mut sum = [0.0; 3];
        for point in &self.points {
            sum[0] += point.x;
            sum[1] += point.y;
            sum[2] += point.z;
        }
        self.centroid = [sum[0] / n, sum[1] / n, sum[2] / n];
    }
}

/// Ordered collection of the active clusters.
///
/// Indices are only meaningful between two calls to `compact_dead()`.
#[derive(Clone, Debug, Default)]
pub struct ClusterStore {
    clusters: Option<Vec<Cluster>>,
}

impl ClusterStore {
    pub fn new() -> Self {
        Self { clusters: None }
    }

    /// Replaces any previous state with one singleton cluster per point,
    /// in input order, each with a color drawn from `rng`.
    ///
    /// Points with a non-finite coordinate are rejected and the previous
    /// state is kept.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        points: &[Point],
        rng: &mut R,
    ) -> Result<(), ClusterError> {
        if let Some(i) = points
            .iter()
            .position(|p| p.position().iter().any(|v| !v.is_finite()))
        {
            return Err(ClusterError::InvalidInput(format!(
                "point {} has a non-finite coordinate",
                i
            )));
        }

        let clusters: Vec<Cluster> = points
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, point)| Cluster::singleton(i, point, rng.r#gen()))
            .collect();

        info!(n_clusters = clusters.len(), "initialized cluster store");
        self.clusters = Some(clusters);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.clusters.is_some()
    }

    /// Moves every point of `source` into `target` and recomputes the
    /// target's centroid. The source stays in place, empty, until the next
    /// `compact_dead()`.
    pub fn merge_into(&mut self, target: usize, source: usize) -> Result<(), ClusterError> {
        let clusters = self.clusters.as_mut().ok_or(ClusterError::UninitializedStore)?;

        if target == source {
            return Err(ClusterError::invalid_merge(target, source, "indices must differ"));
        }
        let len = clusters.len();
        if target >= len || source >= len {
            return Err(ClusterError::invalid_merge(
                target,
                source,
                format!("index out of range for {} clusters", len),
            ));
        }
        if clusters[target].is_empty() || clusters[source].is_empty() {
            return Err(ClusterError::invalid_merge(target, source, "cluster is empty"));
        }

        let moved_points = std::mem::take(&mut clusters[source].points);
        let moved_members = std::mem::take(&mut clusters[source].members);

        let survivor = &mut clusters[target];
        survivor.points.extend(moved_points);
        survivor.members.extend(moved_members);
        survivor.recompute_centroid();

        debug!(
            target,
            source,
            size = survivor.len(),
            centroid = ?survivor.centroid,
            "merged clusters"
        );
        Ok(())
    }

    /// Drops every empty cluster, keeping survivors in their relative order.
    pub fn compact_dead(&mut self) {
        if let Some(clusters) = self.clusters.as_mut() {
            clusters.retain(|c| !c.is_empty());
        }
    }

    pub fn active_count(&self) -> usize {
        self.snapshot().iter().filter(|c| !c.is_empty()).count()
    }

    pub fn total_points(&self) -> usize {
        self.snapshot().iter().map(Cluster::len).sum()
    }

    pub fn get(&self, index: usize) -> Option<&Cluster> {
        self.snapshot().get(index)
    }

    /// Read-only view of the clusters in creation order, empty when
    /// uninitialized.
    ///
    /// Between `merge_into()` and `compact_dead()` the view still holds the
    /// emptied source; it only lists active clusters once compacted.
    pub fn snapshot(&self) -> &[Cluster] {
        self.clusters.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn store_with(points: &[Point]) -> ClusterStore {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut store = ClusterStore::new();
        store.initialize(points, &mut rng).unwrap();
        store
    }

    fn line_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(4.0, 6.0, 3.0),
        ]
    }

    #[test]
    fn test_initialize_creates_singletons() {
        let store = store_with(&line_points());

        assert!(store.is_initialized());
        assert_eq!(store.active_count(), 3);
        for (i, cluster) in store.snapshot().iter().enumerate() {
            assert_eq!(cluster.len(), 1);
            assert_eq!(cluster.members(), &[i]);
            assert_eq!(cluster.centroid(), line_points()[i].position());
            assert!(Color::ALL.contains(&cluster.color()));
        }
    }

    #[test]
    fn test_initialize_replaces_previous_state() {
        let mut store = store_with(&line_points());
        store.merge_into(0, 1).unwrap();
        store.compact_dead();

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        store
            .initialize(&[Point::new(9.0, 9.0, 9.0)], &mut rng)
            .unwrap();
        assert_eq!(store.active_count(), 1);
        assert_eq!(store.snapshot()[0].centroid(), [9.0, 9.0, 9.0]);
    }

    #[test]
    fn test_merge_into_appends_and_recomputes_centroid() {
        let mut store = store_with(&line_points());
        let color_before = store.snapshot()[0].color();

        store.merge_into(0, 2).unwrap();

        let target = &store.snapshot()[0];
        assert_eq!(target.members(), &[0, 2]);
        assert_eq!(target.color(), color_before);
        let c = target.centroid();
        assert!((c[0] - 2.0).abs() < 1e-9);
        assert!((c[1] - 3.0).abs() < 1e-9);
        assert!((c[2] - 1.5).abs() < 1e-9);

        // source is dead but still occupies its slot
        assert!(store.snapshot()[2].is_empty());
        assert_eq!(store.snapshot().len(), 3);
        assert_eq!(store.active_count(), 2);
        assert_eq!(store.total_points(), 3);
    }

    #[test]
    fn test_merge_into_rejects_invalid_requests() {
        let mut store = store_with(&line_points());

        assert!(matches!(
            store.merge_into(1, 1),
            Err(ClusterError::InvalidMerge { .. })
        ));
        assert!(matches!(
            store.merge_into(0, 3),
            Err(ClusterError::InvalidMerge { .. })
        ));

        store.merge_into(0, 1).unwrap();
        assert!(matches!(
            store.merge_into(2, 1),
            Err(ClusterError::InvalidMerge { .. })
        ));
        assert!(matches!(
            store.merge_into(1, 2),
            Err(ClusterError::InvalidMerge { .. })
        ));

        // rejected requests leave the store unchanged
        assert_eq!(store.snapshot()[0].members(), &[0, 1]);
        assert_eq!(store.snapshot()[2].members(), &[2]);
    }

    #[test]
    fn test_merge_into_uninitialized() {
        let mut store = ClusterStore::new();
        assert_eq!(store.merge_into(0, 1), Err(ClusterError::UninitializedStore));
        assert_eq!(store.active_count(), 0);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_initialize_rejects_non_finite_points() {
        let mut store = store_with(&line_points());
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let result = store.initialize(
            &[
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(f64::NAN, 0.0, 0.0),
            ],
            &mut rng,
        );
        assert!(matches!(result, Err(ClusterError::InvalidInput(_))));

        let result = store.initialize(&[Point::new(0.0, f64::INFINITY, 0.0)], &mut rng);
        assert!(matches!(result, Err(ClusterError::InvalidInput(_))));

        // previous state is kept
        assert_eq!(store.active_count(), 3);
        assert_eq!(store.snapshot()[2].centroid(), [4.0, 6.0, 3.0]);
    }

    #[test]
    fn test_merge_of_multi_point_clusters_keeps_member_order() {
        let points: Vec<Point> = (0..4).map(|i| Point::new(i as f64, 0.0, 0.0)).collect();
        let mut store = store_with(&points);

        store.merge_into(0, 1).unwrap();
        store.merge_into(2, 3).unwrap();
        store.compact_dead();
        store.merge_into(0, 1).unwrap();
        store.compact_dead();

        let cluster = &store.snapshot()[0];
        assert_eq!(store.active_count(), 1);
        assert_eq!(cluster.members(), &[0, 1, 2, 3]);
        let xs: Vec<f64> = cluster.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
        assert!((cluster.centroid()[0] - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_lists_dead_clusters_until_compacted() {
        let mut store = store_with(&line_points());

        store.merge_into(0, 1).unwrap();
        assert_eq!(store.snapshot().len(), 3);
        assert!(store.snapshot()[1].is_empty());

        store.compact_dead();
        assert_eq!(store.snapshot().len(), 2);
        assert!(store.snapshot().iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_compact_dead_preserves_order() {
        let points: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 0.0, 0.0)).collect();
        let mut store = store_with(&points);

        store.merge_into(0, 1).unwrap();
        store.merge_into(2, 3).unwrap();
        store.compact_dead();

        let members: Vec<Vec<usize>> = store
            .snapshot()
            .iter()
            .map(|c| c.members().to_vec())
            .collect();
        assert_eq!(members, vec![vec![0, 1], vec![2, 3], vec![4]]);
        assert_eq!(store.snapshot().len(), store.active_count());
    }

    #[test]
    fn test_empty_input() {
        let store = store_with(&[]);
        assert!(store.is_initialized());
        assert_eq!(store.active_count(), 0);
        assert_eq!(store.total_points(), 0);
    }
}

use crate::cluster::{Cluster, euclidean_distance};
use crate::dataset::mean_position;
use crate::error::ClusterError;

/// Within-cluster sum of squared distances to each cluster's centroid.
pub fn inertia(clusters: &[Cluster]) -> f64 {
    clusters
        .iter()
        .flat_map(|cluster| {
            let centroid = cluster.centroid();
            cluster
                .points()
                .iter()
                .map(move |p| euclidean_distance(p.position(), centroid).powi(2))
        })
        .sum()
}

pub fn cluster_sizes(clusters: &[Cluster]) -> Vec<usize> {
    clusters.iter().map(Cluster::len).collect()
}

/// Distance between a cluster's cached centroid and the mean of its members.
pub fn centroid_drift(cluster: &Cluster) -> Result<f64, ClusterError> {
    let mean = mean_position(cluster.points())
        .ok_or_else(|| ClusterError::InvalidInput("cluster has no points".to_string()))?;
    Ok(euclidean_distance(cluster.centroid(), [mean[0], mean[1], mean[2]]))
}

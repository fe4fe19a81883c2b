use std::io::{self, BufRead, Write};

use stepcluster::metrics::{cluster_sizes, inertia};
use stepcluster::{AgglomerativeClustering, dataset::sample_points};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Stepwise Hierarchical Clustering ===\n");
    println!("Press Enter to merge the closest pair, 'q' to quit.\n");

    let mut model = AgglomerativeClustering::new();
    model.fit(&sample_points())?;
    print_state(&model)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "q" | "Q" => break,
            _ => {
                match model.step()? {
                    Some(merge) => println!(
                        "Merged cluster {} into cluster {} (distance {:.3}, size {})",
                        merge.source, merge.target, merge.distance, merge.size
                    ),
                    None => println!("Only one cluster left."),
                }
                print_state(&model)?;
            }
        }
    }

    println!("\nMerge history:");
    for merge in model.history() {
        println!(
            "  Step {}: ({}, {}) at distance {:.3}, new size: {}",
            merge.step, merge.target, merge.source, merge.distance, merge.size
        );
    }

    Ok(())
}

fn print_state(model: &AgglomerativeClustering) -> io::Result<()> {
    println!("Stage: Merging Clusters - Step {}", model.step_counter());
    for (i, cluster) in model.snapshot().iter().enumerate() {
        let [x, y, z] = cluster.centroid();
        println!(
            "  Cluster {} [{}]: {} points, centroid ({:.2}, {:.2}, {:.2})",
            i,
            cluster.color().name(),
            cluster.len(),
            x,
            y,
            z
        );
    }
    println!(
        "  Sizes: {:?}, inertia: {:.4}",
        cluster_sizes(model.snapshot()),
        inertia(model.snapshot())
    );
    print!("> ");
    io::stdout().flush()
}

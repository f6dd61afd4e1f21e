use ndarray::Array2;
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;
use numkit::{KMeans, Vector};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== K-Means Clustering Demo ===\n");

    let centers = [(2.0, 2.0), (8.0, 8.0), (2.0, 8.0)];
    let points_per_blob = 15;

    // Synthesize three gaussian blobs around the centers above
    let mut rng = StdRng::seed_from_u64(7);
    let mut data: Vec<Vector> = Vec::new();
    for &(cx, cy) in &centers {
        let noise: Array2<f64> =
            Array2::random_using((points_per_blob, 2), Normal::new(0.0, 0.4)?, &mut rng);
        for row in noise.rows() {
            data.push(Vector::new([cx + row[0], cy + row[1]])?);
        }
    }

    println!(
        "Dataset: {} samples around {} centers",
        data.len(),
        centers.len()
    );
    println!("Heuristic cluster count: ceil(sqrt(n / 2))\n");

    let clusters = KMeans::new().random_state(42).fit(&data)?;

    println!("Found {} clusters:", clusters.len());
    for (id, members) in &clusters {
        let centroid = Vector::average(members.iter())?;
        println!(
            "  Cluster {}: {} points, centroid ({:.2}, {:.2})",
            id,
            members.len(),
            centroid.get(0)?,
            centroid.get(1)?
        );
    }

    let assigned: usize = clusters.values().map(|members| members.len()).sum();
    println!("\nEvery point assigned: {}", assigned == data.len());

    Ok(())
}

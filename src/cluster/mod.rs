//! Unsupervised clustering built on [`crate::Vector`].
//!
//! The only algorithm here is Lloyd's k-means with a heuristic cluster
//! count of `ceil(sqrt(n / 2))`, so no hyperparameter is required beyond
//! an optional iteration cap.
//!
//! # Examples
//!
//! ```rust
//! use numkit::{KMeans, Vector};
//!
//! let data: Vec<Vector> = [
//!     [0.0, 0.1], [0.2, 0.0], [0.1, 0.3],
//!     [9.8, 9.9], [10.1, 10.0], [9.9, 10.2],
//! ]
//! .iter()
//! .map(|p| Vector::from_slice(p).unwrap())
//! .collect();
//!
//! let clusters = KMeans::new().random_state(42).fit(&data).unwrap();
//!
//! // every point ends up in exactly one cluster
//! let assigned: usize = clusters.values().map(|members| members.len()).sum();
//! assert_eq!(assigned, data.len());
//! ```

mod kmeans;

pub use kmeans::{k_means_clusters, KMeans};

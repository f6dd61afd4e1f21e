//! A small numeric toolkit: fixed-dimension vectors with Euclidean
//! arithmetic, k-means clustering on top of them, and a couple of pure
//! arithmetic helpers for application code.
//!
//! # Examples
//!
//! ```rust
//! use numkit::{k_means_clusters, Vector};
//!
//! let data = vec![
//!     Vector::from_slice(&[0.0, 0.0]).unwrap(),
//!     Vector::from_slice(&[0.2, 0.1]).unwrap(),
//!     Vector::from_slice(&[8.0, 8.0]).unwrap(),
//!     Vector::from_slice(&[8.1, 7.9]).unwrap(),
//! ];
//!
//! let clusters = k_means_clusters(&data, Some(100)).unwrap();
//! assert!(!clusters.is_empty());
//! ```

pub mod cluster;
pub mod error;
pub mod util;
pub mod vector;

pub use cluster::{k_means_clusters, KMeans};
pub use error::MathError;
pub use util::{clamp, compute_page_info, PageInfo};
pub use vector::{Numeric, Vector};

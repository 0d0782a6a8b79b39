//! Meaning-space distances over triangle stimuli.
//!
//! Produces the condensed pairwise distance sequence that the structure
//! test consumes alongside the corresponding word labels.

use serde::{Deserialize, Serialize};

use iterlearn_core::{area_distance, translate, triangle_distance, Alignment, Triangle};

/// Distance metric over triangle stimuli.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeaningMetric {
    /// Vertex-to-vertex distance in the display plane.
    Raw,
    /// Vertex distance after aligning the triangles by centroid or spot,
    /// discounting where on the screen the stimuli appeared.
    UpToTranslation(Alignment),
    /// Absolute difference in area.
    Area,
}

/// Pairwise meaning distances in condensed upper-triangular order.
///
/// The output is aligned with
/// [`pairwise_string_distances`](iterlearn_core::pairwise_string_distances)
/// over the same stimulus ordering and has length `n * (n - 1) / 2`.
pub fn meaning_distances(triangles: &[Triangle], metric: MeaningMetric) -> Vec<f64> {
    let n = triangles.len();
    let mut distances = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            distances.push(pair_distance(&triangles[i], &triangles[j], metric));
        }
    }
    distances
}

fn pair_distance(a: &Triangle, b: &Triangle, metric: MeaningMetric) -> f64 {
    match metric {
        MeaningMetric::Raw => triangle_distance(a, b),
        MeaningMetric::UpToTranslation(alignment) => {
            let aligned = translate(a, b, alignment);
            triangle_distance(a, &aligned)
        }
        MeaningMetric::Area => area_distance(a, b),
    }
}

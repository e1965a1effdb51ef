use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One projected document: its name and 2D coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Point2D {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Fixed iteration budget for power iteration. Not a convergence
/// guarantee: ill-conditioned matrices may leave the embedding inexact.
const MAX_ITERATIONS: usize = 100;

/// Pre-normalization norm below which iteration stops early.
/// Reached when the matrix is rank-deficient and nothing is left to extract.
const NORM_FLOOR: f64 = 1e-10;

/// Project a similarity matrix into 2D with entropy-seeded initialization.
///
/// Axis sign and rotation are not reproducible across runs; use
/// [`project_2d_seeded`] or [`project_2d_with_rng`] to pin coordinates.
pub fn project_2d(matrix: &[Vec<f64>], labels: &[String]) -> Vec<Point2D> {
    project_2d_with_rng(matrix, labels, &mut StdRng::from_entropy())
}

/// Project with a fixed seed, for reproducible coordinates.
pub fn project_2d_seeded(matrix: &[Vec<f64>], labels: &[String], seed: u64) -> Vec<Point2D> {
    project_2d_with_rng(matrix, labels, &mut StdRng::seed_from_u64(seed))
}

/// Classical MDS: embed n documents in 2D from their similarity matrix.
///
/// Similarities are converted to squared distances with the unit-norm
/// identity `d²(i,j) = 2(1 − sim(i,j))`, the distance matrix is
/// double-centered into a Gram matrix, and the top two eigenvectors are
/// extracted by power iteration with Gram–Schmidt deflation. Coordinates
/// are eigenvector entries scaled by the square root of the eigenvalue.
///
/// Degenerate sizes are closed-form:
/// - n = 0 → empty
/// - n = 1 → the single point at the origin
/// - n = 2 → points at (0, 0) and (d, 0) with `d = sqrt(max(0, 2(1 − sim)))`
///
/// Output points pair each label with its coordinates, in input order.
pub fn project_2d_with_rng<R: Rng + ?Sized>(
    matrix: &[Vec<f64>],
    labels: &[String],
    rng: &mut R,
) -> Vec<Point2D> {
    assert_eq!(matrix.len(), labels.len(), "one label per matrix row");
    let n = matrix.len();

    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![point(&labels[0], 0.0, 0.0)];
    }
    if n == 2 {
        let dist = (2.0 * (1.0 - matrix[0][1])).max(0.0).sqrt();
        return vec![point(&labels[0], 0.0, 0.0), point(&labels[1], dist, 0.0)];
    }

    debug!(n, "projecting similarity matrix");

    // squared distances; max(0, ..) guards floating-point negative artifacts
    let d2: Vec<Vec<f64>> = matrix
        .iter()
        .map(|row| row.iter().map(|&s| (2.0 * (1.0 - s)).max(0.0)).collect())
        .collect();

    // double centering: B = -0.5 * H * D² * H with H = I - (1/n)11'
    let row_means: Vec<f64> = d2.iter().map(|row| row.iter().sum::<f64>() / n as f64).collect();
    let grand_mean = row_means.iter().sum::<f64>() / n as f64;
    let b: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| -0.5 * (d2[i][j] - row_means[i] - row_means[j] + grand_mean))
                .collect()
        })
        .collect();

    let mut coords = vec![[0.0_f64; 2]; n];
    let mut eigenvectors: Vec<Vec<f64>> = Vec::with_capacity(2);
    for dim in 0..2 {
        let (v, eigenvalue) = dominant_eigenvector(&b, &eigenvectors, rng);
        let scale = eigenvalue.max(0.0).sqrt();
        for (coord, &entry) in coords.iter_mut().zip(&v) {
            coord[dim] = entry * scale;
        }
        eigenvectors.push(v);
    }

    labels
        .iter()
        .zip(coords)
        .map(|(label, [x, y])| point(label, x, y))
        .collect()
}

/// Power iteration on `b`, deflated against previously extracted
/// eigenvectors. Returns the unit eigenvector and the eigenvalue estimate
/// (the final pre-normalization norm; 0 if the floor was hit immediately).
fn dominant_eigenvector<R: Rng + ?Sized>(
    b: &[Vec<f64>],
    deflate: &[Vec<f64>],
    rng: &mut R,
) -> (Vec<f64>, f64) {
    let n = b.len();
    let mut v: Vec<f64> = (0..n).map(|_| rng.gen::<f64>() - 0.5).collect();
    let mut eigenvalue = 0.0;

    for _ in 0..MAX_ITERATIONS {
        let mut bv = vec![0.0; n];
        for (i, row) in b.iter().enumerate() {
            for (j, &bij) in row.iter().enumerate() {
                bv[i] += bij * v[j];
            }
        }

        // remove components along already-extracted eigenvectors
        for prev in deflate {
            let dot: f64 = bv.iter().zip(prev).map(|(x, p)| x * p).sum();
            for (x, p) in bv.iter_mut().zip(prev) {
                *x -= dot * p;
            }
        }

        let norm = bv.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm < NORM_FLOOR {
            break;
        }

        eigenvalue = norm;
        for (vi, &x) in v.iter_mut().zip(&bv) {
            *vi = x / norm;
        }
    }

    (v, eigenvalue)
}

fn point(label: &str, x: f64, y: f64) -> Point2D {
    Point2D {
        label: label.to_string(),
        x,
        y,
    }
}

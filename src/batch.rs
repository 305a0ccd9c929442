//! Batch quaternion operations.
//!
//! Batches are slices of `nalgebra::Quaternion<f64>`, one rotation per row,
//! with purely positional correspondence between batches: row `i` of the
//! output is computed from row `i` of each input. Mismatched batch lengths
//! are reported as typed errors rather than silently truncating.

use nalgebra::{Quaternion, Vector4};
use thiserror::Error;

/// Errors for operations over quaternion batches.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BatchError {
    /// Paired inputs (two batches, or a batch and its weights) differ in length
    #[error("batch lengths differ: {left} vs {right}")]
    MismatchedLengths { left: usize, right: usize },
    /// The operation needs at least one quaternion
    #[error("batch must contain at least one quaternion")]
    EmptyBatch,
}

/// Element-wise Hamilton product of two equal-length batches.
///
/// Row `i` of the result is `batch2[i] * batch1[i]`, with the product
/// expanded component-wise in a single pass over the rows.
///
/// # Arguments
///
/// * `batch2` - Left factors
/// * `batch1` - Right factors
///
/// # Returns
///
/// * `Ok(Vec<Quaternion<f64>>)` - Products, same length as the inputs
/// * `Err(BatchError::MismatchedLengths)` - If the batches differ in length
pub fn batch_multiply(
    batch2: &[Quaternion<f64>],
    batch1: &[Quaternion<f64>],
) -> Result<Vec<Quaternion<f64>>, BatchError> {
    if batch2.len() != batch1.len() {
        return Err(BatchError::MismatchedLengths {
            left: batch2.len(),
            right: batch1.len(),
        });
    }

    Ok(batch2
        .iter()
        .zip(batch1)
        .map(|(a, b)| hamilton_product(a, b))
        .collect())
}

/// Hamilton product `a * b` written out component-wise.
fn hamilton_product(a: &Quaternion<f64>, b: &Quaternion<f64>) -> Quaternion<f64> {
    let (ax, ay, az, aw) = (a.coords.x, a.coords.y, a.coords.z, a.coords.w);
    let (bx, by, bz, bw) = (b.coords.x, b.coords.y, b.coords.z, b.coords.w);

    Quaternion::new(
        aw * bw - ax * bx - ay * by - az * bz,
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
    )
}

/// Projected (renormalized component-wise) average of a batch.
///
/// Computes the optionally weighted arithmetic mean of the quaternion
/// component vectors and rescales it to unit length. This is a cheap
/// approximation to true rotation averaging on the manifold, valid when the
/// inputs are close together and consistently signed: a batch mixing `q` and
/// `-q` for the same orientation silently degrades toward a near-zero-norm
/// mean, which is renormalized as-is rather than rejected.
///
/// # Arguments
///
/// * `batch` - Quaternions to average; must be non-empty
/// * `weights` - Optional per-row weights, same length as `batch`; they need
///   not sum to one, the weighted mean normalizes implicitly
///
/// # Returns
///
/// * `Ok(Quaternion<f64>)` - Unit-norm averaged quaternion
/// * `Err(BatchError::EmptyBatch)` - If `batch` is empty
/// * `Err(BatchError::MismatchedLengths)` - If `weights` is present with a
///   different length than `batch`
pub fn projected_average(
    batch: &[Quaternion<f64>],
    weights: Option<&[f64]>,
) -> Result<Quaternion<f64>, BatchError> {
    if batch.is_empty() {
        return Err(BatchError::EmptyBatch);
    }

    let mut sum = Vector4::zeros();
    let weight_sum = match weights {
        Some(ws) => {
            if ws.len() != batch.len() {
                return Err(BatchError::MismatchedLengths {
                    left: batch.len(),
                    right: ws.len(),
                });
            }
            for (q, &w) in batch.iter().zip(ws) {
                sum += q.coords * w;
            }
            ws.iter().sum::<f64>()
        }
        None => {
            for q in batch {
                sum += q.coords;
            }
            batch.len() as f64
        }
    };

    let mean = sum / weight_sum;
    Ok(Quaternion::from(mean / mean.norm()))
}

use crate::errors::{MatcherError, MatcherResult};
use crate::processing::text::TextVector;

/// Cosine similarity of two equally sized vectors.
///
/// Fails with [`MatcherError::DegenerateVector`] when either norm is zero
/// instead of returning NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> MatcherResult<f64> {
    if a.len() != b.len() {
        return Err(MatcherError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f64>();
    let sum_sq_a = a.iter().map(|x| x * x).sum::<f64>();
    let sum_sq_b = b.iter().map(|x| x * x).sum::<f64>();
    if sum_sq_a == 0.0 || sum_sq_b == 0.0 {
        return Err(MatcherError::DegenerateVector);
    }

    // One square root of the product keeps `v` against itself at exactly 1.
    Ok(dot / (sum_sq_a * sum_sq_b).sqrt())
}

/// Cosine similarity of two presence vectors, in `[0, 1]`.
pub fn similarity(v1: &TextVector, v2: &TextVector) -> MatcherResult<f64> {
    let a: Vec<f64> = v1.as_slice().iter().map(|&bit| f64::from(bit)).collect();
    let b: Vec<f64> = v2.as_slice().iter().map(|&bit| f64::from(bit)).collect();
    cosine_similarity(&a, &b).map(|score| score.clamp(0.0, 1.0))
}

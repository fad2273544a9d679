/// Vector mechanics: dimension-checked dot products.
use crate::SimError;

/// Dot product that refuses to truncate or zero-pad: mismatched lengths
/// surface immediately as [`SimError::DimensionMismatch`], tagged with
/// the `context` of the pairing (e.g. "preferences vs rewards").
#[inline]
pub fn dot(context: &'static str, a: &[f64], b: &[f64]) -> Result<f64, SimError> {
    if a.len() != b.len() {
        return Err(SimError::DimensionMismatch {
            context,
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

//! Vector Utilities
//!
//! Floating-point vector operations, generic over `f32` and `f64`.

use num_traits::Float;
use std::fmt;

/// Vector operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// The operands have different lengths
    LengthMismatch { left: usize, right: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::LengthMismatch { left, right } => {
                write!(f, "vectors must be the same length: {} != {}", left, right)
            }
        }
    }
}

impl std::error::Error for VectorError {}

/// Vector utility functions
pub struct VectorUtils;

impl VectorUtils {
    /// Compute the dot product of two vectors
    ///
    /// The sum is accumulated in `F`, so `f32` inputs carry `f32` rounding.
    ///
    /// # Arguments
    /// * `a` - First vector
    /// * `b` - Second vector, same length as `a`
    ///
    /// # Returns
    /// * `Ok(sum)` - Sum of `a[i] * b[i]`, zero for two empty vectors
    /// * `Err(VectorError::LengthMismatch)` - If the lengths differ
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::VectorUtils;
    ///
    /// assert_eq!(VectorUtils::dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), Ok(32.0));
    /// assert!(VectorUtils::dot_product(&[1.0f32, 2.0], &[1.0f32]).is_err());
    /// ```
    pub fn dot_product<F: Float>(a: &[F], b: &[F]) -> Result<F, VectorError> {
        if a.len() != b.len() {
            return Err(VectorError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        Ok(a
            .iter()
            .zip(b)
            .fold(F::zero(), |acc, (&x, &y)| acc + x * y))
    }
}

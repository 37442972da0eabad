use crate::CoreError;

/// Floating point type used throughout the system.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Accept `p` only if it is a probability in the closed interval [0, 1].
///
/// NaN is rejected along with out-of-range values.
pub fn ensure_probability(p: Real, what: &'static str) -> Result<Real, CoreError> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(CoreError::InvalidProbability { what, value: p })
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NacaError {
    /// The designation has the wrong number of characters, contains non-digits, or describes a
    /// section that can't be constructed
    #[error("{designation:?} is not a valid NACA aerofoil designation: {reason}")]
    Validation { designation: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// The 5-digit meanline prefix has no published coefficients
    #[error("no meanline coefficients for 5-digit prefix {0:?} (supported: {1})")]
    Lookup(String, String),

    /// A chord fraction outside of [0, 1] reached a camber or thickness evaluator. Sample
    /// generation never produces these, so this indicates a bug.
    #[error("chord fraction {0} is outside of [0, 1]")]
    Domain(f64),
}

/// Guard used by the camber and thickness evaluators
pub fn check_fraction(x: f64) -> Result<f64, NacaError> {
    if (0.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(NacaError::Domain(x))
    }
}

use core::{error, fmt};

/// Errors raised while validating detection constraints or binding input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// A detection constraint value is invalid.
    InvalidConstraint {
        /// Name of the constraint.
        arg: &'static str,
        /// Human readable reason.
        reason: &'static str,
    },
    /// A contiguous 1D view of the signal could not be obtained.
    NonContiguous {
        /// Name of the argument that is non-contiguous.
        arg: &'static str,
    },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::InvalidConstraint { arg, reason } => {
                write!(f, "Invalid constraint `{arg}`: {reason}")
            }
            ConstraintError::NonContiguous { arg } => {
                write!(f, "Argument `{arg}` is not contiguous in memory.")
            }
        }
    }
}

impl error::Error for ConstraintError {}

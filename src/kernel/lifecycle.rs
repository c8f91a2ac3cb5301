use super::ConstraintError;

/// Constructor validation lifecycle shared by kernel structs.
///
/// A kernel validates its configuration exactly once here; the run methods
/// can then assume the constraints hold.
pub trait KernelLifecycle: Sized {
    /// Kernel config type.
    type Config;

    /// Construct a validated kernel from config.
    fn try_new(config: Self::Config) -> Result<Self, ConstraintError>;
}

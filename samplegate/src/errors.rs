use crate::RangeMode;
use thiserror::Error;

/// Errors returned when a gate is configured in an order or with arguments
/// that would break the one-way range mode lock. These are never transient:
/// the caller must fix the sequence of configuration calls.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("requested range mode {requested} is incompatible with the fixed mode {current}")]
    IncompatibleMode {
        current: RangeMode,
        requested: RangeMode,
    },
    #[error("range mode is already fixed as {current}")]
    ModeAlreadyFixed { current: RangeMode },
    #[error("a range cannot be stored with an undefined range mode")]
    UndefinedMode,
}

use thiserror::Error;

/// Why a [`crate::PhysicsOptions`] value was rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("`{field}` must be finite")]
    NonFinite { field: &'static str },

    #[error("`{field}` must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("`{field}` must be within {min}..={max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

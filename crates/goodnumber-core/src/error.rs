//! Error types for Good Number

use thiserror::Error;

/// Main error type for Good Number operations.
///
/// The planning algorithms themselves never fail; only building an
/// [`IncrementSet`](crate::IncrementSet) from untrusted input can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoodNumberError {
    /// An increment set needs at least one increment
    #[error("Increment set is empty")]
    EmptyIncrementSet,

    /// Increment values must be positive
    #[error("Increment '{name}' has value 0")]
    ZeroIncrement { name: String },

    /// Two increments share a value
    #[error("Duplicate increment value {value}")]
    DuplicateValue { value: u64 },

    /// Two increments share a name
    #[error("Duplicate increment name '{name}'")]
    DuplicateName { name: String },

    /// Increment names label the output and must not be blank
    #[error("Increment with value {value} has a blank name")]
    BlankName { value: u64 },
}

/// Result type alias for Good Number operations
pub type Result<T> = std::result::Result<T, GoodNumberError>;

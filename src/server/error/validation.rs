use thiserror::Error;

/// Reasons a create or update request is rejected before persistence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An integer code is not a member of its enum.
    #[error("Invalid value {value} for {field}")]
    InvalidEnumValue { field: &'static str, value: i32 },

    /// A required text field is empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

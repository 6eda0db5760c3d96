use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a code outside its enum.
    ///
    /// Writes validate enum codes, so this only happens when rows were edited
    /// outside the API. Results in a 500 Internal Server Error with a generic
    /// message returned to client.
    #[error("Stored value {value} for column '{column}' is not a known code")]
    UnknownStoredCode {
        /// Column holding the code
        column: &'static str,
        /// The stored code
        value: i32,
    },

    /// Password hashing or hash parsing failed.
    #[error("Password hash operation failed: {0}")]
    PasswordHash(String),

    /// The session store returned no id for a saved session.
    #[error("Session has no id after being saved")]
    SessionWithoutId,
}

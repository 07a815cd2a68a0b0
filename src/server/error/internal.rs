use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// Column in `table.column` form
        column: &'static str,
        /// The value read from the database
        value: String,
    },

    /// A row that must exist inside the current transaction was not found.
    #[error("Expected row missing: {0}")]
    MissingRow(String),
}

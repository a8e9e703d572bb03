use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for scanner operations.
///
/// End of input and "no match" are ordinary `None` results; only a pattern
/// that fails to compile is an error.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The pattern handed to `StringScanner::find` is not a valid regex.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

//! Error types for article search functionality.

use thiserror::Error;

/// Errors that can occur during article search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search operation failed with the specified query and reason.
    #[error("Search failed for query '{query}': {reason}")]
    SearchFailed {
        /// The search query that failed
        query: String,
        /// The reason for the failure
        reason: String,
    },

    /// Network communication error occurred during search.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Failed to parse search results or response data.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },
}

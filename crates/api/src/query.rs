//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for list endpoints that support `?search=`.
///
/// Matching is a case-insensitive substring match on the name; a blank
/// value applies no filter.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

pub mod page;
pub mod summary;
pub mod transcript;

pub use page::*;
pub use summary::*;
pub use transcript::*;

use crate::models::ApiError;
use rocket::serde::json::{self, Json};

/// Request bodies longer than this are cut before summarization.
pub const MAX_SUMMARY_INPUT_CHARS: usize = 10_000;

/// Unwrap a parsed JSON body. A body that fails to parse is an unexpected
/// failure, not a validation error.
pub(crate) fn parse_body<T>(body: Result<Json<T>, json::Error<'_>>) -> Result<T, ApiError> {
    body.map(Json::into_inner).map_err(|e| {
        log::error!("Failed to parse request body: {e}");
        ApiError::internal(e.to_string())
    })
}

/// Trimmed value of a required field, or `None` when absent or blank.
pub(crate) fn required_field(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field() {
        assert_eq!(required_field(None), None);
        assert_eq!(required_field(Some("")), None);
        assert_eq!(required_field(Some("  \n\t")), None);
        assert_eq!(required_field(Some("  abc ")), Some("abc"));
    }
}

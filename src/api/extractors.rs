//! Request extractors for path parameters.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// Parses an `{article_id}` path segment.
///
/// # Errors
///
/// Returns [`AppError::BadInput`] if the segment is not a 32-bit integer.
pub fn parse_article_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|e| AppError::bad_input(format!("Invalid article id {raw:?}: {e}")))
}

/// The `{article_id}` segment of the request path, as an integer.
///
/// Rejects with [`AppError::BadInput`] so a malformed id is answered with
/// `400 Bad Request` by the shared error mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleIdParam(pub i32);

impl<S> FromRequestParts<S> for ArticleIdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_input(rejection.body_text()))?;

        parse_article_id(&raw).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_id() {
        assert_eq!(parse_article_id("1").unwrap(), 1);
        assert_eq!(parse_article_id("100").unwrap(), 100);
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(matches!(
            parse_article_id("nonsense"),
            Err(AppError::BadInput { .. })
        ));
        assert!(matches!(
            parse_article_id("1.5"),
            Err(AppError::BadInput { .. })
        ));
        assert!(matches!(parse_article_id(""), Err(AppError::BadInput { .. })));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            parse_article_id("99999999999"),
            Err(AppError::BadInput { .. })
        ));
    }
}

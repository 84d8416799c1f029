//! Input validation for search queries and recipe ids
//!
//! Rejects malformed input before it reaches storage. Blank queries are not
//! an error: they signal "return everything".

use crate::error::{ApiError, ApiResult};

/// True if the query contains any non-whitespace text.
///
/// Blank (absent, empty, or whitespace-only) queries mean "return all
/// recipes" and skip validation entirely.
pub fn has_text(query: Option<&str>) -> bool {
    query.is_some_and(|q| !q.trim().is_empty())
}

/// Validate a search query.
///
/// No-op for blank queries. Otherwise the trimmed length must be between
/// 2 and 100 characters inclusive. Note the asymmetry: trimming applies to
/// the length check only, so an all-whitespace string passes (treated as
/// blank) while a 1-character query is rejected.
pub fn validate_search_query(query: &str) -> ApiResult<()> {
    if query.trim().is_empty() {
        return Ok(());
    }

    let trimmed = query.trim();
    let len = trimmed.chars().count();
    if len < 2 {
        return Err(ApiError::InvalidArgument(
            "Search query must be at least 2 characters long.".to_string(),
        ));
    }
    if len > 100 {
        return Err(ApiError::InvalidArgument(
            "Search query must not exceed 100 characters.".to_string(),
        ));
    }

    Ok(())
}

/// Validate a recipe id: must be strictly positive. No upper bound.
pub fn validate_recipe_id(id: i64) -> ApiResult<()> {
    if id <= 0 {
        return Err(ApiError::InvalidArgument(
            "Recipe ID must be a positive number.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_have_no_text() {
        assert!(!has_text(None));
        assert!(!has_text(Some("")));
        assert!(!has_text(Some("   ")));
        assert!(has_text(Some("pasta")));
        assert!(has_text(Some("  a  ")));
    }

    #[test]
    fn blank_queries_are_accepted() {
        assert!(validate_search_query("").is_ok());
        assert!(validate_search_query("   ").is_ok());
        assert!(validate_search_query("\t\n").is_ok());
    }

    #[test]
    fn short_queries_are_rejected() {
        let err = validate_search_query("a").unwrap_err();
        assert!(err
            .to_string()
            .contains("at least 2 characters long"));

        // Trimmed length is what counts
        assert!(validate_search_query("  a  ").is_err());
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        assert!(validate_search_query("ab").is_ok());
        assert!(validate_search_query(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn overlong_queries_are_rejected() {
        let err = validate_search_query(&"a".repeat(101)).unwrap_err();
        assert!(err.to_string().contains("must not exceed 100 characters"));
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // Two multibyte characters: 2 chars, 8 bytes
        assert!(validate_search_query("🍕🍝").is_ok());
    }

    #[test]
    fn non_positive_ids_are_rejected() {
        assert!(validate_recipe_id(0).is_err());
        assert!(validate_recipe_id(-1).is_err());
        assert!(validate_recipe_id(i64::MIN).is_err());

        let err = validate_recipe_id(0).unwrap_err();
        assert!(err.to_string().contains("must be a positive number"));
    }

    #[test]
    fn positive_ids_are_accepted() {
        assert!(validate_recipe_id(1).is_ok());
        assert!(validate_recipe_id(i64::MAX).is_ok());
    }
}

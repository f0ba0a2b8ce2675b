//! URL utilities for consistent URL handling
//!
//! This module provides utilities for normalizing the analysis endpoint and
//! for validating the product URL the user submits.

/// Normalize a base URL by removing trailing slashes
///
/// This keeps endpoint overrides from config and flags consistent with the
/// built-in default.
///
/// # Examples
///
/// ```
/// use revlens::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://api.example.com/v1"), "https://api.example.com/v1");
/// assert_eq!(normalize_base_url("https://api.example.com/v1/"), "https://api.example.com/v1");
/// assert_eq!(normalize_base_url("https://api.example.com/v1///"), "https://api.example.com/v1");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Trim the submitted product URL, returning `None` for an effectively empty
/// field. An empty submission is a validation no-op, not an error.
///
/// # Examples
///
/// ```
/// use revlens::utils::url::prepare_submission;
///
/// assert_eq!(
///     prepare_submission("  https://shop.example/item/42  ").as_deref(),
///     Some("https://shop.example/item/42")
/// );
/// assert_eq!(prepare_submission("   "), None);
/// ```
pub fn prepare_submission(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        // No trailing slash - should remain unchanged
        assert_eq!(
            normalize_base_url("https://api.example.com/v1"),
            "https://api.example.com/v1"
        );

        // Single trailing slash - should be removed
        assert_eq!(
            normalize_base_url("https://api.example.com/v1/"),
            "https://api.example.com/v1"
        );

        // Multiple trailing slashes - should all be removed
        assert_eq!(
            normalize_base_url("https://api.example.com/v1///"),
            "https://api.example.com/v1"
        );

        // Root URL with trailing slash
        assert_eq!(
            normalize_base_url("https://api.example.com/"),
            "https://api.example.com"
        );

        // Empty string
        assert_eq!(normalize_base_url(""), "");
    }

    #[test]
    fn test_prepare_submission() {
        // Plain URL passes through
        assert_eq!(
            prepare_submission("https://shop.example/item/42").as_deref(),
            Some("https://shop.example/item/42")
        );

        // Surrounding whitespace is trimmed
        assert_eq!(
            prepare_submission("\t https://shop.example/item/42 \n").as_deref(),
            Some("https://shop.example/item/42")
        );

        // Empty and whitespace-only fields are no-ops
        assert_eq!(prepare_submission(""), None);
        assert_eq!(prepare_submission("   "), None);
        assert_eq!(prepare_submission("\t\n"), None);
    }
}

//! Country code validation for the detail endpoint.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Two or three ASCII letters or digits (cca2, cca3, ccn3 or cioc).
static COUNTRY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{2,3}$").unwrap());

/// Validates a country code from a request path and returns it uppercased.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for blank input or anything other than
/// two or three ASCII letters or digits.
///
/// # Examples
///
/// ```
/// use world_ranks::utils::country_code::normalize_country_code;
///
/// assert_eq!(normalize_country_code(" usa ").unwrap(), "USA");
/// assert!(normalize_country_code("U-S").is_err());
/// ```
pub fn normalize_country_code(code: &str) -> Result<String, AppError> {
    let code = code.trim();

    if code.is_empty() {
        return Err(AppError::bad_request(
            "Country code must not be empty",
            json!({}),
        ));
    }

    if !COUNTRY_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Country code must be 2-3 letters or digits",
            json!({ "code": code }),
        ));
    }

    Ok(code.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha3_is_uppercased() {
        assert_eq!(normalize_country_code("deu").unwrap(), "DEU");
    }

    #[test]
    fn test_alpha2_and_numeric() {
        assert_eq!(normalize_country_code("de").unwrap(), "DE");
        assert_eq!(normalize_country_code("276").unwrap(), "276");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(normalize_country_code("  FRA\t").unwrap(), "FRA");
    }

    #[test]
    fn test_blank_is_error() {
        let err = normalize_country_code("   ").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_too_long() {
        assert!(normalize_country_code("DEUT").is_err());
    }

    #[test]
    fn test_too_short() {
        assert!(normalize_country_code("D").is_err());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(normalize_country_code("U.S").is_err());
        assert!(normalize_country_code("ÄÖÜ").is_err());
        assert!(normalize_country_code("a/b").is_err());
    }
}

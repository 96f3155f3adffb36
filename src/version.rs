use regex::Regex;

use crate::error::Error;

/// Canonicalize a user-supplied version token.
///
/// Surrounding whitespace is trimmed, then every literal `v` is removed,
/// so `v1.2.3` and `1.2.3` normalize to the same string.
pub fn normalize(raw: &str) -> String {
    raw.trim().replace('v', "")
}

/// Check that a normalized version begins with `major.minor.patch`.
///
/// Anchored at the start only: characters after the three numeric
/// components are accepted (`1.2.3-rc1` passes).
pub fn validate(version: &str) -> Result<(), Error> {
    let re = Regex::new(r"^\d+\.\d+\.\d+").unwrap();
    if re.is_match(version) {
        Ok(())
    } else {
        Err(Error::InvalidVersion(version.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_leading_v() {
        assert_eq!(normalize("v1.2.3"), "1.2.3");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  v1.2.3  "), "1.2.3");
    }

    #[test]
    fn test_normalize_strips_every_v() {
        // replace-all semantics, not just the prefix
        assert_eq!(normalize("v1.v2.3"), "1.2.3");
    }

    #[test]
    fn test_normalize_leaves_bare_version_alone() {
        assert_eq!(normalize("1.2.3"), "1.2.3");
    }

    #[test]
    fn test_validate_accepts_plain_version() {
        assert!(validate("1.2.3").is_ok());
    }

    #[test]
    fn test_validate_accepts_trailing_garbage() {
        assert!(validate("1.2.3-rc1").is_ok());
    }

    #[test]
    fn test_validate_rejects_non_version() {
        assert_eq!(
            validate("abc"),
            Err(Error::InvalidVersion("abc".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_two_components() {
        assert!(validate("1.2").is_err());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate("").is_err());
    }
}

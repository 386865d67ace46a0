//! Schema versioning for the JSON interchange formats.

/// Current schema version for the observation dataset and interval table
/// JSON formats.
///
/// Semver: major bumps for breaking changes (field removals, type changes),
/// minor for additive optional fields, patch otherwise.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Check whether a document's schema version can be read by this build.
/// Compatibility is major-version equality.
pub fn is_compatible(version: &str) -> bool {
    major_of(SCHEMA_VERSION) == major_of(version)
}

fn major_of(version: &str) -> u32 {
    version
        .split('.')
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_major_is_compatible() {
        assert!(is_compatible("1.0.0"));
        assert!(is_compatible("1.4.2"));
    }

    #[test]
    fn different_major_is_not() {
        assert!(!is_compatible("2.0.0"));
        assert!(!is_compatible("0.9.0"));
    }

    #[test]
    fn garbage_version_is_not_compatible() {
        assert!(!is_compatible("not-a-version"));
    }
}

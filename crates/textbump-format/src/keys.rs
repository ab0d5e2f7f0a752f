//! Names of every placeholder a format pattern may reference.

pub const CURRENT_VERSION: &str = "current_version";
pub const CURRENT_MAJOR: &str = "current_major";
pub const CURRENT_MINOR: &str = "current_minor";
pub const CURRENT_PATCH: &str = "current_patch";
pub const CURRENT_PRERELEASE: &str = "current_prerelease";
pub const CURRENT_BUILD: &str = "current_build";
pub const NEW_VERSION: &str = "new_version";
pub const NEW_MAJOR: &str = "new_major";
pub const NEW_MINOR: &str = "new_minor";
pub const NEW_PATCH: &str = "new_patch";
pub const NEW_PRERELEASE: &str = "new_prerelease";
pub const NEW_BUILD: &str = "new_build";
pub const TODAY: &str = "today";

pub const ALL_KEYS: &[&str] = &[
    CURRENT_VERSION,
    CURRENT_MAJOR,
    CURRENT_MINOR,
    CURRENT_PATCH,
    CURRENT_PRERELEASE,
    CURRENT_BUILD,
    NEW_VERSION,
    NEW_MAJOR,
    NEW_MINOR,
    NEW_PATCH,
    NEW_PRERELEASE,
    NEW_BUILD,
    TODAY,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn vocabulary_has_thirteen_distinct_keys() {
        let unique: HashSet<_> = ALL_KEYS.iter().collect();
        assert_eq!(ALL_KEYS.len(), 13);
        assert_eq!(unique.len(), 13);
    }
}

use clap::ValueEnum;
use semver::{BuildMetadata, Prerelease, Version};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

/// How the replacement version is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewVersion {
    /// Use this exact version.
    To(Version),
    /// Increment one part of the current version.
    By(BumpType),
}

impl NewVersion {
    #[must_use]
    pub fn resolve(&self, current: &Version) -> Version {
        match self {
            Self::To(version) => version.clone(),
            Self::By(bump_type) => bump_version(current, *bump_type),
        }
    }
}

/// Increments `version` by `bump_type`.
///
/// Lower-order parts reset to zero, and pre-release and build metadata are
/// always dropped.
#[must_use]
pub fn bump_version(version: &Version, bump_type: BumpType) -> Version {
    let mut new_version = version.clone();

    match bump_type {
        BumpType::Major => {
            new_version.major += 1;
            new_version.minor = 0;
            new_version.patch = 0;
        }
        BumpType::Minor => {
            new_version.minor += 1;
            new_version.patch = 0;
        }
        BumpType::Patch => {
            new_version.patch += 1;
        }
    }

    new_version.pre = Prerelease::EMPTY;
    new_version.build = BuildMetadata::EMPTY;
    new_version
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).expect("valid version")
    }

    #[test]
    fn bump_type_ordering_patch_is_smallest() {
        assert!(BumpType::Patch < BumpType::Minor);
        assert!(BumpType::Patch < BumpType::Major);
    }

    #[test]
    fn test_bump_patch() {
        assert_eq!(bump_version(&v("1.2.3"), BumpType::Patch), v("1.2.4"));
    }

    #[test]
    fn test_bump_minor() {
        assert_eq!(bump_version(&v("1.2.3"), BumpType::Minor), v("1.3.0"));
    }

    #[test]
    fn test_bump_major() {
        assert_eq!(bump_version(&v("1.2.3"), BumpType::Major), v("2.0.0"));
    }

    #[test]
    fn bump_drops_prerelease_and_build() {
        let bumped = bump_version(&v("1.2.3-alpha.1+build.5"), BumpType::Patch);
        assert_eq!(bumped, v("1.2.4"));
        assert!(bumped.pre.is_empty());
        assert!(bumped.build.is_empty());
    }

    #[test]
    fn new_version_to_ignores_current() {
        let target = NewVersion::To(v("9.0.0-rc.1"));
        assert_eq!(target.resolve(&v("1.2.3")), v("9.0.0-rc.1"));
    }

    #[test]
    fn new_version_by_bumps_current() {
        let target = NewVersion::By(BumpType::Minor);
        assert_eq!(target.resolve(&v("1.2.3")), v("1.3.0"));
    }

    #[test]
    fn bump_type_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            bump: BumpType,
        }

        let parsed: Wrapper = toml::from_str("bump = \"major\"").expect("parse");
        assert_eq!(parsed.bump, BumpType::Major);
    }
}

use crate::domain::Stage;
use crate::error::{NearestVersionError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Semantic version representation
///
/// Ordering and equality look at `major.minor.patch` and the stage only;
/// build metadata is carried for display but never compared. A version
/// without a stage is greater than any staged version with the same core.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub stage: Option<Stage>,
    pub build: Option<String>,
}

impl Version {
    /// `0.0.0`, reported when no release is reachable
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        patch: 0,
        stage: None,
        build: None,
    };

    /// Create a new normal version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            stage: None,
            build: None,
        }
    }

    /// Attach a pre-release stage
    pub fn with_stage(mut self, name: impl Into<String>, ordinal: Option<u64>) -> Self {
        self.stage = Some(Stage::new(name, ordinal));
        self
    }

    /// Attach build metadata
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// Parse a bare version string (e.g., "1.2.3-rc.1+build.5")
    ///
    /// The numeric core and identifiers are validated by `semver`; the
    /// pre-release part must then be a single stage (`rc` or `rc.1`).
    pub fn parse(s: &str) -> Result<Self> {
        let parsed = semver::Version::parse(s).map_err(|e| {
            NearestVersionError::version(format!("Invalid version '{}': {}", s, e))
        })?;

        let stage = if parsed.pre.is_empty() {
            None
        } else {
            Some(Stage::parse(parsed.pre.as_str())?)
        };

        let build = if parsed.build.is_empty() {
            None
        } else {
            Some(parsed.build.as_str().to_string())
        };

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            stage,
            build,
        })
    }

    /// True for a release version, i.e. one without a pre-release stage
    pub fn is_normal(&self) -> bool {
        self.stage.is_none()
    }

    /// Bump version according to bump type
    ///
    /// The result is always a normal version. A staged version bumps to the
    /// smallest normal version of the requested scope above it, so
    /// `1.2.0-rc.1` becomes `1.2.0` on a minor or patch bump.
    ///
    /// # Errors
    /// Fails when the bumped component would exceed `u64::MAX`.
    pub fn bump(&self, bump_type: &VersionBump) -> Result<Self> {
        let staged = self.stage.is_some();
        let next = match bump_type {
            VersionBump::Major if staged && self.minor == 0 && self.patch == 0 => {
                Version::new(self.major, 0, 0)
            }
            VersionBump::Major => Version::new(increment(self.major, "major")?, 0, 0),
            VersionBump::Minor if staged && self.patch == 0 => {
                Version::new(self.major, self.minor, 0)
            }
            VersionBump::Minor => Version::new(self.major, increment(self.minor, "minor")?, 0),
            VersionBump::Patch if staged => Version::new(self.major, self.minor, self.patch),
            VersionBump::Patch => {
                Version::new(self.major, self.minor, increment(self.patch, "patch")?)
            }
        };
        Ok(next)
    }

    /// Convert into a `semver::Version`
    ///
    /// Stages and build metadata attached with [Version::with_stage] or
    /// [Version::with_build] are not checked until here.
    pub fn to_semver(&self) -> Result<semver::Version> {
        let mut version = semver::Version::new(self.major, self.minor, self.patch);
        if let Some(stage) = &self.stage {
            version.pre = semver::Prerelease::new(&stage.to_string()).map_err(|e| {
                NearestVersionError::version(format!("Invalid stage '{}': {}", stage, e))
            })?;
        }
        if let Some(build) = &self.build {
            version.build = semver::BuildMetadata::new(build).map_err(|e| {
                NearestVersionError::version(format!("Invalid build metadata '{}': {}", build, e))
            })?;
        }
        Ok(version)
    }

    fn precedence_key(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

fn increment(component: u64, name: &str) -> Result<u64> {
    component.checked_add(1).ok_or_else(|| {
        NearestVersionError::version(format!("Cannot bump {} version past {}", name, u64::MAX))
    })
}

impl Default for Version {
    fn default() -> Self {
        Version::ZERO
    }
}

impl FromStr for Version {
    type Err = NearestVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence_key()
            .cmp(&other.precedence_key())
            .then_with(|| match (&self.stage, &other.stage) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.precedence_key().hash(state);
        self.stage.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(stage) = &self.stage {
            write!(f, "-{}", stage)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

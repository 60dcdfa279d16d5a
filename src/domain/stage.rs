//! Pre-release stages of a version
//!
//! A stage is the part after the `-` in `1.2.0-rc.1`: a stage name and an
//! optional ordinal. Stages order by name (ASCII) and then by ordinal, which
//! matches semver precedence for the two-identifier form accepted here.

use crate::error::{NearestVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release stage with optional ordinal
///
/// # Examples
/// - "rc" -> Stage { name: "rc", ordinal: None }
/// - "beta.2" -> Stage { name: "beta", ordinal: Some(2) }
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stage {
    /// The stage name (e.g. "alpha", "milestone", "rc")
    pub name: String,
    /// Position within the stage, `rc < rc.1 < rc.2`
    pub ordinal: Option<u64>,
}

impl Stage {
    /// Create a new stage
    pub fn new(name: impl Into<String>, ordinal: Option<u64>) -> Self {
        Stage {
            name: name.into(),
            ordinal,
        }
    }

    /// Parse a stage from a pre-release string
    ///
    /// Accepts `name` or `name.N`, where the name is made of ASCII
    /// alphanumerics and hyphens with at least one non-digit.
    ///
    /// # Returns
    /// * `Ok(Stage)` - Parsed stage
    /// * `Err` - If the string has another shape
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(NearestVersionError::version("Empty pre-release stage"));
        }

        let mut parts = s.split('.');
        let name = parts.next().unwrap_or_default();

        if name.is_empty()
            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            || name.chars().all(|c| c.is_ascii_digit())
        {
            return Err(NearestVersionError::version(format!(
                "Invalid stage name: '{}'",
                name
            )));
        }

        let ordinal = match parts.next() {
            Some(part) => Some(part.parse::<u64>().map_err(|_| {
                NearestVersionError::version(format!("Invalid stage ordinal: '{}'", part))
            })?),
            None => None,
        };

        if parts.next().is_some() {
            return Err(NearestVersionError::version(format!(
                "Too many pre-release identifiers: '{}'",
                s
            )));
        }

        Ok(Stage::new(name, ordinal))
    }
}

impl FromStr for Stage {
    type Err = NearestVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Stage::parse(s)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ordinal) = self.ordinal {
            write!(f, ".{}", ordinal)?;
        }
        Ok(())
    }
}

use crate::domain::Version;
use crate::error::{NearestVersionError, Result};
use git2::Oid;
use regex::Regex;

/// Prefix recognized in front of version tags unless configured otherwise
pub const DEFAULT_TAG_PREFIX: &str = "v";

/// Represents a git tag, peeled to the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub target: Oid,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        Tag {
            name: name.into(),
            target,
        }
    }
}

/// Tag naming pattern: a regular expression matched at the start of the tag
/// name and stripped before the remainder is read as a version.
///
/// A tag that does not start with the prefix is read as-is, so `1.2.3` is a
/// version under the default `v` prefix too.
#[derive(Debug, Clone)]
pub struct TagPattern {
    prefix: Regex,
    source: String,
}

impl TagPattern {
    /// Create a new tag pattern from a prefix regular expression
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let source = prefix.into();
        let prefix = Regex::new(&format!("^(?:{})", source)).map_err(|e| {
            NearestVersionError::tag_pattern(format!("Invalid tag prefix '{}': {}", source, e))
        })?;

        Ok(TagPattern { prefix, source })
    }

    /// The prefix expression as configured
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Read a version out of a tag name
    ///
    /// Returns `None` for anything that is not a version; callers exclude
    /// such tags rather than failing.
    pub fn parse(&self, tag_name: &str) -> Option<Version> {
        let remainder = match self.prefix.find(tag_name) {
            Some(m) => &tag_name[m.end()..],
            None => tag_name,
        };

        Version::parse(remainder).ok()
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            prefix: Regex::new("^(?:v)").expect("default tag prefix is a valid regex"),
            source: DEFAULT_TAG_PREFIX.to_string(),
        }
    }
}

/// A commit carrying one or more version tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedCommit {
    pub commit: Oid,
    pub versions: Vec<Version>,
}

impl TaggedCommit {
    /// Create a tagged commit with its first version
    pub fn new(commit: Oid, version: Version) -> Self {
        TaggedCommit {
            commit,
            versions: vec![version],
        }
    }

    /// Greatest version on this commit
    pub fn greatest(&self) -> Option<&Version> {
        self.versions.iter().max()
    }

    /// Greatest normal version on this commit
    pub fn greatest_normal(&self) -> Option<&Version> {
        self.versions.iter().filter(|v| v.is_normal()).max()
    }
}

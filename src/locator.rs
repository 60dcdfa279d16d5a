//! Nearest version lookup
//!
//! Walks the commit graph breadth-first from head and reports the closest
//! tagged version, once for any version and once for normal releases only.
//! Each commit is visited once, so the walk is linear in the size of the
//! history no matter how many merge paths lead to a commit.

use crate::config::Config;
use crate::domain::{TagPattern, TaggedCommit, Version};
use crate::error::{NearestVersionError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A version together with its distance from head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDistance {
    pub version: Version,
    /// Parent edges between head and the tagged commit; 0 means the tag is on head
    pub distance: usize,
    /// False for the synthetic `0.0.0` reported when no tag was reachable
    pub tagged: bool,
}

impl VersionDistance {
    /// Create a new version/distance pair for a tagged commit
    pub fn new(version: Version, distance: usize) -> Self {
        VersionDistance {
            version,
            distance,
            tagged: true,
        }
    }

    /// `0.0.0` at `commits`, standing in for a version that was not found
    pub fn fallback(commits: usize) -> Self {
        VersionDistance {
            version: Version::ZERO,
            distance: commits,
            tagged: false,
        }
    }

    /// Whether `version` at `distance` is a better match than this one
    fn is_beaten_by(&self, version: &Version, distance: usize) -> bool {
        distance < self.distance || (distance == self.distance && *version > self.version)
    }
}

impl fmt::Display for VersionDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.version, self.distance)
    }
}

/// Result of [NearestVersionLocator::locate]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestVersion {
    /// Nearest version of any kind, pre-releases included
    pub any: VersionDistance,
    /// Nearest normal (non pre-release) version
    pub normal: VersionDistance,
}

impl NearestVersion {
    /// Result for a history without any reachable version
    ///
    /// `commits` is the number of commits reachable from head.
    pub fn fallback(commits: usize) -> Self {
        NearestVersion {
            any: VersionDistance::fallback(commits),
            normal: VersionDistance::fallback(commits),
        }
    }
}

/// Locates the nearest tagged versions reachable from head
#[derive(Debug, Clone)]
pub struct NearestVersionLocator {
    pattern: TagPattern,
    early_exit: bool,
}

impl NearestVersionLocator {
    /// Create a locator reading tags with `pattern`
    pub fn new(pattern: TagPattern) -> Self {
        NearestVersionLocator {
            pattern,
            early_exit: true,
        }
    }

    /// Create a locator from the `[tags]` and `[locator]` configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let pattern = TagPattern::new(config.tags.prefix.as_str())?;
        Ok(Self::new(pattern).with_early_exit(config.locator.early_exit))
    }

    /// Stop walking once the nearest normal version is settled
    ///
    /// Enabled by default. Disabling it walks the whole history; results are
    /// the same either way.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// The tag pattern in use
    pub fn pattern(&self) -> &TagPattern {
        &self.pattern
    }

    /// Find the nearest version and nearest normal version reachable from head
    ///
    /// An empty repository yields `0.0.0` at distance 0. Without any
    /// reachable version, `0.0.0` is reported at a distance equal to the
    /// number of commits reachable from head.
    ///
    /// # Errors
    /// Only repository access failures are returned.
    pub fn locate<R: Repository + ?Sized>(&self, repo: &R) -> Result<NearestVersion> {
        let head = match repo.resolve_head() {
            Ok(head) => head,
            Err(NearestVersionError::NoHead) => {
                log::debug!("Repository has no commits, reporting {}", Version::ZERO);
                return Ok(NearestVersion::fallback(0));
            }
            Err(e) => return Err(e),
        };

        log::debug!("Locating nearest version from {}", head);

        let tagged = self.tagged_commits(repo)?;
        let nearest = self.walk(repo, head, &tagged)?;

        log::debug!(
            "Nearest version {}, nearest normal version {}",
            nearest.any,
            nearest.normal
        );

        Ok(nearest)
    }

    /// Group parsed version tags by the commit they point at
    fn tagged_commits<R: Repository + ?Sized>(
        &self,
        repo: &R,
    ) -> Result<HashMap<Oid, TaggedCommit>> {
        let mut tagged: HashMap<Oid, TaggedCommit> = HashMap::new();

        for tag in repo.list_tags()? {
            let Some(version) = self.pattern.parse(&tag.name) else {
                log::trace!("Ignoring tag '{}': not a version", tag.name);
                continue;
            };

            match tagged.get_mut(&tag.target) {
                Some(commit) => commit.versions.push(version),
                None => {
                    tagged.insert(tag.target, TaggedCommit::new(tag.target, version));
                }
            }
        }

        log::debug!("Found version tags on {} commits", tagged.len());
        Ok(tagged)
    }

    /// Breadth-first walk from head, one layer per distance
    fn walk<R: Repository + ?Sized>(
        &self,
        repo: &R,
        head: Oid,
        tagged: &HashMap<Oid, TaggedCommit>,
    ) -> Result<NearestVersion> {
        let mut visited: HashSet<Oid> = HashSet::new();
        visited.insert(head);

        let mut layer = vec![head];
        let mut distance = 0;
        let mut any: Option<VersionDistance> = None;
        let mut normal: Option<VersionDistance> = None;

        while !layer.is_empty() {
            for commit in &layer {
                let Some(tagged_commit) = tagged.get(commit) else {
                    continue;
                };

                if let Some(version) = tagged_commit.greatest() {
                    record(&mut any, version, distance);
                }
                if let Some(version) = tagged_commit.greatest_normal() {
                    record(&mut normal, version, distance);
                }
            }

            // A normal version is also a candidate for `any`, so both are settled.
            if self.early_exit && normal.is_some() {
                log::debug!("Stopping walk at distance {}", distance);
                break;
            }

            let mut next = Vec::new();
            for commit in &layer {
                for parent in repo.parents(*commit)? {
                    if visited.insert(parent) {
                        next.push(parent);
                    }
                }
            }

            layer = next;
            distance += 1;
        }

        let reachable = visited.len();
        log::debug!("Visited {} commits", reachable);

        Ok(NearestVersion {
            any: any.unwrap_or_else(|| VersionDistance::fallback(reachable)),
            normal: normal.unwrap_or_else(|| VersionDistance::fallback(reachable)),
        })
    }
}

impl Default for NearestVersionLocator {
    fn default() -> Self {
        Self::new(TagPattern::default())
    }
}

/// Keep the closer candidate, or the greater version at equal distance
fn record(best: &mut Option<VersionDistance>, version: &Version, distance: usize) {
    let replace = match best {
        Some(current) => current.is_beaten_by(version, distance),
        None => true,
    };

    if replace {
        *best = Some(VersionDistance::new(version.clone(), distance));
    }
}

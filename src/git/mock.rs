use crate::domain::Tag;
use crate::error::{NearestVersionError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::{HashMap, HashSet};

/// In-memory commit graph for testing without an on-disk repository
///
/// Commits are created bottom-up with [MockRepository::commit]; each new
/// commit becomes head, the way `git commit` moves the current branch.
pub struct MockRepository {
    parents: HashMap<Oid, Vec<Oid>>,
    tags: Vec<Tag>,
    head: Option<Oid>,
    next_id: u64,
    corrupted: HashSet<Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            parents: HashMap::new(),
            tags: Vec::new(),
            head: None,
            next_id: 0,
            corrupted: HashSet::new(),
        }
    }

    /// Add a commit with the given parents and make it head
    pub fn commit(&mut self, parents: &[Oid]) -> Result<Oid> {
        if let Some(missing) = parents.iter().find(|p| !self.parents.contains_key(*p)) {
            return Err(NearestVersionError::repository_access(format!(
                "Unknown parent commit {}",
                missing
            )));
        }

        self.next_id += 1;
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&self.next_id.to_be_bytes());
        let oid = Oid::from_bytes(&bytes)?;

        self.parents.insert(oid, parents.to_vec());
        self.head = Some(oid);
        Ok(oid)
    }

    /// Add `count` commits in a line on top of head and return the last one
    ///
    /// On an empty repository the first commit is a root.
    pub fn commits(&mut self, count: usize) -> Result<Option<Oid>> {
        for _ in 0..count {
            let parents: Vec<Oid> = self.head.into_iter().collect();
            self.commit(&parents)?;
        }
        Ok(self.head)
    }

    /// Add a tag pointing to a commit
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.push(Tag::new(name, oid));
    }

    /// Move head to an existing commit
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    /// Make reading the parents of `oid` fail, as a damaged object store would
    pub fn corrupt(&mut self, oid: Oid) {
        self.corrupted.insert(oid);
    }

    /// Number of commits in the repository
    pub fn commit_count(&self) -> usize {
        self.parents.len()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn resolve_head(&self) -> Result<Oid> {
        self.head.ok_or(NearestVersionError::NoHead)
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn parents(&self, commit: Oid) -> Result<Vec<Oid>> {
        if self.corrupted.contains(&commit) {
            return Err(NearestVersionError::repository_access(format!(
                "Cannot read commit {}",
                commit
            )));
        }

        self.parents.get(&commit).cloned().ok_or_else(|| {
            NearestVersionError::repository_access(format!("Unknown commit {}", commit))
        })
    }
}

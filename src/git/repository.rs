use crate::domain::Tag;
use crate::error::{NearestVersionError, Result};
use git2::{ErrorCode, ObjectType, Oid, Repository as Git2Repo};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Wrapper around git2::Repository with our trait interface
///
/// libgit2 repository handles are not safe to share between threads, so
/// access goes through a mutex.
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
    head_rev: Option<String>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
            head_rev: None,
        }
    }

    /// Measure from `rev` (any revision expression) instead of HEAD
    pub fn with_head_rev(mut self, rev: impl Into<String>) -> Self {
        self.head_rev = Some(rev.into());
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, Git2Repo>> {
        self.repo
            .lock()
            .map_err(|_| NearestVersionError::repository_access("Repository handle poisoned"))
    }
}

impl super::Repository for Git2Repository {
    fn resolve_head(&self) -> Result<Oid> {
        let repo = self.lock()?;

        if let Some(rev) = &self.head_rev {
            let commit = repo.revparse_single(rev)?.peel_to_commit()?;
            return Ok(commit.id());
        }

        let reference = match repo.head() {
            Ok(reference) => reference,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Err(NearestVersionError::NoHead);
            }
            Err(e) => return Err(e.into()),
        };
        let head = reference.peel_to_commit()?.id();

        Ok(head)
    }

    fn list_tags(&self) -> Result<Vec<Tag>> {
        let repo = self.lock()?;
        let names = repo.tag_names(None)?;
        let mut tags = Vec::with_capacity(names.len());

        for name in names.iter().flatten() {
            let reference = repo.find_reference(&format!("refs/tags/{}", name))?;
            let target = reference.peel(ObjectType::Any)?;

            if target.kind() == Some(ObjectType::Commit) {
                tags.push(Tag::new(name, target.id()));
            } else {
                log::trace!("Skipping tag '{}': does not point at a commit", name);
            }
        }

        Ok(tags)
    }

    fn parents(&self, commit: Oid) -> Result<Vec<Oid>> {
        let repo = self.lock()?;
        let commit = repo.find_commit(commit)?;
        let parents = commit.parent_ids().collect();

        Ok(parents)
    }
}

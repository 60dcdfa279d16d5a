// Shared helpers for tests that need a real repository on disk.
#![allow(dead_code)]

use git2::{Oid, Repository, RepositoryInitOptions, Signature};
use nearest_version::git::Git2Repository;
use tempfile::TempDir;

/// A throwaway git repository whose commits all share an empty tree
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Initialize an empty repository with `main` as the unborn branch
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &opts).expect("Could not init git repo");

        TestRepo { dir, repo }
    }

    fn signature(&self) -> Signature<'static> {
        Signature::now("Test User", "test@example.com").expect("Could not create signature")
    }

    pub fn head(&self) -> Option<Oid> {
        self.repo.head().ok().and_then(|r| r.target())
    }

    /// Commit on top of HEAD and advance the current branch
    pub fn commit(&self, message: &str) -> Oid {
        let parents: Vec<Oid> = self.head().into_iter().collect();
        self.commit_with_parents(message, &parents)
    }

    /// Commit `count` times on top of HEAD and return the last commit
    pub fn commits(&self, count: usize) -> Oid {
        let mut last = None;
        for i in 0..count {
            last = Some(self.commit(&format!("commit {}", i)));
        }
        last.expect("at least one commit")
    }

    /// Commit with explicit parents; the first parent must be the current HEAD
    pub fn commit_with_parents(&self, message: &str, parents: &[Oid]) -> Oid {
        let sig = self.signature();
        let tree_id = self
            .repo
            .treebuilder(None)
            .and_then(|builder| builder.write())
            .expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let parents: Vec<git2::Commit<'_>> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).expect("Could not find parent"))
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .expect("Could not create commit")
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn annotated_tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag(name, &object, &self.signature(), "release", false)
            .expect("Could not create annotated tag");
    }

    /// Create `name` at `oid` and check it out
    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).expect("Could not find commit");
        self.repo
            .branch(name, &commit, false)
            .expect("Could not create branch");
        self.checkout(name);
    }

    pub fn checkout(&self, name: &str) {
        self.repo
            .set_head(&format!("refs/heads/{}", name))
            .expect("Could not move HEAD");
    }

    pub fn open(&self) -> Git2Repository {
        Git2Repository::open(self.dir.path()).expect("Could not open repository")
    }
}

//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only Git
//! queries the locator needs, allowing for multiple implementations
//! including real Git repositories and in-memory histories for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory commit graph for tests and benchmarks
//!
//! # Usage
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations.
//!
//! ```rust
//! # use nearest_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let head = repo.resolve_head()?;
//! for parent in repo.parents(head)? {
//!     println!("{} <- {}", head, parent);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Tag;
use crate::error::Result;
use git2::Oid;

/// Read-only view of a repository's commit graph and tags
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so one handle can serve concurrent
/// read-only callers.
///
/// ## Error Handling
///
/// Backend failures are returned as repository access errors
/// ([crate::error::NearestVersionError::Git] or
/// [crate::error::NearestVersionError::RepositoryAccess]). The only other
/// error an implementation may return is
/// [crate::error::NearestVersionError::NoHead] from [Repository::resolve_head].
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): In-memory commit arena
pub trait Repository: Send + Sync {
    /// Resolve the commit to measure distances from
    ///
    /// # Returns
    /// * `Ok(Oid)` - The head commit
    /// * `Err(NoHead)` - If the repository has no commits yet
    /// * `Err` - If the repository cannot be read
    fn resolve_head(&self) -> Result<Oid>;

    /// Get all local tags, each peeled to the commit it points at
    ///
    /// Annotated tags are resolved through the tag object to the commit.
    /// Tags pointing at something other than a commit are left out.
    ///
    /// # Example
    /// ```rust
    /// # use nearest_version::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// for tag in repo.list_tags()? {
    ///     println!("{} -> {}", tag.name, tag.target);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Get the parent commits of a commit
    ///
    /// Root commits have none, merges have two or more.
    fn parents(&self, commit: Oid) -> Result<Vec<Oid>>;
}

pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod locator;
pub mod ui;

pub use domain::{TagPattern, Version, VersionBump};
pub use error::{NearestVersionError, Result};
pub use locator::{NearestVersion, NearestVersionLocator, VersionDistance};

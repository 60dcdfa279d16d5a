use crate::domain::{Version, VersionBump};
use crate::locator::{NearestVersion, VersionDistance};
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Describe how far head is from a located version.
pub fn describe_distance(found: &VersionDistance) -> String {
    match found.distance {
        0 => format!("{} (at HEAD)", found.version),
        1 => format!("{} (1 commit since)", found.version),
        n => format!("{} ({} commits since)", found.version, n),
    }
}

pub fn display_nearest_version(nearest: &NearestVersion) {
    println!("{}", style("Nearest versions:").bold());
    println!("  Any:    {}", style(describe_distance(&nearest.any)).cyan());
    println!(
        "  Normal: {}",
        style(describe_distance(&nearest.normal)).green()
    );

    if !nearest.normal.tagged {
        display_status("No release tag is reachable from HEAD");
    }
}

pub fn display_next_version(current: &Version, bump: VersionBump, next: &Version) {
    let scope = match bump {
        VersionBump::Major => "major",
        VersionBump::Minor => "minor",
        VersionBump::Patch => "patch",
    };
    display_success(&format!(
        "Next {} version: {} -> {}",
        scope,
        current,
        style(next).green().bold()
    ));
}

use anyhow::Result;
use clap::{Parser, ValueEnum};

use nearest_version::config;
use nearest_version::git::Git2Repository;
use nearest_version::ui;
use nearest_version::{NearestVersionLocator, VersionBump};

#[derive(Clone, Copy, ValueEnum)]
enum Bump {
    Major,
    Minor,
    Patch,
}

impl From<Bump> for VersionBump {
    fn from(bump: Bump) -> Self {
        match bump {
            Bump::Major => VersionBump::Major,
            Bump::Minor => VersionBump::Minor,
            Bump::Patch => VersionBump::Patch,
        }
    }
}

#[derive(clap::Parser)]
#[command(
    name = "nearest-version",
    about = "Find the nearest tagged versions reachable from HEAD"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Repository to inspect")]
    repo: String,

    #[arg(long, help = "Revision to measure from instead of HEAD")]
    rev: Option<String>,

    #[arg(long, help = "Tag prefix regular expression (default: v)")]
    prefix: Option<String>,

    #[arg(long, value_enum, help = "Also print the next version for this bump")]
    bump: Option<Bump>,

    #[arg(long, help = "Walk the full history instead of stopping early")]
    no_early_exit: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.version {
        println!("nearest-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(prefix) = args.prefix {
        config.tags.prefix = prefix;
    }
    if args.no_early_exit {
        config.locator.early_exit = false;
    }
    if let Some(rev) = args.rev {
        config.locator.head = Some(rev);
    }

    let locator = match NearestVersionLocator::from_config(&config) {
        Ok(locator) => locator,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let mut repo = match Git2Repository::open(&args.repo) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };
    if let Some(rev) = &config.locator.head {
        repo = repo.with_head_rev(rev.as_str());
    }

    log::debug!("Using tag prefix '{}'", locator.pattern().as_str());

    let nearest = match locator.locate(&repo) {
        Ok(nearest) => nearest,
        Err(e) => {
            ui::display_error(&format!("Failed to locate nearest version: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_nearest_version(&nearest);

    if let Some(bump) = args.bump {
        let bump = VersionBump::from(bump);
        let next = match nearest.normal.version.bump(&bump) {
            Ok(next) => next,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        };
        ui::display_next_version(&nearest.normal.version, bump, &next);
    }

    Ok(())
}

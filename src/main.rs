use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use changelog_publish::boundary::BoundaryWarning;
use changelog_publish::changelog::{read_lines, write_lines};
use changelog_publish::config::{self, Config};
use changelog_publish::domain::{parse_version, Changelog};
use changelog_publish::finalize::{finalize_lines, finalize_tag_lines};
use changelog_publish::git::{Git2Repository, Repository};
use changelog_publish::{extract_section_notes, read_release_notes, ui};

#[derive(Parser)]
#[command(
    name = "changelog-publish",
    version,
    about = "Read release notes from a changelog and promote its draft section to a release"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "Changelog file (overrides configuration)")]
    changelog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the release sections of the changelog
    Sections,
    /// Print the notes of a section (first section with notes by default)
    Notes {
        /// Caption of the section, matched case-insensitively
        tag: Option<String>,
    },
    /// Release the draft section as TAG and rebuild compare links
    Finalize {
        tag: String,

        #[arg(long, help = "Keep the existing reference links")]
        no_links: bool,

        #[arg(long, help = "Print the result instead of writing it")]
        dry_run: bool,
    },
    /// Release the unreleased section as VERSION after checking every released version
    Release {
        version: String,

        #[arg(long, help = "Print the result instead of writing it")]
        dry_run: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let path = args
        .changelog
        .clone()
        .unwrap_or_else(|| config.changelog.path.clone());

    match args.command {
        Command::Sections => {
            let notes = read_release_notes(&path)?;
            ui::display_sections(&notes);
        }
        Command::Notes { tag } => {
            let notes = extract_section_notes(&path, tag.as_deref())?;
            if notes.is_empty() {
                ui::display_boundary_warning(&BoundaryWarning::EmptyNotes { tag });
            }
            ui::display_notes(&notes);
        }
        Command::Finalize {
            tag,
            no_links,
            dry_run,
        } => {
            let repository = if no_links {
                None
            } else {
                open_repository(&path, &config)
            };

            let lines = read_lines(&path)?;
            let content = finalize_tag_lines(
                &lines,
                &tag,
                repository.as_ref().map(|r| r as &dyn Repository),
                chrono::Local::now().date_naive(),
            )?;
            publish(&path, &content, dry_run, &tag)?;
        }
        Command::Release { version, dry_run } => {
            let version = parse_version(&version)?;
            let lines = read_lines(&path)?;
            let changelog = Changelog::from_lines(&path, &lines)?;
            let content =
                finalize_lines(&changelog, &lines, &version, chrono::Local::now().date_naive())?;
            publish(&path, &content, dry_run, &version.to_string())?;
        }
    }

    Ok(())
}

/// Opens the repository holding the changelog; failures only disable links.
fn open_repository(path: &Path, config: &Config) -> Option<Git2Repository> {
    if !config.links.enabled {
        ui::display_boundary_warning(&BoundaryWarning::LinksSkipped {
            reason: "disabled in configuration".to_string(),
        });
        return None;
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    match Git2Repository::open(dir, &config.links.remote, &config.links.hosts) {
        Ok(repository) => {
            if !repository.is_hosted() {
                ui::display_boundary_warning(&BoundaryWarning::LinksSkipped {
                    reason: format!("'{}' is not a recognised host", repository.url_base()),
                });
            }
            Some(repository)
        }
        Err(e) => {
            ui::display_boundary_warning(&BoundaryWarning::RemoteUnavailable {
                remote: config.links.remote.clone(),
                reason: e.to_string(),
            });
            None
        }
    }
}

fn publish(path: &Path, content: &[String], dry_run: bool, tag: &str) -> Result<()> {
    if dry_run {
        ui::display_status(&format!("Dry run: {} not written", path.display()));
        ui::display_notes(content);
        return Ok(());
    }

    write_lines(path, content)?;
    ui::display_success(&format!("Released {} in {}", tag, path.display()));
    Ok(())
}

use anyhow::{Context, bail};
use clap::ArgMatches;
use colored::Colorize;
use mapmark_core::config::ProjectConfig;
use mapmark_core::export::{ExportFormat, render, save_map, to_json_summary};
use mapmark_core::loader::{load_marker_records, load_named_areas, validate_area};
use mapmark_core::normalize::{NormalizeSummary, normalize_markers};
use mapmark_core::project::{BuildOptions, BuildSummary, build_map};
use std::path::{Path, PathBuf};
use tracing::Level;

// Helper functions for command handlers

/// Install the stderr log subscriber
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Expand `~` in a user-supplied path
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref())
}

/// Output settings for the render command
pub struct RenderOptions {
    pub config: PathBuf,
    pub output: PathBuf,
    pub summary: Option<PathBuf>,
    pub build: BuildOptions,
}

/// Build the project's map and write it out
pub fn run_render(options: &RenderOptions) -> anyhow::Result<BuildSummary> {
    let config = ProjectConfig::from_toml_file(&options.config)
        .with_context(|| format!("Failed to load project {}", options.config.display()))?;

    let (map, summary) = build_map(&config, &options.build).context("Failed to build map")?;

    let format = ExportFormat::from_path(&options.output).unwrap_or(ExportFormat::Html);
    let content = render(&map, format)?;
    save_map(&content, &options.output)
        .with_context(|| format!("Failed to write {}", options.output.display()))?;

    if let Some(summary_path) = &options.summary {
        save_map(&to_json_summary(&map)?, summary_path)
            .with_context(|| format!("Failed to write {}", summary_path.display()))?;
    }

    Ok(summary)
}

/// Backfill missing attributes in a marker directory
pub fn run_normalize(dir: &Path) -> anyhow::Result<NormalizeSummary> {
    normalize_markers(dir).with_context(|| format!("Failed to normalize {}", dir.display()))
}

/// Counts gathered by the check command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub markers: Option<usize>,
    pub areas: Option<usize>,
}

/// Load marker and/or area directories without writing anything
pub fn run_check(
    markers: Option<&Path>,
    areas: Option<&Path>,
    strict_geojson: bool,
) -> anyhow::Result<CheckReport> {
    if markers.is_none() && areas.is_none() {
        bail!("Either --markers or --areas must be provided");
    }

    let mut report = CheckReport::default();

    if let Some(dir) = markers {
        let records = load_marker_records(dir)
            .with_context(|| format!("Marker check failed for {}", dir.display()))?;
        report.markers = Some(records.len());
    }

    if let Some(dir) = areas {
        let named = load_named_areas(dir)
            .with_context(|| format!("Area check failed for {}", dir.display()))?;
        if strict_geojson {
            for (stem, area) in &named {
                validate_area(area).with_context(|| format!("Area '{}' is not valid geoJSON", stem))?;
            }
        }
        report.areas = Some(named.len());
    }

    Ok(report)
}

fn fail(err: anyhow::Error) -> ! {
    eprintln!("{} {:#}", "✗".red().bold(), err);
    std::process::exit(1);
}

pub fn handle_render(args: &ArgMatches, quiet: bool) {
    let config = expand_path(args.get_one::<PathBuf>("config").expect("required by clap"));
    let output = expand_path(args.get_one::<PathBuf>("output").expect("defaulted by clap"));
    let summary = args.get_one::<PathBuf>("summary").map(|p| expand_path(p));

    let options = RenderOptions {
        config,
        output,
        summary,
        build: BuildOptions {
            normalize_all: args.get_flag("normalize"),
            strict_geojson: args.get_flag("strict-geojson"),
        },
    };

    let summary = run_render(&options).unwrap_or_else(|e| fail(e));

    if !quiet {
        println!(
            "{} Map written to {}",
            "✓".green().bold(),
            options.output.display().to_string().bright_white()
        );
        println!(
            "  {} area(s), {} group(s), {} marker(s)",
            summary.areas.to_string().cyan(),
            summary.groups.to_string().cyan(),
            summary.markers.to_string().cyan()
        );
        if summary.normalized_files > 0 {
            println!(
                "  {} marker file(s) normalized",
                summary.normalized_files.to_string().cyan()
            );
        }
    }
}

pub fn handle_normalize(args: &ArgMatches, quiet: bool) {
    let dir = expand_path(args.get_one::<PathBuf>("DIR").expect("required by clap"));

    let summary = run_normalize(&dir).unwrap_or_else(|e| fail(e));

    if !quiet {
        println!(
            "{} Scanned {} file(s) in {}",
            "✓".green().bold(),
            summary.scanned.to_string().cyan(),
            dir.display().to_string().bright_white()
        );
        for path in &summary.updated {
            println!("  {} {}", "→".blue(), path.display());
        }
        println!(
            "  {} updated, {} unchanged",
            summary.updated.len().to_string().cyan(),
            summary.unchanged().to_string().cyan()
        );
    }
}

pub fn handle_check(args: &ArgMatches, quiet: bool) {
    let markers = args.get_one::<PathBuf>("markers").map(|p| expand_path(p));
    let areas = args.get_one::<PathBuf>("areas").map(|p| expand_path(p));
    let strict = args.get_flag("strict-geojson");

    let report = run_check(markers.as_deref(), areas.as_deref(), strict).unwrap_or_else(|e| fail(e));

    if !quiet {
        if let Some(count) = report.markers {
            println!("{} {} marker(s) OK", "✓".green().bold(), count.to_string().cyan());
        }
        if let Some(count) = report.areas {
            println!("{} {} area(s) OK", "✓".green().bold(), count.to_string().cyan());
        }
    }
}

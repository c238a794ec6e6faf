//! Command execution against a loaded version set.

use mvnver_core::{Version, VersionCache, VersionSet};
use serde_json::{Value, json};
use std::io::Write;
use std::process::ExitCode;

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::error::{CliError, Result};
use crate::request::VersionDocument;

/// Loads settings and the input document, then runs the selected command.
pub fn run(cli: &Cli) -> Result<Value> {
    let settings = Settings::load_or_default(cli.config.as_deref())?
        .with_overrides(cli.comparator, cli.snapshots);

    let document = match &cli.input {
        Some(path) => VersionDocument::from_path(path)?,
        None => VersionDocument::from_reader(std::io::stdin().lock())?,
    };

    let cache = VersionCache::new();
    let set = document.into_version_set(settings.comparator.comparator(), &cache)?;
    execute(&cli.command, &set, &settings)
}

/// Runs `cli`, printing the pretty JSON report to `out` or a single
/// `error:` line to `err`.
pub fn run_and_report(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    let written = run(cli).and_then(|report| {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|source| CliError::json("report", source))?;
        writeln!(out, "{rendered}")?;
        Ok(())
    });

    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "command failed");
            let _ = writeln!(err, "error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Runs `command` and renders its result as JSON.
pub fn execute(command: &Command, set: &VersionSet, settings: &Settings) -> Result<Value> {
    let snapshots = settings.include_snapshots;
    tracing::debug!(?command, artifact = %set.artifact(), snapshots, "executing");

    let report = match command {
        Command::List => json!({
            "artifact": set.artifact().name(),
            "comparator": set.comparator().name(),
            "current": set.current_version(),
            "versions": set.versions(snapshots),
        }),
        Command::Newest { lower, upper } => {
            let lower = lower.as_deref().map(Version::parse);
            let upper = upper.as_deref().map(Version::parse);
            json!({
                "lower": lower,
                "upper": upper,
                "newest": set.newest_version(lower.as_ref(), upper.as_ref(), snapshots),
            })
        }
        Command::Newer {
            threshold,
            segment,
            include_current,
        } => {
            let segment = settings.segment_or_default(*segment);
            let versions = set.newer_versions(threshold, segment, snapshots, *include_current)?;
            json!({
                "threshold": threshold,
                "segment": segment,
                "versions": versions,
            })
        }
        Command::Update { segment } => {
            let segment = settings.segment_or_default(*segment);
            let restriction = set.restriction_for_update_scope(segment)?;
            let updates = set.versions_matching(Some(&restriction), snapshots);
            json!({
                "current": set.current_version(),
                "segment": segment,
                "restriction": restriction.to_string(),
                "newest": updates.last(),
                "updates": updates,
            })
        }
        Command::Ignore { segment } => {
            let segment = settings.segment_or_default(*segment);
            let restriction = set.restriction_for_ignore_scope(segment);
            json!({
                "current": set.current_version(),
                "segment": segment,
                "restriction": restriction.to_string(),
                "versions": set.versions_matching(Some(&restriction), snapshots),
            })
        }
        Command::Summary => json!({
            "artifact": set.artifact().name(),
            "current": set.current_version(),
            "updates": set.update_summary(snapshots),
        }),
    };

    Ok(report)
}

//! Command-line arguments.

use clap::{Parser, Subcommand};
use mvnver_core::{ComparatorKind, Segment};
use std::path::PathBuf;

/// Query a Maven artifact's published versions.
///
/// Reads a JSON document with `group_id`, `artifact_id`, an optional
/// `current` version or range, and the list of `versions`. Results are
/// printed as JSON.
#[derive(Debug, Parser)]
#[command(name = "mvnver", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Input document; read from stdin when omitted.
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// JSON settings file with query defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ordering strategy: `maven` or `mercury`.
    #[arg(long, global = true)]
    pub comparator: Option<ComparatorKind>,

    /// Include snapshot versions in results.
    #[arg(short, long, global = true)]
    pub snapshots: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all versions in ascending order.
    List,

    /// Newest version strictly between two bounds.
    Newest {
        #[arg(long)]
        lower: Option<String>,
        #[arg(long)]
        upper: Option<String>,
    },

    /// Versions newer than a threshold, optionally within a segment.
    Newer {
        threshold: String,
        /// Most significant segment allowed to change.
        #[arg(long)]
        segment: Option<Segment>,
        /// Include the threshold itself when present.
        #[arg(long)]
        include_current: bool,
    },

    /// Updates of the current version whose largest change is `segment`.
    Update {
        #[arg(long)]
        segment: Option<Segment>,
    },

    /// Versions left after ignoring changes at `segment` and below.
    Ignore {
        #[arg(long)]
        segment: Option<Segment>,
    },

    /// Newest update per segment.
    Summary,
}

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand, ValueEnum};
use sg_storage::StatusFilter;
use std::path::PathBuf;

pub(crate) const DEFAULT_STORAGE_DIR: &str = ".study_groups";
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

/// Student records and SGPA-ranked study groups.
///
/// Runs the interactive menu unless a subcommand is given.
#[derive(Debug, Parser)]
#[command(name = "study_groups", version, about, long_about = None)]
pub(crate) struct Args {
    /// Directory holding the SQLite database
    #[arg(long, env = "STUDY_GROUPS_STORAGE_DIR", default_value = DEFAULT_STORAGE_DIR)]
    pub(crate) storage_dir: PathBuf,

    /// tracing filter directive, e.g. `debug` or `sg_storage=debug`
    #[arg(long, env = "STUDY_GROUPS_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub(crate) log_filter: String,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Load the bundled sample roster if the store is empty
    Seed,
    AddStudent {
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
        #[arg(long, allow_hyphen_values = true)]
        sgpa: String,
    },
    BlacklistStudent {
        roll_no: String,
    },
    ActivateStudent {
        roll_no: String,
    },
    Students {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        /// Order by SGPA, highest first
        #[arg(long)]
        ranked: bool,
    },
    /// Replace all groups with a fresh partition of active students
    FormGroups,
    Groups {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    RankGroups,
    BlacklistGroup {
        group_id: String,
    },
    ActivateGroup {
        group_id: String,
    },
    /// Text plot of active group averages
    Plot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FilterArg {
    All,
    Active,
    Blacklisted,
}

impl From<FilterArg> for StatusFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => StatusFilter::All,
            FilterArg::Active => StatusFilter::Active,
            FilterArg::Blacklisted => StatusFilter::Blacklisted,
        }
    }
}

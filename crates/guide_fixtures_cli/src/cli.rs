//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use guide_fixtures_core::TaxonomyVariant;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "guide-fixtures",
    version = guide_fixtures_core::core_version(),
    about = "Build, validate and inspect Newcomers Guide content fixtures."
)]
pub(crate) struct Cli {
    /// TOML config file with supported locales and output directory.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log level: trace|debug|info|warn|error.
    #[clap(long, global = true)]
    pub log_level: Option<String>,
    /// Absolute directory for rotating log files; logs go to stderr otherwise.
    #[clap(long, global = true)]
    pub log_dir: Option<String>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Read a Newcomers Guide folder tree and write tasks.ts and taxonomies.ts
    Generate {
        /// Root of the Newcomers Guide folder structure.
        root: PathBuf,
        /// Output directory; overrides the config file.
        #[clap(long)]
        out_dir: Option<PathBuf>,
    },
    /// Check the built-in fixtures against the data-model invariants
    Validate {
        #[clap(long, value_enum, default_value = "legacy")]
        variant: VariantArg,
    },
    /// Report explore key drift between the legacy and generated taxonomies
    Drift,
    /// Print a built-in fixture as JSON
    Print {
        #[clap(value_enum)]
        fixture: FixtureArg,
        #[clap(long, value_enum, default_value = "legacy")]
        variant: VariantArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VariantArg {
    Legacy,
    Generated,
}

impl From<VariantArg> for TaxonomyVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Legacy => TaxonomyVariant::Legacy,
            VariantArg::Generated => TaxonomyVariant::Generated,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FixtureArg {
    Tasks,
    Taxonomies,
}

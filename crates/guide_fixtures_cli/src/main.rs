//! `guide-fixtures` entry point.
//!
//! # Responsibility
//! - Parse arguments, load config and start logging.
//! - Dispatch to core fixture, validation and ingestion APIs.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command, FixtureArg};
use guide_fixtures_core::report::{write_locale_report, write_taxonomy_report};
use guide_fixtures_core::{
    build_combined_fixture, default_log_level, explore_key_drift, init_logging,
    init_stderr_logging, load_guide, taxonomy_fixture, tasks_fixture, write_validated_fixtures,
    EmitError, FixtureConfig, TaxonomyVariant,
};
use log::info;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FixtureConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FixtureConfig::default(),
    };

    let level = cli
        .log_level
        .clone()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| default_log_level().to_string());
    let logging = match &cli.log_dir {
        Some(dir) => init_logging(&level, dir),
        None => init_stderr_logging(&level),
    };
    logging
        .map_err(anyhow::Error::msg)
        .context("initializing logging")?;

    run(cli.command, &config)
}

fn run(command: Command, config: &FixtureConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Generate { root, out_dir } => {
            let content = load_guide(&root)
                .with_context(|| format!("reading guide from {}", root.display()))?;
            let out_dir = out_dir.unwrap_or_else(|| config.out_dir.clone());
            let supported = config.supported_locales()?;

            write_taxonomy_report(&mut out, &content.store.task_map)?;
            write_locale_report(&mut out, &content.store.task_map)?;

            match write_validated_fixtures(&content.store, &supported, &out_dir) {
                Ok(written) => {
                    for path in written {
                        writeln!(out, "wrote {}", path.display())?;
                    }
                }
                Err(EmitError::Invalid(violations)) => {
                    for violation in &violations {
                        writeln!(out, "{violation}")?;
                    }
                    bail!(
                        "{} violation(s) in {}; no fixtures written",
                        violations.len(),
                        root.display()
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Validate { variant } => {
            let supported = config.supported_locales()?;
            let variant = TaxonomyVariant::from(variant);
            let violations = build_combined_fixture(variant).violations(&supported);
            if !violations.is_empty() {
                for violation in &violations {
                    writeln!(out, "{violation}")?;
                }
                bail!("{} fixture violation(s) in {variant} variant", violations.len());
            }
            info!("event=fixtures_validated module=cli status=ok variant={variant}");
            writeln!(out, "fixtures valid ({variant} taxonomy)")?;
        }
        Command::Drift => {
            let drift = explore_key_drift(
                taxonomy_fixture(TaxonomyVariant::Legacy),
                taxonomy_fixture(TaxonomyVariant::Generated),
            );
            writeln!(out, "left = legacy, right = generated")?;
            write!(out, "{drift}")?;
        }
        Command::Print { fixture, variant } => {
            let json = match fixture {
                FixtureArg::Tasks => serde_json::to_string_pretty(tasks_fixture())?,
                FixtureArg::Taxonomies => {
                    serde_json::to_string_pretty(taxonomy_fixture(variant.into()))?
                }
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

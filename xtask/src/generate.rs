//! Manifest generation
//!
//! This module provides the `generate` subcommand. It runs the enumeration
//! and writes every descriptor, with the names a template needs, as JSON or
//! YAML.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use lambdagen::model::LambdaDescriptor;
use lambdagen::pipeline::{Generation, Summary};
use serde::Serialize;

use crate::args::{self, ConfigArgs, ScopeArgs};

/// Arguments for the generate subcommand
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Manifest format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Write the manifest to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the summary only
    #[arg(long)]
    pub summary_only: bool,
}

/// Manifest serialisation format
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

#[derive(Serialize)]
struct Manifest<'a> {
    base_package: &'a str,
    summary: Summary,
    descriptors: Vec<ManifestEntry<'a>>,
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    #[serde(flatten)]
    descriptor: &'a LambdaDescriptor,
    qualified_name: Option<String>,
    native_qualified_name: Option<String>,
    parameter_names: Vec<String>,
    type_parameters: Vec<String>,
}

impl<'a> Manifest<'a> {
    fn new(base_package: &'a str, generation: &'a Generation) -> Self {
        Self {
            base_package,
            summary: generation.summary(),
            descriptors: generation
                .descriptors()
                .iter()
                .map(|descriptor| ManifestEntry {
                    descriptor,
                    qualified_name: descriptor.qualified_name(),
                    native_qualified_name: descriptor.native_qualified_name(),
                    parameter_names: descriptor.parameter_names(),
                    type_parameters: descriptor.type_parameters(),
                })
                .collect(),
        }
    }

    fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize manifest as JSON")
            }
            Format::Yaml => {
                serde_yaml::to_string(self).context("Failed to serialize manifest as YAML")
            }
        }
    }
}

/// Run the generate subcommand
pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = args::resolve(&args.config, Some(&args.scope))?;
    let generation = lambdagen::generate(&config).context("Invalid configuration")?;

    if args.summary_only {
        print!("{}", generation.summary());
        return Ok(());
    }

    let rendered = Manifest::new(&config.base_package, &generation).render(args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                descriptors = generation.descriptors().len(),
                "manifest written"
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

//! Arguments shared by the subcommands.
//!
//! Priority: CLI > config file > defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lambdagen::config::{EnumerationScope, GeneratorConfig};
use lambdagen::model::{LambdaKind, TypeIdentity};

/// Where the generator configuration comes from
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Generator configuration YAML file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Override the base package (e.g. org.example.lambda)
    #[arg(long)]
    pub base_package: Option<String>,
}

impl ConfigArgs {
    /// Loads the configuration file, if any, and applies the base package
    /// override.
    pub fn load(&self) -> Result<GeneratorConfig> {
        let config = match &self.config {
            Some(path) => GeneratorConfig::from_path(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        Ok(match &self.base_package {
            Some(base_package) => config.with_base_package(base_package.clone()),
            None => config,
        })
    }
}

/// Restrictions on the enumeration
#[derive(Args, Debug, Default)]
pub struct ScopeArgs {
    /// Keep only these kinds (repeatable)
    #[arg(long = "kind", value_name = "KIND")]
    pub kinds: Vec<LambdaKind>,

    /// Keep only these arities (repeatable)
    #[arg(long = "arity", value_name = "ARITY")]
    pub arities: Vec<u8>,

    /// Keep only these return types: a primitive, void or generic (repeatable)
    #[arg(long = "return-type", value_name = "TYPE")]
    pub return_types: Vec<TypeIdentity>,
}

impl ScopeArgs {
    /// Replaces each restriction of `scope` given on the command line.
    pub fn apply(&self, mut scope: EnumerationScope) -> EnumerationScope {
        if !self.kinds.is_empty() {
            scope = scope.with_kinds(self.kinds.iter().copied());
        }
        if !self.arities.is_empty() {
            scope = scope.with_arities(self.arities.iter().copied());
        }
        if !self.return_types.is_empty() {
            scope = scope.with_return_types(self.return_types.iter().copied());
        }
        scope
    }
}

/// Resolves and validates the configuration for a run.
pub fn resolve(config: &ConfigArgs, scope: Option<&ScopeArgs>) -> Result<GeneratorConfig> {
    let mut resolved = config.load()?;
    if let Some(scope) = scope {
        resolved.scope = scope.apply(resolved.scope);
    }
    resolved
        .validate()
        .context("Invalid generator configuration")?;
    Ok(resolved)
}

//! Descriptor lookup
//!
//! This module provides the `lookup` subcommand: it runs the full
//! enumeration, then searches the resulting cache by shape.

use anyhow::{Context, Result};
use clap::Args;
use lambdagen::model::{LambdaDescriptor, LambdaKind, TypeDescriptor};
use lambdagen::utils::search::{self, LambdaQuery};

use crate::args::{self, ConfigArgs};

/// Arguments for the lookup subcommand
#[derive(Args, Debug)]
pub struct LookupArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Kind to match
    #[arg(long)]
    pub kind: Option<LambdaKind>,

    /// Arity to match
    #[arg(long)]
    pub arity: Option<u8>,

    /// First input type (e.g. T, int)
    #[arg(long)]
    pub first: Option<TypeDescriptor>,

    /// Second input type
    #[arg(long)]
    pub second: Option<TypeDescriptor>,

    /// Third input type
    #[arg(long)]
    pub third: Option<TypeDescriptor>,

    /// Return type (e.g. R, long, void)
    #[arg(long)]
    pub return_type: Option<TypeDescriptor>,

    /// Throwing flag to match (true|false)
    #[arg(long)]
    pub throwing: Option<bool>,

    /// Search the native descriptors first
    #[arg(long)]
    pub prefer_native: bool,

    /// Print every match instead of the first
    #[arg(long)]
    pub all: bool,
}

impl LookupArgs {
    fn query(&self) -> LambdaQuery {
        let mut query = LambdaQuery::new().prefer_native(self.prefer_native);
        if let Some(kind) = self.kind {
            query = query.kind(kind);
        }
        if let Some(arity) = self.arity {
            query = query.arity(arity);
        }
        if let Some(first) = &self.first {
            query = query.first_input(first.clone());
        }
        if let Some(second) = &self.second {
            query = query.second_input(second.clone());
        }
        if let Some(third) = &self.third {
            query = query.third_input(third.clone());
        }
        if let Some(return_type) = &self.return_type {
            query = query.return_type(return_type.clone());
        }
        if let Some(throwing) = self.throwing {
            query = query.throwing(throwing);
        }
        query
    }
}

/// `package.Name  returns method(type name, ...)`, plus the platform
/// interface for native descriptors.
fn describe(descriptor: &LambdaDescriptor) -> String {
    let parameters = descriptor
        .inputs()
        .into_iter()
        .zip(descriptor.parameter_names())
        .map(|(input, name)| format!("{input} {name}"))
        .collect::<Vec<_>>()
        .join(", ");
    let mut line = format!(
        "{descriptor}  {} {}({parameters})",
        descriptor
            .return_type()
            .map_or("?", |return_type| return_type.name()),
        descriptor.method_name().unwrap_or("?"),
    );
    if let Some(throwable) = descriptor.throwable() {
        line.push_str(&format!(" throws {throwable}"));
    }
    if let Some(native) = descriptor.native_qualified_name() {
        line.push_str(&format!("  [native: {native}]"));
    }
    line
}

/// Run the lookup subcommand
pub fn run(args: &LookupArgs) -> Result<()> {
    let config = args::resolve(&args.config, None)?;
    let generation = lambdagen::generate(&config).context("Invalid configuration")?;
    let query = args.query();

    if args.all {
        let found = search::search_all(generation.cache(), &query).context("Invalid lookup")?;
        if found.is_empty() {
            println!("no match");
        }
        for descriptor in found {
            println!("{}", describe(descriptor));
        }
        return Ok(());
    }

    match search::search(generation.cache(), &query).context("Invalid lookup")? {
        Some(descriptor) => println!("{}", describe(descriptor)),
        None => println!("no match"),
    }
    Ok(())
}

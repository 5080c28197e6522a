//! # lambdagen
//!
//! An enumeration pipeline that produces the metadata for a library of
//! generated functional interfaces.
//!
//! ## Overview
//!
//! A functional-interface library for a JVM-hosted language consists of
//! thousands of small, mechanical interfaces: "a function from two `int`
//! inputs to a `long`, able to throw", "a consumer of an object and a
//! `double`", and so on. This crate does not emit their source; it computes
//! *which* interfaces exist and everything a template needs to render each
//! one:
//!
//! - **Model**: [`model::TypeDescriptor`] and [`model::LambdaDescriptor`]
//! - **Pipeline**: an ordered chain of enumeration stages driven by
//!   [`pipeline::Pipeline`]
//! - **Cache**: [`cache::LambdaCache`], the two-tier (all / native) index
//!   built during a run
//! - **Native table**: [`native`], the functional interfaces the host
//!   platform already ships
//! - **Utilities**: shape predicates and two-tier search in [`utils`]
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the model and YAML configuration
//! - `fxhash`: use `rustc-hash` for the cache's membership sets
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambdagen::prelude::*;
//!
//! let generation = generate(&GeneratorConfig::default()).unwrap();
//! let int_function = generation
//!     .descriptors()
//!     .iter()
//!     .find(|descriptor| descriptor.name() == Some("IntFunction"))
//!     .unwrap();
//!
//! assert_eq!(int_function.method_name(), Some("apply"));
//! assert_eq!(int_function.native(), Some(true));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use lambdagen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cache::LambdaCache;
    pub use crate::config::{EnumerationScope, GeneratorConfig};
    pub use crate::error::{ConfigError, SearchError};
    pub use crate::generate;
    pub use crate::model::*;
    pub use crate::pipeline::{EnumerationContext, Generation, Pipeline, Stage, Summary};
    pub use crate::utils::classify;
    pub use crate::utils::search::{self, LambdaQuery};
}

pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod native;
pub mod pipeline;
pub mod utils;

/// Runs the standard pipeline once with the given configuration.
///
/// Shorthand for `Pipeline::standard().run(config)`.
///
/// # Examples
///
/// ```rust
/// use lambdagen::{generate, config::GeneratorConfig};
///
/// let generation = generate(&GeneratorConfig::default())?;
/// assert!(!generation.descriptors().is_empty());
/// assert!(generation.cache().native_len() > 0);
///
/// let empty_base = GeneratorConfig::default().with_base_package("");
/// assert!(generate(&empty_base).is_err());
/// # Ok::<(), lambdagen::error::ConfigError>(())
/// ```
///
/// # Errors
///
/// Returns the error of [`GeneratorConfig::validate`](config::GeneratorConfig::validate)
/// if `config` is invalid.
pub fn generate(
    config: &config::GeneratorConfig,
) -> Result<pipeline::Generation, error::ConfigError> {
    pipeline::Pipeline::standard().run(config)
}

//! The enumeration pipeline.
//!
//! A [`Pipeline`] is an ordered list of [`Stage`]s. Starting from one empty
//! seed descriptor, each stage expands a descriptor into zero or more
//! copies, each with the fields that stage owns filled in, and every copy
//! continues into the next stage. Descriptors that make it past the last
//! stage are complete and are collected into the [`Generation`].
//!
//! # Stage order
//!
//! The standard pipeline runs, in order:
//!
//! | # | Stage          | Requires                          | Provides         |
//! |---|----------------|-----------------------------------|------------------|
//! | 1 | kind           | -                                 | kind             |
//! | 2 | arity          | kind                              | arity            |
//! | 3 | return type    | kind, arity                       | return type      |
//! | 4 | first input    | kind, arity                       | first input      |
//! | 5 | second input   | kind, arity, first input          | second input     |
//! | 6 | third input    | kind, arity, second input         | third input      |
//! | 7 | operator       | kind, arity, inputs, return type  | kind, inputs, return type |
//! | 8 | throwable      | kind                              | throwing flag    |
//! | 9 | method name    | kind, return type, throwing flag  | method name      |
//! |10 | display name   | kind, arity, inputs, return type, throwing flag | name |
//! |11 | package name   | kind, arity, inputs, return type  | package          |
//! |12 | native match   | kind, arity, name, throwing flag  | native flag      |
//!
//! [`Pipeline::new`] refuses an ordering in which a stage requires a field
//! no earlier stage provides. At run time a stage handed a descriptor that
//! lacks a required field panics: the order is fixed when the pipeline is
//! assembled, so a miss is an assembly bug, never a data error.
//!
//! # Driver
//!
//! The driver is iterative. It keeps an explicit stack of
//! `(stage index, descriptor)` work items and processes it depth-first,
//! pushing the children of each expansion in reverse so the output order
//! matches a recursive left-to-right walk.

mod context;
pub mod stages;

use std::fmt;

use tracing::{debug, info, trace};

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::model::{DescriptorField, LambdaDescriptor};

pub use context::{EnumerationContext, Generation, Summary};

/// One step of the enumeration.
///
/// A stage owns a set of descriptor fields. [`Stage::expand`] receives a
/// descriptor by value and returns the copies to forward, each with the
/// owned fields populated. Returning an empty vector drops the branch.
pub trait Stage: fmt::Debug {
    /// A short name used in logs and panic messages.
    fn name(&self) -> &'static str;

    /// The fields that must be resolved before this stage runs.
    fn requires(&self) -> &'static [DescriptorField];

    /// The fields this stage resolves.
    fn provides(&self) -> &'static [DescriptorField];

    /// Whether every required field of `descriptor` is resolved.
    fn is_applicable(&self, descriptor: &LambdaDescriptor) -> bool {
        self.requires()
            .iter()
            .all(|field| descriptor.is_resolved(*field))
    }

    /// Expands `descriptor` into the copies to forward to the next stage.
    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor>;
}

/// A stage whose requirements are not met by the stages before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingViolation {
    /// Position of the offending stage.
    pub position: usize,
    /// Name of the offending stage.
    pub stage: &'static str,
    /// The first required field no earlier stage provides.
    pub missing: DescriptorField,
}

impl fmt::Display for OrderingViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "stage #{} `{}` requires the {} but no earlier stage provides it",
            self.position + 1,
            self.stage,
            self.missing
        )
    }
}

/// Finds the first stage whose requirements are neither `seeded` nor
/// provided by an earlier stage.
#[must_use]
pub fn ordering_violation(
    seeded: &[DescriptorField],
    stages: &[Box<dyn Stage>],
) -> Option<OrderingViolation> {
    let mut provided: Vec<DescriptorField> = seeded.to_vec();
    for (position, stage) in stages.iter().enumerate() {
        if let Some(missing) = stage
            .requires()
            .iter()
            .find(|field| !provided.contains(field))
        {
            return Some(OrderingViolation {
                position,
                stage: stage.name(),
                missing: *missing,
            });
        }
        provided.extend_from_slice(stage.provides());
    }
    None
}

/// An ordered chain of stages and the driver that runs it.
///
/// # Examples
///
/// ```rust
/// use lambdagen::config::GeneratorConfig;
/// use lambdagen::pipeline::Pipeline;
///
/// let generation = Pipeline::standard().run(&GeneratorConfig::default())?;
/// assert!(generation.descriptors().iter().all(|descriptor| descriptor.is_complete()));
/// # Ok::<(), lambdagen::error::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Assembles a pipeline from `stages`, run in the given order.
    ///
    /// # Panics
    ///
    /// Panics if a stage requires a field that no earlier stage provides.
    #[must_use]
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self::resuming(&[], stages)
    }

    /// Assembles a pipeline that starts from seeds which already carry the
    /// `seeded` fields, for use with [`Pipeline::run_from`].
    ///
    /// # Panics
    ///
    /// Panics if a stage requires a field that is neither seeded nor
    /// provided by an earlier stage.
    #[must_use]
    pub fn resuming(seeded: &[DescriptorField], stages: Vec<Box<dyn Stage>>) -> Self {
        if let Some(violation) = ordering_violation(seeded, &stages) {
            panic!("invalid pipeline order: {violation}");
        }
        Self { stages }
    }

    /// The standard twelve-stage pipeline.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(stages::standard())
    }

    /// The stages, in run order.
    #[must_use]
    pub fn stages(&self) -> &[Box<dyn Stage>] {
        &self.stages
    }

    /// Runs the pipeline from an empty seed descriptor.
    ///
    /// # Errors
    ///
    /// Returns the error of [`GeneratorConfig::validate`] before any stage
    /// runs if `config` is invalid.
    ///
    /// # Panics
    ///
    /// Panics if a stage meets a descriptor it cannot run on, or if an
    /// incomplete descriptor reaches the end of the chain.
    pub fn run(&self, config: &GeneratorConfig) -> Result<Generation, ConfigError> {
        self.run_from(LambdaDescriptor::new(), config)
    }

    /// Runs the pipeline from a caller-supplied seed descriptor.
    ///
    /// # Errors
    ///
    /// As [`Pipeline::run`].
    ///
    /// # Panics
    ///
    /// As [`Pipeline::run`].
    pub fn run_from(
        &self,
        seed: LambdaDescriptor,
        config: &GeneratorConfig,
    ) -> Result<Generation, ConfigError> {
        config.validate()?;
        info!(
            base_package = %config.base_package,
            stages = self.stages.len(),
            "starting enumeration"
        );

        let mut context = EnumerationContext::new(config);
        let mut produced = vec![0_usize; self.stages.len()];
        let mut descriptors = Vec::new();
        let mut work = vec![(0_usize, seed)];

        while let Some((position, descriptor)) = work.pop() {
            let Some(stage) = self.stages.get(position) else {
                if let Some(field) = descriptor.first_unresolved() {
                    panic!("descriptor {descriptor} left the pipeline without its {field}");
                }
                trace!(descriptor = %descriptor, "completed descriptor");
                context.cache_mut().add(descriptor.clone());
                descriptors.push(descriptor);
                continue;
            };

            if !stage.is_applicable(&descriptor) {
                let missing = stage
                    .requires()
                    .iter()
                    .find(|field| !descriptor.is_resolved(**field))
                    .map_or_else(|| "requirements".to_owned(), ToString::to_string);
                panic!(
                    "stage `{}` cannot run on {descriptor}: missing {missing}",
                    stage.name()
                );
            }

            let expanded = stage.expand(descriptor, &mut context);
            produced[position] += expanded.len();
            work.extend(
                expanded
                    .into_iter()
                    .rev()
                    .map(|child| (position + 1, child)),
            );
        }

        for (stage, count) in self.stages.iter().zip(&produced) {
            debug!(stage = stage.name(), produced = count, "stage finished");
        }

        let generation = Generation::new(descriptors, context.into_cache());
        let summary = generation.summary();
        info!(
            total = summary.total,
            native = summary.native,
            throwing = summary.throwing,
            "enumeration finished"
        );
        Ok(generation)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

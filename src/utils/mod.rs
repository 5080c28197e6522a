//! Helpers over descriptors.
//!
//! - [`classify`]: shape predicates such as "is this an operator" or "are
//!   all inputs primitive", shared by the naming stages and by callers
//! - [`search`]: the two-tier (native first, then everything) lookup over
//!   a [`LambdaCache`](crate::cache::LambdaCache)

pub mod classify;
pub mod search;

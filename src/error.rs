//! Error types.
//!
//! Only caller-supplied input can fail: search arguments, configuration
//! files, and textual names of kinds and types. A pipeline stage that runs
//! on a descriptor missing the fields it needs is an assembly bug and
//! panics instead (see [`crate::pipeline`]). A search that finds nothing is
//! not an error either; it yields `None`.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{InputSlot, LambdaKind, TypeIdentity};

/// A name that does not denote any known kind or type.
///
/// # Examples
///
/// ```rust
/// use lambdagen::model::LambdaKind;
///
/// let error = "Callable".parse::<LambdaKind>().unwrap_err();
/// assert_eq!(error.to_string(), "unknown lambda kind: `Callable`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {expected}: `{input}`")]
pub struct ParseError {
    /// What the input was supposed to name.
    pub expected: &'static str,
    /// The rejected input.
    pub input: String,
}

impl ParseError {
    pub(crate) fn new(expected: &'static str, input: &str) -> Self {
        Self {
            expected,
            input: input.to_owned(),
        }
    }
}

/// A type slot read from serialised data that no constructor would build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeSlotError {
    /// The display name disagrees with the identity, e.g. identity `int`
    /// named `long`, or a generic slot not named by one upper-case letter.
    #[error("type slot named `{name}` cannot have identity `{identity}`")]
    NameMismatch {
        /// The declared identity.
        identity: TypeIdentity,
        /// The declared display name.
        name: String,
    },

    /// The parameter stem is not a lower-case identifier.
    #[error("invalid parameter name `{0}`")]
    InvalidParameterName(String),
}

/// Malformed arguments to the search utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The requested arity is larger than any generated interface has.
    #[error("invalid arity {arity}: must be at most {max}")]
    InvalidArity {
        /// The rejected arity.
        arity: u8,
        /// The largest legal arity.
        max: u8,
    },

    /// An input slot was constrained past the constrained arity.
    #[error("{slot:?} input constrained but arity is {arity}")]
    InputBeyondArity {
        /// The constrained slot.
        slot: InputSlot,
        /// The constrained arity.
        arity: u8,
    },

    /// The constrained kind can never have the constrained arity.
    #[error("{kind} never has arity {arity}")]
    ArityNotAdmitted {
        /// The constrained kind.
        kind: LambdaKind,
        /// The constrained arity.
        arity: u8,
    },

    /// A kind constraint listing no kinds at all.
    #[error("kind constraint must list at least one kind")]
    EmptyKinds,
}

/// Failures while loading or validating a [`GeneratorConfig`].
///
/// [`GeneratorConfig`]: crate::config::GeneratorConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid YAML for the expected schema.
    #[cfg(feature = "serde")]
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A scope restriction listing nothing, which would enumerate nothing.
    #[error("scope field `{field}` must not be empty")]
    EmptyScope {
        /// The offending scope field.
        field: &'static str,
    },

    /// An arity in the scope is larger than any generated interface has.
    #[error("scope arity {0} exceeds the maximum of 3")]
    InvalidArity(u8),

    /// The base package is not a dotted sequence of identifiers.
    #[error("invalid base package `{0}`")]
    InvalidBasePackage(String),
}

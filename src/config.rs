//! Generator configuration.
//!
//! The enumeration itself is closed: kinds, primitives and the arity bound
//! are fixed. What a caller may configure is where the generated
//! interfaces live ([`GeneratorConfig::base_package`]) and which part of
//! the enumeration to keep ([`EnumerationScope`]). A scope only drops
//! branches; it never changes what any stage derives for the branches it
//! keeps.
//!
//! With the `serde` feature a configuration can be loaded from YAML:
//!
//! ```yaml
//! base_package: io.lambdagen
//! scope:
//!   kinds: [Function]
//!   arities: [1]
//!   return_types: [int]
//! ```

#[cfg(feature = "serde")]
use std::path::Path;

use crate::error::ConfigError;
use crate::model::{LambdaKind, MAX_ARITY, TypeIdentity};

/// The base package used when none is configured.
pub const DEFAULT_BASE_PACKAGE: &str = "io.lambdagen";

/// Restrictions on which branches of the enumeration survive.
///
/// `None` in any field means "no restriction".
///
/// The `Operator` kind is produced by operator detection rather than
/// enumerated directly, so listing it keeps the function and predicate
/// branches alive until detection has run, and only the reclassified
/// descriptors survive afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct EnumerationScope {
    /// The kinds to keep.
    pub kinds: Option<Vec<LambdaKind>>,
    /// The arities to keep.
    pub arities: Option<Vec<u8>>,
    /// The return type identities to keep.
    pub return_types: Option<Vec<TypeIdentity>>,
}

impl EnumerationScope {
    /// A scope that keeps everything.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Restricts the scope to `kinds`.
    #[must_use]
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = LambdaKind>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    /// Restricts the scope to `arities`.
    #[must_use]
    pub fn with_arities(mut self, arities: impl IntoIterator<Item = u8>) -> Self {
        self.arities = Some(arities.into_iter().collect());
        self
    }

    /// Restricts the scope to `return_types`.
    #[must_use]
    pub fn with_return_types(
        mut self,
        return_types: impl IntoIterator<Item = TypeIdentity>,
    ) -> Self {
        self.return_types = Some(return_types.into_iter().collect());
        self
    }

    /// Whether the kind stage keeps a branch of `kind`.
    #[must_use]
    pub fn admits_seed_kind(&self, kind: LambdaKind) -> bool {
        match &self.kinds {
            None => true,
            Some(kinds) => {
                kinds.contains(&kind)
                    || (kinds.contains(&LambdaKind::Operator)
                        && matches!(kind, LambdaKind::Function | LambdaKind::Predicate))
            }
        }
    }

    /// Whether a descriptor whose kind is final survives.
    #[must_use]
    pub fn admits_kind(&self, kind: LambdaKind) -> bool {
        self.kinds.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }

    /// Whether a branch of `arity` survives.
    #[must_use]
    pub fn admits_arity(&self, arity: u8) -> bool {
        self.arities
            .as_ref()
            .is_none_or(|arities| arities.contains(&arity))
    }

    /// Whether a branch returning `identity` survives.
    #[must_use]
    pub fn admits_return(&self, identity: TypeIdentity) -> bool {
        self.return_types
            .as_ref()
            .is_none_or(|return_types| return_types.contains(&identity))
    }

    /// Checks that no restriction is empty and every arity is legal.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyScope`] for an empty list and
    /// [`ConfigError::InvalidArity`] for an arity above the maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kinds.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigError::EmptyScope { field: "kinds" });
        }
        if let Some(arities) = &self.arities {
            if arities.is_empty() {
                return Err(ConfigError::EmptyScope { field: "arities" });
            }
            if let Some(arity) = arities.iter().find(|arity| **arity > MAX_ARITY) {
                return Err(ConfigError::InvalidArity(*arity));
            }
        }
        if self.return_types.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigError::EmptyScope {
                field: "return_types",
            });
        }
        Ok(())
    }
}

/// Everything a pipeline run can be configured with.
///
/// # Examples
///
/// ```rust
/// use lambdagen::config::{EnumerationScope, GeneratorConfig};
/// use lambdagen::model::LambdaKind;
///
/// let config = GeneratorConfig::default()
///     .with_base_package("org.example.lambda")
///     .with_scope(EnumerationScope::unrestricted().with_kinds([LambdaKind::Consumer]));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.base_package, "org.example.lambda");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct GeneratorConfig {
    /// The package every generated interface lives under.
    pub base_package: String,
    /// Which branches of the enumeration to keep.
    pub scope: EnumerationScope,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_package: DEFAULT_BASE_PACKAGE.to_owned(),
            scope: EnumerationScope::default(),
        }
    }
}

impl GeneratorConfig {
    /// Replaces the base package.
    #[must_use]
    pub fn with_base_package(mut self, base_package: impl Into<String>) -> Self {
        self.base_package = base_package.into();
        self
    }

    /// Replaces the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: EnumerationScope) -> Self {
        self.scope = scope;
        self
    }

    /// Checks the base package and the scope.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBasePackage`] unless the base package is
    /// a dot-separated list of identifiers, or any error of
    /// [`EnumerationScope::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_package_name(&self.base_package) {
            return Err(ConfigError::InvalidBasePackage(self.base_package.clone()));
        }
        self.scope.validate()
    }

    /// Parses and validates a YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML and any validation
    /// error of [`GeneratorConfig::validate`].
    #[cfg(feature = "serde")]
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`GeneratorConfig::from_yaml_str`].
    #[cfg(feature = "serde")]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }
}

fn is_package_name(package: &str) -> bool {
    !package.is_empty()
        && package.split('.').all(|segment| {
            let mut characters = segment.chars();
            characters
                .next()
                .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
                && characters.all(|character| character.is_ascii_alphanumeric() || character == '_')
        })
}

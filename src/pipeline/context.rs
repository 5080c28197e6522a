use std::collections::BTreeMap;

use crate::cache::LambdaCache;
use crate::config::{EnumerationScope, GeneratorConfig};
use crate::model::{LambdaDescriptor, LambdaKind};

/// The state one pipeline run threads through its stages.
///
/// Holds the run's configuration and the [`LambdaCache`] the stages and
/// the driver append to. A context lives exactly as long as one run.
#[derive(Debug)]
pub struct EnumerationContext<'config> {
    config: &'config GeneratorConfig,
    cache: LambdaCache,
}

impl<'config> EnumerationContext<'config> {
    /// Creates a context with an empty cache.
    #[must_use]
    pub fn new(config: &'config GeneratorConfig) -> Self {
        Self {
            config,
            cache: LambdaCache::new(),
        }
    }

    /// The run's configuration.
    #[must_use]
    pub const fn config(&self) -> &'config GeneratorConfig {
        self.config
    }

    /// The run's scope.
    #[must_use]
    pub const fn scope(&self) -> &'config EnumerationScope {
        &self.config.scope
    }

    /// The cache built so far.
    #[must_use]
    pub const fn cache(&self) -> &LambdaCache {
        &self.cache
    }

    /// Mutable access to the cache.
    pub const fn cache_mut(&mut self) -> &mut LambdaCache {
        &mut self.cache
    }

    /// Ends the run, handing back the cache.
    #[must_use]
    pub fn into_cache(self) -> LambdaCache {
        self.cache
    }
}

/// The result of one pipeline run.
#[derive(Debug, Clone)]
pub struct Generation {
    descriptors: Vec<LambdaDescriptor>,
    cache: LambdaCache,
}

impl Generation {
    pub(crate) const fn new(descriptors: Vec<LambdaDescriptor>, cache: LambdaCache) -> Self {
        Self { descriptors, cache }
    }

    /// The completed descriptors, in enumeration order.
    #[must_use]
    pub fn descriptors(&self) -> &[LambdaDescriptor] {
        &self.descriptors
    }

    /// The cache built during the run.
    #[must_use]
    pub const fn cache(&self) -> &LambdaCache {
        &self.cache
    }

    /// Splits the generation into its descriptors and cache.
    #[must_use]
    pub fn into_parts(self) -> (Vec<LambdaDescriptor>, LambdaCache) {
        (self.descriptors, self.cache)
    }

    /// Counts of the run's output.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut by_kind: BTreeMap<LambdaKind, usize> = BTreeMap::new();
        let mut native = 0;
        let mut throwing = 0;
        for descriptor in &self.descriptors {
            if let Some(kind) = descriptor.kind() {
                *by_kind.entry(kind).or_default() += 1;
            }
            if descriptor.native() == Some(true) {
                native += 1;
            }
            if descriptor.throwing() == Some(true) {
                throwing += 1;
            }
        }
        Summary {
            total: self.descriptors.len(),
            native,
            throwing,
            by_kind,
        }
    }
}

/// Counts describing a [`Generation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    /// Number of descriptors.
    pub total: usize,
    /// Number of descriptors the host platform defines.
    pub native: usize,
    /// Number of throwing descriptors.
    pub throwing: usize,
    /// Number of descriptors per kind.
    pub by_kind: BTreeMap<LambdaKind, usize>,
}

impl Summary {
    /// The count for `kind`, zero when absent.
    #[must_use]
    pub fn count(&self, kind: LambdaKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or_default()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            formatter,
            "{} descriptors ({} native, {} throwing)",
            self.total, self.native, self.throwing
        )?;
        for (kind, count) in &self.by_kind {
            writeln!(formatter, "  {kind:<10} {count}")?;
        }
        Ok(())
    }
}

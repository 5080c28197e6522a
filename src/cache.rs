//! The two-tier index of descriptors built during one pipeline run.
//!
//! [`LambdaCache`] is append-only: it records every completed descriptor
//! and, separately, the ones the host platform already defines. The search
//! functions in [`crate::utils::search`] read it back, consulting the
//! native tier first when asked to prefer native matches.
//!
//! A cache belongs to one run. It travels inside the
//! [`EnumerationContext`](crate::pipeline::EnumerationContext) and is handed
//! back in the [`Generation`](crate::pipeline::Generation), so independent
//! runs in the same process never see each other's descriptors.

use std::collections::HashSet;

use crate::model::LambdaDescriptor;

#[cfg(feature = "fxhash")]
type DescriptorHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
type DescriptorHasher = std::collections::hash_map::RandomState;

type DescriptorSet = HashSet<LambdaDescriptor, DescriptorHasher>;

/// Append-only registry of descriptors, with a native subset.
///
/// Insertion order is preserved for iteration, which keeps searches
/// deterministic: among several matches the earliest recorded one wins.
///
/// Invariant: every native descriptor is also in the full set.
///
/// # Examples
///
/// ```rust
/// use lambdagen::cache::LambdaCache;
/// use lambdagen::model::{LambdaDescriptor, LambdaKind};
///
/// let mut cache = LambdaCache::new();
/// let runnable = LambdaDescriptor::new().with_kind(LambdaKind::Runnable).with_arity(0);
///
/// assert!(cache.add_native(runnable.clone()));
/// assert!(!cache.add(runnable.clone()));
/// assert_eq!(cache.len(), 1);
/// assert_eq!(cache.native_len(), 1);
/// assert!(cache.is_native(&runnable));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LambdaCache {
    all: Vec<LambdaDescriptor>,
    natives: Vec<LambdaDescriptor>,
    all_members: DescriptorSet,
    native_members: DescriptorSet,
}

impl LambdaCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a descriptor. Returns `false` if an equal one was already
    /// recorded.
    pub fn add(&mut self, descriptor: LambdaDescriptor) -> bool {
        if self.all_members.contains(&descriptor) {
            return false;
        }
        self.all_members.insert(descriptor.clone());
        self.all.push(descriptor);
        true
    }

    /// Records a descriptor as native, adding it to the full set as well.
    /// Returns `false` if it was already recorded as native.
    pub fn add_native(&mut self, descriptor: LambdaDescriptor) -> bool {
        if self.native_members.contains(&descriptor) {
            return false;
        }
        self.add(descriptor.clone());
        self.native_members.insert(descriptor.clone());
        self.natives.push(descriptor);
        true
    }

    /// Every recorded descriptor, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[LambdaDescriptor] {
        &self.all
    }

    /// The native descriptors, in insertion order.
    #[must_use]
    pub fn natives(&self) -> &[LambdaDescriptor] {
        &self.natives
    }

    /// Whether an equal descriptor was recorded.
    #[must_use]
    pub fn contains(&self, descriptor: &LambdaDescriptor) -> bool {
        self.all_members.contains(descriptor)
    }

    /// Whether an equal descriptor was recorded as native.
    #[must_use]
    pub fn is_native(&self, descriptor: &LambdaDescriptor) -> bool {
        self.native_members.contains(descriptor)
    }

    /// The number of recorded descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// The number of native descriptors.
    #[must_use]
    pub fn native_len(&self) -> usize {
        self.natives.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Iterates every recorded descriptor.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, LambdaDescriptor> {
        self.all.iter()
    }
}

impl<'a> IntoIterator for &'a LambdaCache {
    type Item = &'a LambdaDescriptor;
    type IntoIter = std::slice::Iter<'a, LambdaDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

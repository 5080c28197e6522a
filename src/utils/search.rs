//! Lookup over a [`LambdaCache`].
//!
//! A [`LambdaQuery`] constrains any subset of kind, arity, the three inputs,
//! the return type and the throwing flag; unconstrained fields match
//! anything. With [`LambdaQuery::prefer_native`] the native tier is
//! searched first and the full cache only on a miss, so a native match is
//! always returned when one exists. Within a tier the earliest recorded
//! match wins, which makes every search deterministic.
//!
//! Slot types compare with [`TypeDescriptor`] equality: identity and
//! display name, never the index.
//!
//! # Examples
//!
//! ```rust
//! use lambdagen::prelude::*;
//!
//! let generation = generate(&GeneratorConfig::default()).unwrap();
//! let query = LambdaQuery::new()
//!     .kind(LambdaKind::Function)
//!     .arity(1)
//!     .first_input(TypeDescriptor::primitive(PrimitiveType::Long, 1))
//!     .return_type(TypeDescriptor::primitive(PrimitiveType::Int, 0))
//!     .prefer_native(true);
//!
//! let found = search::search(generation.cache(), &query).unwrap().unwrap();
//! assert_eq!(found.name(), Some("LongToIntFunction"));
//! assert_eq!(found.native(), Some(true));
//! ```

use crate::cache::LambdaCache;
use crate::error::SearchError;
use crate::model::{InputSlot, LambdaDescriptor, LambdaKind, MAX_ARITY, TypeDescriptor};

/// Search criteria. Built with chained setters; every unset field matches
/// any descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LambdaQuery {
    kinds: Option<Vec<LambdaKind>>,
    arity: Option<u8>,
    inputs: [Option<TypeDescriptor>; 3],
    return_type: Option<TypeDescriptor>,
    throwing: Option<bool>,
    prefer_native: bool,
}

impl LambdaQuery {
    /// A query matching every descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A query constraining every populated shape field of `template`:
    /// kind, arity, inputs, return type and throwing flag.
    #[must_use]
    pub fn like(template: &LambdaDescriptor) -> Self {
        Self {
            kinds: template.kind().map(|kind| vec![kind]),
            arity: template.arity(),
            inputs: InputSlot::ALL.map(|slot| template.input(slot).cloned()),
            return_type: template.return_type().cloned(),
            throwing: template.throwing(),
            prefer_native: false,
        }
    }

    /// Constrains the kind.
    #[must_use]
    pub fn kind(mut self, kind: LambdaKind) -> Self {
        self.kinds = Some(vec![kind]);
        self
    }

    /// Constrains the kind to any of `kinds`.
    #[must_use]
    pub fn any_of_kinds(mut self, kinds: impl IntoIterator<Item = LambdaKind>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    /// Constrains the arity.
    #[must_use]
    pub const fn arity(mut self, arity: u8) -> Self {
        self.arity = Some(arity);
        self
    }

    /// Constrains the input at `slot`.
    #[must_use]
    pub fn input(mut self, slot: InputSlot, input: TypeDescriptor) -> Self {
        self.inputs[slot_index(slot)] = Some(input);
        self
    }

    /// Constrains the first input.
    #[must_use]
    pub fn first_input(self, input: TypeDescriptor) -> Self {
        self.input(InputSlot::First, input)
    }

    /// Constrains the second input.
    #[must_use]
    pub fn second_input(self, input: TypeDescriptor) -> Self {
        self.input(InputSlot::Second, input)
    }

    /// Constrains the third input.
    #[must_use]
    pub fn third_input(self, input: TypeDescriptor) -> Self {
        self.input(InputSlot::Third, input)
    }

    /// Constrains the return type.
    #[must_use]
    pub fn return_type(mut self, return_type: TypeDescriptor) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Constrains the throwing flag.
    #[must_use]
    pub const fn throwing(mut self, throwing: bool) -> Self {
        self.throwing = Some(throwing);
        self
    }

    /// Searches the native tier first.
    #[must_use]
    pub const fn prefer_native(mut self, prefer_native: bool) -> Self {
        self.prefer_native = prefer_native;
        self
    }

    /// Whether the native tier is searched first.
    #[must_use]
    pub const fn prefers_native(&self) -> bool {
        self.prefer_native
    }

    /// Checks that the constraints are consistent.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyKinds`] for a kind constraint listing nothing
    /// - [`SearchError::InvalidArity`] for an arity above [`MAX_ARITY`]
    /// - [`SearchError::ArityNotAdmitted`] when no constrained kind can
    ///   have the constrained arity
    /// - [`SearchError::InputBeyondArity`] for an input constrained past
    ///   the constrained arity
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.kinds.as_ref().is_some_and(Vec::is_empty) {
            return Err(SearchError::EmptyKinds);
        }
        let Some(arity) = self.arity else {
            return Ok(());
        };
        if arity > MAX_ARITY {
            return Err(SearchError::InvalidArity {
                arity,
                max: MAX_ARITY,
            });
        }
        if let Some(kinds) = &self.kinds
            && let Some(kind) = kinds.first()
            && !kinds.iter().any(|kind| kind.admits_arity(arity))
        {
            return Err(SearchError::ArityNotAdmitted { kind: *kind, arity });
        }
        match InputSlot::ALL
            .into_iter()
            .find(|slot| slot.position() > arity && self.inputs[slot_index(*slot)].is_some())
        {
            Some(slot) => Err(SearchError::InputBeyondArity { slot, arity }),
            None => Ok(()),
        }
    }

    /// Whether `descriptor` satisfies every constraint.
    #[must_use]
    pub fn matches(&self, descriptor: &LambdaDescriptor) -> bool {
        self.kinds.as_ref().is_none_or(|kinds| {
            descriptor.kind().is_some_and(|kind| kinds.contains(&kind))
        }) && self
            .arity
            .is_none_or(|arity| descriptor.arity() == Some(arity))
            && InputSlot::ALL.into_iter().all(|slot| {
                self.inputs[slot_index(slot)]
                    .as_ref()
                    .is_none_or(|input| descriptor.input(slot) == Some(input))
            })
            && self
                .return_type
                .as_ref()
                .is_none_or(|return_type| descriptor.return_type() == Some(return_type))
            && self
                .throwing
                .is_none_or(|throwing| descriptor.throwing() == Some(throwing))
    }
}

const fn slot_index(slot: InputSlot) -> usize {
    match slot {
        InputSlot::First => 0,
        InputSlot::Second => 1,
        InputSlot::Third => 2,
    }
}

/// The first descriptor matching `query`.
///
/// # Errors
///
/// Any error of [`LambdaQuery::validate`]. A miss is `Ok(None)`.
pub fn search<'cache>(
    cache: &'cache LambdaCache,
    query: &LambdaQuery,
) -> Result<Option<&'cache LambdaDescriptor>, SearchError> {
    query.validate()?;
    let native = if query.prefer_native {
        cache.natives().iter().find(|descriptor| query.matches(descriptor))
    } else {
        None
    };
    Ok(native.or_else(|| cache.iter().find(|descriptor| query.matches(descriptor))))
}

/// Every descriptor matching `query`, in insertion order.
///
/// With native preference the native matches are returned alone when there
/// are any; otherwise all matches are.
///
/// # Errors
///
/// Any error of [`LambdaQuery::validate`].
pub fn search_all<'cache>(
    cache: &'cache LambdaCache,
    query: &LambdaQuery,
) -> Result<Vec<&'cache LambdaDescriptor>, SearchError> {
    query.validate()?;
    if query.prefer_native {
        let natives: Vec<&LambdaDescriptor> = cache
            .natives()
            .iter()
            .filter(|descriptor| query.matches(descriptor))
            .collect();
        if !natives.is_empty() {
            return Ok(natives);
        }
    }
    Ok(cache
        .iter()
        .filter(|descriptor| query.matches(descriptor))
        .collect())
}

/// The descriptor shaped like `template` but returning `return_type`.
///
/// # Errors
///
/// Any error of [`LambdaQuery::validate`] for the derived query.
pub fn search_by_return_type<'cache>(
    cache: &'cache LambdaCache,
    template: &LambdaDescriptor,
    return_type: TypeDescriptor,
    prefer_native: bool,
) -> Result<Option<&'cache LambdaDescriptor>, SearchError> {
    let query = LambdaQuery::like(template)
        .return_type(return_type)
        .prefer_native(prefer_native);
    search(cache, &query)
}

/// The descriptor shaped like `template` but taking `first_input` first.
///
/// # Errors
///
/// Any error of [`LambdaQuery::validate`] for the derived query.
pub fn search_by_first_input_type<'cache>(
    cache: &'cache LambdaCache,
    template: &LambdaDescriptor,
    first_input: TypeDescriptor,
    prefer_native: bool,
) -> Result<Option<&'cache LambdaDescriptor>, SearchError> {
    let query = LambdaQuery::like(template)
        .first_input(first_input)
        .prefer_native(prefer_native);
    search(cache, &query)
}

const VALUE_KINDS: [LambdaKind; 3] = [
    LambdaKind::Function,
    LambdaKind::Operator,
    LambdaKind::Predicate,
];

/// The interface an `andThen` on `descriptor` produces when the appended
/// step returns `return_type`.
///
/// The target keeps the arity, the inputs and the throwing flag and may
/// change kind within its family: functions, operators and predicates
/// retarget to each other, suppliers stay suppliers. Consumers, runnables
/// and comparators have no such target. Native targets are preferred.
///
/// Generic inputs are matched by slot, so the target of a
/// `BinaryOperator<T>` is looked up with inputs `T, U`.
///
/// # Errors
///
/// Any error of [`LambdaQuery::validate`] for the derived query.
pub fn and_then_target<'cache>(
    cache: &'cache LambdaCache,
    descriptor: &LambdaDescriptor,
    return_type: TypeDescriptor,
) -> Result<Option<&'cache LambdaDescriptor>, SearchError> {
    let kinds: &[LambdaKind] = match descriptor.kind() {
        Some(LambdaKind::Supplier) => &[LambdaKind::Supplier],
        Some(LambdaKind::Function | LambdaKind::Operator | LambdaKind::Predicate) => &VALUE_KINDS,
        _ => return Ok(None),
    };
    let mut query = LambdaQuery::new()
        .any_of_kinds(kinds.iter().copied())
        .return_type(return_type)
        .prefer_native(true);
    if let Some(arity) = descriptor.arity() {
        query = query.arity(arity);
    }
    if let Some(throwing) = descriptor.throwing() {
        query = query.throwing(throwing);
    }
    for slot in InputSlot::ALL {
        if let Some(input) = descriptor.input(slot) {
            query = query.input(slot, input.renamed(slot.placeholder()));
        }
    }
    search(cache, &query)
}

/// The single-input interface a `compose` on `descriptor` prepends when
/// the prepended step takes `input`: it maps `input` to `descriptor`'s
/// first input type.
///
/// The target is a function, operator or predicate of arity one with
/// `descriptor`'s throwing flag. Native targets are preferred.
/// Descriptors without inputs have no target.
///
/// # Errors
///
/// Any error of [`LambdaQuery::validate`] for the derived query.
pub fn compose_target<'cache>(
    cache: &'cache LambdaCache,
    descriptor: &LambdaDescriptor,
    input: TypeDescriptor,
) -> Result<Option<&'cache LambdaDescriptor>, SearchError> {
    let Some(first) = descriptor.first_input() else {
        return Ok(None);
    };
    let mut query = LambdaQuery::new()
        .any_of_kinds(VALUE_KINDS)
        .arity(1)
        .first_input(input.renamed(InputSlot::First.placeholder()))
        .return_type(first.renamed('R'))
        .prefer_native(true);
    if let Some(throwing) = descriptor.throwing() {
        query = query.throwing(throwing);
    }
    search(cache, &query)
}

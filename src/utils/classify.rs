//! Shape predicates over descriptors.
//!
//! Every predicate answers `false` when the fields it looks at are not yet
//! populated, so they are safe to call on partial descriptors.

use crate::model::{LambdaDescriptor, LambdaKind, PrimitiveType, TypeDescriptor};

fn is_kind(descriptor: &LambdaDescriptor, kind: LambdaKind) -> bool {
    descriptor.kind() == Some(kind)
}

/// Whether the descriptor is a `Comparator`.
#[must_use]
pub fn is_comparator(descriptor: &LambdaDescriptor) -> bool {
    is_kind(descriptor, LambdaKind::Comparator)
}

/// Whether the descriptor is a `Consumer`.
#[must_use]
pub fn is_consumer(descriptor: &LambdaDescriptor) -> bool {
    is_kind(descriptor, LambdaKind::Consumer)
}

/// Whether the descriptor is a `Function`.
#[must_use]
pub fn is_function(descriptor: &LambdaDescriptor) -> bool {
    is_kind(descriptor, LambdaKind::Function)
}

/// Whether the descriptor is an `Operator`.
#[must_use]
pub fn is_operator(descriptor: &LambdaDescriptor) -> bool {
    is_kind(descriptor, LambdaKind::Operator)
}

/// Whether the descriptor is a `Predicate`.
#[must_use]
pub fn is_predicate(descriptor: &LambdaDescriptor) -> bool {
    is_kind(descriptor, LambdaKind::Predicate)
}

/// Whether the descriptor is a `Runnable`.
#[must_use]
pub fn is_runnable(descriptor: &LambdaDescriptor) -> bool {
    is_kind(descriptor, LambdaKind::Runnable)
}

/// Whether the descriptor is a `Supplier`.
#[must_use]
pub fn is_supplier(descriptor: &LambdaDescriptor) -> bool {
    is_kind(descriptor, LambdaKind::Supplier)
}

/// Whether the descriptor's method may throw.
#[must_use]
pub fn is_throwing(descriptor: &LambdaDescriptor) -> bool {
    descriptor.throwing() == Some(true)
}

/// Whether the host platform defines the descriptor.
#[must_use]
pub fn is_native(descriptor: &LambdaDescriptor) -> bool {
    descriptor.native() == Some(true)
}

/// Whether the return type is primitive.
#[must_use]
pub fn has_primitive_return(descriptor: &LambdaDescriptor) -> bool {
    descriptor
        .return_type()
        .is_some_and(TypeDescriptor::is_primitive)
}

/// Whether the return type is generic.
#[must_use]
pub fn has_generic_return(descriptor: &LambdaDescriptor) -> bool {
    descriptor
        .return_type()
        .is_some_and(TypeDescriptor::is_generic)
}

/// Whether the return type is `void`.
#[must_use]
pub fn has_void_return(descriptor: &LambdaDescriptor) -> bool {
    descriptor.return_type().is_some_and(TypeDescriptor::is_void)
}

/// The number of primitive inputs.
#[must_use]
pub fn primitive_input_count(descriptor: &LambdaDescriptor) -> usize {
    descriptor
        .inputs()
        .into_iter()
        .filter(|input| input.is_primitive())
        .count()
}

/// The number of generic inputs.
#[must_use]
pub fn generic_input_count(descriptor: &LambdaDescriptor) -> usize {
    descriptor
        .inputs()
        .into_iter()
        .filter(|input| input.is_generic())
        .count()
}

/// Whether there is at least one input and every input is primitive.
#[must_use]
pub fn all_inputs_primitive(descriptor: &LambdaDescriptor) -> bool {
    let inputs = descriptor.inputs();
    !inputs.is_empty() && inputs.iter().all(|input| input.is_primitive())
}

/// Whether no input is primitive. True for zero-arity descriptors.
#[must_use]
pub fn all_inputs_generic(descriptor: &LambdaDescriptor) -> bool {
    descriptor.inputs().iter().all(|input| input.is_generic())
}

/// Whether generic and primitive inputs are mixed.
#[must_use]
pub fn has_mixed_inputs(descriptor: &LambdaDescriptor) -> bool {
    primitive_input_count(descriptor) > 0 && generic_input_count(descriptor) > 0
}

/// The primitive of the primitive inputs, if any.
///
/// The enumeration never mixes two different primitives among the inputs,
/// so the last primitive input speaks for all of them.
#[must_use]
pub fn input_primitive(descriptor: &LambdaDescriptor) -> Option<PrimitiveType> {
    descriptor
        .inputs()
        .into_iter()
        .rev()
        .find_map(TypeDescriptor::as_primitive)
}

/// Whether every input has the return type's identity.
///
/// Generic slots compare by identity only, so `T -> R` counts as
/// self-returning while `int -> long` does not. Zero-arity descriptors
/// never do.
#[must_use]
pub fn is_self_returning(descriptor: &LambdaDescriptor) -> bool {
    let Some(return_type) = descriptor.return_type() else {
        return false;
    };
    let inputs = descriptor.inputs();
    !return_type.is_void()
        && !inputs.is_empty()
        && inputs
            .iter()
            .all(|input| input.identity() == return_type.identity())
}

/// Whether primitive inputs map to a primitive result.
#[must_use]
pub fn is_conversion(descriptor: &LambdaDescriptor) -> bool {
    all_inputs_primitive(descriptor) && has_primitive_return(descriptor)
}

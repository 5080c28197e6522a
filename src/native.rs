//! The functional interfaces the host platform already ships.
//!
//! Instead of probing the platform at run time, the generator consults a
//! fixed table of the platform's own functional interfaces, keyed by kind,
//! arity and simple name. Because the derived simple name already encodes
//! the kind, the arity and every slot's type, a hit in this table means the
//! generated descriptor and the platform interface describe the same shape.
//!
//! Rules applied by [`is_native`]:
//!
//! - a throwing descriptor is never native;
//! - `Comparator` and `Runnable` are always native;
//! - anything else is native exactly when the table has an entry for it.

use crate::model::LambdaKind;
use crate::model::LambdaKind::{
    Comparator, Consumer, Function, Operator, Predicate, Runnable, Supplier,
};

/// A functional interface defined by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeEquivalent {
    /// The shape of the interface.
    pub kind: LambdaKind,
    /// The number of inputs.
    pub arity: u8,
    /// The simple name, identical to the generated display name.
    pub name: &'static str,
    /// The package the platform defines it in.
    pub package: &'static str,
}

impl NativeEquivalent {
    /// `package.Name`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }
}

const FUNCTION_PACKAGE: &str = "java.util.function";

const fn entry(kind: LambdaKind, arity: u8, name: &'static str) -> NativeEquivalent {
    NativeEquivalent {
        kind,
        arity,
        name,
        package: FUNCTION_PACKAGE,
    }
}

/// Every functional interface of the host platform the generator knows of.
pub const NATIVE_TABLE: &[NativeEquivalent] = &[
    NativeEquivalent {
        kind: Comparator,
        arity: 2,
        name: "Comparator",
        package: "java.util",
    },
    NativeEquivalent {
        kind: Runnable,
        arity: 0,
        name: "Runnable",
        package: "java.lang",
    },
    entry(Consumer, 1, "Consumer"),
    entry(Consumer, 1, "DoubleConsumer"),
    entry(Consumer, 1, "IntConsumer"),
    entry(Consumer, 1, "LongConsumer"),
    entry(Consumer, 2, "BiConsumer"),
    entry(Consumer, 2, "ObjDoubleConsumer"),
    entry(Consumer, 2, "ObjIntConsumer"),
    entry(Consumer, 2, "ObjLongConsumer"),
    entry(Function, 1, "Function"),
    entry(Function, 1, "DoubleFunction"),
    entry(Function, 1, "DoubleToIntFunction"),
    entry(Function, 1, "DoubleToLongFunction"),
    entry(Function, 1, "IntFunction"),
    entry(Function, 1, "IntToDoubleFunction"),
    entry(Function, 1, "IntToLongFunction"),
    entry(Function, 1, "LongFunction"),
    entry(Function, 1, "LongToDoubleFunction"),
    entry(Function, 1, "LongToIntFunction"),
    entry(Function, 1, "ToDoubleFunction"),
    entry(Function, 1, "ToIntFunction"),
    entry(Function, 1, "ToLongFunction"),
    entry(Function, 2, "BiFunction"),
    entry(Function, 2, "ToDoubleBiFunction"),
    entry(Function, 2, "ToIntBiFunction"),
    entry(Function, 2, "ToLongBiFunction"),
    entry(Operator, 1, "UnaryOperator"),
    entry(Operator, 1, "DoubleUnaryOperator"),
    entry(Operator, 1, "IntUnaryOperator"),
    entry(Operator, 1, "LongUnaryOperator"),
    entry(Operator, 2, "BinaryOperator"),
    entry(Operator, 2, "DoubleBinaryOperator"),
    entry(Operator, 2, "IntBinaryOperator"),
    entry(Operator, 2, "LongBinaryOperator"),
    entry(Predicate, 1, "Predicate"),
    entry(Predicate, 1, "DoublePredicate"),
    entry(Predicate, 1, "IntPredicate"),
    entry(Predicate, 1, "LongPredicate"),
    entry(Predicate, 2, "BiPredicate"),
    entry(Supplier, 0, "Supplier"),
    entry(Supplier, 0, "BooleanSupplier"),
    entry(Supplier, 0, "DoubleSupplier"),
    entry(Supplier, 0, "IntSupplier"),
    entry(Supplier, 0, "LongSupplier"),
];

/// Looks up the platform interface with this kind, arity and simple name.
///
/// # Examples
///
/// ```rust
/// use lambdagen::model::LambdaKind;
/// use lambdagen::native::lookup;
///
/// let native = lookup(LambdaKind::Function, 1, "IntFunction").unwrap();
/// assert_eq!(native.qualified_name(), "java.util.function.IntFunction");
///
/// assert!(lookup(LambdaKind::Function, 2, "BiIntFunction").is_none());
/// ```
#[must_use]
pub fn lookup(kind: LambdaKind, arity: u8, name: &str) -> Option<&'static NativeEquivalent> {
    NATIVE_TABLE
        .iter()
        .find(|native| native.kind == kind && native.arity == arity && native.name == name)
}

/// Whether a descriptor with these properties exists on the host platform.
#[must_use]
pub fn is_native(kind: LambdaKind, arity: u8, name: &str, throwing: bool) -> bool {
    if throwing {
        return false;
    }
    matches!(kind, Comparator | Runnable) || lookup(kind, arity, name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn table_names_are_unique() {
        let names: HashSet<&str> = NATIVE_TABLE.iter().map(|native| native.name).collect();
        assert_eq!(names.len(), NATIVE_TABLE.len());
    }

    #[rstest]
    fn table_entries_respect_kind_arity() {
        for native in NATIVE_TABLE {
            assert!(
                native.kind.admits_arity(native.arity),
                "{} has illegal arity {}",
                native.name,
                native.arity
            );
        }
    }

    #[rstest]
    #[case(Function, 1, "IntFunction", false, true)]
    #[case(Function, 1, "IntFunction", true, false)]
    #[case(Function, 1, "ByteFunction", false, false)]
    #[case(Comparator, 2, "Comparator", false, true)]
    #[case(Comparator, 2, "ThrowableComparator", true, false)]
    #[case(Runnable, 0, "Runnable", false, true)]
    #[case(Operator, 2, "BinaryOperator", false, true)]
    #[case(Function, 2, "BinaryOperator", false, false)]
    fn native_rules(
        #[case] kind: LambdaKind,
        #[case] arity: u8,
        #[case] name: &str,
        #[case] throwing: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(is_native(kind, arity, name, throwing), expected);
    }

    #[rstest]
    fn comparator_lives_outside_function_package() {
        let comparator = lookup(Comparator, 2, "Comparator").unwrap();
        assert_eq!(comparator.qualified_name(), "java.util.Comparator");
    }
}

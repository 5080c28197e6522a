use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

use super::PrimitiveType;
use super::TypeIdentity;

/// The functional shape of a generated interface.
///
/// The kind fixes the abstract method's base name and, for most shapes,
/// the arity or return type as well:
///
/// | Kind         | Arity   | Return    | Method    |
/// |--------------|---------|-----------|-----------|
/// | `Comparator` | 2       | `int`     | `compare` |
/// | `Consumer`   | 1..=3   | `void`    | `accept`  |
/// | `Function`   | 1..=3   | any       | `apply`   |
/// | `Operator`   | 1..=3   | = inputs  | `apply`   |
/// | `Predicate`  | 1..=3   | `boolean` | `test`    |
/// | `Runnable`   | 0       | `void`    | `run`     |
/// | `Supplier`   | 0       | any       | `get`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LambdaKind {
    /// Compares two values.
    Comparator,
    /// Accepts values and returns nothing.
    Consumer,
    /// Maps inputs to a result.
    Function,
    /// A function whose inputs and result share one type.
    Operator,
    /// Tests inputs, yielding `boolean`.
    Predicate,
    /// Takes and returns nothing.
    Runnable,
    /// Takes nothing and produces a result.
    Supplier,
}

impl LambdaKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Comparator,
        Self::Consumer,
        Self::Function,
        Self::Operator,
        Self::Predicate,
        Self::Runnable,
        Self::Supplier,
    ];

    /// The kind's name as it appears at the end of a display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Comparator => "Comparator",
            Self::Consumer => "Consumer",
            Self::Function => "Function",
            Self::Operator => "Operator",
            Self::Predicate => "Predicate",
            Self::Runnable => "Runnable",
            Self::Supplier => "Supplier",
        }
    }

    /// The lowercase package segment for this kind.
    #[must_use]
    pub const fn package_segment(self) -> &'static str {
        match self {
            Self::Comparator => "comparator",
            Self::Consumer => "consumer",
            Self::Function => "function",
            Self::Operator => "operator",
            Self::Predicate => "predicate",
            Self::Runnable => "runnable",
            Self::Supplier => "supplier",
        }
    }

    /// The base name of the abstract method, before any suffix.
    #[must_use]
    pub const fn method_base(self) -> &'static str {
        match self {
            Self::Comparator => "compare",
            Self::Consumer => "accept",
            Self::Function | Self::Operator => "apply",
            Self::Predicate => "test",
            Self::Runnable => "run",
            Self::Supplier => "get",
        }
    }

    /// The arity this kind forces, if any.
    #[must_use]
    pub const fn fixed_arity(self) -> Option<u8> {
        match self {
            Self::Comparator => Some(2),
            Self::Runnable | Self::Supplier => Some(0),
            Self::Consumer | Self::Function | Self::Operator | Self::Predicate => None,
        }
    }

    /// The return type this kind forces, if any.
    #[must_use]
    pub const fn forced_return(self) -> Option<TypeIdentity> {
        match self {
            Self::Comparator => Some(TypeIdentity::Primitive(PrimitiveType::Int)),
            Self::Consumer | Self::Runnable => Some(TypeIdentity::Void),
            Self::Predicate => Some(TypeIdentity::Primitive(PrimitiveType::Boolean)),
            Self::Function | Self::Operator | Self::Supplier => None,
        }
    }

    /// Whether a primitive return adds an `As<Primitive>` method suffix.
    #[must_use]
    pub const fn has_typed_method(self) -> bool {
        matches!(self, Self::Function | Self::Operator | Self::Supplier)
    }

    /// Whether `arity` is legal for this kind.
    #[must_use]
    pub const fn admits_arity(self, arity: u8) -> bool {
        match self.fixed_arity() {
            Some(fixed) => fixed == arity,
            None => arity >= 1 && arity <= super::MAX_ARITY,
        }
    }
}

impl fmt::Display for LambdaKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.pad(self.name())
    }
}

impl FromStr for LambdaKind {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::new("lambda kind", input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LambdaKind::Comparator, "compare")]
    #[case(LambdaKind::Consumer, "accept")]
    #[case(LambdaKind::Function, "apply")]
    #[case(LambdaKind::Operator, "apply")]
    #[case(LambdaKind::Predicate, "test")]
    #[case(LambdaKind::Runnable, "run")]
    #[case(LambdaKind::Supplier, "get")]
    fn method_base_per_kind(#[case] kind: LambdaKind, #[case] expected: &str) {
        assert_eq!(kind.method_base(), expected);
    }

    #[rstest]
    #[case(LambdaKind::Comparator, 2, true)]
    #[case(LambdaKind::Comparator, 1, false)]
    #[case(LambdaKind::Runnable, 0, true)]
    #[case(LambdaKind::Supplier, 1, false)]
    #[case(LambdaKind::Function, 0, false)]
    #[case(LambdaKind::Function, 3, true)]
    #[case(LambdaKind::Consumer, 4, false)]
    fn admits_arity_follows_fixed_arity(
        #[case] kind: LambdaKind,
        #[case] arity: u8,
        #[case] expected: bool,
    ) {
        assert_eq!(kind.admits_arity(arity), expected);
    }

    #[rstest]
    fn forced_returns() {
        assert_eq!(
            LambdaKind::Comparator.forced_return(),
            Some(TypeIdentity::Primitive(PrimitiveType::Int))
        );
        assert_eq!(LambdaKind::Consumer.forced_return(), Some(TypeIdentity::Void));
        assert_eq!(LambdaKind::Runnable.forced_return(), Some(TypeIdentity::Void));
        assert_eq!(
            LambdaKind::Predicate.forced_return(),
            Some(TypeIdentity::Primitive(PrimitiveType::Boolean))
        );
        assert_eq!(LambdaKind::Function.forced_return(), None);
        assert_eq!(LambdaKind::Supplier.forced_return(), None);
    }

    #[rstest]
    #[case("Function", LambdaKind::Function)]
    #[case("function", LambdaKind::Function)]
    #[case("OPERATOR", LambdaKind::Operator)]
    #[case(" supplier ", LambdaKind::Supplier)]
    fn parses_names_case_insensitively(#[case] input: &str, #[case] expected: LambdaKind) {
        assert_eq!(input.parse::<LambdaKind>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_kind() {
        assert!("Callable".parse::<LambdaKind>().is_err());
    }
}

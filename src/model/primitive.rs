use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// One of the eight scalar types of the host platform.
///
/// Variants are declared in the order the pipeline enumerates them, so
/// iterating [`PrimitiveType::ALL`] yields a stable fan-out order.
///
/// # Examples
///
/// ```rust
/// use lambdagen::model::PrimitiveType;
///
/// assert_eq!(PrimitiveType::Int.keyword(), "int");
/// assert_eq!(PrimitiveType::Int.capitalized(), "Int");
/// assert_eq!("double".parse::<PrimitiveType>().unwrap(), PrimitiveType::Double);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PrimitiveType {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `char`
    Char,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
}

impl PrimitiveType {
    /// Every primitive type, in enumeration order.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    /// The source-level keyword, e.g. `"int"`.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// The keyword with its first letter upper-cased, used in derived names.
    #[must_use]
    pub const fn capitalized(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Char => "Char",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
        }
    }

    /// Looks a primitive up by its keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|primitive| primitive.keyword() == keyword)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.keyword())
    }
}

impl FromStr for PrimitiveType {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(input.trim()).ok_or_else(|| ParseError::new("primitive type", input))
    }
}

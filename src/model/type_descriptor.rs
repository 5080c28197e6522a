use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ParseError;
#[cfg(feature = "serde")]
use crate::error::TypeSlotError;

use super::PrimitiveType;

/// What a type slot stands for, independent of its display name.
///
/// Generic slots all share the [`TypeIdentity::Generic`] identity; the
/// placeholder letter lives in [`TypeDescriptor::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum TypeIdentity {
    /// A scalar type of the host platform.
    Primitive(PrimitiveType),
    /// The absence of a result. Only ever a return type.
    Void,
    /// An unbound type parameter.
    Generic,
}

impl TypeIdentity {
    /// The primitive behind this identity, if any.
    #[must_use]
    pub const fn primitive(self) -> Option<PrimitiveType> {
        match self {
            Self::Primitive(primitive) => Some(primitive),
            Self::Void | Self::Generic => None,
        }
    }

    /// Returns `true` for [`TypeIdentity::Primitive`].
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns `true` for [`TypeIdentity::Generic`].
    #[must_use]
    pub const fn is_generic(self) -> bool {
        matches!(self, Self::Generic)
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(primitive) => formatter.write_str(primitive.keyword()),
            Self::Void => formatter.write_str("void"),
            Self::Generic => formatter.write_str("generic"),
        }
    }
}

impl FromStr for TypeIdentity {
    type Err = ParseError;

    /// Accepts a primitive keyword, `void`, `generic`, or a single
    /// upper-case placeholder letter such as `T`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        match trimmed {
            "void" => Ok(Self::Void),
            "generic" => Ok(Self::Generic),
            _ if is_placeholder(trimmed) => Ok(Self::Generic),
            _ => PrimitiveType::from_keyword(trimmed)
                .map(Self::Primitive)
                .ok_or_else(|| ParseError::new("type", input)),
        }
    }
}

impl From<TypeIdentity> for String {
    fn from(identity: TypeIdentity) -> Self {
        identity.to_string()
    }
}

impl TryFrom<String> for TypeIdentity {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn is_placeholder(input: &str) -> bool {
    let mut characters = input.chars();
    matches!(
        (characters.next(), characters.next()),
        (Some(letter), None) if letter.is_ascii_uppercase()
    )
}

/// One argument, return or throwable slot of a [`LambdaDescriptor`].
///
/// Equality and hashing consider only the identity and display name. The
/// index is cosmetic: for primitive inputs it is the ordinal among the
/// primitive inputs (used to number `value1`, `value2`, ...), for generic
/// inputs the slot number, and `0` for return and throwable slots.
///
/// # Examples
///
/// ```rust
/// use lambdagen::model::{PrimitiveType, TypeDescriptor};
///
/// let first = TypeDescriptor::primitive(PrimitiveType::Int, 1);
/// let second = TypeDescriptor::primitive(PrimitiveType::Int, 2);
/// assert_eq!(first, second);
///
/// let generic = TypeDescriptor::generic('T', 1);
/// assert_eq!(generic.name(), "T");
/// assert_eq!(generic.parameter_name(), "t");
/// assert_ne!(generic, TypeDescriptor::generic('U', 1));
/// ```
///
/// [`LambdaDescriptor`]: super::LambdaDescriptor
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTypeDescriptor")
)]
pub struct TypeDescriptor {
    identity: TypeIdentity,
    name: String,
    index: u8,
    parameter_name: String,
}

impl TypeDescriptor {
    /// Creates a primitive slot.
    #[must_use]
    pub fn primitive(primitive: PrimitiveType, index: u8) -> Self {
        Self {
            identity: TypeIdentity::Primitive(primitive),
            name: primitive.keyword().to_owned(),
            index,
            parameter_name: "value".to_owned(),
        }
    }

    /// Creates a generic slot named by a single upper-case placeholder.
    ///
    /// # Panics
    ///
    /// Panics if `placeholder` is not an ASCII upper-case letter.
    #[must_use]
    pub fn generic(placeholder: char, index: u8) -> Self {
        assert!(
            placeholder.is_ascii_uppercase(),
            "generic placeholder must be an upper-case letter, got `{placeholder}`"
        );
        Self {
            identity: TypeIdentity::Generic,
            name: placeholder.to_string(),
            index,
            parameter_name: placeholder.to_ascii_lowercase().to_string(),
        }
    }

    /// The `void` return slot.
    #[must_use]
    pub fn void() -> Self {
        Self {
            identity: TypeIdentity::Void,
            name: "void".to_owned(),
            index: 0,
            parameter_name: "void".to_owned(),
        }
    }

    /// A fresh throwable slot, the generic `X` bounded by the platform's
    /// throwable type.
    #[must_use]
    pub fn throwable() -> Self {
        Self {
            identity: TypeIdentity::Generic,
            name: "X".to_owned(),
            index: 0,
            parameter_name: "throwable".to_owned(),
        }
    }

    /// Builds a slot from an identity, using `placeholder` when the identity
    /// is generic.
    #[must_use]
    pub fn from_identity(identity: TypeIdentity, placeholder: char, index: u8) -> Self {
        match identity {
            TypeIdentity::Primitive(primitive) => Self::primitive(primitive, index),
            TypeIdentity::Void => Self::void(),
            TypeIdentity::Generic => Self::generic(placeholder, index),
        }
    }

    /// A copy of this slot carrying a different placeholder.
    ///
    /// Non-generic slots are copied unchanged.
    #[must_use]
    pub fn renamed(&self, placeholder: char) -> Self {
        match self.identity {
            TypeIdentity::Generic => Self::generic(placeholder, self.index),
            TypeIdentity::Primitive(_) | TypeIdentity::Void => self.clone(),
        }
    }

    /// A copy of this slot carrying a different index.
    #[must_use]
    pub fn with_index(&self, index: u8) -> Self {
        Self {
            index,
            ..self.clone()
        }
    }

    /// The slot's identity.
    #[must_use]
    pub const fn identity(&self) -> TypeIdentity {
        self.identity
    }

    /// The display name: a primitive keyword, `void`, or a placeholder.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cosmetic slot index.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// The short lowercase stem for generated parameter identifiers.
    #[must_use]
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    /// The primitive behind this slot, if any.
    #[must_use]
    pub const fn as_primitive(&self) -> Option<PrimitiveType> {
        self.identity.primitive()
    }

    /// Returns `true` for primitive slots.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        self.identity.is_primitive()
    }

    /// Returns `true` for generic slots.
    #[must_use]
    pub const fn is_generic(&self) -> bool {
        self.identity.is_generic()
    }

    /// Returns `true` for the `void` slot.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self.identity, TypeIdentity::Void)
    }
}

/// The wire form of a [`TypeDescriptor`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTypeDescriptor {
    identity: TypeIdentity,
    name: String,
    #[serde(default)]
    index: u8,
    parameter_name: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTypeDescriptor> for TypeDescriptor {
    type Error = TypeSlotError;

    fn try_from(raw: RawTypeDescriptor) -> Result<Self, Self::Error> {
        let mismatch = || TypeSlotError::NameMismatch {
            identity: raw.identity,
            name: raw.name.clone(),
        };
        let slot = match raw.identity {
            TypeIdentity::Primitive(primitive) if raw.name == primitive.keyword() => {
                Self::primitive(primitive, raw.index)
            }
            TypeIdentity::Void if raw.name == "void" => Self::void(),
            TypeIdentity::Generic if is_placeholder(&raw.name) => {
                let placeholder = raw.name.chars().next().ok_or_else(mismatch)?;
                Self::generic(placeholder, raw.index)
            }
            _ => return Err(mismatch()),
        };
        match raw.parameter_name {
            None => Ok(slot),
            Some(parameter_name) if is_parameter_name(&parameter_name) => Ok(Self {
                parameter_name,
                ..slot
            }),
            Some(parameter_name) => Err(TypeSlotError::InvalidParameterName(parameter_name)),
        }
    }
}

#[cfg(feature = "serde")]
fn is_parameter_name(input: &str) -> bool {
    let mut characters = input.chars();
    characters
        .next()
        .is_some_and(|first| first.is_ascii_lowercase())
        && characters.all(|character| character.is_ascii_alphanumeric())
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity && self.name == other.name
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

impl FromStr for TypeDescriptor {
    type Err = ParseError;

    /// Parses `int`, `void` or a placeholder letter such as `T`.
    ///
    /// Parsed slots carry index `1`; the index never affects equality.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if is_placeholder(trimmed) {
            return trimmed
                .chars()
                .next()
                .map(|placeholder| Self::generic(placeholder, 1))
                .ok_or_else(|| ParseError::new("type", input));
        }
        match trimmed.parse::<TypeIdentity>()? {
            TypeIdentity::Primitive(primitive) => Ok(Self::primitive(primitive, 1)),
            TypeIdentity::Void => Ok(Self::void()),
            TypeIdentity::Generic => Err(ParseError::new("type placeholder", input)),
        }
    }
}

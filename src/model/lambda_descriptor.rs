use std::fmt;

use super::{LambdaKind, TypeDescriptor};
use crate::native::{self, NativeEquivalent};

/// The largest arity any generated interface has.
pub const MAX_ARITY: u8 = 3;

/// One of the three input positions of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputSlot {
    /// The first input.
    First,
    /// The second input.
    Second,
    /// The third input.
    Third,
}

impl InputSlot {
    /// All slots in positional order.
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// The 1-based position of this slot.
    #[must_use]
    pub const fn position(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// The generic placeholder an input stage assigns to this slot.
    #[must_use]
    pub const fn placeholder(self) -> char {
        match self {
            Self::First => 'T',
            Self::Second => 'U',
            Self::Third => 'V',
        }
    }

    /// The slot immediately before this one.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::First => None,
            Self::Second => Some(Self::First),
            Self::Third => Some(Self::Second),
        }
    }

    /// The descriptor field backing this slot.
    #[must_use]
    pub const fn field(self) -> DescriptorField {
        match self {
            Self::First => DescriptorField::FirstInput,
            Self::Second => DescriptorField::SecondInput,
            Self::Third => DescriptorField::ThirdInput,
        }
    }
}

/// A field of [`LambdaDescriptor`] that some stage populates.
///
/// Stages declare the fields they require and the fields they provide in
/// terms of this enum; the pipeline checks the declarations against each
/// other when it is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DescriptorField {
    /// [`LambdaDescriptor::kind`]
    Kind,
    /// [`LambdaDescriptor::arity`]
    Arity,
    /// [`LambdaDescriptor::return_type`]
    ReturnType,
    /// [`LambdaDescriptor::first_input`]
    FirstInput,
    /// [`LambdaDescriptor::second_input`]
    SecondInput,
    /// [`LambdaDescriptor::third_input`]
    ThirdInput,
    /// [`LambdaDescriptor::throwing`] and [`LambdaDescriptor::throwable`]
    Throwing,
    /// [`LambdaDescriptor::method_name`]
    MethodName,
    /// [`LambdaDescriptor::name`]
    Name,
    /// [`LambdaDescriptor::package`]
    Package,
    /// [`LambdaDescriptor::native`]
    Native,
}

impl DescriptorField {
    /// Every field, in the order the standard pipeline resolves them.
    pub const ALL: [Self; 11] = [
        Self::Kind,
        Self::Arity,
        Self::ReturnType,
        Self::FirstInput,
        Self::SecondInput,
        Self::ThirdInput,
        Self::Throwing,
        Self::MethodName,
        Self::Name,
        Self::Package,
        Self::Native,
    ];
}

impl fmt::Display for DescriptorField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Kind => "kind",
            Self::Arity => "arity",
            Self::ReturnType => "return type",
            Self::FirstInput => "first input",
            Self::SecondInput => "second input",
            Self::ThirdInput => "third input",
            Self::Throwing => "throwing flag",
            Self::MethodName => "method name",
            Self::Name => "name",
            Self::Package => "package",
            Self::Native => "native flag",
        };
        formatter.write_str(name)
    }
}

/// The metadata record for one generated interface.
///
/// A descriptor starts out empty and every pipeline stage fills in the
/// fields it owns on its own copy. The `with_*` methods consume the
/// descriptor and return it updated, so a stage that fans out clones once
/// per branch and never touches the value it was handed.
///
/// Cloning is a deep copy: all nested [`TypeDescriptor`]s own their data.
///
/// # Examples
///
/// ```rust
/// use lambdagen::model::{LambdaDescriptor, LambdaKind, PrimitiveType, TypeDescriptor};
///
/// let original = LambdaDescriptor::new()
///     .with_kind(LambdaKind::Function)
///     .with_arity(1)
///     .with_first_input(TypeDescriptor::generic('T', 1));
///
/// let branch = original
///     .clone()
///     .with_first_input(TypeDescriptor::primitive(PrimitiveType::Int, 1));
///
/// assert_eq!(original.first_input().unwrap().name(), "T");
/// assert_eq!(branch.first_input().unwrap().name(), "int");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LambdaDescriptor {
    kind: Option<LambdaKind>,
    arity: Option<u8>,
    first_input: Option<TypeDescriptor>,
    second_input: Option<TypeDescriptor>,
    third_input: Option<TypeDescriptor>,
    return_type: Option<TypeDescriptor>,
    throwing: Option<bool>,
    throwable: Option<TypeDescriptor>,
    method_name: Option<String>,
    name: Option<String>,
    package: Option<String>,
    native: Option<bool>,
}

impl LambdaDescriptor {
    /// Creates the empty seed descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The functional shape.
    #[must_use]
    pub const fn kind(&self) -> Option<LambdaKind> {
        self.kind
    }

    /// The number of inputs.
    #[must_use]
    pub const fn arity(&self) -> Option<u8> {
        self.arity
    }

    /// The first input slot.
    #[must_use]
    pub const fn first_input(&self) -> Option<&TypeDescriptor> {
        self.first_input.as_ref()
    }

    /// The second input slot.
    #[must_use]
    pub const fn second_input(&self) -> Option<&TypeDescriptor> {
        self.second_input.as_ref()
    }

    /// The third input slot.
    #[must_use]
    pub const fn third_input(&self) -> Option<&TypeDescriptor> {
        self.third_input.as_ref()
    }

    /// The input at `slot`.
    #[must_use]
    pub const fn input(&self, slot: InputSlot) -> Option<&TypeDescriptor> {
        match slot {
            InputSlot::First => self.first_input(),
            InputSlot::Second => self.second_input(),
            InputSlot::Third => self.third_input(),
        }
    }

    /// The populated inputs, in positional order.
    #[must_use]
    pub fn inputs(&self) -> Vec<&TypeDescriptor> {
        InputSlot::ALL
            .into_iter()
            .filter_map(|slot| self.input(slot))
            .collect()
    }

    /// The return slot.
    #[must_use]
    pub const fn return_type(&self) -> Option<&TypeDescriptor> {
        self.return_type.as_ref()
    }

    /// Whether the abstract method may throw.
    #[must_use]
    pub const fn throwing(&self) -> Option<bool> {
        self.throwing
    }

    /// The throwable slot, present exactly when `throwing` is `Some(true)`.
    #[must_use]
    pub const fn throwable(&self) -> Option<&TypeDescriptor> {
        self.throwable.as_ref()
    }

    /// The abstract method's name, e.g. `applyAsInt`.
    #[must_use]
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    /// The interface's simple name, e.g. `ObjIntToLongFunction`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The interface's package.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Whether the host platform already defines this interface.
    #[must_use]
    pub const fn native(&self) -> Option<bool> {
        self.native
    }

    /// `package.Name`, once both are derived.
    #[must_use]
    pub fn qualified_name(&self) -> Option<String> {
        match (self.package(), self.name()) {
            (Some(package), Some(name)) => Some(format!("{package}.{name}")),
            _ => None,
        }
    }

    /// The host platform's own interface, for native descriptors.
    #[must_use]
    pub fn native_equivalent(&self) -> Option<&'static NativeEquivalent> {
        if self.native != Some(true) {
            return None;
        }
        native::lookup(self.kind?, self.arity?, self.name()?)
    }

    /// The host platform's qualified name, for native descriptors.
    #[must_use]
    pub fn native_qualified_name(&self) -> Option<String> {
        self.native_equivalent()
            .map(NativeEquivalent::qualified_name)
    }

    /// Sets the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: LambdaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the arity.
    #[must_use]
    pub fn with_arity(mut self, arity: u8) -> Self {
        self.arity = Some(arity);
        self
    }

    /// Sets the input at `slot`.
    #[must_use]
    pub fn with_input(mut self, slot: InputSlot, input: TypeDescriptor) -> Self {
        match slot {
            InputSlot::First => self.first_input = Some(input),
            InputSlot::Second => self.second_input = Some(input),
            InputSlot::Third => self.third_input = Some(input),
        }
        self
    }

    /// Sets the first input.
    #[must_use]
    pub fn with_first_input(self, input: TypeDescriptor) -> Self {
        self.with_input(InputSlot::First, input)
    }

    /// Sets the second input.
    #[must_use]
    pub fn with_second_input(self, input: TypeDescriptor) -> Self {
        self.with_input(InputSlot::Second, input)
    }

    /// Sets the third input.
    #[must_use]
    pub fn with_third_input(self, input: TypeDescriptor) -> Self {
        self.with_input(InputSlot::Third, input)
    }

    /// Sets the return type.
    #[must_use]
    pub fn with_return_type(mut self, return_type: TypeDescriptor) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Marks the descriptor as non-throwing and clears the throwable slot.
    #[must_use]
    pub fn non_throwing(mut self) -> Self {
        self.throwing = Some(false);
        self.throwable = None;
        self
    }

    /// Marks the descriptor as throwing `throwable`.
    #[must_use]
    pub fn throwing_with(mut self, throwable: TypeDescriptor) -> Self {
        self.throwing = Some(true);
        self.throwable = Some(throwable);
        self
    }

    /// Sets the abstract method's name.
    #[must_use]
    pub fn with_method_name(mut self, method_name: impl Into<String>) -> Self {
        self.method_name = Some(method_name.into());
        self
    }

    /// Sets the simple name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the package.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Sets the native flag.
    #[must_use]
    pub fn with_native(mut self, native: bool) -> Self {
        self.native = Some(native);
        self
    }

    /// Whether `field` holds its final value.
    ///
    /// An input slot beyond the arity is resolved once the arity is known,
    /// because it stays empty for good.
    #[must_use]
    pub const fn is_resolved(&self, field: DescriptorField) -> bool {
        match field {
            DescriptorField::Kind => self.kind.is_some(),
            DescriptorField::Arity => self.arity.is_some(),
            DescriptorField::ReturnType => self.return_type.is_some(),
            DescriptorField::FirstInput => self.is_slot_resolved(InputSlot::First),
            DescriptorField::SecondInput => self.is_slot_resolved(InputSlot::Second),
            DescriptorField::ThirdInput => self.is_slot_resolved(InputSlot::Third),
            DescriptorField::Throwing => self.throwing.is_some(),
            DescriptorField::MethodName => self.method_name.is_some(),
            DescriptorField::Name => self.name.is_some(),
            DescriptorField::Package => self.package.is_some(),
            DescriptorField::Native => self.native.is_some(),
        }
    }

    const fn is_slot_resolved(&self, slot: InputSlot) -> bool {
        match self.arity {
            Some(arity) if slot.position() > arity => self.input(slot).is_none(),
            Some(_) => self.input(slot).is_some(),
            None => false,
        }
    }

    /// The first field that is not yet resolved, if any.
    #[must_use]
    pub fn first_unresolved(&self) -> Option<DescriptorField> {
        DescriptorField::ALL
            .into_iter()
            .find(|field| !self.is_resolved(*field))
    }

    /// Whether every field holds its final value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_unresolved().is_none()
    }

    /// Identifiers for the generated method's parameters.
    ///
    /// Generic inputs use their lowercase placeholder; when several inputs
    /// share a placeholder they are numbered by slot. A lone primitive input
    /// is `value`; several are `value1`, `value2`, ... by primitive index.
    ///
    /// ```rust
    /// use lambdagen::model::{LambdaDescriptor, PrimitiveType, TypeDescriptor};
    ///
    /// let descriptor = LambdaDescriptor::new()
    ///     .with_arity(3)
    ///     .with_first_input(TypeDescriptor::generic('T', 1))
    ///     .with_second_input(TypeDescriptor::primitive(PrimitiveType::Int, 1))
    ///     .with_third_input(TypeDescriptor::primitive(PrimitiveType::Int, 2));
    ///
    /// assert_eq!(descriptor.parameter_names(), ["t", "value1", "value2"]);
    /// ```
    #[must_use]
    pub fn parameter_names(&self) -> Vec<String> {
        let inputs = self.inputs();
        let primitive_count = inputs.iter().filter(|input| input.is_primitive()).count();
        InputSlot::ALL
            .into_iter()
            .filter_map(|slot| self.input(slot).map(|input| (slot, input)))
            .map(|(slot, input)| {
                if input.is_primitive() {
                    if primitive_count == 1 {
                        input.parameter_name().to_owned()
                    } else {
                        format!("{}{}", input.parameter_name(), input.index())
                    }
                } else {
                    let shared = inputs
                        .iter()
                        .filter(|other| other.name() == input.name())
                        .count()
                        > 1;
                    if shared {
                        format!("{}{}", input.parameter_name(), slot.position())
                    } else {
                        input.parameter_name().to_owned()
                    }
                }
            })
            .collect()
    }

    /// The distinct generic placeholders the interface declares, inputs
    /// first, then the return type, then the bounded throwable.
    ///
    /// ```rust
    /// use lambdagen::model::{LambdaDescriptor, TypeDescriptor};
    ///
    /// let descriptor = LambdaDescriptor::new()
    ///     .with_arity(1)
    ///     .with_first_input(TypeDescriptor::generic('T', 1))
    ///     .with_return_type(TypeDescriptor::generic('R', 0))
    ///     .throwing_with(TypeDescriptor::throwable());
    ///
    /// assert_eq!(descriptor.type_parameters(), ["T", "R", "X extends Throwable"]);
    /// ```
    #[must_use]
    pub fn type_parameters(&self) -> Vec<String> {
        let mut parameters: Vec<String> = Vec::new();
        let slots = self
            .inputs()
            .into_iter()
            .chain(self.return_type())
            .filter(|slot| slot.is_generic());
        for slot in slots {
            if !parameters.iter().any(|parameter| parameter == slot.name()) {
                parameters.push(slot.name().to_owned());
            }
        }
        if let Some(throwable) = self.throwable() {
            parameters.push(format!("{} extends Throwable", throwable.name()));
        }
        parameters
    }
}

impl fmt::Display for LambdaDescriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualified_name) = self.qualified_name() {
            return formatter.write_str(&qualified_name);
        }
        let describe = |slot: Option<&TypeDescriptor>| {
            slot.map_or_else(|| "?".to_owned(), |slot| slot.name().to_owned())
        };
        write!(
            formatter,
            "<partial {} arity={} ({}, {}, {}) -> {}>",
            self.kind.map_or("?", LambdaKind::name),
            self.arity.map_or_else(|| "?".to_owned(), |arity| arity.to_string()),
            describe(self.first_input()),
            describe(self.second_input()),
            describe(self.third_input()),
            describe(self.return_type()),
        )
    }
}

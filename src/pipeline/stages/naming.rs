//! Method and display name derivation.
//!
//! Display names follow the host platform's conventions so that the
//! derived name of a native descriptor is exactly the platform's own:
//!
//! | Shape                          | Example                        |
//! |--------------------------------|--------------------------------|
//! | generic inputs                 | `BiFunction`                   |
//! | generic inputs, primitive out  | `ToIntBiFunction`              |
//! | primitive inputs               | `IntPredicate`, `LongToIntFunction` |
//! | mixed inputs                   | `ObjIntConsumer`, `ObjBiIntFunction` |
//! | operator                       | `IntBinaryOperator`, `UnaryOperator` |
//! | supplier                       | `Supplier`, `BooleanSupplier`  |
//! | throwing                       | `ThrowableIntFunction`         |

use super::required;
use crate::model::{DescriptorField, LambdaDescriptor, LambdaKind, PrimitiveType};
use crate::pipeline::{EnumerationContext, Stage};
use crate::utils::classify;

/// The abstract method's name.
///
/// The kind's base name, then `As<Primitive>` for a typed method with a
/// primitive return, then `Throws` for a throwing descriptor. `None` until
/// the kind, return type and throwing flag are known.
///
/// ```rust
/// use lambdagen::model::{LambdaDescriptor, LambdaKind, PrimitiveType, TypeDescriptor};
/// use lambdagen::pipeline::stages::method_name;
///
/// let descriptor = LambdaDescriptor::new()
///     .with_kind(LambdaKind::Function)
///     .with_return_type(TypeDescriptor::primitive(PrimitiveType::Long, 0))
///     .throwing_with(TypeDescriptor::throwable());
///
/// assert_eq!(method_name(&descriptor).as_deref(), Some("applyAsLongThrows"));
/// ```
#[must_use]
pub fn method_name(descriptor: &LambdaDescriptor) -> Option<String> {
    let kind = descriptor.kind()?;
    let return_type = descriptor.return_type()?;
    let throwing = descriptor.throwing()?;

    let mut name = kind.method_base().to_owned();
    if kind.has_typed_method()
        && let Some(primitive) = return_type.as_primitive()
    {
        name.push_str("As");
        name.push_str(primitive.capitalized());
    }
    if throwing {
        name.push_str("Throws");
    }
    Some(name)
}

/// The interface's simple name. `None` until the kind, arity, inputs,
/// return type and throwing flag are known.
#[must_use]
pub fn display_name(descriptor: &LambdaDescriptor) -> Option<String> {
    let kind = descriptor.kind()?;
    let arity = descriptor.arity()?;
    let return_type = descriptor.return_type()?;
    let throwing = descriptor.throwing()?;
    let returned = return_type.as_primitive();

    let mut name = String::new();
    if throwing {
        name.push_str("Throwable");
    }
    match kind {
        LambdaKind::Operator => {
            if let Some(primitive) = returned {
                name.push_str(primitive.capitalized());
            }
            name.push_str(operator_arity(arity));
        }
        LambdaKind::Comparator | LambdaKind::Runnable => {}
        LambdaKind::Supplier => {
            if let Some(primitive) = returned {
                name.push_str(primitive.capitalized());
            }
        }
        LambdaKind::Consumer | LambdaKind::Function | LambdaKind::Predicate => {
            let conversion = returned.filter(|_| kind == LambdaKind::Function);
            match classify::input_primitive(descriptor) {
                None => {
                    push_conversion(&mut name, conversion);
                    name.push_str(multiplicity(arity));
                }
                Some(primitive) => {
                    let primitives = count(classify::primitive_input_count(descriptor));
                    let generics = count(classify::generic_input_count(descriptor));
                    if generics > 0 {
                        name.push_str(multiplicity(generics));
                        name.push_str("Obj");
                    }
                    name.push_str(multiplicity(primitives));
                    name.push_str(primitive.capitalized());
                    push_conversion(&mut name, conversion);
                }
            }
        }
    }
    name.push_str(kind.name());
    Some(name)
}

fn push_conversion(name: &mut String, conversion: Option<PrimitiveType>) {
    if let Some(primitive) = conversion {
        name.push_str("To");
        name.push_str(primitive.capitalized());
    }
}

fn count(inputs: usize) -> u8 {
    u8::try_from(inputs).unwrap_or(u8::MAX)
}

const fn multiplicity(count: u8) -> &'static str {
    match count {
        2 => "Bi",
        3 => "Tri",
        _ => "",
    }
}

const fn operator_arity(arity: u8) -> &'static str {
    match arity {
        1 => "Unary",
        2 => "Binary",
        3 => "Ternary",
        _ => "",
    }
}

/// Derives the abstract method's name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodNameStage;

impl Stage for MethodNameStage {
    fn name(&self) -> &'static str {
        "method name"
    }

    fn requires(&self) -> &'static [DescriptorField] {
        &[
            DescriptorField::Kind,
            DescriptorField::ReturnType,
            DescriptorField::Throwing,
        ]
    }

    fn provides(&self) -> &'static [DescriptorField] {
        &[DescriptorField::MethodName]
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        _context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        let method = required(
            method_name(&descriptor),
            self.name(),
            DescriptorField::MethodName,
        );
        vec![descriptor.with_method_name(method)]
    }
}

/// Derives the interface's simple name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayNameStage;

impl Stage for DisplayNameStage {
    fn name(&self) -> &'static str {
        "display name"
    }

    fn requires(&self) -> &'static [DescriptorField] {
        &[
            DescriptorField::Kind,
            DescriptorField::Arity,
            DescriptorField::FirstInput,
            DescriptorField::SecondInput,
            DescriptorField::ThirdInput,
            DescriptorField::ReturnType,
            DescriptorField::Throwing,
        ]
    }

    fn provides(&self) -> &'static [DescriptorField] {
        &[DescriptorField::Name]
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        _context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        let name = required(
            display_name(&descriptor),
            self.name(),
            DescriptorField::Name,
        );
        vec![descriptor.with_name(name)]
    }
}

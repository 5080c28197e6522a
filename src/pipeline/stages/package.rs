use super::required;
use crate::model::{DescriptorField, LambdaDescriptor, LambdaKind};
use crate::pipeline::{EnumerationContext, Stage};
use crate::utils::classify;

/// The package a descriptor lives in, under `base`.
///
/// Segments, in order: the kind; for operators the arity word (`unary`,
/// `binary`, `ternary`); otherwise, for kinds whose arity varies, `bi` or
/// `tri` for two or three inputs, then `obj` for mixed inputs, or for a
/// primitive-returning function `conversion` when all inputs are primitive
/// and `to` when all are generic. `None` until the kind, arity and return
/// type are known.
///
/// ```rust
/// use lambdagen::model::{LambdaDescriptor, LambdaKind, PrimitiveType, TypeDescriptor};
/// use lambdagen::pipeline::stages::package_name;
///
/// let descriptor = LambdaDescriptor::new()
///     .with_kind(LambdaKind::Function)
///     .with_arity(2)
///     .with_first_input(TypeDescriptor::generic('T', 1))
///     .with_second_input(TypeDescriptor::primitive(PrimitiveType::Int, 1))
///     .with_return_type(TypeDescriptor::generic('R', 0));
///
/// assert_eq!(
///     package_name("io.lambdagen", &descriptor).as_deref(),
///     Some("io.lambdagen.function.bi.obj")
/// );
/// ```
#[must_use]
pub fn package_name(base: &str, descriptor: &LambdaDescriptor) -> Option<String> {
    let kind = descriptor.kind()?;
    let arity = descriptor.arity()?;
    descriptor.return_type()?;

    let mut segments = vec![base, kind.package_segment()];
    if kind == LambdaKind::Operator {
        segments.extend(operator_segment(arity));
        return Some(segments.join("."));
    }
    if kind.fixed_arity().is_none() {
        segments.extend(match arity {
            2 => Some("bi"),
            3 => Some("tri"),
            _ => None,
        });
    }
    if classify::has_mixed_inputs(descriptor) {
        segments.push("obj");
    } else if kind == LambdaKind::Function && classify::has_primitive_return(descriptor) {
        if classify::all_inputs_primitive(descriptor) {
            segments.push("conversion");
        } else if classify::all_inputs_generic(descriptor) {
            segments.push("to");
        }
    }
    Some(segments.join("."))
}

const fn operator_segment(arity: u8) -> Option<&'static str> {
    match arity {
        1 => Some("unary"),
        2 => Some("binary"),
        3 => Some("ternary"),
        _ => None,
    }
}

/// Derives the package under the configured base package.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageNameStage;

impl Stage for PackageNameStage {
    fn name(&self) -> &'static str {
        "package name"
    }

    fn requires(&self) -> &'static [DescriptorField] {
        &[
            DescriptorField::Kind,
            DescriptorField::Arity,
            DescriptorField::FirstInput,
            DescriptorField::SecondInput,
            DescriptorField::ThirdInput,
            DescriptorField::ReturnType,
        ]
    }

    fn provides(&self) -> &'static [DescriptorField] {
        &[DescriptorField::Package]
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        let package = required(
            package_name(&context.config().base_package, &descriptor),
            self.name(),
            DescriptorField::Package,
        );
        vec![descriptor.with_package(package)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::model::{InputSlot, PrimitiveType, TypeDescriptor};
    use rstest::rstest;

    fn int(index: u8) -> TypeDescriptor {
        TypeDescriptor::primitive(PrimitiveType::Int, index)
    }

    fn t(slot: InputSlot) -> TypeDescriptor {
        TypeDescriptor::generic(slot.placeholder(), slot.position())
    }

    fn shaped(
        kind: LambdaKind,
        inputs: Vec<TypeDescriptor>,
        return_type: TypeDescriptor,
    ) -> LambdaDescriptor {
        let mut descriptor = LambdaDescriptor::new()
            .with_kind(kind)
            .with_arity(u8::try_from(inputs.len()).unwrap())
            .with_return_type(return_type);
        for (slot, input) in InputSlot::ALL.into_iter().zip(inputs) {
            descriptor = descriptor.with_input(slot, input);
        }
        descriptor
    }

    #[rstest]
    #[case(LambdaKind::Function, vec![t(InputSlot::First)], TypeDescriptor::generic('R', 0), "io.lambdagen.function")]
    #[case(LambdaKind::Function, vec![t(InputSlot::First)], int(0), "io.lambdagen.function.to")]
    #[case(LambdaKind::Function, vec![int(1)], TypeDescriptor::primitive(PrimitiveType::Long, 0), "io.lambdagen.function.conversion")]
    #[case(LambdaKind::Function, vec![int(1)], TypeDescriptor::generic('R', 0), "io.lambdagen.function")]
    #[case(LambdaKind::Function, vec![t(InputSlot::First), t(InputSlot::Second)], int(0), "io.lambdagen.function.bi.to")]
    #[case(LambdaKind::Function, vec![t(InputSlot::First), int(1), int(2)], int(0), "io.lambdagen.function.tri.obj")]
    #[case(LambdaKind::Consumer, vec![t(InputSlot::First), int(1)], TypeDescriptor::void(), "io.lambdagen.consumer.bi.obj")]
    #[case(LambdaKind::Predicate, vec![int(1), int(2)], TypeDescriptor::primitive(PrimitiveType::Boolean, 0), "io.lambdagen.predicate.bi")]
    #[case(LambdaKind::Operator, vec![int(1), int(2)], int(0), "io.lambdagen.operator.binary")]
    #[case(LambdaKind::Operator, vec![TypeDescriptor::generic('T', 1)], TypeDescriptor::generic('T', 0), "io.lambdagen.operator.unary")]
    #[case(LambdaKind::Supplier, vec![], int(0), "io.lambdagen.supplier")]
    #[case(LambdaKind::Runnable, vec![], TypeDescriptor::void(), "io.lambdagen.runnable")]
    #[case(LambdaKind::Comparator, vec![t(InputSlot::First), t(InputSlot::Second)], int(0), "io.lambdagen.comparator")]
    fn package_names(
        #[case] kind: LambdaKind,
        #[case] inputs: Vec<TypeDescriptor>,
        #[case] return_type: TypeDescriptor,
        #[case] expected: &str,
    ) {
        let descriptor = shaped(kind, inputs, return_type);
        assert_eq!(package_name("io.lambdagen", &descriptor).as_deref(), Some(expected));
    }

    #[rstest]
    fn stage_uses_configured_base_package() {
        let config = GeneratorConfig::default().with_base_package("org.example");
        let mut context = EnumerationContext::new(&config);
        let descriptor = shaped(LambdaKind::Runnable, Vec::new(), TypeDescriptor::void());
        let branches = PackageNameStage.expand(descriptor, &mut context);
        assert_eq!(branches[0].package(), Some("org.example.runnable"));
    }
}

use super::required;
use crate::model::{DescriptorField, InputSlot, LambdaDescriptor, LambdaKind};
use crate::pipeline::{EnumerationContext, Stage};
use crate::utils::classify;

/// Recognises operators among the fully typed descriptors.
///
/// A descriptor whose inputs and return all share one primitive is
/// reclassified as an operator in place. A descriptor whose inputs and
/// return are all generic stays as it is, and an operator copy with every
/// slot renamed to `T` is emitted after it. Afterwards only descriptors
/// whose final kind the scope admits survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorStage;

impl OperatorStage {
    fn operator_copy(descriptor: &LambdaDescriptor) -> LambdaDescriptor {
        let mut operator = descriptor.clone().with_kind(LambdaKind::Operator);
        for slot in InputSlot::ALL {
            if let Some(input) = descriptor.input(slot) {
                operator = operator.with_input(slot, input.renamed('T'));
            }
        }
        if let Some(return_type) = descriptor.return_type() {
            operator = operator.with_return_type(return_type.renamed('T'));
        }
        operator
    }
}

impl Stage for OperatorStage {
    fn name(&self) -> &'static str {
        "operator"
    }

    fn requires(&self) -> &'static [DescriptorField] {
        &[
            DescriptorField::Kind,
            DescriptorField::Arity,
            DescriptorField::ReturnType,
            DescriptorField::FirstInput,
            DescriptorField::SecondInput,
            DescriptorField::ThirdInput,
        ]
    }

    fn provides(&self) -> &'static [DescriptorField] {
        &[
            DescriptorField::Kind,
            DescriptorField::ReturnType,
            DescriptorField::FirstInput,
            DescriptorField::SecondInput,
            DescriptorField::ThirdInput,
        ]
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        let kind = required(descriptor.kind(), self.name(), DescriptorField::Kind);
        let detected = if kind == LambdaKind::Operator || !classify::is_self_returning(&descriptor)
        {
            vec![descriptor]
        } else if classify::has_primitive_return(&descriptor) {
            vec![descriptor.with_kind(LambdaKind::Operator)]
        } else {
            let operator = Self::operator_copy(&descriptor);
            vec![descriptor, operator]
        };

        let scope = context.scope();
        detected
            .into_iter()
            .filter(|descriptor| {
                descriptor
                    .kind()
                    .is_some_and(|kind| scope.admits_kind(kind))
            })
            .collect()
    }
}

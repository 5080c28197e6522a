use std::iter;

use super::required;
use crate::model::{DescriptorField, LambdaDescriptor, LambdaKind, PrimitiveType, TypeDescriptor};
use crate::pipeline::{EnumerationContext, Stage};

/// Assigns the return type.
///
/// Comparators, consumers, predicates and runnables have their return
/// forced by the kind. Functions and suppliers fan out over a generic
/// result followed by every primitive; only suppliers may return
/// `boolean`, since a boolean-valued function is a predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnTypeStage;

impl ReturnTypeStage {
    fn candidates(kind: LambdaKind) -> Vec<TypeDescriptor> {
        if let Some(identity) = kind.forced_return() {
            return vec![TypeDescriptor::from_identity(identity, 'R', 0)];
        }
        let placeholder = if kind == LambdaKind::Supplier { 'T' } else { 'R' };
        iter::once(TypeDescriptor::generic(placeholder, 0))
            .chain(
                PrimitiveType::ALL
                    .into_iter()
                    .filter(|primitive| {
                        kind == LambdaKind::Supplier || *primitive != PrimitiveType::Boolean
                    })
                    .map(|primitive| TypeDescriptor::primitive(primitive, 0)),
            )
            .collect()
    }
}

impl Stage for ReturnTypeStage {
    fn name(&self) -> &'static str {
        "return type"
    }

    fn requires(&self) -> &'static [DescriptorField] {
        &[DescriptorField::Kind, DescriptorField::Arity]
    }

    fn provides(&self) -> &'static [DescriptorField] {
        &[DescriptorField::ReturnType]
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        let kind = required(descriptor.kind(), self.name(), DescriptorField::Kind);
        let scope = context.scope();
        Self::candidates(kind)
            .into_iter()
            .filter(|return_type| scope.admits_return(return_type.identity()))
            .map(|return_type| descriptor.clone().with_return_type(return_type))
            .collect()
    }
}

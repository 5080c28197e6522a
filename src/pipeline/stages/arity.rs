use super::required;
use crate::model::{DescriptorField, LambdaDescriptor, MAX_ARITY};
use crate::pipeline::{EnumerationContext, Stage};

/// Assigns the arity: the kind's fixed arity, or one branch per arity from
/// one to [`MAX_ARITY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArityStage;

impl Stage for ArityStage {
    fn name(&self) -> &'static str {
        "arity"
    }

    fn requires(&self) -> &'static [DescriptorField] {
        &[DescriptorField::Kind]
    }

    fn provides(&self) -> &'static [DescriptorField] {
        &[DescriptorField::Arity]
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        let kind = required(descriptor.kind(), self.name(), DescriptorField::Kind);
        let scope = context.scope();
        let arities = match kind.fixed_arity() {
            Some(fixed) => fixed..=fixed,
            None => 1..=MAX_ARITY,
        };
        arities
            .filter(|arity| scope.admits_arity(*arity))
            .map(|arity| descriptor.clone().with_arity(arity))
            .collect()
    }
}

use super::required;
use crate::model::{DescriptorField, LambdaDescriptor};
use crate::native;
use crate::pipeline::{EnumerationContext, Stage};

/// Flags descriptors the host platform already defines and records them in
/// the cache's native tier. Runs last: the match keys on the derived name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeStage;

impl Stage for NativeStage {
    fn name(&self) -> &'static str {
        "native match"
    }

    fn requires(&self) -> &'static [DescriptorField] {
        &[
            DescriptorField::Kind,
            DescriptorField::Arity,
            DescriptorField::Name,
            DescriptorField::Throwing,
        ]
    }

    fn provides(&self) -> &'static [DescriptorField] {
        &[DescriptorField::Native]
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        let stage = self.name();
        let is_native = native::is_native(
            required(descriptor.kind(), stage, DescriptorField::Kind),
            required(descriptor.arity(), stage, DescriptorField::Arity),
            required(descriptor.name(), stage, DescriptorField::Name),
            required(descriptor.throwing(), stage, DescriptorField::Throwing),
        );
        let descriptor = descriptor.with_native(is_native);
        if is_native {
            context.cache_mut().add_native(descriptor.clone());
        }
        vec![descriptor]
    }
}

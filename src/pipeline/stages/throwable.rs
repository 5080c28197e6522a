use crate::model::{DescriptorField, LambdaDescriptor, TypeDescriptor};
use crate::pipeline::{EnumerationContext, Stage};

/// Doubles every descriptor into a non-throwing variant followed by a
/// variant throwing a fresh generic `X extends Throwable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrowableStage;

impl Stage for ThrowableStage {
    fn name(&self) -> &'static str {
        "throwable"
    }

    fn requires(&self) -> &'static [DescriptorField] {
        &[DescriptorField::Kind]
    }

    fn provides(&self) -> &'static [DescriptorField] {
        &[DescriptorField::Throwing]
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        _context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        vec![
            descriptor.clone().non_throwing(),
            descriptor.throwing_with(TypeDescriptor::throwable()),
        ]
    }
}

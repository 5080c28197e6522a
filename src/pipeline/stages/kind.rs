use crate::model::{DescriptorField, LambdaDescriptor, LambdaKind};
use crate::pipeline::{EnumerationContext, Stage};

/// The kinds the kind stage fans out over.
///
/// `Operator` is absent: operators are found among the functions by the
/// operator stage, never enumerated directly.
const ENUMERATED_KINDS: [LambdaKind; 6] = [
    LambdaKind::Comparator,
    LambdaKind::Consumer,
    LambdaKind::Function,
    LambdaKind::Predicate,
    LambdaKind::Runnable,
    LambdaKind::Supplier,
];

/// Fans the seed out into one descriptor per enumerated kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindStage;

impl Stage for KindStage {
    fn name(&self) -> &'static str {
        "kind"
    }

    fn requires(&self) -> &'static [DescriptorField] {
        &[]
    }

    fn provides(&self) -> &'static [DescriptorField] {
        &[DescriptorField::Kind]
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        let scope = context.scope();
        ENUMERATED_KINDS
            .into_iter()
            .filter(|kind| scope.admits_seed_kind(*kind))
            .map(|kind| descriptor.clone().with_kind(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnumerationScope, GeneratorConfig};
    use rstest::rstest;

    fn expand(config: &GeneratorConfig) -> Vec<LambdaKind> {
        let mut context = EnumerationContext::new(config);
        KindStage
            .expand(LambdaDescriptor::new(), &mut context)
            .iter()
            .filter_map(LambdaDescriptor::kind)
            .collect()
    }

    #[rstest]
    fn fans_out_over_every_kind_but_operator() {
        assert_eq!(expand(&GeneratorConfig::default()), ENUMERATED_KINDS);
    }

    #[rstest]
    fn scope_restricts_kinds() {
        let config = GeneratorConfig::default().with_scope(
            EnumerationScope::unrestricted().with_kinds([LambdaKind::Supplier]),
        );
        assert_eq!(expand(&config), [LambdaKind::Supplier]);
    }

    #[rstest]
    fn operator_scope_seeds_functions_and_predicates() {
        let config = GeneratorConfig::default().with_scope(
            EnumerationScope::unrestricted().with_kinds([LambdaKind::Operator]),
        );
        assert_eq!(
            expand(&config),
            [LambdaKind::Function, LambdaKind::Predicate]
        );
    }
}

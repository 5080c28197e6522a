use std::iter;

use super::required;
use crate::model::{
    DescriptorField, InputSlot, LambdaDescriptor, LambdaKind, PrimitiveType, TypeDescriptor,
};
use crate::pipeline::{EnumerationContext, Stage};

/// Assigns the input at one slot.
///
/// A slot beyond the arity passes the descriptor through untouched.
/// Otherwise the slot fans out over its generic placeholder followed by
/// every primitive, except that a slot following a primitive input is
/// forced to that same primitive: an interface never mixes two different
/// primitive inputs. Comparators take two generic inputs.
///
/// A primitive input's index counts the primitive inputs before it, plus
/// one. A generic input's index is its slot position.
#[derive(Debug, Clone, Copy)]
pub struct InputTypeStage {
    slot: InputSlot,
}

impl InputTypeStage {
    /// Creates the stage for `slot`.
    #[must_use]
    pub const fn new(slot: InputSlot) -> Self {
        Self { slot }
    }

    /// The slot this stage assigns.
    #[must_use]
    pub const fn slot(&self) -> InputSlot {
        self.slot
    }

    fn candidates(&self, kind: LambdaKind, descriptor: &LambdaDescriptor) -> Vec<TypeDescriptor> {
        let generic = TypeDescriptor::generic(self.slot.placeholder(), self.slot.position());
        if kind == LambdaKind::Comparator {
            return vec![generic];
        }
        let primitive_index = 1 + descriptor
            .inputs()
            .into_iter()
            .fold(0_u8, |count, input| count + u8::from(input.is_primitive()));
        let previous = self
            .slot
            .previous()
            .and_then(|previous| descriptor.input(previous))
            .and_then(TypeDescriptor::as_primitive);
        match previous {
            Some(primitive) => vec![TypeDescriptor::primitive(primitive, primitive_index)],
            None => iter::once(generic)
                .chain(
                    PrimitiveType::ALL
                        .into_iter()
                        .map(|primitive| TypeDescriptor::primitive(primitive, primitive_index)),
                )
                .collect(),
        }
    }
}

impl Stage for InputTypeStage {
    fn name(&self) -> &'static str {
        match self.slot {
            InputSlot::First => "first input",
            InputSlot::Second => "second input",
            InputSlot::Third => "third input",
        }
    }

    fn requires(&self) -> &'static [DescriptorField] {
        match self.slot {
            InputSlot::First => &[DescriptorField::Kind, DescriptorField::Arity],
            InputSlot::Second => &[
                DescriptorField::Kind,
                DescriptorField::Arity,
                DescriptorField::FirstInput,
            ],
            InputSlot::Third => &[
                DescriptorField::Kind,
                DescriptorField::Arity,
                DescriptorField::SecondInput,
            ],
        }
    }

    fn provides(&self) -> &'static [DescriptorField] {
        match self.slot {
            InputSlot::First => &[DescriptorField::FirstInput],
            InputSlot::Second => &[DescriptorField::SecondInput],
            InputSlot::Third => &[DescriptorField::ThirdInput],
        }
    }

    fn expand(
        &self,
        descriptor: LambdaDescriptor,
        _context: &mut EnumerationContext<'_>,
    ) -> Vec<LambdaDescriptor> {
        let arity = required(descriptor.arity(), self.name(), DescriptorField::Arity);
        if self.slot.position() > arity {
            return vec![descriptor];
        }
        let kind = required(descriptor.kind(), self.name(), DescriptorField::Kind);
        self.candidates(kind, &descriptor)
            .into_iter()
            .map(|input| descriptor.clone().with_input(self.slot, input))
            .collect()
    }
}

//! The stages of the standard pipeline.
//!
//! Each stage lives in its own module and owns the fields listed in the
//! table of the [parent module](super). [`standard`] assembles them in
//! their canonical order.

mod arity;
mod input_type;
mod kind;
mod naming;
mod native;
mod operator;
mod package;
mod return_type;
mod throwable;

pub use arity::ArityStage;
pub use input_type::InputTypeStage;
pub use kind::KindStage;
pub use naming::{DisplayNameStage, MethodNameStage, display_name, method_name};
pub use native::NativeStage;
pub use operator::OperatorStage;
pub use package::{PackageNameStage, package_name};
pub use return_type::ReturnTypeStage;
pub use throwable::ThrowableStage;

use super::Stage;
use crate::model::{DescriptorField, InputSlot};

/// The twelve stages of the standard pipeline, in run order.
#[must_use]
pub fn standard() -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(KindStage),
        Box::new(ArityStage),
        Box::new(ReturnTypeStage),
        Box::new(InputTypeStage::new(InputSlot::First)),
        Box::new(InputTypeStage::new(InputSlot::Second)),
        Box::new(InputTypeStage::new(InputSlot::Third)),
        Box::new(OperatorStage),
        Box::new(ThrowableStage),
        Box::new(MethodNameStage),
        Box::new(DisplayNameStage),
        Box::new(PackageNameStage),
        Box::new(NativeStage),
    ]
}

/// Unwraps a value a stage reads from, or derives out of, its required
/// fields.
///
/// The driver checks requirements before calling a stage, so a miss here
/// means the stage's declaration is wrong.
fn required<T>(value: Option<T>, stage: &str, field: DescriptorField) -> T {
    match value {
        Some(value) => value,
        None => panic!("stage `{stage}` could not resolve the {field}"),
    }
}

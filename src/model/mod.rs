//! Descriptor model threaded through the enumeration pipeline.
//!
//! - [`PrimitiveType`]: the eight scalar kinds of the host platform
//! - [`LambdaKind`]: the functional shape of an interface
//! - [`TypeIdentity`] / [`TypeDescriptor`]: one argument, return or throwable slot
//! - [`LambdaDescriptor`]: the record every stage populates a little further
//!
//! All model types are plain values. Cloning a [`LambdaDescriptor`] copies
//! every nested [`TypeDescriptor`], so two fan-out branches never share
//! state.

mod kind;
mod lambda_descriptor;
mod primitive;
mod type_descriptor;

pub use kind::LambdaKind;
pub use lambda_descriptor::{DescriptorField, InputSlot, LambdaDescriptor, MAX_ARITY};
pub use primitive::PrimitiveType;
pub use type_descriptor::{TypeDescriptor, TypeIdentity};

//! Static OpenVX metadata shared by the document and editor layers: ids,
//! the type registry, the kernel registry and the closed set of element tags.

pub mod bitfield;
pub mod error;
pub mod id;
mod kernel_table;
pub mod kernels;
pub mod tag;
pub mod type_registry;
pub mod types;
mod vx_tables;

// Re-export commonly used types
pub use error::CoreError;
pub use id::{ElemId, RefId, VertexId};
pub use kernels::{Direction, KernelRegistry, KernelSignature, ParamState, ParameterSignature};
pub use tag::{DataTag, ElementKind};
pub use type_registry::{TypeRegistry, ValueLabel};
pub use types::{DefaultValue, TypeBody, TypeDescriptor, TypeKind};

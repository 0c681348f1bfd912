//! KernelRegistry: the static table of kernel signatures.
//!
//! Each [`KernelSignature`] is an ordered list of typed
//! [`ParameterSignature`]s with a direction and a state. Per-parameter
//! requirements and whole-kernel match expressions are stored as opaque text.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::kernel_table::{KernelSpec, KERNELS};
use crate::type_registry::TypeRegistry;

/// Data flow direction of a kernel parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Input,
    Output,
    Bidirectional,
}

impl Direction {
    /// True when the node writes the bound object.
    pub fn writes(self) -> bool {
        matches!(self, Direction::Output | Direction::Bidirectional)
    }
}

/// Whether a parameter must be bound, may be left unbound, or is a fixed
/// value set at node creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamState {
    Required,
    Optional,
    Immutable,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Input => "input",
            Direction::Output => "output",
            Direction::Bidirectional => "bidirectional",
        };
        write!(f, "{s}")
    }
}

/// One positional parameter of a kernel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSignature {
    pub name: String,
    pub direction: Direction,
    pub state: ParamState,
    /// Declared type name, e.g. `vx_image` or `vx_convert_policy_e`.
    pub type_name: String,
    /// Opaque requirement expression.
    pub requirement: String,
}

impl ParameterSignature {
    pub fn is_optional(&self) -> bool {
        self.state == ParamState::Optional
    }

    pub fn is_immutable(&self) -> bool {
        self.state == ParamState::Immutable
    }
}

/// A kernel: qualified name, creation function, numeric id and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSignature {
    /// Qualified name, e.g. `org.khronos.openvx.color_convert`.
    pub name: String,
    /// Informational creation-function name.
    pub function: String,
    /// Enum label of the kernel id.
    pub label: String,
    pub id: u32,
    pub params: Vec<ParameterSignature>,
    /// Opaque whole-kernel match expression.
    pub matches: String,
}

impl KernelSignature {
    pub fn param(&self, index: usize) -> Option<&ParameterSignature> {
        self.params.get(index)
    }

    /// Short name shown on node vertices (last dotted component).
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    fn from_spec(spec: &KernelSpec, types: &TypeRegistry) -> Self {
        KernelSignature {
            name: spec.name.to_string(),
            function: spec.function.to_string(),
            label: spec.label.to_string(),
            id: types.kernel_id(spec.label).unwrap_or(0),
            params: spec
                .params
                .iter()
                .map(|p| ParameterSignature {
                    name: p.name.to_string(),
                    direction: p.direction,
                    state: p.state,
                    type_name: p.type_name.to_string(),
                    requirement: p.requirement.to_string(),
                })
                .collect(),
            matches: spec.matches.to_string(),
        }
    }
}

/// Kernel signatures keyed by qualified name, in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelRegistry {
    kernels: IndexMap<String, KernelSignature>,
}

impl Default for KernelRegistry {
    fn default() -> Self {
        Self::new(&TypeRegistry::new())
    }
}

impl KernelRegistry {
    /// Builds the standard kernel table, resolving kernel ids through `types`.
    pub fn new(types: &TypeRegistry) -> Self {
        let kernels = KERNELS
            .iter()
            .map(|spec| (spec.name.to_string(), KernelSignature::from_spec(spec, types)))
            .collect();
        KernelRegistry { kernels }
    }

    pub fn get(&self, name: &str) -> Option<&KernelSignature> {
        self.kernels.get(name)
    }

    /// Like [`get`](Self::get) but fails with [`CoreError::UnknownKernel`].
    pub fn require(&self, name: &str) -> Result<&KernelSignature, CoreError> {
        self.kernels.get(name).ok_or_else(|| CoreError::UnknownKernel {
            name: name.to_string(),
        })
    }

    pub fn list(&self) -> impl Iterator<Item = &KernelSignature> {
        self.kernels.values()
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }
}

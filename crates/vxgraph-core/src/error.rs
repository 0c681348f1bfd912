//! Core error types for vxgraph-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! failure modes of the type and kernel registries.

use thiserror::Error;

/// Core errors produced by the vxgraph-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attempting to register a type name that already exists in the registry.
    #[error("duplicate type name: '{name}'")]
    DuplicateTypeName { name: String },

    /// A type name was not found in the type registry.
    #[error("unknown type: '{name}'")]
    UnknownType { name: String },

    /// A label used to compose a bitfield value is not defined.
    #[error("unknown label '{label}' in '{table}'")]
    UnknownLabel { table: String, label: String },

    /// The reserved numbering space for user structs is used up.
    #[error("no user struct ids left for '{name}' (limit {limit:#x})")]
    UserStructSpaceExhausted { name: String, limit: u32 },

    /// A four-character code did not have exactly four single-byte characters.
    #[error("invalid four-character code: '{code}'")]
    InvalidFourcc { code: String },

    /// A kernel name was not found in the kernel registry.
    #[error("unknown kernel: '{name}'")]
    UnknownKernel { name: String },

    /// An element name is not one of the known data object tags.
    #[error("unknown data object tag: '{tag}'")]
    UnknownTag { tag: String },
}

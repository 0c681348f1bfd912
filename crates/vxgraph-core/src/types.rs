//! Type descriptors for the OpenVX value space.
//!
//! A [`TypeDescriptor`] pairs a name with a [`TypeKind`] and a [`TypeBody`].
//! Enumerated kinds (constants, attributes, kernel ids, enums) carry an ordered
//! label-to-value table; aggregate kinds carry an ordered field-to-type table.
//! [`DefaultValue`] is the recursive shape produced by default-value derivation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classification of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Plain enumerated constants (`vx_type_e`, `vx_vendor_id_e`, ...).
    Constant,
    /// Object attributes: `vendor<<20 | object_type<<8 | index`.
    Attribute,
    /// Kernel ids: `vendor<<20 | library<<12 | index`.
    Kernel,
    /// Bitfield enums: `vendor<<20 | enum_group<<12 | index`.
    Enum,
    Struct,
    Union,
    /// Fixed-length array of one element type.
    Array,
    /// A type nothing is known about beyond its name.
    Opaque,
    /// Built-in scalar with a canonical literal default.
    Inherent,
    /// Aliases over other types (`vx_enum`, `vx_reference`).
    Base,
    /// OpenVX reference object; fields are its attributes.
    Object,
}

impl TypeKind {
    /// Kinds whose body is a label-to-value table.
    pub fn is_enumerated(self) -> bool {
        matches!(
            self,
            TypeKind::Constant | TypeKind::Attribute | TypeKind::Kernel | TypeKind::Enum
        )
    }
}

/// The element mapping of a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "body", rename_all = "snake_case")]
pub enum TypeBody {
    /// Ordered label -> numeric value.
    Values { values: IndexMap<String, u32> },
    /// Ordered field (or attribute) name -> type name.
    Fields { fields: IndexMap<String, String> },
    Array { element: String, length: usize },
    Inherent { literal: String },
    Opaque,
}

/// A registered type: name, kind and element mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
    pub body: TypeBody,
}

impl TypeDescriptor {
    pub fn values(name: &str, kind: TypeKind, values: IndexMap<String, u32>) -> Self {
        TypeDescriptor {
            name: name.to_string(),
            kind,
            body: TypeBody::Values { values },
        }
    }

    pub fn fields(name: &str, kind: TypeKind, fields: IndexMap<String, String>) -> Self {
        TypeDescriptor {
            name: name.to_string(),
            kind,
            body: TypeBody::Fields { fields },
        }
    }

    pub fn array(name: &str, element: &str, length: usize) -> Self {
        TypeDescriptor {
            name: name.to_string(),
            kind: TypeKind::Array,
            body: TypeBody::Array {
                element: element.to_string(),
                length,
            },
        }
    }

    pub fn inherent(name: &str, literal: &str) -> Self {
        TypeDescriptor {
            name: name.to_string(),
            kind: TypeKind::Inherent,
            body: TypeBody::Inherent {
                literal: literal.to_string(),
            },
        }
    }

    pub fn opaque(name: &str) -> Self {
        TypeDescriptor {
            name: name.to_string(),
            kind: TypeKind::Opaque,
            body: TypeBody::Opaque,
        }
    }

    /// The label table, for enumerated kinds and `vx_enum`.
    pub fn value_table(&self) -> Option<&IndexMap<String, u32>> {
        match &self.body {
            TypeBody::Values { values } => Some(values),
            _ => None,
        }
    }

    /// The field table, for structs, unions, objects and `vx_reference`.
    pub fn field_table(&self) -> Option<&IndexMap<String, String>> {
        match &self.body {
            TypeBody::Fields { fields } => Some(fields),
            _ => None,
        }
    }

    /// Numeric value of a label in this type's table.
    pub fn value_of(&self, label: &str) -> Option<u32> {
        self.value_table().and_then(|v| v.get(label).copied())
    }

    /// First label mapped to `value`, in definition order.
    pub fn label_of(&self, value: u32) -> Option<&str> {
        self.value_table()?
            .iter()
            .find(|(_, v)| **v == value)
            .map(|(k, _)| k.as_str())
    }
}

/// A derived default value.
///
/// Serialises untagged, so a struct default renders as a JSON object of its
/// field defaults and an array default as a JSON list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Text(String),
    List(Vec<DefaultValue>),
    Map(IndexMap<String, DefaultValue>),
    /// Marker for opaque types.
    Empty,
}

impl DefaultValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DefaultValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Flattens leaf literals in order, as they would be written into a
    /// scalar or array payload.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            DefaultValue::Text(s) => out.push(s),
            DefaultValue::List(items) => items.iter().for_each(|i| i.collect_leaves(out)),
            DefaultValue::Map(fields) => fields.values().for_each(|i| i.collect_leaves(out)),
            DefaultValue::Empty => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_lookup_uses_definition_order() {
        let t = TypeDescriptor::values(
            "vx_test_e",
            TypeKind::Constant,
            IndexMap::from([("A".to_string(), 1), ("B".to_string(), 2), ("C".to_string(), 1)]),
        );
        assert_eq!(t.label_of(1), Some("A"));
        assert_eq!(t.value_of("B"), Some(2));
        assert_eq!(t.label_of(9), None);
        assert!(t.field_table().is_none());
    }

    #[test]
    fn enumerated_kinds() {
        assert!(TypeKind::Attribute.is_enumerated());
        assert!(TypeKind::Kernel.is_enumerated());
        assert!(!TypeKind::Base.is_enumerated());
        assert!(!TypeKind::Struct.is_enumerated());
    }

    #[test]
    fn default_value_serializes_untagged() {
        let v = DefaultValue::Map(IndexMap::from([
            ("x".to_string(), DefaultValue::Text("0".into())),
            (
                "rgb".to_string(),
                DefaultValue::List(vec![DefaultValue::Text("0".into()); 2]),
            ),
        ]));
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":"0","rgb":["0","0"]}"#);
        assert_eq!(v.leaves(), vec!["0", "0", "0"]);
    }
}

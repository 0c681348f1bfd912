//! TypeRegistry: static metadata for every OpenVX value type.
//!
//! The registry is built once from the declarative tables in
//! [`vx_tables`](crate::vx_tables). Bitfield-composed kinds (attributes,
//! enums, kernel ids) resolve their vendor and secondary ids against the
//! constant tables registered before them. The only runtime append point is
//! [`TypeRegistry::register_user_struct`], which hands out ids from a
//! reserved numbering space and wires the new name into both alias tables.

use std::collections::HashMap;
use std::ops::RangeBounds;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bitfield::{self, GROUP_SHIFT, TYPE_SHIFT};
use crate::error::CoreError;
use crate::types::{DefaultValue, TypeBody, TypeDescriptor, TypeKind};
use crate::vx_tables;

/// Name of the constant table holding all object and data type ids.
pub const VX_TYPE_E: &str = "vx_type_e";

/// A numeric value resolved to the table that names it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub type_name: String,
    pub label: String,
}

/// Registry of all OpenVX types, keyed by name in registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDescriptor>,
    /// `VX_TYPE_FLOAT32` -> `vx_float32`
    standard_alias: HashMap<String, String>,
    /// `vx_float32` -> `VX_TYPE_FLOAT32`
    reverse_alias: HashMap<String, String>,
    next_user_struct: u32,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// First id handed out to a user struct.
    pub const USER_STRUCT_BASE: u32 = 0x100;
    /// User struct ids must stay below this value.
    pub const USER_STRUCT_LIMIT: u32 = 0x400;

    /// Creates a registry holding the standard OpenVX tables.
    pub fn new() -> Self {
        let mut reg = TypeRegistry {
            types: IndexMap::new(),
            standard_alias: HashMap::new(),
            reverse_alias: HashMap::new(),
            next_user_struct: Self::USER_STRUCT_BASE,
        };

        for table in vx_tables::CONSTANTS {
            let values = table
                .values
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect();
            reg.insert(TypeDescriptor::values(table.name, TypeKind::Constant, values));
        }
        let formats = vx_tables::DF_IMAGE_CODES
            .iter()
            .filter_map(|(k, code)| Some((k.to_string(), bitfield::fourcc_from_str(code).ok()?)))
            .collect();
        reg.insert(TypeDescriptor::values(
            "vx_df_image_e",
            TypeKind::Constant,
            formats,
        ));

        for (tables, kind) in [
            (vx_tables::ATTRIBUTES, TypeKind::Attribute),
            (vx_tables::ENUMS, TypeKind::Enum),
            (vx_tables::KERNEL_IDS, TypeKind::Kernel),
        ] {
            for table in tables {
                // Static tables only reference labels defined above; the
                // unit tests check that every table is present.
                if let Ok(values) =
                    reg.compose_sequence(kind, table.vendor, table.secondary, table.first, table.labels)
                {
                    reg.insert(TypeDescriptor::values(table.name, kind, values));
                }
            }
        }

        for (name, fields) in vx_tables::STRUCTS {
            reg.insert(TypeDescriptor::fields(name, TypeKind::Struct, field_map(fields)));
        }
        for (name, fields) in vx_tables::UNIONS {
            reg.insert(TypeDescriptor::fields(name, TypeKind::Union, field_map(fields)));
        }
        for (name, element, length) in vx_tables::ARRAYS {
            reg.insert(TypeDescriptor::array(name, element, *length));
        }
        for (name, literal) in vx_tables::INHERENT {
            reg.insert(TypeDescriptor::inherent(name, literal));
        }
        for name in vx_tables::OPAQUE {
            reg.insert(TypeDescriptor::opaque(name));
        }

        // vx_enum indexes every enumerated table, vx_uint32 first, the rest sorted.
        let mut enum_names: Vec<String> = reg
            .types
            .keys()
            .filter(|k| k.ends_with("_e"))
            .cloned()
            .collect();
        enum_names.sort();
        enum_names.insert(0, "vx_uint32".to_string());
        let enum_values = enum_names
            .into_iter()
            .enumerate()
            .map(|(i, n)| (n, i as u32))
            .collect();
        reg.insert(TypeDescriptor::values("vx_enum", TypeKind::Base, enum_values));
        reg.insert(TypeDescriptor::fields(
            "vx_reference",
            TypeKind::Base,
            field_map(vx_tables::REFERENCE_OBJECTS),
        ));
        for (name, attrs) in vx_tables::OBJECTS {
            reg.insert(TypeDescriptor::fields(name, TypeKind::Object, field_map(attrs)));
        }

        for (alias, name) in vx_tables::STANDARD_ALIASES {
            reg.standard_alias.insert(alias.to_string(), name.to_string());
            reg.reverse_alias.insert(name.to_string(), alias.to_string());
        }

        reg
    }

    fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    fn compose_sequence(
        &self,
        kind: TypeKind,
        vendor: &str,
        secondary: &str,
        first: u32,
        labels: &[&str],
    ) -> Result<IndexMap<String, u32>, CoreError> {
        let (secondary_table, shift) = match kind {
            TypeKind::Attribute => (VX_TYPE_E, TYPE_SHIFT),
            TypeKind::Kernel => ("vx_library_e", GROUP_SHIFT),
            _ => ("vx_enum_e", GROUP_SHIFT),
        };
        let vendor = self.require_value("vx_vendor_id_e", vendor)?;
        let secondary = self.require_value(secondary_table, secondary)?;
        Ok(labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let value = bitfield::compose(vendor, secondary, shift, first + i as u32);
                (label.to_string(), value)
            })
            .collect())
    }

    fn require_value(&self, table: &str, label: &str) -> Result<u32, CoreError> {
        self.value_of(table, label).ok_or_else(|| CoreError::UnknownLabel {
            table: table.to_string(),
            label: label.to_string(),
        })
    }

    // -------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------

    /// Registers a new type.
    ///
    /// Returns [`CoreError::DuplicateTypeName`] if the name is taken.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<(), CoreError> {
        if self.types.contains_key(&descriptor.name) {
            return Err(CoreError::DuplicateTypeName {
                name: descriptor.name,
            });
        }
        self.insert(descriptor);
        Ok(())
    }

    /// Registers a bitfield-composed table (vendor extension attributes,
    /// enums or kernel ids). Labels are numbered from `first`.
    pub fn register_sequence(
        &mut self,
        name: &str,
        kind: TypeKind,
        vendor: &str,
        secondary: &str,
        first: u32,
        labels: &[&str],
    ) -> Result<(), CoreError> {
        if !matches!(kind, TypeKind::Attribute | TypeKind::Enum | TypeKind::Kernel) {
            return Err(CoreError::UnknownType {
                name: format!("{name} (not a bitfield kind)"),
            });
        }
        let values = self.compose_sequence(kind, vendor, secondary, first, labels)?;
        self.register(TypeDescriptor::values(name, kind, values))
    }

    /// Registers a fixed-size user struct, or returns its id if a user struct
    /// of that name already exists.
    ///
    /// The name is appended to `vx_type_e` with the next id from the reserved
    /// space, aliased to itself in both directions, and registered as a byte
    /// array of `size` elements.
    pub fn register_user_struct(&mut self, name: &str, size: usize) -> Result<u32, CoreError> {
        if let Some(existing) = self.value_of(VX_TYPE_E, name) {
            return Ok(existing);
        }
        if self.types.contains_key(name) {
            return Err(CoreError::DuplicateTypeName {
                name: name.to_string(),
            });
        }
        if self.next_user_struct >= Self::USER_STRUCT_LIMIT {
            return Err(CoreError::UserStructSpaceExhausted {
                name: name.to_string(),
                limit: Self::USER_STRUCT_LIMIT,
            });
        }
        let id = self.next_user_struct;
        match self.types.get_mut(VX_TYPE_E).map(|t| &mut t.body) {
            Some(TypeBody::Values { values }) => {
                values.insert(name.to_string(), id);
            }
            _ => {
                return Err(CoreError::UnknownType {
                    name: VX_TYPE_E.to_string(),
                })
            }
        }
        self.next_user_struct += 1;
        self.standard_alias.insert(name.to_string(), name.to_string());
        self.reverse_alias.insert(name.to_string(), name.to_string());
        self.insert(TypeDescriptor::array(name, "vx_uint8", size));
        Ok(id)
    }

    // -------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------

    pub fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Like [`lookup`](Self::lookup) but fails with [`CoreError::UnknownType`].
    pub fn get(&self, name: &str) -> Result<&TypeDescriptor, CoreError> {
        self.types.get(name).ok_or_else(|| CoreError::UnknownType {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All types of one kind, in registration order.
    pub fn of_kind(&self, kind: TypeKind) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values().filter(move |t| t.kind == kind)
    }

    /// Value of `label` in table `type_name`.
    pub fn value_of(&self, type_name: &str, label: &str) -> Option<u32> {
        self.types.get(type_name)?.value_of(label)
    }

    /// Label of `value` in table `type_name`.
    pub fn label_of(&self, type_name: &str, value: u32) -> Option<&str> {
        self.types.get(type_name)?.label_of(value)
    }

    /// Numeric id of a kernel label such as `VX_KERNEL_COLOR_CONVERT`.
    pub fn kernel_id(&self, label: &str) -> Option<u32> {
        self.of_kind(TypeKind::Kernel).find_map(|t| t.value_of(label))
    }

    /// True for enumerated tables and `vx_enum`, whose defaults are numbers.
    pub fn is_enum_like(&self, name: &str) -> bool {
        match self.types.get(name) {
            Some(t) => t.kind.is_enumerated() || t.name == "vx_enum",
            None => false,
        }
    }

    // -------------------------------------------------------------------
    // Value -> label resolution
    // -------------------------------------------------------------------

    fn find_label(&self, value: u32, kinds: &[TypeKind]) -> Option<ValueLabel> {
        self.types
            .values()
            .filter(|t| kinds.contains(&t.kind))
            .find_map(|t| {
                t.label_of(value).map(|label| ValueLabel {
                    type_name: t.name.clone(),
                    label: label.to_string(),
                })
            })
    }

    /// Resolves a value without knowing its type. Tries constants, then enums
    /// and kernel ids, then attributes; otherwise renders the number as a
    /// `vx_uint32`.
    pub fn value_label(&self, value: u32) -> ValueLabel {
        self.find_label(value, &[TypeKind::Constant])
            .or_else(|| self.find_label(value, &[TypeKind::Enum, TypeKind::Kernel]))
            .or_else(|| self.find_label(value, &[TypeKind::Attribute]))
            .unwrap_or_else(|| ValueLabel {
                type_name: "vx_uint32".to_string(),
                label: value.to_string(),
            })
    }

    /// `vx_type_e` label of the object type embedded in an attribute value.
    pub fn object_type_name(&self, value: u32) -> Option<&str> {
        self.label_of(VX_TYPE_E, bitfield::object_type_id(value))
    }

    /// `vx_enum_e` label of the group embedded in an enum value.
    pub fn enum_group_name(&self, value: u32) -> Option<&str> {
        self.label_of("vx_enum_e", bitfield::enum_id(value))
    }

    /// Attribute table name for an attribute value, e.g. `vx_image_attribute_e`.
    pub fn attribute_enum_name(&self, value: u32) -> Option<String> {
        let object = self.object_type_name(value)?;
        let stem = object.strip_prefix("VX_TYPE_")?;
        Some(format!("vx_{}_attribute_e", stem.to_lowercase()))
    }

    /// Labels and values of `name` inside `range`, skipping `exclude`d labels,
    /// sorted on value.
    pub fn labels_values(
        &self,
        name: &str,
        range: impl RangeBounds<u32>,
        exclude: &[&str],
    ) -> Vec<(String, u32)> {
        let Some(values) = self.types.get(name).and_then(|t| t.value_table()) else {
            return Vec::new();
        };
        let mut out: Vec<(String, u32)> = values
            .iter()
            .filter(|(k, v)| range.contains(*v) && !exclude.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        out.sort_by_key(|(_, v)| *v);
        out
    }

    // -------------------------------------------------------------------
    // Aliases
    // -------------------------------------------------------------------

    /// `VX_TYPE_FLOAT32` -> `vx_float32`.
    pub fn type_from_enum(&self, alias: &str) -> Option<&str> {
        self.standard_alias.get(alias).map(String::as_str)
    }

    /// `vx_float32` -> `VX_TYPE_FLOAT32`.
    pub fn enum_from_type(&self, name: &str) -> Option<&str> {
        self.reverse_alias.get(name).map(String::as_str)
    }

    /// Element tag for a `VX_TYPE_*` label (`VX_TYPE_FLOAT32` -> `float32`);
    /// every other label is a user struct and maps to `user`.
    pub fn tag_from_enum(alias: &str) -> String {
        match alias.strip_prefix("VX_TYPE_") {
            Some(stem) => stem.to_lowercase(),
            None => "user".to_string(),
        }
    }

    // -------------------------------------------------------------------
    // Default values
    // -------------------------------------------------------------------

    /// Derives the default value of a type.
    ///
    /// Structs and objects give a map of field defaults, unions the default of
    /// their first variant, arrays the element default repeated, opaque types
    /// [`DefaultValue::Empty`], inherent types their literal, and enumerated
    /// types their first value as a decimal string. `vx_enum` is `"0"` and
    /// `vx_reference` its first object type label.
    pub fn default_value(&self, name: &str) -> Result<DefaultValue, CoreError> {
        if name == "vx_enum" {
            return Ok(DefaultValue::Text("0".to_string()));
        }
        let ty = self.get(name)?;
        match &ty.body {
            TypeBody::Fields { fields } => match ty.kind {
                TypeKind::Union => match fields.values().next() {
                    Some(first) => self.default_value(first),
                    None => Ok(DefaultValue::Empty),
                },
                TypeKind::Base => Ok(fields
                    .values()
                    .next()
                    .map(|v| DefaultValue::Text(v.clone()))
                    .unwrap_or(DefaultValue::Empty)),
                _ => {
                    let mut map = IndexMap::new();
                    for (field, field_type) in fields {
                        map.insert(field.clone(), self.default_value(field_type)?);
                    }
                    Ok(DefaultValue::Map(map))
                }
            },
            TypeBody::Array { element, length } => {
                let element = self.default_value(element)?;
                Ok(DefaultValue::List(vec![element; *length]))
            }
            TypeBody::Opaque => Ok(DefaultValue::Empty),
            TypeBody::Inherent { literal } => Ok(DefaultValue::Text(literal.clone())),
            TypeBody::Values { values } => Ok(values
                .values()
                .next()
                .map(|v| DefaultValue::Text(v.to_string()))
                .unwrap_or(DefaultValue::Empty)),
        }
    }
}

fn field_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

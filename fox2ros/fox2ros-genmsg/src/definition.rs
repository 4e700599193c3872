//! Conversion from a [`Schema`] to a dialect-specific [`RosMsgDefinition`].

use std::collections::HashSet;

use fox2ros_schema::{FieldArray, FieldType, Primitive, Schema, SchemaCatalog};

use crate::{dialect::RosDialect, error::GenerateError, mapper};

/// Namespace under which foxglove-origin definitions are published.
pub(crate) const FOXGLOVE_NAMESPACE: &str = "foxglove_msgs";

/// A resolved field type — final text, except for the time and duration
/// builtins, which stay symbolic until the renderer substitutes the
/// dialect-specific name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosType {
    /// Final textual type name, e.g. `uint8` or `geometry_msgs/Pose`.
    Literal(String),
    /// Substituted with the dialect's time builtin at render time.
    Time,
    /// Substituted with the dialect's duration builtin at render time.
    Duration,
}

/// One line of a `.msg` definition body: a field or a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosMsgField {
    pub name: String,
    pub ty: RosType,
    pub is_array: bool,
    /// Fixed length, when `is_array` and the length is known.
    pub array_length: Option<usize>,
    pub is_constant: bool,
    /// Literal value text; required for constants.
    pub value: Option<String>,
    pub description: Option<String>,
}

/// A schema resolved against one dialect, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosMsgDefinition {
    /// The schema name as it appears in the catalog.
    pub original_name: String,
    /// Dialect-agnostic qualified name, used for field types and
    /// `MSG:` headers, e.g. `foxglove_msgs/Log`.
    pub msg_interface_name: String,
    /// Dialect-specific qualified name, used in the header comment,
    /// e.g. `foxglove_msgs/msg/Log` for ROS 2.
    pub full_interface_name: String,
    pub description: Option<String>,
    pub fields: Vec<RosMsgField>,
}

/// Resolve one schema into a [`RosMsgDefinition`] for `dialect`.
///
/// Fields are processed in declaration order. An enum field contributes
/// one `uint8` value field preceded by one constant per enum value; the
/// constants of an enum already expanded earlier in the same call are
/// not re-emitted. A byte-sequence field becomes a `uint8` array.
///
/// The per-call tracking sets for enum and constant names are freshly
/// allocated here, so concurrent builds over a shared catalog need no
/// coordination.
pub fn build_definition(
    schema: &Schema,
    catalog: &SchemaCatalog,
    dialect: RosDialect,
) -> Result<RosMsgDefinition, GenerateError> {
    let mut seen_enum_names: HashSet<&str> = HashSet::new();
    let mut seen_constant_names: HashSet<&str> = HashSet::new();
    let mut fields: Vec<RosMsgField> = Vec::with_capacity(schema.fields.len());

    for field in &schema.fields {
        let mut is_array = field.array.is_some();
        let array_length = match field.array {
            Some(FieldArray::Fixed(len)) => Some(len),
            Some(FieldArray::Unbounded) | None => None,
        };

        let ty = match &field.ty {
            FieldType::Enum(enum_name) => {
                let def = catalog
                    .enum_schema(enum_name)
                    .ok_or_else(|| GenerateError::UnknownEnum {
                        name: enum_name.clone(),
                    })?;
                if seen_enum_names.insert(def.name.as_str()) {
                    for value in &def.values {
                        if !seen_constant_names.insert(value.name.as_str()) {
                            return Err(GenerateError::DuplicateConstantName {
                                name: value.name.clone(),
                                schema: schema.name.clone(),
                            });
                        }
                        if !(0..=255).contains(&value.value) {
                            return Err(GenerateError::EnumValueOutOfRange {
                                name: value.name.clone(),
                                value: value.value,
                            });
                        }
                        fields.push(RosMsgField {
                            name: value.name.clone(),
                            ty: RosType::Literal("uint8".to_string()),
                            is_array: false,
                            array_length: None,
                            is_constant: true,
                            value: Some(value.value.to_string()),
                            description: value.description.clone(),
                        });
                    }
                }
                RosType::Literal("uint8".to_string())
            }
            FieldType::Nested(schema_name) => {
                let nested =
                    catalog
                        .schema(schema_name)
                        .ok_or_else(|| GenerateError::UnknownSchema {
                            name: schema_name.clone(),
                        })?;
                match &nested.ros_equivalent {
                    Some(equivalent) => RosType::Literal(equivalent.clone()),
                    None => RosType::Literal(format!("{FOXGLOVE_NAMESPACE}/{}", nested.name)),
                }
            }
            FieldType::Primitive(primitive) => match primitive {
                Primitive::Bytes => {
                    // A byte sequence is itself emitted as `uint8[]`, so an
                    // input array of byte sequences has no representation.
                    if field.array.is_some() {
                        return Err(GenerateError::UnsupportedByteArray {
                            field: field.name.clone(),
                        });
                    }
                    is_array = true;
                    RosType::Literal("uint8".to_string())
                }
                Primitive::Uint32 => RosType::Literal("uint32".to_string()),
                Primitive::Time => RosType::Time,
                Primitive::Duration => RosType::Duration,
                Primitive::String | Primitive::Boolean | Primitive::Float64 => {
                    RosType::Literal(mapper::scalar_type_name(*primitive).to_string())
                }
            },
        };

        fields.push(RosMsgField {
            name: match dialect {
                RosDialect::Ros1 => field.name.clone(),
                RosDialect::Ros2 => field.name.to_lowercase(),
            },
            ty,
            is_array,
            array_length,
            is_constant: false,
            value: None,
            description: field.description.clone(),
        });
    }

    let msg_interface_name = format!("{FOXGLOVE_NAMESPACE}/{}", schema.name);
    let full_interface_name = match dialect {
        RosDialect::Ros1 => msg_interface_name.clone(),
        RosDialect::Ros2 => format!("{FOXGLOVE_NAMESPACE}/msg/{}", schema.name),
    };

    Ok(RosMsgDefinition {
        original_name: schema.name.clone(),
        msg_interface_name,
        full_interface_name,
        description: schema.description.clone(),
        fields,
    })
}

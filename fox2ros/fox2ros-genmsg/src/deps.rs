//! Transitive dependency discovery for merged schema bundles.

use fox2ros_schema::{FieldType, Schema, SchemaCatalog};

use crate::error::GenerateError;

/// One type referenced, directly or transitively, by a schema.
///
/// Identity is the variant plus the referenced name. The walk emits
/// duplicates freely; the bundle assembler dedupes on first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// Entry in the ROS common-message table, e.g. `geometry_msgs/Pose`.
    Ros(String),
    /// Another foxglove-origin schema, referenced by catalog name.
    Foxglove(String),
}

/// Append every type `schema` depends on to `out`, in pre-order.
///
/// Nested fields are walked in declaration order. A nested schema with
/// a `ros_equivalent` contributes that common type followed by the
/// complex fields of its common definition, recursively; any other
/// nested schema contributes itself followed by its own dependencies.
///
/// Termination relies on the catalog being acyclic, which holds for
/// every catalog the schema format can describe in practice.
pub fn collect_dependencies(
    schema: &Schema,
    catalog: &SchemaCatalog,
    out: &mut Vec<Dependency>,
) -> Result<(), GenerateError> {
    for field in &schema.fields {
        let FieldType::Nested(name) = &field.ty else {
            continue;
        };
        let nested = catalog
            .schema(name)
            .ok_or_else(|| GenerateError::UnknownSchema { name: name.clone() })?;
        match &nested.ros_equivalent {
            Some(equivalent) => {
                out.push(Dependency::Ros(equivalent.clone()));
                collect_ros_dependencies(equivalent, out)?;
            }
            None => {
                out.push(Dependency::Foxglove(nested.name.clone()));
                collect_dependencies(nested, catalog, out)?;
            }
        }
    }
    Ok(())
}

/// Walk the complex fields of one common definition, appending each
/// referenced common type in pre-order.
fn collect_ros_dependencies(name: &str, out: &mut Vec<Dependency>) -> Result<(), GenerateError> {
    let spec = fox2ros_ros_common::lookup(name).ok_or_else(|| GenerateError::UnknownRosType {
        name: name.to_string(),
    })?;
    for field in spec.fields {
        if field.is_complex {
            out.push(Dependency::Ros(field.ty.to_string()));
            collect_ros_dependencies(field.ty, out)?;
        }
    }
    Ok(())
}

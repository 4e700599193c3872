//! Merged multi-definition bundle assembly.

use std::collections::HashSet;

use fox2ros_ros_common::RosSpec;
use fox2ros_schema::{Schema, SchemaCatalog};

use crate::{
    definition::{RosMsgDefinition, RosMsgField, RosType, build_definition},
    deps::{Dependency, collect_dependencies},
    dialect::RosDialect,
    error::GenerateError,
    render::render_definition,
};

/// Separator line between definitions in a merged bundle: 80 `=`
/// characters, matching the connection-header convention understood by
/// rosbag and MCAP tooling.
const DELIMITER: &str =
    "================================================================================";

/// Render one schema as a standalone `.msg` definition.
pub fn generate_msg(
    schema: &Schema,
    catalog: &SchemaCatalog,
    dialect: RosDialect,
) -> Result<String, GenerateError> {
    render_definition(&build_definition(schema, catalog, dialect)?, dialect)
}

/// Render a schema together with every definition it transitively
/// depends on.
///
/// The root definition comes first. Each dependency follows in
/// first-discovery order, exactly once, preceded by the delimiter line
/// and a `MSG: <qualified-name>` header. Common-catalog entries are
/// rendered directly from the table; foxglove-origin entries go through
/// the full build. Any error aborts the whole merge.
pub fn generate_merged_schema(
    schema: &Schema,
    catalog: &SchemaCatalog,
    dialect: RosDialect,
) -> Result<String, GenerateError> {
    let mut deps = Vec::new();
    collect_dependencies(schema, catalog, &mut deps)?;
    let mut seen = HashSet::new();
    deps.retain(|dep| seen.insert(dep.clone()));

    let mut out = generate_msg(schema, catalog, dialect)?;
    for dep in &deps {
        let (name, block) = match dep {
            Dependency::Ros(name) => {
                let spec = fox2ros_ros_common::lookup(name).ok_or_else(|| {
                    GenerateError::UnknownRosType { name: name.clone() }
                })?;
                (name.clone(), render_definition(&common_definition(spec), dialect)?)
            }
            Dependency::Foxglove(name) => {
                let nested =
                    catalog
                        .schema(name)
                        .ok_or_else(|| GenerateError::UnknownSchema { name: name.clone() })?;
                let definition = build_definition(nested, catalog, dialect)?;
                let block = render_definition(&definition, dialect)?;
                (definition.msg_interface_name, block)
            }
        };
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str("MSG: ");
        out.push_str(&name);
        out.push('\n');
        out.push_str(&block);
    }
    Ok(out)
}

/// Lift a common-catalog definition into the renderer's field model.
///
/// The table is already in final `.msg` form, so fields are taken
/// as-is, with none of the enum, array, or byte special-casing applied
/// to foxglove-origin schemas.
fn common_definition(spec: &RosSpec) -> RosMsgDefinition {
    RosMsgDefinition {
        original_name: spec.name.to_string(),
        msg_interface_name: spec.name.to_string(),
        full_interface_name: spec.name.to_string(),
        description: None,
        fields: spec
            .fields
            .iter()
            .map(|field| RosMsgField {
                name: field.name.to_string(),
                ty: RosType::Literal(field.ty.to_string()),
                is_array: false,
                array_length: None,
                is_constant: false,
                value: None,
                description: None,
            })
            .collect(),
    }
}

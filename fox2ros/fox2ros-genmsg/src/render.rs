//! Text rendering of a [`RosMsgDefinition`] into `.msg` format.

use crate::{
    definition::{RosMsgDefinition, RosMsgField, RosType},
    dialect::RosDialect,
    error::GenerateError,
    mapper,
};

/// Comment line carried by every generated definition.
pub(crate) const ATTRIBUTION: &str = "# Generated by https://github.com/foxglove/foxglove-sdk";

/// Render one definition as `.msg` text.
///
/// The output starts with a `# <qualified-name>` header comment, the
/// definition's description (one comment line per source line), a blank
/// line, and the attribution comment. Each field follows, preceded by a
/// blank line whenever it or the field before it carries a description;
/// the first field always gets one. Time and duration builtins are
/// substituted with their dialect names here, never earlier.
pub fn render_definition(
    definition: &RosMsgDefinition,
    dialect: RosDialect,
) -> Result<String, GenerateError> {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}", definition.full_interface_name));
    if let Some(description) = &definition.description {
        push_comment_block(&mut lines, description);
    }
    lines.push(String::new());
    lines.push(ATTRIBUTION.to_string());

    // The header comment block above counts as a trailing comment for
    // the first field's blank-line placement.
    let mut prev_had_description = true;
    for field in &definition.fields {
        if prev_had_description || field.description.is_some() {
            lines.push(String::new());
        }
        if let Some(description) = &field.description {
            push_comment_block(&mut lines, description);
        }
        lines.push(field_line(field, dialect)?);
        prev_had_description = field.description.is_some();
    }

    Ok(lines.join("\n") + "\n")
}

/// Push one `#` comment line per source line, trimming the block as a
/// whole (not per line).
fn push_comment_block(lines: &mut Vec<String>, text: &str) {
    for line in text.trim().lines() {
        if line.is_empty() {
            lines.push("#".to_string());
        } else {
            lines.push(format!("# {line}"));
        }
    }
}

/// Render exactly one `<type>[<len>] <name>[=<value>]` line.
fn field_line(field: &RosMsgField, dialect: RosDialect) -> Result<String, GenerateError> {
    let ty = match &field.ty {
        RosType::Literal(name) => name.as_str(),
        RosType::Time => mapper::time_type_name(dialect),
        RosType::Duration => mapper::duration_type_name(dialect),
    };

    let array = if field.is_array {
        match field.array_length {
            Some(len) => format!("[{len}]"),
            None => "[]".to_string(),
        }
    } else {
        String::new()
    };

    let constant = if field.is_constant {
        let value =
            field
                .value
                .as_deref()
                .ok_or_else(|| GenerateError::MissingConstantValue {
                    field: field.name.clone(),
                })?;
        format!("={value}")
    } else {
        String::new()
    };

    Ok(format!("{ty}{array} {}{constant}", field.name))
}

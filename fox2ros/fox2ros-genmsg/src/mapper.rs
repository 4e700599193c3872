//! Dialect-specific textual names for schema primitives.

use fox2ros_schema::Primitive;

use crate::dialect::RosDialect;

/// Textual name of a dialect-invariant scalar primitive.
///
/// Only `String`, `Boolean`, and `Float64` are routed through here. The
/// builder resolves `Uint32` and `Bytes` itself (bytes force an array
/// marker), and `Time`/`Duration` are substituted at render time.
pub(crate) fn scalar_type_name(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "string",
        Primitive::Boolean => "bool",
        Primitive::Float64 => "float64",
        Primitive::Uint32 | Primitive::Bytes | Primitive::Time | Primitive::Duration => {
            unreachable!("{primitive:?} is not resolved through the scalar map")
        }
    }
}

/// Dialect name of the time builtin.
pub(crate) fn time_type_name(dialect: RosDialect) -> &'static str {
    match dialect {
        RosDialect::Ros1 => "time",
        RosDialect::Ros2 => "builtin_interfaces/Time",
    }
}

/// Dialect name of the duration builtin.
pub(crate) fn duration_type_name(dialect: RosDialect) -> &'static str {
    match dialect {
        RosDialect::Ros1 => "duration",
        RosDialect::Ros2 => "builtin_interfaces/Duration",
    }
}

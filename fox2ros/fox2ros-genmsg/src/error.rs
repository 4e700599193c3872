//! Error type for the generation pipeline.

/// Error returned by the `.msg` generation pipeline.
///
/// Every variant is fatal to the call that produced it; no partial
/// definition or bundle is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// A constant field reached the renderer without a literal value.
    #[error("constant field '{field}' has no value")]
    MissingConstantValue { field: String },

    /// An enum value cannot be encoded as a single unsigned byte.
    #[error("enum value '{name}' ({value}) is outside the uint8 range")]
    EnumValueOutOfRange { name: String, value: i64 },

    /// Two enums referenced by one schema declare the same value name.
    #[error("duplicate enum constant '{name}' in schema '{schema}'")]
    DuplicateConstantName { name: String, schema: String },

    /// Arrays of byte sequences have no `.msg` representation.
    #[error("field '{field}' is an array of byte sequences")]
    UnsupportedByteArray { field: String },

    /// A nested field references a schema missing from the catalog.
    #[error("unknown schema '{name}'")]
    UnknownSchema { name: String },

    /// An enum field references an enum missing from the catalog.
    #[error("unknown enum '{name}'")]
    UnknownEnum { name: String },

    /// A `ros_equivalent` or a complex common field references a type
    /// missing from the common-message table.
    #[error("unknown ROS common type '{name}'")]
    UnknownRosType { name: String },
}

//! Schema, field, and enum definitions.

/// Scalar value kinds a [`Field`] may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Unbounded UTF-8 string.
    String,
    Boolean,
    Float64,
    Uint32,
    /// Opaque byte sequence.
    Bytes,
    /// Point in time (seconds + nanoseconds).
    Time,
    /// Signed span of time (seconds + nanoseconds).
    Duration,
}

/// The type of a [`Field`] — a closed set, so consumers can match
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Primitive(Primitive),
    /// Name of another [`Schema`] in the catalog.
    Nested(String),
    /// Name of an [`EnumSchema`] in the catalog.
    Enum(String),
}

/// Array marker on a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArray {
    /// Variable-length array (`T[]`).
    Unbounded,
    /// Fixed-length array (`T[n]`).
    Fixed(usize),
}

/// One field of a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub ty: FieldType,
    pub array: Option<FieldArray>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            array: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_array(mut self, array: FieldArray) -> Self {
        self.array = Some(array);
        self
    }
}

/// A named value of an [`EnumSchema`].
///
/// Values are kept as `i64` here; generators that need a narrower
/// encoding validate the range themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
    pub description: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An enumeration referenced by [`FieldType::Enum`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSchema {
    pub name: String,
    pub description: Option<String>,
    /// Values in declaration order.
    pub values: Vec<EnumValue>,
}

/// One message type: a name, an optional description, and an ordered
/// field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Globally unique name within the catalog, e.g. `PoseInFrame`.
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    /// Qualified name of a ROS common message that is semantically
    /// identical to this schema, e.g. `geometry_msgs/Pose`. When set,
    /// references to this schema resolve to the ROS type instead of a
    /// foxglove-origin definition.
    pub ros_equivalent: Option<String>,
}

//! Schema catalog and the built-in foxglove schema set.

use std::collections::BTreeMap;

use crate::schema::{EnumSchema, EnumValue, Field, FieldArray, FieldType, Primitive, Schema};

/// A read-only set of schemas and enums, keyed by name.
///
/// Iteration order is the lexicographic name order, so generators that
/// walk the whole catalog produce deterministic output.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schemas: BTreeMap<String, Schema>,
    enums: BTreeMap<String, EnumSchema>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_schema(&mut self, schema: Schema) {
        self.schemas.insert(schema.name.clone(), schema);
    }

    pub fn insert_enum(&mut self, def: EnumSchema) {
        self.enums.insert(def.name.clone(), def);
    }

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    pub fn enum_schema(&self, name: &str) -> Option<&EnumSchema> {
        self.enums.get(name)
    }

    pub fn schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumSchema> {
        self.enums.values()
    }

    /// The shipped foxglove schema set.
    ///
    /// Schemas that are semantically identical to a ROS common message
    /// (`Vector3`, `Quaternion`, `Pose`) declare the matching
    /// `ros_equivalent` and are published as that type.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.insert_enum(EnumSchema {
            name: "LogLevel".to_string(),
            description: Some("Log level".to_string()),
            values: vec![
                EnumValue::new("UNKNOWN", 0),
                EnumValue::new("DEBUG", 1),
                EnumValue::new("INFO", 2),
                EnumValue::new("WARNING", 3),
                EnumValue::new("ERROR", 4),
                EnumValue::new("FATAL", 5),
            ],
        });
        catalog.insert_enum(EnumSchema {
            name: "PositionCovarianceType".to_string(),
            description: Some("Type of position covariance".to_string()),
            values: vec![
                EnumValue::new("UNKNOWN", 0),
                EnumValue::new("APPROXIMATED", 1),
                EnumValue::new("DIAGONAL_KNOWN", 2),
                EnumValue::new("KNOWN", 3),
            ],
        });

        catalog.insert_schema(color());
        catalog.insert_schema(vector3());
        catalog.insert_schema(quaternion());
        catalog.insert_schema(pose());
        catalog.insert_schema(log());
        catalog.insert_schema(compressed_image());
        catalog.insert_schema(raw_image());
        catalog.insert_schema(frame_transform());
        catalog.insert_schema(pose_in_frame());
        catalog.insert_schema(poses_in_frame());
        catalog.insert_schema(laser_scan());
        catalog.insert_schema(location_fix());

        catalog
    }
}

fn float64(name: &str, description: &str) -> Field {
    Field::new(name, FieldType::Primitive(Primitive::Float64)).with_description(description)
}

fn string(name: &str, description: &str) -> Field {
    Field::new(name, FieldType::Primitive(Primitive::String)).with_description(description)
}

fn timestamp(description: &str) -> Field {
    Field::new("timestamp", FieldType::Primitive(Primitive::Time)).with_description(description)
}

fn color() -> Schema {
    Schema {
        name: "Color".to_string(),
        description: Some("A color in RGBA format".to_string()),
        fields: vec![
            float64("r", "Red value between 0 and 1"),
            float64("g", "Green value between 0 and 1"),
            float64("b", "Blue value between 0 and 1"),
            float64("a", "Alpha value between 0 and 1"),
        ],
        ros_equivalent: None,
    }
}

fn vector3() -> Schema {
    Schema {
        name: "Vector3".to_string(),
        description: Some("A vector in 3D space that represents a direction only".to_string()),
        fields: vec![
            float64("x", "x coordinate length"),
            float64("y", "y coordinate length"),
            float64("z", "z coordinate length"),
        ],
        ros_equivalent: Some("geometry_msgs/Vector3".to_string()),
    }
}

fn quaternion() -> Schema {
    Schema {
        name: "Quaternion".to_string(),
        description: Some("A quaternion representing a rotation in 3D space".to_string()),
        fields: vec![
            float64("x", "x value"),
            float64("y", "y value"),
            float64("z", "z value"),
            float64("w", "w value"),
        ],
        ros_equivalent: Some("geometry_msgs/Quaternion".to_string()),
    }
}

fn pose() -> Schema {
    Schema {
        name: "Pose".to_string(),
        description: Some(
            "A position and orientation for an object or reference frame in 3D space".to_string(),
        ),
        fields: vec![
            Field::new("position", FieldType::Nested("Vector3".to_string()))
                .with_description("Point denoting position in 3D space"),
            Field::new("orientation", FieldType::Nested("Quaternion".to_string()))
                .with_description("Quaternion denoting orientation in 3D space"),
        ],
        ros_equivalent: Some("geometry_msgs/Pose".to_string()),
    }
}

fn log() -> Schema {
    Schema {
        name: "Log".to_string(),
        description: Some("A log message".to_string()),
        fields: vec![
            timestamp("Timestamp of log message"),
            Field::new("level", FieldType::Enum("LogLevel".to_string()))
                .with_description("Log level"),
            string("message", "Log message"),
            string("name", "Process or node name"),
            string("file", "Filename"),
            Field::new("line", FieldType::Primitive(Primitive::Uint32))
                .with_description("Line number in the file"),
        ],
        ros_equivalent: None,
    }
}

fn compressed_image() -> Schema {
    Schema {
        name: "CompressedImage".to_string(),
        description: Some("A compressed image".to_string()),
        fields: vec![
            timestamp("Timestamp of image"),
            string("frame_id", "Frame of reference for the image"),
            Field::new("data", FieldType::Primitive(Primitive::Bytes))
                .with_description("Compressed image data"),
            string("format", "Image format, e.g. `jpeg` or `png`"),
        ],
        ros_equivalent: None,
    }
}

fn raw_image() -> Schema {
    Schema {
        name: "RawImage".to_string(),
        description: Some("A raw image".to_string()),
        fields: vec![
            timestamp("Timestamp of image"),
            string("frame_id", "Frame of reference for the image"),
            Field::new("width", FieldType::Primitive(Primitive::Uint32))
                .with_description("Image width"),
            Field::new("height", FieldType::Primitive(Primitive::Uint32))
                .with_description("Image height"),
            string("encoding", "Encoding of the raw image data"),
            Field::new("step", FieldType::Primitive(Primitive::Uint32))
                .with_description("Byte length of a single row"),
            Field::new("data", FieldType::Primitive(Primitive::Bytes))
                .with_description("Raw image data"),
        ],
        ros_equivalent: None,
    }
}

fn frame_transform() -> Schema {
    Schema {
        name: "FrameTransform".to_string(),
        description: Some("A transform between two reference frames in 3D space".to_string()),
        fields: vec![
            timestamp("Timestamp of transform"),
            string("parent_frame_id", "Name of the parent frame"),
            string("child_frame_id", "Name of the child frame"),
            Field::new("translation", FieldType::Nested("Vector3".to_string()))
                .with_description("Translation component of the transform"),
            Field::new("rotation", FieldType::Nested("Quaternion".to_string()))
                .with_description("Rotation component of the transform"),
        ],
        ros_equivalent: None,
    }
}

fn pose_in_frame() -> Schema {
    Schema {
        name: "PoseInFrame".to_string(),
        description: Some(
            "A timestamped pose for an object or reference frame in 3D space".to_string(),
        ),
        fields: vec![
            timestamp("Timestamp of pose"),
            string("frame_id", "Frame of reference for pose position and orientation"),
            Field::new("pose", FieldType::Nested("Pose".to_string()))
                .with_description("Pose in 3D space"),
        ],
        ros_equivalent: None,
    }
}

fn poses_in_frame() -> Schema {
    Schema {
        name: "PosesInFrame".to_string(),
        description: Some("An array of timestamped poses for an object or reference frame in 3D space".to_string()),
        fields: vec![
            timestamp("Timestamp of pose"),
            string("frame_id", "Frame of reference for pose position and orientation"),
            Field::new("poses", FieldType::Nested("Pose".to_string()))
                .with_array(FieldArray::Unbounded)
                .with_description("Poses in 3D space"),
        ],
        ros_equivalent: None,
    }
}

fn laser_scan() -> Schema {
    Schema {
        name: "LaserScan".to_string(),
        description: Some("A single scan from a planar laser range-finder".to_string()),
        fields: vec![
            timestamp("Timestamp of scan"),
            string("frame_id", "Frame of reference"),
            Field::new("pose", FieldType::Nested("Pose".to_string()))
                .with_description("Origin of scan relative to frame of reference"),
            float64("start_angle", "Bearing of first point, in radians"),
            float64("end_angle", "Bearing of last point, in radians"),
            Field::new("ranges", FieldType::Primitive(Primitive::Float64))
                .with_array(FieldArray::Unbounded)
                .with_description("Distance of detections from origin"),
            Field::new("intensities", FieldType::Primitive(Primitive::Float64))
                .with_array(FieldArray::Unbounded)
                .with_description("Intensity of detections"),
        ],
        ros_equivalent: None,
    }
}

fn location_fix() -> Schema {
    Schema {
        name: "LocationFix".to_string(),
        description: Some("A navigation satellite fix for any Global Navigation Satellite System".to_string()),
        fields: vec![
            timestamp("Timestamp of the message"),
            string("frame_id", "Frame for the sensor"),
            float64("latitude", "Latitude in degrees"),
            float64("longitude", "Longitude in degrees"),
            float64("altitude", "Altitude in meters"),
            Field::new("position_covariance", FieldType::Primitive(Primitive::Float64))
                .with_array(FieldArray::Fixed(9))
                .with_description(
                    "Position covariance (m^2) defined relative to a tangential plane through the reported position, in row-major order",
                ),
            Field::new(
                "position_covariance_type",
                FieldType::Enum("PositionCovarianceType".to_string()),
            )
            .with_description("Type of the position covariance"),
        ],
        ros_equivalent: None,
    }
}

use fox2ros_genmsg::{GenerateError, RosDialect, RosType, build_definition};
use fox2ros_schema::{
    EnumSchema, EnumValue, Field, FieldArray, FieldType, Primitive, Schema, SchemaCatalog,
};

fn catalog_with(schemas: Vec<Schema>, enums: Vec<EnumSchema>) -> SchemaCatalog {
    let mut catalog = SchemaCatalog::new();
    for schema in schemas {
        catalog.insert_schema(schema);
    }
    for def in enums {
        catalog.insert_enum(def);
    }
    catalog
}

fn schema(name: &str, fields: Vec<Field>) -> Schema {
    Schema {
        name: name.to_string(),
        description: None,
        fields,
        ros_equivalent: None,
    }
}

#[test]
fn flat_primitives_resolve_in_order() {
    let schema = schema(
        "Telemetry",
        vec![
            Field::new("ok", FieldType::Primitive(Primitive::Boolean)),
            Field::new("value", FieldType::Primitive(Primitive::Float64)),
            Field::new("label", FieldType::Primitive(Primitive::String)),
            Field::new("count", FieldType::Primitive(Primitive::Uint32)),
        ],
    );
    let catalog = catalog_with(vec![], vec![]);

    let definition = build_definition(&schema, &catalog, RosDialect::Ros1).unwrap();
    let types: Vec<_> = definition.fields.iter().map(|f| f.ty.clone()).collect();
    assert_eq!(
        types,
        vec![
            RosType::Literal("bool".to_string()),
            RosType::Literal("float64".to_string()),
            RosType::Literal("string".to_string()),
            RosType::Literal("uint32".to_string()),
        ]
    );
    let names: Vec<_> = definition.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["ok", "value", "label", "count"]);
}

#[test]
fn interface_names_per_dialect() {
    let schema = schema("Log", vec![]);
    let catalog = catalog_with(vec![], vec![]);

    let ros1 = build_definition(&schema, &catalog, RosDialect::Ros1).unwrap();
    assert_eq!(ros1.msg_interface_name, "foxglove_msgs/Log");
    assert_eq!(ros1.full_interface_name, "foxglove_msgs/Log");

    let ros2 = build_definition(&schema, &catalog, RosDialect::Ros2).unwrap();
    assert_eq!(ros2.msg_interface_name, "foxglove_msgs/Log");
    assert_eq!(ros2.full_interface_name, "foxglove_msgs/msg/Log");
}

#[test]
fn ros2_lowercases_field_names() {
    let schema = schema(
        "Sample",
        vec![Field::new("frameID", FieldType::Primitive(Primitive::String))],
    );
    let catalog = catalog_with(vec![], vec![]);

    let ros1 = build_definition(&schema, &catalog, RosDialect::Ros1).unwrap();
    assert_eq!(ros1.fields[0].name, "frameID");

    let ros2 = build_definition(&schema, &catalog, RosDialect::Ros2).unwrap();
    assert_eq!(ros2.fields[0].name, "frameid");
}

#[test]
fn time_and_duration_stay_symbolic() {
    let schema = schema(
        "Window",
        vec![
            Field::new("stamp", FieldType::Primitive(Primitive::Time)),
            Field::new("elapsed", FieldType::Primitive(Primitive::Duration)),
        ],
    );
    let catalog = catalog_with(vec![], vec![]);

    let definition = build_definition(&schema, &catalog, RosDialect::Ros2).unwrap();
    assert_eq!(definition.fields[0].ty, RosType::Time);
    assert_eq!(definition.fields[1].ty, RosType::Duration);
}

#[test]
fn bytes_become_a_uint8_array() {
    let schema = schema(
        "Blob",
        vec![Field::new("data", FieldType::Primitive(Primitive::Bytes))],
    );
    let catalog = catalog_with(vec![], vec![]);

    let definition = build_definition(&schema, &catalog, RosDialect::Ros1).unwrap();
    let field = &definition.fields[0];
    assert_eq!(field.ty, RosType::Literal("uint8".to_string()));
    assert!(field.is_array);
    assert_eq!(field.array_length, None);
}

#[test]
fn array_of_bytes_is_rejected() {
    let schema = schema(
        "Blobs",
        vec![
            Field::new("data", FieldType::Primitive(Primitive::Bytes))
                .with_array(FieldArray::Unbounded),
        ],
    );
    let catalog = catalog_with(vec![], vec![]);

    assert_eq!(
        build_definition(&schema, &catalog, RosDialect::Ros1).unwrap_err(),
        GenerateError::UnsupportedByteArray {
            field: "data".to_string()
        }
    );
}

#[test]
fn fixed_length_arrays_keep_their_length() {
    let schema = schema(
        "Covariance",
        vec![
            Field::new("matrix", FieldType::Primitive(Primitive::Float64))
                .with_array(FieldArray::Fixed(9)),
        ],
    );
    let catalog = catalog_with(vec![], vec![]);

    let definition = build_definition(&schema, &catalog, RosDialect::Ros1).unwrap();
    assert!(definition.fields[0].is_array);
    assert_eq!(definition.fields[0].array_length, Some(9));
}

#[test]
fn enum_expands_into_preceding_constants() {
    let catalog = catalog_with(
        vec![],
        vec![EnumSchema {
            name: "State".to_string(),
            description: None,
            values: vec![EnumValue::new("A", 0), EnumValue::new("B", 1)],
        }],
    );
    let schema = schema(
        "Status",
        vec![Field::new("state", FieldType::Enum("State".to_string()))],
    );

    let definition = build_definition(&schema, &catalog, RosDialect::Ros1).unwrap();
    assert_eq!(definition.fields.len(), 3);

    let a = &definition.fields[0];
    assert!(a.is_constant);
    assert_eq!(a.name, "A");
    assert_eq!(a.ty, RosType::Literal("uint8".to_string()));
    assert_eq!(a.value.as_deref(), Some("0"));

    let b = &definition.fields[1];
    assert!(b.is_constant);
    assert_eq!(b.value.as_deref(), Some("1"));

    let state = &definition.fields[2];
    assert!(!state.is_constant);
    assert_eq!(state.name, "state");
    assert_eq!(state.ty, RosType::Literal("uint8".to_string()));
}

#[test]
fn repeated_enum_expands_once() {
    let catalog = catalog_with(
        vec![],
        vec![EnumSchema {
            name: "State".to_string(),
            description: None,
            values: vec![EnumValue::new("A", 0)],
        }],
    );
    let schema = schema(
        "Pair",
        vec![
            Field::new("first", FieldType::Enum("State".to_string())),
            Field::new("second", FieldType::Enum("State".to_string())),
        ],
    );

    let definition = build_definition(&schema, &catalog, RosDialect::Ros1).unwrap();
    let names: Vec<_> = definition.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["A", "first", "second"]);
}

#[test]
fn enum_value_out_of_range_is_rejected() {
    let catalog = catalog_with(
        vec![],
        vec![EnumSchema {
            name: "Big".to_string(),
            description: None,
            values: vec![EnumValue::new("TOO_BIG", 256)],
        }],
    );
    let schema = schema(
        "Status",
        vec![Field::new("state", FieldType::Enum("Big".to_string()))],
    );

    assert_eq!(
        build_definition(&schema, &catalog, RosDialect::Ros1).unwrap_err(),
        GenerateError::EnumValueOutOfRange {
            name: "TOO_BIG".to_string(),
            value: 256
        }
    );
}

#[test]
fn negative_enum_value_is_rejected() {
    let catalog = catalog_with(
        vec![],
        vec![EnumSchema {
            name: "Neg".to_string(),
            description: None,
            values: vec![EnumValue::new("NEGATIVE", -1)],
        }],
    );
    let schema = schema(
        "Status",
        vec![Field::new("state", FieldType::Enum("Neg".to_string()))],
    );

    assert!(matches!(
        build_definition(&schema, &catalog, RosDialect::Ros1),
        Err(GenerateError::EnumValueOutOfRange { value: -1, .. })
    ));
}

#[test]
fn constant_name_collision_across_enums_is_rejected() {
    let catalog = catalog_with(
        vec![],
        vec![
            EnumSchema {
                name: "First".to_string(),
                description: None,
                values: vec![EnumValue::new("UNKNOWN", 0)],
            },
            EnumSchema {
                name: "Second".to_string(),
                description: None,
                values: vec![EnumValue::new("UNKNOWN", 0)],
            },
        ],
    );
    let schema = schema(
        "Status",
        vec![
            Field::new("first", FieldType::Enum("First".to_string())),
            Field::new("second", FieldType::Enum("Second".to_string())),
        ],
    );

    assert_eq!(
        build_definition(&schema, &catalog, RosDialect::Ros1).unwrap_err(),
        GenerateError::DuplicateConstantName {
            name: "UNKNOWN".to_string(),
            schema: "Status".to_string()
        }
    );
}

#[test]
fn nested_schema_resolves_to_namespaced_name() {
    let inner = schema("Inner", vec![]);
    let outer = schema(
        "Outer",
        vec![Field::new("inner", FieldType::Nested("Inner".to_string()))],
    );
    let catalog = catalog_with(vec![inner], vec![]);

    let definition = build_definition(&outer, &catalog, RosDialect::Ros2).unwrap();
    assert_eq!(
        definition.fields[0].ty,
        RosType::Literal("foxglove_msgs/Inner".to_string())
    );
}

#[test]
fn nested_schema_with_ros_equivalent_uses_the_common_type() {
    let inner = Schema {
        name: "Pose".to_string(),
        description: None,
        fields: vec![],
        ros_equivalent: Some("geometry_msgs/Pose".to_string()),
    };
    let outer = schema(
        "Tracked",
        vec![Field::new("pose", FieldType::Nested("Pose".to_string()))],
    );
    let catalog = catalog_with(vec![inner], vec![]);

    let definition = build_definition(&outer, &catalog, RosDialect::Ros1).unwrap();
    assert_eq!(
        definition.fields[0].ty,
        RosType::Literal("geometry_msgs/Pose".to_string())
    );
}

#[test]
fn unknown_references_are_errors() {
    let catalog = catalog_with(vec![], vec![]);

    let nested = schema(
        "Outer",
        vec![Field::new("inner", FieldType::Nested("Missing".to_string()))],
    );
    assert_eq!(
        build_definition(&nested, &catalog, RosDialect::Ros1).unwrap_err(),
        GenerateError::UnknownSchema {
            name: "Missing".to_string()
        }
    );

    let with_enum = schema(
        "Status",
        vec![Field::new("state", FieldType::Enum("Missing".to_string()))],
    );
    assert_eq!(
        build_definition(&with_enum, &catalog, RosDialect::Ros1).unwrap_err(),
        GenerateError::UnknownEnum {
            name: "Missing".to_string()
        }
    );
}

//! ROS common message definitions referenced by foxglove schemas.
//!
//! A small, static table of the `geometry_msgs` types that foxglove
//! schemas declare as their `ros_equivalent`, plus the types those
//! definitions reference themselves. Entries are already in final
//! `.msg` form: field type names are the literal text that appears in
//! a definition, and [`RosSpecField::is_complex`] marks fields whose
//! type is another table entry rather than a builtin.

/// One field of a ROS common message definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosSpecField {
    /// Literal field type text, e.g. `float64` or `geometry_msgs/Point`.
    pub ty: &'static str,
    pub name: &'static str,
    /// True when `ty` names another common message rather than a builtin.
    pub is_complex: bool,
}

/// A ROS common message definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosSpec {
    /// Qualified name, e.g. `geometry_msgs/Pose`.
    pub name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [RosSpecField],
}

const fn builtin(ty: &'static str, name: &'static str) -> RosSpecField {
    RosSpecField {
        ty,
        name,
        is_complex: false,
    }
}

const fn complex(ty: &'static str, name: &'static str) -> RosSpecField {
    RosSpecField {
        ty,
        name,
        is_complex: true,
    }
}

static COMMON_DEFS: &[RosSpec] = &[
    RosSpec {
        name: "geometry_msgs/Point",
        fields: &[
            builtin("float64", "x"),
            builtin("float64", "y"),
            builtin("float64", "z"),
        ],
    },
    RosSpec {
        name: "geometry_msgs/Pose",
        fields: &[
            complex("geometry_msgs/Point", "position"),
            complex("geometry_msgs/Quaternion", "orientation"),
        ],
    },
    RosSpec {
        name: "geometry_msgs/Quaternion",
        fields: &[
            builtin("float64", "x"),
            builtin("float64", "y"),
            builtin("float64", "z"),
            builtin("float64", "w"),
        ],
    },
    RosSpec {
        name: "geometry_msgs/Transform",
        fields: &[
            complex("geometry_msgs/Vector3", "translation"),
            complex("geometry_msgs/Quaternion", "rotation"),
        ],
    },
    RosSpec {
        name: "geometry_msgs/Vector3",
        fields: &[
            builtin("float64", "x"),
            builtin("float64", "y"),
            builtin("float64", "z"),
        ],
    },
];

/// Look up a common message definition by qualified name.
pub fn lookup(name: &str) -> Option<&'static RosSpec> {
    COMMON_DEFS.iter().find(|spec| spec.name == name)
}

/// Qualified names of all known common messages, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    COMMON_DEFS.iter().map(|spec| spec.name)
}

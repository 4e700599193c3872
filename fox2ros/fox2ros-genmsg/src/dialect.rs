/// Target ROS message-description dialect.
///
/// The two dialects differ only in field-name casing and in the textual
/// names of the time and duration builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosDialect {
    Ros1,
    Ros2,
}

pub mod generate;
pub mod list;
pub mod show;

use fox2ros_genmsg::RosDialect;

/// clap value parser for `--ros-version`.
pub fn parse_dialect(s: &str) -> Result<RosDialect, String> {
    match s {
        "1" => Ok(RosDialect::Ros1),
        "2" => Ok(RosDialect::Ros2),
        _ => Err(format!("unsupported ROS version '{s}' (expected 1 or 2)")),
    }
}

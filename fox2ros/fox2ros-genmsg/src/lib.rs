//! Foxglove schema → ROS `.msg` generation.
//!
//! Translates the language-agnostic schemas of `fox2ros-schema` into
//! ROS message-description text, for ROS 1 and ROS 2, and assembles
//! merged bundles that carry a definition together with the full
//! transitive closure of the types it depends on.
//!
//! # Pipeline
//!
//! ```text
//! Schema (fox2ros-schema)
//!   ├─ build_definition        – fields → RosMsgDefinition
//!   │   └─ render_definition   – RosMsgDefinition → .msg text
//!   └─ collect_dependencies    – pre-order walk of nested/common types
//!       └─ generate_merged_schema – root + deps with `====`/`MSG:` headers
//! ```
//!
//! All entry points are synchronous, deterministic, and free of I/O;
//! every failure is fatal to the call and surfaced as a
//! [`GenerateError`].

mod definition;
mod deps;
mod dialect;
mod error;
mod mapper;
mod merge;
mod render;

pub use definition::{RosMsgDefinition, RosMsgField, RosType, build_definition};
pub use deps::{Dependency, collect_dependencies};
pub use dialect::RosDialect;
pub use error::GenerateError;
pub use merge::{generate_merged_schema, generate_msg};
pub use render::render_definition;

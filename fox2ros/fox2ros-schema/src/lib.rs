//! Foxglove message schema data model and built-in catalog.
//!
//! [`Schema`] describes one message type in a language-agnostic form:
//! a flat list of [`Field`]s typed as primitives, references to other
//! schemas, or references to [`EnumSchema`]s. [`SchemaCatalog`] holds a
//! set of schemas and enums keyed by name, the way generators consume
//! them; [`SchemaCatalog::builtin`] returns the shipped foxglove set.
//!
//! All types here are plain read-only data. The `.msg` translation
//! pipeline lives in `fox2ros-genmsg`.

mod catalog;
mod schema;

pub use catalog::SchemaCatalog;
pub use schema::{EnumSchema, EnumValue, Field, FieldArray, FieldType, Primitive, Schema};

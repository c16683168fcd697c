//! Orchestration layer for the page-template compiler.
//!
//! Composes the two core stages: load template text, scan it into a
//! tag sequence (`jsp_scanner`), generate Java class source
//! (`jsp_codegen`), and write the result next to the template. Turning
//! the generated source into a live object is an external
//! collaborator's job (a dynamic Java compiler); nothing here depends
//! on that step.

mod compile;
mod error;

pub use compile::{compile_file, qualified_class_for_path, translate};
pub use error::CompileError;

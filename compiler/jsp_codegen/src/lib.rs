//! Java code generator for scanned page templates.
//!
//! [`generate`] walks an ordered tag sequence (from `jsp_scanner`) and
//! emits the source of a Java class whose `toString()` rebuilds the
//! rendered page: literal content as string writes, expressions as
//! `String.valueOf(...)` writes, scriptlets spliced verbatim between
//! them in document order.
//!
//! Generation is pure text-to-text: identical input yields
//! byte-identical output, and nothing at this layer validates the
//! author-supplied Java fragments. Malformed fragments surface only
//! when an external Java compiler processes the generated source.

mod directives;
mod emitter;
mod generator;

pub use directives::{Directives, DEFAULT_BUFFER};
pub use generator::generate;

//! Tag scanner for JSP-style page templates.
//!
//! A template is an alternation of literal content and delimited blocks
//! (`<%-- --%>`, `<%@ %>`, `<%! %>`, `<%= %>`, `<% %>`). [`scan`] splits
//! a template into an ordered [`Tag`] sequence; literal content is
//! itself a tag kind, so downstream passes can walk one flat list.
//!
//! This crate is standalone: it knows nothing about code generation and
//! depends only on `memchr` for the byte probes. The code generator
//! (`jsp_codegen`) consumes the tag sequence it produces.

mod scan_error;
mod scanner;
mod span;
mod tag;

pub use scan_error::{ScanError, ScanErrorKind};
pub use scanner::scan;
pub use span::Span;
pub use tag::{Tag, TagKind};

//! Scanner error type.
//!
//! Errors carry WHERE (`span`) and WHAT (`kind`). There is exactly one
//! failure mode at this layer: a recognized open delimiter with no
//! matching close delimiter before end-of-input. That is fatal to the
//! whole compilation; the scanner produces no partial tag sequence.

use crate::span::Span;
use crate::tag::TagKind;

/// A scan failure with its location in the template source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (open delimiter at byte {})", .span.start)]
pub struct ScanError {
    /// Span of the open delimiter that started the failed block.
    pub span: Span,
    /// What went wrong.
    pub kind: ScanErrorKind,
}

/// What kind of scan error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScanErrorKind {
    /// A block was opened but its close delimiter never appeared.
    #[error("unterminated {kind} tag: expected `{}` before end of input", .kind.close_delimiter().unwrap_or("%>"))]
    UnterminatedTag {
        /// The block kind that was left open.
        kind: TagKind,
    },
}

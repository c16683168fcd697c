//! Tag model: the closed set of block kinds and their delimiters.
//!
//! Every block open delimiter starts with `<%`, so the bare scriptlet
//! delimiter is a prefix of all the others. Candidates must therefore
//! be probed most-specific-first; [`TagKind::SCAN_ORDER`] fixes that
//! order. Probing `Scriptlet` first would swallow every other block
//! kind as a scriptlet whose body begins with `--`, `@`, `!` or `=`.

use std::fmt;

/// Kind of a template tag.
///
/// `Content` is the literal text between blocks (or to end-of-input);
/// the five block kinds are delimited regions carrying author-supplied
/// text. The set is closed: delimiter lookup is a `match`, not a
/// registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Literal template text, emitted verbatim by the generator.
    Content,
    /// `<%-- ... --%>`: ignored entirely.
    Comment,
    /// `<%@ ... %>`: `name="value"` options for the generated class.
    Directive,
    /// `<%! ... %>`: verbatim members of the generated class.
    Declaration,
    /// `<%= ... %>`: a value-producing fragment, appended to the output.
    Expression,
    /// `<% ... %>`: verbatim statements in the render method.
    Scriptlet,
}

impl TagKind {
    /// Block kinds in probe order: most specific open delimiter first.
    ///
    /// This order is load-bearing. `<%` is a prefix of every other open
    /// delimiter, so `Scriptlet` must come last.
    pub const SCAN_ORDER: [TagKind; 5] = [
        TagKind::Comment,
        TagKind::Directive,
        TagKind::Declaration,
        TagKind::Expression,
        TagKind::Scriptlet,
    ];

    /// `(open, close)` delimiter pair for block kinds, `None` for
    /// `Content`.
    pub fn delimiters(self) -> Option<(&'static str, &'static str)> {
        match self {
            TagKind::Content => None,
            TagKind::Comment => Some(("<%--", "--%>")),
            TagKind::Directive => Some(("<%@", "%>")),
            TagKind::Declaration => Some(("<%!", "%>")),
            TagKind::Expression => Some(("<%=", "%>")),
            TagKind::Scriptlet => Some(("<%", "%>")),
        }
    }

    /// Open delimiter for block kinds.
    pub fn open_delimiter(self) -> Option<&'static str> {
        self.delimiters().map(|(open, _)| open)
    }

    /// Close delimiter for block kinds.
    pub fn close_delimiter(self) -> Option<&'static str> {
        self.delimiters().map(|(_, close)| close)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagKind::Content => "content",
            TagKind::Comment => "comment",
            TagKind::Directive => "directive",
            TagKind::Declaration => "declaration",
            TagKind::Expression => "expression",
            TagKind::Scriptlet => "scriptlet",
        };
        f.write_str(name)
    }
}

/// One parsed tag: a kind plus its body slice.
///
/// The body borrows the template source. For `Content` it is the text
/// between blocks; for block kinds it is the text strictly between the
/// delimiters (delimiters are consumed by the scanner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'src> {
    /// What kind of tag this is.
    pub kind: TagKind,
    /// Raw body text.
    pub body: &'src str,
}

impl<'src> Tag<'src> {
    /// Create a tag.
    pub fn new(kind: TagKind, body: &'src str) -> Self {
        Self { kind, body }
    }
}

#[cfg(test)]
mod tests;

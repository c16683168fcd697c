//! Directive option collection.
//!
//! A directive body is a whitespace-separated list of `name="value"`
//! tokens. Three names are recognized; anything else is silently
//! ignored, and a token without `=` is skipped. `extends` and `buffer`
//! are last-wins; `import` tokens accumulate in document order, one
//! group per token so the generator can keep the template's group
//! separation in the emitted import block.

use jsp_scanner::{Tag, TagKind};

/// Accumulator capacity emitted when no `buffer` directive is present.
pub const DEFAULT_BUFFER: &str = "8192";

/// Options collected from every `<%@ ... %>` tag in a template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directives {
    /// Base class for the generated class, if any.
    pub extends: Option<String>,
    /// Raw `buffer` value; emitted verbatim into the accumulator
    /// constructor. Not validated here.
    pub buffer: Option<String>,
    /// Import entries, one inner vec per `import` token. Each token's
    /// value is split on `,`; entries are not trimmed.
    pub import_groups: Vec<Vec<String>>,
}

impl Directives {
    /// Collect directive options from a tag sequence in document order.
    pub fn collect(tags: &[Tag<'_>]) -> Self {
        let mut directives = Self::default();
        for tag in tags.iter().filter(|tag| tag.kind == TagKind::Directive) {
            for token in tag.body.split_whitespace() {
                let Some((name, raw_value)) = token.split_once('=') else {
                    continue;
                };
                let value = unquote(raw_value);
                if name.eq_ignore_ascii_case("extends") {
                    directives.extends = Some(value.to_string());
                } else if name.eq_ignore_ascii_case("buffer") {
                    directives.buffer = Some(value.to_string());
                } else if name.eq_ignore_ascii_case("import") {
                    directives
                        .import_groups
                        .push(value.split(',').map(str::to_string).collect());
                }
            }
        }
        directives
    }

    /// The accumulator capacity to emit.
    pub fn buffer(&self) -> &str {
        self.buffer.as_deref().unwrap_or(DEFAULT_BUFFER)
    }
}

/// Strip one surrounding pair of `"` quotes, if present.
fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|value| value.strip_suffix('"'))
        .unwrap_or(raw)
}

//! Single-pass Java source generation over a scanned tag sequence.
//!
//! The output is one class: a package declaration when the target name
//! is qualified, the accumulated imports, the class header (optionally
//! with a base class from an `extends` directive), every declaration
//! body as verbatim members, and a `toString()` render method that
//! rebuilds the page text in document order.
//!
//! Each phase is a pure function over the same tag slice; there is no
//! mutable scan state shared between them.

use jsp_scanner::{Tag, TagKind};

use crate::directives::Directives;
use crate::emitter::Emitter;

/// Generate Java source for `qualified_class` from a tag sequence.
///
/// Pure: calling this any number of times with the same input yields
/// byte-identical output.
pub fn generate(tags: &[Tag<'_>], qualified_class: &str) -> String {
    let directives = Directives::collect(tags);

    // Bodies dominate the output; escaping and per-line indentation add
    // roughly half again, plus a fixed harness around them.
    let body_len: usize = tags.iter().map(|tag| tag.body.len()).sum();
    let mut out = Emitter::with_capacity(body_len + body_len / 2 + 512);

    emit_package(&mut out, qualified_class);
    emit_imports(&mut out, &directives);
    emit_class_header(&mut out, simple_name(qualified_class), directives.extends.as_deref());
    emit_members(&mut out, tags);
    emit_render_method(&mut out, tags, directives.buffer());
    out.line("}");
    out.blank_line();
    out.finish()
}

/// Everything after the last `.`, or the whole name if unqualified.
fn simple_name(qualified_class: &str) -> &str {
    qualified_class
        .rsplit_once('.')
        .map_or(qualified_class, |(_, simple)| simple)
}

fn emit_package(out: &mut Emitter, qualified_class: &str) {
    if let Some((package, _)) = qualified_class.rsplit_once('.') {
        out.raw("package ");
        out.raw(package);
        out.line(";");
    }
}

fn emit_imports(out: &mut Emitter, directives: &Directives) {
    for group in &directives.import_groups {
        for entry in group {
            out.raw("import ");
            out.raw(entry);
            out.line(";");
        }
        out.blank_line();
    }
}

fn emit_class_header(out: &mut Emitter, simple_name: &str, extends: Option<&str>) {
    out.raw("public class ");
    out.raw(simple_name);
    if let Some(base) = extends {
        out.raw(" extends ");
        out.raw(base);
    }
    out.line(" {");
    out.blank_line();
}

/// Emit every declaration body as trimmed, tab-indented members.
fn emit_members(out: &mut Emitter, tags: &[Tag<'_>]) {
    for tag in tags.iter().filter(|tag| tag.kind == TagKind::Declaration) {
        for line in statement_lines(tag.body) {
            out.raw("\t");
            out.line(line);
        }
    }
    out.blank_line();
}

fn emit_render_method(out: &mut Emitter, tags: &[Tag<'_>], buffer: &str) {
    out.line("\tpublic String toString() {");
    out.raw("\t\tjava.io.StringWriter out = new java.io.StringWriter(");
    out.raw(buffer);
    out.line(");");

    for tag in tags {
        match tag.kind {
            TagKind::Content => emit_content(out, tag.body),
            TagKind::Expression => {
                out.raw("\t\tout.write(String.valueOf(");
                out.raw(tag.body.trim());
                out.line("));");
            }
            TagKind::Scriptlet => {
                for line in statement_lines(tag.body) {
                    out.raw("\t\t");
                    out.line(line);
                }
            }
            // No render output: directives shaped the header, comments
            // and declarations were consumed elsewhere.
            TagKind::Comment | TagKind::Directive | TagKind::Declaration => {}
        }
    }

    out.line("\t\treturn out.toString();");
    out.line("\t}");
    out.blank_line();
}

/// Emit one content body as a run of `out.write("...")` statements.
///
/// Escaping is exact and minimal: `"` and the whitespace controls get
/// escape sequences, a newline additionally closes the current write
/// and opens a new one so long literals split per source line, and
/// every other character passes through unescaped.
fn emit_content(out: &mut Emitter, body: &str) {
    out.raw("\t\tout.write(\"");
    for ch in body.chars() {
        match ch {
            '"' => out.raw("\\\""),
            '\n' => out.raw("\\n\");\n\t\tout.write(\""),
            '\r' => out.raw("\\r"),
            '\t' => out.raw("\\t"),
            _ => out.ch(ch),
        }
    }
    out.line("\");");
}

/// Physical lines of a declaration or scriptlet body, trimmed, with
/// empty lines dropped.
fn statement_lines(body: &str) -> impl Iterator<Item = &str> {
    body.split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .map(str::trim)
}

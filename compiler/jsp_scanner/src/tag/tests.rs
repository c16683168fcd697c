use super::*;
use pretty_assertions::assert_eq;

// === Delimiter table ===

#[test]
fn delimiter_table_is_exact() {
    assert_eq!(TagKind::Comment.delimiters(), Some(("<%--", "--%>")));
    assert_eq!(TagKind::Directive.delimiters(), Some(("<%@", "%>")));
    assert_eq!(TagKind::Declaration.delimiters(), Some(("<%!", "%>")));
    assert_eq!(TagKind::Expression.delimiters(), Some(("<%=", "%>")));
    assert_eq!(TagKind::Scriptlet.delimiters(), Some(("<%", "%>")));
}

#[test]
fn content_has_no_delimiters() {
    assert_eq!(TagKind::Content.delimiters(), None);
    assert_eq!(TagKind::Content.open_delimiter(), None);
    assert_eq!(TagKind::Content.close_delimiter(), None);
}

#[test]
fn open_and_close_accessors_project_the_pair() {
    assert_eq!(TagKind::Comment.open_delimiter(), Some("<%--"));
    assert_eq!(TagKind::Comment.close_delimiter(), Some("--%>"));
    assert_eq!(TagKind::Scriptlet.open_delimiter(), Some("<%"));
    assert_eq!(TagKind::Scriptlet.close_delimiter(), Some("%>"));
}

// === Scan order ===

#[test]
fn scan_order_is_most_specific_first() {
    assert_eq!(
        TagKind::SCAN_ORDER,
        [
            TagKind::Comment,
            TagKind::Directive,
            TagKind::Declaration,
            TagKind::Expression,
            TagKind::Scriptlet,
        ]
    );
}

#[test]
fn scriptlet_open_is_a_prefix_of_every_other_open() {
    for kind in TagKind::SCAN_ORDER {
        let open = kind.open_delimiter().unwrap_or_default();
        assert!(
            open.starts_with("<%"),
            "{kind} open delimiter {open:?} does not start with <%"
        );
    }
}

#[test]
fn scan_order_excludes_content() {
    assert!(!TagKind::SCAN_ORDER.contains(&TagKind::Content));
}

// === Display ===

#[test]
fn display_names_are_lowercase() {
    assert_eq!(TagKind::Content.to_string(), "content");
    assert_eq!(TagKind::Comment.to_string(), "comment");
    assert_eq!(TagKind::Directive.to_string(), "directive");
    assert_eq!(TagKind::Declaration.to_string(), "declaration");
    assert_eq!(TagKind::Expression.to_string(), "expression");
    assert_eq!(TagKind::Scriptlet.to_string(), "scriptlet");
}

// === Tag ===

#[test]
fn tag_new_borrows_the_body() {
    let source = String::from("hello");
    let tag = Tag::new(TagKind::Content, &source[1..4]);
    assert_eq!(tag.kind, TagKind::Content);
    assert_eq!(tag.body, "ell");
}

use super::*;
use pretty_assertions::assert_eq;

fn kinds(tags: &[Tag<'_>]) -> Vec<TagKind> {
    tags.iter().map(|tag| tag.kind).collect()
}

// === Content ===

#[test]
fn empty_input_yields_no_tags() {
    assert_eq!(scan("").unwrap(), vec![]);
}

#[test]
fn plain_text_is_a_single_content_tag() {
    let tags = scan("Hello, page.").unwrap();
    assert_eq!(tags, vec![Tag::new(TagKind::Content, "Hello, page.")]);
}

#[test]
fn stray_less_than_stays_in_content() {
    let tags = scan("a < b and c <d>").unwrap();
    assert_eq!(tags, vec![Tag::new(TagKind::Content, "a < b and c <d>")]);
}

#[test]
fn restart_by_one_catches_delimiter_after_bare_less_than() {
    // The first `<` matches nothing; the probe resumes one byte later
    // and must still see the `<%=` starting there.
    let tags = scan("<<%= x %>").unwrap();
    assert_eq!(
        tags,
        vec![
            Tag::new(TagKind::Content, "<"),
            Tag::new(TagKind::Expression, " x "),
        ]
    );
}

// === Block kinds ===

#[test]
fn expression_between_content() {
    let tags = scan("Hello <%= name %>-1. Hello <%= name %>-2.").unwrap();
    assert_eq!(
        tags,
        vec![
            Tag::new(TagKind::Content, "Hello "),
            Tag::new(TagKind::Expression, " name "),
            Tag::new(TagKind::Content, "-1. Hello "),
            Tag::new(TagKind::Expression, " name "),
            Tag::new(TagKind::Content, "-2."),
        ]
    );
}

#[test]
fn directive_wins_over_scriptlet() {
    let tags = scan(r#"<%@ page import="a.B" %>"#).unwrap();
    assert_eq!(
        tags,
        vec![
            Tag::new(TagKind::Content, ""),
            Tag::new(TagKind::Directive, r#" page import="a.B" "#),
        ]
    );
}

#[test]
fn declaration_wins_over_scriptlet() {
    let tags = scan("<%! int counter = 0; %>").unwrap();
    assert_eq!(tags[1], Tag::new(TagKind::Declaration, " int counter = 0; "));
}

#[test]
fn comment_wins_over_scriptlet() {
    let tags = scan("<%-- note --%>").unwrap();
    assert_eq!(tags[1], Tag::new(TagKind::Comment, " note "));
}

#[test]
fn bare_scriptlet_matches_last() {
    let tags = scan("<% int i = 0; %>").unwrap();
    assert_eq!(tags[1], Tag::new(TagKind::Scriptlet, " int i = 0; "));
}

#[test]
fn empty_block_bodies() {
    assert_eq!(scan("<%=%>").unwrap()[1], Tag::new(TagKind::Expression, ""));
    assert_eq!(scan("<%%>").unwrap()[1], Tag::new(TagKind::Scriptlet, ""));
}

#[test]
fn adjacent_blocks_commit_empty_content_between() {
    let tags = scan("<%= a %><%= b %>").unwrap();
    assert_eq!(
        kinds(&tags),
        vec![
            TagKind::Content,
            TagKind::Expression,
            TagKind::Content,
            TagKind::Expression,
        ]
    );
    assert_eq!(tags[2].body, "");
}

#[test]
fn no_trailing_empty_content_after_final_block() {
    let tags = scan("x<% y %>").unwrap();
    assert_eq!(
        tags,
        vec![
            Tag::new(TagKind::Content, "x"),
            Tag::new(TagKind::Scriptlet, " y "),
        ]
    );
}

// === Close delimiter scanning ===

#[test]
fn stray_gt_does_not_terminate_a_block() {
    let tags = scan("<%= a > b %>").unwrap();
    assert_eq!(tags[1], Tag::new(TagKind::Expression, " a > b "));
}

#[test]
fn comment_body_may_contain_bare_close() {
    // `%>` inside a comment is not its close delimiter; only `--%>` is.
    let tags = scan("<%-- a %> b --%>").unwrap();
    assert_eq!(tags[1], Tag::new(TagKind::Comment, " a %> b "));
}

#[test]
fn multiline_scriptlet_body_is_preserved() {
    let tags = scan("<%\nint i = 0;\r\ni++;\n%>").unwrap();
    assert_eq!(tags[1], Tag::new(TagKind::Scriptlet, "\nint i = 0;\r\ni++;\n"));
}

// === Unterminated blocks ===

#[test]
fn unterminated_expression_fails() {
    let err = scan("<%= 1 + 1").unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::UnterminatedTag {
            kind: TagKind::Expression
        }
    );
    assert_eq!(err.span, Span::new(0, 3));
}

#[test]
fn trailing_open_delimiter_is_unterminated() {
    let err = scan("abc<%").unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::UnterminatedTag {
            kind: TagKind::Scriptlet
        }
    );
    assert_eq!(err.span, Span::new(3, 5));
}

#[test]
fn close_delimiter_may_not_overlap_the_open() {
    // The `>` here ends a span that would begin inside the open
    // delimiter; the comment is unterminated.
    let err = scan("<%-->").unwrap_err();
    assert_eq!(
        err.kind,
        ScanErrorKind::UnterminatedTag {
            kind: TagKind::Comment
        }
    );
}

#[test]
fn unterminated_error_message_names_the_close_delimiter() {
    let err = scan("<%-- never closed").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("--%>"), "message was: {message}");
    assert!(message.contains("comment"), "message was: {message}");
}

// === Properties ===

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn content_without_open_delimiters_roundtrips(source in "[^<]{0,64}") {
            let tags = scan(&source).unwrap();
            if source.is_empty() {
                prop_assert!(tags.is_empty());
            } else {
                prop_assert_eq!(tags.len(), 1);
                prop_assert_eq!(tags[0], Tag::new(TagKind::Content, source.as_str()));
            }
        }

        #[test]
        fn scanning_is_deterministic(source in ".{0,128}") {
            prop_assert_eq!(scan(&source), scan(&source));
        }

        #[test]
        fn bodies_concatenated_with_delimiters_rebuild_the_source(
            source in "[a-z <>%@!=-]{0,64}",
        ) {
            // Whatever the scanner recognizes, re-wrapping every block
            // body in its delimiters and splicing content back together
            // must reproduce the input byte-for-byte.
            if let Ok(tags) = scan(&source) {
                let mut rebuilt = String::new();
                for tag in &tags {
                    match tag.kind.delimiters() {
                        Some((open, close)) => {
                            rebuilt.push_str(open);
                            rebuilt.push_str(tag.body);
                            rebuilt.push_str(close);
                        }
                        None => rebuilt.push_str(tag.body),
                    }
                }
                prop_assert_eq!(rebuilt, source);
            }
        }
    }
}

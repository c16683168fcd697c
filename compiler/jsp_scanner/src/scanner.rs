//! Single-pass template scanner.
//!
//! The scanner walks the source left to right with explicit byte
//! positions and `memchr` probes for the two interesting bytes: `<`
//! (candidate block start) and `>` (candidate block end). No state
//! survives a call; each invocation is independent, so separate
//! compilations can run on separate threads.
//!
//! # Restart-by-one
//!
//! When a `<` matches no open delimiter, the probe resumes at the very
//! next byte, not past any delimiter length. Literal `<` characters are
//! scanned byte-by-byte, so `<<%= x %>` parses as content `<` followed
//! by an expression block.

use crate::scan_error::{ScanError, ScanErrorKind};
use crate::span::Span;
use crate::tag::{Tag, TagKind};

/// Split a template into its ordered tag sequence.
///
/// Literal text becomes `Content` tags, including the (possibly empty)
/// runs between adjacent blocks. A template ending exactly at a close
/// delimiter produces no trailing empty `Content` tag.
///
/// # Errors
///
/// Returns [`ScanErrorKind::UnterminatedTag`] when a recognized open
/// delimiter has no matching close delimiter before end-of-input. The
/// error span covers the open delimiter.
pub fn scan(source: &str) -> Result<Vec<Tag<'_>>, ScanError> {
    let bytes = source.as_bytes();
    let mut tags = Vec::new();

    // Start of the pending content run, and the probe position for the
    // next `<`. They diverge when a `<` turns out to be plain content.
    let mut content_start = 0;
    let mut probe = 0;

    while let Some(offset) = memchr::memchr(b'<', &bytes[probe..]) {
        let open_at = probe + offset;
        let Some((kind, open, close)) = match_block_start(bytes, open_at) else {
            // Ordinary `<` in content. Re-probe one byte further.
            probe = open_at + 1;
            continue;
        };

        // Close out the pending content run, empty or not.
        tags.push(Tag::new(TagKind::Content, &source[content_start..open_at]));

        let body_start = open_at + open.len();
        let (body_end, block_end) =
            find_block_end(bytes, body_start, close).ok_or_else(|| ScanError {
                span: Span::from_range(open_at, body_start),
                kind: ScanErrorKind::UnterminatedTag { kind },
            })?;

        tags.push(Tag::new(kind, &source[body_start..body_end]));
        content_start = block_end;
        probe = block_end;
    }

    if content_start < bytes.len() {
        tags.push(Tag::new(TagKind::Content, &source[content_start..]));
    }
    Ok(tags)
}

/// Probe the block kinds at `at` in [`TagKind::SCAN_ORDER`].
///
/// Returns the first kind whose open delimiter matches, with its
/// delimiter pair. Matching is case-insensitive and requires only that
/// enough bytes remain.
fn match_block_start(bytes: &[u8], at: usize) -> Option<(TagKind, &'static str, &'static str)> {
    for kind in TagKind::SCAN_ORDER {
        // SCAN_ORDER holds block kinds only, so delimiters always exist.
        let Some((open, close)) = kind.delimiters() else {
            continue;
        };
        let end = at + open.len();
        if end <= bytes.len() && bytes[at..end].eq_ignore_ascii_case(open.as_bytes()) {
            return Some((kind, open, close));
        }
    }
    None
}

/// Scan forward from `body_start` for the close delimiter.
///
/// Probes each `>` and checks whether the `close.len()` bytes ending at
/// (and including) it equal the close delimiter without running before
/// the body start. Stray `>` bytes inside the block do not terminate
/// it. Returns `(body_end, position past the close delimiter)`, or
/// `None` if the input ends first.
fn find_block_end(bytes: &[u8], body_start: usize, close: &str) -> Option<(usize, usize)> {
    let close_bytes = close.as_bytes();
    let mut pos = body_start;
    while let Some(offset) = memchr::memchr(b'>', &bytes[pos..]) {
        let gt = pos + offset;
        if let Some(candidate_start) = (gt + 1).checked_sub(close_bytes.len()) {
            if candidate_start >= body_start
                && bytes[candidate_start..=gt].eq_ignore_ascii_case(close_bytes)
            {
                return Some((candidate_start, gt + 1));
            }
        }
        pos = gt + 1;
    }
    None
}

#[cfg(test)]
mod tests;

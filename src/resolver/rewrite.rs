//! Span-aware rewrites between resolution and lexicalization: redundancy
//! collapse, residual-marker cleanup, grammar smoothing, and the small
//! data-placeholder fixups.

use super::segment::{normalize, Segment};
use once_cell::sync::Lazy;
use regex::Regex;

static LEFTOVER_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"fb:cell\.cell\.\S+").expect("valid pattern"));
static WS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// `<span> of <span'>` and `<span> <span'>` collapse to `<span>` when both
/// carry the same text, as does a field-span trailer ending
/// `... of <identical field span>`.
pub(super) fn collapse_redundant(segments: &mut Vec<Segment>) {
    collapse_separated(segments, " of ");
    collapse_separated(segments, " ");
    collapse_trailer(segments);
}

fn collapse_separated(segments: &mut Vec<Segment>, separator: &str) {
    let mut i = 0;
    while i + 2 < segments.len() {
        let matched = match (&segments[i], &segments[i + 1], &segments[i + 2]) {
            (Segment::Span(a), Segment::Literal(sep), Segment::Span(b)) => {
                sep.as_str() == separator && a.text == b.text
            }
            _ => false,
        };
        if matched {
            segments.drain(i + 1..=i + 2);
        }
        // Scanning resumes after the kept span either way, so chains like
        // "A of A of A" collapse once per scan, not transitively.
        i += 1;
    }
}

fn collapse_trailer(segments: &mut Vec<Segment>) {
    let mut j = 1;
    while j < segments.len() {
        let matched = match (&segments[j - 1], &segments[j]) {
            (Segment::Literal(prev), Segment::Span(b)) if b.is_field() => {
                prev.ends_with(" of ")
                    && segments[..j - 1].iter().any(|seg| {
                        seg.as_span()
                            .map(|a| a.is_field() && a.text == b.text)
                            .unwrap_or(false)
                    })
            }
            _ => false,
        };
        if matched {
            if let Segment::Literal(prev) = &mut segments[j - 1] {
                let len = prev.len() - " of ".len();
                prev.truncate(len);
            }
            segments.remove(j);
        } else {
            j += 1;
        }
    }
    normalize(segments);
}

/// Residual index/next/type markers become neutral placeholders; leftover
/// cell references vanish.
pub(super) fn neutralize_markers(segments: &mut Vec<Segment>) {
    for segment in segments.iter_mut() {
        if let Segment::Literal(text) = segment {
            let mut t = text.replace("fb:row.row.index", "[[INDEX]]");
            t = t.replace("!fb:row.row.next", "[[NEXT]]");
            t = t.replace("fb:row.row.next", "[[NEXT]]");
            t = t.replace("fb:type.object.type", "");
            t = t.replace("fb:type.row", "[[DATA]]");
            *text = LEFTOVER_CELL.replace_all(&t, "").into_owned();
        }
    }
    normalize(segments);
}

/// Trim trailing whitespace/`of`/`and`, collapse whitespace runs.
pub(super) fn tidy_grammar(segments: &mut Vec<Segment>) {
    if let Some(Segment::Literal(text)) = segments.last_mut() {
        let mut t = text.trim_end().to_string();
        if let Some(stripped) = t.strip_suffix("of") {
            t.truncate(stripped.len());
        }
        if let Some(stripped) = t.strip_suffix("and") {
            t.truncate(stripped.len());
        }
        t.truncate(t.trim_end().len());
        *text = t;
    }
    for segment in segments.iter_mut() {
        if let Segment::Literal(text) = segment {
            *text = WS_RUN.replace_all(text, " ").into_owned();
        }
    }
    normalize(segments);
}

pub(super) fn data_fixups(segments: &mut Vec<Segment>) {
    // <span> of [[DATA]] reads as just the span
    for i in 0..segments.len().saturating_sub(1) {
        if segments[i].as_span().is_none() {
            continue;
        }
        if let Segment::Literal(next) = &mut segments[i + 1] {
            if let Some(rest) = next.strip_prefix(" of [[DATA]]") {
                *next = rest.to_string();
            }
        }
    }
    normalize(segments);

    replace_in_literals(segments, " and [[DATA]]", "");
    replace_in_literals(segments, "[[NEXT]] [[DATA]]", "[[DATA]] after the [[DATA]]");

    superlative_collapse(segments);
    merge_field_value(segments);
    with_to_of(segments);
    normalize(segments);
}

fn replace_in_literals(segments: &mut Vec<Segment>, from: &str, to: &str) {
    for segment in segments.iter_mut() {
        if let Segment::Literal(text) = segment {
            if text.contains(from) {
                *text = text.replace(from, to);
            }
        }
    }
    normalize(segments);
}

/// `<a> with the greatest <b>` where both spans carry the same text reads
/// as `the greatest <a>` (same for smallest).
fn superlative_collapse(segments: &mut Vec<Segment>) {
    let mut i = 0;
    while i + 2 < segments.len() {
        let word = match (&segments[i], &segments[i + 1], &segments[i + 2]) {
            (Segment::Span(a), Segment::Literal(sep), Segment::Span(b)) if a.text == b.text => {
                match sep.as_str() {
                    " with the greatest " => Some("greatest"),
                    " with the smallest " => Some("smallest"),
                    _ => None,
                }
            }
            _ => None,
        };
        match word {
            Some(word) => {
                let span = segments[i].clone();
                segments[i] = Segment::Literal(format!("the {} ", word));
                segments[i + 1] = span;
                segments.remove(i + 2);
                i += 2;
            }
            None => i += 1,
        }
    }
    normalize(segments);
}

/// `<field span> <value span>` keeps only the value span.
fn merge_field_value(segments: &mut Vec<Segment>) {
    let mut i = 0;
    while i + 2 < segments.len() {
        let matched = match (&segments[i], &segments[i + 1], &segments[i + 2]) {
            (Segment::Span(f), Segment::Literal(sep), Segment::Span(v)) => {
                f.is_field() && sep.as_str() == " " && v.is_value()
            }
            _ => false,
        };
        if matched {
            segments.drain(i..=i + 1);
        } else {
            i += 1;
        }
    }
    normalize(segments);
}

/// `<span> with ...` reads as `<span> of ...`.
fn with_to_of(segments: &mut Vec<Segment>) {
    for i in 0..segments.len().saturating_sub(1) {
        if segments[i].as_span().is_none() {
            continue;
        }
        if let Segment::Literal(text) = &mut segments[i + 1] {
            if let Some(rest) = text.strip_prefix(" with") {
                *text = format!(" of{}", rest);
            }
        }
    }
}

//! Alternating literal-text runs and resolved provenance spans.
//!
//! Earlier rewrite passes produce spans; later passes treat them as opaque
//! and can never re-match text inside one. The marker serialization mirrors
//! the `(/NNN/[[TAG]]...text/NNN/)` wire shape and exists for diagnostics
//! and tests.

use crate::color::ColorTag;
use std::fmt::Write;

/// Length-encoding orientation attached to a field span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    VerticalBar,
    HorizontalBar,
    Line,
}

impl Orientation {
    /// Two-letter tag code following the `L` length marker.
    pub fn code(&self) -> &'static str {
        match self {
            Orientation::VerticalBar => "VB",
            Orientation::HorizontalBar => "HB",
            Orientation::Line => "LL",
        }
    }

    /// The visual dimension the length encoding reads as.
    pub fn dimension(&self) -> &'static str {
        match self {
            Orientation::VerticalBar | Orientation::Line => "the height",
            Orientation::HorizontalBar => "the length",
        }
    }
}

/// What a span resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum SpanKind {
    /// A table field. `dummy` marks pivoted value columns; `implicit` marks
    /// the synthesized field a dummy span was rewritten into.
    Field {
        dummy: bool,
        implicit: bool,
        orientation: Option<Orientation>,
    },
    /// A cell value. `dummy` marks the pivot-value side of a folded rewrite.
    Value {
        dummy: bool,
        color: Option<ColorTag>,
    },
}

impl SpanKind {
    pub fn field() -> Self {
        SpanKind::Field {
            dummy: false,
            implicit: false,
            orientation: None,
        }
    }

    pub fn value() -> Self {
        SpanKind::Value {
            dummy: false,
            color: None,
        }
    }
}

/// A resolved fragment of text bound to a table field or value.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedSpan {
    /// Sequential within one resolution run, in discovery order
    pub group_id: u32,
    pub kind: SpanKind,
    /// Field name hint carried by value spans for opener phrasing
    pub retrieval_hint: Option<String>,
    /// Indices of the runtime rows this span matched
    pub rows: Option<Vec<usize>>,
    pub text: String,
}

impl AnnotatedSpan {
    pub fn is_field(&self) -> bool {
        matches!(self.kind, SpanKind::Field { .. })
    }

    pub fn is_value(&self) -> bool {
        matches!(self.kind, SpanKind::Value { .. })
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match self.kind {
            SpanKind::Field { orientation, .. } => orientation,
            SpanKind::Value { .. } => None,
        }
    }

    pub fn color(&self) -> Option<ColorTag> {
        match self.kind {
            SpanKind::Value { color, .. } => color,
            SpanKind::Field { .. } => None,
        }
    }

    /// Tag text as it appears between `[[` and `]]` in marker form.
    pub fn tag(&self) -> String {
        match &self.kind {
            SpanKind::Field {
                dummy,
                implicit,
                orientation,
            } => {
                let mut tag = String::new();
                if *dummy {
                    tag.push_str("___");
                } else if *implicit {
                    tag.push_str("***");
                }
                tag.push_str("FIELD");
                if let Some(orientation) = orientation {
                    tag.push('L');
                    tag.push_str(orientation.code());
                }
                tag
            }
            SpanKind::Value { dummy, color } => {
                let mut tag = String::new();
                if *dummy {
                    tag.push_str("___");
                }
                tag.push_str("VALUE");
                if let Some(color) = color {
                    tag.push_str(&color.code());
                }
                tag
            }
        }
    }

    /// Marker serialization; the opening and closing group ids always match.
    pub fn marker(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "(/{:03}/[[{}]]", self.group_id, self.tag());
        if let Some(hint) = &self.retrieval_hint {
            let _ = write!(out, "<<{}>>", hint);
        }
        if let Some(rows) = &self.rows {
            let rows: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
            let _ = write!(out, "{{{}}}", rows.join(","));
        }
        let _ = write!(out, "{}/{:03}/)", self.text, self.group_id);
        out
    }
}

/// One element of the resolver's working sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Span(AnnotatedSpan),
}

impl Segment {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Segment::Literal(text) => Some(text),
            Segment::Span(_) => None,
        }
    }

    pub fn as_span(&self) -> Option<&AnnotatedSpan> {
        match self {
            Segment::Literal(_) => None,
            Segment::Span(span) => Some(span),
        }
    }
}

/// Merge adjacent literals and drop empty ones. Passes call this after
/// structural edits so phrase rewrites see contiguous text.
pub fn normalize(segments: &mut Vec<Segment>) {
    let mut normalized: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments.drain(..) {
        match segment {
            Segment::Literal(text) if text.is_empty() => {}
            Segment::Literal(text) => {
                if let Some(Segment::Literal(last)) = normalized.last_mut() {
                    last.push_str(&text);
                } else {
                    normalized.push(Segment::Literal(text));
                }
            }
            span => normalized.push(span),
        }
    }
    *segments = normalized;
}

/// Flatten to plain text, spans contributing their literal text.
pub fn plain_text(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Span(span) => out.push_str(&span.text),
        }
    }
    out
}

/// Flatten to marker form, for diagnostics and tests.
pub fn to_markup(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Span(span) => out.push_str(&span.marker()),
        }
    }
    out
}

/// Sequential zero-padded group-id source for one resolution run.
#[derive(Debug, Default)]
pub struct GroupIds {
    next: u32,
}

impl GroupIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

//! Chart-aware lexical choices: opener selection, dimension and mark
//! wording, and final sentence assembly.

use super::segment::{normalize, Segment};
use crate::chart::ChartContext;

/// How the sentence opens, chosen from the leading segment before chart
/// wording is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opener {
    Retrieve,
    Count,
    Compute,
}

pub(super) fn classify_opener(segments: &[Segment]) -> Option<Opener> {
    match segments.first()? {
        Segment::Span(span) if span.is_field() => Some(Opener::Retrieve),
        Segment::Span(_) => Some(Opener::Compute),
        Segment::Literal(text) => {
            if text.is_empty() || text.starts_with("meta[") {
                None
            } else if text.starts_with("number of") {
                Some(Opener::Count)
            } else {
                Some(Opener::Compute)
            }
        }
    }
}

/// Turn resolved spans and placeholders into chart-specific wording.
pub(super) fn lexicalize(segments: &mut Vec<Segment>, chart: &ChartContext) {
    // length-encoding fields read as a visual dimension
    for segment in segments.iter_mut() {
        if let Segment::Span(span) = segment {
            if let Some(orientation) = span.orientation() {
                *segment = Segment::Literal(orientation.dimension().to_string());
            }
        }
    }
    normalize(segments);

    if let Some(singular) = chart.chart_type.data_noun_singular() {
        let paired = format!("{} after the {}", singular, singular);
        replace_all_literals(segments, "[[DATA]] after the [[DATA]]", &paired);
    }
    if let Some(plural) = chart.chart_type.data_noun() {
        replace_all_literals(segments, "[[DATA]]", plural);
    }

    // color-tagged values read as the mark they pick out
    if let Some(mark) = chart.chart_type.mark_noun() {
        for segment in segments.iter_mut() {
            if let Segment::Span(span) = segment {
                if let Some(tag) = span.color() {
                    *segment = Segment::Literal(tag.phrase(mark));
                }
            }
        }
        normalize(segments);
    }

    if chart.chart_type.is_bar() {
        before_value_span(segments, "length of ", "length of the bar for ");
        before_value_span(segments, "height of ", "height of the bar for ");
        after_span(segments, " of the length", " of the bar with length");
        after_span(segments, " of the height", " of the bar with height");
        for (from, to) in [
            ("greatest the height of the", "tallest"),
            ("smallest the height of the", "shortest"),
            ("greatest the length of the", "longest"),
            ("smallest the length of the", "shortest"),
            ("length with", "length of the bar with"),
            ("height with", "height of the bar with"),
            ("greatest the height", "tallest height"),
            ("smallest the height", "shortest height"),
            ("greatest the length", "longest length"),
            ("smallest the length", "shortest length"),
            ("number of the height", "number of bars with height"),
            ("number of the length", "number of bars with length"),
        ] {
            replace_all_literals(segments, from, to);
        }
        before_value_span(segments, "bar of ", "bar for ");
        before_value_span(segments, "bar ", "bar for ");
    } else if chart.chart_type.is_line() {
        before_value_span(segments, "height of ", "height of the line for ");
        after_span(segments, " of the height", " of the line with height");
        for (from, to) in [
            ("greatest the height of the", "highest"),
            ("smallest the height of the", "lowest"),
            ("greatest the height", "greatest height"),
            ("smallest the height", "smallest height"),
            ("number of the height", "number of points with height"),
        ] {
            replace_all_literals(segments, from, to);
        }
        before_value_span(segments, "line of ", "line for ");
        before_value_span(segments, "line ", "line for ");
    }
    normalize(segments);
}

/// Flatten to the final sentence, quoting span text and applying the
/// opener (or a whole-sentence meta reading).
pub(super) fn assemble(segments: &[Segment], opener: Option<Opener>) -> String {
    let mut flat = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                let text = text
                    .replace("[[DATA]]", "data")
                    .replace("[[INDEX]]", "index")
                    .replace("[[NEXT]]", "next");
                flat.push_str(&text);
            }
            Segment::Span(span) => {
                flat.push('\'');
                flat.push_str(&span.text);
                flat.push('\'');
            }
        }
    }

    if flat == "meta[x-axis]" {
        return "I looked up what the x-axis represents by looking at the label on the x-axis."
            .to_string();
    }
    if flat == "meta[y-axis]" {
        return "I looked up what the y-axis represents by looking at the label on the y-axis."
            .to_string();
    }
    if let Some(rest) = flat.strip_prefix("meta[color:") {
        if let Some(arrow) = rest.find("->") {
            return format!(
                "I looked up what {} represents by looking at the legend.",
                &rest[..arrow]
            );
        }
    }

    // The period lands even when the resolved text is empty.
    let prefix = match opener {
        Some(Opener::Retrieve) => "I looked up ",
        Some(Opener::Count) => "I counted the ",
        Some(Opener::Compute) => "I computed the ",
        None => "",
    };
    format!("{}{}.", prefix, flat)
}

fn replace_all_literals(segments: &mut Vec<Segment>, from: &str, to: &str) {
    for segment in segments.iter_mut() {
        if let Segment::Literal(text) = segment {
            if text.contains(from) {
                *text = text.replace(from, to);
            }
        }
    }
    normalize(segments);
}

/// Rewrite a literal suffix when a value span follows it.
fn before_value_span(segments: &mut Vec<Segment>, suffix: &str, replacement: &str) {
    for i in 0..segments.len().saturating_sub(1) {
        let followed_by_value = segments[i + 1]
            .as_span()
            .map(|span| span.is_value())
            .unwrap_or(false);
        if !followed_by_value {
            continue;
        }
        if let Segment::Literal(text) = &mut segments[i] {
            if let Some(stripped) = text.strip_suffix(suffix) {
                *text = format!("{}{}", stripped, replacement);
            }
        }
    }
}

/// Rewrite a literal prefix when any span precedes it.
fn after_span(segments: &mut Vec<Segment>, prefix: &str, replacement: &str) {
    for i in 0..segments.len().saturating_sub(1) {
        if segments[i].as_span().is_none() {
            continue;
        }
        if let Segment::Literal(text) = &mut segments[i + 1] {
            if let Some(rest) = text.strip_prefix(prefix) {
                *text = format!("{}{}", replacement, rest);
            }
        }
    }
}

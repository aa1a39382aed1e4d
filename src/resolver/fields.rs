//! Column resolution: `fb:row.row.*` tokens to FIELD spans.

use super::segment::{normalize, AnnotatedSpan, GroupIds, Segment, SpanKind};
use super::{fold_for_match, orientation_for, FoldLinkage};
use crate::chart::ChartContext;
use crate::table::TableView;
use once_cell::sync::Lazy;
use regex::Regex;

static ROW_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"fb:row\.row\.\S+").expect("valid pattern"));

pub(super) fn resolve_fields(
    segments: &mut Vec<Segment>,
    chart: &ChartContext,
    runtime: &TableView,
    fold: &FoldLinkage,
    ids: &mut GroupIds,
) {
    let mut result = Vec::with_capacity(segments.len());
    for segment in segments.drain(..) {
        let Segment::Literal(text) = segment else {
            result.push(segment);
            continue;
        };
        let mut prev_end = 0;
        for m in ROW_TOKEN.find_iter(&text) {
            let Some(span) = resolve_token(m.as_str(), chart, runtime, fold, ids) else {
                // No candidate field: the token passes through untouched
                continue;
            };
            result.push(Segment::Literal(text[prev_end..m.start()].to_string()));
            result.push(Segment::Span(span));
            prev_end = m.end();
        }
        result.push(Segment::Literal(text[prev_end..].to_string()));
    }
    *segments = result;
    normalize(segments);
}

fn resolve_token(
    token: &str,
    chart: &ChartContext,
    runtime: &TableView,
    fold: &FoldLinkage,
    ids: &mut GroupIds,
) -> Option<AnnotatedSpan> {
    // Keywords are the piece after the last dot, split on underscores
    let keyword_part = match token.rfind('.') {
        Some(idx) => &token[idx + 1..],
        None => token,
    };
    let keywords: Vec<String> = keyword_part
        .split('_')
        .map(|k| k.to_lowercase())
        .collect();

    let field = shortest_matching_field(runtime, &keywords)?;
    let dummy = fold.dummy_fields.contains(field);
    let orientation = orientation_for(chart, field);

    Some(AnnotatedSpan {
        group_id: ids.next_id(),
        kind: SpanKind::Field {
            dummy,
            implicit: false,
            orientation,
        },
        retrieval_hint: None,
        rows: None,
        text: field.to_string(),
    })
}

/// Fields whose folded name contains every keyword; shortest name wins,
/// first of the tied shortest on a tie.
pub(super) fn shortest_matching_field<'a>(
    runtime: &'a TableView,
    keywords: &[String],
) -> Option<&'a str> {
    let mut best: Option<&str> = None;
    for field in runtime.fields() {
        let folded = fold_for_match(field);
        if !keywords.iter().all(|keyword| folded.contains(keyword.as_str())) {
            continue;
        }
        // Strict comparison keeps the first of tied-shortest candidates
        match best {
            Some(current) if field.chars().count() >= current.chars().count() => {}
            _ => best = Some(field.as_str()),
        }
    }
    best
}

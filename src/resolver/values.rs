//! Value resolution: `fb:cell_<field>.<value>` tokens to VALUE spans.

use super::fields::shortest_matching_field;
use super::segment::{normalize, AnnotatedSpan, GroupIds, Segment, SpanKind};
use super::fold_for_match;
use crate::chart::ChartContext;
use crate::color::{ColorTag, Rgb};
use crate::table::TableView;
use once_cell::sync::Lazy;
use regex::Regex;

static CELL_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"fb:cell_[^.]+\.\S+").expect("valid pattern"));

pub(super) fn resolve_values(
    segments: &mut Vec<Segment>,
    chart: &ChartContext,
    runtime: &TableView,
    ids: &mut GroupIds,
) {
    let mut result = Vec::with_capacity(segments.len());
    for segment in segments.drain(..) {
        let Segment::Literal(text) = segment else {
            result.push(segment);
            continue;
        };
        let mut prev_end = 0;
        for m in CELL_TOKEN.find_iter(&text) {
            let Some(span) = resolve_token(m.as_str(), chart, runtime, ids) else {
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
    ids: &mut GroupIds,
) -> Option<AnnotatedSpan> {
    // fb:cell_<field keywords>.<value keywords>
    let underscore = token.find('_')?;
    let period = token.find('.')?;
    let field_part = token.get(underscore + 1..period)?;
    let value_part = token.get(period + 1..)?;

    let field_keywords: Vec<String> = field_part.split('_').map(|k| k.to_lowercase()).collect();
    let field = shortest_matching_field(runtime, &field_keywords)?;

    let value_keywords: Vec<String> = value_part.split('_').map(|k| k.to_lowercase()).collect();
    let mut matches: Vec<(usize, &str)> = Vec::new();
    for row in 0..runtime.row_count() {
        let Some(value) = runtime.value(row, field) else {
            continue;
        };
        let folded = fold_for_match(value);
        if value_keywords.iter().all(|k| folded.contains(k.as_str())) {
            matches.push((row, value));
        }
    }
    if matches.is_empty() {
        return None;
    }

    // Shortest matched literal wins; all rows tied at that length group
    // into one span carrying the first tied value.
    matches.sort_by_key(|(_, value)| value.chars().count());
    let min_len = matches[0].1.chars().count();
    let tied: Vec<(usize, &str)> = matches
        .into_iter()
        .take_while(|(_, value)| value.chars().count() == min_len)
        .collect();
    let rows: Vec<usize> = tied.iter().map(|(row, _)| *row).collect();
    let value = tied[0].1.to_string();

    let color = if chart.color_field.as_deref() == Some(field) {
        color_tag_for(chart, &value)
    } else {
        None
    };

    Some(AnnotatedSpan {
        group_id: ids.next_id(),
        kind: SpanKind::Value {
            dummy: false,
            color,
        },
        retrieval_hint: Some(field.to_string()),
        rows: Some(rows),
        text: value,
    })
}

/// Shade + hue tag for the legend color mapped to `value`, when the
/// mapping and the hex color are both usable.
pub(super) fn color_tag_for(chart: &ChartContext, value: &str) -> Option<ColorTag> {
    let hex = chart.colors.hex_of(value)?;
    let rgb = Rgb::from_hex(hex)?;
    Some(ColorTag::nearest(rgb.to_hsl()))
}

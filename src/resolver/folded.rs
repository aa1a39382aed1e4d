//! Folded-table linkage: relating a pivoted runtime view back to the raw
//! long-format columns, and rewriting dummy field spans accordingly.

use super::segment::{normalize, AnnotatedSpan, GroupIds, Segment, SpanKind};
use super::{orientation_for, values::color_tag_for};
use crate::chart::ChartContext;
use crate::table::TableView;
use std::collections::HashSet;

/// How the runtime view's pivoted columns relate to the raw view.
///
/// The *pivot field* is the raw column whose distinct values became the
/// runtime's value-bearing field names; the *implicit field* is the raw
/// column whose values ended up as the cells under those columns. The
/// value-bearing runtime fields themselves are the *dummy fields*.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoldLinkage {
    pub pivot_field: Option<String>,
    pub implicit_field: Option<String>,
    pub dummy_fields: HashSet<String>,
}

impl FoldLinkage {
    /// Detect the linkage from the two views, or all-`None` when the
    /// field sets agree (the table was not folded).
    pub fn detect(raw: &TableView, runtime: &TableView) -> Self {
        let raw_names: HashSet<&str> = raw.fields().iter().map(String::as_str).collect();
        let runtime_names: HashSet<&str> = runtime.fields().iter().map(String::as_str).collect();
        if raw_names == runtime_names {
            return Self::default();
        }
        let preserved: HashSet<&str> = raw_names.intersection(&runtime_names).copied().collect();

        // Cell values living under the pivoted runtime columns
        let mut folded_values: HashSet<&str> = HashSet::new();
        for field in runtime.fields() {
            if preserved.contains(field.as_str()) {
                continue;
            }
            folded_values.extend(runtime.column(field).unwrap_or_default());
        }
        folded_values.remove("");

        let mut linkage = Self::default();
        for field in raw.fields() {
            let column: HashSet<&str> = raw
                .column(field)
                .unwrap_or_default()
                .into_iter()
                .collect();
            let missing = runtime_names.difference(&column).count();
            let extra = column.difference(&runtime_names).count();
            if missing == 1 && extra == 0 {
                linkage.pivot_field = Some(field.clone());
                linkage.dummy_fields = runtime
                    .fields()
                    .iter()
                    .filter(|f| !preserved.contains(f.as_str()))
                    .cloned()
                    .collect();
            } else {
                let mut column = column;
                column.remove("");
                if column == folded_values {
                    linkage.implicit_field = Some(field.clone());
                }
            }
        }
        linkage
    }

    pub fn is_folded(&self) -> bool {
        self.pivot_field.is_some() || self.implicit_field.is_some()
    }
}

/// Rewrite each plain dummy FIELD span into
/// `<implicit field> of <pivot-value span>`, carrying length orientation
/// and legend color. Skipped entirely when the linkage is incomplete.
pub(super) fn expand_folded(
    segments: &mut Vec<Segment>,
    chart: &ChartContext,
    fold: &FoldLinkage,
    ids: &mut GroupIds,
) {
    let (Some(pivot), Some(implicit)) = (&fold.pivot_field, &fold.implicit_field) else {
        return;
    };
    let mut result = Vec::with_capacity(segments.len());
    for segment in segments.drain(..) {
        let span = match segment {
            Segment::Span(span)
                if matches!(
                    span.kind,
                    SpanKind::Field {
                        dummy: true,
                        implicit: false,
                        orientation: None,
                    }
                ) =>
            {
                span
            }
            other => {
                result.push(other);
                continue;
            }
        };
        let color = if chart.color_field.as_deref() == Some(pivot.as_str()) {
            color_tag_for(chart, &span.text)
        } else {
            None
        };
        result.push(Segment::Span(AnnotatedSpan {
            group_id: ids.next_id(),
            kind: SpanKind::Field {
                dummy: false,
                implicit: true,
                orientation: orientation_for(chart, implicit),
            },
            retrieval_hint: None,
            rows: None,
            text: implicit.clone(),
        }));
        result.push(Segment::Literal(" of ".to_string()));
        result.push(Segment::Span(AnnotatedSpan {
            group_id: ids.next_id(),
            kind: SpanKind::Value { dummy: true, color },
            retrieval_hint: Some(pivot.clone()),
            rows: None,
            text: span.text,
        }));
    }
    *segments = result;
    normalize(segments);
}

//! Multi-pass annotation resolution.
//!
//! Takes the evaluator's templated text, still carrying raw provenance
//! tokens (`fb:row.row.*`, `fb:cell_*.*`, `fb:type.row`, ...), and binds
//! them to concrete table fields, values and colors, then lexicalizes the
//! result for the chart at hand.
//!
//! The passes run in a fixed order over a sequence of literal runs and
//! opaque [`segment::AnnotatedSpan`] tokens; a span created by an earlier
//! pass can never be re-matched by a later one. Matching failures skip the
//! token; nothing in here is fatal.

pub mod segment;

mod fields;
mod folded;
mod lexicon;
mod rewrite;
mod values;

pub use folded::FoldLinkage;
pub use lexicon::Opener;
pub use segment::{AnnotatedSpan, Orientation, Segment, SpanKind};

use crate::chart::{ChartContext, ChartType};
use crate::table::TableView;
use once_cell::sync::Lazy;
use regex::Regex;
use segment::GroupIds;
use unicode_normalization::UnicodeNormalization;

/// Outcome of one resolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub text: String,
    pub warnings: Vec<String>,
}

/// Resolve templated text into the final sentence.
pub fn resolve(
    text: &str,
    chart: &ChartContext,
    raw: &TableView,
    runtime: &TableView,
) -> Resolution {
    let mut warnings = Vec::new();
    if chart.chart_type == ChartType::Unclassified {
        warnings.push("unclassified chart type, falling back to generic phrasing".to_string());
    }

    let fold = FoldLinkage::detect(raw, runtime);
    let prepared = drop_answer_prefixes(strip_accents(text).trim());

    let mut segments = vec![Segment::Literal(prepared)];
    let mut ids = GroupIds::default();
    mark_passes(&mut segments, chart, runtime, &fold, &mut ids);

    let opener = lexicon::classify_opener(&segments);
    lexicon::lexicalize(&mut segments, chart);
    let text = lexicon::assemble(&segments, opener);
    Resolution { text, warnings }
}

/// The marker passes: everything between raw text and opener selection.
/// Re-running them on an already-resolved sequence changes nothing.
pub(crate) fn mark_passes(
    segments: &mut Vec<Segment>,
    chart: &ChartContext,
    runtime: &TableView,
    fold: &FoldLinkage,
    ids: &mut GroupIds,
) {
    fields::resolve_fields(segments, chart, runtime, fold, ids);
    values::resolve_values(segments, chart, runtime, ids);
    rewrite::collapse_redundant(segments);
    folded::expand_folded(segments, chart, fold, ids);
    rewrite::neutralize_markers(segments);
    rewrite::tidy_grammar(segments);
    rewrite::data_fixups(segments);
    rewrite::tidy_grammar(segments);
}

static ANSWER_CELL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"fb:cell\.cell\.\S+ of ").expect("valid pattern"));

fn drop_answer_prefixes(text: &str) -> String {
    ANSWER_CELL_PREFIX.replace_all(text, "").into_owned()
}

/// NFKD normalization with non-ASCII marks dropped.
pub(crate) fn strip_accents(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Matching key for field names and cell values.
pub(crate) fn fold_for_match(text: &str) -> String {
    strip_accents(text).to_lowercase()
}

/// Comparison key with every non-alphanumeric character stripped.
pub(crate) fn alnum_key(text: &str) -> String {
    text.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Length-encoding orientation for a field, or `None` when it is not the
/// length field or the chart family has no length reading.
pub(crate) fn orientation_for(chart: &ChartContext, field: &str) -> Option<Orientation> {
    let length_field = chart.length_field.as_deref()?;
    if alnum_key(length_field) != alnum_key(field) {
        return None;
    }
    if chart.chart_type.is_vertical_bar() {
        Some(Orientation::VerticalBar)
    } else if chart.chart_type.is_horizontal_bar() {
        Some(Orientation::HorizontalBar)
    } else if chart.chart_type.is_line() {
        Some(Orientation::Line)
    } else {
        None
    }
}

use crate::chart::{ChartContext, ChartType, ColorMap};
use crate::color::{ColorName, Shade};
use crate::resolver::segment::{plain_text, to_markup, GroupIds};
use crate::resolver::{mark_passes, resolve, FoldLinkage, Segment};
use crate::table::TableView;

fn team_goals() -> TableView {
    TableView::from_strs(
        &["Team", "Goals"],
        &[&["Arsenal", "12"], &["Chelsea", "9"]],
    )
    .unwrap()
}

fn run_passes(text: &str, chart: &ChartContext, runtime: &TableView) -> Vec<Segment> {
    let mut segments = vec![Segment::Literal(text.to_string())];
    let fold = FoldLinkage::default();
    let mut ids = GroupIds::default();
    mark_passes(&mut segments, chart, runtime, &fold, &mut ids);
    segments
}

#[test]
fn test_field_token_resolves_to_shortest_match() {
    let runtime = TableView::from_strs(&["Total Height", "Height"], &[&["10", "5"]]).unwrap();
    let chart = ChartContext::new(ChartType::VerticalBar, "Height");
    let segments = run_passes("fb:row.row.height", &chart, &runtime);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].as_span().unwrap().text, "Height");
}

#[test]
fn test_field_tie_keeps_first_candidate() {
    let runtime = TableView::from_strs(&["Team A", "Team B"], &[&["x", "y"]]).unwrap();
    let chart = ChartContext::new(ChartType::VerticalBar, "Team A");
    let segments = run_passes("fb:row.row.team", &chart, &runtime);
    assert_eq!(segments[0].as_span().unwrap().text, "Team A");
}

#[test]
fn test_unresolved_field_token_left_in_place() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes("fb:row.row.wins stays", &chart, &team_goals());
    assert_eq!(plain_text(&segments), "fb:row.row.wins stays");
}

#[test]
fn test_value_token_matches_rows() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes("fb:cell_team.arsenal", &chart, &team_goals());
    let span = segments[0].as_span().unwrap();
    assert_eq!(span.text, "Arsenal");
    assert_eq!(span.retrieval_hint.as_deref(), Some("Team"));
    assert_eq!(span.rows, Some(vec![0]));
}

#[test]
fn test_value_tie_groups_rows_at_shortest_length() {
    let runtime =
        TableView::from_strs(&["Team"], &[&["AB"], &["ABC"], &["AB"]]).unwrap();
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes("fb:cell_team.ab", &chart, &runtime);
    let span = segments[0].as_span().unwrap();
    assert_eq!(span.text, "AB");
    assert_eq!(span.rows, Some(vec![0, 2]));
}

#[test]
fn test_value_on_color_field_gets_a_color_tag() {
    let mut colors = ColorMap::new();
    colors.insert("#ff0000", "Arsenal");
    let chart = ChartContext::new(ChartType::VerticalBar, "Team").with_color_field("Team", colors);
    let segments = run_passes("fb:cell_team.arsenal", &chart, &team_goals());
    let tag = segments[0].as_span().unwrap().color().unwrap();
    assert_eq!(tag.shade, Shade::Plain);
    assert_eq!(tag.name, ColorName::Red);
}

#[test]
fn test_value_off_color_field_has_no_tag() {
    let mut colors = ColorMap::new();
    colors.insert("#ff0000", "12");
    let chart =
        ChartContext::new(ChartType::VerticalBar, "Team").with_color_field("Goals", colors);
    let segments = run_passes("fb:cell_team.arsenal", &chart, &team_goals());
    assert_eq!(segments[0].as_span().unwrap().color(), None);
}

#[test]
fn test_duplicate_retrieval_collapses() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes("fb:row.row.goals of fb:row.row.goals", &chart, &team_goals());
    assert_eq!(segments.len(), 1);
    assert_eq!(plain_text(&segments), "Goals");
}

#[test]
fn test_superlative_over_same_subject() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes(
        "fb:row.row.goals with the greatest fb:row.row.goals",
        &chart,
        &team_goals(),
    );
    assert_eq!(plain_text(&segments), "the greatest Goals");
}

#[test]
fn test_field_value_pair_keeps_value() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes("fb:row.row.team fb:cell_team.arsenal", &chart, &team_goals());
    assert_eq!(plain_text(&segments), "Arsenal");
    assert!(segments[0].as_span().unwrap().is_value());
}

#[test]
fn test_markup_form() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes("maximum fb:row.row.goals", &chart, &team_goals());
    assert_eq!(to_markup(&segments), "maximum (/000/[[FIELD]]Goals/000/)");

    let segments = run_passes("fb:cell_team.arsenal", &chart, &team_goals());
    assert_eq!(
        to_markup(&segments),
        "(/000/[[VALUE]]<<Team>>{0}Arsenal/000/)"
    );
}

#[test]
fn test_type_markers_neutralized() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes("number of fb:type.row", &chart, &team_goals());
    assert_eq!(plain_text(&segments), "number of [[DATA]]");
}

#[test]
fn test_row_index_marker_reads_as_index() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes("minimum fb:row.row.index", &chart, &team_goals());
    assert_eq!(plain_text(&segments), "minimum [[INDEX]]");
}

#[test]
fn test_next_marker_pairs_with_the_data_placeholder() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes(
        "number of !fb:row.row.next fb:type.row",
        &chart,
        &team_goals(),
    );
    assert_eq!(plain_text(&segments), "number of [[DATA]] after the [[DATA]]");
}

#[test]
fn test_with_after_a_span_reads_as_of() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let segments = run_passes(
        "fb:row.row.team with the greatest fb:row.row.goals",
        &chart,
        &team_goals(),
    );
    assert_eq!(plain_text(&segments), "Team of the greatest Goals");
}

#[test]
fn test_row_index_sentence() {
    let table = team_goals();
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let resolution = resolve("minimum fb:row.row.index", &chart, &table, &table);
    assert_eq!(resolution.text, "I computed the minimum index.");
}

#[test]
fn test_next_data_pair_takes_the_chart_noun() {
    let table = team_goals();
    let templated = "number of !fb:row.row.next fb:type.row";
    let bar = ChartContext::new(ChartType::VerticalBar, "Team");
    assert_eq!(
        resolve(templated, &bar, &table, &table).text,
        "I counted the number of bar after the bar."
    );
    let line = ChartContext::new(ChartType::Line, "Team");
    assert_eq!(
        resolve(templated, &line, &table, &table).text,
        "I counted the number of data point after the data point."
    );
}

#[test]
fn test_mark_passes_are_idempotent() {
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let runtime = team_goals();
    let mut segments = run_passes(
        "fb:row.row.goals with the greatest fb:row.row.goals of fb:type.row",
        &chart,
        &runtime,
    );
    let once = segments.clone();
    let fold = FoldLinkage::default();
    let mut ids = GroupIds::default();
    mark_passes(&mut segments, &chart, &runtime, &fold, &mut ids);
    assert_eq!(segments, once);
}

#[test]
fn test_resolve_warns_on_unclassified_chart() {
    let table = team_goals();
    let chart = ChartContext::new(ChartType::Unclassified, "Team");
    let resolution = resolve("maximum Goals", &chart, &table, &table);
    assert_eq!(resolution.text, "I computed the maximum Goals.");
    assert_eq!(resolution.warnings.len(), 1);
}

#[test]
fn test_accents_stripped_and_answer_prefix_dropped() {
    let table = team_goals();
    let chart = ChartContext::new(ChartType::VerticalBar, "Team");
    let resolution = resolve(
        "fb:cell.cell.answer of maximum Caf\u{e9}s",
        &chart,
        &table,
        &table,
    );
    assert_eq!(resolution.text, "I computed the maximum Cafes.");
    assert!(resolution.warnings.is_empty());
}

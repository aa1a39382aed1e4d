use crate::sexpr::{read_all, write, write_wrapped, Expr};

#[test]
fn test_compact_when_it_fits() {
    let expr = read_all("(+ 1 (- 2 3))").unwrap().remove(0);
    assert_eq!(write_wrapped(&expr, 80, 80), "(+ 1 (- 2 3))");
}

#[test]
fn test_wraps_when_too_wide() {
    let expr = Expr::list(vec![
        Expr::leaf("concat"),
        Expr::leaf("aaaaaaaa"),
        Expr::leaf("bbbbbbbb"),
    ]);
    assert_eq!(
        write_wrapped(&expr, 10, 10),
        "(concat\n  aaaaaaaa\n  bbbbbbbb\n)"
    );
}

#[test]
fn test_leading_leaf_stays_on_opening_line() {
    let expr = Expr::list(vec![
        Expr::list(vec![Expr::leaf("reverse"), Expr::leaf("population")]),
        Expr::leaf("china"),
    ]);
    // A list head is not inlined, only a leaf head is
    assert_eq!(
        write_wrapped(&expr, 5, 80),
        "(\n  (reverse population)\n  china\n)"
    );
}

#[test]
fn test_leaf_quoting_and_escapes() {
    assert_eq!(write(&Expr::leaf("plain")), "plain");
    assert_eq!(write(&Expr::leaf("two words")), "\"two words\"");
    assert_eq!(write(&Expr::leaf("")), "\"\"");
    assert_eq!(write(&Expr::leaf("a(b)c")), "\"a(b)c\"");
    assert_eq!(write(&Expr::leaf("a#b")), "\"a#b\"");
    assert_eq!(write(&Expr::leaf("a\"b")), "a\\\"b");
    assert_eq!(write(&Expr::leaf("a\\b")), "a\\\\b");
    assert_eq!(write(&Expr::leaf("a\nb")), "\"a\\nb\"");
    assert_eq!(write(&Expr::null_leaf()), "\\0");
}

#[test]
fn test_empty_list() {
    assert_eq!(write(&Expr::list(vec![])), "()");
}

#[test]
fn test_display_matches_write() {
    let expr = read_all("(max (number Goals))").unwrap().remove(0);
    assert_eq!(format!("{}", expr), write(&expr));
}

#[test]
fn test_written_form_reads_back() {
    let source = r#"(argmax (number 1) (number 1) fb:type.row "two words" \0)"#;
    let expr = read_all(source).unwrap().remove(0);
    let written = write(&expr);
    assert_eq!(read_all(&written).unwrap(), vec![expr]);
}

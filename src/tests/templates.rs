use crate::template::{for_operator, JUXTAPOSITION, REVERSE_APPLICATION};

#[test]
fn test_positional_substitution() {
    let tpl = for_operator("-").unwrap();
    assert_eq!(
        tpl.render(&["a".to_string(), "b".to_string()]),
        "difference between a and b"
    );
}

#[test]
fn test_extra_arguments_are_ignored() {
    let tpl = for_operator("max").unwrap();
    assert_eq!(
        tpl.render(&["Goals".to_string(), "ignored".to_string()]),
        "maximum Goals"
    );
}

#[test]
fn test_unfilled_placeholders_stay_literal() {
    // Downstream passes rely on unfilled placeholders surviving verbatim
    let tpl = for_operator("argmax").unwrap();
    assert_eq!(
        tpl.render(&["a".to_string()]),
        "[!3] with the greatest [!4]"
    );
}

#[test]
fn test_key_placeholder_substitution() {
    assert_eq!(
        JUXTAPOSITION.render_with_key(&["f".to_string(), "x".to_string()], "key"),
        "f x"
    );
    assert_eq!(
        REVERSE_APPLICATION.render(&["Population".to_string(), "China".to_string()]),
        "Population of China"
    );
}

#[test]
fn test_unknown_operator_has_no_template() {
    assert!(for_operator("frobnicate").is_none());
    assert!(for_operator("").is_none());
}

#[test]
fn test_selector_operators_keep_one_argument() {
    assert_eq!(
        for_operator("number").unwrap().render(&["7".to_string()]),
        "7"
    );
    assert_eq!(
        for_operator("lambda")
            .unwrap()
            .render(&["x".to_string(), "body".to_string()]),
        "body"
    );
    assert_eq!(
        for_operator("reverse").unwrap().render(&["f".to_string()]),
        "f"
    );
}

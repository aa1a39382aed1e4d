use proptest::prelude::*;
use vexplain::sexpr::{read_all, write, write_wrapped, Expr};

fn leaf_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![
        4 => proptest::string::string_regex("[ -~\t]{0,12}")
            .unwrap()
            .prop_map(Expr::leaf),
        1 => Just(Expr::null_leaf()),
    ]
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(4, 48, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Expr::list)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_written_trees_read_back(expr in expr_strategy()) {
        let text = write(&expr);
        prop_assert_eq!(read_all(&text).unwrap(), vec![expr]);
    }

    #[test]
    fn prop_round_trip_survives_narrow_widths(expr in expr_strategy()) {
        let text = write_wrapped(&expr, 12, 12);
        prop_assert_eq!(read_all(&text).unwrap(), vec![expr]);
    }

    #[test]
    fn prop_leaf_counts_are_preserved(expr in expr_strategy()) {
        let text = write(&expr);
        let parsed = read_all(&text).unwrap().remove(0);
        prop_assert_eq!(parsed.num_leaves(), expr.num_leaves());
        prop_assert_eq!(parsed.num_nodes(), expr.num_nodes());
    }
}

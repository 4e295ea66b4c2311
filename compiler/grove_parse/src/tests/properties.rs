use super::tokens;
use crate::Parser;
use grove_ir::{is_reserved, BinaryOp, CallExpr, Command, Expr, Name, Stmt};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0i64..10_000).prop_map(Expr::Number),
        "[a-z][a-z0-9_]{0,6}"
            .prop_filter("reserved", |s| !is_reserved(s))
            .prop_map(|s| Expr::Name(Name::new(s))),
        "[a-zA-Z0-9_!.,]{0,8}".prop_map(Expr::Str),
    ]
}

fn expr() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(6, 48, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::binary(BinaryOp::Add, l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::binary(BinaryOp::Sub, l, r)),
            (
                "[a-z][a-z0-9]{0,4}".prop_filter("reserved", |s| !is_reserved(s)),
                "[a-z][a-z_]{0,6}",
                proptest::collection::vec(inner, 0..3),
            )
                .prop_map(|(receiver, method, args)| {
                    Expr::Call(CallExpr {
                        receiver: Name::new(receiver),
                        method,
                        args,
                    })
                }),
        ]
    })
}

proptest! {
    #[test]
    fn canonical_form_reparses_to_same_tree(tree in expr()) {
        let text = tree.to_string();
        let parsed = Parser::new().parse_expression(&tokens(&text));
        prop_assert_eq!(parsed, Ok(tree));
    }

    #[test]
    fn assignment_wraps_any_expression(tree in expr()) {
        let text = format!("set target = {tree}");
        let parsed = Parser::new().parse_command(&tokens(&text));
        let expected = Command::Stmt(Stmt::Assign { target: Name::new("target"), value: tree });
        prop_assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn arithmetic_on_literals_always_parses(a in 0i64..1_000_000, b in 0i64..1_000_000) {
        for op in ["+", "-"] {
            let text = format!("{op} ( {a} ) ( {b} )");
            prop_assert!(Parser::new().parse_expression(&tokens(&text)).is_ok());
        }
    }

    #[test]
    fn dropping_a_closing_paren_never_parses(tree in expr()) {
        let text = tree.to_string();
        let mut toks = tokens(&text);
        if let Some(pos) = toks.iter().rposition(|t| *t == ")") {
            toks.remove(pos);
            prop_assert!(Parser::new().parse_command(&toks).is_err());
        }
    }
}

//! Property tests for the simplifier and the executor.

use std::collections::BTreeMap;
use std::rc::Rc;

use proptest::prelude::*;

use sympath_core::function::param;
use sympath_core::{BinOp, Expr, Function, ParamType, Stmt};
use sympath_exec::{simplify, symbolic_execute};
use sympath_syntax::{tokenize, Parser};

const ALL_OPS: [BinOp; 10] = [
    BinOp::Add,
    BinOp::Sub,
    BinOp::Mul,
    BinOp::Div,
    BinOp::Lt,
    BinOp::Gt,
    BinOp::Le,
    BinOp::Ge,
    BinOp::And,
    BinOp::Or,
];

/// Division does not distribute over addition the way the rewriter assumes,
/// so value-preservation is only claimed for the division-free fragment.
const VALUE_PRESERVING_OPS: [BinOp; 9] = [
    BinOp::Add,
    BinOp::Sub,
    BinOp::Mul,
    BinOp::Lt,
    BinOp::Gt,
    BinOp::Le,
    BinOp::Ge,
    BinOp::And,
    BinOp::Or,
];

fn arb_expr_with(ops: Vec<BinOp>) -> impl Strategy<Value = Rc<Expr>> {
    let leaf = prop_oneof![
        prop::sample::select(vec!["a", "b", "c"]).prop_map(|name| Expr::var(name)),
        (-20i64..=20).prop_map(Expr::int),
        any::<bool>().prop_map(Expr::boolean),
    ];
    leaf.prop_recursive(4, 48, 2, move |inner| {
        prop_oneof![
            (
                prop::sample::select(ops.clone()),
                inner.clone(),
                inner.clone()
            )
                .prop_map(|(op, left, right)| Expr::binary(op, left, right)),
            inner.clone().prop_map(Expr::not),
            inner.prop_map(Expr::neg),
        ]
    })
}

/// Concrete values the test evaluator works over. Comparisons produce the
/// integer flags 1/0 (matching what folding produces), `&`/`|` and `!`
/// work over booleans, and `!` additionally flips a 1/0 flag so that
/// negated comparisons stay comparable across the relational inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CVal {
    Int(i64),
    Bool(bool),
}

fn eval_concrete(expr: &Expr, env: &BTreeMap<String, i64>) -> Option<CVal> {
    match expr {
        Expr::Var(name) => env.get(name).copied().map(CVal::Int),
        Expr::Const(value) => match value.as_str() {
            "true" => Some(CVal::Bool(true)),
            "false" => Some(CVal::Bool(false)),
            _ => value.parse().ok().map(CVal::Int),
        },
        Expr::Binary { op, left, right } => {
            let left = eval_concrete(left, env)?;
            let right = eval_concrete(right, env)?;
            match (op, left, right) {
                (BinOp::Add, CVal::Int(a), CVal::Int(b)) => Some(CVal::Int(a.wrapping_add(b))),
                (BinOp::Sub, CVal::Int(a), CVal::Int(b)) => Some(CVal::Int(a.wrapping_sub(b))),
                (BinOp::Mul, CVal::Int(a), CVal::Int(b)) => Some(CVal::Int(a.wrapping_mul(b))),
                (BinOp::Div, CVal::Int(a), CVal::Int(b)) => {
                    (b != 0).then(|| CVal::Int(a.wrapping_div(b)))
                }
                (BinOp::Lt, CVal::Int(a), CVal::Int(b)) => Some(CVal::Int((a < b) as i64)),
                (BinOp::Gt, CVal::Int(a), CVal::Int(b)) => Some(CVal::Int((a > b) as i64)),
                (BinOp::Le, CVal::Int(a), CVal::Int(b)) => Some(CVal::Int((a <= b) as i64)),
                (BinOp::Ge, CVal::Int(a), CVal::Int(b)) => Some(CVal::Int((a >= b) as i64)),
                (BinOp::And, CVal::Bool(a), CVal::Bool(b)) => Some(CVal::Bool(a && b)),
                (BinOp::Or, CVal::Bool(a), CVal::Bool(b)) => Some(CVal::Bool(a || b)),
                _ => None,
            }
        }
        Expr::Not(inner) => match eval_concrete(inner, env)? {
            CVal::Bool(b) => Some(CVal::Bool(!b)),
            CVal::Int(0) => Some(CVal::Int(1)),
            CVal::Int(1) => Some(CVal::Int(0)),
            CVal::Int(_) => None,
        },
        Expr::Neg(inner) => match eval_concrete(inner, env)? {
            CVal::Int(n) => Some(CVal::Int(n.wrapping_neg())),
            CVal::Bool(_) => None,
        },
    }
}

proptest! {
    #[test]
    fn simplify_is_idempotent(e in arb_expr_with(ALL_OPS.to_vec())) {
        let once = simplify(&e);
        let twice = simplify(&once);
        prop_assert_eq!(&*once, &*twice, "second pass changed {}", e);
    }

    #[test]
    fn simplify_preserves_defined_concrete_values(
        e in arb_expr_with(VALUE_PRESERVING_OPS.to_vec()),
        a in -5i64..=5,
        b in -5i64..=5,
        c in -5i64..=5,
    ) {
        let env = BTreeMap::from([
            ("a".to_string(), a),
            ("b".to_string(), b),
            ("c".to_string(), c),
        ]);
        if let Some(expected) = eval_concrete(&e, &env) {
            let simplified = simplify(&e);
            prop_assert_eq!(
                eval_concrete(&simplified, &env),
                Some(expected),
                "{} vs {}",
                e,
                simplified
            );
        }
    }

    #[test]
    fn render_parse_render_is_a_fixpoint(e in arb_expr_with(ALL_OPS.to_vec())) {
        let simplified = simplify(&e);
        let rendered = simplified.render(-1);
        // `<=`/`>=` exist only in the algebra, not in the surface syntax
        prop_assume!(!rendered.contains("<=") && !rendered.contains(">="));

        let source = rendered.replace('\'', "");
        let tokens = tokenize(&source).expect("rendered text stays in the alphabet");
        let reparsed = Parser::new(tokens)
            .parse_expression()
            .expect("rendered text reparses");
        prop_assert_eq!(reparsed.render(-1), rendered);
    }

    #[test]
    fn state_count_is_two_to_the_if_count(n in 0usize..=6) {
        let mut body = Vec::new();
        for i in 0..n {
            body.push(Stmt::If {
                cond: Expr::binary(BinOp::Gt, Expr::var("x"), Expr::int(i as i64)),
                then_block: vec![Stmt::Assign {
                    target: format!("y{i}"),
                    value: Expr::int(1),
                }],
                else_block: vec![Stmt::Assign {
                    target: format!("y{i}"),
                    value: Expr::int(0),
                }],
            });
        }
        let func = Function::new(
            "f",
            [param(ParamType::Int, "x")],
            ParamType::Int,
            body,
            Expr::var("x"),
        );
        let states = symbolic_execute(&func);
        prop_assert_eq!(states.len(), 1usize << n);

        for state in &states {
            prop_assert_eq!(state.path_condition.len(), n);
            for key in state.memory.keys() {
                prop_assert!(
                    key == "x" || key.starts_with('y'),
                    "unexpected memory key {key}"
                );
            }
        }
    }
}

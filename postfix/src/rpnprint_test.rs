use crate::context::SymbolTable;
use crate::rpneval::{EvalErr, Malformed};
use crate::rpnprint::Expr;
use crate::token::Operator;

fn infix(expr: &str) -> String {
    SymbolTable::new().parse(expr).unwrap().to_string()
}

#[test]
fn test_parse_tree() {
    let tree = SymbolTable::new().parse("ab-").unwrap();
    assert_eq!(
        tree,
        Expr::BinOp(
            Operator::Sub,
            Box::new(Expr::Var('a')),
            Box::new(Expr::Var('b'))
        )
    );
    assert_eq!(SymbolTable::new().parse("c"), Ok(Expr::Var('c')));
}

#[test]
fn test_parse_errors() {
    let cx = SymbolTable::new();
    assert_eq!(cx.parse(""), Err(EvalErr::EmptyExpression));
    assert_eq!(
        cx.parse("ab"),
        Err(EvalErr::Malformed(Malformed::LeftoverOperands(2)))
    );
    assert!(matches!(cx.parse("a*"), Err(EvalErr::Malformed(_))));
    assert!(matches!(cx.parse("ax+"), Err(EvalErr::InvalidToken { token: 'x', .. })));
}

#[test]
fn test_print_infix() {
    assert_eq!(infix("a"), "a");
    assert_eq!(infix("ab+"), "a + b");
    assert_eq!(infix("abc*+d-"), "a + b * c - d");
    assert_eq!(infix("ab+cd*+"), "a + b + c * d");
    assert_eq!(infix("abcd+++"), "a + (b + (c + d))");
    assert_eq!(infix("abcd*-*"), "a * (b - c * d)");
}

#[test]
fn test_print_non_commutative() {
    assert_eq!(infix("ab-c-"), "a - b - c");
    assert_eq!(infix("abc--"), "a - (b - c)");
    assert_eq!(infix("ab/c/"), "a / b / c");
    assert_eq!(infix("abc//"), "a / (b / c)");
    assert_eq!(infix("ab+c*"), "(a + b) * c");
    assert_eq!(infix("ab*c+"), "a * b + c");
}

#[test]
fn test_deep_expression() {
    let n = 200_000;
    let expr = "a".repeat(n + 1) + &"+".repeat(n);
    let tree = SymbolTable::new().parse(&expr).unwrap();
    let printed = tree.to_string();
    assert!(printed.starts_with("a + (a + (a + "));
    assert!(printed.ends_with("a + a))"));
    // every 'a' and ' + ', plus a paren pair around each right hand side
    assert_eq!(printed.len(), (n + 1) + 3 * n + 2 * (n - 1));
    drop(tree);

    let (tree, value) = SymbolTable::new().parse_eval(&expr).unwrap();
    assert_eq!(value, 5.0 * (n + 1) as f64);
    drop(tree);

    // left leaning chains print without parens
    let expr = "a".to_string() + &"a+".repeat(n);
    assert_eq!(SymbolTable::new().parse(&expr).unwrap().to_string().len(), (n + 1) + 3 * n);
}

#[test]
fn test_parse_eval() {
    let cx = SymbolTable::new();
    let (tree, value) = cx.parse_eval("abc*+d-").unwrap();
    assert_eq!(tree.to_string(), "a + b * c - d");
    assert_eq!(value, 15.0);
    assert_eq!(cx.parse_eval("abc--").map(|(_, v)| v), cx.eval("abc--"));
    assert_eq!(cx.parse_eval(""), Err(EvalErr::EmptyExpression));
    assert!(matches!(cx.parse_eval("a-"), Err(EvalErr::Malformed(_))));
}

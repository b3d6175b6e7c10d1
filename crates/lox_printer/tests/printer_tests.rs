//! Printer integration tests.
//!
//! Builds trees through `NodeFactory` the way a parser would and checks the
//! exact parenthesized rendering of every node kind.

use lox_ast::{Expr, NodeFactory, Stmt, TokenKind};
use lox_core::{AstArena, StringInterner};
use lox_printer::AstPrinter;

/// Helper: build a tree with a fresh arena and render it.
fn render_expr<F>(build: F) -> String
where
    F: for<'a> FnOnce(&NodeFactory<'a>) -> Expr<'a>,
{
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let factory = NodeFactory::new(&arena, &interner);
    let expr = build(&factory);
    AstPrinter::new(&interner).print_expr(&expr)
}

fn render_stmt<F>(build: F) -> String
where
    F: for<'a> FnOnce(&NodeFactory<'a>) -> Stmt<'a>,
{
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let factory = NodeFactory::new(&arena, &interner);
    let stmt = build(&factory);
    AstPrinter::new(&interner).print_stmt(&stmt)
}

fn assert_balanced(text: &str) {
    let open = text.matches('(').count();
    let close = text.matches(')').count();
    assert_eq!(open, close, "unbalanced: {}", text);
}

// ============================================================================
// Literals and leaves
// ============================================================================

#[test]
fn test_nil_literal() {
    assert_eq!(render_expr(|f| f.nil()), "nil");
}

#[test]
fn test_bool_literals() {
    assert_eq!(render_expr(|f| f.boolean(true)), "true");
    assert_eq!(render_expr(|f| f.boolean(false)), "false");
}

#[test]
fn test_number_literals() {
    assert_eq!(render_expr(|f| f.number(123.0)), "123");
    assert_eq!(render_expr(|f| f.number(45.67)), "45.67");
    assert_eq!(render_expr(|f| f.number(-0.25)), "-0.25");
}

#[test]
fn test_string_literal_is_unquoted() {
    assert_eq!(render_expr(|f| f.string("hello world")), "hello world");
    assert_eq!(render_expr(|f| f.string("")), "");
}

#[test]
fn test_variable_is_bare_lexeme() {
    assert_eq!(render_expr(|f| f.variable("counter")), "counter");
}

#[test]
fn test_this() {
    assert_eq!(render_expr(|f| f.this()), "this");
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_composed_arithmetic() {
    let text = render_expr(|f| {
        f.binary(
            f.unary(TokenKind::Minus, f.number(123.0)),
            TokenKind::Star,
            f.grouping(f.number(45.67)),
        )
    });
    assert_eq!(text, "(* (- 123) (group 45.67))");
}

#[test]
fn test_comparison_operators() {
    assert_eq!(
        render_expr(|f| f.binary(f.variable("a"), TokenKind::LessEqual, f.variable("b"))),
        "(<= a b)"
    );
    assert_eq!(
        render_expr(|f| f.binary(f.variable("a"), TokenKind::BangEqual, f.nil())),
        "(!= a nil)"
    );
}

#[test]
fn test_logical_uses_operator_lexeme() {
    let text = render_expr(|f| {
        f.logical(
            f.variable("a"),
            TokenKind::Or,
            f.logical(f.variable("b"), TokenKind::And, f.boolean(false)),
        )
    });
    assert_eq!(text, "(or a (and b false))");
}

#[test]
fn test_unary_not() {
    assert_eq!(
        render_expr(|f| f.unary(TokenKind::Bang, f.unary(TokenKind::Bang, f.boolean(true)))),
        "(! (! true))"
    );
}

#[test]
fn test_grouping_nests() {
    assert_eq!(
        render_expr(|f| f.grouping(f.grouping(f.variable("x")))),
        "(group (group x))"
    );
}

// ============================================================================
// Calls, properties, assignment
// ============================================================================

#[test]
fn test_call_without_arguments() {
    assert_eq!(render_expr(|f| f.call(f.variable("clock"), vec![])), "(call clock)");
}

#[test]
fn test_call_with_arguments_in_order() {
    let text = render_expr(|f| {
        f.call(
            f.variable("add"),
            vec![f.number(1.0), f.binary(f.number(2.0), TokenKind::Plus, f.number(3.0)), f.string("s")],
        )
    });
    assert_eq!(text, "(call add 1 (+ 2 3) s)");
}

#[test]
fn test_curried_call() {
    let text = render_expr(|f| f.call(f.call(f.variable("f"), vec![f.number(1.0)]), vec![f.number(2.0)]));
    assert_eq!(text, "(call (call f 1) 2)");
}

#[test]
fn test_assign() {
    assert_eq!(
        render_expr(|f| f.assign("x", f.binary(f.variable("x"), TokenKind::Plus, f.number(1.0)))),
        "(= x (+ x 1))"
    );
}

#[test]
fn test_get_chain() {
    assert_eq!(
        render_expr(|f| f.get(f.get(f.this(), "position"), "x")),
        "(. (. this position) x)"
    );
}

#[test]
fn test_set() {
    assert_eq!(
        render_expr(|f| f.set(f.variable("point"), "y", f.number(2.0))),
        "(= point y 2)"
    );
}

#[test]
fn test_super_method() {
    assert_eq!(render_expr(|f| f.super_method("init")), "(super init)");
}

#[test]
fn test_super_call() {
    let text = render_expr(|f| f.call(f.super_method("cook"), vec![f.string("eggs")]));
    assert_eq!(text, "(call (super cook) eggs)");
}

// ============================================================================
// Simple statements
// ============================================================================

#[test]
fn test_expression_statement() {
    assert_eq!(
        render_stmt(|f| f.expression_stmt(f.call(f.variable("run"), vec![]))),
        "(; (call run))"
    );
}

#[test]
fn test_print_statement() {
    assert_eq!(render_stmt(|f| f.print(f.string("hi"))), "(print hi)");
}

#[test]
fn test_var_without_initializer() {
    assert_eq!(render_stmt(|f| f.var("x", None)), "(var x)");
}

#[test]
fn test_var_with_initializer() {
    assert_eq!(render_stmt(|f| f.var("x", Some(f.number(10.0)))), "(var x = 10)");
    assert_eq!(render_stmt(|f| f.var("y", Some(f.nil()))), "(var y = nil)");
}

#[test]
fn test_return_without_value() {
    assert_eq!(render_stmt(|f| f.return_stmt(None)), "(return)");
}

#[test]
fn test_return_with_value() {
    assert_eq!(render_stmt(|f| f.return_stmt(Some(f.variable("n")))), "(return n)");
}

// ============================================================================
// Control flow
// ============================================================================

#[test]
fn test_if_without_else() {
    let text = render_stmt(|f| f.if_stmt(f.variable("x"), f.print(f.number(1.0)), None));
    assert_eq!(text, "(if x (print 1))");
}

#[test]
fn test_if_with_else() {
    let text = render_stmt(|f| {
        f.if_stmt(f.variable("x"), f.print(f.number(1.0)), Some(f.print(f.number(2.0))))
    });
    assert_eq!(text, "(if-else x (print 1) (print 2))");
}

#[test]
fn test_else_if_chain() {
    let text = render_stmt(|f| {
        f.if_stmt(
            f.variable("a"),
            f.print(f.number(1.0)),
            Some(f.if_stmt(f.variable("b"), f.print(f.number(2.0)), None)),
        )
    });
    assert_eq!(text, "(if-else a (print 1) (if b (print 2)))");
}

#[test]
fn test_while() {
    let text = render_stmt(|f| {
        f.while_stmt(
            f.binary(f.variable("i"), TokenKind::Less, f.number(3.0)),
            f.expression_stmt(f.assign("i", f.binary(f.variable("i"), TokenKind::Plus, f.number(1.0)))),
        )
    });
    assert_eq!(text, "(while (< i 3) (; (= i (+ i 1))))");
}

// ============================================================================
// Blocks and function bodies (concatenated without separators)
// ============================================================================

#[test]
fn test_block_concatenates_statements() {
    let text = render_stmt(|f| f.block(vec![f.print(f.number(1.0)), f.print(f.number(2.0))]));
    assert_eq!(text, "(block (print 1)(print 2))");
}

#[test]
fn test_empty_block_keeps_trailing_space() {
    assert_eq!(render_stmt(|f| f.block(vec![])), "(block )");
}

#[test]
fn test_nested_blocks() {
    let text = render_stmt(|f| {
        f.block(vec![
            f.var("a", Some(f.number(1.0))),
            f.block(vec![f.print(f.variable("a"))]),
        ])
    });
    assert_eq!(text, "(block (var a = 1)(block (print a)))");
}

#[test]
fn test_while_with_block_body() {
    let text = render_stmt(|f| {
        f.while_stmt(
            f.boolean(true),
            f.block(vec![f.print(f.this()), f.expression_stmt(f.nil())]),
        )
    });
    assert_eq!(text, "(while true (block (print this)(; nil)))");
}

// ============================================================================
// Functions and classes
// ============================================================================

#[test]
fn test_function() {
    let text = render_stmt(|f| f.function_stmt("f", &["a", "b"], vec![f.return_stmt(Some(f.number(0.0)))]));
    assert_eq!(text, "(fun f(a b) (return 0))");
}

#[test]
fn test_function_without_params() {
    let text = render_stmt(|f| f.function_stmt("main", &[], vec![f.print(f.string("hi"))]));
    assert_eq!(text, "(fun main() (print hi))");
}

#[test]
fn test_function_body_concatenates_statements() {
    let text = render_stmt(|f| {
        f.function_stmt(
            "twice",
            &["x"],
            vec![f.print(f.variable("x")), f.print(f.variable("x")), f.return_stmt(None)],
        )
    });
    assert_eq!(text, "(fun twice(x) (print x)(print x)(return))");
}

#[test]
fn test_function_with_empty_body() {
    assert_eq!(render_stmt(|f| f.function_stmt("noop", &[], vec![])), "(fun noop() )");
}

#[test]
fn test_class_without_methods() {
    assert_eq!(render_stmt(|f| f.class("Empty", vec![])), "(class Empty)");
}

#[test]
fn test_class_with_methods() {
    let text = render_stmt(|f| {
        f.class(
            "Point",
            vec![
                f.function(
                    "init",
                    &["x", "y"],
                    vec![
                        f.expression_stmt(f.set(f.this(), "x", f.variable("x"))),
                        f.expression_stmt(f.set(f.this(), "y", f.variable("y"))),
                    ],
                ),
                f.function("norm", &[], vec![f.return_stmt(Some(f.get(f.this(), "x")))]),
            ],
        )
    });
    assert_eq!(
        text,
        "(class Point (fun init(x y) (; (= this x x))(; (= this y y))) (fun norm() (return (. this x))))"
    );
}

#[test]
fn test_closure() {
    let text = render_stmt(|f| {
        f.function_stmt(
            "makeCounter",
            &[],
            vec![
                f.var("i", Some(f.number(0.0))),
                f.function_stmt(
                    "count",
                    &[],
                    vec![f.expression_stmt(f.assign("i", f.binary(f.variable("i"), TokenKind::Plus, f.number(1.0))))],
                ),
                f.return_stmt(Some(f.variable("count"))),
            ],
        )
    });
    assert_eq!(
        text,
        "(fun makeCounter() (var i = 0)(fun count() (; (= i (+ i 1))))(return count))"
    );
}

// ============================================================================
// Properties of the rendering
// ============================================================================

#[test]
fn test_rendering_is_deterministic() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, &interner);
    let printer = AstPrinter::new(&interner);

    let stmt = f.if_stmt(
        f.logical(f.variable("a"), TokenKind::And, f.variable("b")),
        f.block(vec![f.print(f.call(f.variable("g"), vec![f.number(1.5)]))]),
        Some(f.return_stmt(None)),
    );
    let first = printer.print_stmt(&stmt);
    let second = printer.print_stmt(&stmt);
    assert_eq!(first, second);
    assert_eq!(first, "(if-else (and a b) (block (print (call g 1.5))) (return))");
}

#[test]
fn test_rendering_does_not_mutate_tree() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, &interner);
    let printer = AstPrinter::new(&interner);

    let stmt = f.class(
        "A",
        vec![f.function("m", &["p"], vec![f.print(f.super_method("m"))])],
    );
    let snapshot = stmt.clone();
    let debug_before = format!("{:?}", stmt);
    for _ in 0..5 {
        printer.print_stmt(&stmt);
    }
    assert_eq!(stmt, snapshot);
    assert_eq!(format!("{:?}", stmt), debug_before);
}

#[test]
fn test_parentheses_are_balanced() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, &interner);
    let printer = AstPrinter::new(&interner);

    let samples = vec![
        f.var("x", None),
        f.return_stmt(None),
        f.block(vec![]),
        f.function_stmt("f", &[], vec![]),
        f.class("C", vec![f.function("m", &["a", "b", "c"], vec![f.return_stmt(None)])]),
        f.while_stmt(f.grouping(f.nil()), f.block(vec![f.var("y", Some(f.this()))])),
        f.expression_stmt(f.set(f.get(f.variable("a"), "b"), "c", f.call(f.variable("d"), vec![f.nil()]))),
    ];
    for stmt in &samples {
        assert_balanced(&printer.print_stmt(stmt));
    }
}

/// String contents are copied verbatim, so parentheses inside them are not
/// escaped and the rendering is no longer balanced.
#[test]
fn test_string_literal_parentheses_are_copied_verbatim() {
    assert_eq!(render_stmt(|f| f.print(f.string("("))), "(print ()");
    assert_eq!(render_expr(|f| f.grouping(f.string(")"))), "(group ))");
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    const DEPTH: usize = 100_000;

    let arena = AstArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, &interner);
    let printer = AstPrinter::new(&interner);

    let mut expr = f.number(1.0);
    for _ in 0..DEPTH {
        expr = f.unary(TokenKind::Minus, expr);
    }
    let text = printer.print_expr(&expr);
    assert_eq!(text.len(), DEPTH * "(- ".len() + "1".len() + DEPTH);
    assert!(text.starts_with("(- (- (- "));
    assert!(text.ends_with("1)))"));
    assert_balanced(&text);

    let mut stmt = f.print(f.nil());
    for _ in 0..DEPTH {
        stmt = f.block(vec![stmt]);
    }
    let text = printer.print_stmt(&stmt);
    assert!(text.starts_with("(block (block "));
    assert!(text.ends_with("(print nil)))"));
    assert_balanced(&text);
}

#[test]
fn test_shared_printer_across_threads() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let f = NodeFactory::new(&arena, &interner);
    let printer = AstPrinter::new(&interner);

    let expr = f.binary(f.number(1.0), TokenKind::Plus, f.number(2.0));
    let expr = &expr;
    let printer = &printer;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || printer.print_expr(expr)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "(+ 1 2)");
        }
    });
}

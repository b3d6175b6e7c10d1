//! The traversal behind `AstPrinter`.
//!
//! Rendering walks the tree with an explicit work stack of [`Fragment`]s
//! instead of native recursion, so nesting depth is bounded by heap memory.
//! Each compound node is expanded into its fragments in output order, which
//! are then pushed onto the stack reversed.

use std::fmt::{self, Write};

use lox_ast::node::*;
use lox_core::intern::{InternedString, StringInterner};

/// A root the printer can start from: either node family.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Expr(&'a Expr<'a>),
    Stmt(&'a Stmt<'a>),
}

impl Node<'_> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Expr(expr) => expr.kind_name(),
            Node::Stmt(stmt) => stmt.kind_name(),
        }
    }
}

impl<'a, 'b: 'a> From<&'a Expr<'b>> for Node<'a> {
    fn from(expr: &'a Expr<'b>) -> Self {
        Node::Expr(expr)
    }
}

impl<'a, 'b: 'a> From<&'a Stmt<'b>> for Node<'a> {
    fn from(stmt: &'a Stmt<'b>) -> Self {
        Node::Stmt(stmt)
    }
}

/// One pending piece of output.
#[derive(Debug, Clone, Copy)]
enum Fragment<'a> {
    Expr(&'a Expr<'a>),
    Stmt(&'a Stmt<'a>),
    /// A function declaration or class method.
    Function(&'a FunctionStmt<'a>),
    /// An identifier or operator, emitted as its bare lexeme.
    Lexeme(InternedString),
    Text(&'static str),
}

/// Streams a rendering into any text sink, one fragment at a time.
pub(crate) struct Renderer<'p, 'a, W: Write + ?Sized> {
    interner: &'p StringInterner,
    out: &'p mut W,
    stack: Vec<Fragment<'a>>,
    scratch: Vec<Fragment<'a>>,
}

impl<'p, 'a, W: Write + ?Sized> Renderer<'p, 'a, W> {
    pub(crate) fn new(interner: &'p StringInterner, out: &'p mut W) -> Self {
        Self {
            interner,
            out,
            stack: Vec::with_capacity(32),
            scratch: Vec::with_capacity(16),
        }
    }

    /// Write the rendering of `node` to the sink, stopping at the first
    /// sink error.
    pub(crate) fn render(&mut self, node: Node<'a>) -> fmt::Result {
        self.stack.push(match node {
            Node::Expr(expr) => Fragment::Expr(expr),
            Node::Stmt(stmt) => Fragment::Stmt(stmt),
        });

        while let Some(fragment) = self.stack.pop() {
            match fragment {
                Fragment::Expr(expr) => self.expand_expr(expr)?,
                Fragment::Stmt(stmt) => self.expand_stmt(stmt)?,
                Fragment::Function(function) => self.expand_function(function),
                Fragment::Lexeme(lexeme) => self.out.write_str(self.interner.resolve(lexeme))?,
                Fragment::Text(text) => self.out.write_str(text)?,
            }
        }
        Ok(())
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Leaves are written straight to the sink; compound nodes are queued.
    fn expand_expr(&mut self, expr: &'a Expr<'a>) -> fmt::Result {
        match expr {
            Expr::Binary(n) => self.parenthesize(
                Fragment::Lexeme(n.operator.lexeme),
                [Fragment::Expr(n.left), Fragment::Expr(n.right)],
            ),
            Expr::Logical(n) => self.parenthesize(
                Fragment::Lexeme(n.operator.lexeme),
                [Fragment::Expr(n.left), Fragment::Expr(n.right)],
            ),
            Expr::Unary(n) => {
                self.parenthesize(Fragment::Lexeme(n.operator.lexeme), [Fragment::Expr(n.right)])
            }
            Expr::Call(n) => self.parenthesize(
                Fragment::Text("call"),
                std::iter::once(Fragment::Expr(n.callee))
                    .chain(n.arguments.iter().map(Fragment::Expr)),
            ),
            Expr::Grouping(n) => {
                self.parenthesize(Fragment::Text("group"), [Fragment::Expr(n.expression)])
            }
            Expr::Literal(n) => return self.write_literal(&n.value),
            Expr::Variable(n) => return self.out.write_str(self.interner.resolve(n.name.lexeme)),
            Expr::Assign(n) => self.parenthesize(
                Fragment::Text("="),
                [Fragment::Lexeme(n.name.lexeme), Fragment::Expr(n.value)],
            ),
            Expr::Get(n) => self.parenthesize(
                Fragment::Text("."),
                [Fragment::Expr(n.object), Fragment::Lexeme(n.name.lexeme)],
            ),
            Expr::Set(n) => self.parenthesize(
                Fragment::Text("="),
                [
                    Fragment::Expr(n.object),
                    Fragment::Lexeme(n.name.lexeme),
                    Fragment::Expr(n.value),
                ],
            ),
            Expr::Super(n) => {
                self.parenthesize(Fragment::Text("super"), [Fragment::Lexeme(n.method.lexeme)])
            }
            Expr::This(_) => return self.out.write_str("this"),
        }
        Ok(())
    }

    fn write_literal(&mut self, value: &LiteralValue) -> fmt::Result {
        match value {
            LiteralValue::Nil => self.out.write_str("nil"),
            LiteralValue::Bool(true) => self.out.write_str("true"),
            LiteralValue::Bool(false) => self.out.write_str("false"),
            LiteralValue::Number(n) => write_number(self.out, *n),
            LiteralValue::String(s) => self.out.write_str(self.interner.resolve(*s)),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn expand_stmt(&mut self, stmt: &'a Stmt<'a>) -> fmt::Result {
        match stmt {
            // Children are concatenated with no separator, unlike every other list.
            Stmt::Block(n) => {
                self.parenthesize_concat("(block ", n.statements.iter().map(Fragment::Stmt))
            }
            Stmt::Expression(n) => {
                self.parenthesize(Fragment::Text(";"), [Fragment::Expr(n.expression)])
            }
            Stmt::Print(n) => {
                self.parenthesize(Fragment::Text("print"), [Fragment::Expr(n.expression)])
            }
            Stmt::Var(n) => match n.initializer {
                None => self.parenthesize(Fragment::Text("var"), [Fragment::Lexeme(n.name.lexeme)]),
                Some(init) => self.parenthesize(
                    Fragment::Text("var"),
                    [
                        Fragment::Lexeme(n.name.lexeme),
                        Fragment::Text("="),
                        Fragment::Expr(init),
                    ],
                ),
            },
            Stmt::If(n) => match n.else_branch {
                None => self.parenthesize(
                    Fragment::Text("if"),
                    [Fragment::Expr(n.condition), Fragment::Stmt(n.then_branch)],
                ),
                Some(else_branch) => self.parenthesize(
                    Fragment::Text("if-else"),
                    [
                        Fragment::Expr(n.condition),
                        Fragment::Stmt(n.then_branch),
                        Fragment::Stmt(else_branch),
                    ],
                ),
            },
            Stmt::While(n) => self.parenthesize(
                Fragment::Text("while"),
                [Fragment::Expr(n.condition), Fragment::Stmt(n.body)],
            ),
            Stmt::Function(n) => self.expand_function(n),
            Stmt::Return(n) => match n.value {
                None => return self.out.write_str("(return)"),
                Some(value) => {
                    self.parenthesize(Fragment::Text("return"), [Fragment::Expr(value)])
                }
            },
            Stmt::Class(n) => self.parenthesize(
                Fragment::Text("class"),
                std::iter::once(Fragment::Lexeme(n.name.lexeme))
                    .chain(n.methods.iter().map(Fragment::Function)),
            ),
        }
        Ok(())
    }

    /// `(fun name(a b) <body>)`, with the body statements concatenated
    /// like a block's.
    fn expand_function(&mut self, function: &'a FunctionStmt<'a>) {
        self.scratch.push(Fragment::Text("(fun "));
        self.scratch.push(Fragment::Lexeme(function.name.lexeme));
        self.scratch.push(Fragment::Text("("));
        for (i, param) in function.params.iter().enumerate() {
            if i > 0 {
                self.scratch.push(Fragment::Text(" "));
            }
            self.scratch.push(Fragment::Lexeme(param.lexeme));
        }
        self.scratch.push(Fragment::Text(") "));
        self.scratch.extend(function.body.iter().map(Fragment::Stmt));
        self.scratch.push(Fragment::Text(")"));
        self.flush_scratch();
    }

    // ========================================================================
    // Wrapping helpers
    // ========================================================================

    /// Queue `(head part part ...)`, with one space before every part.
    fn parenthesize<I>(&mut self, head: Fragment<'a>, parts: I)
    where
        I: IntoIterator<Item = Fragment<'a>>,
    {
        self.scratch.push(Fragment::Text("("));
        self.scratch.push(head);
        for part in parts {
            self.scratch.push(Fragment::Text(" "));
            self.scratch.push(part);
        }
        self.scratch.push(Fragment::Text(")"));
        self.flush_scratch();
    }

    /// Queue `open` followed by every part with no separator, then `)`.
    fn parenthesize_concat<I>(&mut self, open: &'static str, parts: I)
    where
        I: IntoIterator<Item = Fragment<'a>>,
    {
        self.scratch.push(Fragment::Text(open));
        self.scratch.extend(parts);
        self.scratch.push(Fragment::Text(")"));
        self.flush_scratch();
    }

    /// Move the scratch fragments onto the work stack so they pop in the
    /// order they were queued.
    fn flush_scratch(&mut self) {
        self.stack.extend(self.scratch.drain(..).rev());
    }
}

/// Integral values print without a fractional part. Non-finite values use the
/// spellings Lox programs print at runtime.
fn write_number<W: Write + ?Sized>(out: &mut W, n: f64) -> fmt::Result {
    if n.is_nan() {
        out.write_str("NaN")
    } else if n.is_infinite() {
        out.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(out, "{}", n)
    }
}

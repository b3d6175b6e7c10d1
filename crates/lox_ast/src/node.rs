//! Syntax tree node definitions for Lox.
//!
//! Both node families are closed sums. Nodes reference their children through
//! arena-allocated references, so a tree is strictly owned by one `AstArena`
//! and is never shared or cyclic.

use crate::token_kind::TokenKind;
use lox_core::intern::InternedString;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Token
// ============================================================================

/// The value carried by a literal token or a `Literal` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    Nil,
    Bool(bool),
    Number(f64),
    /// String contents without the surrounding quotes.
    String(InternedString),
}

/// A scanned token: one identifier, operator or keyword occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub lexeme: InternedString,
    /// Literal payload for string and number tokens.
    pub literal: Option<LiteralValue>,
    /// 1-based source line.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: InternedString, line: u32) -> Self {
        Self {
            kind,
            lexeme,
            literal: None,
            line,
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary(BinaryExpr<'a>),
    Logical(LogicalExpr<'a>),
    Unary(UnaryExpr<'a>),
    Call(CallExpr<'a>),
    Grouping(GroupingExpr<'a>),
    Literal(LiteralExpr),
    Variable(VariableExpr),
    Assign(AssignExpr<'a>),
    Get(GetExpr<'a>),
    Set(SetExpr<'a>),
    Super(SuperExpr),
    This(ThisExpr),
}

impl Expr<'_> {
    /// The variant name, used in diagnostics and trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Binary(_) => "Binary",
            Expr::Logical(_) => "Logical",
            Expr::Unary(_) => "Unary",
            Expr::Call(_) => "Call",
            Expr::Grouping(_) => "Grouping",
            Expr::Literal(_) => "Literal",
            Expr::Variable(_) => "Variable",
            Expr::Assign(_) => "Assign",
            Expr::Get(_) => "Get",
            Expr::Set(_) => "Set",
            Expr::Super(_) => "Super",
            Expr::This(_) => "This",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<'a> {
    pub left: &'a Expr<'a>,
    pub operator: Token,
    pub right: &'a Expr<'a>,
}

/// Short-circuiting `and` / `or`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr<'a> {
    pub left: &'a Expr<'a>,
    pub operator: Token,
    pub right: &'a Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr<'a> {
    pub operator: Token,
    pub right: &'a Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr<'a> {
    pub callee: &'a Expr<'a>,
    /// The closing parenthesis, kept for error positions.
    pub paren: Token,
    pub arguments: NodeList<'a, Expr<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr<'a> {
    pub expression: &'a Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr<'a> {
    pub name: Token,
    pub value: &'a Expr<'a>,
}

/// Property read: `object.name`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetExpr<'a> {
    pub object: &'a Expr<'a>,
    pub name: Token,
}

/// Property write: `object.name = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct SetExpr<'a> {
    pub object: &'a Expr<'a>,
    pub name: Token,
    pub value: &'a Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuperExpr {
    pub keyword: Token,
    pub method: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThisExpr {
    pub keyword: Token,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt<'a> {
    Block(BlockStmt<'a>),
    Expression(ExpressionStmt<'a>),
    Print(PrintStmt<'a>),
    Var(VarStmt<'a>),
    If(IfStmt<'a>),
    While(WhileStmt<'a>),
    Function(FunctionStmt<'a>),
    Return(ReturnStmt<'a>),
    Class(ClassStmt<'a>),
}

impl Stmt<'_> {
    /// The variant name, used in diagnostics and trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Block(_) => "Block",
            Stmt::Expression(_) => "Expression",
            Stmt::Print(_) => "Print",
            Stmt::Var(_) => "Var",
            Stmt::If(_) => "If",
            Stmt::While(_) => "While",
            Stmt::Function(_) => "Function",
            Stmt::Return(_) => "Return",
            Stmt::Class(_) => "Class",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt<'a> {
    pub statements: NodeList<'a, Stmt<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt<'a> {
    pub expression: &'a Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt<'a> {
    pub expression: &'a Expr<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarStmt<'a> {
    pub name: Token,
    pub initializer: OptionalNode<'a, Expr<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt<'a> {
    pub condition: &'a Expr<'a>,
    pub then_branch: &'a Stmt<'a>,
    pub else_branch: OptionalNode<'a, Stmt<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt<'a> {
    pub condition: &'a Expr<'a>,
    pub body: &'a Stmt<'a>,
}

/// A function declaration, or a method inside a class body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStmt<'a> {
    pub name: Token,
    pub params: NodeList<'a, Token>,
    pub body: NodeList<'a, Stmt<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt<'a> {
    pub keyword: Token,
    pub value: OptionalNode<'a, Expr<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassStmt<'a> {
    pub name: Token,
    pub methods: NodeList<'a, FunctionStmt<'a>>,
}

//! Arena-backed node construction.
//!
//! `NodeFactory` is what a parser (or a test) uses to build trees: child
//! nodes are moved into the arena, lexemes are interned, and every token gets
//! the factory's current line number.

use crate::node::*;
use crate::token_kind::TokenKind;
use lox_core::{AstArena, StringInterner};

#[derive(Clone, Copy)]
pub struct NodeFactory<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    line: u32,
}

impl<'a> NodeFactory<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Self {
            arena,
            interner,
            line: 1,
        }
    }

    /// A copy of this factory that stamps tokens with `line`.
    pub fn at_line(self, line: u32) -> Self {
        Self { line, ..self }
    }

    fn alloc<T>(&self, node: T) -> &'a T {
        self.arena.alloc(node)
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    pub fn token(&self, kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, self.interner.intern(lexeme), self.line)
    }

    /// A token whose lexeme is the kind's fixed text. Kinds without fixed
    /// text (identifiers, literals, end-of-file) get an empty lexeme.
    pub fn fixed_token(&self, kind: TokenKind) -> Token {
        let text = kind.fixed_text().unwrap_or_default();
        Token::new(kind, self.interner.intern_static(text), self.line)
    }

    pub fn identifier(&self, name: &str) -> Token {
        self.token(TokenKind::Identifier, name)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn binary(&self, left: Expr<'a>, operator: TokenKind, right: Expr<'a>) -> Expr<'a> {
        debug_assert!(operator.is_binary_operator(), "{operator} is not a binary operator");
        Expr::Binary(BinaryExpr {
            left: self.alloc(left),
            operator: self.fixed_token(operator),
            right: self.alloc(right),
        })
    }

    pub fn logical(&self, left: Expr<'a>, operator: TokenKind, right: Expr<'a>) -> Expr<'a> {
        debug_assert!(operator.is_logical_operator(), "{operator} is not a logical operator");
        Expr::Logical(LogicalExpr {
            left: self.alloc(left),
            operator: self.fixed_token(operator),
            right: self.alloc(right),
        })
    }

    pub fn unary(&self, operator: TokenKind, right: Expr<'a>) -> Expr<'a> {
        debug_assert!(operator.is_unary_operator(), "{operator} is not a unary operator");
        Expr::Unary(UnaryExpr {
            operator: self.fixed_token(operator),
            right: self.alloc(right),
        })
    }

    pub fn call(&self, callee: Expr<'a>, arguments: Vec<Expr<'a>>) -> Expr<'a> {
        Expr::Call(CallExpr {
            callee: self.alloc(callee),
            paren: self.fixed_token(TokenKind::RightParen),
            arguments: self.arena.alloc_slice(arguments),
        })
    }

    pub fn grouping(&self, expression: Expr<'a>) -> Expr<'a> {
        Expr::Grouping(GroupingExpr {
            expression: self.alloc(expression),
        })
    }

    pub fn literal(&self, value: LiteralValue) -> Expr<'a> {
        Expr::Literal(LiteralExpr { value })
    }

    pub fn nil(&self) -> Expr<'a> {
        self.literal(LiteralValue::Nil)
    }

    pub fn boolean(&self, value: bool) -> Expr<'a> {
        self.literal(LiteralValue::Bool(value))
    }

    pub fn number(&self, value: f64) -> Expr<'a> {
        self.literal(LiteralValue::Number(value))
    }

    /// A string literal. `contents` excludes the quotes.
    pub fn string(&self, contents: &str) -> Expr<'a> {
        self.literal(LiteralValue::String(self.interner.intern(contents)))
    }

    pub fn variable(&self, name: &str) -> Expr<'a> {
        Expr::Variable(VariableExpr {
            name: self.identifier(name),
        })
    }

    pub fn assign(&self, name: &str, value: Expr<'a>) -> Expr<'a> {
        Expr::Assign(AssignExpr {
            name: self.identifier(name),
            value: self.alloc(value),
        })
    }

    pub fn get(&self, object: Expr<'a>, name: &str) -> Expr<'a> {
        Expr::Get(GetExpr {
            object: self.alloc(object),
            name: self.identifier(name),
        })
    }

    pub fn set(&self, object: Expr<'a>, name: &str, value: Expr<'a>) -> Expr<'a> {
        Expr::Set(SetExpr {
            object: self.alloc(object),
            name: self.identifier(name),
            value: self.alloc(value),
        })
    }

    pub fn super_method(&self, method: &str) -> Expr<'a> {
        Expr::Super(SuperExpr {
            keyword: self.fixed_token(TokenKind::Super),
            method: self.identifier(method),
        })
    }

    pub fn this(&self) -> Expr<'a> {
        Expr::This(ThisExpr {
            keyword: self.fixed_token(TokenKind::This),
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn block(&self, statements: Vec<Stmt<'a>>) -> Stmt<'a> {
        Stmt::Block(BlockStmt {
            statements: self.arena.alloc_slice(statements),
        })
    }

    pub fn expression_stmt(&self, expression: Expr<'a>) -> Stmt<'a> {
        Stmt::Expression(ExpressionStmt {
            expression: self.alloc(expression),
        })
    }

    pub fn print(&self, expression: Expr<'a>) -> Stmt<'a> {
        Stmt::Print(PrintStmt {
            expression: self.alloc(expression),
        })
    }

    pub fn var(&self, name: &str, initializer: Option<Expr<'a>>) -> Stmt<'a> {
        Stmt::Var(VarStmt {
            name: self.identifier(name),
            initializer: initializer.map(|init| self.alloc(init)),
        })
    }

    pub fn if_stmt(
        &self,
        condition: Expr<'a>,
        then_branch: Stmt<'a>,
        else_branch: Option<Stmt<'a>>,
    ) -> Stmt<'a> {
        Stmt::If(IfStmt {
            condition: self.alloc(condition),
            then_branch: self.alloc(then_branch),
            else_branch: else_branch.map(|stmt| self.alloc(stmt)),
        })
    }

    pub fn while_stmt(&self, condition: Expr<'a>, body: Stmt<'a>) -> Stmt<'a> {
        Stmt::While(WhileStmt {
            condition: self.alloc(condition),
            body: self.alloc(body),
        })
    }

    /// A function declaration node, usable directly as a class method.
    pub fn function(&self, name: &str, params: &[&str], body: Vec<Stmt<'a>>) -> FunctionStmt<'a> {
        let params: Vec<Token> = params.iter().map(|p| self.identifier(p)).collect();
        FunctionStmt {
            name: self.identifier(name),
            params: self.arena.alloc_slice(params),
            body: self.arena.alloc_slice(body),
        }
    }

    pub fn function_stmt(&self, name: &str, params: &[&str], body: Vec<Stmt<'a>>) -> Stmt<'a> {
        Stmt::Function(self.function(name, params, body))
    }

    pub fn return_stmt(&self, value: Option<Expr<'a>>) -> Stmt<'a> {
        Stmt::Return(ReturnStmt {
            keyword: self.fixed_token(TokenKind::Return),
            value: value.map(|v| self.alloc(v)),
        })
    }

    pub fn class(&self, name: &str, methods: Vec<FunctionStmt<'a>>) -> Stmt<'a> {
        Stmt::Class(ClassStmt {
            name: self.identifier(name),
            methods: self.arena.alloc_slice(methods),
        })
    }

    /// Move a finished tree into the arena so it can be borrowed for `'a`.
    pub fn finish_expr(&self, expr: Expr<'a>) -> &'a Expr<'a> {
        self.alloc(expr)
    }

    pub fn finish_stmt(&self, stmt: Stmt<'a>) -> &'a Stmt<'a> {
        self.alloc(stmt)
    }
}

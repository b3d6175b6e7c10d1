//! lox_ast: Syntax tree definitions for the Lox language.
//!
//! This crate defines the token record, the two closed node families
//! (`Expr` and `Stmt`) and a `NodeFactory` that allocates trees in an arena.

pub mod factory;
pub mod node;
pub mod token_kind;

// Re-export key types
pub use factory::NodeFactory;
pub use node::*;
pub use token_kind::TokenKind;

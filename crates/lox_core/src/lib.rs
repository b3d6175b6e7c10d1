//! lox_core: Core utilities shared by the Lox front end.
//!
//! Provides the arena that owns every syntax tree node and the interner
//! that stores identifier and operator lexemes.

pub mod arena;
pub mod intern;

// Re-export commonly used types
pub use arena::AstArena;
pub use intern::{InternedString, StringInterner};

//! TokenKind enum - every token kind the Lox scanner produces.

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // ========================================================================
    // Single-character punctuation
    // ========================================================================
    LeftParen = 0,
    RightParen = 1,
    LeftBrace = 2,
    RightBrace = 3,
    Comma = 4,
    Dot = 5,
    Minus = 6,
    Plus = 7,
    Semicolon = 8,
    Slash = 9,
    Star = 10,

    // ========================================================================
    // One or two character operators
    // ========================================================================
    Bang = 11,
    BangEqual = 12,
    Equal = 13,
    EqualEqual = 14,
    Greater = 15,
    GreaterEqual = 16,
    Less = 17,
    LessEqual = 18,

    // ========================================================================
    // Literals
    // ========================================================================
    Identifier = 19,
    String = 20,
    Number = 21,

    // ========================================================================
    // Keywords
    // ========================================================================
    And = 22,
    Class = 23,
    Else = 24,
    False = 25,
    Fun = 26,
    For = 27,
    If = 28,
    Nil = 29,
    Or = 30,
    Print = 31,
    Return = 32,
    Super = 33,
    This = 34,
    True = 35,
    Var = 36,
    While = 37,

    Eof = 38,
}

impl TokenKind {
    /// Whether this kind can be the operator of a `Binary` expression.
    #[inline]
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Minus
                | TokenKind::Plus
                | TokenKind::Slash
                | TokenKind::Star
                | TokenKind::BangEqual
                | TokenKind::EqualEqual
                | TokenKind::Greater
                | TokenKind::GreaterEqual
                | TokenKind::Less
                | TokenKind::LessEqual
        )
    }

    /// Whether this kind can be the operator of a `Unary` expression.
    #[inline]
    pub fn is_unary_operator(self) -> bool {
        matches!(self, TokenKind::Minus | TokenKind::Bang)
    }

    /// Whether this kind can be the operator of a `Logical` expression.
    #[inline]
    pub fn is_logical_operator(self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or)
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::And => Some("and"),
            TokenKind::Class => Some("class"),
            TokenKind::Else => Some("else"),
            TokenKind::False => Some("false"),
            TokenKind::Fun => Some("fun"),
            TokenKind::For => Some("for"),
            TokenKind::If => Some("if"),
            TokenKind::Nil => Some("nil"),
            TokenKind::Or => Some("or"),
            TokenKind::Print => Some("print"),
            TokenKind::Return => Some("return"),
            TokenKind::Super => Some("super"),
            TokenKind::This => Some("this"),
            TokenKind::True => Some("true"),
            TokenKind::Var => Some("var"),
            TokenKind::While => Some("while"),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Comma => Some(","),
            TokenKind::Dot => Some("."),
            TokenKind::Minus => Some("-"),
            TokenKind::Plus => Some("+"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Slash => Some("/"),
            TokenKind::Star => Some("*"),
            TokenKind::Bang => Some("!"),
            TokenKind::BangEqual => Some("!="),
            TokenKind::Equal => Some("="),
            TokenKind::EqualEqual => Some("=="),
            TokenKind::Greater => Some(">"),
            TokenKind::GreaterEqual => Some(">="),
            TokenKind::Less => Some("<"),
            TokenKind::LessEqual => Some("<="),
            _ => None,
        }
    }

    /// The fixed source text of this kind, if it has one.
    ///
    /// Identifiers, strings, numbers and end-of-file have no fixed text.
    pub fn fixed_text(self) -> Option<&'static str> {
        self.punctuation_text().or_else(|| self.keyword_text())
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_text() {
        assert_eq!(TokenKind::Fun.keyword_text(), Some("fun"));
        assert_eq!(TokenKind::Or.keyword_text(), Some("or"));
        assert_eq!(TokenKind::Plus.keyword_text(), None);
    }

    #[test]
    fn test_operator_classes() {
        assert!(TokenKind::Star.is_binary_operator());
        assert!(!TokenKind::Bang.is_binary_operator());
        assert!(TokenKind::Or.is_logical_operator());
        assert!(!TokenKind::Plus.is_logical_operator());
        assert!(TokenKind::Minus.is_unary_operator());
        assert!(!TokenKind::Star.is_unary_operator());
    }

    #[test]
    fn test_fixed_text() {
        assert_eq!(TokenKind::BangEqual.fixed_text(), Some("!="));
        assert_eq!(TokenKind::This.fixed_text(), Some("this"));
        assert_eq!(TokenKind::Identifier.fixed_text(), None);
        assert_eq!(TokenKind::Eof.fixed_text(), None);
    }
}

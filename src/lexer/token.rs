/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types used by the
 *            Glint front end during the lexing and parsing stages.
 *
 * License:
 * This file is part of the Glint syntax front end project.
 *
 * Glint is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the **category of a lexical token** in the Java-like
/// language Glint scans.
///
/// `TokenKind` is a closed set: every character sequence the lexer
/// accepts maps to exactly one of these kinds, and the highlighter
/// chooses display styles from the kind alone.
///
/// # Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → diagnostics
///                          └──────→ Highlighter → colors
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A user-defined name: variables, type names not in the reserved
    /// set, and so on.
    Identifier,

    /// A whole-number literal such as `42`, including an optional type
    /// suffix (`42L`).
    IntegerLiteral,

    /// A literal with a decimal point such as `3.14` or `3.14f`.
    FloatLiteral,

    /// A double-quoted string literal, quotes included in the text.
    StringLiteral,

    /// A single-quoted character literal, quotes included in the text.
    CharLiteral,

    /// A reserved word of the language (`if`, `while`, `int`, ...).
    ///
    /// Keyword detection is handled by `keywords.rs`.
    Keyword,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,

    /// `==`
    EqualTo,
    /// `!=`
    NotEqualTo,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<=`
    LessThanOrEqual,

    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `%=`
    ModuloAssign,

    /// `++`
    Increment,
    /// `--`
    Decrement,

    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    LogicalNot,

    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `~`
    BitwiseNot,

    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,
    /// `>>>`
    UnsignedRightShift,

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,

    /// `// ...` to end of line, newline excluded.
    LineComment,

    /// `/* ... */`, delimiters included.
    BlockComment,

    /// A character the lexer could not classify. Unrecognized input is
    /// fatal during scanning, so this kind never appears in a token
    /// sequence returned by `tokenize`; it exists so downstream style
    /// tables cover the full closed set.
    Unknown,

    /// End-of-input marker, always the **final token** of a successful
    /// scan.
    Eof,
}

impl TokenKind {
    /// Maps this kind onto its coarse [`TokenCategory`].
    ///
    /// Pure and total: consumers that only care about broad styling
    /// classes (keyword vs. literal vs. operator) use this instead of
    /// matching all kinds themselves.
    pub const fn category(self) -> TokenCategory {
        match self {
            Self::Keyword => TokenCategory::Keyword,
            Self::Identifier => TokenCategory::Identifier,
            Self::IntegerLiteral
            | Self::FloatLiteral
            | Self::StringLiteral
            | Self::CharLiteral => TokenCategory::Literal,
            Self::LineComment | Self::BlockComment => TokenCategory::Comment,
            Self::Eof => TokenCategory::Eof,
            Self::Unknown => TokenCategory::Unknown,
            _ => TokenCategory::Operator,
        }
    }
}

impl fmt::Display for TokenKind {
    /// Human form of the kind, used in parser diagnostics: fixed-spelling
    /// kinds print their quoted lexeme (`')'`, `';'`), open-ended kinds
    /// print a short noun (`identifier`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Identifier => "identifier",
            Self::IntegerLiteral => "integer literal",
            Self::FloatLiteral => "float literal",
            Self::StringLiteral => "string literal",
            Self::CharLiteral => "character literal",
            Self::Keyword => "keyword",
            Self::Assign => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Multiply => "'*'",
            Self::Divide => "'/'",
            Self::Modulo => "'%'",
            Self::EqualTo => "'=='",
            Self::NotEqualTo => "'!='",
            Self::GreaterThan => "'>'",
            Self::LessThan => "'<'",
            Self::GreaterThanOrEqual => "'>='",
            Self::LessThanOrEqual => "'<='",
            Self::PlusAssign => "'+='",
            Self::MinusAssign => "'-='",
            Self::MultiplyAssign => "'*='",
            Self::DivideAssign => "'/='",
            Self::ModuloAssign => "'%='",
            Self::Increment => "'++'",
            Self::Decrement => "'--'",
            Self::LogicalAnd => "'&&'",
            Self::LogicalOr => "'||'",
            Self::LogicalNot => "'!'",
            Self::BitwiseAnd => "'&'",
            Self::BitwiseOr => "'|'",
            Self::BitwiseXor => "'^'",
            Self::BitwiseNot => "'~'",
            Self::LeftShift => "'<<'",
            Self::RightShift => "'>>'",
            Self::UnsignedRightShift => "'>>>'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::Unknown => "unknown",
            Self::Eof => "end of input",
        };
        write!(f, "{text}")
    }
}

/// Coarse classification of token kinds for consumers that only need
/// broad styling classes.
///
/// Everything that is not a keyword, identifier, literal, comment, EOF
/// marker, or unknown byte counts as an operator, punctuation included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Comment,
    Eof,
    Unknown,
}

/// Represents a **single lexical token** produced by the Glint lexer.
///
/// A `Token` is a fully classified unit of source code consisting of:
/// - A token category (`TokenKind`)
/// - The exact source text (`text`)
/// - The character range it covers (`span`)
///
/// # Example Tokens
/// ```text
/// int   →  { kind: Keyword,        text: "int", span: 0-2 }
/// x     →  { kind: Identifier,     text: "x",   span: 4-4 }
/// 42    →  { kind: IntegerLiteral, text: "42",  span: 8-9 }
/// ```
///
/// Tokens are immutable once created. The lexer owns the sequence it
/// returns until it is handed to the parser or highlighter, which only
/// read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// Preserved verbatim so that `source[span] == text` holds for every
    /// non-EOF token, which is what lets the highlighter paint ranges
    /// straight from the token sequence.
    pub text: String,

    /// The character range the token covers.
    pub span: Span,
}

impl Token {
    /// Creates a token from its parts.
    pub const fn new(kind: TokenKind, text: String, span: Span) -> Self {
        Self { kind, text, span }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Prints only the token's text, the exact source the user wrote,
    /// rather than its full internal structure. Diagnostics use this;
    /// `Debug` stays available for developer introspection.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_coarse() {
        assert_eq!(TokenKind::Keyword.category(), TokenCategory::Keyword);
        assert_eq!(
            TokenKind::IntegerLiteral.category(),
            TokenCategory::Literal
        );
        assert_eq!(TokenKind::CharLiteral.category(), TokenCategory::Literal);
        assert_eq!(TokenKind::LineComment.category(), TokenCategory::Comment);
        assert_eq!(TokenKind::Semicolon.category(), TokenCategory::Operator);
        assert_eq!(
            TokenKind::UnsignedRightShift.category(),
            TokenCategory::Operator
        );
        assert_eq!(TokenKind::Eof.category(), TokenCategory::Eof);
        assert_eq!(TokenKind::Unknown.category(), TokenCategory::Unknown);
    }

    #[test]
    fn display_prints_the_lexeme() {
        let token = Token::new(
            TokenKind::Identifier,
            "count".to_string(),
            Span::new(0, 4),
        );
        assert_eq!(token.to_string(), "count");
    }
}

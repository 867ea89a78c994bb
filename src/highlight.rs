/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      highlight.rs
 * Purpose:   Cosmetic grouping of token kinds for display-style
 *            selection by editor front ends.
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

use crate::lexer::token::TokenKind;
use serde::{Deserialize, Serialize};

/// The display-style family a token kind belongs to.
///
/// Editor front ends pick one color per group; the kind alone is enough
/// to choose it. Operators of every flavor (arithmetic, comparison,
/// logical, bitwise, assignment, shifts, increment/decrement) share one
/// group; brackets and punctuation share another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightGroup {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Punctuation,
    Comment,
    Unknown,
    Eof,
}

/// A plain RGB triple, enough for a front end to build whatever color
/// value its toolkit wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fallback for consumers that define their own partial palettes.
pub const DEFAULT_COLOR: Rgb = Rgb(192, 192, 192);

impl TokenKind {
    /// Maps this kind onto its [`HighlightGroup`].
    ///
    /// One explicit, exhaustive table over the closed kind set, with no
    /// wildcard arm: adding a kind forces a grouping decision here.
    pub const fn highlight_group(self) -> HighlightGroup {
        match self {
            Self::Keyword => HighlightGroup::Keyword,
            Self::Identifier => HighlightGroup::Identifier,

            Self::IntegerLiteral
            | Self::FloatLiteral
            | Self::StringLiteral
            | Self::CharLiteral => HighlightGroup::Literal,

            Self::Assign
            | Self::Plus
            | Self::Minus
            | Self::Multiply
            | Self::Divide
            | Self::Modulo
            | Self::EqualTo
            | Self::NotEqualTo
            | Self::GreaterThan
            | Self::LessThan
            | Self::GreaterThanOrEqual
            | Self::LessThanOrEqual
            | Self::PlusAssign
            | Self::MinusAssign
            | Self::MultiplyAssign
            | Self::DivideAssign
            | Self::ModuloAssign
            | Self::Increment
            | Self::Decrement
            | Self::LogicalAnd
            | Self::LogicalOr
            | Self::LogicalNot
            | Self::BitwiseAnd
            | Self::BitwiseOr
            | Self::BitwiseXor
            | Self::BitwiseNot
            | Self::LeftShift
            | Self::RightShift
            | Self::UnsignedRightShift => HighlightGroup::Operator,

            Self::LParen
            | Self::RParen
            | Self::LBrace
            | Self::RBrace
            | Self::LBracket
            | Self::RBracket
            | Self::Semicolon
            | Self::Comma
            | Self::Dot => HighlightGroup::Punctuation,

            Self::LineComment | Self::BlockComment => HighlightGroup::Comment,
            Self::Unknown => HighlightGroup::Unknown,
            Self::Eof => HighlightGroup::Eof,
        }
    }
}

impl HighlightGroup {
    /// The default dark-background palette.
    ///
    /// Front ends are free to substitute their own; this one suits a
    /// dark editor theme, with all literal kinds sharing one family.
    pub const fn default_color(self) -> Rgb {
        match self {
            Self::Keyword => Rgb(255, 0, 255),
            Self::Identifier => Rgb(255, 255, 255),
            Self::Literal => Rgb(0, 255, 255),
            Self::Operator => Rgb(255, 175, 175),
            Self::Punctuation => Rgb(255, 255, 255),
            Self::Comment => Rgb(255, 255, 255),
            Self::Unknown => Rgb(255, 0, 0),
            Self::Eof => Rgb(128, 128, 128),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_flavors_share_one_group() {
        for kind in [
            TokenKind::Plus,
            TokenKind::EqualTo,
            TokenKind::LogicalAnd,
            TokenKind::BitwiseXor,
            TokenKind::PlusAssign,
            TokenKind::UnsignedRightShift,
            TokenKind::Increment,
        ] {
            assert_eq!(kind.highlight_group(), HighlightGroup::Operator);
        }
    }

    #[test]
    fn punctuation_is_its_own_group() {
        for kind in [
            TokenKind::LParen,
            TokenKind::RBracket,
            TokenKind::Semicolon,
            TokenKind::Dot,
        ] {
            assert_eq!(kind.highlight_group(), HighlightGroup::Punctuation);
        }
    }

    #[test]
    fn every_group_has_a_color() {
        assert_eq!(
            HighlightGroup::Keyword.default_color(),
            Rgb(255, 0, 255)
        );
        assert_eq!(HighlightGroup::Unknown.default_color(), Rgb(255, 0, 0));
        assert_ne!(DEFAULT_COLOR, HighlightGroup::Keyword.default_color());
    }
}

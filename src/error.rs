/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   Fatal lexical fault type returned by the Glint lexer.
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

use std::fmt;

/// Classifies a fatal lexical fault.
///
/// Lexing is fail-fast: the first fault aborts the whole tokenize call
/// and no partial token sequence is returned. Callers must treat a
/// failed tokenize as "no tokens available".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A `"` string literal reached end of input before its closing quote.
    UnclosedStringLiteral,

    /// A `'` character literal reached end of input before its closing quote.
    UnclosedCharLiteral,

    /// A character that cannot start any token.
    UnrecognizedCharacter(char),
}

impl LexErrorKind {
    /// Stable error code (L0001, L0002, ...) used by the diagnostics
    /// printer.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnclosedStringLiteral => "L0001",
            Self::UnclosedCharLiteral => "L0002",
            Self::UnrecognizedCharacter(_) => "L0003",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedStringLiteral => write!(f, "Unclosed string literal"),
            Self::UnclosedCharLiteral => write!(f, "Unclosed character literal"),
            Self::UnrecognizedCharacter(ch) => {
                write!(f, "Unrecognized character '{ch}'")
            }
        }
    }
}

/// Error produced during lexing.
///
/// Carries the fault kind plus its locator: the 1-based line number and
/// the character offset of the offending position (for unterminated
/// literals, the offset of the opening quote).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Line {line}, position {position}: {kind}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,

    /// 1-based line number of the fault.
    pub line: usize,

    /// Character offset of the fault into the whole source.
    pub position: usize,
}

impl LexError {
    /// Generic constructor.
    pub const fn new(kind: LexErrorKind, line: usize, position: usize) -> Self {
        Self {
            kind,
            line,
            position,
        }
    }

    /// Unterminated string literal at the opening quote.
    pub const fn unclosed_string(line: usize, position: usize) -> Self {
        Self::new(LexErrorKind::UnclosedStringLiteral, line, position)
    }

    /// Unterminated character literal at the opening quote.
    pub const fn unclosed_char(line: usize, position: usize) -> Self {
        Self::new(LexErrorKind::UnclosedCharLiteral, line, position)
    }

    /// Character that matches no token class.
    pub const fn unrecognized(ch: char, line: usize, position: usize) -> Self {
        Self::new(LexErrorKind::UnrecognizedCharacter(ch), line, position)
    }
}

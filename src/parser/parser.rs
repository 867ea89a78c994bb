/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * Core Recursive-Descent Syntax Checker Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` driver used to validate a token stream against the
 * statement/expression grammar of the Java-like language Glint scans.
 *
 * The checking implementation itself is split across multiple modules:
 * - `statements.rs`   → Statement-level grammar (`if`, `while`, `for`, ...)
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token matching, consumption, and navigation
 *
 * This file serves as the **root coordinator** of the checking process:
 * it owns the statement-list loop, the panic-mode recovery that lets
 * scanning continue past a fault, and the independent bracket-balance
 * check.
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

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// A single syntax fault raised while checking one statement.
///
/// Internal to the parser: every fault is caught at the statement-list
/// loop, converted to its message string, and accumulated. Nothing of
/// this type crosses the `parse` boundary.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub(crate) struct SyntaxFault {
    message: String,
}

impl SyntaxFault {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the statement and expression productions.
pub(crate) type ParseResult<T> = Result<T, SyntaxFault>;

/// The core recursive-descent syntax checker.
///
/// Maintains the full token stream produced by the lexer, the current
/// cursor position, and the diagnostics accumulated so far. The grammar
/// logic lives in the `statements`, `expressions`, and `helpers`
/// extension modules via additional `impl Parser` blocks.
pub struct Parser {
    /// Complete list of tokens to be checked.
    pub(crate) tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub(crate) current: usize,

    /// Diagnostics collected across the whole pass.
    pub(crate) errors: Vec<String>,
}

/// Public entry point for the syntax-checking phase.
///
/// Creates a `Parser` over the provided token list, runs the full
/// recursive-descent pass, and returns the accumulated diagnostics.
/// An **empty vector means the input was syntactically accepted**.
///
/// This function never panics and never stops at the first fault:
/// panic-mode recovery resynchronizes after each error so that every
/// statement gets a chance to report independently.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → diagnostics
/// ```
///
/// # Example
/// ```
/// let tokens = glint::tokenize("int x = 5;").unwrap();
/// assert!(glint::parse(tokens).is_empty());
/// ```
pub fn parse(tokens: Vec<Token>) -> Vec<String> {
    Parser::new(tokens).parse()
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// An empty stream gets a synthetic end-of-input terminator so the
    /// cursor always has a token to point at.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token::new(
                TokenKind::Eof,
                "EOF".to_string(),
                Span::new(0, 0),
            ));
        }
        Self {
            tokens,
            current: 0,
            errors: Vec::new(),
        }
    }

    /// Checks the entire token stream and returns the diagnostics.
    ///
    /// Runs the top-level statement list, then reports any leftover
    /// token as trailing input. Statements are checked in strict
    /// left-to-right order.
    pub fn parse(mut self) -> Vec<String> {
        self.statement_list();

        if !self.is_at_end() {
            let token = self.current_token().clone();
            self.errors.push(format!(
                "Unexpected token after end of input: {} ({:?}) at position {}",
                token.text, token.kind, token.span.start
            ));
        }

        self.errors
    }

    /// Checks statements until end of input or a closing `}` ends the
    /// current list normally.
    ///
    /// This loop is the **panic-mode recovery boundary**: a fault inside
    /// a statement is recorded here, the stream is resynchronized, and
    /// the loop continues, yielding multiple independent diagnostics per
    /// pass rather than stopping at the first error.
    pub(crate) fn statement_list(&mut self) {
        while !self.is_at_end() && !self.check(TokenKind::RBrace) {
            if let Err(fault) = self.statement() {
                self.errors.push(fault.to_string());
                self.synchronize();
            }
        }
    }

    /// Discards tokens until a plausible statement boundary: end of
    /// input, `;`, `}`, or `{`. A `;` is itself consumed so the next
    /// statement starts clean.
    ///
    /// This is a heuristic resynchronization point, not a correctness
    /// guarantee: unusual brace or semicolon placement can swallow
    /// legitimate statements, which is acceptable for a highlighting
    /// aid.
    fn synchronize(&mut self) {
        while !matches!(
            self.current_token().kind,
            TokenKind::Eof | TokenKind::Semicolon | TokenKind::RBrace | TokenKind::LBrace
        ) {
            self.advance();
        }

        if self.check(TokenKind::Semicolon) {
            self.advance();
        }
    }
}

/// Scans a raw token sequence with a stack of opening-bracket kinds and
/// reports whether `( ) { } [ ]` nest correctly.
///
/// Returns `false` on a closer with an empty stack or a mismatched
/// opener, `true` only when the stack is empty at the end. Informational
/// only: `parse` runs its own recovery regardless of this result.
///
/// # Example
/// ```
/// let tokens = glint::tokenize("(a[b]{c})").unwrap();
/// assert!(glint::check_balanced_brackets(&tokens));
/// ```
pub fn check_balanced_brackets(tokens: &[Token]) -> bool {
    let mut stack = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket => {
                stack.push(token.kind);
            }
            TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => {
                let Some(open) = stack.pop() else {
                    return false;
                };
                if !brackets_match(open, token.kind) {
                    return false;
                }
            }
            _ => {}
        }
    }

    stack.is_empty()
}

const fn brackets_match(open: TokenKind, close: TokenKind) -> bool {
    matches!(
        (open, close),
        (TokenKind::LParen, TokenKind::RParen)
            | (TokenKind::LBrace, TokenKind::RBrace)
            | (TokenKind::LBracket, TokenKind::RBracket)
    )
}

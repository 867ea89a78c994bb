/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:     parser/helpers.rs
 * Purpose:  Token matching, consumption, and navigation utilities shared
 *           by the statement and expression productions.
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

use crate::lexer::keywords::is_type_name;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{ParseResult, Parser, SyntaxFault};

impl Parser {
    /// Returns the token under the cursor.
    ///
    /// The cursor never moves past the final `Eof` token, so this is
    /// always safe to call.
    pub(crate) fn current_token(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Advances one token forward and returns the consumed token.
    ///
    /// Clamps at the final `Eof` token: once end of input is reached,
    /// further advances keep returning it.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
        token
    }

    /// Checks whether the current token has the given kind, without
    /// consuming it.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_token().kind == kind
    }

    /// Checks for a specific keyword without consuming it.
    pub(crate) fn check_keyword(&self, keyword: &str) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Keyword && token.text == keyword
    }

    /// Checks whether the current token names a declaration-starting
    /// type.
    ///
    /// Matched by **text**: the primitive type names lex as keywords,
    /// but `String` lexes as an identifier, and both start declarations.
    pub(crate) fn check_type_name(&self) -> bool {
        let token = self.current_token();
        matches!(token.kind, TokenKind::Keyword | TokenKind::Identifier)
            && is_type_name(&token.text)
    }

    /// Matches a token kind and consumes it if present.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required token kind or raises a syntax fault naming
    /// the expected kind and the offending token.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let token = self.current_token();
        Err(SyntaxFault::new(format!(
            "Expected {}, got: {} ({:?}) at position {}",
            kind, token.text, token.kind, token.span.start
        )))
    }

    /// Consumes a required keyword or raises a syntax fault.
    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> ParseResult<Token> {
        if self.check_keyword(keyword) {
            return Ok(self.advance());
        }

        let token = self.current_token();
        Err(SyntaxFault::new(format!(
            "Expected '{}' (keyword), got: {} ({:?}) at position {}",
            keyword, token.text, token.kind, token.span.start
        )))
    }

    /// Returns true once the cursor sits on the end-of-input token.
    pub(crate) fn is_at_end(&self) -> bool {
        self.current_token().kind == TokenKind::Eof
    }
}

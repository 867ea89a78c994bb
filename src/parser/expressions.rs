/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  Expression grammar of the Glint syntax checker.
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the entire expression grammar. Checking order
 * follows strict mathematical precedence, lowest binding first:
 *
 *   logical_or → logical_and → comparison → additive → multiplicative
 *              → unary → primary
 *
 * All binary levels are left-associative; unary is right-recursive.
 * No AST is built: each production simply consumes the tokens it
 * accepts and faults on the first token it cannot.
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
use crate::parser::parser::{ParseResult, Parser, SyntaxFault};

impl Parser {
    /// expression → logical_or
    pub(crate) fn expression(&mut self) -> ParseResult<()> {
        self.logical_or()
    }

    /// logical_or → logical_and ( `||` logical_and )*
    fn logical_or(&mut self) -> ParseResult<()> {
        self.logical_and()?;

        while self.match_kind(TokenKind::LogicalOr) {
            self.logical_and()?;
        }

        Ok(())
    }

    /// logical_and → comparison ( `&&` comparison )*
    fn logical_and(&mut self) -> ParseResult<()> {
        self.comparison()?;

        while self.match_kind(TokenKind::LogicalAnd) {
            self.comparison()?;
        }

        Ok(())
    }

    /// comparison → additive ( ( `<` | `>` | `<=` | `>=` | `==` | `!=` ) additive )*
    fn comparison(&mut self) -> ParseResult<()> {
        self.additive()?;

        while self.match_kind(TokenKind::LessThan)
            || self.match_kind(TokenKind::GreaterThan)
            || self.match_kind(TokenKind::LessThanOrEqual)
            || self.match_kind(TokenKind::GreaterThanOrEqual)
            || self.match_kind(TokenKind::EqualTo)
            || self.match_kind(TokenKind::NotEqualTo)
        {
            self.additive()?;
        }

        Ok(())
    }

    /// additive → multiplicative ( ( `+` | `-` ) multiplicative )*
    fn additive(&mut self) -> ParseResult<()> {
        self.multiplicative()?;

        while self.match_kind(TokenKind::Plus) || self.match_kind(TokenKind::Minus) {
            self.multiplicative()?;
        }

        Ok(())
    }

    /// multiplicative → unary ( ( `*` | `/` | `%` ) unary )*
    fn multiplicative(&mut self) -> ParseResult<()> {
        self.unary()?;

        while self.match_kind(TokenKind::Multiply)
            || self.match_kind(TokenKind::Divide)
            || self.match_kind(TokenKind::Modulo)
        {
            self.unary()?;
        }

        Ok(())
    }

    /// unary → ( `!` | `-` | `+` ) unary | primary
    fn unary(&mut self) -> ParseResult<()> {
        if self.match_kind(TokenKind::LogicalNot)
            || self.match_kind(TokenKind::Minus)
            || self.match_kind(TokenKind::Plus)
        {
            return self.unary();
        }

        self.primary()
    }

    /// primary → `( expr )`
    ///         | identifier ( `++` | `--` )?
    ///         | literal
    ///         | ( `++` | `--` ) identifier
    ///
    /// Any other token faults, naming what was found and where.
    fn primary(&mut self) -> ParseResult<()> {
        match self.current_token().kind {
            TokenKind::LParen => {
                self.advance();
                self.expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(())
            }

            TokenKind::Identifier => {
                self.advance();

                // Post-increment / decrement
                if self.check(TokenKind::Increment) || self.check(TokenKind::Decrement) {
                    self.advance();
                }
                Ok(())
            }

            TokenKind::IntegerLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::CharLiteral => {
                self.advance();
                Ok(())
            }

            // Pre-increment / decrement with a mandatory identifier
            TokenKind::Increment | TokenKind::Decrement => {
                let operator = self.advance();

                if self.check(TokenKind::Identifier) {
                    self.advance();
                    Ok(())
                } else {
                    let token = self.current_token();
                    Err(SyntaxFault::new(format!(
                        "Expected identifier after '{}', got: {} ({:?}) at position {}",
                        operator.text, token.text, token.kind, token.span.start
                    )))
                }
            }

            _ => {
                let token = self.current_token();
                Err(SyntaxFault::new(format!(
                    "Expected identifier, number, string, or parenthesized \
                     expression, got: {} ({:?}) at position {}",
                    token.text, token.kind, token.span.start
                )))
            }
        }
    }
}

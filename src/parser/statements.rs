/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  Statement-level grammar of the Glint syntax checker.
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
    /// Checks a single statement.
    ///
    /// This is the **main dispatcher** for all statement grammar forms.
    /// It inspects the leading token and routes to the appropriate
    /// production:
    /// - `if` / `while` / `for` / `return` keywords
    /// - a recognized type name → declaration
    /// - `{` → nested block
    /// - an identifier → expression statement
    /// - end of input or `}` → normal end of the surrounding list
    ///
    /// Anything else is an immediate syntax fault, handled by the
    /// statement-list recovery loop in `parser.rs`.
    pub(crate) fn statement(&mut self) -> ParseResult<()> {
        // ------------------------------------------------------------
        // KEYWORD-LED STATEMENTS
        // ------------------------------------------------------------
        if self.current_token().kind == TokenKind::Keyword {
            if self.check_keyword("if") {
                return self.if_statement();
            }
            if self.check_keyword("while") {
                return self.while_statement();
            }
            if self.check_keyword("for") {
                return self.for_statement();
            }
            if self.check_keyword("return") {
                return self.return_statement();
            }
            if self.check_type_name() {
                return self.declaration();
            }

            let token = self.current_token();
            return Err(SyntaxFault::new(format!(
                "Invalid statement keyword: {} at position {}",
                token.text, token.span.start
            )));
        }

        // ------------------------------------------------------------
        // BLOCKS, DECLARATIONS, EXPRESSION STATEMENTS
        // ------------------------------------------------------------
        match self.current_token().kind {
            TokenKind::LBrace => self.block(),

            // `String` lexes as an identifier but starts a declaration.
            TokenKind::Identifier if self.check_type_name() => self.declaration(),
            TokenKind::Identifier => self.expression_statement(),

            // Normal end of the surrounding statement list.
            TokenKind::Eof | TokenKind::RBrace => Ok(()),

            _ => {
                let token = self.current_token();
                Err(SyntaxFault::new(format!(
                    "Unexpected token: {} ({:?}) at position {}",
                    token.text, token.kind, token.span.start
                )))
            }
        }
    }

    /// if → `if ( expr ) stmt ( else stmt )?`
    ///
    /// The statement arms may themselves be blocks. A dangling `else`
    /// binds to the nearest preceding unmatched `if`, which recursive
    /// descent gives for free.
    fn if_statement(&mut self) -> ParseResult<()> {
        self.expect_keyword("if")?;
        self.expect(TokenKind::LParen)?;
        self.expression()?;
        self.expect(TokenKind::RParen)?;
        self.statement()?;

        if self.check_keyword("else") {
            self.advance();
            self.statement()?;
        }

        Ok(())
    }

    /// while → `while ( expr ) stmt`
    fn while_statement(&mut self) -> ParseResult<()> {
        self.expect_keyword("while")?;
        self.expect(TokenKind::LParen)?;
        self.expression()?;
        self.expect(TokenKind::RParen)?;
        self.statement()
    }

    /// for → `for ( init? ; cond? ; update? ) stmt`
    ///
    /// The initializer is either a declaration (which consumes its own
    /// `;`) or an expression followed by an explicit `;`. Condition and
    /// update are optional, but all three clause separators are
    /// mandatory tokens.
    fn for_statement(&mut self) -> ParseResult<()> {
        self.expect_keyword("for")?;
        self.expect(TokenKind::LParen)?;

        // Initialization (optional)
        if self.check(TokenKind::Semicolon) {
            self.expect(TokenKind::Semicolon)?;
        } else if self.check_type_name() {
            self.declaration()?; // consumes the ';'
        } else {
            self.expression()?;
            self.expect(TokenKind::Semicolon)?;
        }

        // Condition (optional)
        if !self.check(TokenKind::Semicolon) {
            self.expression()?;
        }
        self.expect(TokenKind::Semicolon)?;

        // Update (optional)
        if !self.check(TokenKind::RParen) {
            self.expression()?;
        }
        self.expect(TokenKind::RParen)?;

        self.statement()
    }

    /// return → `return expr? ;`
    fn return_statement(&mut self) -> ParseResult<()> {
        self.expect_keyword("return")?;

        if !self.check(TokenKind::Semicolon) {
            self.expression()?;
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    /// decl → `type identifier ( = expr )? ;`
    ///
    /// The dispatcher has already verified the leading token is a type
    /// name, so it is consumed unconditionally here.
    fn declaration(&mut self) -> ParseResult<()> {
        self.advance(); // type name

        self.expect(TokenKind::Identifier)?;

        if self.match_kind(TokenKind::Assign) {
            self.expression()?;
        }

        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    /// block → `{ stmt* }`
    ///
    /// The inner statement list recovers per statement on its own, so a
    /// block only faults on its braces.
    fn block(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::LBrace)?;
        self.statement_list();
        self.expect(TokenKind::RBrace)?;
        Ok(())
    }

    /// expr-stmt → `expr ;`
    fn expression_statement(&mut self) -> ParseResult<()> {
        self.expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }
}

/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Single-pass, character-class-driven scanner that turns raw
 *            source text into the Glint token stream.
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

use crate::error::LexError;
use crate::lexer::keywords::is_keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Performs complete lexical analysis over a source string.
///
/// Scans left to right in a single pass with at most two characters of
/// lookahead and returns the ordered token sequence, always terminated
/// by one `Eof` token.
///
/// # Errors
///
/// Fail-fast: the first unterminated string/character literal or
/// unrecognized character aborts the whole call with a [`LexError`]
/// carrying the fault's line and character offset. No partial token
/// sequence is ever returned.
///
/// # Example
/// ```
/// let tokens = glint::tokenize("int x = 5;").unwrap();
/// assert_eq!(tokens.len(), 6); // int, x, =, 5, ;, EOF
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens()?;
    Ok(lexer.tokens)
}

/// Letter-like lead character of an identifier: any Unicode letter,
/// `_`, or `$`.
fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

/// Continuation character of an identifier: letter-like or digit.
fn is_identifier_continue(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_numeric()
}

struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new lexer instance with the cursor at position 0 and
    /// the line counter at 1.
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans individual tokens until the end of the source is reached,
    /// then appends the final `Eof` token.
    ///
    /// Results are written into `self.tokens`; whitespace is skipped,
    /// comments are tokenized.
    fn scan_tokens(&mut self) -> Result<(), LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        let end = self.chars.len();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            "EOF".to_string(),
            Span::new(end, end),
        ));
        Ok(())
    }

    /// Scans and emits a single token (or skips one whitespace
    /// character) from the source stream.
    ///
    /// Routes on the character class of the lead character:
    /// comments, identifiers/keywords, numbers, string and character
    /// literals, then operators and punctuation.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.current;
        let ch = self.advance();

        match ch {
            '\n' => self.line += 1,
            c if c.is_whitespace() => {}

            '/' if self.peek() == '/' => self.line_comment(start),
            '/' if self.peek() == '*' => self.block_comment(start),

            c if is_identifier_start(c) => self.identifier(start),
            c if c.is_numeric() => self.number(start),

            '"' => self.string_literal(start)?,
            '\'' => self.char_literal(start)?,

            _ => self.operator(start, ch)?,
        }

        Ok(())
    }

    /// Scans a `//` comment through end of line, newline excluded.
    fn line_comment(&mut self, start: usize) {
        self.advance(); // second '/'

        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }

        self.push_token(TokenKind::LineComment, start);
    }

    /// Scans a `/* ... */` comment, closer included.
    ///
    /// Reaching end of input before `*/` still emits the comment token
    /// with whatever was scanned, mirroring how editors color an
    /// in-progress comment while the user is typing it.
    fn block_comment(&mut self, start: usize) {
        self.advance(); // '*'

        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                break;
            }

            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        self.push_token(TokenKind::BlockComment, start);
    }

    /// Scans an identifier or keyword token.
    ///
    /// Reads letter-like and digit continuation characters, then
    /// classifies the accumulated text against the reserved-word set.
    fn identifier(&mut self, start: usize) {
        while is_identifier_continue(self.peek()) {
            self.advance();
        }

        let text: String = self.chars[start..self.current].iter().collect();
        let kind = if is_keyword(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        let span = Span::new(start, self.current - 1);
        self.tokens.push(Token::new(kind, text, span));
    }

    /// Scans an integer or floating-point numeric literal.
    ///
    /// A `.` followed by a digit promotes the literal to float. A single
    /// trailing type suffix from `fFdDlL` is consumed and retained in
    /// the token text without further validation; the kind is decided by
    /// the decimal point alone, so `123f` stays an integer literal.
    fn number(&mut self, start: usize) {
        while self.peek().is_numeric() {
            self.advance();
        }

        let mut is_float = false;
        if self.peek() == '.' && self.peek_next().is_numeric() {
            is_float = true;
            self.advance(); // consume '.'
            while self.peek().is_numeric() {
                self.advance();
            }
        }

        if matches!(self.peek(), 'f' | 'F' | 'd' | 'D' | 'l' | 'L') {
            self.advance();
        }

        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        self.push_token(kind, start);
    }

    /// Scans a `"` string literal, quotes included in the token text.
    ///
    /// A backslash always consumes and includes the following character
    /// verbatim; no escape-sequence validation happens here. Strings may
    /// span lines.
    ///
    /// # Errors
    /// End of input before the closing quote faults with
    /// "Unclosed string literal" at the literal's start line/position.
    fn string_literal(&mut self, start: usize) -> Result<(), LexError> {
        let line = self.line;

        loop {
            if self.is_at_end() {
                return Err(LexError::unclosed_string(line, start));
            }

            match self.advance() {
                '"' => break,
                '\\' => {
                    // The escaped character is taken verbatim.
                    if !self.is_at_end() && self.advance() == '\n' {
                        self.line += 1;
                    }
                }
                '\n' => self.line += 1,
                _ => {}
            }
        }

        self.push_token(TokenKind::StringLiteral, start);
        Ok(())
    }

    /// Scans a `'` character literal: one optional backslash-prefixed
    /// pair or one raw character, then the mandatory closing quote.
    ///
    /// # Errors
    /// A missing closer faults with "Unclosed character literal". Note
    /// that `''` faults too: the second quote is consumed as the content
    /// character, leaving no closer.
    fn char_literal(&mut self, start: usize) -> Result<(), LexError> {
        let line = self.line;

        if self.peek() == '\\' {
            self.advance();
        }
        if !self.is_at_end() && self.advance() == '\n' {
            self.line += 1;
        }

        if self.peek() != '\'' {
            return Err(LexError::unclosed_char(line, start));
        }
        self.advance(); // closing quote

        self.push_token(TokenKind::CharLiteral, start);
        Ok(())
    }

    /// Scans an operator or punctuation token by greedy longest-prefix:
    /// the sole 3-character operator first, then the 2-character table,
    /// then single characters.
    ///
    /// # Errors
    /// A character matching none of the tables is fatal:
    /// "Unrecognized character" aborts the scan.
    fn operator(&mut self, start: usize, ch: char) -> Result<(), LexError> {
        if ch == '>' && self.peek() == '>' && self.peek_next() == '>' {
            self.advance();
            self.advance();
            self.push_token(TokenKind::UnsignedRightShift, start);
            return Ok(());
        }

        if let Some(kind) = two_char_operator(ch, self.peek()) {
            self.advance();
            self.push_token(kind, start);
            return Ok(());
        }

        if let Some(kind) = single_char_token(ch) {
            self.push_token(kind, start);
            return Ok(());
        }

        Err(LexError::unrecognized(ch, self.line, start))
    }

    /// Emits a token whose text is the exact source slice scanned since
    /// `start`. Keeping the text identical to the slice is what upholds
    /// the span round-trip guarantee.
    fn push_token(&mut self, kind: TokenKind, start: usize) {
        let text: String = self.chars[start..self.current].iter().collect();
        let span = Span::new(start, self.current - 1);
        self.tokens.push(Token::new(kind, text, span));
    }

    /// Advances the cursor by one character and returns it.
    ///
    /// Caller must ensure end of input has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character without consuming it, `'\0'` at
    /// end of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Returns the character after the current one without consuming,
    /// `'\0'` if the lookahead runs past the end.
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

/// Fixed table of the 2-character operators.
const fn two_char_operator(first: char, second: char) -> Option<TokenKind> {
    let kind = match (first, second) {
        ('=', '=') => TokenKind::EqualTo,
        ('!', '=') => TokenKind::NotEqualTo,
        ('>', '=') => TokenKind::GreaterThanOrEqual,
        ('<', '=') => TokenKind::LessThanOrEqual,
        ('&', '&') => TokenKind::LogicalAnd,
        ('|', '|') => TokenKind::LogicalOr,
        ('+', '+') => TokenKind::Increment,
        ('-', '-') => TokenKind::Decrement,
        ('+', '=') => TokenKind::PlusAssign,
        ('-', '=') => TokenKind::MinusAssign,
        ('*', '=') => TokenKind::MultiplyAssign,
        ('/', '=') => TokenKind::DivideAssign,
        ('%', '=') => TokenKind::ModuloAssign,
        ('<', '<') => TokenKind::LeftShift,
        ('>', '>') => TokenKind::RightShift,
        _ => return None,
    };
    Some(kind)
}

/// Fixed table of single-character operators and punctuation.
const fn single_char_token(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '.' => TokenKind::Dot,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Multiply,
        '/' => TokenKind::Divide,
        '%' => TokenKind::Modulo,
        '=' => TokenKind::Assign,
        '<' => TokenKind::LessThan,
        '>' => TokenKind::GreaterThan,
        '!' => TokenKind::LogicalNot,
        '&' => TokenKind::BitwiseAnd,
        '|' => TokenKind::BitwiseOr,
        '^' => TokenKind::BitwiseXor,
        '~' => TokenKind::BitwiseNot,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        ';' => TokenKind::Semicolon,
        ',' => TokenKind::Comma,
        _ => return None,
    };
    Some(kind)
}

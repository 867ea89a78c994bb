/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root for the Glint syntax front end.
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

//! Glint is a two-stage lexical and syntactic front end for a Java-like
//! expression/statement language, built to sit behind editor syntax
//! highlighters.
//!
//! # Pipeline
//! ```text
//! Source → tokenize → Tokens → parse → diagnostics (Vec<String>)
//!                        └────→ highlight groups → colors
//! ```
//!
//! - [`tokenize`] scans source text into offset-annotated tokens in a
//!   single pass, failing fast on the first lexical fault.
//! - [`parse`] checks the token stream against the statement/expression
//!   grammar, accumulating human-readable diagnostics with panic-mode
//!   recovery instead of stopping at the first error.
//! - [`check_balanced_brackets`] independently verifies bracket nesting
//!   over a raw token stream.
//! - [`highlight::HighlightGroup`] and [`lexer::token::TokenCategory`]
//!   let a front end choose display styles from token kinds alone.
//!
//! Both stages are synchronous and stateless across calls; all mutable
//! state is local to one invocation, so independent inputs may be
//! processed concurrently without locking.
//!
//! # Example
//! ```
//! let source = "if (x > 0) { int y = 1; }";
//! let tokens = glint::tokenize(source).unwrap();
//! assert!(glint::check_balanced_brackets(&tokens));
//! assert!(glint::parse(tokens).is_empty());
//! ```

/// Fatal lexical fault type.
pub mod error;

/// Compiler-style rendering of lexical faults.
pub mod diagnostics;

/// Descriptive grammar-rule table (documentation data).
pub mod grammar;

/// Cosmetic kind→group mapping for display styling.
pub mod highlight;

/// The single-pass scanner and token model.
pub mod lexer;

/// The recursive-descent syntax checker.
pub mod parser;

/// Source spans carried by tokens.
pub mod span;

pub use diagnostics::DiagnosticPrinter;
pub use error::{LexError, LexErrorKind};
pub use highlight::HighlightGroup;
pub use lexer::{tokenize, Token, TokenCategory, TokenKind};
pub use parser::{check_balanced_brackets, parse, Parser};
pub use span::Span;

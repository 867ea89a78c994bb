/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the Glint lexer.
 *
 * This module wires together the lexical-analysis sub-modules:
 *   - The scanner itself
 *   - The token model
 *   - The reserved-word tables
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

/// The scanner:
/// - Owns the single-pass scan state
/// - Exposes the `tokenize(source)` entry point
pub mod lexer;

/// Reserved-word and type-name tables.
pub mod keywords;

/// Token model:
/// - `TokenKind` (closed set of lexical categories)
/// - `Token` (kind + text + span)
/// - `TokenCategory` (coarse classification)
pub mod token;

/// Re-export the public entry point so callers can use:
/// `crate::lexer::tokenize(...)`
pub use lexer::tokenize;
pub use token::{Token, TokenCategory, TokenKind};

/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Defines the source span carried by every token produced by
 *            the Glint lexer.
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

use serde::{Deserialize, Serialize};
use std::fmt;

/// The character range a token covers in the original source.
///
/// Both offsets are **character** positions (not byte positions), and the
/// range is **inclusive on both ends**: a token for `int` starting at
/// offset 4 has `start == 4` and `end == 6`.
///
/// # Invariant
/// `end >= start` for every token the lexer produces. The synthetic
/// end-of-input token sits one past the last character, with
/// `start == end == source length`.
///
/// # Why character offsets
/// The editor layer that consumes Glint tokens applies attribute ranges
/// over character positions, so tokens report the same coordinate system
/// the editor paints in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Offset of the first character belonging to the token.
    pub start: usize,

    /// Offset of the last character belonging to the token (inclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..=end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered by this span.
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Inclusive spans always cover at least one character; this exists
    /// so `len` passes the usual `len`/`is_empty` pairing lint.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `offset` falls inside this span.
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      diagnostics.rs
 * Purpose:   Human-friendly rendering of fatal lexical faults.
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

/// Responsible for rendering compiler-style diagnostics for lexical
/// faults.
///
/// This printer:
/// - Formats faults with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact fault position using a caret (`^`)
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file being scanned, kept so individual
    /// lines can be extracted for the report.
    source: String,

    /// Name of the source file, used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    ///
    /// Both parameters accept any type convertible into `String` for
    /// ergonomic call sites.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted fault report to stderr.
    pub fn print(&self, error: &LexError) {
        eprintln!("{}", self.render(error));
    }

    /// Renders the full report as a string.
    ///
    /// # Output Example
    /// ```text
    /// error[L0001]: Unclosed string literal
    ///   --> main.jv:2:5
    ///    |
    ///  2 | x = "abc
    ///    |     ^
    /// ```
    pub fn render(&self, error: &LexError) -> String {
        let line = error.line;
        let column = self.column_of(line, error.position);

        // Lines are 1-indexed in diagnostics.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');

        format!(
            "error[{}]: {}\n  --> {}:{}:{}\n   |\n{:>3} | {}\n   | {}",
            error.kind.code(),
            error.kind,
            self.file_name,
            line,
            column + 1,
            line,
            src_line,
            underline
        )
    }

    /// Converts a whole-source character offset into a 0-based column on
    /// `line` by locating the first character of that line.
    fn column_of(&self, line: usize, position: usize) -> usize {
        let mut seen = 1;
        let mut line_start = 0;

        for (i, ch) in self.source.chars().enumerate() {
            if seen == line {
                line_start = i;
                break;
            }
            if ch == '\n' {
                seen += 1;
                line_start = i + 1;
            }
        }

        position.saturating_sub(line_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_points_at_the_opening_quote() {
        let source = "int x;\ny = \"abc";
        let error = LexError::unclosed_string(2, 11);
        let printer = DiagnosticPrinter::new("main.jv", source);
        let report = printer.render(&error);

        assert!(report.starts_with("error[L0001]: Unclosed string literal"));
        assert!(report.contains("--> main.jv:2:5"));
        assert!(report.contains("  2 | y = \"abc"));
        assert!(report.contains("   |     ^"));
    }

    #[test]
    fn first_line_faults_render_without_offsetting() {
        let source = "@";
        let error = LexError::unrecognized('@', 1, 0);
        let printer = DiagnosticPrinter::new("bad.jv", source);
        let report = printer.render(&error);

        assert!(report.contains("--> bad.jv:1:1"));
        assert!(report.contains("   | ^"));
    }
}

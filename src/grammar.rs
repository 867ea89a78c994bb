/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      grammar.rs
 * Purpose:   Declarative grammar-rule table describing the language the
 *            syntax checker accepts.
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

/// A single production of the documented grammar.
///
/// A left-hand-side nonterminal name plus the ordered right-hand-side
/// symbol names (terminals or nonterminals, as plain strings).
///
/// **Descriptive only.** The table exists as human-readable
/// documentation of the grammar family the recursive-descent checker
/// implements; the checker's control flow never consults it. Built once
/// into a static table, immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarRule {
    /// Left-hand-side symbol, e.g. `expr`, `stmt`.
    pub lhs: &'static str,

    /// Right-hand-side symbols, e.g. `["expr", "+", "term"]`.
    pub rhs: &'static [&'static str],
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs, self.rhs.join(" "))
    }
}

const fn rule(lhs: &'static str, rhs: &'static [&'static str]) -> GrammarRule {
    GrammarRule { lhs, rhs }
}

/// The static rule table.
pub static RULES: &[GrammarRule] = &[
    // Expressions with comparisons
    rule("expr", &["comp"]),
    rule("comp", &["comp", "<", "additive"]),
    rule("comp", &["comp", ">", "additive"]),
    rule("comp", &["comp", "<=", "additive"]),
    rule("comp", &["comp", ">=", "additive"]),
    rule("comp", &["comp", "==", "additive"]),
    rule("comp", &["comp", "!=", "additive"]),
    rule("comp", &["additive"]),
    // Additive expressions
    rule("additive", &["additive", "+", "term"]),
    rule("additive", &["additive", "-", "term"]),
    rule("additive", &["term"]),
    // Terms
    rule("term", &["term", "*", "factor"]),
    rule("term", &["term", "/", "factor"]),
    rule("term", &["factor"]),
    // Factors
    rule("factor", &["(", "expr", ")"]),
    rule("factor", &["IDENTIFIER"]),
    rule("factor", &["INTEGER_LITERAL"]),
    // Statements
    rule("stmt", &["if", "(", "expr", ")", "block"]),
    rule("stmt", &["while", "(", "expr", ")", "block"]),
    rule("stmt", &["for", "(", "stmt", "expr", ";", "expr", ")", "block"]),
    rule("stmt", &["return", "expr", ";"]),
    rule("stmt", &["expr", ";"]),
    rule("stmt", &["block"]),
    // Declarations
    rule("decl", &["type", "IDENTIFIER", ";"]),
    rule("decl", &["type", "IDENTIFIER", "=", "expr", ";"]),
    // Types
    rule("type", &["int"]),
    rule("type", &["float"]),
    rule("type", &["boolean"]),
    rule("type", &["char"]),
    // Blocks
    rule("block", &["{", "stmt_list", "}"]),
    rule("stmt_list", &["stmt_list", "stmt"]),
    rule("stmt_list", &["stmt"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_nonempty_and_displays() {
        assert!(!RULES.is_empty());
        let first = RULES[0].to_string();
        assert_eq!(first, "expr -> comp");
    }

    #[test]
    fn every_rule_has_a_right_hand_side() {
        for rule in RULES {
            assert!(!rule.rhs.is_empty(), "{} has an empty body", rule.lhs);
        }
    }
}

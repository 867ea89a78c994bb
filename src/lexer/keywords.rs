/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines the reserved words and type names of the Java-like
 *            language Glint scans.
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

/// Determines whether a given identifier is a **reserved keyword**.
///
/// Used exclusively by the lexer during tokenization to distinguish
/// user-defined identifiers from language keywords. Every word listed
/// here lexes as `TokenKind::Keyword`.
///
/// Note that `String` is deliberately absent: like in the language this
/// grammar models, it is a library type name, not a reserved word, so it
/// lexes as an identifier. The parser still recognizes it as a
/// declaration-starting type name (see [`is_type_name`]).
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "abstract"
            | "assert"
            | "boolean"
            | "break"
            | "byte"
            | "case"
            | "catch"
            | "char"
            | "class"
            | "const"
            | "continue"
            | "default"
            | "do"
            | "double"
            | "else"
            | "enum"
            | "extends"
            | "final"
            | "finally"
            | "float"
            | "for"
            | "if"
            | "implements"
            | "import"
            | "instanceof"
            | "int"
            | "interface"
            | "long"
            | "native"
            | "new"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "return"
            | "short"
            | "static"
            | "strictfp"
            | "super"
            | "switch"
            | "synchronized"
            | "this"
            | "throw"
            | "throws"
            | "transient"
            | "try"
            | "void"
            | "volatile"
            | "while"
    )
}

/// Determines whether a word names a **declaration-starting type**.
///
/// The parser dispatches a statement beginning with one of these words
/// into the declaration production (`type identifier [= expr] ;`).
pub fn is_type_name(word: &str) -> bool {
    matches!(
        word,
        "int"
            | "float"
            | "boolean"
            | "char"
            | "double"
            | "long"
            | "short"
            | "byte"
            | "void"
            | "String"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_flow_words_are_reserved() {
        for word in ["if", "else", "while", "for", "return"] {
            assert!(is_keyword(word), "{word} should be reserved");
        }
    }

    #[test]
    fn identifiers_are_not_reserved() {
        for word in ["main", "x", "IF", "string", "String", "_tmp"] {
            assert!(!is_keyword(word), "{word} should not be reserved");
        }
    }

    #[test]
    fn type_names_cover_primitives_and_string() {
        for word in ["int", "double", "void", "String"] {
            assert!(is_type_name(word), "{word} should start a declaration");
        }
        assert!(!is_type_name("if"));
        assert!(!is_type_name("string"));
    }
}

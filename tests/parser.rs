//! Integration tests for the Glint syntax checker: accepted programs,
//! fault messages, panic-mode recovery, and the bracket-balance check.

use glint::{check_balanced_brackets, parse, tokenize};

fn errors_for(source: &str) -> Vec<String> {
    parse(tokenize(source).expect("should tokenize"))
}

#[test]
fn empty_input_is_accepted() {
    assert!(errors_for("").is_empty());
}

#[test]
fn simple_declaration_is_accepted() {
    assert!(errors_for("int x = 5;").is_empty());
}

#[test]
fn declaration_without_initializer_is_accepted() {
    assert!(errors_for("double ratio;").is_empty());
}

#[test]
fn string_type_starts_a_declaration() {
    assert!(errors_for("String s;").is_empty());
    assert!(errors_for("String s = t;").is_empty());
}

#[test]
fn control_flow_forms_are_accepted() {
    let source = "\
int total = 0;
while (total < 5) { total++; }
for (int i = 0; i < 10; i++) { total++; }
if (total == 5) return total; else return 0;
";
    assert_eq!(errors_for(source), Vec::<String>::new());
}

#[test]
fn for_clauses_are_all_optional() {
    assert!(errors_for("for (;;) x++;").is_empty());
    assert!(errors_for("for (x + 1;;) x++;").is_empty());
    assert!(errors_for("for (; x < 3;) x++;").is_empty());
}

#[test]
fn return_expression_is_optional() {
    assert!(errors_for("return;").is_empty());
    assert!(errors_for("return x + 1;").is_empty());
}

#[test]
fn nested_blocks_are_accepted() {
    assert!(errors_for("{ { int a; } { a++; } }").is_empty());
}

#[test]
fn dangling_else_binds_to_the_nearest_if() {
    assert!(errors_for("if (a > b) if (b > c) x++; else y--;").is_empty());
}

#[test]
fn unary_operators_are_right_recursive() {
    assert!(errors_for("y + -x;").is_empty());
    assert!(errors_for("!(-x + +y) % 2;").is_empty());
}

#[test]
fn prefix_increment_requires_an_identifier() {
    assert!(errors_for("++x;").is_empty());
    let errors = errors_for("++;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Expected identifier after '++'"));
}

#[test]
fn postfix_increment_is_accepted_once() {
    assert!(errors_for("x++;").is_empty());
    assert!(errors_for("x--;").is_empty());
}

#[test]
fn missing_close_paren_is_reported_and_parsing_terminates() {
    let errors = errors_for("if (x > 0 { y = 1; }");
    assert!(!errors.is_empty());
    assert!(
        errors.iter().any(|e| e.contains("Expected ')'")),
        "{errors:?}"
    );
}

#[test]
fn recovery_reports_each_malformed_statement_independently() {
    let errors = errors_for("x +; y *;");
    assert_eq!(errors.len(), 2, "{errors:?}");
}

#[test]
fn recovery_resumes_cleanly_after_a_fault() {
    // The second statement is valid, so only the first reports.
    let errors = errors_for("x +;   int y = 1;");
    assert_eq!(errors.len(), 1, "{errors:?}");
}

#[test]
fn invalid_statement_keyword_is_reported() {
    let errors = errors_for("class x;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Invalid statement keyword: class"));
}

#[test]
fn assignment_is_not_an_expression_form() {
    let errors = errors_for("x = 5;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Expected ';'"), "{errors:?}");
}

#[test]
fn trailing_tokens_after_the_statement_list_are_reported() {
    let errors = errors_for("x++; } int z = 2;");
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(errors[0].contains("Unexpected token after end of input"));
}

#[test]
fn diagnostics_name_text_kind_and_offset() {
    let errors = errors_for("x +;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Semicolon"), "{errors:?}");
    assert!(errors[0].contains("at position 3"), "{errors:?}");
}

#[test]
fn comment_tokens_are_statement_faults() {
    // The checker itself gives comments no grammar role; drivers that
    // want to ignore them filter the stream first.
    let errors = errors_for("// note\nx++;");
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(errors[0].contains("Unexpected token"));
}

#[test]
fn wildly_malformed_input_still_terminates() {
    let errors = errors_for("; ; } { ) ( >>> int int 5 5.5 'c' while");
    assert!(!errors.is_empty());
}

#[test]
fn brackets_balanced() {
    let tokens = tokenize("(a[b]{c})").expect("should tokenize");
    assert!(check_balanced_brackets(&tokens));
}

#[test]
fn brackets_crossed_nesting_fails() {
    let tokens = tokenize("(a[b)c]").expect("should tokenize");
    assert!(!check_balanced_brackets(&tokens));
}

#[test]
fn lone_closer_fails() {
    let tokens = tokenize(")").expect("should tokenize");
    assert!(!check_balanced_brackets(&tokens));
}

#[test]
fn unclosed_opener_fails() {
    let tokens = tokenize("{ (x) ").expect("should tokenize");
    assert!(!check_balanced_brackets(&tokens));
}

#[test]
fn bracket_check_is_independent_of_parse_recovery() {
    let tokens = tokenize("if (x > 0 { y = 1; }").expect("should tokenize");
    // The parser reports faults, but the raw stream is still analyzed
    // on its own terms: ( { } ) nest incorrectly here.
    assert!(!check_balanced_brackets(&tokens));
    assert!(!parse(tokens).is_empty());
}

/*
 * ==========================================================================
 * GLINT - Syntax with Shine!
 * ==========================================================================
 *
 * File:      main.rs
 * Purpose:   Command-line driver: lexes and checks a source file the way
 *            an editor front end would on each edit, reporting faults to
 *            stderr.
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

use glint::{
    check_balanced_brackets, parse, tokenize, DiagnosticPrinter, Token, TokenCategory,
};
use std::{env, fs, process};

fn main() {
    let mut json = false;
    let mut dump = false;
    let mut path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--tokens" => dump = true,
            _ => path = Some(arg),
        }
    }

    let Some(path) = path else {
        eprintln!("usage: glint [--tokens|--json] <file>");
        process::exit(2);
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("glint: cannot read {path}: {err}");
            process::exit(2);
        }
    };

    // A lexical fault aborts the whole pass, the same way the editor
    // front end skips repainting and keeps the previous highlighting.
    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(fault) => {
            DiagnosticPrinter::new(&path, &source).print(&fault);
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("glint: cannot serialize tokens: {err}");
                process::exit(2);
            }
        }
    } else if dump {
        for token in &tokens {
            println!(
                "{:<20} {:<10} {:?}",
                format!("{:?}", token.kind),
                token.span.to_string(),
                token.text
            );
        }
    }

    // Comment tokens are painted by the front end but carry no grammar
    // role, so the driver filters them before checking.
    let code_tokens: Vec<Token> = tokens
        .iter()
        .filter(|t| t.kind.category() != TokenCategory::Comment)
        .cloned()
        .collect();

    let errors = parse(code_tokens);
    for error in &errors {
        eprintln!("syntax error: {error}");
    }

    if !check_balanced_brackets(&tokens) {
        eprintln!("note: brackets are not balanced");
    }

    process::exit(i32::from(!errors.is_empty()));
}

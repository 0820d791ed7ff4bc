/*
 * ==========================================================================
 * PYCRAFT - Slash Commands, Real Expressions
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the PYCRAFT scripting language project.
 *
 * PYCRAFT is dual-licensed under the terms of:
 *   - The MIT license
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

/// Character scanner:
/// - operators, wrapped numbers, strings
/// - `@` identifiers with a length cap
/// - slash commands and `/say` message capture
pub mod lexer;

/// Reserved command and word tables.
pub mod keywords;

/// Token and keyword definitions shared with the parser.
pub mod token;

#[cfg(test)]
mod tests;

use crate::error::LexError;
use lexer::Lexer;
use token::Token;

/// Scans `source` with the default identifier cap.
///
/// Lexing is best-effort: the token list is always usable (and always
/// ends in `Eof`), and every problem found along the way is returned next
/// to it.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens();
    (lexer.tokens, lexer.errors)
}

/// Scans `source` with a custom identifier cap.
pub fn tokenize_with_limit(source: &str, max_identifier_length: usize) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(source).with_max_identifier_length(max_identifier_length);
    lexer.scan_tokens();
    (lexer.tokens, lexer.errors)
}

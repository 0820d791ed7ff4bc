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

use tracing::debug;

use crate::ast::{Expr, Program};
use crate::error::ParseError;
use crate::lexer::token::{Token, TokenKind};

/// The core PyCraft recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
///
/// The grammar itself lives in extension modules (`statements`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser {
    /// Complete list of tokens to be parsed, always `Eof`-terminated.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,
}

/// Public entry point for the parsing phase.
///
/// # Parameters
/// - `tokens`: The token stream produced by the lexer
///
/// # Returns
/// The whole program, or the first syntax error. There is no recovery:
/// one failure discards the entire unit.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → Program → Interpreter
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}

/// Parses `tokens` as exactly one expression.
///
/// Used for deferred conditions and `{...}` placeholders. Trailing tokens
/// are an error.
pub fn parse_expression(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.expression()?;

    if !parser.is_at_end() {
        return Err(parser.error_at_current("Unexpected tokens after expression."));
    }

    Ok(expr)
}

impl Parser {
    /// Builds a parser, appending an `Eof` marker if the stream lacks one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let needs_eof = tokens.last().map_or(true, |t| t.kind != TokenKind::Eof);

        if needs_eof {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenKind::Eof, "", line));
        }

        Self { tokens, current: 0 }
    }

    /// Parses the entire token stream into a list of top-level statements.
    ///
    /// # Behavior
    /// - Guarantees full token consumption.
    /// - Statements are parsed in strict left-to-right order.
    /// - The first structural error aborts the parse.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.statement()?);
        }

        debug!(statements = statements.len(), "parsed program");

        Ok(Program { statements })
    }
}

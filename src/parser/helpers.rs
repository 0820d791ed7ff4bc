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

use crate::error::ParseError;
use crate::lexer::token::{Keyword, Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Matches a keyword and consumes it if present.
    pub fn match_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Checks for a keyword without consuming it.
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().is_keyword(keyword)
    }

    /// Checks if the current token is the given symbol.
    pub fn check_symbol(&self, symbol: &str) -> bool {
        self.peek().is_symbol(symbol)
    }

    /// Attempts to match a symbolic operator and consume it if present.
    ///
    /// # Example
    /// ```text
    /// if self.match_operator("$$") { ... }
    /// ```
    pub fn match_operator(&mut self, op: &str) -> bool {
        if self.check_symbol(op) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Matches the first operator of `ops` that is present.
    pub fn match_any(&mut self, ops: &[&str]) -> bool {
        ops.iter().any(|op| self.match_operator(op))
    }

    pub fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes a required symbol or fails with `message`.
    pub fn consume_symbol(&mut self, symbol: &str, message: &str) -> Result<Token, ParseError> {
        if self.check_symbol(symbol) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Consumes a required keyword or fails with `message`.
    pub fn consume_keyword(&mut self, keyword: Keyword, message: &str) -> Result<Token, ParseError> {
        if self.check_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Consumes and returns an `@identifier` or fails with `message`.
    pub fn consume_identifier(&mut self, message: &str) -> Result<Token, ParseError> {
        if self.check_kind(TokenKind::Identifier) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Advances one token forward. Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the previously consumed token.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Returns true if the parser is at EOF.
    pub fn is_at_end(&self) -> bool {
        self.tokens[self.current].kind == TokenKind::Eof
    }

    /// Builds a parse error pointing at the current token.
    pub fn error_at_current(&self, message: &str) -> ParseError {
        ParseError::at(self.peek(), message)
    }
}

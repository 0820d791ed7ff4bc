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

use tracing::{debug, warn};

use crate::config::DEFAULT_MAX_IDENTIFIER_LENGTH;
use crate::error::LexError;
use crate::lexer::keywords::{command_keyword, execute_subcommand, word_keyword};
use crate::lexer::token::{Keyword, Literal, Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    max_identifier_length: usize,
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Lexer {
    /// Creates a new PyCraft lexer instance from raw source code.
    ///
    /// # Parameters
    /// - `source`: A UTF-8 encoded PyCraft source string.
    ///
    /// # Returns
    /// A fully initialized `Lexer` with:
    /// - Cursor at position `0`
    /// - Line counter set to `1`
    /// - Empty token and error buffers
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            max_identifier_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Overrides the identifier length cap (`@` included).
    pub fn with_max_identifier_length(mut self, max: usize) -> Self {
        self.max_identifier_length = max;
        self
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Ignores whitespace and `/whisper` comments
    /// - Records problems in `self.errors` and keeps scanning
    /// - Guarantees a terminating `TokenKind::Eof` marker
    ///
    /// # Output
    /// Results are written into `self.tokens` and `self.errors`.
    pub fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(TokenKind::Eof, "", self.line));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "lexed source"
        );
    }

    /// Scans and emits a single token from the source stream.
    ///
    /// Routes to specialized scanners for:
    /// - Wrapped numbers and plain `(`
    /// - Strings
    /// - Numbers
    /// - Identifiers
    /// - Slash commands
    /// - Bare words and word operators
    /// - Operators and punctuation
    fn scan_token(&mut self) {
        let ch = self.advance();

        match ch {
            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '(' => self.open_paren(),

            ')' | '{' | '}' | ',' | '.' | '~' | '^' | '&' | '|' => {
                self.add_symbol(&ch.to_string());
            }

            // A bare colon is text, not punctuation.
            ':' => {
                let token = Token::new(TokenKind::String, ":", self.line)
                    .with_literal(Literal::Text(":".to_string()));
                self.tokens.push(token);
            }

            '+' => {
                let lexeme = if self.match_char('+') {
                    "++"
                } else if self.match_char('=') {
                    "+="
                } else {
                    "+"
                };
                self.add_symbol(lexeme);
            }

            '-' => {
                let lexeme = if self.match_char('-') {
                    "--"
                } else if self.match_char('=') {
                    "-="
                } else {
                    "-"
                };
                self.add_symbol(lexeme);
            }

            '*' => {
                let lexeme = if self.match_char('*') {
                    if self.match_char('=') {
                        "**="
                    } else {
                        "**"
                    }
                } else if self.match_char('=') {
                    "*="
                } else {
                    "*"
                };
                self.add_symbol(lexeme);
            }

            // `$` is true division, `$$` floor division
            '$' => {
                let lexeme = if self.match_char('$') {
                    if self.match_char('=') {
                        "$$="
                    } else {
                        "$$"
                    }
                } else if self.match_char('=') {
                    "$="
                } else {
                    "$"
                };
                self.add_symbol(lexeme);
            }

            '%' => {
                let lexeme = if self.match_char('=') { "%=" } else { "%" };
                self.add_symbol(lexeme);
            }

            '=' => {
                let lexeme = if self.match_char('=') {
                    if self.match_char('=') {
                        "==="
                    } else {
                        "=="
                    }
                } else {
                    "="
                };
                self.add_symbol(lexeme);
            }

            '!' => {
                let lexeme = if self.match_char('=') { "!=" } else { "!" };
                self.add_symbol(lexeme);
            }

            '<' => {
                let lexeme = if self.match_char('<') {
                    "<<"
                } else if self.match_char('=') {
                    "<="
                } else {
                    "<"
                };
                self.add_symbol(lexeme);
            }

            '>' => {
                let lexeme = if self.match_char('>') {
                    ">>"
                } else if self.match_char('=') {
                    ">="
                } else {
                    ">"
                };
                self.add_symbol(lexeme);
            }

            '"' => self.string(),

            '@' => self.identifier(),

            '/' => self.command(),

            c if c.is_ascii_digit() => self.number(),

            c if c.is_ascii_alphabetic() || c == '_' => self.word(),

            other => self.error(format!("Unexpected character '{}'.", other)),
        }
    }

    /// Handles `(`: either a wrapped numeric literal or a grouping paren.
    ///
    /// `(12)` and `(3.5)` become a single `Number` token. Anything else
    /// emits a plain `(` and leaves the cursor right after it.
    fn open_paren(&mut self) {
        let mut end = self.current;

        let digits_start = end;
        while end < self.chars.len() && self.chars[end].is_ascii_digit() {
            end += 1;
        }

        let mut matched = end > digits_start;

        if matched && end < self.chars.len() && self.chars[end] == '.' {
            let fraction_start = end + 1;
            let mut fraction_end = fraction_start;
            while fraction_end < self.chars.len() && self.chars[fraction_end].is_ascii_digit() {
                fraction_end += 1;
            }
            matched = fraction_end > fraction_start;
            end = fraction_end;
        }

        matched = matched && end < self.chars.len() && self.chars[end] == ')';

        if !matched {
            self.add_symbol("(");
            return;
        }

        let digits: String = self.chars[self.current..end].iter().collect();
        self.current = end + 1;

        match digits.parse::<f64>() {
            Ok(value) => {
                let token = Token::new(TokenKind::Number, format!("({})", digits), self.line)
                    .with_literal(Literal::Number(value));
                self.tokens.push(token);
            }
            Err(_) => self.error(format!("Invalid number '({})'.", digits)),
        }
    }

    /// Parses a bare numeric literal such as `42` or `3.14`.
    fn number(&mut self) {
        let start = self.current - 1;

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text: String = self.chars[start..self.current].iter().collect();

        match text.parse::<f64>() {
            Ok(value) => {
                let token = Token::new(TokenKind::Number, text, self.line)
                    .with_literal(Literal::Number(value));
                self.tokens.push(token);
            }
            Err(_) => self.error(format!("Invalid number '{}'.", text)),
        }
    }

    /// Parses a double-quoted string literal.
    ///
    /// Strings may span lines; the token is stamped with the line the
    /// string started on.
    fn string(&mut self) {
        let start = self.current;
        let start_line = self.line;

        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error_at("Unterminated string.", start_line);
            return;
        }

        self.advance(); // closing quote

        let value: String = self.chars[start..self.current - 1].iter().collect();

        let token = Token::new(TokenKind::String, value.clone(), start_line)
            .with_literal(Literal::Text(value));
        self.tokens.push(token);
    }

    /// Parses an `@name` identifier.
    ///
    /// The marker must be followed by a letter, and the whole identifier,
    /// marker included, may not exceed the configured length.
    fn identifier(&mut self) {
        let start = self.current - 1;

        if !self.peek().is_ascii_alphabetic() {
            self.error("Expected a letter after '@'.");
            return;
        }

        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let name: String = self.chars[start..self.current].iter().collect();

        if name.chars().count() > self.max_identifier_length {
            self.error(format!(
                "Identifier '{}' is longer than {} characters.",
                name, self.max_identifier_length
            ));
            return;
        }

        self.tokens.push(Token::new(TokenKind::Identifier, name, self.line));
    }

    /// Parses a bare word: literals, word operators, reserved words or a
    /// plain `Word`.
    fn word(&mut self) {
        let start = self.current - 1;

        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text: String = self.chars[start..self.current].iter().collect();

        let token = match text.as_str() {
            "true" => Token::new(TokenKind::True, text, self.line),
            "false" => Token::new(TokenKind::False, text, self.line),
            "nil" | "null" => Token::new(TokenKind::Nil, text, self.line),

            "not" => {
                let lexeme = if self.match_following_word("in") { "not in" } else { "not" };
                Token::new(TokenKind::Symbol, lexeme, self.line)
            }

            "is" => {
                let lexeme = if self.match_following_word("not") { "is not" } else { "is" };
                Token::new(TokenKind::Symbol, lexeme, self.line)
            }

            "and" | "or" | "in" => Token::new(TokenKind::Symbol, text, self.line),

            _ => match word_keyword(&text) {
                Some(keyword) => Token::new(TokenKind::Keyword(keyword), text, self.line),
                None => Token::new(TokenKind::Word, text, self.line),
            },
        };

        self.tokens.push(token);
    }

    /// Parses a slash command such as `/say` or `/execute while`.
    fn command(&mut self) {
        if !self.peek().is_ascii_alphabetic() {
            self.error("Unexpected character '/'.");
            return;
        }

        let start = self.current;
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }
        let word: String = self.chars[start..self.current].iter().collect();

        if word == "whisper" {
            self.comment();
            return;
        }

        let keyword = match command_keyword(&word) {
            Some(keyword) => keyword,
            None => {
                self.error(format!("Unknown command '/{}'.", word));
                return;
            }
        };

        match keyword {
            Keyword::Execute => {
                let sub = self
                    .peek_following_word()
                    .and_then(|(next, end)| execute_subcommand(&next).map(|k| (k, next, end)));

                match sub {
                    Some((sub_keyword, next, end)) => {
                        self.current = end;
                        let lexeme = format!("/execute {}", next);
                        self.tokens
                            .push(Token::new(TokenKind::Keyword(sub_keyword), lexeme, self.line));
                    }
                    None => {
                        self.tokens
                            .push(Token::new(TokenKind::Keyword(keyword), "/execute", self.line));
                    }
                }
            }

            Keyword::Say => {
                self.tokens
                    .push(Token::new(TokenKind::Keyword(keyword), "/say", self.line));
                self.capture_message();
            }

            _ => {
                let lexeme = format!("/{}", word);
                self.tokens
                    .push(Token::new(TokenKind::Keyword(keyword), lexeme, self.line));
            }
        }
    }

    /// Message-capture mode for `/say`.
    ///
    /// A quoted message is left for the normal string scanner. Otherwise the
    /// rest of the line becomes one text token, whitespace collapsed, ending
    /// early at a `}` that closes a block the message did not open.
    fn capture_message(&mut self) {
        while self.peek() == ' ' || self.peek() == '\t' {
            self.advance();
        }

        if self.peek() == '"' {
            return;
        }

        let start = self.current;
        let mut depth = 0usize;

        while !self.is_at_end() {
            match self.peek() {
                '\n' => break,
                '{' => depth += 1,
                '}' => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }

        let raw: String = self.chars[start..self.current].iter().collect();
        let message = raw.split_whitespace().collect::<Vec<_>>().join(" ");

        let token = Token::new(TokenKind::String, message.clone(), self.line)
            .with_literal(Literal::Text(message));
        self.tokens.push(token);
    }

    /// Skips a `/whisper` comment, quoted or to end of line.
    fn comment(&mut self) {
        while self.peek() == ' ' || self.peek() == '\t' {
            self.advance();
        }

        if self.peek() != '"' {
            while self.peek() != '\n' && !self.is_at_end() {
                self.advance();
            }
            return;
        }

        let start_line = self.line;
        self.advance(); // opening quote

        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error_at("Unterminated comment.", start_line);
            return;
        }

        self.advance(); // closing quote
    }

    /// Looks past horizontal whitespace for the next word.
    ///
    /// Returns the word and the index just after it, without moving the
    /// cursor. At least one space must separate the two words.
    fn peek_following_word(&self) -> Option<(String, usize)> {
        let mut index = self.current;

        while index < self.chars.len() && (self.chars[index] == ' ' || self.chars[index] == '\t') {
            index += 1;
        }

        if index == self.current {
            return None;
        }

        let start = index;
        while index < self.chars.len()
            && (self.chars[index].is_ascii_alphanumeric() || self.chars[index] == '_')
        {
            index += 1;
        }

        if index == start {
            return None;
        }

        Some((self.chars[start..index].iter().collect(), index))
    }

    /// Consumes `expected` as the next word when it is there as a whole
    /// word. Consumes nothing otherwise.
    fn match_following_word(&mut self, expected: &str) -> bool {
        match self.peek_following_word() {
            Some((word, end)) if word == expected => {
                self.current = end;
                true
            }
            _ => false,
        }
    }

    fn add_symbol(&mut self, lexeme: &str) {
        self.tokens.push(Token::new(TokenKind::Symbol, lexeme, self.line));
    }

    fn error(&mut self, message: impl Into<String>) {
        let line = self.line;
        self.error_at(message, line);
    }

    fn error_at(&mut self, message: impl Into<String>, line: usize) {
        let err = LexError::new(message, line);
        warn!(line = err.line, "{}", err.message);
        self.errors.push(err);
    }

    /// Advances the cursor and returns the consumed character.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Conditionally consumes the next character if it matches `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }

        self.current += 1;
        true
    }

    /// Returns the current character without consuming it.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Returns the character after the current one without consuming it.
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

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

//! Error taxonomy for every stage of the PyCraft pipeline.
//!
//! Each stage owns one error struct carrying a stable code, the best line
//! number it knows about, and an optional help note. The crate-wide
//! [`Error`] enum wraps them for the driver.

use thiserror::Error;

use crate::lexer::token::Token;

/// Line used when a failure carries no location at all.
pub const FALLBACK_LINE: usize = 1;

/// A recoverable lexical problem. Scanning continues after one is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    /// Stable error code (`E_LEX`)
    pub code: &'static str,

    /// Human-readable message
    pub message: String,

    /// 1-based source line
    pub line: usize,
}

impl LexError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            code: "E_LEX",
            message: message.into(),
            line,
        }
    }
}

/// A syntax failure. One of these aborts the whole parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Stable error code (`E_PARSE`)
    pub code: &'static str,

    /// Human-readable message
    pub message: String,

    /// Line of the offending token
    pub line: usize,

    /// Source text of the offending token (empty at end of input)
    pub lexeme: String,

    /// Optional note / help text
    pub help: Option<String>,
}

impl ParseError {
    /// Builds a parse error pointing at `token`.
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        Self {
            code: "E_PARSE",
            message: message.into(),
            line: token.line,
            lexeme: token.lexeme.clone(),
            help: None,
        }
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// A failure raised while evaluating a parsed program.
///
/// Runtime errors never share a channel with `return`/`break`/`continue`;
/// those travel as [`crate::interpreter::ExecSignal`] values instead.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    /// Stable error code (`E_RUNTIME`, `E_TYPE`, `E_REFERENCE`)
    pub code: &'static str,

    /// Human-readable message
    pub message: String,

    /// Originating line, when a token was available
    pub line: Option<usize>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl RuntimeError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            code,
            message: message.into(),
            line,
            help: None,
        }
    }

    /// Runtime error (during evaluation)
    pub fn runtime_error(message: impl Into<String>, token: &Token) -> Self {
        Self::new("E_RUNTIME", message, Some(token.line))
    }

    /// Type error (invalid operation / operand types)
    pub fn type_error(message: impl Into<String>, token: &Token) -> Self {
        Self::new("E_TYPE", message, Some(token.line))
    }

    /// Reference error (undefined variable)
    pub fn reference_error(message: impl Into<String>, token: &Token) -> Self {
        Self::new("E_REFERENCE", message, Some(token.line))
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Line used for reporting.
    pub fn report_line(&self) -> usize {
        self.line.unwrap_or(FALLBACK_LINE)
    }
}

/// Every failure the driver can surface, rendered as `[line n] message`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("[line {}] {}", .0.line, .0.message)]
    Lex(LexError),

    #[error("[line {}] Error at '{}': {}", .0.line, .0.lexeme, .0.message)]
    Parse(ParseError),

    #[error("[line {}] {}", .0.report_line(), .0.message)]
    Runtime(RuntimeError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Stable code of the wrapped error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Lex(e) => e.code,
            Error::Parse(e) => e.code,
            Error::Runtime(e) => e.code,
            Error::Config(_) => "E_CONFIG",
        }
    }

    /// Best-known line of the wrapped error.
    pub fn line(&self) -> usize {
        match self {
            Error::Lex(e) => e.line,
            Error::Parse(e) => e.line,
            Error::Runtime(e) => e.report_line(),
            Error::Config(_) => FALLBACK_LINE,
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self {
        Error::Runtime(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

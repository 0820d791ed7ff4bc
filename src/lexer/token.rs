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

use std::fmt;

/// A reserved PyCraft command or word.
///
/// Keywords are classified once by the lexer so the parser can dispatch on
/// the variant instead of on the command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `/say`
    Say,
    /// `/summon`
    Summon,
    /// `/set`
    Set,
    /// `/expr`
    Expr,
    /// `/execute` not followed by a recognised sub-command
    Execute,
    /// `/execute if`
    ExecuteIf,
    /// `/execute elif`
    ExecuteElif,
    /// `/execute else`
    ExecuteElse,
    /// `/execute while`
    ExecuteWhile,
    /// `/execute for`
    ExecuteFor,
    /// `/function`
    Function,
    /// `/return`
    Return,
    /// `/stop` (break)
    Stop,
    /// `/skip` (continue)
    Skip,
    /// `/kill` (terminate the program)
    Kill,
    Run,
    Else,
    Elif,
    Range,
    As,
    From,
    Const,
}

/// Represents the **category of a lexical token** in PyCraft.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal, bare (`42`) or wrapped (`(42)`).
    Number,

    /// Text: a quoted string, a captured `/say` message, or `:`.
    String,

    /// A sigil-prefixed variable name such as `@score`.
    Identifier,

    /// A bare word (`int`, `print`, `hello`).
    ///
    /// Evaluates to the variable of the same name when one exists and to
    /// its own text otherwise.
    Word,

    /// A reserved command or word.
    Keyword(Keyword),

    /// An operator or punctuation, including the word operators
    /// `and`, `or`, `not`, `in`, `is`, `not in` and `is not`.
    Symbol,

    True,
    False,

    /// `nil` or `null`
    Nil,

    /// End-of-file marker, always the final token.
    Eof,
}

/// Parsed value carried by literal tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Text(String),
}

/// Represents a **single lexical token** produced by the PyCraft lexer.
///
/// # Example Tokens
/// ```text
/// /summon  →  { kind: Keyword(Summon), lexeme: "/summon", line: 1 }
/// @x       →  { kind: Identifier,      lexeme: "@x",      line: 1 }
/// (5)      →  { kind: Number,          lexeme: "(5)",     line: 1 }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// For strings this is the content between the quotes.
    pub lexeme: String,

    /// Parsed literal value for numbers and strings.
    pub literal: Option<Literal>,

    /// The 1-based line number where this token appeared.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// True when this is the given operator or punctuation symbol.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme == symbol
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// True for any keyword token.
    pub fn is_any_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }
}

impl fmt::Display for Token {
    /// Prints **only the lexeme** so error messages show what the user wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

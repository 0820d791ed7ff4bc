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

/*!
 * PyCraft Statement Parser
 * ------------------------
 *
 * Every statement starts with a keyword token; the keyword variant picks
 * the parsing routine. Control-statement conditions are captured as raw
 * token spans here and parsed when they are evaluated.
 */

use std::rc::Rc;

use crate::ast::{Branch, Condition, FunctionDecl, Stmt};
use crate::error::ParseError;
use crate::lexer::token::{Keyword, Literal, Token, TokenKind};
use crate::parser::parser::Parser;

/// Operators accepted by `/set`.
const ASSIGNMENT_OPERATORS: [&str; 8] = ["=", "+=", "-=", "*=", "$=", "$$=", "%=", "**="];

impl Parser {
    /// Dispatches on the leading keyword of a statement.
    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        let token = self.peek().clone();

        let keyword = match token.kind {
            TokenKind::Keyword(keyword) => keyword,
            _ => return Err(self.error_at_current("Expected a command.")),
        };

        self.advance();

        match keyword {
            Keyword::Say => self.say_statement(token),
            Keyword::Summon => self.summon_statement(),
            Keyword::Set => self.set_statement(),
            Keyword::Expr => self.expr_statement(),
            Keyword::Function => self.function_statement(),
            Keyword::Return => self.return_statement(token),
            Keyword::ExecuteIf => self.if_statement(),
            Keyword::ExecuteWhile => self.while_statement(),
            Keyword::ExecuteFor => self.for_statement(),
            Keyword::Stop => Ok(Stmt::Break(token)),
            Keyword::Skip => Ok(Stmt::Continue(token)),
            Keyword::Kill => Ok(Stmt::Terminate(token)),

            Keyword::Execute => Err(ParseError::at(
                &token,
                "Expected 'if', 'while' or 'for' after '/execute'.",
            )),

            Keyword::ExecuteElif | Keyword::ExecuteElse | Keyword::Elif | Keyword::Else => {
                Err(ParseError::at(
                    &token,
                    format!("'{}' without a preceding '/execute if'.", token.lexeme),
                ))
            }

            Keyword::Run | Keyword::Range | Keyword::As | Keyword::From | Keyword::Const => {
                Err(ParseError::at(&token, format!("Unexpected '{}'.", token.lexeme)))
            }
        }
    }

    /* ------------------------------------------------------------------
     * Output
     * ---------------------------------------------------------------- */

    /// `/say <message>`
    ///
    /// Anything left on the `/say` line after the message is dropped, up to
    /// a `}` that closes an enclosing block.
    fn say_statement(&mut self, keyword: Token) -> Result<Stmt, ParseError> {
        if !self.check_kind(TokenKind::String) {
            return Err(self.error_at_current("Expected a message after '/say'."));
        }

        let message_token = self.advance();
        let message = match message_token.literal {
            Some(Literal::Text(text)) => text,
            _ => message_token.lexeme,
        };

        let mut depth = 0usize;
        while !self.is_at_end() && self.peek().line == keyword.line {
            if self.check_symbol("{") {
                depth += 1;
            } else if self.check_symbol("}") {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            self.advance();
        }

        Ok(Stmt::Say { keyword, message })
    }

    /* ------------------------------------------------------------------
     * Variables
     * ---------------------------------------------------------------- */

    /// `/summon <type> @name [initializer]`
    fn summon_statement(&mut self) -> Result<Stmt, ParseError> {
        if !(self.check_kind(TokenKind::Word) || self.check_kind(TokenKind::String)) {
            return Err(self
                .error_at_current("Expected a type after '/summon'.")
                .with_help("Try '/summon int @name (0)'."));
        }
        let type_name = self.advance();

        let name = self.consume_identifier("Expected a variable name.")?;

        let initializer = if self.continues_line(name.line) {
            Some(self.expression()?)
        } else {
            None
        };

        Ok(Stmt::Summon {
            type_name,
            name,
            initializer,
        })
    }

    /// `/set @name <op> <expr>`; the expression may be wrapped in braces.
    fn set_statement(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume_identifier("Expected a variable name.")?;

        if !self.match_any(&ASSIGNMENT_OPERATORS) {
            return Err(self.error_at_current("Expected an assignment operator after variable."));
        }
        let operator = self.previous().clone();

        let value = if self.match_operator("{") {
            let value = self.expression()?;
            self.consume_symbol("}", "Expected '}' after expression.")?;
            value
        } else {
            self.expression()?
        };

        Ok(Stmt::Set {
            name,
            operator,
            value,
        })
    }

    /// `/expr @name { <expr> }`
    fn expr_statement(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume_identifier("Expected a variable name.")?;

        self.consume_symbol("{", "Expected '{' before expression.")?;
        let value = self.expression()?;
        self.consume_symbol("}", "Expected '}' after expression.")?;

        Ok(Stmt::ExprAssign { name, value })
    }

    /* ------------------------------------------------------------------
     * Functions
     * ---------------------------------------------------------------- */

    /// `/function name (@a, @b) [run] { body }`
    fn function_statement(&mut self) -> Result<Stmt, ParseError> {
        if !(self.check_kind(TokenKind::Word) || self.check_kind(TokenKind::Identifier)) {
            return Err(self.error_at_current("Expected a function name."));
        }
        let name = self.advance();

        self.consume_symbol("(", "Expected '(' after function name.")?;

        let mut params = Vec::new();
        if !self.check_symbol(")") {
            loop {
                params.push(self.consume_identifier("Expected parameter name.")?);
                if !self.match_operator(",") {
                    break;
                }
            }
        }

        self.consume_symbol(")", "Expected ')' after parameters.")?;
        self.match_keyword(Keyword::Run);

        let body = self.block("Expected '{' before function body.")?;

        Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body })))
    }

    /// `/return [expr]`; a value only counts when it starts on the same line.
    fn return_statement(&mut self, keyword: Token) -> Result<Stmt, ParseError> {
        let value = if self.continues_line(keyword.line) {
            Some(self.expression()?)
        } else {
            None
        };

        Ok(Stmt::Return { keyword, value })
    }

    /* ------------------------------------------------------------------
     * Control flow
     * ---------------------------------------------------------------- */

    /// `/execute if <cond> run { } [elif <cond> run { }]* [else [run] { }]`
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        let branch = self.guarded_branch()?;

        let mut elifs = Vec::new();
        while self.match_keyword(Keyword::Elif) || self.match_keyword(Keyword::ExecuteElif) {
            elifs.push(self.guarded_branch()?);
        }

        let else_body = if self.match_keyword(Keyword::Else) || self.match_keyword(Keyword::ExecuteElse) {
            self.match_keyword(Keyword::Run);
            Some(self.block("Expected '{' to start else block.")?)
        } else {
            None
        };

        Ok(Stmt::If {
            branch,
            elifs,
            else_body,
        })
    }

    /// `/execute while <cond> run { }`
    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        let Branch { condition, body } = self.guarded_branch()?;
        Ok(Stmt::While { condition, body })
    }

    /// `/execute for @var in [range] <expr> run { }`
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        let variable = self.consume_identifier("Expected loop variable after '/execute for'.")?;
        self.consume_symbol("in", "Expected 'in' after loop variable.")?;

        let range = if self.match_keyword(Keyword::Range) {
            Some(self.previous().clone())
        } else {
            None
        };

        let source = self.expression()?;

        self.consume_keyword(Keyword::Run, "Expected 'run' after loop source.")?;
        let body = self.block("Expected '{' to start run block.")?;

        Ok(Stmt::For {
            variable,
            range,
            source,
            body,
        })
    }

    /// A raw condition, the `run` keyword, then a block.
    fn guarded_branch(&mut self) -> Result<Branch, ParseError> {
        let line = self.previous().line;
        let mut tokens = Vec::new();

        while !self.check_keyword(Keyword::Run) {
            if self.is_at_end() {
                return Err(self.error_at_current("Expected 'run' after condition."));
            }
            tokens.push(self.advance());
        }

        if tokens.is_empty() {
            return Err(self.error_at_current("Expected a condition before 'run'."));
        }

        self.advance(); // run

        let body = self.block("Expected '{' to start run block.")?;

        Ok(Branch {
            condition: Condition { tokens, line },
            body,
        })
    }

    /// `{ statement* }`
    pub(crate) fn block(&mut self, open_message: &str) -> Result<Vec<Stmt>, ParseError> {
        self.consume_symbol("{", open_message)?;

        let mut statements = Vec::new();
        while !self.check_symbol("}") && !self.is_at_end() {
            statements.push(self.statement()?);
        }

        self.consume_symbol("}", "Expected '}' after block.")?;
        Ok(statements)
    }

    /// Whether an optional trailing expression starts here on `line`.
    fn continues_line(&self, line: usize) -> bool {
        !self.is_at_end()
            && self.peek().line == line
            && !self.check_symbol("}")
            && !self.peek().is_any_keyword()
    }
}

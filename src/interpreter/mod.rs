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

/// Statement execution and the `ExecSignal` control channel.
pub mod statements;

/// Expression evaluation.
pub mod expressions;

/// Function invocation, arity checks and call-depth limits.
pub mod calls;

/// `{...}` placeholder expansion for `/say`.
pub mod display;

/// Lexical scopes.
pub mod environment;

/// Operator semantics shared by infix expressions and `/set`.
pub mod helpers;

/// Host functions installed in every root scope.
pub mod natives;

/// Line-oriented output sink.
pub mod output;

#[cfg(test)]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::ast::Program;
use crate::config::Config;
use crate::diagnostics::DiagnosticPrinter;
use crate::error::{Error, LexError, RuntimeError};
use crate::lexer::tokenize_with_limit;
use crate::parser::{parse, parse_expression};
use crate::value::Value;

use environment::Environment;
use output::OutputHandler;

pub use statements::ExecSignal;

/// How a unit of source finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every top-level statement ran, or a stray `/stop`, `/skip` or
    /// `/return` ended the unit early.
    Completed,

    /// `/kill` ran; the driver should stop feeding input.
    Terminated,
}

/// Result of a successful [`Interpreter::run_source`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub status: RunStatus,

    /// Non-fatal lexical problems found while scanning the unit.
    pub lex_errors: Vec<LexError>,
}

/// The PyCraft tree-walking interpreter.
///
/// One instance keeps a single root scope alive across calls to
/// [`Interpreter::run_source`], so feeding it line after line behaves like
/// an interactive session.
pub struct Interpreter {
    globals: Rc<RefCell<Environment>>,
    output: OutputHandler,
    config: Config,

    /// Active user-function frames.
    call_depth: usize,

    /// Set when `/kill` ran inside a function call, where the signal cannot
    /// travel through the expression result.
    halt_requested: bool,
}

impl Interpreter {
    /// Creates an interpreter whose root scope holds the native functions.
    pub fn new(config: Config, output: OutputHandler) -> Self {
        let globals = Environment::root();
        natives::install(&globals);

        Self {
            globals,
            output,
            config,
            call_depth: 0,
            halt_requested: false,
        }
    }

    /// Lexes, parses and executes one unit of source.
    ///
    /// # Behavior
    /// - Lexical problems are reported and the recovered tokens are still
    ///   parsed
    /// - A parse error aborts the unit before anything runs
    /// - A runtime error aborts the rest of the unit; bindings made before
    ///   it stay in the root scope
    ///
    /// Every failure is also written to the output sink as
    /// `[line n] message` when `echo_errors` is on.
    pub fn run_source(&mut self, source: &str) -> Result<RunReport, Error> {
        let (tokens, lex_errors) = tokenize_with_limit(source, self.config.max_identifier_length);

        for err in &lex_errors {
            self.report(&Error::Lex(err.clone()));
        }

        let program = match parse(tokens) {
            Ok(program) => program,
            Err(err) => return Err(self.fail(Error::Parse(err))),
        };

        let status = match self.execute_program(&program) {
            Ok(status) => status,
            Err(err) => return Err(self.fail(Error::Runtime(err))),
        };

        Ok(RunReport { status, lex_errors })
    }

    /// Runs an already-parsed program in the root scope.
    pub fn execute_program(&mut self, program: &Program) -> Result<RunStatus, RuntimeError> {
        self.call_depth = 0;
        self.halt_requested = false;

        let globals = self.globals.clone();

        for stmt in &program.statements {
            let signal = self.exec_stmt(stmt, &globals)?;

            if self.take_halt() {
                return Ok(RunStatus::Terminated);
            }

            match signal {
                ExecSignal::None => {}
                ExecSignal::Terminate => return Ok(RunStatus::Terminated),
                ExecSignal::Return(_) | ExecSignal::Break | ExecSignal::Continue => {
                    debug!("control signal outside its boundary ended the unit");
                    return Ok(RunStatus::Completed);
                }
            }
        }

        Ok(RunStatus::Completed)
    }

    /// Evaluates `source` as a single expression in the root scope.
    pub fn evaluate_source_expression(&mut self, source: &str) -> Result<Value, Error> {
        let globals = self.globals.clone();
        self.evaluate_in(source, &globals)
    }

    /// Lex, parse and evaluate one expression against `env`.
    pub(crate) fn evaluate_in(
        &mut self,
        source: &str,
        env: &Rc<RefCell<Environment>>,
    ) -> Result<Value, Error> {
        let (tokens, lex_errors) = tokenize_with_limit(source, self.config.max_identifier_length);

        if let Some(err) = lex_errors.into_iter().next() {
            return Err(Error::Lex(err));
        }

        let expr = parse_expression(tokens)?;
        Ok(self.eval_expr(&expr, env)?)
    }

    /// Clears a pending `/kill` and reports whether there was one.
    pub(crate) fn take_halt(&mut self) -> bool {
        std::mem::replace(&mut self.halt_requested, false)
    }

    fn report(&self, err: &Error) {
        debug!(code = err.code(), line = err.line(), "reporting error");

        if self.config.echo_errors {
            self.output.write_line(&DiagnosticPrinter::report(err));
        }
    }

    fn fail(&mut self, err: Error) -> Error {
        self.call_depth = 0;
        self.halt_requested = false;
        self.report(&err);
        err
    }
}

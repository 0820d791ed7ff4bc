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
 * PyCraft Statement Executor
 * --------------------------
 *
 * Executes top-level and block-level statements. Expression evaluation
 * lives in `expressions.rs` and function invocation in `calls.rs`.
 *
 * Two channels leave every executor:
 *
 *  • `Ok(ExecSignal)`: normal completion or a non-local transfer
 *    (`/return`, `/stop`, `/skip`, `/kill`)
 *  • `Err(RuntimeError)`: a failure that aborts the current unit
 */

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::ast::{Condition, Expr, Stmt};
use crate::error::RuntimeError;
use crate::interpreter::environment::Environment;
use crate::interpreter::Interpreter;
use crate::lexer::token::Token;
use crate::parser::parse_expression;
use crate::value::{Callable, Value};

/* ============================================================================
 * Execution Control Signals
 * ============================================================================
 */

/// Internal control flow signal used by the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecSignal {
    /// Normal fall-through execution.
    None,

    /// `/return`, caught by the nearest function call.
    Return(Value),

    /// `/stop`, caught by the nearest loop.
    Break,

    /// `/skip`, caught by the nearest loop.
    Continue,

    /// `/kill`, caught only by the driver.
    Terminate,
}

/// What a loop does after one pass over its body.
enum LoopStep {
    Next,
    Exit,
    Propagate(ExecSignal),
}

impl From<ExecSignal> for LoopStep {
    fn from(signal: ExecSignal) -> Self {
        match signal {
            ExecSignal::None | ExecSignal::Continue => LoopStep::Next,
            ExecSignal::Break => LoopStep::Exit,
            other => LoopStep::Propagate(other),
        }
    }
}

impl Interpreter {
    /* ============================================================================
     * Statement Execution Entry Point
     * ============================================================================
     */

    /// Executes a single statement inside the given environment.
    ///
    /// This is the **core dispatch function for all statement execution**.
    pub fn exec_stmt(
        &mut self,
        stmt: &Stmt,
        env: &Rc<RefCell<Environment>>,
    ) -> Result<ExecSignal, RuntimeError> {
        match stmt {
            /* ------------------------------------------------------------------
             * Output
             * ---------------------------------------------------------------- */
            Stmt::Say { message, .. } => {
                let text = if self.config.interpolate_output {
                    self.interpolate(message, env)
                } else {
                    message.clone()
                };

                self.output.write_line(&text);
                Ok(ExecSignal::None)
            }

            /* ------------------------------------------------------------------
             * Variables
             * ---------------------------------------------------------------- */
            Stmt::Summon {
                type_name,
                name,
                initializer,
            } => {
                let value = match initializer {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::default_for_type(&type_name.lexeme),
                };

                env.borrow_mut().define(name.lexeme.clone(), value);
                Ok(ExecSignal::None)
            }

            Stmt::Set {
                name,
                operator,
                value,
            } => {
                let rhs = self.eval_expr(value, env)?;

                let new_value = match operator.lexeme.strip_suffix('=') {
                    Some(op) if !op.is_empty() => {
                        let current = self.lookup_variable(name, env)?;
                        self.binary_op(op, current, rhs, operator)?
                    }
                    _ => rhs,
                };

                self.assign_variable(name, new_value, env)?;
                Ok(ExecSignal::None)
            }

            Stmt::ExprAssign { name, value } => {
                let value = self.eval_expr(value, env)?;
                self.assign_variable(name, value, env)?;
                Ok(ExecSignal::None)
            }

            /* ------------------------------------------------------------------
             * Functions
             * ---------------------------------------------------------------- */
            Stmt::Function(decl) => {
                let function = Value::Function(Rc::new(Callable::User {
                    decl: decl.clone(),
                    closure: env.clone(),
                }));

                env.borrow_mut().define(decl.name.lexeme.clone(), function);
                Ok(ExecSignal::None)
            }

            Stmt::Return { value, .. } => {
                let result = match value {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::Null,
                };
                Ok(ExecSignal::Return(result))
            }

            /* ------------------------------------------------------------------
             * Control Flow
             * ---------------------------------------------------------------- */
            Stmt::If {
                branch,
                elifs,
                else_body,
            } => {
                for arm in std::iter::once(branch).chain(elifs.iter()) {
                    let holds = self.condition_holds(&arm.condition, env)?;

                    if self.halt_requested {
                        return Ok(ExecSignal::Terminate);
                    }

                    if holds {
                        return self.exec_block(&arm.body, &Environment::child(env));
                    }
                }

                match else_body {
                    Some(body) => self.exec_block(body, &Environment::child(env)),
                    None => Ok(ExecSignal::None),
                }
            }

            Stmt::While { condition, body } => {
                let mut iterations = 0usize;

                loop {
                    let holds = self.condition_holds(condition, env)?;

                    if self.halt_requested {
                        return Ok(ExecSignal::Terminate);
                    }

                    if !holds {
                        break;
                    }

                    iterations += 1;

                    match LoopStep::from(self.exec_block(body, &Environment::child(env))?) {
                        LoopStep::Next => {}
                        LoopStep::Exit => break,
                        LoopStep::Propagate(signal) => return Ok(signal),
                    }
                }

                trace!(iterations, line = condition.line, "while loop finished");
                Ok(ExecSignal::None)
            }

            Stmt::For {
                variable,
                range,
                source,
                body,
            } => self.exec_for(variable, range.as_ref(), source, body, env),

            Stmt::Break(_) => Ok(ExecSignal::Break),
            Stmt::Continue(_) => Ok(ExecSignal::Continue),
            Stmt::Terminate(_) => Ok(ExecSignal::Terminate),
        }
    }

    /// Runs `statements` directly in `env`, stopping at the first signal.
    pub fn exec_block(
        &mut self,
        statements: &[Stmt],
        env: &Rc<RefCell<Environment>>,
    ) -> Result<ExecSignal, RuntimeError> {
        for stmt in statements {
            let signal = self.exec_stmt(stmt, env)?;

            if self.halt_requested {
                return Ok(ExecSignal::Terminate);
            }

            if signal != ExecSignal::None {
                return Ok(signal);
            }
        }

        Ok(ExecSignal::None)
    }

    /// `/execute for`: a counted range or the elements of a value.
    fn exec_for(
        &mut self,
        variable: &Token,
        range: Option<&Token>,
        source: &Expr,
        body: &[Stmt],
        env: &Rc<RefCell<Environment>>,
    ) -> Result<ExecSignal, RuntimeError> {
        let value = self.eval_expr(source, env)?;

        let items: Box<dyn Iterator<Item = Value>> = match range {
            Some(range_token) => {
                let bound = value.to_int().ok_or_else(|| {
                    RuntimeError::type_error(
                        format!("Range bound must be a number, got {}.", value.type_name()),
                        range_token,
                    )
                })?;
                Box::new((0..bound.max(0)).map(|i| Value::Number(i as f64)))
            }

            None => match value {
                Value::String(text) => {
                    let chars: Vec<char> = text.chars().collect();
                    Box::new(chars.into_iter().map(|c| Value::String(c.to_string())))
                }
                Value::Number(n) => {
                    let bound = (n.trunc() as i64).max(0);
                    Box::new((0..bound).map(|i| Value::Number(i as f64)))
                }
                Value::Null => Box::new(std::iter::empty()),
                other => {
                    return Err(RuntimeError::type_error(
                        format!("Cannot iterate over a {}.", other.type_name()),
                        variable,
                    ))
                }
            },
        };

        let mut iterations = 0usize;

        for item in items {
            if self.halt_requested {
                return Ok(ExecSignal::Terminate);
            }

            let scope = Environment::child(env);
            scope.borrow_mut().define(variable.lexeme.clone(), item);
            iterations += 1;

            match LoopStep::from(self.exec_block(body, &scope)?) {
                LoopStep::Next => {}
                LoopStep::Exit => break,
                LoopStep::Propagate(signal) => return Ok(signal),
            }
        }

        trace!(iterations, line = variable.line, "for loop finished");
        Ok(ExecSignal::None)
    }

    /// Parses a stored condition and tests its truthiness.
    ///
    /// Conditions are parsed here, on every check, so a malformed one only
    /// fails when it is reached.
    fn condition_holds(
        &mut self,
        condition: &Condition,
        env: &Rc<RefCell<Environment>>,
    ) -> Result<bool, RuntimeError> {
        trace!(line = condition.line, "parsing deferred condition");

        let expr = parse_expression(condition.tokens.clone()).map_err(|err| {
            RuntimeError::new(
                "E_RUNTIME",
                format!("Error at '{}': {}", err.lexeme, err.message),
                Some(err.line),
            )
        })?;

        Ok(self.eval_expr(&expr, env)?.is_truthy())
    }

    /// Reads a variable or fails with an undefined-variable error.
    pub(crate) fn lookup_variable(
        &self,
        name: &Token,
        env: &Rc<RefCell<Environment>>,
    ) -> Result<Value, RuntimeError> {
        env.borrow().get(&name.lexeme).ok_or_else(|| {
            RuntimeError::reference_error(format!("Undefined variable '{}'.", name.lexeme), name)
        })
    }

    /// Rebinds an existing variable or fails with an undefined-variable
    /// error.
    pub(crate) fn assign_variable(
        &self,
        name: &Token,
        value: Value,
        env: &Rc<RefCell<Environment>>,
    ) -> Result<(), RuntimeError> {
        if env.borrow_mut().assign(&name.lexeme, value) {
            Ok(())
        } else {
            Err(RuntimeError::reference_error(
                format!("Undefined variable '{}'.", name.lexeme),
                name,
            )
            .with_help(format!("Declare it first with '/summon <type> {}'.", name.lexeme)))
        }
    }
}

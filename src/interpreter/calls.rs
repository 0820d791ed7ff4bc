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

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::ast::FunctionDecl;
use crate::error::RuntimeError;
use crate::interpreter::environment::Environment;
use crate::interpreter::{ExecSignal, Interpreter};
use crate::lexer::token::Token;
use crate::value::{Callable, Value};

/// Remaining native stack below which a call grows the stack first.
const RED_ZONE: usize = 128 * 1024;

/// Size of each stack extension.
const STACK_PER_CALL: usize = 1024 * 1024;

impl Interpreter {
    /// Invokes an evaluated callee with evaluated arguments.
    ///
    /// # Errors
    /// - `Can only call functions.` when the callee is not callable
    /// - `Expected N arguments but got M.` before anything runs
    /// - `Stack overflow.` past the configured call depth
    pub fn call_value(
        &mut self,
        callee: Value,
        args: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, RuntimeError> {
        let callable = match callee {
            Value::Function(callable) => callable,
            other => {
                return Err(RuntimeError::type_error("Can only call functions.", paren)
                    .with_help(format!("The callee evaluated to a {}.", other.type_name())))
            }
        };

        if args.len() != callable.arity() {
            return Err(RuntimeError::runtime_error(
                format!(
                    "Expected {} arguments but got {}.",
                    callable.arity(),
                    args.len()
                ),
                paren,
            ));
        }

        match &*callable {
            Callable::Native { func, .. } => Ok(func(&self.output, &args)),
            Callable::User { decl, closure } => self.call_user(decl, closure, args, paren),
        }
    }

    /// Runs a user function body in a child of its closure, not of the
    /// caller's scope.
    fn call_user(
        &mut self,
        decl: &Rc<FunctionDecl>,
        closure: &Rc<RefCell<Environment>>,
        args: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, RuntimeError> {
        if self.call_depth >= self.config.max_call_depth {
            return Err(RuntimeError::runtime_error("Stack overflow.", paren).with_help(format!(
                "Calls may nest at most {} deep.",
                self.config.max_call_depth
            )));
        }

        let scope = Environment::child(closure);
        for (param, arg) in decl.params.iter().zip(args) {
            scope.borrow_mut().define(param.lexeme.clone(), arg);
        }

        self.call_depth += 1;
        debug!(
            name = %decl.name.lexeme,
            arity = decl.params.len(),
            depth = self.call_depth,
            "calling function"
        );

        let result = stacker::maybe_grow(RED_ZONE, STACK_PER_CALL, || {
            self.exec_block(&decl.body, &scope)
        });
        self.call_depth -= 1;

        match result? {
            ExecSignal::Return(value) => Ok(value),
            ExecSignal::Terminate => {
                self.halt_requested = true;
                Ok(Value::Null)
            }
            // A loop signal with no loop around it just ends the body.
            ExecSignal::None | ExecSignal::Break | ExecSignal::Continue => Ok(Value::Null),
        }
    }
}

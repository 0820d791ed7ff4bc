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

use crate::ast::Expr;
use crate::error::RuntimeError;
use crate::interpreter::environment::Environment;
use crate::interpreter::Interpreter;
use crate::lexer::token::{Literal, Token, TokenKind};
use crate::value::Value;

impl Interpreter {
    /// Evaluates an expression to a value.
    pub fn eval_expr(
        &mut self,
        expr: &Expr,
        env: &Rc<RefCell<Environment>>,
    ) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(token) => self.eval_literal(token, env),

            Expr::Grouping(inner) => self.eval_expr(inner, env),

            Expr::Unary { operator, right } => {
                let value = self.eval_expr(right, env)?;
                self.unary_op(operator, value)
            }

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left_value = self.eval_expr(left, env)?;

                // and / or short-circuit and yield an operand, not a bool
                match operator.lexeme.as_str() {
                    "and" if !left_value.is_truthy() => return Ok(left_value),
                    "and" => return self.eval_expr(right, env),
                    "or" if left_value.is_truthy() => return Ok(left_value),
                    "or" => return self.eval_expr(right, env),
                    _ => {}
                }

                let right_value = self.eval_expr(right, env)?;
                self.binary_op(&operator.lexeme, left_value, right_value, operator)
            }

            Expr::Postfix { operand, operator } => self.eval_postfix(operand, operator, env),

            Expr::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee_value = self.eval_expr(callee, env)?;

                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.eval_expr(argument, env)?);
                }

                self.call_value(callee_value, args, paren)
            }
        }
    }

    fn eval_literal(
        &mut self,
        token: &Token,
        env: &Rc<RefCell<Environment>>,
    ) -> Result<Value, RuntimeError> {
        match token.kind {
            TokenKind::Number => match &token.literal {
                Some(Literal::Number(n)) => Ok(Value::Number(*n)),
                _ => Err(RuntimeError::runtime_error(
                    format!("Invalid number '{}'.", token.lexeme),
                    token,
                )),
            },

            TokenKind::String => Ok(Value::String(match &token.literal {
                Some(Literal::Text(text)) => text.clone(),
                _ => token.lexeme.clone(),
            })),

            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Nil => Ok(Value::Null),

            TokenKind::Identifier => self.lookup_variable(token, env),

            // A bare word names a binding when one exists, else it is text.
            TokenKind::Word => Ok(env
                .borrow()
                .get(&token.lexeme)
                .unwrap_or_else(|| Value::String(token.lexeme.clone()))),

            TokenKind::Keyword(_) | TokenKind::Symbol | TokenKind::Eof => Err(
                RuntimeError::runtime_error(format!("Unexpected token '{}'.", token.lexeme), token),
            ),
        }
    }

    /// `@x++` / `@x--`: writes back the stepped value, yields the old one.
    fn eval_postfix(
        &mut self,
        operand: &Expr,
        operator: &Token,
        env: &Rc<RefCell<Environment>>,
    ) -> Result<Value, RuntimeError> {
        let name = match operand {
            Expr::Literal(token) if token.kind == TokenKind::Identifier => token,
            _ => {
                return Err(RuntimeError::runtime_error(
                    format!("Operand of '{}' must be a variable.", operator.lexeme),
                    operator,
                ))
            }
        };

        let current = match self.lookup_variable(name, env)? {
            Value::Number(n) => n,
            other => {
                return Err(RuntimeError::type_error(
                    format!(
                        "Operand of '{}' must hold a number, got {}.",
                        operator.lexeme,
                        other.type_name()
                    ),
                    operator,
                ))
            }
        };

        let step = if operator.lexeme == "++" { 1.0 } else { -1.0 };
        self.assign_variable(name, Value::Number(current + step), env)?;

        Ok(Value::Number(current))
    }
}

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

//! Operator semantics.
//!
//! Infix expressions and the compound forms of `/set` both land in
//! [`Interpreter::binary_op`], so `/set @x += 3` and `@x + 3` can never
//! disagree. All conversions go through the coercions on [`Value`].

use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::lexer::token::Token;
use crate::value::Value;

impl Interpreter {
    /// Applies a prefix operator to an evaluated operand.
    pub(crate) fn unary_op(&self, operator: &Token, value: Value) -> Result<Value, RuntimeError> {
        match operator.lexeme.as_str() {
            "-" => Ok(Value::Number(-number_operand(&value, operator)?)),
            "+" => Ok(Value::Number(number_operand(&value, operator)?)),
            "~" => Ok(Value::Number(!int_operand(&value, operator)? as f64)),
            "!" | "not" => Ok(Value::Bool(!value.is_truthy())),
            other => Err(RuntimeError::runtime_error(
                format!("Unknown unary operator '{}'.", other),
                operator,
            )),
        }
    }

    /// Applies an infix operator to two evaluated operands.
    ///
    /// `and`/`or` never get here; they short-circuit in the evaluator.
    pub(crate) fn binary_op(
        &self,
        op: &str,
        left: Value,
        right: Value,
        token: &Token,
    ) -> Result<Value, RuntimeError> {
        match op {
            "+" => {
                if left.is_additive_number() && right.is_additive_number() {
                    let (a, b) = number_operands(op, &left, &right, token)?;
                    Ok(Value::Number(a + b))
                } else {
                    Ok(Value::String(format!("{}{}", left, right)))
                }
            }

            "-" | "*" | "%" | "**" | "$" | "$$" => {
                let (a, b) = number_operands(op, &left, &right, token)?;

                let result = match op {
                    "-" => a - b,
                    "*" => a * b,
                    "%" => a % b,
                    "**" => a.powf(b),
                    _ => {
                        if b == 0.0 {
                            return Err(RuntimeError::runtime_error("Division by zero.", token));
                        }
                        if op == "$$" {
                            (a / b).floor()
                        } else {
                            a / b
                        }
                    }
                };

                Ok(Value::Number(result))
            }

            "<<" | ">>" | "&" | "|" | "^" => {
                let a = int_operand(&left, token)?;
                let b = int_operand(&right, token)?;

                let result = match op {
                    "&" => a & b,
                    "|" => a | b,
                    "^" => a ^ b,
                    _ => {
                        if !(0..64).contains(&b) {
                            return Err(RuntimeError::runtime_error(
                                format!("Shift amount {} is out of range.", b),
                                token,
                            ));
                        }
                        if op == "<<" {
                            a.wrapping_shl(b as u32)
                        } else {
                            a >> b
                        }
                    }
                };

                Ok(Value::Number(result as f64))
            }

            "==" => Ok(Value::Bool(left.equals_loose(&right))),
            "!=" => Ok(Value::Bool(!left.equals_loose(&right))),
            "===" => Ok(Value::Bool(left.equals_strict(&right))),

            "<" | "<=" | ">" | ">=" => {
                let (a, b) = number_operands(op, &left, &right, token)?;

                Ok(Value::Bool(match op {
                    "<" => a < b,
                    "<=" => a <= b,
                    ">" => a > b,
                    _ => a >= b,
                }))
            }

            "in" => Ok(Value::Bool(contains_text(&left, &right))),
            "not in" => Ok(Value::Bool(!contains_text(&left, &right))),

            "is" => Ok(Value::Bool(is_type(&left, &right))),
            "is not" => Ok(Value::Bool(!is_type(&left, &right))),

            other => Err(RuntimeError::runtime_error(
                format!("Unknown operator '{}'.", other),
                token,
            )),
        }
    }
}

/// Substring test; any operand that is not text makes it false.
fn contains_text(needle: &Value, haystack: &Value) -> bool {
    match (needle, haystack) {
        (Value::String(needle), Value::String(haystack)) => haystack.contains(needle.as_str()),
        _ => false,
    }
}

/// Type test; the right operand must be text naming a type.
fn is_type(value: &Value, type_name: &Value) -> bool {
    match type_name {
        Value::String(name) => value.matches_type(name),
        _ => false,
    }
}

/// Numeric coercion of a single operand, failing with a type error.
fn number_operand(value: &Value, token: &Token) -> Result<f64, RuntimeError> {
    value.to_number().ok_or_else(|| {
        RuntimeError::type_error(
            format!("Operand of '{}' must be a number, got {}.", token.lexeme, value.type_name()),
            token,
        )
    })
}

/// Integer coercion (truncating) of a single operand.
fn int_operand(value: &Value, token: &Token) -> Result<i64, RuntimeError> {
    value.to_int().ok_or_else(|| {
        RuntimeError::type_error(
            format!("Operand of '{}' must be a number, got {}.", token.lexeme, value.type_name()),
            token,
        )
    })
}

fn number_operands(
    op: &str,
    left: &Value,
    right: &Value,
    token: &Token,
) -> Result<(f64, f64), RuntimeError> {
    match (left.to_number(), right.to_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(RuntimeError::type_error(
            format!(
                "Operands of '{}' must be numbers, got {} and {}.",
                op,
                left.type_name(),
                right.type_name()
            ),
            token,
        )),
    }
}

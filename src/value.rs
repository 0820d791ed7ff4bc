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

//! Runtime values and every coercion rule the operators share.
//!
//! Operators never convert values themselves; they ask this module, so
//! `+`, comparisons, bitwise operators and equality all agree on what
//! "numeric" means.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::ast::FunctionDecl;
use crate::interpreter::environment::Environment;
use crate::interpreter::output::OutputHandler;

/// Host function signature: the output sink plus evaluated arguments.
pub type NativeFn = fn(&OutputHandler, &[Value]) -> Value;

/// PyCraft runtime value representation.
///
/// This is the core type that flows through the interpreter.
/// Every expression ultimately evaluates to one of these.
#[derive(Clone)]
pub enum Value {
    Number(f64),
    Bool(bool),
    String(String),
    Null,
    Function(Rc<Callable>),
}

/// Anything that can be invoked with `(...)`.
pub enum Callable {
    /// Declared with `/function`; runs in a child of `closure`.
    User {
        decl: Rc<FunctionDecl>,
        closure: Rc<RefCell<Environment>>,
    },

    /// Provided by the host with a fixed arity.
    Native {
        name: &'static str,
        arity: usize,
        func: NativeFn,
    },
}

impl Callable {
    pub fn name(&self) -> &str {
        match self {
            Callable::User { decl, .. } => &decl.name.lexeme,
            Callable::Native { name, .. } => name,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Callable::User { decl, .. } => decl.params.len(),
            Callable::Native { arity, .. } => *arity,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::User { .. } => write!(f, "<fn {}>", self.name()),
            Callable::Native { .. } => write!(f, "<native fn {}>", self.name()),
        }
    }
}

impl fmt::Debug for Callable {
    // The closure environment may contain this very function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({})", n),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Null => write!(f, "Null"),
            Value::Function(c) => write!(f, "Function({})", c),
        }
    }
}

impl PartialEq for Value {
    /// Structural identity, used by tests. Language equality lives in
    /// [`Value::equals_loose`] and [`Value::equals_strict`].
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// The user-facing text of a value.
    ///
    /// Integral numbers print without a decimal point, so `8.0` is `8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::Null => write!(f, "null"),
            Value::Function(c) => write!(f, "{}", c),
        }
    }
}

/// Formats a number, dropping the fraction when it is zero.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Parses text as a number; only plain decimal notation counts.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

impl Value {
    /// Runtime category name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Null => "nil",
            Value::Function(_) => "function",
        }
    }

    /// Truthiness: nil is false, numbers are true when nonzero, text when
    /// non-empty, booleans are themselves and functions are always true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Function(_) => true,
        }
    }

    /// Numeric coercion: numbers, numeric text, and booleans as 1/0.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) => parse_numeric_text(s),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null | Value::Function(_) => None,
        }
    }

    /// Integer coercion: the numeric coercion truncated toward zero.
    pub fn to_int(&self) -> Option<i64> {
        self.to_number().map(|n| n.trunc() as i64)
    }

    /// Whether `+` may treat this operand as a number.
    ///
    /// Narrower than [`Value::to_number`]: booleans concatenate.
    pub fn is_additive_number(&self) -> bool {
        match self {
            Value::Number(_) => true,
            Value::String(s) => parse_numeric_text(s).is_some(),
            _ => false,
        }
    }

    /// Boolean coercion used by loose equality.
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "1" | "true" | "True" | "TRUE" => Some(true),
                "0" | "false" | "False" | "FALSE" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// `==`: booleans first, then numbers, then text.
    pub fn equals_loose(&self, other: &Value) -> bool {
        let both_bool_or_text = matches!(self, Value::Bool(_) | Value::String(_))
            && matches!(other, Value::Bool(_) | Value::String(_));

        if both_bool_or_text {
            if let (Some(a), Some(b)) = (self.to_bool(), other.to_bool()) {
                return a == b;
            }
        }

        if let (Some(a), Some(b)) = (self.to_number(), other.to_number()) {
            return a == b;
        }

        self.to_string() == other.to_string()
    }

    /// `===`: no coercion, and values of different categories never match.
    pub fn equals_strict(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Whether this value belongs to the named type, for `is`.
    ///
    /// `int` needs an integral number, `float`/`double` accept any number,
    /// `char` is text of exactly one character.
    pub fn matches_type(&self, type_name: &str) -> bool {
        match (type_name.to_lowercase().as_str(), self) {
            ("int", Value::Number(n)) => n.is_finite() && n.fract() == 0.0,
            ("float" | "double", Value::Number(_)) => true,
            ("bool", Value::Bool(_)) => true,
            ("char", Value::String(s)) => s.chars().count() == 1,
            ("string", Value::String(_)) => true,
            _ => false,
        }
    }

    /// Default value bound by `/summon <type> @name` without an initializer.
    pub fn default_for_type(type_name: &str) -> Value {
        match type_name.to_lowercase().as_str() {
            "int" | "float" | "double" => Value::Number(0.0),
            "bool" => Value::Bool(false),
            "char" | "string" => Value::String(String::new()),
            _ => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn integral_numbers_print_without_fraction() {
        assert_eq!(Value::Number(8.0).to_string(), "8");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
        assert_eq!(Value::Number(3.5).to_string(), "3.5");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn truthiness_table() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
        assert!(!text("").is_truthy());
        assert!(text("0").is_truthy());
        assert!(!Value::Bool(false).is_truthy());
    }

    #[test]
    fn numeric_text_coerces_but_words_do_not() {
        assert_eq!(text(" 42 ").to_number(), Some(42.0));
        assert_eq!(text("inf").to_number(), None);
        assert_eq!(text("NaN").to_number(), None);
        assert_eq!(text("abc").to_number(), None);
        assert_eq!(Value::Bool(true).to_number(), Some(1.0));
        assert_eq!(Value::Number(-2.9).to_int(), Some(-2));
    }

    #[test]
    fn loose_equality_tiers() {
        assert!(text("true").equals_loose(&Value::Bool(true)));
        assert!(text("1").equals_loose(&text("TRUE")));
        assert!(text("5").equals_loose(&Value::Number(5.0)));
        assert!(Value::Bool(true).equals_loose(&Value::Number(1.0)));
        assert!(Value::Null.equals_loose(&text("null")));
        assert!(!text("yes").equals_loose(&Value::Bool(true)));
    }

    #[test]
    fn strict_equality_never_crosses_categories() {
        assert!(Value::Null.equals_strict(&Value::Null));
        assert!(!text("5").equals_strict(&Value::Number(5.0)));
        assert!(!Value::Bool(true).equals_strict(&Value::Number(1.0)));
        assert!(Value::Number(2.0).equals_strict(&Value::Number(2.0)));
    }

    #[test]
    fn type_membership() {
        assert!(Value::Number(3.0).matches_type("int"));
        assert!(!Value::Number(3.5).matches_type("int"));
        assert!(Value::Number(3.0).matches_type("Float"));
        assert!(text("a").matches_type("char"));
        assert!(!text("ab").matches_type("char"));
        assert!(text("ab").matches_type("string"));
        assert!(!Value::Null.matches_type("nil"));
        assert!(!Value::Number(1.0).matches_type("number"));
    }

    #[test]
    fn summon_defaults() {
        assert_eq!(Value::default_for_type("int"), Value::Number(0.0));
        assert_eq!(Value::default_for_type("double"), Value::Number(0.0));
        assert_eq!(Value::default_for_type("bool"), Value::Bool(false));
        assert_eq!(Value::default_for_type("char"), text(""));
        assert_eq!(Value::default_for_type("block"), Value::Null);
    }
}

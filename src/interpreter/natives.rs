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

use chrono::Utc;

use crate::interpreter::environment::Environment;
use crate::interpreter::output::OutputHandler;
use crate::value::{Callable, NativeFn, Value};

/// Binds the host functions into `env`.
///
/// - `clock()`: seconds since the Unix epoch, with millisecond precision
/// - `print(x)`: emits `x` as a line and yields nil
/// - `toString(x)`: the text form of `x`
pub fn install(env: &Rc<RefCell<Environment>>) {
    define_native(env, "clock", 0, clock);
    define_native(env, "print", 1, print);
    define_native(env, "toString", 1, to_string);
}

fn define_native(env: &Rc<RefCell<Environment>>, name: &'static str, arity: usize, func: NativeFn) {
    let callable = Callable::Native { name, arity, func };
    env.borrow_mut().define(name, Value::Function(Rc::new(callable)));
}

fn clock(_: &OutputHandler, _: &[Value]) -> Value {
    Value::Number(Utc::now().timestamp_millis() as f64 / 1000.0)
}

fn print(output: &OutputHandler, args: &[Value]) -> Value {
    if let Some(value) = args.first() {
        output.write_line(&value.to_string());
    }
    Value::Null
}

fn to_string(_: &OutputHandler, args: &[Value]) -> Value {
    Value::String(args.first().map(Value::to_string).unwrap_or_default())
}

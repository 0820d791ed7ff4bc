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
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::interpreter::environment::Environment;
use crate::interpreter::Interpreter;

/// `{...}` with no nested closing brace.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]*)\}").expect("placeholder pattern is valid"));

impl Interpreter {
    /// Expands every `{...}` placeholder in a `/say` message.
    ///
    /// Each placeholder resolves through three tiers, stopping at the first
    /// that works:
    /// 1. The trimmed inner text as a full expression
    /// 2. The trimmed inner text as a variable name
    /// 3. The placeholder text itself, braces included
    pub fn interpolate(&mut self, message: &str, env: &Rc<RefCell<Environment>>) -> String {
        PLACEHOLDER
            .replace_all(message, |caps: &Captures| {
                let inner = caps[1].trim();

                match self.evaluate_in(inner, env) {
                    Ok(value) => return value.to_string(),
                    Err(err) => trace!(placeholder = inner, error = %err, "placeholder is not an expression"),
                }

                if let Some(value) = env.borrow().get(inner) {
                    return value.to_string();
                }

                trace!(placeholder = inner, "placeholder left as written");
                caps[0].to_string()
            })
            .into_owned()
    }
}

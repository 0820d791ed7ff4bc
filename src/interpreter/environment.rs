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
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

/// One lexical scope: its own bindings plus a link to the enclosing scope.
///
/// Scopes are created per block, per loop iteration and per call. A
/// function value keeps its defining scope alive through `Rc`, which is
/// what makes closures lexical.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new(parent: Option<Rc<RefCell<Environment>>>) -> Self {
        Self {
            values: HashMap::new(),
            parent,
        }
    }

    /// A fresh, shared root scope.
    pub fn root() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment::new(None)))
    }

    /// A fresh, shared scope enclosed by `parent`.
    pub fn child(parent: &Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment::new(Some(parent.clone()))))
    }

    /// Binds `name` in this scope only, replacing any existing binding here.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Rebinds the nearest existing `name`, walking outward.
    ///
    /// Returns `false` when no scope defines it; nothing is created.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return true;
        }

        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }

        false
    }

    /// Reads the nearest binding of `name`, walking outward.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }

        if let Some(parent) = &self.parent {
            return parent.borrow().get(name);
        }

        None
    }

    /// Whether this scope itself (not a parent) binds `name`.
    pub fn defines_locally(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

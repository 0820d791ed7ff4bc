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

//! Syntax tree produced by the parser and walked by the interpreter.
//!
//! Nodes are immutable once built and hold no runtime state.

pub mod expr;
pub mod stmt;

pub use expr::Expr;
pub use stmt::{Branch, Condition, FunctionDecl, Stmt};

/// A parsed unit of source: its top-level statements in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

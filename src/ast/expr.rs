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

use crate::lexer::token::Token;

/// Every PyCraft expression node.
///
/// Operators keep their whole token so evaluation errors can report the
/// line they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numbers, text, `true`/`false`/`nil`, `@identifiers` and bare words.
    Literal(Token),

    Grouping(Box<Expr>),

    Unary { operator: Token, right: Box<Expr> },

    /// Every infix operator, including the short-circuiting `and`/`or`.
    Binary { left: Box<Expr>, operator: Token, right: Box<Expr> },

    /// `++`/`--` applied after an operand.
    Postfix { operand: Box<Expr>, operator: Token },

    Call { callee: Box<Expr>, paren: Token, arguments: Vec<Expr> },
}

impl Expr {
    /// Best source line for diagnostics about this expression.
    pub fn line(&self) -> usize {
        match self {
            Expr::Literal(token) => token.line,
            Expr::Grouping(inner) => inner.line(),
            Expr::Unary { operator, .. } => operator.line,
            Expr::Binary { operator, .. } => operator.line,
            Expr::Postfix { operator, .. } => operator.line,
            Expr::Call { paren, .. } => paren.line,
        }
    }
}

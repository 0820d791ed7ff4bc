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

use std::rc::Rc;

use crate::ast::Expr;
use crate::lexer::token::Token;

/// All executable PyCraft statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /* ----------------------------- */
    /* OUTPUT                        */
    /* ----------------------------- */

    /// `/say <message>`; the message is interpolated when executed.
    Say {
        keyword: Token,
        message: String,
    },

    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    /// `/summon <type> @name [initializer]`
    Summon {
        type_name: Token,
        name: Token,
        initializer: Option<Expr>,
    },

    /// `/set @name <op> <expr>`
    Set {
        name: Token,
        operator: Token,
        value: Expr,
    },

    /// `/expr @name { <expr> }`
    ExprAssign {
        name: Token,
        value: Expr,
    },

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */

    Function(Rc<FunctionDecl>),

    Return {
        keyword: Token,
        value: Option<Expr>,
    },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    /// `/execute if ... run { }` with its `elif` and `else` arms.
    If {
        branch: Branch,
        elifs: Vec<Branch>,
        else_body: Option<Vec<Stmt>>,
    },

    While {
        condition: Condition,
        body: Vec<Stmt>,
    },

    /// `/execute for @var in [range] <expr> run { }`
    For {
        variable: Token,
        range: Option<Token>,
        source: Expr,
        body: Vec<Stmt>,
    },

    Break(Token),
    Continue(Token),

    /// `/kill`: ends the whole program.
    Terminate(Token),
}

/// A user function as written in source.
///
/// Shared behind `Rc` so every closure built from the declaration points
/// at one body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

/// One guarded arm of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub condition: Condition,
    pub body: Vec<Stmt>,
}

/// The raw tokens between a control keyword and `run`.
///
/// They are parsed into an expression only when the condition is checked,
/// so a malformed condition is a runtime failure of that check.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub tokens: Vec<Token>,

    /// Line of the control keyword.
    pub line: usize,
}

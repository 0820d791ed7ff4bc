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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(tokens)` and `parse_expression(tokens)` entry points
pub mod parser;

/// Statement-level parsing:
/// - `/say`, `/summon`, `/set`, `/expr`
/// - `/function` and `/return`
/// - `/execute if|while|for` with deferred conditions
pub mod statements;

/// Expression-level parsing:
/// - or → and → not → bitwise → equality → comparison → shift → term
///   → factor → exponent → unary → postfix → call → primary
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - required-token consumption
pub mod helpers;


/// Re-export the public entry points so callers can use
/// `crate::parser::parse(...)`.
pub use parser::{parse, parse_expression, Parser};

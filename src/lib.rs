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

//! PyCraft: a command-flavoured scripting language.
//!
//! Source text flows through a fixed pipeline:
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program → Interpreter
//! ```
//!
//! ```no_run
//! use pycraft::{Config, Interpreter, OutputHandler};
//!
//! let mut interpreter = Interpreter::new(Config::default(), OutputHandler::Stdout);
//! interpreter.run_source("/summon int @x (5)\n/set @x += (3)\n/say {@x}")?;
//! # Ok::<(), pycraft::Error>(())
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod value;

pub use config::Config;
pub use diagnostics::DiagnosticPrinter;
pub use error::{Error, LexError, ParseError, RuntimeError};
pub use interpreter::output::OutputHandler;
pub use interpreter::{ExecSignal, Interpreter, RunReport, RunStatus};
pub use value::Value;

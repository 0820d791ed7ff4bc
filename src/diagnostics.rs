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

use crate::error::Error;

/// Renders PyCraft errors for humans.
///
/// Two shapes are supported:
/// - The one-line report `[line <n>] <message>` that scripts and the
///   interactive driver emit through the output sink
/// - A longer, compiler-style block that quotes the offending source line
///   and appends any help text
pub struct DiagnosticPrinter {
    /// Full source code of the unit being interpreted.
    source: String,

    /// Display name of the unit (e.g. `main.pyc` or `<repl>`).
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source unit.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// One-line report, identical to the error's `Display`.
    pub fn report(error: &Error) -> String {
        error.to_string()
    }

    /// Compiler-style rendering.
    ///
    /// # Output Example
    /// ```text
    /// error[E_RUNTIME]: Division by zero.
    ///   --> main.pyc:3
    ///    |
    ///  3 | /expr @y { @x $ (0) }
    ///    |
    /// help: Guard the divisor with an /execute if.
    /// ```
    pub fn render(&self, error: &Error) -> String {
        let line = error.line();
        let message = match error {
            Error::Lex(e) => e.message.clone(),
            Error::Parse(e) => format!("Error at '{}': {}", e.lexeme, e.message),
            Error::Runtime(e) => e.message.clone(),
            Error::Config(msg) => msg.clone(),
        };

        // Lines are 1-indexed in diagnostics, but vectors are 0-indexed.
        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}\n   |\n{:>3} | {}\n   |",
            error.code(),
            message,
            self.file_name,
            line,
            line,
            src_line
        );

        let help = match error {
            Error::Parse(e) => e.help.as_deref(),
            Error::Runtime(e) => e.help.as_deref(),
            _ => None,
        };

        if let Some(help) = help {
            out.push_str("\nhelp: ");
            out.push_str(help);
        }

        out
    }
}

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

//! Output sink for `/say`, `print` and error reports.

use std::cell::RefCell;
use std::rc::Rc;

/// Where emitted lines go.
#[derive(Debug, Clone, Default)]
pub enum OutputHandler {
    /// Writes each line to stdout.
    #[default]
    Stdout,

    /// Captures lines for tests and embedders. Clones share the buffer.
    Buffer(Rc<RefCell<Vec<String>>>),
}

impl OutputHandler {
    /// A new, empty capture buffer.
    pub fn buffer() -> Self {
        OutputHandler::Buffer(Rc::new(RefCell::new(Vec::new())))
    }

    /// Emit one line.
    pub fn write_line(&self, line: &str) {
        match self {
            OutputHandler::Stdout => println!("{line}"),
            OutputHandler::Buffer(lines) => lines.borrow_mut().push(line.to_string()),
        }
    }

    /// Captured lines so far. Always empty for stdout.
    pub fn lines(&self) -> Vec<String> {
        match self {
            OutputHandler::Stdout => Vec::new(),
            OutputHandler::Buffer(lines) => lines.borrow().clone(),
        }
    }

    /// Drop captured lines. No-op for stdout.
    pub fn clear(&self) {
        if let OutputHandler::Buffer(lines) = self {
            lines.borrow_mut().clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_sink_is_stdout() {
        let sink = OutputHandler::default();

        assert!(matches!(sink, OutputHandler::Stdout));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn clones_share_one_buffer() {
        let sink = OutputHandler::buffer();
        sink.clone().write_line("one");
        sink.write_line("two");

        assert_eq!(sink.lines(), vec!["one", "two"]);

        sink.clear();
        assert!(sink.lines().is_empty());
    }
}

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

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Longest identifier the lexer accepts, `@` included.
pub const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 50;

/// Deepest user-function nesting before a call fails.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Interpreter tunables.
///
/// Every field has a default, so a JSON document only needs the keys it
/// wants to change:
///
/// ```json
/// { "max_call_depth": 64, "echo_errors": false }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_identifier_length: usize,
    pub max_call_depth: usize,

    /// Expand `{...}` placeholders in `/say` messages.
    pub interpolate_output: bool,

    /// Write `[line n] message` reports to the output sink.
    pub echo_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_identifier_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            interpolate_output: true,
            echo_errors: true,
        }
    }
}

impl Config {
    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: Config = serde_json::from_str(json)?;

        if config.max_identifier_length < 2 {
            return Err(Error::Config(
                "max_identifier_length must allow '@' plus one letter".to_string(),
            ));
        }

        Ok(config)
    }
}

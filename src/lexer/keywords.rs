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

use crate::lexer::token::Keyword;

/// Looks up a **slash command** by the word that follows the `/`.
///
/// `whisper` is deliberately absent: comments never become tokens, so the
/// lexer handles that word itself.
///
/// # PyCraft Examples
/// ```text
/// say      -> Some(Keyword::Say)
/// execute  -> Some(Keyword::Execute)
/// teleport -> None
/// ```
pub fn command_keyword(word: &str) -> Option<Keyword> {
    match word {
        "say" => Some(Keyword::Say),
        "summon" => Some(Keyword::Summon),
        "set" => Some(Keyword::Set),
        "expr" => Some(Keyword::Expr),
        "execute" => Some(Keyword::Execute),
        "function" => Some(Keyword::Function),
        "return" => Some(Keyword::Return),
        "stop" => Some(Keyword::Stop),
        "skip" => Some(Keyword::Skip),
        "kill" => Some(Keyword::Kill),
        _ => None,
    }
}

/// The second word of a two-word `/execute` command.
pub fn execute_subcommand(word: &str) -> Option<Keyword> {
    match word {
        "if" => Some(Keyword::ExecuteIf),
        "elif" => Some(Keyword::ExecuteElif),
        "else" => Some(Keyword::ExecuteElse),
        "while" => Some(Keyword::ExecuteWhile),
        "for" => Some(Keyword::ExecuteFor),
        _ => None,
    }
}

/// Reserved bare words.
pub fn word_keyword(word: &str) -> Option<Keyword> {
    match word {
        "run" => Some(Keyword::Run),
        "else" => Some(Keyword::Else),
        "elif" => Some(Keyword::Elif),
        "range" => Some(Keyword::Range),
        "as" => Some(Keyword::As),
        "from" => Some(Keyword::From),
        "const" => Some(Keyword::Const),
        _ => None,
    }
}

/// Whether `word` is one of the operators spelled with letters.
pub fn is_word_operator(word: &str) -> bool {
    matches!(word, "and" | "or" | "not" | "in" | "is")
}

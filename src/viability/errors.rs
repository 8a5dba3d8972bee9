// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

#[derive(Debug, PartialEq, Error)]
pub enum CharacterClassError {
    #[error("Character class body is empty")]
    Empty,
    #[error("Character class body starts with '^' and would be negated")]
    NegatedClass,
    #[error("Hyphen at position {position} may be read as a range operator")]
    AmbiguousHyphen { position: usize },
    #[error("Escape sequence at position {position} is not terminated")]
    UnterminatedEscape { position: usize },
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
}

/// Configuration errors. They mean the constants or the extension grammar are
/// broken, never that an input string is bad.
#[derive(Debug, PartialEq, Error)]
pub enum ViabilityPatternError {
    #[error("Minimum length for NSN must be at least 1")]
    InvalidMinLength,
    #[error("Invalid {name} character class: {source}")]
    InvalidCharacterClass {
        name: &'static str,
        #[source]
        source: CharacterClassError,
    },
    #[error("Invalid extension pattern: {0}")]
    InvalidExtensionPattern(#[source] InvalidRegexError),
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
}

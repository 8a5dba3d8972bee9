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

use regex::Regex;

use crate::regexp_cache::InvalidRegexError;

use super::errors::CharacterClassError;

/// Body of a bracket expression, e.g. `-0-9.` for `[-0-9.]`.
///
/// A literal hyphen is only accepted as the very first character. Any other
/// hyphen must sit between two single characters and therefore is a range.
/// A leading `^` is rejected, the body is never a negated class.
#[derive(Debug, Clone)]
pub struct CharacterClass {
    body: String,
    /// `^[body]$`, used to answer membership queries.
    single_char: Regex,
}

/// What precedes the current position while scanning a class body.
#[derive(Clone, Copy, PartialEq)]
enum ClassItem {
    LiteralHyphen,
    Single,
    Range,
    /// Escaped set such as `\d` or `\p{Nd}`, can't be a range endpoint.
    Set,
}

impl CharacterClass {
    pub fn new(body: impl Into<String>) -> Result<Self, CharacterClassError> {
        let body = body.into();
        if body.is_empty() {
            return Err(CharacterClassError::Empty);
        }
        if body.starts_with('^') {
            return Err(CharacterClassError::NegatedClass);
        }
        check_hyphen_placement(&body)?;
        let single_char = Regex::new(&fast_cat::concat_str!("^[", &body, "]$"))
            .map_err(InvalidRegexError::from)?;
        Ok(Self { body, single_char })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn contains(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.single_char.is_match(c.encode_utf8(&mut buf))
    }

    pub fn has_literal_hyphen(&self) -> bool {
        self.body.starts_with('-')
    }
}

fn check_hyphen_placement(body: &str) -> Result<(), CharacterClassError> {
    let chars: Vec<char> = body.chars().collect();
    let mut previous: Option<ClassItem> = None;
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '-' if i == 0 => {
                previous = Some(ClassItem::LiteralHyphen);
                i += 1;
            }
            '-' => {
                if previous != Some(ClassItem::Single) {
                    return Err(CharacterClassError::AmbiguousHyphen { position: i });
                }
                let (end, next) = match chars.get(i + 1) {
                    None | Some('-') => {
                        return Err(CharacterClassError::AmbiguousHyphen { position: i });
                    }
                    Some('\\') => read_escape(&chars, i + 1)?,
                    Some(_) => (ClassItem::Single, i + 2),
                };
                if end != ClassItem::Single {
                    return Err(CharacterClassError::AmbiguousHyphen { position: i });
                }
                previous = Some(ClassItem::Range);
                i = next;
            }
            '\\' => {
                let (item, next) = read_escape(&chars, i)?;
                previous = Some(item);
                i = next;
            }
            _ => {
                previous = Some(ClassItem::Single);
                i += 1;
            }
        }
    }
    Ok(())
}

/// Reads the escape starting at `start` (which holds the backslash). Returns
/// the kind of item and the position right after it.
fn read_escape(chars: &[char], start: usize) -> Result<(ClassItem, usize), CharacterClassError> {
    let unterminated = CharacterClassError::UnterminatedEscape { position: start };
    let Some(&escaped) = chars.get(start + 1) else {
        return Err(unterminated);
    };
    let item = match escaped {
        'p' | 'P' | 'd' | 'D' | 's' | 'S' | 'w' | 'W' => ClassItem::Set,
        _ => ClassItem::Single,
    };
    match escaped {
        'p' | 'P' | 'x' | 'u' | 'U' if chars.get(start + 2) == Some(&'{') => {
            let close = chars[start + 2..]
                .iter()
                .position(|&c| c == '}')
                .ok_or(unterminated)?;
            Ok((item, start + 2 + close + 1))
        }
        // \pN, one letter general category
        'p' | 'P' => Ok((item, start + 3)),
        'x' => Ok((item, start + 4)),
        'u' => Ok((item, start + 6)),
        'U' => Ok((item, start + 10)),
        _ => Ok((item, start + 2)),
    }
}

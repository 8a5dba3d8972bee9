// Copyright (C) 2009 The Libphonenumber Authors
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

use std::sync::{Arc, LazyLock};

use log::debug;
use regex::Regex;

use crate::{
    interfaces::{ConstantsProvider, ExtensionPatternProvider},
    regexp_cache::{InvalidRegexError, RegexCache},
};

use super::{
    character_class::CharacterClass,
    errors::{CharacterClassError, ViabilityPatternError},
    helper_constants::{MIN_DIGITS_FOR_LONG_NUMBER, STAR_SIGN},
};

static COMPILED_VIABILITY_PATTERNS: LazyLock<RegexCache> =
    LazyLock::new(|| RegexCache::with_capacity(4));

/// Validated inputs of the viability pattern.
///
/// The pattern is a disjunction of two independently anchored branches:
///
/// `[digits]{minLengthNsn}`
///
/// `[plus]*(?:[punctuation star]*[digits]){3,}[punctuation digits]*(?:extension)?`
///
/// The first one allows short numbers (two digits long) entered as "15" etc,
/// but only if there is no punctuation in them. The second one needs three or
/// more digits, but then allows them to be in international form, with
/// punctuation and an extension suffix.
#[derive(Debug, Clone)]
pub struct ViabilityPatternBuilder {
    min_length_for_nsn: usize,
    valid_digits: CharacterClass,
    valid_punctuation: CharacterClass,
    plus_chars: CharacterClass,
    extension_pattern: String,
}

impl ViabilityPatternBuilder {
    pub fn from_providers<C, E>(constants: &C, extensions: &E) -> Result<Self, ViabilityPatternError>
    where
        C: ConstantsProvider + ?Sized,
        E: ExtensionPatternProvider + ?Sized,
    {
        let min_length_for_nsn = constants.min_length_for_nsn();
        if min_length_for_nsn == 0 {
            return Err(ViabilityPatternError::InvalidMinLength);
        }
        let class = |name: &'static str, body: &str| {
            CharacterClass::new(body)
                .map_err(|source| ViabilityPatternError::InvalidCharacterClass { name, source })
        };
        let extension_pattern = extensions.extension_pattern_for_parsing().into_owned();
        // Checked on its own so a broken grammar is reported as such, and not
        // as a failure of the combined pattern.
        Regex::new(&fast_cat::concat_str!("(?i:", &extension_pattern, ")"))
            .map_err(|err| ViabilityPatternError::InvalidExtensionPattern(InvalidRegexError(err)))?;

        let valid_digits = class("digits", constants.valid_digits())?;
        // Digits follow punctuation inside `[punctuation digits]`, where a
        // leading hyphen would become a range from the last punctuation char.
        if valid_digits.has_literal_hyphen() {
            return Err(ViabilityPatternError::InvalidCharacterClass {
                name: "digits",
                source: CharacterClassError::AmbiguousHyphen { position: 0 },
            });
        }

        Ok(Self {
            min_length_for_nsn,
            valid_digits,
            valid_punctuation: class("punctuation", constants.valid_punctuation())?,
            plus_chars: class("plus", constants.plus_chars())?,
            extension_pattern,
        })
    }

    pub fn min_length_for_nsn(&self) -> usize {
        self.min_length_for_nsn
    }

    /// `[digits]{min_length_for_nsn}`
    pub fn short_number_pattern(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let min_length_str = buf.format(self.min_length_for_nsn);
        let digits = self.valid_digits.body();
        fast_cat::concat_str!("[", digits, "]{", min_length_str, "}")
    }

    /// Long form without the extension suffix.
    pub fn long_number_pattern(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let min_digits_str = buf.format(MIN_DIGITS_FOR_LONG_NUMBER);
        let digits = self.valid_digits.body();
        let punctuation = self.valid_punctuation.body();
        let plus_chars = self.plus_chars.body();
        fast_cat::concat_str!(
            "[", plus_chars, "]*",
            "(?:[", punctuation, STAR_SIGN, "]*[", digits, "]){", min_digits_str, ",}",
            "[", punctuation, digits, "]*"
        )
    }

    /// Full source of the combined pattern. Only the extension suffix is
    /// case-insensitive.
    pub fn pattern_source(&self) -> String {
        let short_number = self.short_number_pattern();
        let long_number = self.long_number_pattern();
        fast_cat::concat_str!(
            "^", &short_number, "$",
            "|",
            "^", &long_number, "(?i:", &self.extension_pattern, ")?$"
        )
    }

    pub fn build(self) -> Result<ViabilityPattern, ViabilityPatternError> {
        let source = self.pattern_source();
        let regex = COMPILED_VIABILITY_PATTERNS.get_regex(&source)?;
        debug!(
            "Viability pattern ready (min length for NSN: {})",
            self.min_length_for_nsn
        );
        Ok(ViabilityPattern {
            min_length_for_nsn: self.min_length_for_nsn,
            regex,
        })
    }
}

/// Compiled viability pattern. Immutable; clones share the compiled regex.
#[derive(Debug, Clone)]
pub struct ViabilityPattern {
    min_length_for_nsn: usize,
    regex: Arc<Regex>,
}

impl ViabilityPattern {
    pub fn min_length_for_nsn(&self) -> usize {
        self.min_length_for_nsn
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether `text` as a whole matches either branch. The length guard is
    /// not applied here.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

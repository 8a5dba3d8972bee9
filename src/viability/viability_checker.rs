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

use log::trace;

use crate::interfaces::{ConstantsProvider, ExtensionPatternProvider};

use super::{
    errors::ViabilityPatternError,
    providers::{DefaultConstants, DefaultExtensionPatterns},
    viability_pattern::{ViabilityPattern, ViabilityPatternBuilder},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ViabilityPatternError>;

#[derive(Debug, Clone)]
pub struct ViabilityChecker {
    pattern: ViabilityPattern,
}

impl ViabilityChecker {
    /// Checker over the compiled-in constants and extension grammar.
    ///
    /// Panics if they don't form a valid pattern: that is a library bug and
    /// must not be hidden behind per-call `false` results.
    pub(super) fn new() -> Self {
        let checker = DefaultExtensionPatterns::check_all_purposes()
            .map_err(ViabilityPatternError::InvalidExtensionPattern)
            .and_then(|()| Self::with_providers(&DefaultConstants, &DefaultExtensionPatterns));
        match checker {
            Ok(checker) => checker,
            Err(err) => {
                let err_message = format!("Could not build compiled-in viability pattern: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    pub fn with_providers<C, E>(constants: &C, extensions: &E) -> Result<Self>
    where
        C: ConstantsProvider + ?Sized,
        E: ExtensionPatternProvider + ?Sized,
    {
        let pattern = ViabilityPatternBuilder::from_providers(constants, extensions)?.build()?;
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &ViabilityPattern {
        &self.pattern
    }

    /// Checks to see if the string of characters could possibly be a phone
    /// number at all. At the moment, checks to see that the string begins with
    /// at least 2 digits, ignoring any punctuation commonly found in phone
    /// numbers. This method does not require the number to be normalized in
    /// advance - but does assume that leading non-number symbols have been
    /// removed.
    pub fn is_viable_phone_number(&self, number: &str) -> bool {
        let min_length = self.pattern.min_length_for_nsn();
        // nth is zero based, so this is "has fewer than min_length chars"
        if number.chars().nth(min_length - 1).is_none() {
            trace!("Rejected a {} byte candidate shorter than {min_length} characters", number.len());
            return false;
        }
        self.pattern.is_match(number)
    }
}

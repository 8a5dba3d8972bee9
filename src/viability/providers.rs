use std::borrow::Cow;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::{
    interfaces::{ConstantsProvider, ExtensionPatternProvider},
    regexp_cache::InvalidRegexError,
};

use super::{
    extension_patterns::{ExtensionPatternPurpose, extension_pattern},
    helper_constants::{MIN_LENGTH_FOR_NSN, PLUS_CHARS, VALID_DIGITS, VALID_PUNCTUATION},
};

/// Compiled-in constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConstants;

impl ConstantsProvider for DefaultConstants {
    fn min_length_for_nsn(&self) -> usize {
        MIN_LENGTH_FOR_NSN
    }

    fn valid_digits(&self) -> &str {
        VALID_DIGITS
    }

    fn valid_punctuation(&self) -> &str {
        VALID_PUNCTUATION
    }

    fn plus_chars(&self) -> &str {
        PLUS_CHARS
    }
}

/// Extension grammar used when parsing: explicit labels, single character
/// labels, American style "#" suffix and auto-dialling separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExtensionPatterns;

impl DefaultExtensionPatterns {
    /// Compiles the extension grammar of every purpose, not only the parsing
    /// one the viability pattern embeds.
    pub fn check_all_purposes() -> Result<(), InvalidRegexError> {
        for purpose in ExtensionPatternPurpose::iter() {
            Regex::new(&extension_pattern(purpose))?;
        }
        Ok(())
    }
}

impl ExtensionPatternProvider for DefaultExtensionPatterns {
    fn extension_pattern_for_parsing(&self) -> Cow<'_, str> {
        Cow::Owned(extension_pattern(ExtensionPatternPurpose::Parsing))
    }
}

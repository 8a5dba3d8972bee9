mod interfaces;
mod regexp_cache;
mod viability;

#[cfg(test)]
mod tests;

pub use interfaces::{ConstantsProvider, ExtensionPatternProvider};
pub use regexp_cache::InvalidRegexError;
pub use viability::{
    errors, CharacterClass, DefaultConstants, DefaultExtensionPatterns, ExtensionPatternPurpose,
    ViabilityPattern, ViabilityPatternBuilder, MIN_LENGTH_FOR_NSN, PLUS_CHARS, STAR_SIGN,
    VALID_DIGITS, VALID_PUNCTUATION, VIABILITY_CHECKER, extension_pattern,
};
pub use viability::viability_checker::ViabilityChecker;

/// Builds the process-wide checker now instead of on first use. A broken
/// compiled-in configuration panics here rather than on a hot path.
pub fn init() {
    std::sync::LazyLock::force(&VIABILITY_CHECKER);
}

/// Checks to see if the string of characters could possibly be a phone number
/// at all, using the process-wide checker. Never fails: anything that is not
/// a plausible phone number is just `false`.
pub fn is_viable_phone_number(number: &str) -> bool {
    VIABILITY_CHECKER.is_viable_phone_number(number)
}

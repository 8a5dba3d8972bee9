mod character_class;
mod extension_patterns;
mod helper_constants;
mod providers;
mod viability_pattern;
pub mod errors;
pub mod viability_checker;

use std::sync::LazyLock;

use crate::viability::viability_checker::ViabilityChecker;

pub use character_class::CharacterClass;
pub use extension_patterns::{ExtensionPatternPurpose, extension_pattern};
pub use helper_constants::{MIN_LENGTH_FOR_NSN, PLUS_CHARS, STAR_SIGN, VALID_DIGITS, VALID_PUNCTUATION};
pub use providers::{DefaultConstants, DefaultExtensionPatterns};
pub use viability_pattern::{ViabilityPattern, ViabilityPatternBuilder};

pub static VIABILITY_CHECKER: LazyLock<ViabilityChecker> = LazyLock::new(|| {
    ViabilityChecker::new()
});

use std::borrow::Cow;

/// Source of the numeric constants and character-class bodies the viability
/// pattern is assembled from.
///
/// Class bodies are inserted verbatim between `[` and `]`, so they must use
/// `regex` crate syntax. A literal hyphen has to be the first character.
pub trait ConstantsProvider {
    /// Minimum length of a national significant number. Must be at least 1.
    fn min_length_for_nsn(&self) -> usize;
    fn valid_digits(&self) -> &str;
    fn valid_punctuation(&self) -> &str;
    fn plus_chars(&self) -> &str;
}

/// Source of the extension grammar appended to the long-number branch.
pub trait ExtensionPatternProvider {
    /// Un-anchored fragment matching an extension label followed by its digits.
    /// It is embedded into an optional non-capturing group and matched
    /// case-insensitively.
    fn extension_pattern_for_parsing(&self) -> Cow<'_, str>;
}

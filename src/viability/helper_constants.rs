// The minimum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;

// A number written in the long form needs at least this many digits, so that
// short runs of punctuation are never taken for a phone number.
pub const MIN_DIGITS_FOR_LONG_NUMBER: usize = 3;

pub const PLUS_CHARS: &'static str = "+\u{FF0B}";

// ASCII, full-width, Arabic-Indic and Eastern Arabic-Indic digits.
pub const VALID_DIGITS: &'static str = "0-9\u{FF10}-\u{FF19}\u{0660}-\u{0669}\u{06F0}-\u{06F9}";

// Regular expression of acceptable punctuation found in phone numbers. This
// excludes punctuation found as a leading character only. This consists of
// dash characters, white space characters, full stops, slashes, square
// brackets, parentheses and tildes. Full-width variants are also present.
// The plain hyphen goes first so it is never read as a range operator.
pub const VALID_PUNCTUATION: &'static str = "-\
\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}\u{2015}\u{2212}\u{30FC}\u{FF0D}\
\u{FF0F}/\
\u{FF0E}.\
\u{0020}\u{00A0}\u{00AD}\u{200B}\u{2060}\u{3000}\
()\u{FF08}\u{FF09}\u{FF3B}\u{FF3D}\\[\\]\
~\u{2053}\u{223C}\u{FF5E}";

pub const STAR_SIGN: &'static str = "*";

pub const RFC3966_EXTN_PREFIX: &'static str = ";ext=";

// Zero or more spaces/tabs/commas between the number and the extension label.
pub const POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL: &'static str = "[ \u{00A0}\\t,]*";

// Optional full stop (.) or colon, followed by zero or more
// spaces/tabs/commas.
pub const POSSIBLE_CHARS_AFTER_EXT_LABEL: &'static str = "[:\\.\u{FF0E}]?[ \u{00A0}\\t,-]*";

pub const OPTIONAL_EXT_SUFFIX: &'static str = "#?";

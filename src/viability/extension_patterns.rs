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

use log::debug;
use strum::{Display, EnumIter};

use super::helper_constants::{
    OPTIONAL_EXT_SUFFIX, POSSIBLE_CHARS_AFTER_EXT_LABEL,
    POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL, RFC3966_EXTN_PREFIX, VALID_DIGITS,
};

/// What the extension grammar is going to be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ExtensionPatternPurpose {
    /// Lenient grammar for a string that is already known to hold one number.
    /// Also accepts auto-dialling labels such as ",," and ";".
    Parsing,
    /// Stricter grammar for finding numbers in free text.
    Matching,
}

// Longest extension accepted after each kind of label. The less obvious the
// label, the fewer digits it may carry, so two numbers written next to each
// other are not read as number plus extension.
const MAX_DIGITS_AFTER_EXPLICIT_LABEL: u32 = 20;
const MAX_DIGITS_AFTER_AUTO_DIALLING_LABEL: u32 = 15;
const MAX_DIGITS_AFTER_AMBIGUOUS_LABEL: u32 = 9;
const MAX_DIGITS_BEFORE_HASH: u32 = 6;

// "ext", "extn", "extension" (ó precomposed or with a combining accent),
// full-width "ｘｔ" forms, Cyrillic "доб" and Spanish "anexo".
const EXPLICIT_EXT_LABELS: &'static str = "(?:e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|(?:\u{FF45})?\u{FF58}\u{FF54}(?:\u{FF4E})?|\u{0434}\u{043E}\u{0431}|anexo)";
// "x", "#", "~", "int" and their full-width forms.
const AMBIGUOUS_EXT_LABELS: &'static str = "(?:[x\u{FF58}#\u{FF03}~\u{FF5E}]|int|\u{FF49}\u{FF4E}\u{FF54})";
// ",," or ";", both used by phone dialers to send the extension once connected.
const AUTO_DIALLING_EXT_LABELS: &'static str = "(?:,{2}|;)";
// The label may itself contain commas here, so they are not separators.
const SEPARATORS_BEFORE_AUTO_DIALLING_LABEL: &'static str = "[ \u{00A0}\\t]*";

/// Captures one to `max_length` digits.
pub(super) fn extn_digits(max_length: u32) -> String {
    let mut buf = itoa::Buffer::new();
    let max_length_str = buf.format(max_length);
    fast_cat::concat_str!("([", VALID_DIGITS, "]{1,", max_length_str, "})")
}

/// `separators label [:.] digits #?`
fn labelled_extension(separators: &str, label: &str, max_digits: u32) -> String {
    let digits = extn_digits(max_digits);
    fast_cat::concat_str!(
        separators,
        label,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &digits,
        OPTIONAL_EXT_SUFFIX
    )
}

/// Un-anchored alternation of the ways an extension is written, to be matched
/// case-insensitively. Only the extension digits are captured.
///
/// Both purposes share the RFC 3966 `;ext=`, explicit label, ambiguous label
/// and American `- 503#` forms. [`ExtensionPatternPurpose::Parsing`] adds the
/// auto-dialling `,,`/`;` labels and bare comma labels.
pub fn extension_pattern(purpose: ExtensionPatternPurpose) -> String {
    let mut alternatives = vec![
        fast_cat::concat_str!(RFC3966_EXTN_PREFIX, &extn_digits(MAX_DIGITS_AFTER_EXPLICIT_LABEL)),
        labelled_extension(
            POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
            EXPLICIT_EXT_LABELS,
            MAX_DIGITS_AFTER_EXPLICIT_LABEL,
        ),
        labelled_extension(
            POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
            AMBIGUOUS_EXT_LABELS,
            MAX_DIGITS_AFTER_AMBIGUOUS_LABEL,
        ),
        fast_cat::concat_str!("[- ]+", &extn_digits(MAX_DIGITS_BEFORE_HASH), "#"),
    ];
    if purpose == ExtensionPatternPurpose::Parsing {
        alternatives.push(labelled_extension(
            SEPARATORS_BEFORE_AUTO_DIALLING_LABEL,
            AUTO_DIALLING_EXT_LABELS,
            MAX_DIGITS_AFTER_AUTO_DIALLING_LABEL,
        ));
        alternatives.push(labelled_extension(
            SEPARATORS_BEFORE_AUTO_DIALLING_LABEL,
            "(?:,)+",
            MAX_DIGITS_AFTER_AMBIGUOUS_LABEL,
        ));
    }
    debug!("Assembled {purpose} extension pattern of {} alternatives", alternatives.len());
    alternatives.join("|")
}

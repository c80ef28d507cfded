// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Compiled format patterns describing how monetary amounts are displayed.

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{FAILED, MonetaryError};

/// The pattern applied when a currency does not configure its own:
/// two decimal places, `.` decimal separator, `,` grouping separator in
/// groups of three, amount followed by symbol.
pub const DEFAULT_PATTERN: &str = "2.,3%a%s";

/// A single element of a compiled pattern's token sequence.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Token {
    /// `%a`: the amount in localized form, signed when negative.
    Amount,
    /// `%A`: the amount in Western form, signed when negative.
    AmountWestern,
    /// `%u`: the amount in localized form, never signed.
    AmountUnsigned,
    /// `%U`: the amount in Western form, never signed.
    AmountUnsignedWestern,
    /// `%s`: the currency symbol.
    Symbol,
    /// `%S`: the localized currency symbol.
    SymbolLocalized,
    /// `%c`: the three-letter alpha code.
    AlphaCode,
    /// `%-`: the minus sign when the amount is negative, nothing otherwise.
    Sign,
    /// A run of literal text (with `%%` already decoded to `%`).
    Literal(String),
    /// An unrecognized `%x` directive, re-emitted verbatim.
    Unknown(char),
}

impl Token {
    const fn from_directive(directive: char) -> Self {
        match directive {
            'a' => Self::Amount,
            'A' => Self::AmountWestern,
            'u' => Self::AmountUnsigned,
            'U' => Self::AmountUnsignedWestern,
            's' => Self::Symbol,
            'S' => Self::SymbolLocalized,
            'c' => Self::AlphaCode,
            '-' => Self::Sign,
            other => Self::Unknown(other),
        }
    }
}

/// A compiled currency format pattern.
///
/// A pattern string opens with four fixed slots followed by a free-form
/// token sequence:
///
/// ```text
/// <decimal places digit><decimal separator><grouping separator><grouping places digit><token>*
/// ```
///
/// The two digit slots accept `0` through `9` only. The separator slots
/// accept any single character. A grouping places digit of `0` disables
/// grouping; a decimal places digit of `0` renders amounts as integers with
/// no decimal separator.
///
/// Recognized tokens:
///
/// | Token | Substitution |
/// |-------|--------------|
/// | `%a`  | amount in localized form (configured separators and numerals), signed |
/// | `%A`  | amount in Western form (`.` decimal point, `,` grouping by threes), signed |
/// | `%u`  | amount in localized form, never signed |
/// | `%U`  | amount in Western form, never signed |
/// | `%s`  | currency symbol |
/// | `%S`  | localized currency symbol |
/// | `%c`  | alpha code |
/// | `%-`  | minus sign when negative, empty otherwise |
/// | `%%`  | literal `%` |
///
/// Any other `%x` sequence passes through verbatim, and all remaining text
/// is literal. The [`Display`] implementation reproduces the source pattern
/// string exactly.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Pattern {
    decimal_places: u8,
    decimal_separator: char,
    grouping_separator: char,
    grouping_places: u8,
    tokens: Vec<Token>,
}

impl Pattern {
    /// Creates a new [`Pattern`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is empty, shorter than the four fixed
    /// slots, has a non-digit in either digit slot, or ends with a dangling
    /// `%`.
    pub fn new_checked(pattern: &str) -> anyhow::Result<Self> {
        let fail = |reason: &str| MonetaryError::InvalidFormat {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = pattern.chars();
        let decimal_places = chars
            .next()
            .ok_or_else(|| fail("pattern is empty"))?
            .to_digit(10)
            .ok_or_else(|| fail("decimal places slot must be a digit 0-9"))?
            as u8;
        let decimal_separator = chars
            .next()
            .ok_or_else(|| fail("missing decimal separator slot"))?;
        let grouping_separator = chars
            .next()
            .ok_or_else(|| fail("missing grouping separator slot"))?;
        let grouping_places = chars
            .next()
            .ok_or_else(|| fail("missing grouping places slot"))?
            .to_digit(10)
            .ok_or_else(|| fail("grouping places slot must be a digit 0-9"))?
            as u8;

        let mut tokens = Vec::new();
        let mut literal = String::new();
        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            match chars.next() {
                None => anyhow::bail!(fail("dangling `%` at end of pattern")),
                Some('%') => literal.push('%'),
                Some(directive) => {
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::from_directive(directive));
                }
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self {
            decimal_places,
            decimal_separator,
            grouping_separator,
            grouping_places,
            tokens,
        })
    }

    /// Creates a new [`Pattern`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` violates the grammar (see
    /// [`new_checked`](Self::new_checked)).
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self::new_checked(pattern).expect(FAILED)
    }

    /// Returns the number of decimal places rendered for amounts.
    #[must_use]
    pub const fn decimal_places(&self) -> u8 {
        self.decimal_places
    }

    /// Returns the character separating the integer and fractional parts.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Returns the character inserted between digit groups.
    #[must_use]
    pub const fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    /// Returns the digit interval between grouping separators (zero disables
    /// grouping).
    #[must_use]
    pub const fn grouping_places(&self) -> u8 {
        self.grouping_places
    }

    /// Returns the compiled token sequence.
    pub(crate) fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl Debug for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{self}')", stringify!(Pattern))
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.decimal_places, self.decimal_separator, self.grouping_separator, self.grouping_places,
        )?;
        for token in &self.tokens {
            match token {
                Token::Amount => f.write_str("%a")?,
                Token::AmountWestern => f.write_str("%A")?,
                Token::AmountUnsigned => f.write_str("%u")?,
                Token::AmountUnsignedWestern => f.write_str("%U")?,
                Token::Symbol => f.write_str("%s")?,
                Token::SymbolLocalized => f.write_str("%S")?,
                Token::AlphaCode => f.write_str("%c")?,
                Token::Sign => f.write_str("%-")?,
                Token::Literal(text) => {
                    for c in text.chars() {
                        if c == '%' {
                            f.write_str("%%")?;
                        } else {
                            write!(f, "{c}")?;
                        }
                    }
                }
                Token::Unknown(directive) => write!(f, "%{directive}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_checked(s)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for Pattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pattern = String::deserialize(deserializer)?;
        Self::new_checked(&pattern).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_pattern_slots() {
        let pattern = Pattern::default();
        assert_eq!(pattern.decimal_places(), 2);
        assert_eq!(pattern.decimal_separator(), '.');
        assert_eq!(pattern.grouping_separator(), ',');
        assert_eq!(pattern.grouping_places(), 3);
        assert_eq!(pattern.tokens(), &[Token::Amount, Token::Symbol]);
        assert_eq!(pattern, Pattern::new(DEFAULT_PATTERN));
    }

    #[rstest]
    fn test_sign_symbol_unsigned_order() {
        let pattern = Pattern::new("0.,3%-%s%u");
        assert_eq!(pattern.decimal_places(), 0);
        assert_eq!(
            pattern.tokens(),
            &[Token::Sign, Token::Symbol, Token::AmountUnsigned],
        );
    }

    #[rstest]
    fn test_arabic_separator_slots() {
        let pattern = Pattern::new("2\u{66b}\u{66c}3%s\u{a0}%a");
        assert_eq!(pattern.decimal_separator(), '\u{66b}');
        assert_eq!(pattern.grouping_separator(), '\u{66c}');
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Symbol,
                Token::Literal("\u{a0}".to_string()),
                Token::Amount,
            ],
        );
    }

    #[rstest]
    fn test_escaped_percent_folds_into_literal() {
        let pattern = Pattern::new("2.,3%a %% %s");
        assert_eq!(
            pattern.tokens(),
            &[
                Token::Amount,
                Token::Literal(" % ".to_string()),
                Token::Symbol,
            ],
        );
    }

    #[rstest]
    fn test_unknown_directive_is_preserved() {
        let pattern = Pattern::new("2.,3%q%a");
        assert_eq!(pattern.tokens(), &[Token::Unknown('q'), Token::Amount]);
    }

    #[rstest]
    fn test_empty_token_sequence_is_valid() {
        let pattern = Pattern::new("2.,3");
        assert!(pattern.tokens().is_empty());
    }

    #[rstest]
    #[case("2.,3%a%s")]
    #[case("0.,3%-%s%u")]
    #[case("4.,3%-%s%u")]
    #[case("2\u{66b}\u{66c}3%s\u{a0}%a")]
    #[case("2,.3%a\u{a0}%s")]
    #[case("2.,3%a %% %s")]
    #[case("2.,3%q%a")]
    #[case("2.,3")]
    #[case("3.,2%U %c")]
    #[case("2.,3%A of %S")]
    fn test_display_reproduces_source(#[case] source: &str) {
        assert_eq!(Pattern::new(source).to_string(), source);
    }

    #[rstest]
    #[case("", "pattern is empty")]
    #[case("2", "missing decimal separator slot")]
    #[case("2.", "missing grouping separator slot")]
    #[case("2.,", "missing grouping places slot")]
    #[case("x.,3%a", "decimal places slot must be a digit 0-9")]
    #[case("2.,x%a", "grouping places slot must be a digit 0-9")]
    #[case("2.,3%a%", "dangling `%` at end of pattern")]
    #[case("2.,3%", "dangling `%` at end of pattern")]
    fn test_new_checked_rejects_invalid(#[case] source: &str, #[case] reason: &str) {
        let message = Pattern::new_checked(source).unwrap_err().to_string();
        assert!(message.starts_with("invalid format pattern"));
        assert!(message.ends_with(reason));
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_panics_on_invalid() {
        let _ = Pattern::new("9.,");
    }

    #[rstest]
    fn test_debug() {
        let pattern = Pattern::new("2.,3%a%s");
        assert_eq!(format!("{pattern:?}"), "Pattern('2.,3%a%s')");
    }

    #[rstest]
    fn test_serde_round_trip() {
        let pattern = Pattern::new("2\u{66b}\u{66c}3%s\u{a0}%a");
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"2\u{66b}\u{66c}3%s\u{a0}%a\"");
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }

    #[rstest]
    fn test_serde_rejects_invalid_pattern() {
        let result: Result<Pattern, _> = serde_json::from_str("\"x.,3%a\"");
        assert!(result.is_err());
    }
}

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

//! Rendering of decimal amounts through compiled format patterns.
//!
//! The sign of a rendered amount is decided after rounding, so a value that
//! rounds to zero never carries a minus sign. Transliteration applies only
//! to amount digits and the minus sign; symbols, codes, and literal text
//! pass through untouched.

use rust_decimal::Decimal;

use crate::{
    context::context,
    numerals::NumeralSystem,
    pattern::{Pattern, Token},
};

/// The currency fields consulted during token substitution.
pub(crate) struct RenderConfig<'a> {
    pub symbol: &'a str,
    pub localized_symbol: &'a str,
    pub alpha_code: &'a str,
    pub numerals: Option<&'a NumeralSystem>,
    /// Substitute the localized symbol (when non-empty) wherever `%s`
    /// appears.
    pub prefer_localized_symbol: bool,
}

/// Renders `amount` through `pattern`, substituting the fields of `config`.
///
/// A `precision` override replaces the pattern's decimal place count;
/// negative overrides clamp to zero.
pub(crate) fn render(
    amount: Decimal,
    pattern: &Pattern,
    config: &RenderConfig<'_>,
    precision: Option<i32>,
) -> String {
    let dp = resolve_dp(precision, pattern.decimal_places());
    let rounded = context().round_dp(amount, dp);
    let negative = is_negative(rounded);
    let magnitude = magnitude_string(rounded, dp);

    let localized = |signed: bool| {
        let plain = assemble(
            &magnitude,
            signed && negative,
            pattern.decimal_separator(),
            pattern.grouping_separator(),
            pattern.grouping_places(),
        );
        match config.numerals {
            Some(numerals) => numerals.transliterate(&plain),
            None => plain,
        }
    };
    let western = |signed: bool| assemble(&magnitude, signed && negative, '.', ',', 3);

    let mut out = String::with_capacity(magnitude.len() + 16);
    for token in pattern.tokens() {
        match token {
            Token::Amount => out.push_str(&localized(true)),
            Token::AmountWestern => out.push_str(&western(true)),
            Token::AmountUnsigned => out.push_str(&localized(false)),
            Token::AmountUnsignedWestern => out.push_str(&western(false)),
            Token::Symbol => {
                if config.prefer_localized_symbol && !config.localized_symbol.is_empty() {
                    out.push_str(config.localized_symbol);
                } else {
                    out.push_str(config.symbol);
                }
            }
            Token::SymbolLocalized => out.push_str(config.localized_symbol),
            Token::AlphaCode => out.push_str(config.alpha_code),
            Token::Sign => {
                if negative {
                    out.push(config.numerals.map_or('-', NumeralSystem::minus_sign));
                }
            }
            Token::Literal(text) => out.push_str(text),
            Token::Unknown(directive) => {
                out.push('%');
                out.push(*directive);
            }
        }
    }
    out
}

/// Renders a signed amount in Western form: `.` decimal point and `,`
/// grouping in threes, ASCII digits.
pub(crate) fn western_amount(amount: Decimal, precision: Option<i32>, default_places: u8) -> String {
    let dp = resolve_dp(precision, default_places);
    let rounded = context().round_dp(amount, dp);
    assemble(
        &magnitude_string(rounded, dp),
        is_negative(rounded),
        '.',
        ',',
        3,
    )
}

/// Renders a signed amount with the pattern's separators and grouping but
/// no symbol, code, or transliteration.
pub(crate) fn pattern_amount(amount: Decimal, pattern: &Pattern, precision: Option<i32>) -> String {
    let dp = resolve_dp(precision, pattern.decimal_places());
    let rounded = context().round_dp(amount, dp);
    assemble(
        &magnitude_string(rounded, dp),
        is_negative(rounded),
        pattern.decimal_separator(),
        pattern.grouping_separator(),
        pattern.grouping_places(),
    )
}

fn resolve_dp(precision: Option<i32>, default_places: u8) -> u32 {
    precision.map_or(u32::from(default_places), |p| p.max(0) as u32)
}

fn is_negative(rounded: Decimal) -> bool {
    rounded.is_sign_negative() && !rounded.is_zero()
}

/// Returns the absolute value padded to exactly `dp` decimal places, with
/// no decimal point when `dp` is zero.
fn magnitude_string(rounded: Decimal, dp: u32) -> String {
    let mut magnitude = rounded.abs();
    magnitude.rescale(dp);
    magnitude.to_string()
}

fn assemble(
    magnitude: &str,
    negative: bool,
    decimal_separator: char,
    grouping_separator: char,
    grouping_places: u8,
) -> String {
    let (int_part, frac_part) = match magnitude.find('.') {
        Some(pos) => (&magnitude[..pos], Some(&magnitude[pos + 1..])),
        None => (magnitude, None),
    };

    let mut result = String::with_capacity(magnitude.len() + int_part.len() / 3 + 4);
    if negative {
        result.push('-');
    }
    result.push_str(&group_digits(int_part, grouping_places, grouping_separator));
    if let Some(frac) = frac_part {
        result.push(decimal_separator);
        result.push_str(frac);
    }
    result
}

fn group_digits(digits: &str, places: u8, separator: char) -> String {
    if places == 0 {
        return digits.to_string();
    }
    let places = usize::from(places);
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(chars.len() + chars.len() / places);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(places) {
            result.push(separator);
        }
        result.push(*c);
    }
    result
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::context::{DecimalContext, RoundingMode, with_context};

    fn plain_config<'a>() -> RenderConfig<'a> {
        RenderConfig {
            symbol: "$",
            localized_symbol: "US$",
            alpha_code: "USD",
            numerals: None,
            prefer_localized_symbol: false,
        }
    }

    #[rstest]
    #[case("0", 3, "0")]
    #[case("123", 3, "123")]
    #[case("1234", 3, "1,234")]
    #[case("1234567", 3, "1,234,567")]
    #[case("1234567", 2, "1,23,45,67")]
    #[case("1234567", 0, "1234567")]
    fn test_group_digits(#[case] digits: &str, #[case] places: u8, #[case] expected: &str) {
        assert_eq!(group_digits(digits, places, ','), expected);
    }

    #[rstest]
    #[case(dec!(1234.567), "1,234.57$")]
    #[case(dec!(0), "0.00$")]
    #[case(dec!(-1234.5), "-1,234.50$")]
    fn test_render_default_pattern(#[case] amount: Decimal, #[case] expected: &str) {
        let pattern = Pattern::new("2.,3%a%s");
        assert_eq!(render(amount, &pattern, &plain_config(), None), expected);
    }

    #[rstest]
    fn test_render_sign_symbol_unsigned_amount() {
        let pattern = Pattern::new("4.,3%-%s%u");
        let config = RenderConfig {
            symbol: "\u{3b5}",
            localized_symbol: "",
            alpha_code: "EOS",
            numerals: None,
            prefer_localized_symbol: false,
        };
        assert_eq!(render(dec!(3.14), &pattern, &config, None), "ε3.1400");
        assert_eq!(render(dec!(-3.14), &pattern, &config, None), "-ε3.1400");
    }

    #[rstest]
    fn test_render_zero_decimal_places_keeps_sign_and_grouping() {
        let pattern = Pattern::new("0.,3%-%s%u");
        let config = RenderConfig {
            symbol: "\u{20a9}",
            localized_symbol: "",
            alpha_code: "KRW",
            numerals: None,
            prefer_localized_symbol: false,
        };
        assert_eq!(render(dec!(-10), &pattern, &config, None), "-₩10");
        assert_eq!(render(dec!(1234567), &pattern, &config, None), "₩1,234,567");
    }

    #[rstest]
    fn test_render_transliterated_amount() {
        let pattern = Pattern::new("2\u{66b}\u{66c}3%s\u{a0}%a");
        let numerals = NumeralSystem::new("٠١٢٣٤٥٦٧٨٩-");
        let config = RenderConfig {
            symbol: "\u{62f}.\u{625}.",
            localized_symbol: "",
            alpha_code: "AED",
            numerals: Some(&numerals),
            prefer_localized_symbol: false,
        };
        assert_eq!(
            render(dec!(10), &pattern, &config, None),
            "د.إ.\u{a0}١٠٫٠٠",
        );
        assert_eq!(
            render(dec!(-1234.5), &pattern, &config, None),
            "د.إ.\u{a0}-١٬٢٣٤٫٥٠",
        );
    }

    #[rstest]
    fn test_render_sign_token_uses_table_glyph() {
        let pattern = Pattern::new("2.,3%-%u");
        let numerals = NumeralSystem::new("0123456789\u{2212}");
        let config = RenderConfig {
            symbol: "",
            localized_symbol: "",
            alpha_code: "XTS",
            numerals: Some(&numerals),
            prefer_localized_symbol: false,
        };
        assert_eq!(render(dec!(-5), &pattern, &config, None), "\u{2212}5.00");
    }

    #[rstest]
    fn test_render_negative_zero_is_unsigned() {
        let pattern = Pattern::new("2.,3%-%a%s");
        assert_eq!(
            render(dec!(-0.001), &pattern, &plain_config(), None),
            "0.00$",
        );
    }

    #[rstest]
    #[case(None, "1,234.57$")]
    #[case(Some(4), "1,234.5670$")]
    #[case(Some(0), "1,235$")]
    #[case(Some(-2), "1,235$")]
    fn test_render_precision_override(#[case] precision: Option<i32>, #[case] expected: &str) {
        let pattern = Pattern::new("2.,3%a%s");
        assert_eq!(
            render(dec!(1234.567), &pattern, &plain_config(), precision),
            expected,
        );
    }

    #[rstest]
    fn test_render_western_token_ignores_pattern_separators() {
        let pattern = Pattern::new("2,.3%A");
        assert_eq!(
            render(dec!(1234.5), &pattern, &plain_config(), None),
            "1,234.50",
        );
        let localized = Pattern::new("2,.3%a");
        assert_eq!(
            render(dec!(1234.5), &localized, &plain_config(), None),
            "1.234,50",
        );
    }

    #[rstest]
    fn test_render_literal_and_unknown_tokens() {
        let pattern = Pattern::new("2.,3%a %% %s");
        assert_eq!(
            render(dec!(1), &pattern, &plain_config(), None),
            "1.00 % $",
        );
        let unknown = Pattern::new("2.,3%q%a");
        assert_eq!(render(dec!(1), &unknown, &plain_config(), None), "%q1.00");
    }

    #[rstest]
    fn test_render_symbol_preference() {
        let pattern = Pattern::new("2.,3%s%a");
        let mut config = plain_config();
        config.prefer_localized_symbol = true;
        assert_eq!(render(dec!(1), &pattern, &config, None), "US$1.00");

        config.localized_symbol = "";
        assert_eq!(render(dec!(1), &pattern, &config, None), "$1.00");
    }

    #[rstest]
    fn test_render_localized_symbol_and_code_tokens() {
        let pattern = Pattern::new("2.,3%S %c");
        assert_eq!(
            render(dec!(2.5), &pattern, &plain_config(), None),
            "US$ USD",
        );
    }

    #[rstest]
    fn test_render_no_grouping() {
        let pattern = Pattern::new("2.,0%a");
        assert_eq!(
            render(dec!(1234567), &pattern, &plain_config(), None),
            "1234567.00",
        );
    }

    #[rstest]
    fn test_render_honors_context_rounding() {
        let pattern = Pattern::new("4.,3%a");
        let value = dec!(1) / dec!(7);
        let ceiling = with_context(DecimalContext::new(28, RoundingMode::Ceiling), || {
            render(value, &pattern, &plain_config(), None)
        });
        let floor = with_context(DecimalContext::new(28, RoundingMode::Floor), || {
            render(value, &pattern, &plain_config(), None)
        });
        assert_eq!(ceiling, "0.1429");
        assert_eq!(floor, "0.1428");
    }

    #[rstest]
    #[case(dec!(-1234.5), "-1,234.50")]
    #[case(dec!(0.125), "0.12")]
    fn test_western_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(western_amount(amount, None, 2), expected);
    }

    #[rstest]
    fn test_pattern_amount_uses_separators_without_symbols() {
        let pattern = Pattern::new("2,.3%a %s");
        assert_eq!(pattern_amount(dec!(-1234.5), &pattern, None), "-1.234,50");
        assert_eq!(pattern_amount(dec!(1234.5), &pattern, Some(0)), "1.235");
    }
}

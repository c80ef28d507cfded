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

//! The currency configuration record consulted by the renderer.

use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    currencies,
    numerals::NumeralSystem,
    pattern::Pattern,
    render::RenderConfig,
};

/// Represents a currency as the full rendering configuration for its
/// amounts.
///
/// Two currencies are equal when their alpha and numeric codes are equal;
/// symbols, numerals, and patterns do not participate in identity. The
/// component fields carrying validation ([`Pattern`], [`NumeralSystem`])
/// are already validated at construction, so the fields here are plain
/// data.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Currency {
    /// The three-letter alpha code identifying the currency.
    pub alpha_code: Ustr,
    /// The ISO-style numeric code, `"0"` for non-ISO currencies.
    pub numeric_code: Ustr,
    /// The currency symbol.
    pub symbol: Ustr,
    /// The localized currency symbol.
    pub localized_symbol: Ustr,
    /// The numeral table for localized digit transliteration.
    pub numerals: Option<NumeralSystem>,
    /// The format pattern applied when rendering amounts.
    pub pattern: Pattern,
}

impl Currency {
    /// Creates a new [`Currency`] instance with the specified configuration.
    #[must_use]
    pub fn new(
        alpha_code: &str,
        numeric_code: &str,
        symbol: &str,
        localized_symbol: &str,
        numerals: Option<NumeralSystem>,
        pattern: Pattern,
    ) -> Self {
        Self {
            alpha_code: Ustr::from(alpha_code),
            numeric_code: Ustr::from(numeric_code),
            symbol: Ustr::from(symbol),
            localized_symbol: Ustr::from(localized_symbol),
            numerals,
            pattern,
        }
    }

    /// Creates a new [`Currency`] instance from raw configuration strings
    /// with correctness checking.
    ///
    /// An empty `numerals` string configures no transliteration, and an
    /// empty `pattern` string selects
    /// [`DEFAULT_PATTERN`](crate::pattern::DEFAULT_PATTERN).
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty `numerals` string is not a valid
    /// table or a non-empty `pattern` string violates the grammar.
    pub fn new_checked(
        alpha_code: &str,
        numeric_code: &str,
        symbol: &str,
        localized_symbol: &str,
        numerals: &str,
        pattern: &str,
    ) -> anyhow::Result<Self> {
        let numerals = if numerals.is_empty() {
            None
        } else {
            Some(NumeralSystem::new_checked(numerals)?)
        };
        let pattern = if pattern.is_empty() {
            Pattern::default()
        } else {
            Pattern::new_checked(pattern)?
        };
        Ok(Self::new(
            alpha_code,
            numeric_code,
            symbol,
            localized_symbol,
            numerals,
            pattern,
        ))
    }

    /// Returns a [`CurrencyBuilder`] for `alpha_code` with every other field
    /// at its default.
    #[must_use]
    pub fn builder(alpha_code: &str) -> CurrencyBuilder {
        CurrencyBuilder::new(alpha_code)
    }

    /// Returns the registered currency for `code`.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is not present in the currency registry.
    pub fn from_code<T: AsRef<str>>(code: T) -> anyhow::Result<Self> {
        currencies::get(code.as_ref())
    }

    /// Registers `currency` in the process-wide registry, keyed by its alpha
    /// code.
    ///
    /// Returns `true` if the currency was inserted, `false` if an entry
    /// already existed and `overwrite` was `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry lock is poisoned.
    pub fn register(currency: Self, overwrite: bool) -> anyhow::Result<bool> {
        currencies::register(currency, overwrite)
    }

    /// Returns whether this currency carries a real ISO-style numeric code.
    #[must_use]
    pub fn is_fiat(&self) -> bool {
        !self.is_crypto()
    }

    /// Returns whether this currency is a non-ISO (crypto) currency, marked
    /// by the numeric code `"0"`.
    #[must_use]
    pub fn is_crypto(&self) -> bool {
        self.numeric_code == "0"
    }

    pub(crate) fn render_config(&self, prefer_localized_symbol: bool) -> RenderConfig<'_> {
        RenderConfig {
            symbol: self.symbol.as_str(),
            localized_symbol: self.localized_symbol.as_str(),
            alpha_code: self.alpha_code.as_str(),
            numerals: self.numerals.as_ref(),
            prefer_localized_symbol,
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.alpha_code == other.alpha_code && self.numeric_code == other.numeric_code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alpha_code.hash(state);
        self.numeric_code.hash(state);
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.alpha_code)
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// An incremental builder for custom [`Currency`] configurations.
///
/// Every field other than the alpha code starts at the default the
/// construction contract specifies: numeric code `"0"`, empty symbols, no
/// numeral table, and the default pattern.
#[derive(Clone, Debug)]
pub struct CurrencyBuilder {
    alpha_code: Ustr,
    numeric_code: Ustr,
    symbol: Ustr,
    localized_symbol: Ustr,
    numerals: Option<NumeralSystem>,
    pattern: Pattern,
}

impl CurrencyBuilder {
    /// Creates a new [`CurrencyBuilder`] instance for `alpha_code`.
    #[must_use]
    pub fn new(alpha_code: &str) -> Self {
        Self {
            alpha_code: Ustr::from(alpha_code),
            numeric_code: Ustr::from("0"),
            symbol: Ustr::from(""),
            localized_symbol: Ustr::from(""),
            numerals: None,
            pattern: Pattern::default(),
        }
    }

    /// Sets the numeric code.
    #[must_use]
    pub fn numeric_code(mut self, numeric_code: &str) -> Self {
        self.numeric_code = Ustr::from(numeric_code);
        self
    }

    /// Sets the currency symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Ustr::from(symbol);
        self
    }

    /// Sets the localized currency symbol.
    #[must_use]
    pub fn localized_symbol(mut self, localized_symbol: &str) -> Self {
        self.localized_symbol = Ustr::from(localized_symbol);
        self
    }

    /// Sets the numeral table.
    #[must_use]
    pub fn numerals(mut self, numerals: NumeralSystem) -> Self {
        self.numerals = Some(numerals);
        self
    }

    /// Sets the format pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Builds the [`Currency`].
    #[must_use]
    pub fn build(self) -> Currency {
        Currency {
            alpha_code: self.alpha_code,
            numeric_code: self.numeric_code,
            symbol: self.symbol,
            localized_symbol: self.localized_symbol,
            numerals: self.numerals,
            pattern: self.pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use rstest::rstest;

    use super::*;

    fn hash_of(currency: &Currency) -> u64 {
        let mut hasher = DefaultHasher::new();
        currency.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_builder_defaults() {
        let currency = Currency::builder("XTS").build();
        assert_eq!(currency.alpha_code, "XTS");
        assert_eq!(currency.numeric_code, "0");
        assert_eq!(currency.symbol, "");
        assert_eq!(currency.localized_symbol, "");
        assert!(currency.numerals.is_none());
        assert_eq!(currency.pattern, Pattern::default());
    }

    #[rstest]
    fn test_builder_sets_all_fields() {
        let currency = Currency::builder("ZZT")
            .numeric_code("999")
            .symbol("z")
            .localized_symbol("Zz")
            .numerals(NumeralSystem::new("0123456789-"))
            .pattern(Pattern::new("3,.3%a %s"))
            .build();
        assert_eq!(currency.numeric_code, "999");
        assert_eq!(currency.symbol, "z");
        assert_eq!(currency.localized_symbol, "Zz");
        assert!(currency.numerals.is_some());
        assert_eq!(currency.pattern.decimal_places(), 3);
    }

    #[rstest]
    fn test_new_checked_parses_configuration_strings() {
        let currency =
            Currency::new_checked("AED", "784", "د.إ.", "", "٠١٢٣٤٥٦٧٨٩-", "2\u{66b}\u{66c}3%s\u{a0}%a")
                .unwrap();
        assert!(currency.numerals.is_some());
        assert_eq!(currency.pattern.decimal_separator(), '\u{66b}');
    }

    #[rstest]
    fn test_new_checked_empty_strings_select_defaults() {
        let currency = Currency::new_checked("XTS", "963", "", "", "", "").unwrap();
        assert!(currency.numerals.is_none());
        assert_eq!(currency.pattern, Pattern::default());
    }

    #[rstest]
    #[case("0123", "")] // short numeral table
    #[case("", "x.,3%a")] // bad decimal places slot
    #[case("", "2.,3%a%")] // dangling directive
    fn test_new_checked_rejects_malformed_configuration(
        #[case] numerals: &str,
        #[case] pattern: &str,
    ) {
        let result = Currency::new_checked("XTS", "963", "", "", numerals, pattern);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_equality_is_over_codes_only() {
        let a = Currency::new("EUR", "978", "€", "", None, Pattern::default());
        let b = Currency::new("EUR", "978", "EUR€", "X€", None, Pattern::new("0.,0%a"));
        let c = Currency::new("EUR", "999", "€", "", None, Pattern::default());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[rstest]
    fn test_is_crypto_follows_numeric_code() {
        let fiat = Currency::new("USD", "840", "$", "US$", None, Pattern::default());
        let crypto = Currency::builder("BTC").symbol("₿").build();
        assert!(fiat.is_fiat());
        assert!(!fiat.is_crypto());
        assert!(crypto.is_crypto());
    }

    #[rstest]
    fn test_display_is_alpha_code() {
        let currency = Currency::builder("ETH").build();
        assert_eq!(currency.to_string(), "ETH");
    }

    #[rstest]
    fn test_serde_round_trip_preserves_configuration() {
        let currency = Currency::new(
            "AED",
            "784",
            "د.إ.",
            "",
            Some(NumeralSystem::new("٠١٢٣٤٥٦٧٨٩-")),
            Pattern::new("2\u{66b}\u{66c}3%s\u{a0}%a"),
        );
        let json = serde_json::to_string(&currency).unwrap();
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, currency);
        assert_eq!(back.symbol, currency.symbol);
        assert_eq!(back.numerals, currency.numerals);
        assert_eq!(back.pattern, currency.pattern);
    }

    #[rstest]
    fn test_from_code_unknown_is_an_error() {
        let result = Currency::from_code("ZZZZZZ");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("unknown currency code")
        );
    }

    #[rstest]
    fn test_register_and_from_code() {
        let custom = Currency::builder("ZZC").symbol("z").build();
        assert!(Currency::register(custom.clone(), false).unwrap());
        let found = Currency::from_code("ZZC").unwrap();
        assert_eq!(found, custom);

        let shadow = Currency::builder("ZZC").numeric_code("998").build();
        assert!(!Currency::register(shadow.clone(), false).unwrap());
        assert_eq!(Currency::from_code("ZZC").unwrap().numeric_code, "0");

        assert!(Currency::register(shadow, true).unwrap());
        assert_eq!(Currency::from_code("ZZC").unwrap().numeric_code, "998");
    }

    #[rstest]
    fn test_from_str_reads_registry() {
        let currency = Currency::from_str("EUR").unwrap();
        assert_eq!(currency.alpha_code, "EUR");
        assert_eq!(currency.numeric_code, "978");
    }
}

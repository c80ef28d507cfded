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

//! Built-in currency configurations and the process-wide registry.
//!
//! Each region module declares its currencies as lazily constructed
//! statics; all of them are re-exported here. The registry starts seeded
//! with every built-in currency and accepts custom registrations through
//! [`Currency::register`].

use std::sync::{LazyLock, Mutex};

use ahash::RandomState;
use indexmap::IndexMap;
use ustr::Ustr;

use crate::{currency::Currency, errors::MonetaryError, numerals::NumeralSystem, pattern::Pattern};

pub mod africa;
pub mod america;
pub mod asia;
pub mod crypto;
pub mod europe;
pub mod oceania;

pub use africa::*;
pub use america::*;
pub use asia::*;
pub use crypto::*;
pub use europe::*;
pub use oceania::*;

/// Eastern Arabic digit glyphs.
pub(crate) const ARABIC_NUMERALS: &str = "٠١٢٣٤٥٦٧٨٩-";
/// Extended Arabic (Persian) digit glyphs.
pub(crate) const PERSIAN_NUMERALS: &str = "۰۱۲۳۴۵۶۷۸۹-";
/// Bengali digit glyphs.
pub(crate) const BENGALI_NUMERALS: &str = "০১২৩৪৫৬৭৮৯-";
/// Devanagari digit glyphs.
pub(crate) const DEVANAGARI_NUMERALS: &str = "०१२३४५६७८९-";

/// Builds a catalog entry; the data tables only hold valid patterns and
/// numeral tables, so construction panics would mean corrupt data.
pub(crate) fn config(
    alpha_code: &str,
    numeric_code: &str,
    symbol: &str,
    localized_symbol: &str,
    numerals: Option<&str>,
    pattern: &str,
) -> Currency {
    Currency::new(
        alpha_code,
        numeric_code,
        symbol,
        localized_symbol,
        numerals.map(NumeralSystem::new),
        Pattern::new(pattern),
    )
}

static CURRENCY_MAP: LazyLock<Mutex<IndexMap<Ustr, Currency, RandomState>>> =
    LazyLock::new(|| {
        let builtin = builtin();
        let mut map = IndexMap::with_capacity_and_hasher(builtin.len(), RandomState::default());
        for currency in builtin {
            map.insert(currency.alpha_code, currency);
        }
        Mutex::new(map)
    });

fn builtin() -> Vec<Currency> {
    let mut currencies = Vec::with_capacity(192);
    currencies.extend(africa::currencies());
    currencies.extend(america::currencies());
    currencies.extend(asia::currencies());
    currencies.extend(europe::currencies());
    currencies.extend(oceania::currencies());
    currencies.extend(crypto::currencies());
    currencies
}

pub(crate) fn get(code: &str) -> anyhow::Result<Currency> {
    let map = CURRENCY_MAP
        .lock()
        .map_err(|e| anyhow::anyhow!("failed to acquire currency registry lock: {e}"))?;
    map.get(&Ustr::from(code))
        .cloned()
        .ok_or_else(|| MonetaryError::UnknownCurrency(Ustr::from(code)).into())
}

pub(crate) fn register(currency: Currency, overwrite: bool) -> anyhow::Result<bool> {
    let mut map = CURRENCY_MAP
        .lock()
        .map_err(|e| anyhow::anyhow!("failed to acquire currency registry lock: {e}"))?;
    if !overwrite && map.contains_key(&currency.alpha_code) {
        log::warn!(
            "Currency `{}` already registered, skipping",
            currency.alpha_code,
        );
        return Ok(false);
    }
    log::debug!("Registering currency `{}`", currency.alpha_code);
    map.insert(currency.alpha_code, currency);
    Ok(true)
}

/// Returns a snapshot of every registered currency in registration order.
///
/// # Errors
///
/// Returns an error if the registry lock is poisoned.
pub fn all() -> anyhow::Result<Vec<Currency>> {
    let map = CURRENCY_MAP
        .lock()
        .map_err(|e| anyhow::anyhow!("failed to acquire currency registry lock: {e}"))?;
    Ok(map.values().cloned().collect())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::money::Money;

    #[rstest]
    fn test_builtin_codes_are_unique() {
        let builtin = builtin();
        let codes: std::collections::HashSet<Ustr> =
            builtin.iter().map(|c| c.alpha_code).collect();
        assert_eq!(codes.len(), builtin.len());
        assert!(builtin.len() >= 150);
    }

    #[rstest]
    fn test_every_builtin_resolves_from_code() {
        for currency in builtin() {
            let found = Currency::from_code(currency.alpha_code.as_str()).unwrap();
            assert_eq!(found, currency);
        }
    }

    #[rstest]
    fn test_numeric_codes_are_digit_strings() {
        for currency in builtin() {
            assert!(
                currency.numeric_code.chars().all(|c| c.is_ascii_digit()),
                "bad numeric code for {}",
                currency.alpha_code,
            );
        }
    }

    #[rstest]
    fn test_crypto_currencies_use_zero_numeric_code() {
        for currency in crypto::currencies() {
            assert!(currency.is_crypto(), "{} should be crypto", currency.alpha_code);
        }
        assert!(USD.is_fiat());
    }

    #[rstest]
    fn test_every_builtin_renders_an_amount() {
        for currency in builtin() {
            let money = Money::new(dec!(-1234.5), currency.clone());
            let rendered = money.to_string();
            assert!(!rendered.is_empty(), "{} rendered empty", currency.alpha_code);
        }
    }

    #[rstest]
    #[case(&USD, "840", "$", "US$")]
    #[case(&CAD, "124", "$", "CA$")]
    #[case(&EUR, "978", "€", "")]
    #[case(&KRW, "410", "₩", "")]
    #[case(&AED, "784", "د.إ.", "")]
    #[case(&JPY, "392", "¥", "")]
    #[case(&GBP, "826", "£", "")]
    #[case(&BTC, "0", "₿", "")]
    #[case(&EOS, "0", "ε", "")]
    fn test_pinned_configurations(
        #[case] currency: &Currency,
        #[case] numeric: &str,
        #[case] symbol: &str,
        #[case] localized: &str,
    ) {
        assert_eq!(currency.numeric_code, numeric);
        assert_eq!(currency.symbol, symbol);
        assert_eq!(currency.localized_symbol, localized);
    }

    #[rstest]
    fn test_pinned_decimal_places() {
        assert_eq!(KRW.pattern.decimal_places(), 0);
        assert_eq!(JPY.pattern.decimal_places(), 0);
        assert_eq!(BHD.pattern.decimal_places(), 3);
        assert_eq!(EOS.pattern.decimal_places(), 4);
        assert_eq!(BTC.pattern.decimal_places(), 8);
        assert_eq!(ETH.pattern.decimal_places(), 9);
        assert_eq!(USD.pattern.decimal_places(), 2);
    }

    #[rstest]
    fn test_all_snapshot_contains_builtin() {
        let snapshot = all().unwrap();
        assert!(snapshot.len() >= 150);
        assert!(snapshot.iter().any(|c| c.alpha_code == "USD"));
        assert!(snapshot.iter().any(|c| c.alpha_code == "XTZ"));
    }
}

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

//! European currency configurations.

use std::sync::LazyLock;

use super::config;
use crate::currency::Currency;

/// Euro.
pub static EUR: LazyLock<Currency> =
    LazyLock::new(|| config("EUR", "978", "€", "", None, "2,.3%a\u{a0}%s"));

/// Albanian Lek.
pub static ALL: LazyLock<Currency> =
    LazyLock::new(|| config("ALL", "008", "L", "", None, "2,.3%a\u{a0}%s"));

/// Bosnian Convertible Mark.
pub static BAM: LazyLock<Currency> =
    LazyLock::new(|| config("BAM", "977", "КМ", "", None, "2,.3%a\u{a0}%s"));

/// Bulgarian Lev.
pub static BGN: LazyLock<Currency> =
    LazyLock::new(|| config("BGN", "975", "лв", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Belarusian Ruble.
pub static BYN: LazyLock<Currency> =
    LazyLock::new(|| config("BYN", "933", "Br", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Swiss Franc, grouped with apostrophes.
pub static CHF: LazyLock<Currency> =
    LazyLock::new(|| config("CHF", "756", "₣", "", None, "2.'3%-%s\u{a0}%u"));

/// Czech Koruna.
pub static CZK: LazyLock<Currency> =
    LazyLock::new(|| config("CZK", "203", "Kč", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Danish Krone.
pub static DKK: LazyLock<Currency> =
    LazyLock::new(|| config("DKK", "208", "kr", "", None, "2,.3%s\u{a0}%a"));

/// Pound Sterling.
pub static GBP: LazyLock<Currency> =
    LazyLock::new(|| config("GBP", "826", "£", "", None, "2.,3%-%s%u"));

/// Gibraltar Pound.
pub static GIP: LazyLock<Currency> =
    LazyLock::new(|| config("GIP", "292", "£", "GI£", None, "2.,3%-%s%u"));

/// Hungarian Forint.
pub static HUF: LazyLock<Currency> =
    LazyLock::new(|| config("HUF", "348", "Ft", "", None, "0,\u{202f}3%a\u{a0}%s"));

/// Iceland Krona.
pub static ISK: LazyLock<Currency> =
    LazyLock::new(|| config("ISK", "352", "Kr", "", None, "0,.3%a\u{a0}%s"));

/// Moldovan Leu.
pub static MDL: LazyLock<Currency> =
    LazyLock::new(|| config("MDL", "498", "L", "", None, "2,.3%a\u{a0}%s"));

/// Macedonian Denar.
pub static MKD: LazyLock<Currency> =
    LazyLock::new(|| config("MKD", "807", "ден", "", None, "2,.3%a\u{a0}%s"));

/// Norwegian Krone.
pub static NOK: LazyLock<Currency> =
    LazyLock::new(|| config("NOK", "578", "kr", "", None, "2,\u{202f}3%s\u{a0}%a"));

/// Polish Zloty.
pub static PLN: LazyLock<Currency> =
    LazyLock::new(|| config("PLN", "985", "zł", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Romanian Leu.
pub static RON: LazyLock<Currency> =
    LazyLock::new(|| config("RON", "946", "L", "", None, "2,.3%a\u{a0}%s"));

/// Serbian Dinar.
pub static RSD: LazyLock<Currency> =
    LazyLock::new(|| config("RSD", "941", "din", "", None, "2,.3%a\u{a0}%s"));

/// Russian Ruble.
pub static RUB: LazyLock<Currency> =
    LazyLock::new(|| config("RUB", "643", "₽", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Swedish Krona.
pub static SEK: LazyLock<Currency> =
    LazyLock::new(|| config("SEK", "752", "kr", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Ukrainian Hryvnia.
pub static UAH: LazyLock<Currency> =
    LazyLock::new(|| config("UAH", "980", "₴", "", None, "2,\u{202f}3%a\u{a0}%s"));

pub(crate) fn currencies() -> Vec<Currency> {
    vec![
        EUR.clone(),
        ALL.clone(),
        BAM.clone(),
        BGN.clone(),
        BYN.clone(),
        CHF.clone(),
        CZK.clone(),
        DKK.clone(),
        GBP.clone(),
        GIP.clone(),
        HUF.clone(),
        ISK.clone(),
        MDL.clone(),
        MKD.clone(),
        NOK.clone(),
        PLN.clone(),
        RON.clone(),
        RSD.clone(),
        RUB.clone(),
        SEK.clone(),
        UAH.clone(),
    ]
}

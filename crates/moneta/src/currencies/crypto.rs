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

//! Cryptocurrency configurations.
//!
//! Crypto currencies carry the numeric code `"0"` since they have no ISO
//! assignment.

use std::sync::LazyLock;

use super::config;
use crate::currency::Currency;

/// Bitcoin.
pub static BTC: LazyLock<Currency> =
    LazyLock::new(|| config("BTC", "0", "₿", "", None, "8.,3%-%s%u"));

/// Ethereum Ether.
pub static ETH: LazyLock<Currency> =
    LazyLock::new(|| config("ETH", "0", "Ξ", "", None, "9.,3%-%s%u"));

/// EOS.
pub static EOS: LazyLock<Currency> =
    LazyLock::new(|| config("EOS", "0", "ε", "", None, "4.,3%-%s%u"));

/// Monero.
pub static XMR: LazyLock<Currency> =
    LazyLock::new(|| config("XMR", "0", "ɱ", "", None, "9.,3%-%s%u"));

/// Ripple XRP.
pub static XRP: LazyLock<Currency> =
    LazyLock::new(|| config("XRP", "0", "✕", "", None, "6.,3%-%s%u"));

/// Stellar Lumen.
pub static XLM: LazyLock<Currency> =
    LazyLock::new(|| config("XLM", "0", "*", "", None, "7.,3%-%s%u"));

/// Tezos.
pub static XTZ: LazyLock<Currency> =
    LazyLock::new(|| config("XTZ", "0", "ꜩ", "", None, "6.,3%-%s%u"));

/// Zcash.
pub static ZEC: LazyLock<Currency> =
    LazyLock::new(|| config("ZEC", "0", "ⓩ", "", None, "8.,3%-%s%u"));

/// Cardano Ada.
pub static ADA: LazyLock<Currency> =
    LazyLock::new(|| config("ADA", "0", "₳", "", None, "6.,3%-%s%u"));

/// Dogecoin.
pub static DOGE: LazyLock<Currency> =
    LazyLock::new(|| config("DOGE", "0", "Ð", "", None, "8.,3%-%s%u"));

pub(crate) fn currencies() -> Vec<Currency> {
    vec![
        BTC.clone(),
        ETH.clone(),
        EOS.clone(),
        XMR.clone(),
        XRP.clone(),
        XLM.clone(),
        XTZ.clone(),
        ZEC.clone(),
        ADA.clone(),
        DOGE.clone(),
    ]
}

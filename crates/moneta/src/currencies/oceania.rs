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

//! Oceanian currency configurations.

use std::sync::LazyLock;

use super::config;
use crate::currency::Currency;

/// Australian Dollar.
pub static AUD: LazyLock<Currency> =
    LazyLock::new(|| config("AUD", "036", "$", "AU$", None, "2.,3%-%s%u"));

/// New Zealand Dollar.
pub static NZD: LazyLock<Currency> =
    LazyLock::new(|| config("NZD", "554", "$", "NZ$", None, "2.,3%-%s%u"));

/// Fiji Dollar.
pub static FJD: LazyLock<Currency> =
    LazyLock::new(|| config("FJD", "242", "$", "FJ$", None, "2.,3%-%s%u"));

/// Papua New Guinean Kina.
pub static PGK: LazyLock<Currency> =
    LazyLock::new(|| config("PGK", "598", "K", "", None, "2.,3%-%s%u"));

/// Solomon Islands Dollar.
pub static SBD: LazyLock<Currency> =
    LazyLock::new(|| config("SBD", "090", "$", "SB$", None, "2.,3%-%s%u"));

/// Tongan Pa'anga.
pub static TOP: LazyLock<Currency> =
    LazyLock::new(|| config("TOP", "776", "T$", "", None, "2.,3%-%s%u"));

/// Vanuatu Vatu.
pub static VUV: LazyLock<Currency> =
    LazyLock::new(|| config("VUV", "548", "Vt", "", None, "0.,3%u\u{a0}%s"));

/// Samoan Tala.
pub static WST: LazyLock<Currency> =
    LazyLock::new(|| config("WST", "882", "T", "", None, "2.,3%-%s%u"));

pub(crate) fn currencies() -> Vec<Currency> {
    vec![
        AUD.clone(),
        NZD.clone(),
        FJD.clone(),
        PGK.clone(),
        SBD.clone(),
        TOP.clone(),
        VUV.clone(),
        WST.clone(),
    ]
}

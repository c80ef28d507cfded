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

//! American currency configurations.

use std::sync::LazyLock;

use super::config;
use crate::currency::Currency;

/// US Dollar.
pub static USD: LazyLock<Currency> =
    LazyLock::new(|| config("USD", "840", "$", "US$", None, "2.,3%-%s%u"));

/// Canadian Dollar.
pub static CAD: LazyLock<Currency> =
    LazyLock::new(|| config("CAD", "124", "$", "CA$", None, "2.,3%-%s%u"));

/// Mexican Peso.
pub static MXN: LazyLock<Currency> =
    LazyLock::new(|| config("MXN", "484", "$", "Mex$", None, "2.,3%-%s%u"));

/// Brazilian Real.
pub static BRL: LazyLock<Currency> =
    LazyLock::new(|| config("BRL", "986", "R$", "", None, "2,.3%-%s\u{a0}%u"));

/// Argentine Peso.
pub static ARS: LazyLock<Currency> =
    LazyLock::new(|| config("ARS", "032", "$", "AR$", None, "2,.3%-%s\u{a0}%u"));

/// Boliviano.
pub static BOB: LazyLock<Currency> =
    LazyLock::new(|| config("BOB", "068", "Bs.", "", None, "2,.3%-%s\u{a0}%u"));

/// Barbados Dollar.
pub static BBD: LazyLock<Currency> =
    LazyLock::new(|| config("BBD", "052", "$", "BB$", None, "2.,3%-%s%u"));

/// Bahamian Dollar.
pub static BSD: LazyLock<Currency> =
    LazyLock::new(|| config("BSD", "044", "$", "BS$", None, "2.,3%-%s%u"));

/// Belize Dollar.
pub static BZD: LazyLock<Currency> =
    LazyLock::new(|| config("BZD", "084", "$", "BZ$", None, "2.,3%-%s%u"));

/// Chilean Peso.
pub static CLP: LazyLock<Currency> =
    LazyLock::new(|| config("CLP", "152", "$", "CL$", None, "0,.3%-%s%u"));

/// Colombian Peso.
pub static COP: LazyLock<Currency> =
    LazyLock::new(|| config("COP", "170", "$", "CO$", None, "2,.3%-%s%u"));

/// Costa Rican Colon.
pub static CRC: LazyLock<Currency> =
    LazyLock::new(|| config("CRC", "188", "₡", "", None, "2,.3%-%s%u"));

/// Cuban Peso.
pub static CUP: LazyLock<Currency> =
    LazyLock::new(|| config("CUP", "192", "$", "CU$", None, "2.,3%-%s%u"));

/// Dominican Peso.
pub static DOP: LazyLock<Currency> =
    LazyLock::new(|| config("DOP", "214", "$", "RD$", None, "2.,3%-%s%u"));

/// East Caribbean Dollar.
pub static XCD: LazyLock<Currency> =
    LazyLock::new(|| config("XCD", "951", "$", "EC$", None, "2.,3%-%s%u"));

/// Guatemalan Quetzal.
pub static GTQ: LazyLock<Currency> =
    LazyLock::new(|| config("GTQ", "320", "Q", "", None, "2.,3%-%s%u"));

/// Guyana Dollar.
pub static GYD: LazyLock<Currency> =
    LazyLock::new(|| config("GYD", "328", "$", "GY$", None, "2.,3%-%s%u"));

/// Haitian Gourde.
pub static HTG: LazyLock<Currency> =
    LazyLock::new(|| config("HTG", "332", "G", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Honduran Lempira.
pub static HNL: LazyLock<Currency> =
    LazyLock::new(|| config("HNL", "340", "L", "", None, "2.,3%-%s%u"));

/// Jamaican Dollar.
pub static JMD: LazyLock<Currency> =
    LazyLock::new(|| config("JMD", "388", "$", "J$", None, "2.,3%-%s%u"));

/// Nicaraguan Cordoba Oro.
pub static NIO: LazyLock<Currency> =
    LazyLock::new(|| config("NIO", "558", "C$", "", None, "2.,3%-%s%u"));

/// Panamanian Balboa.
pub static PAB: LazyLock<Currency> =
    LazyLock::new(|| config("PAB", "590", "B/.", "", None, "2.,3%-%s%u"));

/// Peruvian Sol.
pub static PEN: LazyLock<Currency> =
    LazyLock::new(|| config("PEN", "604", "S/.", "", None, "2.,3%-%s\u{a0}%u"));

/// Paraguayan Guarani.
pub static PYG: LazyLock<Currency> =
    LazyLock::new(|| config("PYG", "600", "₲", "", None, "0,.3%-%s\u{a0}%u"));

/// Surinam Dollar.
pub static SRD: LazyLock<Currency> =
    LazyLock::new(|| config("SRD", "968", "$", "SR$", None, "2,.3%-%s%u"));

/// Trinidad and Tobago Dollar.
pub static TTD: LazyLock<Currency> =
    LazyLock::new(|| config("TTD", "780", "$", "TT$", None, "2.,3%-%s%u"));

/// Peso Uruguayo.
pub static UYU: LazyLock<Currency> =
    LazyLock::new(|| config("UYU", "858", "$", "$U", None, "2,.3%-%s\u{a0}%u"));

/// Venezuelan Bolívar Soberano.
pub static VES: LazyLock<Currency> =
    LazyLock::new(|| config("VES", "928", "Bs.", "", None, "2,.3%-%s\u{a0}%u"));

pub(crate) fn currencies() -> Vec<Currency> {
    vec![
        USD.clone(),
        CAD.clone(),
        MXN.clone(),
        BRL.clone(),
        ARS.clone(),
        BOB.clone(),
        BBD.clone(),
        BSD.clone(),
        BZD.clone(),
        CLP.clone(),
        COP.clone(),
        CRC.clone(),
        CUP.clone(),
        DOP.clone(),
        XCD.clone(),
        GTQ.clone(),
        GYD.clone(),
        HTG.clone(),
        HNL.clone(),
        JMD.clone(),
        NIO.clone(),
        PAB.clone(),
        PEN.clone(),
        PYG.clone(),
        SRD.clone(),
        TTD.clone(),
        UYU.clone(),
        VES.clone(),
    ]
}

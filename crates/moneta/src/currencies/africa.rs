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

//! African currency configurations.

use std::sync::LazyLock;

use super::{ARABIC_NUMERALS, config};
use crate::currency::Currency;

/// Algerian Dinar.
pub static DZD: LazyLock<Currency> = LazyLock::new(|| {
    config("DZD", "012", "د.ج.", "", Some(ARABIC_NUMERALS), "2٫٬3%s\u{a0}%a")
});

/// Angolan Kwanza.
pub static AOA: LazyLock<Currency> =
    LazyLock::new(|| config("AOA", "973", "Kz", "", None, "2.,3%-%s%u"));

/// Botswana Pula.
pub static BWP: LazyLock<Currency> =
    LazyLock::new(|| config("BWP", "072", "P", "", None, "2.,3%-%s%u"));

/// Burundi Franc.
pub static BIF: LazyLock<Currency> =
    LazyLock::new(|| config("BIF", "108", "₣", "", None, "0,.3%a\u{a0}%s"));

/// Cabo Verde Escudo, rendered with the symbol in the decimal position.
pub static CVE: LazyLock<Currency> =
    LazyLock::new(|| config("CVE", "132", "$", "", None, "2$\u{202f}3%a"));

/// Congolese Franc.
pub static CDF: LazyLock<Currency> =
    LazyLock::new(|| config("CDF", "976", "₣", "", None, "2,.3%a\u{a0}%s"));

/// Djibouti Franc.
pub static DJF: LazyLock<Currency> =
    LazyLock::new(|| config("DJF", "262", "₣", "", None, "0,.3%a\u{a0}%s"));

/// Egyptian Pound.
pub static EGP: LazyLock<Currency> = LazyLock::new(|| {
    config("EGP", "818", "ج.م.", "", Some(ARABIC_NUMERALS), "2٫٬3%s\u{a0}%a")
});

/// Eritrean Nakfa.
pub static ERN: LazyLock<Currency> =
    LazyLock::new(|| config("ERN", "232", "Nfk", "", None, "2.,3%-%s\u{a0}%u"));

/// Swazi Lilangeni.
pub static SZL: LazyLock<Currency> =
    LazyLock::new(|| config("SZL", "748", "L", "", None, "2.,3%-%s%u"));

/// Ethiopian Birr.
pub static ETB: LazyLock<Currency> =
    LazyLock::new(|| config("ETB", "230", "ብር", "", None, "2.,3%-%s%u"));

/// Gambian Dalasi.
pub static GMD: LazyLock<Currency> =
    LazyLock::new(|| config("GMD", "270", "D", "", None, "2.,3%-%s%u"));

/// Ghana Cedi.
pub static GHS: LazyLock<Currency> =
    LazyLock::new(|| config("GHS", "936", "₵", "GH₵", None, "2.,3%-%s%u"));

/// Guinean Franc.
pub static GNF: LazyLock<Currency> =
    LazyLock::new(|| config("GNF", "324", "₣", "", None, "0,.3%a\u{a0}%s"));

/// Kenyan Shilling.
pub static KES: LazyLock<Currency> =
    LazyLock::new(|| config("KES", "404", "Ksh", "", None, "2.,3%-%s%u"));

/// Comorian Franc.
pub static KMF: LazyLock<Currency> =
    LazyLock::new(|| config("KMF", "174", "₣", "", None, "0,.3%a\u{a0}%s"));

/// Lesotho Loti.
pub static LSL: LazyLock<Currency> =
    LazyLock::new(|| config("LSL", "426", "L", "", None, "2.,3%-%s%u"));

/// Liberian Dollar.
pub static LRD: LazyLock<Currency> =
    LazyLock::new(|| config("LRD", "430", "$", "L$", None, "2.,3%-%s%u"));

/// Libyan Dinar.
pub static LYD: LazyLock<Currency> = LazyLock::new(|| {
    config("LYD", "434", "د.ل.", "", Some(ARABIC_NUMERALS), "3٫٬3%s\u{a0}%a")
});

/// Malagasy Ariary.
pub static MGA: LazyLock<Currency> =
    LazyLock::new(|| config("MGA", "969", "Ar", "", None, "0,\u{202f}3%a\u{a0}%s"));

/// Malawi Kwacha.
pub static MWK: LazyLock<Currency> =
    LazyLock::new(|| config("MWK", "454", "MK", "", None, "2.,3%-%s%u"));

/// Mauritius Rupee.
pub static MUR: LazyLock<Currency> =
    LazyLock::new(|| config("MUR", "480", "₨", "", None, "2.,3%-%s%u"));

/// Moroccan Dirham.
pub static MAD: LazyLock<Currency> = LazyLock::new(|| {
    config("MAD", "504", "د.م.", "", Some(ARABIC_NUMERALS), "2٫٬3%s\u{a0}%a")
});

/// Mozambique Metical.
pub static MZN: LazyLock<Currency> =
    LazyLock::new(|| config("MZN", "943", "MTn", "", None, "2,.3%-%s%u"));

/// Namibia Dollar.
pub static NAD: LazyLock<Currency> =
    LazyLock::new(|| config("NAD", "516", "$", "N$", None, "2.,3%-%s%u"));

/// Nigerian Naira.
pub static NGN: LazyLock<Currency> =
    LazyLock::new(|| config("NGN", "566", "₦", "", None, "2.,3%-%s%u"));

/// Rwanda Franc.
pub static RWF: LazyLock<Currency> =
    LazyLock::new(|| config("RWF", "646", "₣", "", None, "0,.3%a\u{a0}%s"));

/// Seychelles Rupee.
pub static SCR: LazyLock<Currency> =
    LazyLock::new(|| config("SCR", "690", "₨", "", None, "2.,3%-%s%u"));

/// Sierra Leonean Leone.
pub static SLE: LazyLock<Currency> =
    LazyLock::new(|| config("SLE", "925", "Le", "", None, "2.,3%-%s%u"));

/// Somali Shilling.
pub static SOS: LazyLock<Currency> =
    LazyLock::new(|| config("SOS", "706", "Sh", "", None, "2.,3%-%s%u"));

/// South Sudanese Pound.
pub static SSP: LazyLock<Currency> =
    LazyLock::new(|| config("SSP", "728", "£", "", None, "2.,3%-%s%u"));

/// São Tomé and Príncipe Dobra.
pub static STN: LazyLock<Currency> =
    LazyLock::new(|| config("STN", "930", "Db", "", None, "2.,3%-%s%u"));

/// Sudanese Pound.
pub static SDG: LazyLock<Currency> = LazyLock::new(|| {
    config("SDG", "938", "ج.س.", "", Some(ARABIC_NUMERALS), "2٫٬3%s\u{a0}%a")
});

/// Tunisian Dinar.
pub static TND: LazyLock<Currency> = LazyLock::new(|| {
    config("TND", "788", "د.ت.", "", Some(ARABIC_NUMERALS), "3٫٬3%s\u{a0}%a")
});

/// Tanzanian Shilling.
pub static TZS: LazyLock<Currency> =
    LazyLock::new(|| config("TZS", "834", "TSh", "", None, "2.,3%-%s%u"));

/// Uganda Shilling.
pub static UGX: LazyLock<Currency> =
    LazyLock::new(|| config("UGX", "800", "USh", "", None, "0.,3%-%s%u"));

/// Central African CFA Franc.
pub static XAF: LazyLock<Currency> =
    LazyLock::new(|| config("XAF", "950", "₣", "", None, "0,\u{202f}3%a\u{a0}%s"));

/// West African CFA Franc.
pub static XOF: LazyLock<Currency> =
    LazyLock::new(|| config("XOF", "952", "₣", "", None, "0,\u{202f}3%a\u{a0}%s"));

/// South African Rand.
pub static ZAR: LazyLock<Currency> =
    LazyLock::new(|| config("ZAR", "710", "R", "", None, "2,\u{202f}3%s\u{a0}%a"));

/// Zambian Kwacha.
pub static ZMW: LazyLock<Currency> =
    LazyLock::new(|| config("ZMW", "967", "ZK", "", None, "2.,3%-%s%u"));

/// Zimbabwe Dollar.
pub static ZWL: LazyLock<Currency> =
    LazyLock::new(|| config("ZWL", "932", "$", "Z$", None, "2.,3%-%s%u"));

pub(crate) fn currencies() -> Vec<Currency> {
    vec![
        DZD.clone(),
        AOA.clone(),
        BWP.clone(),
        BIF.clone(),
        CVE.clone(),
        CDF.clone(),
        DJF.clone(),
        EGP.clone(),
        ERN.clone(),
        SZL.clone(),
        ETB.clone(),
        GMD.clone(),
        GHS.clone(),
        GNF.clone(),
        KES.clone(),
        KMF.clone(),
        LSL.clone(),
        LRD.clone(),
        LYD.clone(),
        MGA.clone(),
        MWK.clone(),
        MUR.clone(),
        MAD.clone(),
        MZN.clone(),
        NAD.clone(),
        NGN.clone(),
        RWF.clone(),
        SCR.clone(),
        SLE.clone(),
        SOS.clone(),
        SSP.clone(),
        STN.clone(),
        SDG.clone(),
        TND.clone(),
        TZS.clone(),
        UGX.clone(),
        XAF.clone(),
        XOF.clone(),
        ZAR.clone(),
        ZMW.clone(),
        ZWL.clone(),
    ]
}

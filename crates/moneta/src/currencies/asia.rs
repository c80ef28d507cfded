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

//! Asian and Middle Eastern currency configurations.

use std::sync::LazyLock;

use super::{ARABIC_NUMERALS, BENGALI_NUMERALS, DEVANAGARI_NUMERALS, PERSIAN_NUMERALS, config};
use crate::currency::Currency;

/// UAE Dirham.
pub static AED: LazyLock<Currency> = LazyLock::new(|| {
    config("AED", "784", "د.إ.", "", Some(ARABIC_NUMERALS), "2٫٬3%s\u{a0}%a")
});

/// Afghani.
pub static AFN: LazyLock<Currency> = LazyLock::new(|| {
    config("AFN", "971", "؋", "", Some(PERSIAN_NUMERALS), "0٫٬3%u%s")
});

/// Armenian Dram.
pub static AMD: LazyLock<Currency> =
    LazyLock::new(|| config("AMD", "051", "Դ", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Azerbaijan Manat.
pub static AZN: LazyLock<Currency> =
    LazyLock::new(|| config("AZN", "944", "₼", "", None, "2,.3%a\u{a0}%s"));

/// Bahraini Dinar.
pub static BHD: LazyLock<Currency> = LazyLock::new(|| {
    config("BHD", "048", "ب.د", "", Some(ARABIC_NUMERALS), "3٫٬3%s\u{a0}%a")
});

/// Bangladeshi Taka.
pub static BDT: LazyLock<Currency> = LazyLock::new(|| {
    config("BDT", "050", "৳", "", Some(BENGALI_NUMERALS), "2.,3%s%a")
});

/// Brunei Dollar.
pub static BND: LazyLock<Currency> =
    LazyLock::new(|| config("BND", "096", "$", "BN$", None, "2.,3%-%s%u"));

/// Bhutanese Ngultrum.
pub static BTN: LazyLock<Currency> =
    LazyLock::new(|| config("BTN", "064", "Nu.", "", None, "2.,3%-%s\u{a0}%u"));

/// Cambodian Riel.
pub static KHR: LazyLock<Currency> =
    LazyLock::new(|| config("KHR", "116", "៛", "", None, "2.,3%a%s"));

/// Yuan Renminbi.
pub static CNY: LazyLock<Currency> =
    LazyLock::new(|| config("CNY", "156", "¥", "CN¥", None, "2.,3%-%s%u"));

/// Georgian Lari.
pub static GEL: LazyLock<Currency> =
    LazyLock::new(|| config("GEL", "981", "ლ", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Hong Kong Dollar.
pub static HKD: LazyLock<Currency> =
    LazyLock::new(|| config("HKD", "344", "$", "HK$", None, "2.,3%-%s%u"));

/// Indian Rupee.
pub static INR: LazyLock<Currency> =
    LazyLock::new(|| config("INR", "356", "₹", "", None, "2.,3%-%s%u"));

/// Indonesian Rupiah.
pub static IDR: LazyLock<Currency> =
    LazyLock::new(|| config("IDR", "360", "Rp", "", None, "2,.3%s\u{a0}%a"));

/// Iranian Rial.
pub static IRR: LazyLock<Currency> = LazyLock::new(|| {
    config("IRR", "364", "﷼", "", Some(PERSIAN_NUMERALS), "2٫٬3%u%s")
});

/// Iraqi Dinar.
pub static IQD: LazyLock<Currency> = LazyLock::new(|| {
    config("IQD", "368", "ع.د", "", Some(ARABIC_NUMERALS), "3٫٬3%s\u{a0}%a")
});

/// New Israeli Sheqel.
pub static ILS: LazyLock<Currency> =
    LazyLock::new(|| config("ILS", "376", "₪", "", None, "2.,3%-%a\u{a0}%s"));

/// Yen.
pub static JPY: LazyLock<Currency> =
    LazyLock::new(|| config("JPY", "392", "¥", "", None, "0.,3%-%s%u"));

/// Jordanian Dinar.
pub static JOD: LazyLock<Currency> = LazyLock::new(|| {
    config("JOD", "400", "د.ا", "", Some(ARABIC_NUMERALS), "3٫٬3%s\u{a0}%a")
});

/// Kazakhstani Tenge.
pub static KZT: LazyLock<Currency> =
    LazyLock::new(|| config("KZT", "398", "〒", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Kuwaiti Dinar.
pub static KWD: LazyLock<Currency> = LazyLock::new(|| {
    config("KWD", "414", "د.ك", "", Some(ARABIC_NUMERALS), "3٫٬3%s\u{a0}%a")
});

/// Som.
pub static KGS: LazyLock<Currency> =
    LazyLock::new(|| config("KGS", "417", "лв", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Lao Kip.
pub static LAK: LazyLock<Currency> =
    LazyLock::new(|| config("LAK", "418", "₭", "", None, "2,.3%s%u"));

/// Lebanese Pound.
pub static LBP: LazyLock<Currency> = LazyLock::new(|| {
    config("LBP", "422", "ل.ل.", "", Some(ARABIC_NUMERALS), "0٫٬3%s\u{a0}%a")
});

/// Pataca.
pub static MOP: LazyLock<Currency> =
    LazyLock::new(|| config("MOP", "446", "P", "", None, "2.,3%-%s%u"));

/// Malaysian Ringgit.
pub static MYR: LazyLock<Currency> =
    LazyLock::new(|| config("MYR", "458", "RM", "", None, "2.,3%-%s%u"));

/// Rufiyaa.
pub static MVR: LazyLock<Currency> =
    LazyLock::new(|| config("MVR", "462", "ރ.", "", None, "2.,3%u\u{a0}%s"));

/// Mongolian Tugrik.
pub static MNT: LazyLock<Currency> =
    LazyLock::new(|| config("MNT", "496", "₮", "", None, "2.,3%-%s%u"));

/// Myanmar Kyat.
pub static MMK: LazyLock<Currency> =
    LazyLock::new(|| config("MMK", "104", "K", "", None, "2.,3%-%s%u"));

/// Nepalese Rupee.
pub static NPR: LazyLock<Currency> = LazyLock::new(|| {
    config("NPR", "524", "₨", "", Some(DEVANAGARI_NUMERALS), "2.,3%s%a")
});

/// North Korean Won.
pub static KPW: LazyLock<Currency> =
    LazyLock::new(|| config("KPW", "408", "₩", "KP₩", None, "0.,3%-%s%u"));

/// Rial Omani.
pub static OMR: LazyLock<Currency> = LazyLock::new(|| {
    config("OMR", "512", "ر.ع.", "", Some(ARABIC_NUMERALS), "3٫٬3%s\u{a0}%a")
});

/// Pakistan Rupee.
pub static PKR: LazyLock<Currency> =
    LazyLock::new(|| config("PKR", "586", "₨", "", None, "2.,3%-%s%u"));

/// Philippine Peso.
pub static PHP: LazyLock<Currency> =
    LazyLock::new(|| config("PHP", "608", "₱", "", None, "2.,3%-%s%u"));

/// Qatari Rial.
pub static QAR: LazyLock<Currency> = LazyLock::new(|| {
    config("QAR", "634", "ر.ق", "", Some(ARABIC_NUMERALS), "2٫٬3%s\u{a0}%a")
});

/// Saudi Riyal.
pub static SAR: LazyLock<Currency> = LazyLock::new(|| {
    config("SAR", "682", "ر.س", "", Some(ARABIC_NUMERALS), "2٫٬3%s\u{a0}%a")
});

/// Singapore Dollar.
pub static SGD: LazyLock<Currency> =
    LazyLock::new(|| config("SGD", "702", "$", "SG$", None, "2.,3%-%s%u"));

/// South Korean Won.
pub static KRW: LazyLock<Currency> =
    LazyLock::new(|| config("KRW", "410", "₩", "", None, "0.,3%-%s%u"));

/// Sri Lanka Rupee.
pub static LKR: LazyLock<Currency> =
    LazyLock::new(|| config("LKR", "144", "₨", "", None, "2.,3%-%s%u"));

/// Syrian Pound.
pub static SYP: LazyLock<Currency> = LazyLock::new(|| {
    config("SYP", "760", "ل.س", "", Some(ARABIC_NUMERALS), "2٫٬3%u%s")
});

/// New Taiwan Dollar.
pub static TWD: LazyLock<Currency> =
    LazyLock::new(|| config("TWD", "901", "$", "NT$", None, "2.,3%-%s%u"));

/// Somoni.
pub static TJS: LazyLock<Currency> =
    LazyLock::new(|| config("TJS", "972", "ЅМ", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Thai Baht.
pub static THB: LazyLock<Currency> =
    LazyLock::new(|| config("THB", "764", "฿", "", None, "2.,3%-%s%u"));

/// Turkish Lira.
pub static TRY: LazyLock<Currency> =
    LazyLock::new(|| config("TRY", "949", "₤", "TR₤", None, "2,.3%-%s%u"));

/// Turkmenistan New Manat.
pub static TMT: LazyLock<Currency> =
    LazyLock::new(|| config("TMT", "934", "m", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Uzbekistan Sum.
pub static UZS: LazyLock<Currency> =
    LazyLock::new(|| config("UZS", "860", "сўм", "", None, "2,\u{202f}3%a\u{a0}%s"));

/// Dong.
pub static VND: LazyLock<Currency> =
    LazyLock::new(|| config("VND", "704", "₫", "", None, "0,.3%u\u{a0}%s"));

/// Yemeni Rial.
pub static YER: LazyLock<Currency> = LazyLock::new(|| {
    config("YER", "886", "﷼", "", Some(ARABIC_NUMERALS), "2٫٬3%u%s")
});

pub(crate) fn currencies() -> Vec<Currency> {
    vec![
        AED.clone(),
        AFN.clone(),
        AMD.clone(),
        AZN.clone(),
        BHD.clone(),
        BDT.clone(),
        BND.clone(),
        BTN.clone(),
        KHR.clone(),
        CNY.clone(),
        GEL.clone(),
        HKD.clone(),
        INR.clone(),
        IDR.clone(),
        IRR.clone(),
        IQD.clone(),
        ILS.clone(),
        JPY.clone(),
        JOD.clone(),
        KZT.clone(),
        KWD.clone(),
        KGS.clone(),
        LAK.clone(),
        LBP.clone(),
        MOP.clone(),
        MYR.clone(),
        MVR.clone(),
        MNT.clone(),
        MMK.clone(),
        NPR.clone(),
        KPW.clone(),
        OMR.clone(),
        PKR.clone(),
        PHP.clone(),
        QAR.clone(),
        SAR.clone(),
        SGD.clone(),
        KRW.clone(),
        LKR.clone(),
        SYP.clone(),
        TWD.clone(),
        TJS.clone(),
        THB.clone(),
        TRY.clone(),
        TMT.clone(),
        UZS.clone(),
        VND.clone(),
        YER.clone(),
    ]
}

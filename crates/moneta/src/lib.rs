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

//! Immutable monetary values with pattern-driven, locale-aware formatting.
//!
//! The crate is built around two value types: [`Currency`], a formatting
//! configuration identified by its ISO 4217 codes, and [`Money`], an
//! arbitrary-precision amount paired with a currency. Both are **immutable**;
//! arithmetic and reformatting operations always return new instances, so
//! values can be shared freely across threads.
//!
//! # Formatting patterns
//!
//! How an amount is rendered is controlled by a compact [`Pattern`] string
//! such as `"2.,3%a%s"`: decimal places, decimal separator, grouping
//! separator, and grouping size, followed by a layout of `%` directives
//! (`%a` localized amount, `%A` Western amount, `%s` symbol, `%c` alpha code,
//! and friends) interleaved with literal text. Currencies whose locales do
//! not write Western digits carry a [`NumeralSystem`] that transliterates
//! the rendered amount, for example into Eastern Arabic or Devanagari
//! glyphs.
//!
//! # Arithmetic
//!
//! [`Money`] implements the standard operator traits for same-currency
//! arithmetic and scaling by primitive numbers:
//!
//! | Operation         | Result  | Notes                                    |
//! |-------------------|---------|------------------------------------------|
//! | `Money + Money`   | `Money` | Panics if currencies don't match.        |
//! | `Money - Money`   | `Money` | Panics if currencies don't match.        |
//! | `Money * scalar`  | `Money` | Result rounded per the active context.   |
//! | `Money / scalar`  | `Money` | Result rounded per the active context.   |
//! | `Money % scalar`  | `Money` | Remainder takes the sign of the dividend.|
//!
//! Fallible `try_*` counterparts return [`MonetaryError`] instead of
//! panicking. Rounding behavior is governed by a thread-local
//! [`DecimalContext`] which can be swapped with [`set_context`] or scoped
//! with [`with_context`].
//!
//! # Built-in catalog
//!
//! The [`currencies`] module ships configurations for over 150 fiat and
//! crypto currencies, re-exported as statics (`currencies::USD`,
//! `currencies::EUR`, ...). Custom currencies can be added to the
//! process-wide registry through [`Currency::register`] and later resolved
//! with [`Currency::from_code`].

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod context;
pub mod currencies;
pub mod currency;
pub mod errors;
pub mod money;
pub mod numerals;
pub mod pattern;

mod render;

// Re-exports
pub use context::{DecimalContext, RoundingMode, context, set_context, with_context};
pub use currency::{Currency, CurrencyBuilder};
pub use errors::MonetaryError;
pub use money::{Money, Numeric};
pub use numerals::{NUMERAL_TABLE_LEN, NumeralSystem};
pub use pattern::{DEFAULT_PATTERN, Pattern};

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

//! Error types raised by monetary values and the format engine.
//!
//! Every error is surfaced to the immediate caller: nothing in this crate
//! retries, swallows, or downgrades a failure. The `try_*` operations on
//! [`Money`](crate::money::Money) return these values directly; the
//! corresponding operator traits panic with the same message.

use thiserror::Error;
use ustr::Ustr;

/// The canonical panic message for conditions checked by panicking constructors.
pub(crate) const FAILED: &str = "Condition failed";

/// Represents all failure conditions raised by monetary values and format patterns.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MonetaryError {
    /// The format pattern string violates the fixed-slot grammar.
    #[error("invalid format pattern `{pattern}`: {reason}")]
    InvalidFormat {
        /// The offending pattern string.
        pattern: String,
        /// Which slot or token was malformed.
        reason: String,
    },

    /// A numeral table was not exactly 11 characters (digits 0-9 followed by the sign).
    #[error("invalid numeral table `{table}`: expected 11 characters, found {len}")]
    InvalidNumerals {
        /// The offending table string.
        table: String,
        /// The number of characters found.
        len: usize,
    },

    /// An amount could not be converted into a decimal value.
    #[error("invalid amount `{value}`: {reason}")]
    InvalidAmount {
        /// The rejected input.
        value: String,
        /// Why the conversion failed.
        reason: String,
    },

    /// A binary operation was attempted between two different currencies.
    #[error("currency mismatch: {lhs} vs {rhs}")]
    CurrencyMismatch {
        /// Alpha code of the left-hand operand.
        lhs: Ustr,
        /// Alpha code of the right-hand operand.
        rhs: Ustr,
    },

    /// A multiplication factor could not be represented as a decimal value.
    #[error("invalid multiplication factor `{0}`")]
    InvalidMultiplier(String),

    /// A division factor could not be represented as a decimal value.
    #[error("invalid division factor `{0}`")]
    InvalidDivisor(String),

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The alpha code is not present in the currency registry.
    #[error("unknown currency code `{0}`")]
    UnknownCurrency(Ustr),
}

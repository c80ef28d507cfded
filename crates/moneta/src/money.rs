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

//! The immutable monetary value type.

use std::{
    cmp::{Ordering, Reverse},
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::{
    context::context,
    currency::Currency,
    errors::{FAILED, MonetaryError},
    pattern::{Pattern, Token},
    render,
};

/// A scalar that can participate in monetary multiplication and division.
///
/// Conversion returns `None` for values with no decimal representation,
/// such as non-finite floats.
pub trait Numeric: Copy + Display {
    /// Converts the scalar into a decimal value.
    fn into_decimal(self) -> Option<Decimal>;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn into_decimal(self) -> Option<Decimal> {
                    Some(Decimal::from(self))
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Numeric for i128 {
    fn into_decimal(self) -> Option<Decimal> {
        Decimal::from_i128(self)
    }
}

impl Numeric for u128 {
    fn into_decimal(self) -> Option<Decimal> {
        Decimal::from_u128(self)
    }
}

impl Numeric for f32 {
    fn into_decimal(self) -> Option<Decimal> {
        Decimal::from_f32(self)
    }
}

impl Numeric for f64 {
    fn into_decimal(self) -> Option<Decimal> {
        Decimal::from_f64(self)
    }
}

impl Numeric for Decimal {
    fn into_decimal(self) -> Option<Decimal> {
        Some(self)
    }
}

/// Represents an amount of money in a specific currency.
///
/// `Money` is immutable: every operation returns a new instance and the
/// amount and currency of an existing instance never change. Binary
/// operations require both operands to share the same currency identity
/// (alpha and numeric code); the fallible `try_*` methods surface a
/// [`MonetaryError::CurrencyMismatch`], while the operator forms panic.
///
/// Scalar multiplication and division accept any [`Numeric`] operand.
/// Multiplying or dividing two `Money` values is not representable and
/// therefore cannot be written at all.
#[derive(Clone, Deserialize, Serialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] instance from a decimal amount.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a new [`Money`] instance from an integer amount.
    #[must_use]
    pub fn from_i64(amount: i64, currency: Currency) -> Self {
        Self::new(Decimal::from(amount), currency)
    }

    /// Creates a new [`Money`] instance from a 128-bit integer amount.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` exceeds the representable decimal range.
    pub fn from_i128(amount: i128, currency: Currency) -> anyhow::Result<Self> {
        let amount = Decimal::from_i128(amount).ok_or_else(|| MonetaryError::InvalidAmount {
            value: amount.to_string(),
            reason: "out of range for a 96-bit decimal".to_string(),
        })?;
        Ok(Self::new(amount, currency))
    }

    /// Creates a new [`Money`] instance from a float amount.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is not finite or exceeds the
    /// representable decimal range.
    pub fn from_f64(amount: f64, currency: Currency) -> anyhow::Result<Self> {
        let decimal = Decimal::from_f64(amount).ok_or_else(|| MonetaryError::InvalidAmount {
            value: amount.to_string(),
            reason: "not representable as a decimal".to_string(),
        })?;
        Ok(Self::new(decimal, currency))
    }

    /// Creates a new [`Money`] instance by parsing a plain decimal string
    /// such as `"-1234.56"`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid decimal number.
    pub fn parse(value: &str, currency: Currency) -> anyhow::Result<Self> {
        let amount = Decimal::from_str(value).map_err(|e| MonetaryError::InvalidAmount {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(amount, currency))
    }

    /// Creates a new [`Money`] instance by parsing a string previously
    /// produced by this currency's rendering, such as `"-$1,234.57"`.
    ///
    /// The currency's symbol, localized symbol, and alpha code are
    /// stripped first, so separator characters inside them (as in `"S/."`)
    /// never reach the amount. Transliterated digits are mapped back to
    /// Western form, the currency's separators are decoded, and every
    /// other character is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if no amount can be recovered from `text`.
    pub fn from_formatted(text: &str, currency: Currency) -> anyhow::Result<Self> {
        let mut labels = [
            currency.symbol.as_str(),
            currency.localized_symbol.as_str(),
            currency.alpha_code.as_str(),
        ];
        labels.sort_by_key(|label| Reverse(label.len()));
        let mut source = text.to_string();
        for label in labels {
            if !label.is_empty() {
                source = source.replace(label, "");
            }
        }

        let source = match &currency.numerals {
            Some(numerals) => numerals.to_western(&source),
            None => source,
        };

        let decimal_separator = if uses_western_amount(&currency.pattern) {
            '.'
        } else {
            currency.pattern.decimal_separator()
        };

        let mut number = String::with_capacity(source.len());
        for c in source.chars() {
            if c.is_ascii_digit() || c == '-' {
                number.push(c);
            } else if c == decimal_separator {
                number.push('.');
            }
        }
        if number.is_empty() {
            anyhow::bail!(MonetaryError::InvalidAmount {
                value: text.to_string(),
                reason: "no numeric characters".to_string(),
            });
        }

        let amount = Decimal::from_str(&number).map_err(|e| MonetaryError::InvalidAmount {
            value: text.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(amount, currency))
    }

    /// Returns the decimal amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency configuration.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns a new instance holding `amount` with this instance's
    /// currency configuration.
    #[must_use]
    pub fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
        }
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns whether the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns whether the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns a new instance with the absolute amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_amount(self.amount.abs())
    }

    /// Returns a new instance with the amount trimmed to the active
    /// context's significant digit count.
    #[must_use]
    pub fn rounded(&self) -> Self {
        self.with_amount(context().round_significant(self.amount))
    }

    /// Adds another monetary value.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ or the sum overflows.
    pub fn try_add(&self, other: &Self) -> Result<Self, MonetaryError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| MonetaryError::InvalidAmount {
                value: format!("{} + {}", self.amount, other.amount),
                reason: "amount overflow".to_string(),
            })?;
        Ok(self.with_amount(amount))
    }

    /// Subtracts another monetary value.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ or the difference
    /// overflows.
    pub fn try_sub(&self, other: &Self) -> Result<Self, MonetaryError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| MonetaryError::InvalidAmount {
                value: format!("{} - {}", self.amount, other.amount),
                reason: "amount overflow".to_string(),
            })?;
        Ok(self.with_amount(amount))
    }

    /// Multiplies the amount by a scalar factor.
    ///
    /// The product is trimmed to the active context's significant digit
    /// count.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` has no decimal representation or the
    /// product overflows.
    pub fn try_mul<T: Numeric>(&self, factor: T) -> Result<Self, MonetaryError> {
        let decimal = factor
            .into_decimal()
            .ok_or_else(|| MonetaryError::InvalidMultiplier(factor.to_string()))?;
        let product = self
            .amount
            .checked_mul(decimal)
            .ok_or_else(|| MonetaryError::InvalidMultiplier(factor.to_string()))?;
        Ok(self.with_amount(context().round_significant(product)))
    }

    /// Divides the amount by a scalar divisor.
    ///
    /// The quotient is trimmed to the active context's significant digit
    /// count.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisor` has no decimal representation, is
    /// zero, or the quotient overflows.
    pub fn try_div<T: Numeric>(&self, divisor: T) -> Result<Self, MonetaryError> {
        let decimal = self.checked_divisor(divisor)?;
        let quotient = self
            .amount
            .checked_div(decimal)
            .ok_or_else(|| MonetaryError::InvalidDivisor(divisor.to_string()))?;
        Ok(self.with_amount(context().round_significant(quotient)))
    }

    /// Divides the amount by a scalar divisor, truncating the quotient
    /// towards zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisor` has no decimal representation, is
    /// zero, or the quotient overflows.
    pub fn try_floor_div<T: Numeric>(&self, divisor: T) -> Result<Self, MonetaryError> {
        let decimal = self.checked_divisor(divisor)?;
        let quotient = self
            .amount
            .checked_div(decimal)
            .ok_or_else(|| MonetaryError::InvalidDivisor(divisor.to_string()))?;
        Ok(self.with_amount(quotient.trunc()))
    }

    /// Returns the remainder of dividing the amount by a scalar divisor.
    ///
    /// The remainder carries the sign of the dividend, consistent with
    /// [`try_floor_div`](Self::try_floor_div).
    ///
    /// # Errors
    ///
    /// Returns an error if `divisor` has no decimal representation or is
    /// zero.
    pub fn try_rem<T: Numeric>(&self, divisor: T) -> Result<Self, MonetaryError> {
        let decimal = self.checked_divisor(divisor)?;
        let remainder = self
            .amount
            .checked_rem(decimal)
            .ok_or_else(|| MonetaryError::InvalidDivisor(divisor.to_string()))?;
        Ok(self.with_amount(remainder))
    }

    /// Returns the truncated quotient and the remainder in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisor` has no decimal representation, is
    /// zero, or the quotient overflows.
    pub fn try_div_rem<T: Numeric>(&self, divisor: T) -> Result<(Self, Self), MonetaryError> {
        Ok((self.try_floor_div(divisor)?, self.try_rem(divisor)?))
    }

    /// Compares the amounts of two monetary values.
    ///
    /// # Errors
    ///
    /// Returns an error if the currencies differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, MonetaryError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Renders the value with its configured pattern and optional decimal
    /// place override; negative overrides clamp to zero places.
    #[must_use]
    pub fn localized(&self, precision: Option<i32>) -> String {
        render::render(
            self.amount,
            &self.currency.pattern,
            &self.currency.render_config(true),
            precision,
        )
    }

    /// Renders the value as a Western amount followed by the alpha code,
    /// such as `"1,234.57 USD"`.
    #[must_use]
    pub fn international(&self, precision: Option<i32>) -> String {
        let amount = render::western_amount(
            self.amount,
            precision,
            self.currency.pattern.decimal_places(),
        );
        format!("{} {}", amount, self.currency.alpha_code)
    }

    /// Renders the amount alone with the configured separators and
    /// grouping, without symbol, code, or transliteration.
    #[must_use]
    pub fn numeric(&self, precision: Option<i32>) -> String {
        render::pattern_amount(self.amount, &self.currency.pattern, precision)
    }

    /// Renders the value through an alternate pattern, keeping this
    /// currency's symbols and numerals.
    #[must_use]
    pub fn format_with(&self, pattern: &Pattern) -> String {
        render::render(self.amount, pattern, &self.currency.render_config(false), None)
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), MonetaryError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MonetaryError::CurrencyMismatch {
                lhs: self.currency.alpha_code,
                rhs: other.currency.alpha_code,
            })
        }
    }

    fn checked_divisor<T: Numeric>(&self, divisor: T) -> Result<Decimal, MonetaryError> {
        let decimal = divisor
            .into_decimal()
            .ok_or_else(|| MonetaryError::InvalidDivisor(divisor.to_string()))?;
        if decimal.is_zero() {
            return Err(MonetaryError::DivisionByZero);
        }
        Ok(decimal)
    }
}

fn uses_western_amount(pattern: &Pattern) -> bool {
    pattern
        .tokens()
        .iter()
        .find_map(|token| match token {
            Token::Amount | Token::AmountUnsigned => Some(false),
            Token::AmountWestern | Token::AmountUnsignedWestern => Some(true),
            _ => None,
        })
        .unwrap_or(false)
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.try_cmp(other).expect(FAILED))
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs).expect(FAILED)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = self.clone() + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs).expect(FAILED)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = self.clone() - other;
    }
}

impl<T: Numeric> Mul<T> for Money {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.try_mul(rhs).expect(FAILED)
    }
}

impl<T: Numeric> Div<T> for Money {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self.try_div(rhs).expect(FAILED)
    }
}

impl<T: Numeric> Rem<T> for Money {
    type Output = Self;

    fn rem(self, rhs: T) -> Self::Output {
        self.try_rem(rhs).expect(FAILED)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {})",
            stringify!(Money),
            self.amount,
            self.currency.alpha_code,
        )
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = render::render(
            self.amount,
            &self.currency.pattern,
            &self.currency.render_config(false),
            None,
        );
        f.write_str(&rendered)
    }
}

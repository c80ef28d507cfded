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

//! The ambient decimal context governing precision and rounding.
//!
//! Every rounding step in this crate (display rounding in the renderer,
//! significant-digit trimming after division) reads the calling thread's
//! [`DecimalContext`]. The context is thread-local rather than process-wide:
//! each thread starts from [`DecimalContext::DEFAULT`] (28 significant
//! digits, round-half-to-even) and mutations through [`set_context`] or
//! [`with_context`] are never observable from another thread.
//!
//! [`with_context`] scopes a context to a closure and restores the previous
//! one afterwards (also on unwind), for callers that want a different
//! rounding mode for a block of operations:
//!
//! ```
//! use moneta::{DecimalContext, RoundingMode, context, with_context};
//!
//! let ceiling = DecimalContext::new(28, RoundingMode::Ceiling);
//! let rounded = with_context(ceiling, || {
//!     context().round_dp(rust_decimal::Decimal::new(14285, 5), 4)
//! });
//! assert_eq!(rounded.to_string(), "0.1429");
//! ```

use std::cell::Cell;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Algorithms for rounding decimal numbers.
///
/// The modes mirror the General Decimal Arithmetic specification, restricted
/// to those representable by [`rust_decimal::RoundingStrategy`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards zero (truncation).
    Down,
    /// Round towards negative infinity.
    Floor,
    /// Round to nearest; if equidistant, round towards zero.
    HalfDown,
    /// Round to nearest; if equidistant, round so that the final digit is even.
    #[default]
    HalfEven,
    /// Round to nearest; if equidistant, round away from zero.
    HalfUp,
    /// Round away from zero.
    Up,
}

impl RoundingMode {
    /// Returns the equivalent [`rust_decimal::RoundingStrategy`].
    #[must_use]
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Down => RoundingStrategy::ToZero,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::Up => RoundingStrategy::AwayFromZero,
        }
    }
}

/// A context for rounding decimal amounts.
///
/// Combines the number of significant digits kept by precision-sensitive
/// arithmetic (division) with the rounding algorithm applied wherever an
/// amount is rounded. A `digits` value of zero disables significant-digit
/// trimming entirely.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DecimalContext {
    /// The number of significant digits retained by division results.
    pub digits: u32,
    /// The rounding algorithm in effect.
    pub rounding: RoundingMode,
}

impl DecimalContext {
    /// The context every thread starts from: 28 significant digits,
    /// round-half-to-even.
    pub const DEFAULT: Self = Self {
        digits: 28,
        rounding: RoundingMode::HalfEven,
    };

    /// Creates a new [`DecimalContext`] instance.
    #[must_use]
    pub const fn new(digits: u32, rounding: RoundingMode) -> Self {
        Self { digits, rounding }
    }

    /// Rounds `value` to `dp` decimal places using this context's rounding
    /// algorithm.
    #[must_use]
    pub fn round_dp(&self, value: Decimal, dp: u32) -> Decimal {
        value.round_dp_with_strategy(dp, self.rounding.strategy())
    }

    /// Rounds `value` to this context's significant digit count.
    ///
    /// Values that cannot be represented at the requested precision (and
    /// contexts with `digits == 0`) are returned unchanged.
    #[must_use]
    pub fn round_significant(&self, value: Decimal) -> Decimal {
        if self.digits == 0 {
            return value;
        }
        value
            .round_sf_with_strategy(self.digits, self.rounding.strategy())
            .unwrap_or(value)
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}

thread_local! {
    static ACTIVE_CONTEXT: Cell<DecimalContext> = const { Cell::new(DecimalContext::DEFAULT) };
}

/// Returns the calling thread's active decimal context.
#[must_use]
pub fn context() -> DecimalContext {
    ACTIVE_CONTEXT.with(Cell::get)
}

/// Replaces the calling thread's active decimal context.
pub fn set_context(context: DecimalContext) {
    ACTIVE_CONTEXT.with(|active| active.set(context));
}

/// Runs `f` with `context` active, restoring the previous context afterwards.
///
/// The previous context is restored even if `f` unwinds.
pub fn with_context<R>(context: DecimalContext, f: impl FnOnce() -> R) -> R {
    struct Restore(DecimalContext);

    impl Drop for Restore {
        fn drop(&mut self) {
            set_context(self.0);
        }
    }

    let _restore = Restore(self::context());
    set_context(context);
    f()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    fn test_default_context() {
        let context = DecimalContext::default();
        assert_eq!(context.digits, 28);
        assert_eq!(context.rounding, RoundingMode::HalfEven);
        assert_eq!(context, DecimalContext::DEFAULT);
    }

    #[rstest]
    #[case("CEILING", RoundingMode::Ceiling)]
    #[case("HALF_EVEN", RoundingMode::HalfEven)]
    #[case("half_up", RoundingMode::HalfUp)]
    fn test_rounding_mode_from_str(#[case] input: &str, #[case] expected: RoundingMode) {
        assert_eq!(RoundingMode::from_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_rounding_mode_display() {
        assert_eq!(RoundingMode::HalfEven.to_string(), "HALF_EVEN");
        assert_eq!(RoundingMode::Ceiling.to_string(), "CEILING");
    }

    #[rstest]
    #[case(RoundingMode::Ceiling, "0.1429")]
    #[case(RoundingMode::Floor, "0.1428")]
    #[case(RoundingMode::Down, "0.1428")]
    #[case(RoundingMode::Up, "0.1429")]
    #[case(RoundingMode::HalfEven, "0.1429")]
    fn test_round_dp_one_seventh(#[case] rounding: RoundingMode, #[case] expected: &str) {
        let context = DecimalContext::new(28, rounding);
        let value = dec!(1) / dec!(7);
        assert_eq!(context.round_dp(value, 4).to_string(), expected);
    }

    #[rstest]
    #[case(RoundingMode::Ceiling, "-0.1428")]
    #[case(RoundingMode::Floor, "-0.1429")]
    fn test_round_dp_negative_flips_directed_modes(
        #[case] rounding: RoundingMode,
        #[case] expected: &str,
    ) {
        let context = DecimalContext::new(28, rounding);
        let value = dec!(-1) / dec!(7);
        assert_eq!(context.round_dp(value, 4).to_string(), expected);
    }

    #[rstest]
    #[case(dec!(2.345), RoundingMode::HalfEven, "2.34")]
    #[case(dec!(2.345), RoundingMode::HalfUp, "2.35")]
    #[case(dec!(2.345), RoundingMode::HalfDown, "2.34")]
    #[case(dec!(2.355), RoundingMode::HalfEven, "2.36")]
    fn test_round_dp_midpoints(
        #[case] value: Decimal,
        #[case] rounding: RoundingMode,
        #[case] expected: &str,
    ) {
        let context = DecimalContext::new(28, rounding);
        assert_eq!(context.round_dp(value, 2).to_string(), expected);
    }

    #[rstest]
    fn test_round_significant() {
        let context = DecimalContext::new(5, RoundingMode::HalfEven);
        let value = dec!(1) / dec!(7);
        assert_eq!(context.round_significant(value).to_string(), "0.14286");
    }

    #[rstest]
    fn test_round_significant_zero_digits_is_identity() {
        let context = DecimalContext::new(0, RoundingMode::HalfEven);
        let value = dec!(1) / dec!(7);
        assert_eq!(context.round_significant(value), value);
    }

    #[rstest]
    fn test_set_and_read_context() {
        let previous = context();
        set_context(DecimalContext::new(10, RoundingMode::Floor));
        assert_eq!(context().digits, 10);
        assert_eq!(context().rounding, RoundingMode::Floor);
        set_context(previous);
    }

    #[rstest]
    fn test_with_context_restores_previous() {
        let previous = context();
        let inner = with_context(DecimalContext::new(6, RoundingMode::Up), || {
            assert_eq!(context().digits, 6);
            with_context(DecimalContext::new(3, RoundingMode::Down), || {
                assert_eq!(context().digits, 3);
            });
            assert_eq!(context().digits, 6);
            context().rounding
        });
        assert_eq!(inner, RoundingMode::Up);
        assert_eq!(context(), previous);
    }
}

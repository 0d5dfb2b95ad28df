// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Monetary values with a fixed two-digit scale.
//!
//! Every [`Money`] is rounded half-up (ties away from zero) to two decimal
//! places when it is created, and every operation that can introduce extra
//! precision rounds again.
//!
//! Values too large to carry two fractional digits are rejected with
//! [`DiscountError::Overflow`] instead of losing scale.
//!
//! # Example
//!
//! ```
//! use discount_engine_rs::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::new(dec!(10.005)).unwrap();
//! assert_eq!(price.to_string(), "10.01");
//! assert_eq!(price.checked_mul(dec!(3)).unwrap().to_string(), "30.03");
//! ```

use crate::DiscountError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal amount that always carries exactly two fractional digits.
///
/// Sign is unconstrained; callers that need a non-negative amount (prices,
/// thresholds) validate the raw input before converting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const SCALE: u32 = 2;

    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, Self::SCALE));

    /// Creates a value, rounding half-up to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Overflow`] if `amount` is too large to keep
    /// two fractional digits.
    pub fn new(amount: Decimal) -> Result<Self, DiscountError> {
        let mut rounded =
            amount.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        // round_dp never widens the scale, so `25` has to be padded to `25.00`.
        // rescale settles for a smaller scale when the mantissa would overflow.
        rounded.rescale(Self::SCALE);
        if rounded.scale() != Self::SCALE {
            return Err(DiscountError::Overflow);
        }
        Ok(Money(rounded))
    }

    /// Creates a value from a number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, Self::SCALE))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// # Errors
    ///
    /// Returns [`DiscountError::Overflow`] if the sum is out of range.
    pub fn checked_add(self, rhs: Money) -> Result<Money, DiscountError> {
        let sum = self.0.checked_add(rhs.0).ok_or(DiscountError::Overflow)?;
        Money::new(sum)
    }

    /// Multiplies by `factor`, rounding the product half-up to two places.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Overflow`] if the product is out of range.
    pub fn checked_mul(self, factor: Decimal) -> Result<Money, DiscountError> {
        let product = self.0.checked_mul(factor).ok_or(DiscountError::Overflow)?;
        Money::new(product)
    }

    /// Divides by `divisor`, rounding the quotient half-up to two places.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::DivisionByZero`] - `divisor` is zero.
    /// - [`DiscountError::Overflow`] - The quotient is out of range.
    pub fn divide(self, divisor: Decimal) -> Result<Money, DiscountError> {
        Self::quotient(self.0, divisor)
    }

    /// Returns `rate` percent of this value, rounded once.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Overflow`] if `self * rate` is out of range.
    pub fn percentage(self, rate: Decimal) -> Result<Money, DiscountError> {
        let product = self.0.checked_mul(rate).ok_or(DiscountError::Overflow)?;
        Self::quotient(product, Decimal::ONE_HUNDRED)
    }

    /// Divides an unrounded `dividend` by `divisor` and rounds the result once.
    ///
    /// Used when a product such as `total * rate` must not be rounded before
    /// the division.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::DivisionByZero`] - `divisor` is zero.
    /// - [`DiscountError::Overflow`] - The quotient is out of range.
    pub fn quotient(dividend: Decimal, divisor: Decimal) -> Result<Money, DiscountError> {
        if divisor.is_zero() {
            return Err(DiscountError::DivisionByZero);
        }
        let quotient = dividend.checked_div(divisor).ok_or(DiscountError::Overflow)?;
        Money::new(quotient)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DiscountError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Money::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

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

//! Shopping cart.
//!
//! Line totals and the cart total are computed once, when the item and the
//! cart are built, so an amount out of range is reported at construction.
//!
//! # Example
//!
//! ```
//! use discount_engine_rs::{Cart, CartItem, Money};
//! use rust_decimal_macros::dec;
//!
//! let cart = Cart::new(vec![
//!     CartItem::new("Mouse", 2, dec!(19.99)).unwrap(),
//!     CartItem::new("Keyboard", 1, dec!(45.50)).unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(cart.total(), Money::from_cents(8548));
//! ```

use crate::{DiscountError, Money};
use rust_decimal::Decimal;
use serde::Serialize;

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CartItem {
    product_name: String,
    quantity: u32,
    unit_price: Money,
    line_total: Money,
}

impl CartItem {
    /// Creates a validated cart line.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::BlankField`] - Product name is empty or whitespace.
    /// - [`DiscountError::InvalidQuantity`] - Quantity is zero.
    /// - [`DiscountError::NegativeAmount`] - Unit price is below zero.
    /// - [`DiscountError::Overflow`] - Unit price or line total is out of range.
    pub fn new(
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<Self, DiscountError> {
        let product_name = product_name.into();
        if product_name.trim().is_empty() {
            return Err(DiscountError::BlankField("product name"));
        }
        if quantity == 0 {
            return Err(DiscountError::InvalidQuantity(0));
        }
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(DiscountError::NegativeAmount {
                field: "unit price",
                value: unit_price,
            });
        }

        let unit_price = Money::new(unit_price)?;
        let line_total = unit_price.checked_mul(Decimal::from(quantity))?;

        Ok(Self {
            product_name,
            quantity,
            unit_price,
            line_total,
        })
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns `unit_price * quantity`.
    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

/// An immutable, ordered collection of cart lines.
///
/// Item order is kept for display and has no effect on [`Cart::total`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
    total: Money,
}

impl Cart {
    /// Builds a cart, summing line totals left to right.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::Overflow`] - The cart total is out of range.
    pub fn new(items: impl IntoIterator<Item = CartItem>) -> Result<Self, DiscountError> {
        let items: Vec<CartItem> = items.into_iter().collect();
        let total = items
            .iter()
            .try_fold(Money::ZERO, |sum, item| sum.checked_add(item.line_total()))?;

        Ok(Self { items, total })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals, `0.00` for an empty cart.
    pub fn total(&self) -> Money {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn blank_product_name_rejected() {
        assert_eq!(
            CartItem::new("   ", 1, dec!(1.00)),
            Err(DiscountError::BlankField("product name"))
        );
        assert_eq!(
            CartItem::new("", 1, dec!(1.00)),
            Err(DiscountError::BlankField("product name"))
        );
    }

    #[test]
    fn zero_quantity_rejected() {
        assert_eq!(
            CartItem::new("Pen", 0, dec!(1.00)),
            Err(DiscountError::InvalidQuantity(0))
        );
    }

    #[test]
    fn negative_price_rejected() {
        assert_eq!(
            CartItem::new("Pen", 1, dec!(-0.01)),
            Err(DiscountError::NegativeAmount {
                field: "unit price",
                value: dec!(-0.01),
            })
        );
    }

    #[test]
    fn free_item_allowed() {
        let item = CartItem::new("Sticker", 3, dec!(0)).unwrap();
        assert_eq!(item.line_total(), Money::ZERO);
    }

    #[test]
    fn unit_price_rounded_on_construction() {
        let item = CartItem::new("Pen", 1, dec!(0.125)).unwrap();
        assert_eq!(item.unit_price(), Money::from_cents(13));
    }

    #[test]
    fn line_total_multiplies_quantity() {
        let item = CartItem::new("Pen", 4, dec!(1.25)).unwrap();
        assert_eq!(item.line_total(), Money::from_cents(500));
        assert_eq!(item.product_name(), "Pen");
        assert_eq!(item.quantity(), 4);
    }

    #[test]
    fn oversized_unit_price_rejected() {
        assert_eq!(
            CartItem::new("Big", 10, Decimal::MAX / dec!(2)),
            Err(DiscountError::Overflow)
        );
    }

    #[test]
    fn oversized_line_total_rejected() {
        let price = dec!(100000000000000000000000000);
        assert!(CartItem::new("Big", 1, price).is_ok());
        assert_eq!(CartItem::new("Big", 10, price), Err(DiscountError::Overflow));
        assert_eq!(
            CartItem::new("Big", u32::MAX, price),
            Err(DiscountError::Overflow)
        );
    }

    #[test]
    fn empty_cart_total_is_zero() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
        assert_eq!(cart.total().to_string(), "0.00");
        assert_eq!(Cart::new(Vec::new()), Ok(Cart::default()));
    }

    #[test]
    fn total_sums_line_totals() {
        let cart = Cart::new([
            CartItem::new("Laptop", 1, dec!(250.00)).unwrap(),
            CartItem::new("Cable", 3, dec!(4.99)).unwrap(),
        ])
        .unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Money::from_cents(26497));
    }

    #[test]
    fn oversized_total_rejected() {
        let price = dec!(500000000000000000000000000);
        let items = vec![
            CartItem::new("Big", 1, price).unwrap(),
            CartItem::new("Bigger", 1, price).unwrap(),
        ];
        assert_eq!(Cart::new(items), Err(DiscountError::Overflow));
    }

    #[test]
    fn item_order_preserved() {
        let cart = Cart::new(vec![
            CartItem::new("B", 1, dec!(1)).unwrap(),
            CartItem::new("A", 1, dec!(1)).unwrap(),
        ])
        .unwrap();
        let names: Vec<_> = cart.items().iter().map(CartItem::product_name).collect();
        assert_eq!(names, ["B", "A"]);
    }
}

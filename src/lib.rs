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

//! # Discount Engine
//!
//! This library evaluates a shopping cart against a set of marketing campaigns
//! and returns the discounts they grant.
//!
//! ## Core Components
//!
//! - [`Money`]: Decimal amount with a fixed two-digit, half-up rounded scale
//! - [`Cart`]: Immutable list of [`CartItem`]s with a computed total
//! - [`Campaign`]: Closed set of campaign variants, tagged by [`CampaignType`]
//! - [`DiscountStrategy`]: Applicability and amount rules for one variant
//! - [`DiscountService`]: Strategy registry and evaluation loop
//! - [`DiscountError`]: Validation, configuration and evaluation failures
//!
//! ## Example
//!
//! ```
//! use discount_engine_rs::{
//!     Campaign, Cart, CartItem, DiscountService, Money, PercentageCampaign, PercentageStrategy,
//! };
//! use rust_decimal_macros::dec;
//!
//! let cart = Cart::new(vec![CartItem::new("Laptop", 1, dec!(250.00)).unwrap()]).unwrap();
//! let campaign = Campaign::from(
//!     PercentageCampaign::new("Summer Sale", dec!(10), dec!(200.00)).unwrap(),
//! );
//!
//! let service = DiscountService::builder()
//!     .register(PercentageStrategy)
//!     .build()
//!     .unwrap();
//!
//! let discounts = service.evaluate(&cart, [&campaign]).unwrap();
//! assert_eq!(discounts.len(), 1);
//! assert_eq!(discounts[0].name(), "Summer Sale");
//! assert_eq!(discounts[0].amount(), Money::from_cents(2500));
//! ```
//!
//! ## Thread Safety
//!
//! Carts, campaigns and the service are immutable after construction and can
//! be shared between threads; every evaluation allocates its own result.

mod base;
pub mod campaign;
pub mod cart;
mod discount;
pub mod error;
pub mod money;
mod service;
pub mod strategy;

pub use base::CampaignType;
pub use campaign::{Campaign, CampaignVariant, PercentageCampaign};
pub use cart::{Cart, CartItem};
pub use discount::Discount;
pub use error::{DiscountError, ErrorKind};
pub use money::Money;
pub use service::{DiscountService, DiscountServiceBuilder};
pub use strategy::{DiscountStrategy, PercentageStrategy, RegisteredStrategy, default_strategies};

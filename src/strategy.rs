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

//! Discount strategies.
//!
//! A strategy is written against one campaign payload type through
//! [`DiscountStrategy`]. The [`DiscountService`](crate::DiscountService)
//! stores strategies as [`RegisteredStrategy`] trait objects; the blanket
//! implementation narrows each incoming [`Campaign`] to the payload the
//! strategy expects before calling it.

use crate::base::CampaignType;
use crate::campaign::{CampaignVariant, PercentageCampaign};
use crate::{Campaign, Cart, Discount, DiscountError};

/// Computes discounts for one campaign variant.
pub trait DiscountStrategy: Send + Sync {
    /// Campaign payload this strategy evaluates.
    type Campaign: CampaignVariant;

    /// Short diagnostic name.
    fn name(&self) -> &'static str;

    /// Campaign type this strategy is registered under.
    fn campaign_type(&self) -> CampaignType;

    /// Whether `campaign` grants a discount for `cart`. Must be side-effect free.
    fn is_applicable(&self, cart: &Cart, campaign: &Self::Campaign) -> bool;

    /// Computes the discount.
    ///
    /// Only meaningful when [`is_applicable`](Self::is_applicable) returned
    /// `true` for the same arguments.
    fn apply(&self, cart: &Cart, campaign: &Self::Campaign) -> Result<Discount, DiscountError>;
}

/// Object-safe view of a [`DiscountStrategy`], as held by the service registry.
pub trait RegisteredStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn campaign_type(&self) -> CampaignType;

    /// Applies the strategy if the campaign is applicable.
    ///
    /// Returns `Ok(None)` when the campaign does not apply to the cart.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::TypeMismatch`] - The campaign is not the variant this strategy handles.
    /// - Any error raised by the strategy's [`DiscountStrategy::apply`].
    fn try_apply(&self, cart: &Cart, campaign: &Campaign)
    -> Result<Option<Discount>, DiscountError>;
}

impl<S: DiscountStrategy> RegisteredStrategy for S {
    fn name(&self) -> &'static str {
        DiscountStrategy::name(self)
    }

    fn campaign_type(&self) -> CampaignType {
        DiscountStrategy::campaign_type(self)
    }

    fn try_apply(
        &self,
        cart: &Cart,
        campaign: &Campaign,
    ) -> Result<Option<Discount>, DiscountError> {
        let typed = S::Campaign::from_campaign(campaign).ok_or_else(|| {
            DiscountError::TypeMismatch {
                strategy: DiscountStrategy::name(self),
                expected: DiscountStrategy::campaign_type(self),
                actual: campaign.campaign_type(),
            }
        })?;

        if !self.is_applicable(cart, typed) {
            return Ok(None);
        }
        self.apply(cart, typed).map(Some)
    }
}

/// Percentage off the cart total.
///
/// - Applicable when the cart total is strictly greater than the campaign's
///   minimum order total.
/// - Discount is `total * rate / 100`, rounded half-up to cents and capped at
///   the cart total.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentageStrategy;

impl DiscountStrategy for PercentageStrategy {
    type Campaign = PercentageCampaign;

    fn name(&self) -> &'static str {
        "percentage"
    }

    fn campaign_type(&self) -> CampaignType {
        CampaignType::Percentage
    }

    fn is_applicable(&self, cart: &Cart, campaign: &PercentageCampaign) -> bool {
        cart.total() > campaign.min_order_total()
    }

    fn apply(&self, cart: &Cart, campaign: &PercentageCampaign) -> Result<Discount, DiscountError> {
        let total = cart.total();
        let amount = total.percentage(campaign.rate())?;
        Ok(Discount::new(campaign.name(), amount.min(total)))
    }
}

/// The strategies shipped with this crate, one per [`CampaignType`].
pub fn default_strategies() -> Vec<Box<dyn RegisteredStrategy>> {
    vec![Box::new(PercentageStrategy)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CartItem, Money};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn cart_of(price: Decimal) -> Cart {
        Cart::new(vec![CartItem::new("Item", 1, price).unwrap()]).unwrap()
    }

    fn campaign(rate: Decimal, min_order_total: Decimal) -> PercentageCampaign {
        PercentageCampaign::new("Promo", rate, min_order_total).unwrap()
    }

    #[test]
    fn applicable_above_threshold() {
        let strategy = PercentageStrategy;
        assert!(strategy.is_applicable(&cart_of(dec!(250.00)), &campaign(dec!(10), dec!(200))));
    }

    #[test]
    fn threshold_is_exclusive() {
        let strategy = PercentageStrategy;
        let promo = campaign(dec!(10), dec!(250.00));
        assert!(!strategy.is_applicable(&cart_of(dec!(250.00)), &promo));
        assert!(strategy.is_applicable(&cart_of(dec!(250.01)), &promo));
    }

    #[test]
    fn empty_cart_never_applicable() {
        let strategy = PercentageStrategy;
        assert!(!strategy.is_applicable(&Cart::default(), &campaign(dec!(10), dec!(0))));
    }

    #[test]
    fn ten_percent_of_250() {
        let discount = PercentageStrategy
            .apply(&cart_of(dec!(250.00)), &campaign(dec!(10), dec!(200)))
            .unwrap();
        assert_eq!(discount.name(), "Promo");
        assert_eq!(discount.amount(), Money::from_cents(2500));
        assert_eq!(discount.amount().to_string(), "25.00");
    }

    #[test]
    fn discount_rounds_half_up() {
        // 0.25 * 10% = 0.025
        let discount = PercentageStrategy
            .apply(&cart_of(dec!(0.25)), &campaign(dec!(10), dec!(0)))
            .unwrap();
        assert_eq!(discount.amount(), Money::from_cents(3));
    }

    #[test]
    fn discount_clamped_to_cart_total() {
        let discount = PercentageStrategy
            .apply(&cart_of(dec!(10.00)), &campaign(dec!(200), dec!(0)))
            .unwrap();
        assert_eq!(discount.amount(), Money::from_cents(1000));
    }

    #[test]
    fn oversized_discount_fails() {
        let cart = cart_of(dec!(500000000000000000000000000));
        let result = PercentageStrategy.apply(&cart, &campaign(dec!(500), dec!(0)));
        assert_eq!(result, Err(DiscountError::Overflow));
    }

    #[test]
    fn zero_rate_gives_zero_discount() {
        let discount = PercentageStrategy
            .apply(&cart_of(dec!(99.99)), &campaign(dec!(0), dec!(0)))
            .unwrap();
        assert_eq!(discount.amount(), Money::ZERO);
    }

    #[test]
    fn try_apply_skips_non_applicable() {
        let promo = Campaign::from(campaign(dec!(10), dec!(500)));
        let cart = cart_of(dec!(100));
        let result = RegisteredStrategy::try_apply(&PercentageStrategy, &cart, &promo);
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn try_apply_returns_discount() {
        let promo = Campaign::from(campaign(dec!(10), dec!(0)));
        let cart = cart_of(dec!(100));
        let result = RegisteredStrategy::try_apply(&PercentageStrategy, &cart, &promo);
        assert_eq!(
            result,
            Ok(Some(Discount::new("Promo", Money::from_cents(1000))))
        );
    }

    #[test]
    fn default_strategies_cover_every_type() {
        let types: Vec<_> = default_strategies()
            .iter()
            .map(|strategy| strategy.campaign_type())
            .collect();
        assert_eq!(types, [CampaignType::Percentage]);
    }
}

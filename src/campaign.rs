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

//! Marketing campaigns.
//!
//! [`Campaign`] is a closed set of variants. Adding a variant means adding a
//! [`CampaignType`] tag, a payload type implementing [`CampaignVariant`] and a
//! [`DiscountStrategy`](crate::DiscountStrategy) for it.

use crate::base::CampaignType;
use crate::{DiscountError, Money};
use rust_decimal::Decimal;
use serde::Serialize;

/// Percentage off the cart total once the total exceeds a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PercentageCampaign {
    name: String,
    /// Percent, e.g. `10` for 10%. Kept at the precision given.
    rate: Decimal,
    min_order_total: Money,
}

impl PercentageCampaign {
    /// Creates a validated percentage campaign.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::BlankField`] - Name is empty or whitespace.
    /// - [`DiscountError::NegativeAmount`] - Rate or minimum order total is below zero.
    /// - [`DiscountError::Overflow`] - Minimum order total is out of range.
    pub fn new(
        name: impl Into<String>,
        rate: Decimal,
        min_order_total: Decimal,
    ) -> Result<Self, DiscountError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DiscountError::BlankField("campaign name"));
        }
        if is_negative(rate) {
            return Err(DiscountError::NegativeAmount {
                field: "rate",
                value: rate,
            });
        }
        if is_negative(min_order_total) {
            return Err(DiscountError::NegativeAmount {
                field: "minimum order total",
                value: min_order_total,
            });
        }

        Ok(Self {
            name,
            rate,
            min_order_total: Money::new(min_order_total)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn min_order_total(&self) -> Money {
        self.min_order_total
    }
}

fn is_negative(value: Decimal) -> bool {
    value.is_sign_negative() && !value.is_zero()
}

/// A campaign of any supported variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Campaign {
    Percentage(PercentageCampaign),
}

impl Campaign {
    /// Tag used to look up the strategy for this campaign.
    pub fn campaign_type(&self) -> CampaignType {
        match self {
            Self::Percentage(_) => CampaignType::Percentage,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Percentage(campaign) => campaign.name(),
        }
    }
}

impl From<PercentageCampaign> for Campaign {
    fn from(campaign: PercentageCampaign) -> Self {
        Self::Percentage(campaign)
    }
}

/// Narrows a [`Campaign`] to one concrete variant payload.
pub trait CampaignVariant {
    /// Returns the payload if `campaign` is this variant.
    fn from_campaign(campaign: &Campaign) -> Option<&Self>;
}

impl CampaignVariant for PercentageCampaign {
    fn from_campaign(campaign: &Campaign) -> Option<&Self> {
        match campaign {
            Campaign::Percentage(inner) => Some(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn valid_campaign() {
        let campaign = PercentageCampaign::new("Summer Sale", dec!(10), dec!(200)).unwrap();
        assert_eq!(campaign.name(), "Summer Sale");
        assert_eq!(campaign.rate(), dec!(10));
        assert_eq!(campaign.min_order_total().to_string(), "200.00");
    }

    #[test]
    fn blank_name_rejected() {
        assert_eq!(
            PercentageCampaign::new(" \t", dec!(10), dec!(0)),
            Err(DiscountError::BlankField("campaign name"))
        );
    }

    #[test]
    fn negative_rate_rejected() {
        assert_eq!(
            PercentageCampaign::new("Sale", dec!(-5), dec!(0)),
            Err(DiscountError::NegativeAmount {
                field: "rate",
                value: dec!(-5),
            })
        );
    }

    #[test]
    fn negative_threshold_rejected() {
        let result = PercentageCampaign::new("Sale", dec!(5), dec!(-0.001));
        assert!(matches!(
            result,
            Err(DiscountError::NegativeAmount {
                field: "minimum order total",
                ..
            })
        ));
    }

    #[test]
    fn zero_rate_and_threshold_allowed() {
        assert!(PercentageCampaign::new("Nothing", dec!(0), dec!(0)).is_ok());
    }

    #[test]
    fn rate_keeps_fractional_percent() {
        let campaign = PercentageCampaign::new("Odd", dec!(12.345), dec!(0)).unwrap();
        assert_eq!(campaign.rate(), dec!(12.345));
    }

    #[test]
    fn oversized_threshold_rejected() {
        assert_eq!(
            PercentageCampaign::new("Sale", dec!(5), Decimal::MAX),
            Err(DiscountError::Overflow)
        );
    }

    #[test]
    fn campaign_type_tag() {
        let campaign = Campaign::from(PercentageCampaign::new("Sale", dec!(5), dec!(0)).unwrap());
        assert_eq!(campaign.campaign_type(), CampaignType::Percentage);
        assert_eq!(campaign.name(), "Sale");
    }

    #[test]
    fn narrows_to_percentage_payload() {
        let inner = PercentageCampaign::new("Sale", dec!(5), dec!(0)).unwrap();
        let campaign = Campaign::from(inner.clone());
        assert_eq!(PercentageCampaign::from_campaign(&campaign), Some(&inner));
    }

    #[test]
    fn equal_campaigns_collapse_in_a_set() {
        let a = Campaign::from(PercentageCampaign::new("Sale", dec!(5), dec!(0)).unwrap());
        let b = Campaign::from(PercentageCampaign::new("Sale", dec!(5), dec!(0)).unwrap());
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}

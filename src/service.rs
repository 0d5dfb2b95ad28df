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

//! Discount evaluation service.
//!
//! The [`DiscountService`] owns the strategy registry and evaluates a cart
//! against a set of campaigns.
//!
//! # Evaluation
//!
//! For every campaign, in input order:
//!
//! 1. Resolve the campaign's [`CampaignType`].
//! 2. Look up the registered strategy, failing with
//!    [`DiscountError::StrategyNotFound`] if there is none.
//! 3. Narrow the campaign to the strategy's payload type, failing with
//!    [`DiscountError::TypeMismatch`] if they disagree.
//! 4. Skip the campaign if it is not applicable to the cart.
//! 5. Otherwise apply it and collect the discount.
//!
//! Any failure aborts the whole call; no partial list is returned.
//!
//! # Thread Safety
//!
//! The registry is built once and never mutated, so a single service can be
//! shared across threads and evaluated concurrently.

use crate::base::CampaignType;
use crate::strategy::{DiscountStrategy, RegisteredStrategy};
use crate::{Campaign, Cart, Discount, DiscountError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Evaluates campaigns against carts using one strategy per campaign type.
///
/// # Invariants
///
/// - Each [`CampaignType`] maps to at most one strategy.
/// - The registry is fixed after construction.
pub struct DiscountService {
    /// Strategies indexed by the campaign type they declare.
    strategies: HashMap<CampaignType, Box<dyn RegisteredStrategy>>,
}

impl DiscountService {
    /// Builds the registry from `strategies`.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::DuplicateStrategy`] - Two strategies declare the same campaign type.
    pub fn new(strategies: Vec<Box<dyn RegisteredStrategy>>) -> Result<Self, DiscountError> {
        let mut registry = HashMap::with_capacity(strategies.len());

        for strategy in strategies {
            let campaign_type = strategy.campaign_type();
            match registry.entry(campaign_type) {
                Entry::Occupied(_) => {
                    log::error!(
                        "strategy {} collides with an existing strategy for {}",
                        strategy.name(),
                        campaign_type
                    );
                    return Err(DiscountError::DuplicateStrategy(campaign_type));
                }
                Entry::Vacant(entry) => {
                    log::debug!("registered strategy {} for {}", strategy.name(), campaign_type);
                    entry.insert(strategy);
                }
            }
        }

        Ok(Self {
            strategies: registry,
        })
    }

    pub fn builder() -> DiscountServiceBuilder {
        DiscountServiceBuilder::default()
    }

    /// Evaluates `campaigns` against `cart`.
    ///
    /// Discounts are returned in the order their campaigns were yielded. An
    /// empty list means no campaign applied.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::StrategyNotFound`] - A campaign's type has no registered strategy.
    /// - [`DiscountError::TypeMismatch`] - A strategy cannot handle its resolved campaign.
    /// - [`DiscountError::Overflow`] - A discount amount is out of range.
    pub fn evaluate<'a, I>(&self, cart: &Cart, campaigns: I) -> Result<Vec<Discount>, DiscountError>
    where
        I: IntoIterator<Item = &'a Campaign>,
    {
        campaigns
            .into_iter()
            .map(|campaign| self.apply_if_applicable(cart, campaign))
            .filter_map(Result::transpose)
            .collect()
    }

    /// Whether a strategy is registered for `campaign_type`.
    pub fn supports(&self, campaign_type: CampaignType) -> bool {
        self.strategies.contains_key(&campaign_type)
    }

    /// Registered campaign types, sorted.
    pub fn campaign_types(&self) -> Vec<CampaignType> {
        let mut types: Vec<_> = self.strategies.keys().copied().collect();
        types.sort();
        types
    }

    fn apply_if_applicable(
        &self,
        cart: &Cart,
        campaign: &Campaign,
    ) -> Result<Option<Discount>, DiscountError> {
        let campaign_type = campaign.campaign_type();
        let strategy = self
            .strategies
            .get(&campaign_type)
            .ok_or(DiscountError::StrategyNotFound(campaign_type))?;

        let discount = strategy.try_apply(cart, campaign)?;
        match &discount {
            Some(granted) => {
                log::debug!("campaign {:?} granted {}", campaign.name(), granted.amount())
            }
            None => log::trace!("campaign {:?} not applicable", campaign.name()),
        }
        Ok(discount)
    }
}

impl fmt::Debug for DiscountService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscountService")
            .field("campaign_types", &self.campaign_types())
            .finish()
    }
}

/// Collects strategies for a [`DiscountService`].
///
/// ```
/// use discount_engine_rs::{CampaignType, DiscountService, PercentageStrategy};
///
/// let service = DiscountService::builder()
///     .register(PercentageStrategy)
///     .build()
///     .unwrap();
/// assert!(service.supports(CampaignType::Percentage));
/// ```
#[derive(Default)]
pub struct DiscountServiceBuilder {
    strategies: Vec<Box<dyn RegisteredStrategy>>,
}

impl DiscountServiceBuilder {
    pub fn register<S>(mut self, strategy: S) -> Self
    where
        S: DiscountStrategy + 'static,
    {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn register_boxed(mut self, strategy: Box<dyn RegisteredStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// # Errors
    ///
    /// - [`DiscountError::DuplicateStrategy`] - Two strategies declare the same campaign type.
    pub fn build(self) -> Result<DiscountService, DiscountError> {
        DiscountService::new(self.strategies)
    }
}

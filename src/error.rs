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

//! Error types for cart construction, service configuration and evaluation.

use crate::base::CampaignType;
use rust_decimal::Decimal;
use thiserror::Error;

/// Discount engine errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscountError {
    /// A required text field is empty or whitespace only
    #[error("{0} must not be blank")]
    BlankField(&'static str),

    /// Cart item quantity is zero or negative
    #[error("invalid quantity {0} (must be positive)")]
    InvalidQuantity(i64),

    /// Cart item quantity does not fit the supported range
    #[error("quantity {0} is out of range (maximum {max})", max = u32::MAX)]
    QuantityOutOfRange(i64),

    /// Price, rate or threshold is negative
    #[error("{field} must not be negative: {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// Two strategies were registered for the same campaign type
    #[error("duplicate strategy for campaign type: {0}")]
    DuplicateStrategy(CampaignType),

    /// No strategy is registered for the campaign's type
    #[error("strategy for campaign type {0} not found")]
    StrategyNotFound(CampaignType),

    /// The resolved strategy cannot handle the campaign variant it was given
    #[error("strategy {strategy} expected a {expected} campaign but got {actual}")]
    TypeMismatch {
        strategy: &'static str,
        expected: CampaignType,
        actual: CampaignType,
    },

    /// Monetary division by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Monetary result too large to hold two fractional digits
    #[error("monetary amount out of range")]
    Overflow,
}

/// Broad category of a [`DiscountError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed cart item or campaign, raised at construction.
    Validation,
    /// Broken strategy registry, raised when building the service.
    Configuration,
    /// Campaign type without a registered strategy, raised by `evaluate`.
    StrategyNotFound,
    /// Strategy and campaign variant disagree, raised by `evaluate`.
    TypeMismatch,
    /// Monetary arithmetic failure.
    Arithmetic,
}

impl DiscountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BlankField(_)
            | Self::InvalidQuantity(_)
            | Self::QuantityOutOfRange(_)
            | Self::NegativeAmount { .. } => ErrorKind::Validation,
            Self::DuplicateStrategy(_) => ErrorKind::Configuration,
            Self::StrategyNotFound(_) => ErrorKind::StrategyNotFound,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::DivisionByZero | Self::Overflow => ErrorKind::Arithmetic,
        }
    }
}

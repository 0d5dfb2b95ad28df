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

//! Campaign type tags used as strategy registry keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying a campaign variant.
///
/// Every [`Campaign`](crate::Campaign) variant has exactly one tag, and the
/// [`DiscountService`](crate::DiscountService) maps each tag to at most one
/// strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    /// Percentage off the cart total.
    Percentage,
}

impl CampaignType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

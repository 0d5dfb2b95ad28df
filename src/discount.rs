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

//! Granted discounts.

use crate::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discount granted by one campaign.
///
/// The name is copied from the campaign that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Discount {
    name: String,
    amount: Money,
}

impl Discount {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_name_and_amount() {
        let discount = Discount::new("Summer Sale", Money::from_cents(2500));
        assert_eq!(discount.to_string(), "Summer Sale: 25.00");
    }

    #[test]
    fn serializes_amount_as_string() {
        let discount = Discount::new("Summer Sale", Money::from_cents(2500));
        let json = serde_json::to_value(&discount).unwrap();
        assert_eq!(json["name"], "Summer Sale");
        assert_eq!(json["amount"], "25.00");
    }
}

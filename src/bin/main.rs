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

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use discount_engine_rs::{
    Campaign, CampaignType, Cart, CartItem, Discount, DiscountError, DiscountService,
    PercentageCampaign, default_strategies,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

/// Discount Engine - Evaluate campaigns against a cart
///
/// Reads a cart and a list of campaigns from CSV files and writes the granted
/// discounts to stdout. Set `RUST_LOG=debug` to trace the evaluation.
#[derive(Parser, Debug)]
#[command(name = "discount-engine-rs")]
#[command(about = "Evaluates campaign CSVs against a cart CSV", long_about = None)]
struct Args {
    /// Path to CSV file with cart items
    ///
    /// Expected format: product,quantity,unit_price
    #[arg(value_name = "CART")]
    cart: PathBuf,

    /// Path to CSV file with campaigns
    ///
    /// Expected format: type,name,rate,min_order_total
    #[arg(short, long, value_name = "FILE")]
    campaigns: PathBuf,
}

/// Errors raised while reading the input files.
#[derive(Error, Debug)]
enum InputError {
    #[error("cannot open '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {source}")]
    InvalidRow { row: usize, source: DiscountError },

    #[error("cart: {0}")]
    InvalidCart(DiscountError),
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let discounts = match run(&args) {
        Ok(discounts) => discounts,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_discounts(&discounts, std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<Vec<Discount>, Box<dyn std::error::Error>> {
    let cart = read_cart(open(&args.cart)?)?;
    let campaigns = read_campaigns(open(&args.campaigns)?)?;
    log::info!(
        "evaluating {} campaign(s) against {} item(s), total {}",
        campaigns.len(),
        cart.len(),
        cart.total()
    );

    let service = DiscountService::new(default_strategies())?;
    Ok(service.evaluate(&cart, &campaigns)?)
}

fn open(path: &Path) -> Result<BufReader<File>, InputError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(Trim::All) // Handle whitespace in fields like " Laptop "
        .has_headers(true)
        .from_reader(reader)
}

/// Raw cart CSV record.
///
/// Fields: `product, quantity, unit_price`
#[derive(Debug, Deserialize)]
struct CartRecord {
    product: String,
    quantity: i64,
    unit_price: Decimal,
}

impl CartRecord {
    fn into_item(self) -> Result<CartItem, DiscountError> {
        if self.quantity <= 0 {
            return Err(DiscountError::InvalidQuantity(self.quantity));
        }
        let quantity = u32::try_from(self.quantity)
            .map_err(|_| DiscountError::QuantityOutOfRange(self.quantity))?;
        CartItem::new(self.product, quantity, self.unit_price)
    }
}

/// Raw campaign CSV record.
///
/// Fields: `type, name, rate, min_order_total`
#[derive(Debug, Deserialize)]
struct CampaignRecord {
    #[serde(rename = "type")]
    campaign_type: CampaignType,
    name: String,
    rate: Decimal,
    min_order_total: Decimal,
}

impl CampaignRecord {
    fn into_campaign(self) -> Result<Campaign, DiscountError> {
        match self.campaign_type {
            CampaignType::Percentage => {
                PercentageCampaign::new(self.name, self.rate, self.min_order_total)
                    .map(Campaign::from)
            }
        }
    }
}

/// Reads a cart from CSV.
///
/// Unlike a transaction log, a cart with a dropped line has a wrong total, so
/// the first invalid row fails the whole read.
///
/// # Errors
///
/// Returns an error on malformed CSV, the first row that fails validation or
/// a cart total out of range.
fn read_cart<R: Read>(reader: R) -> Result<Cart, InputError> {
    let mut rdr = csv_reader(reader);
    let mut items = Vec::new();

    for (index, result) in rdr.deserialize::<CartRecord>().enumerate() {
        let item = result?
            .into_item()
            .map_err(|source| InputError::InvalidRow { row: index + 1, source })?;
        items.push(item);
    }

    Cart::new(items).map_err(InputError::InvalidCart)
}

/// Reads campaigns from CSV, preserving file order.
///
/// # Errors
///
/// Returns an error on malformed CSV, an unknown campaign type or the first
/// row that fails validation.
fn read_campaigns<R: Read>(reader: R) -> Result<Vec<Campaign>, InputError> {
    let mut rdr = csv_reader(reader);
    let mut campaigns = Vec::new();

    for (index, result) in rdr.deserialize::<CampaignRecord>().enumerate() {
        let campaign = result?
            .into_campaign()
            .map_err(|source| InputError::InvalidRow { row: index + 1, source })?;
        campaigns.push(campaign);
    }

    Ok(campaigns)
}

/// Writes discounts as CSV.
///
/// # CSV Format
///
/// Columns: `name, amount`
///
/// ```csv
/// name,amount
/// Summer Sale,25.00
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_discounts<W: Write>(discounts: &[Discount], writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    for discount in discounts {
        wtr.serialize(discount)?;
    }

    wtr.flush()?;
    Ok(())
}

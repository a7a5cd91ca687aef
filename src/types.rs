//! Result record types produced by the query functions.
//!
//! Queries that pair an entity with a computed scalar return small immutable
//! records rather than bare tuples, so call sites read by field name.
//! Records that borrow from the input collections carry the input lifetime;
//! fully owned records are also deserializable.

use chrono::NaiveDate;
use mercato_types::{Customer, Product, Supplier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer paired with the date of their earliest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirstOrder<'a> {
    pub customer: &'a Customer,
    pub first_order: NaiveDate,
}

/// A customer paired with the suppliers located in the same country and city.
///
/// Every customer gets an entry; the supplier list is empty when nothing
/// matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSuppliers<'a> {
    pub customer: &'a Customer,
    pub suppliers: Vec<&'a Supplier>,
}

/// Products of one category, nested by stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    /// Stock levels in first-encounter order within the category.
    pub stock_groups: Vec<StockGroup>,
}

/// Unit prices of the products sharing one stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockGroup {
    pub units_in_stock: u32,
    /// Prices in encounter order within the stock group, never re-sorted.
    pub prices: Vec<Decimal>,
}

/// Price bucket assigned to a product by unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Cheap,
    Middle,
    Expensive,
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cheap => "cheap",
            Self::Middle => "middle",
            Self::Expensive => "expensive",
        };
        f.write_str(label)
    }
}

/// One price tier together with its products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierGroup<'a> {
    pub tier: PriceTier,
    /// The threshold parameter echoed as the group key. For the expensive
    /// tier this is a label only; it never bounds membership.
    pub bound: Decimal,
    pub products: Vec<&'a Product>,
}

/// Per-city averages over the customers based there.
///
/// Both averages are truncated toward zero, matching decimal-to-integer
/// narrowing rather than rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityStats {
    pub city: String,
    /// Average per-customer turnover.
    pub average_income: i64,
    /// Average per-customer order count.
    pub average_intensity: i64,
}

/// Collection sizes of a [`Dataset`](crate::Dataset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetStats {
    pub customers: usize,
    pub orders: usize,
    pub suppliers: usize,
    pub products: usize,
}

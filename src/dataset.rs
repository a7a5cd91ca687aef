//! Read-only dataset facade over the caller's collections.
//!
//! [`Dataset`] bundles the customer, supplier, and product collections and
//! exposes every query as a method, so callers that hold all three
//! collections in one place don't have to thread slices around. It owns the
//! data it is built with and never mutates it; the free functions in
//! [`customers`](crate::customers), [`suppliers`](crate::suppliers), and
//! [`products`](crate::products) remain the primitive API.

use crate::error::Result;
use crate::types::{
    CategoryGroup, CityStats, CustomerSuppliers, DatasetStats, FirstOrder, TierGroup,
};
use crate::{customers, products, suppliers};
use mercato_types::{Customer, Product, Supplier};
use rust_decimal::Decimal;

/// An immutable bundle of the three entity collections.
///
/// # Examples
///
/// ```rust
/// use mercato::{Customer, Dataset, Supplier};
///
/// let dataset = Dataset::builder()
///     .customers(vec![Customer::builder("Folk och fä HB")
///         .country("Sweden")
///         .city("Bräcke")
///         .build()])
///     .suppliers(vec![Supplier::new("Norrland AB", "Sweden", "Bräcke")])
///     .build();
///
/// let pairs = dataset.colocated_suppliers();
/// assert_eq!(pairs[0].suppliers.len(), 1);
/// assert_eq!(dataset.stats().customers, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    customers: Vec<Customer>,
    suppliers: Vec<Supplier>,
    products: Vec<Product>,
}

impl Dataset {
    /// Create a dataset directly from the three collections.
    pub fn new(
        customers: Vec<Customer>,
        suppliers: Vec<Supplier>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            customers,
            suppliers,
            products,
        }
    }

    /// Start building a dataset collection by collection.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Collection sizes, with orders counted across all customers.
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            customers: self.customers.len(),
            orders: self.customers.iter().map(Customer::order_count).sum(),
            suppliers: self.suppliers.len(),
            products: self.products.len(),
        }
    }

    /// See [`customers::with_turnover_over`].
    pub fn customers_with_turnover_over(&self, limit: Decimal) -> Vec<&Customer> {
        customers::with_turnover_over(&self.customers, limit)
    }

    /// See [`customers::with_any_order_over`].
    pub fn customers_with_any_order_over(&self, limit: Decimal) -> Vec<&Customer> {
        customers::with_any_order_over(&self.customers, limit)
    }

    /// See [`customers::first_order_dates`].
    pub fn first_order_dates(&self) -> Vec<FirstOrder<'_>> {
        customers::first_order_dates(&self.customers)
    }

    /// See [`customers::first_order_dates_sorted`].
    pub fn first_order_dates_sorted(&self) -> Vec<FirstOrder<'_>> {
        customers::first_order_dates_sorted(&self.customers)
    }

    /// See [`customers::with_incomplete_contacts`].
    pub fn customers_with_incomplete_contacts(&self) -> Vec<&Customer> {
        customers::with_incomplete_contacts(&self.customers)
    }

    /// See [`customers::city_statistics`].
    pub fn city_statistics(&self) -> Vec<CityStats> {
        customers::city_statistics(&self.customers)
    }

    /// See [`suppliers::colocated_suppliers`].
    pub fn colocated_suppliers(&self) -> Vec<CustomerSuppliers<'_>> {
        suppliers::colocated_suppliers(&self.customers, &self.suppliers)
    }

    /// See [`suppliers::colocated_suppliers_grouped`].
    pub fn colocated_suppliers_grouped(&self) -> Vec<CustomerSuppliers<'_>> {
        suppliers::colocated_suppliers_grouped(&self.customers, &self.suppliers)
    }

    /// See [`suppliers::unique_countries_concat`].
    pub fn unique_supplier_countries(&self) -> String {
        suppliers::unique_countries_concat(&self.suppliers)
    }

    /// See [`products::group_by_category_and_stock`].
    pub fn products_by_category_and_stock(&self) -> Vec<CategoryGroup> {
        products::group_by_category_and_stock(&self.products)
    }

    /// See [`products::group_by_price_tier`].
    pub fn products_by_price_tier(
        &self,
        cheap: Decimal,
        middle: Decimal,
        expensive: Decimal,
    ) -> Result<Vec<TierGroup<'_>>> {
        products::group_by_price_tier(&self.products, cheap, middle, expensive)
    }
}

/// Builder assembling a [`Dataset`] from owned collections.
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    customers: Vec<Customer>,
    suppliers: Vec<Supplier>,
    products: Vec<Product>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the customer collection.
    pub fn customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    /// Replace the supplier collection.
    pub fn suppliers(mut self, suppliers: Vec<Supplier>) -> Self {
        self.suppliers = suppliers;
        self
    }

    /// Replace the product collection.
    pub fn products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn build(self) -> Dataset {
        log::debug!(
            "building dataset: {} customers, {} suppliers, {} products",
            self.customers.len(),
            self.suppliers.len(),
            self.products.len()
        );
        Dataset {
            customers: self.customers,
            suppliers: self.suppliers,
            products: self.products,
        }
    }
}

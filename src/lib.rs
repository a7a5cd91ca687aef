//! Embedded in-memory query library for customer, order, supplier, and
//! product collections.
//!
//! All operations are pure, read-only transformations over caller-owned
//! slices: filters, joins, groupings, and aggregations in the declarative
//! style. There is no I/O, no persistence, and no shared state; every call
//! is independent and reentrant.
//!
//! ```rust
//! use mercato::{Customer, Supplier};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let customers = vec![
//!     Customer::builder("Alfreds Futterkiste")
//!         .country("Germany")
//!         .city("Berlin")
//!         .order(Decimal::from(50), date)
//!         .order(Decimal::from(60), date)
//!         .build(),
//! ];
//!
//! let heavy = mercato::with_turnover_over(&customers, Decimal::from(100));
//! assert_eq!(heavy.len(), 1);
//!
//! let suppliers = vec![Supplier::new("Berlin Spezialitäten", "Germany", "Berlin")];
//! let pairs = mercato::colocated_suppliers(&customers, &suppliers);
//! assert_eq!(pairs[0].suppliers.len(), 1);
//! ```

pub mod customers;
pub mod dataset;
pub mod error;
pub mod products;
pub mod suppliers;
pub mod types;

pub use dataset::{Dataset, DatasetBuilder};
pub use error::{MercatoError, Result};

pub use mercato_types::{Customer, CustomerBuilder, Order, Product, Supplier};

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;

pub use customers::{
    city_statistics, first_order_dates, first_order_dates_sorted, with_any_order_over,
    with_incomplete_contacts, with_turnover_over,
};
pub use products::{group_by_category_and_stock, group_by_price_tier};
pub use suppliers::{colocated_suppliers, colocated_suppliers_grouped, unique_countries_concat};

pub use types::{
    CategoryGroup, CityStats, CustomerSuppliers, DatasetStats, FirstOrder, PriceTier, StockGroup,
    TierGroup,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Dataset, DatasetBuilder, MercatoError, Result};

    pub use crate::{Customer, CustomerBuilder, Order, Product, Supplier};

    pub use crate::types::{
        CategoryGroup, CityStats, CustomerSuppliers, DatasetStats, FirstOrder, PriceTier,
        StockGroup, TierGroup,
    };

    pub use chrono::NaiveDate;
    pub use rust_decimal::Decimal;
}

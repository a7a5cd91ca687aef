use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A supplier, matched against customers by country and city equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub country: String,
    pub city: String,
}

impl Supplier {
    /// Create a new supplier.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            city: city.into(),
        }
    }

    /// Whether this supplier sits in exactly the given country and city.
    ///
    /// # Examples
    ///
    /// ```
    /// use mercato_types::Supplier;
    ///
    /// let supplier = Supplier::new("Tokyo Traders", "Japan", "Tokyo");
    /// assert!(supplier.located_in("Japan", "Tokyo"));
    /// assert!(!supplier.located_in("Japan", "Osaka"));
    /// ```
    pub fn located_in(&self, country: &str, city: &str) -> bool {
        self.country == country && self.city == city
    }
}

/// A catalog product with stock level and unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub units_in_stock: u32,
    pub unit_price: Decimal,
}

impl Product {
    /// Create a new product.
    ///
    /// # Examples
    ///
    /// ```
    /// use mercato_types::Product;
    /// use rust_decimal::Decimal;
    ///
    /// let chai = Product::new("Chai", "Beverages", 39, Decimal::from(18));
    /// assert_eq!(chai.category, "Beverages");
    /// ```
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        units_in_stock: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            units_in_stock,
            unit_price,
        }
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single order placed by a customer.
///
/// Orders carry the total amount and the order date; they belong to exactly
/// one [`Customer`] and hold no back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Total order amount.
    pub total: Decimal,
    /// Date the order was placed.
    pub order_date: NaiveDate,
}

impl Order {
    /// Create a new order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mercato_types::Order;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let order = Order::new(Decimal::new(1850, 2), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    /// assert_eq!(order.total, Decimal::new(1850, 2));
    /// ```
    pub fn new(total: Decimal, order_date: NaiveDate) -> Self {
        Self { total, order_date }
    }
}

/// A customer together with its ordered sequence of orders.
///
/// Customers are owned entirely by the caller; query functions never
/// construct, mutate, or destroy them. The `orders` sequence preserves the
/// order the caller supplied and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub company_name: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    /// Sales region; `None` (or an empty string) means undefined.
    #[serde(default)]
    pub region: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Start building a customer with the given company name.
    ///
    /// All other fields default to empty; see [`CustomerBuilder`].
    pub fn builder(company_name: impl Into<String>) -> CustomerBuilder {
        CustomerBuilder::new(company_name)
    }

    /// Sum of all order totals. Zero for a customer with no orders.
    ///
    /// # Examples
    ///
    /// ```
    /// use mercato_types::Customer;
    /// use rust_decimal::Decimal;
    ///
    /// let customer = Customer::builder("Empty Shelf Ltd").build();
    /// assert_eq!(customer.turnover(), Decimal::ZERO);
    /// ```
    pub fn turnover(&self) -> Decimal {
        self.orders
            .iter()
            .fold(Decimal::ZERO, |acc, order| acc + order.total)
    }

    /// Number of orders placed by this customer.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Earliest order date, or `None` for a customer with no orders.
    pub fn first_order_date(&self) -> Option<NaiveDate> {
        self.orders.iter().map(|order| order.order_date).min()
    }
}

/// Builder for [`Customer`] values.
///
/// Intended for tests, demos, and data-provisioning code; the query library
/// itself only ever reads customers.
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    company_name: String,
    country: String,
    city: String,
    postal_code: String,
    region: Option<String>,
    phone: String,
    orders: Vec<Order>,
}

impl CustomerBuilder {
    /// Create a builder with the given company name and empty defaults.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            country: String::new(),
            city: String::new(),
            postal_code: String::new(),
            region: None,
            phone: String::new(),
            orders: Vec::new(),
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Append a single order.
    pub fn order(mut self, total: Decimal, order_date: NaiveDate) -> Self {
        self.orders.push(Order::new(total, order_date));
        self
    }

    /// Replace the order sequence wholesale.
    pub fn orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    pub fn build(self) -> Customer {
        Customer {
            company_name: self.company_name,
            country: self.country,
            city: self.city,
            postal_code: self.postal_code,
            region: self.region,
            phone: self.phone,
            orders: self.orders,
        }
    }
}

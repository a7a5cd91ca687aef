//! Customer-centric queries: turnover filters, first-order projections, and
//! per-city statistics.
//!
//! Every function here is a pure, read-only pass over the supplied slice.
//! Empty input yields empty output; nothing is ever mutated.

use crate::types::{CityStats, FirstOrder};
use mercato_types::Customer;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rustc_hash::FxHashMap;

/// Select the customers whose total turnover strictly exceeds `limit`.
///
/// Turnover is the sum of all order totals; a customer with no orders has a
/// turnover of zero and is only included when `limit` is negative.
///
/// # Examples
///
/// ```rust
/// use mercato::customers::with_turnover_over;
/// use mercato::Customer;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let customers = vec![
///     Customer::builder("Alfreds Futterkiste")
///         .order(Decimal::from(50), date)
///         .order(Decimal::from(60), date)
///         .build(),
///     Customer::builder("Bottom-Dollar Markets").build(),
/// ];
///
/// let heavy = with_turnover_over(&customers, Decimal::from(100));
/// assert_eq!(heavy.len(), 1);
/// assert_eq!(heavy[0].company_name, "Alfreds Futterkiste");
/// ```
pub fn with_turnover_over(customers: &[Customer], limit: Decimal) -> Vec<&Customer> {
    customers
        .iter()
        .filter(|customer| customer.turnover() > limit)
        .collect()
}

/// Select the customers having at least one order strictly greater than
/// `limit`.
///
/// # Examples
///
/// ```rust
/// use mercato::customers::with_any_order_over;
/// use mercato::Customer;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let customers = vec![
///     Customer::builder("Around the Horn")
///         .order(Decimal::from(30), date)
///         .order(Decimal::from(95), date)
///         .build(),
/// ];
///
/// assert_eq!(with_any_order_over(&customers, Decimal::from(90)).len(), 1);
/// assert!(with_any_order_over(&customers, Decimal::from(95)).is_empty());
/// ```
pub fn with_any_order_over(customers: &[Customer], limit: Decimal) -> Vec<&Customer> {
    customers
        .iter()
        .filter(|customer| customer.orders.iter().any(|order| order.total > limit))
        .collect()
}

/// Pair each customer with the date of their earliest order.
///
/// Customers with no orders are excluded entirely. Input order is preserved.
///
/// # Examples
///
/// ```rust
/// use mercato::customers::first_order_dates;
/// use mercato::Customer;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let customers = vec![
///     Customer::builder("Ernst Handel")
///         .order(Decimal::from(10), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
///         .order(Decimal::from(10), NaiveDate::from_ymd_opt(2023, 12, 24).unwrap())
///         .build(),
///     Customer::builder("No Orders Yet").build(),
/// ];
///
/// let entries = first_order_dates(&customers);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].first_order, NaiveDate::from_ymd_opt(2023, 12, 24).unwrap());
/// ```
pub fn first_order_dates(customers: &[Customer]) -> Vec<FirstOrder<'_>> {
    customers
        .iter()
        .filter_map(|customer| {
            customer.first_order_date().map(|first_order| FirstOrder {
                customer,
                first_order,
            })
        })
        .collect()
}

/// [`first_order_dates`] ordered by entry date, then order count, then
/// company name, all ascending.
///
/// The sort is stable, so customers equal on all three keys keep their input
/// order.
pub fn first_order_dates_sorted(customers: &[Customer]) -> Vec<FirstOrder<'_>> {
    let mut entries = first_order_dates(customers);
    entries.sort_by(|a, b| {
        a.first_order
            .cmp(&b.first_order)
            .then_with(|| a.customer.order_count().cmp(&b.customer.order_count()))
            .then_with(|| a.customer.company_name.cmp(&b.customer.company_name))
    });
    entries
}

/// Select the customers whose contact record looks incomplete.
///
/// A customer is flagged when ANY of the following holds:
/// - the postal code is empty or contains a character that is not an ASCII
///   digit (non-ASCII digits count as non-digits),
/// - the region is undefined (`None` or empty),
/// - the phone number carries no operator code (no `'('`).
///
/// # Examples
///
/// ```rust
/// use mercato::customers::with_incomplete_contacts;
/// use mercato::Customer;
///
/// let customers = vec![
///     Customer::builder("Wellington Importadora")
///         .postal_code("08737-363")
///         .region("SP")
///         .phone("(14) 555-8122")
///         .build(),
///     Customer::builder("North/South")
///         .postal_code("10025")
///         .region("NY")
///         .phone("(212) 555-0199")
///         .build(),
/// ];
///
/// let flagged = with_incomplete_contacts(&customers);
/// assert_eq!(flagged.len(), 1);
/// assert_eq!(flagged[0].company_name, "Wellington Importadora");
/// ```
pub fn with_incomplete_contacts(customers: &[Customer]) -> Vec<&Customer> {
    customers
        .iter()
        .filter(|customer| {
            has_irregular_postal_code(&customer.postal_code)
                || customer.region.as_deref().is_none_or(str::is_empty)
                || !customer.phone.contains('(')
        })
        .collect()
}

/// An empty postal code counts as irregular, as does any non-ASCII-digit
/// character.
fn has_irregular_postal_code(postal_code: &str) -> bool {
    postal_code.is_empty() || !postal_code.chars().all(|ch| ch.is_ascii_digit())
}

/// Compute per-city averages over the customers based in each city.
///
/// For every distinct city (in first-encounter order) this reports the
/// average per-customer turnover and the average per-customer order count,
/// both truncated toward zero. Customers with no orders contribute zero to
/// both sums and still count toward the divisor.
///
/// # Examples
///
/// ```rust
/// use mercato::customers::city_statistics;
/// use mercato::Customer;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
/// let customers = vec![
///     Customer::builder("A").city("Lima").order(Decimal::from(10), date).build(),
///     Customer::builder("B").city("Lima")
///         .order(Decimal::from(20), date)
///         .order(Decimal::from(5), date)
///         .build(),
/// ];
///
/// let stats = city_statistics(&customers);
/// assert_eq!(stats[0].city, "Lima");
/// assert_eq!(stats[0].average_income, 17);    // (10 + 25) / 2 = 17.5, truncated
/// assert_eq!(stats[0].average_intensity, 1);  // (1 + 2) / 2 = 1.5, truncated
/// ```
pub fn city_statistics(customers: &[Customer]) -> Vec<CityStats> {
    let mut order: Vec<&str> = Vec::new();
    // city -> (turnover sum, order count sum, customer count)
    let mut groups: FxHashMap<&str, (Decimal, usize, usize)> = FxHashMap::default();

    for customer in customers {
        let entry = groups
            .entry(customer.city.as_str())
            .or_insert_with(|| {
                order.push(customer.city.as_str());
                (Decimal::ZERO, 0, 0)
            });
        entry.0 += customer.turnover();
        entry.1 += customer.order_count();
        entry.2 += 1;
    }

    order
        .into_iter()
        .map(|city| {
            let (turnover, orders, count) = groups[city];
            // A city group always holds at least one customer.
            let divisor = Decimal::from(count);
            CityStats {
                city: city.to_string(),
                average_income: truncate_to_i64(turnover / divisor),
                average_intensity: truncate_to_i64(Decimal::from(orders) / divisor),
            }
        })
        .collect()
}

/// Decimal-to-integer narrowing: truncate toward zero, saturating at the
/// `i64` range.
fn truncate_to_i64(value: Decimal) -> i64 {
    let truncated = value.trunc();
    truncated.to_i64().unwrap_or_else(|| {
        if truncated.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

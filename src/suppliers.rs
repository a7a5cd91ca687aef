//! Supplier queries: co-location joins against customers and country
//! roll-ups.

use crate::types::CustomerSuppliers;
use mercato_types::{Customer, Supplier};
use rustc_hash::{FxHashMap, FxHashSet};

/// Pair each customer with the suppliers located in the same country and
/// city, by scanning the supplier slice per customer.
///
/// Every customer gets an entry, with an empty supplier list when nothing
/// matches. Suppliers keep their source order within each entry.
///
/// # Examples
///
/// ```rust
/// use mercato::suppliers::colocated_suppliers;
/// use mercato::{Customer, Supplier};
///
/// let customers = vec![Customer::builder("Berglunds snabbköp")
///     .country("Sweden")
///     .city("Luleå")
///     .build()];
/// let suppliers = vec![
///     Supplier::new("Norrland AB", "Sweden", "Luleå"),
///     Supplier::new("Svensk Sjöföda AB", "Sweden", "Stockholm"),
/// ];
///
/// let pairs = colocated_suppliers(&customers, &suppliers);
/// assert_eq!(pairs[0].suppliers.len(), 1);
/// assert_eq!(pairs[0].suppliers[0].name, "Norrland AB");
/// ```
pub fn colocated_suppliers<'a>(
    customers: &'a [Customer],
    suppliers: &'a [Supplier],
) -> Vec<CustomerSuppliers<'a>> {
    customers
        .iter()
        .map(|customer| CustomerSuppliers {
            customer,
            suppliers: suppliers
                .iter()
                .filter(|supplier| supplier.located_in(&customer.country, &customer.city))
                .collect(),
        })
        .collect()
}

/// Same pairing as [`colocated_suppliers`], but via a city-keyed index built
/// once up front.
///
/// Suppliers are bucketed by city; each customer then looks up its city
/// bucket and keeps the suppliers whose country also matches. The two
/// strategies produce identical results, since buckets preserve source
/// order.
pub fn colocated_suppliers_grouped<'a>(
    customers: &'a [Customer],
    suppliers: &'a [Supplier],
) -> Vec<CustomerSuppliers<'a>> {
    let mut by_city: FxHashMap<&str, Vec<&Supplier>> = FxHashMap::default();
    for supplier in suppliers {
        by_city
            .entry(supplier.city.as_str())
            .or_default()
            .push(supplier);
    }
    log::debug!(
        "indexed {} suppliers across {} cities",
        suppliers.len(),
        by_city.len()
    );

    customers
        .iter()
        .map(|customer| CustomerSuppliers {
            customer,
            suppliers: by_city
                .get(customer.city.as_str())
                .map(|bucket| {
                    bucket
                        .iter()
                        .copied()
                        .filter(|supplier| supplier.country == customer.country)
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}

/// Concatenate every distinct supplier country name into a single string,
/// ordered by character count and then lexicographically, with no
/// separators.
///
/// # Examples
///
/// ```rust
/// use mercato::suppliers::unique_countries_concat;
/// use mercato::Supplier;
///
/// let suppliers = vec![
///     Supplier::new("New Orleans Cajun Delights", "USA", "New Orleans"),
///     Supplier::new("Exotic Liquids", "UK", "London"),
///     Supplier::new("Grandma Kelly's Homestead", "USA", "Ann Arbor"),
///     Supplier::new("Andes Distribution", "Peru", "Lima"),
/// ];
///
/// assert_eq!(unique_countries_concat(&suppliers), "UKUSAPeru");
/// ```
pub fn unique_countries_concat(suppliers: &[Supplier]) -> String {
    let mut seen = FxHashSet::default();
    let mut countries: Vec<&str> = Vec::new();
    for supplier in suppliers {
        if seen.insert(supplier.country.as_str()) {
            countries.push(supplier.country.as_str());
        }
    }

    countries.sort_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    });
    countries.concat()
}

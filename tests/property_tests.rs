use chrono::{Days, NaiveDate};
use mercato::prelude::*;
use proptest::prelude::*;

const COUNTRIES: [&str; 4] = ["USA", "UK", "Peru", "Germany"];
const CITIES: [&str; 4] = ["Lima", "London", "Berlin", "Seattle"];
const CATEGORIES: [&str; 3] = ["Beverages", "Seafood", "Produce"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn arb_customer() -> impl Strategy<Value = Customer> {
    (
        "[A-Z][a-z]{2,8}",
        0usize..COUNTRIES.len(),
        0usize..CITIES.len(),
        prop::collection::vec((0i64..100_000, 0u64..1500), 0..6),
    )
        .prop_map(|(name, country, city, orders)| {
            let mut builder = Customer::builder(name)
                .country(COUNTRIES[country])
                .city(CITIES[city]);
            for (cents, day_offset) in orders {
                builder = builder.order(
                    Decimal::new(cents, 2),
                    base_date() + Days::new(day_offset),
                );
            }
            builder.build()
        })
}

fn arb_supplier() -> impl Strategy<Value = Supplier> {
    ("[A-Z][a-z]{2,8}", 0usize..COUNTRIES.len(), 0usize..CITIES.len())
        .prop_map(|(name, country, city)| Supplier::new(name, COUNTRIES[country], CITIES[city]))
}

fn arb_product() -> impl Strategy<Value = Product> {
    ("[A-Z][a-z]{2,8}", 0usize..CATEGORIES.len(), 0u32..5, 0i64..5_000)
        .prop_map(|(name, category, stock, cents)| {
            Product::new(name, CATEGORIES[category], stock, Decimal::new(cents, 2))
        })
}

proptest! {
    #[test]
    fn turnover_filter_is_a_strict_bound_partition(
        customers in prop::collection::vec(arb_customer(), 0..20),
        limit_cents in 0i64..200_000,
    ) {
        let limit = Decimal::new(limit_cents, 2);
        let selected = mercato::with_turnover_over(&customers, limit);

        for customer in &selected {
            prop_assert!(customer.turnover() > limit);
        }
        let qualifying = customers
            .iter()
            .filter(|c| c.turnover() > limit)
            .count();
        prop_assert_eq!(selected.len(), qualifying);
    }

    #[test]
    fn join_strategies_are_equivalent(
        customers in prop::collection::vec(arb_customer(), 0..15),
        suppliers in prop::collection::vec(arb_supplier(), 0..15),
    ) {
        let direct = mercato::colocated_suppliers(&customers, &suppliers);
        let grouped = mercato::colocated_suppliers_grouped(&customers, &suppliers);
        prop_assert_eq!(direct, grouped);
    }

    #[test]
    fn sorted_first_orders_are_monotone(
        customers in prop::collection::vec(arb_customer(), 0..20),
    ) {
        let sorted = mercato::first_order_dates_sorted(&customers);

        for window in sorted.windows(2) {
            let a = &window[0];
            let b = &window[1];
            let a_key = (
                a.first_order,
                a.customer.order_count(),
                a.customer.company_name.as_str(),
            );
            let b_key = (
                b.first_order,
                b.customer.order_count(),
                b.customer.company_name.as_str(),
            );
            prop_assert!(a_key <= b_key);
        }
    }

    #[test]
    fn price_tiers_partition_all_products(
        products in prop::collection::vec(arb_product(), 0..25),
        cheap_cents in 0i64..3_000,
        span_cents in 0i64..3_000,
    ) {
        let cheap = Decimal::new(cheap_cents, 2);
        let middle = cheap + Decimal::new(span_cents, 2);
        let expensive = middle + Decimal::from(10);

        let tiers = mercato::group_by_price_tier(&products, cheap, middle, expensive).unwrap();

        let mut total = 0;
        for group in &tiers {
            prop_assert!(!group.products.is_empty());
            total += group.products.len();
            for product in &group.products {
                let expected = if product.unit_price <= cheap {
                    PriceTier::Cheap
                } else if product.unit_price <= middle {
                    PriceTier::Middle
                } else {
                    PriceTier::Expensive
                };
                prop_assert_eq!(group.tier, expected);
            }
        }
        prop_assert_eq!(total, products.len());
    }

    #[test]
    fn country_concat_length_matches_distinct_lengths(
        suppliers in prop::collection::vec(arb_supplier(), 0..25),
    ) {
        let concat = mercato::unique_countries_concat(&suppliers);

        let mut distinct: Vec<&str> = Vec::new();
        for supplier in &suppliers {
            if !distinct.contains(&supplier.country.as_str()) {
                distinct.push(supplier.country.as_str());
            }
        }
        let expected: usize = distinct.iter().map(|c| c.chars().count()).sum();
        prop_assert_eq!(concat.chars().count(), expected);
    }
}

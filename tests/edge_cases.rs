use chrono::NaiveDate;
use mercato::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Test 1: every query yields an empty result over empty collections.
#[test]
fn test_empty_collections() {
    let customers: Vec<Customer> = Vec::new();
    let suppliers: Vec<Supplier> = Vec::new();
    let products: Vec<Product> = Vec::new();

    assert!(mercato::with_turnover_over(&customers, Decimal::ZERO).is_empty());
    assert!(mercato::with_any_order_over(&customers, Decimal::ZERO).is_empty());
    assert!(mercato::first_order_dates(&customers).is_empty());
    assert!(mercato::first_order_dates_sorted(&customers).is_empty());
    assert!(mercato::with_incomplete_contacts(&customers).is_empty());
    assert!(mercato::city_statistics(&customers).is_empty());
    assert!(mercato::colocated_suppliers(&customers, &suppliers).is_empty());
    assert!(mercato::colocated_suppliers_grouped(&customers, &suppliers).is_empty());
    assert_eq!(mercato::unique_countries_concat(&suppliers), "");
    assert!(mercato::group_by_category_and_stock(&products).is_empty());
    assert!(
        mercato::group_by_price_tier(
            &products,
            Decimal::ZERO,
            Decimal::ONE,
            Decimal::TWO
        )
        .unwrap()
        .is_empty()
    );
}

/// Test 2: threshold validation fails fast even for empty product slices.
#[test]
fn test_unordered_thresholds_rejected_before_evaluation() {
    let products: Vec<Product> = Vec::new();

    let err = mercato::group_by_price_tier(
        &products,
        Decimal::from(5),
        Decimal::from(1),
        Decimal::from(9),
    )
    .unwrap_err();

    assert!(err.to_string().contains("cheap bound"));
}

/// Test 3: customers without orders survive turnover filtering only for
/// negative limits and never reach the first-order projection.
#[test]
fn test_orderless_customer_boundaries() {
    let customers = vec![Customer::builder("Paris spécialités")
        .city("Paris")
        .build()];

    assert!(mercato::with_turnover_over(&customers, Decimal::ZERO).is_empty());
    assert_eq!(
        mercato::with_turnover_over(&customers, Decimal::from(-1)).len(),
        1
    );
    assert!(mercato::first_order_dates(&customers).is_empty());

    // The city still appears in statistics, with both averages at zero.
    let stats = mercato::city_statistics(&customers);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].average_income, 0);
    assert_eq!(stats[0].average_intensity, 0);
}

/// Test 4: non-ASCII digits and whitespace in postal codes flag the
/// customer; an empty postal code does too.
#[test]
fn test_postal_code_unicode_handling() {
    let make = |name: &str, postal: &str| {
        Customer::builder(name)
            .postal_code(postal)
            .region("R")
            .phone("(1) 555-0100")
            .build()
    };
    let customers = vec![
        make("AsciiDigits", "10117"),
        make("ArabicIndic", "١٢٣٤٥"),
        make("Fullwidth", "１２３４５"),
        make("Empty", ""),
        make("Spaced", "101 17"),
    ];

    let flagged = mercato::with_incomplete_contacts(&customers);
    let names: Vec<_> = flagged.iter().map(|c| c.company_name.as_str()).collect();
    assert_eq!(names, vec!["ArabicIndic", "Fullwidth", "Empty", "Spaced"]);
}

/// Test 5: the three-key sort is stable for fully tied entries.
#[test]
fn test_sort_stability_on_full_ties() {
    let d = date(2024, 2, 2);
    let twin = |name: &str| {
        Customer::builder(name)
            .order(Decimal::from(7), d)
            .build()
    };
    // Same name, date, and count: input order must survive.
    let customers = vec![twin("Twin"), twin("Twin"), twin("Twin")];

    let sorted = mercato::first_order_dates_sorted(&customers);
    let ptrs: Vec<*const Customer> = sorted.iter().map(|e| e.customer as *const _).collect();
    let expected: Vec<*const Customer> = customers.iter().map(|c| c as *const _).collect();
    assert_eq!(ptrs, expected);
}

/// Test 6: a supplier city shared across countries never cross-matches, in
/// either join strategy.
#[test]
fn test_city_collision_across_countries() {
    let customers = vec![
        Customer::builder("London Ontario Goods")
            .country("Canada")
            .city("London")
            .build(),
    ];
    let suppliers = vec![
        Supplier::new("UK Staples", "UK", "London"),
        Supplier::new("Ontario Fresh", "Canada", "London"),
    ];

    for pairs in [
        mercato::colocated_suppliers(&customers, &suppliers),
        mercato::colocated_suppliers_grouped(&customers, &suppliers),
    ] {
        assert_eq!(pairs[0].suppliers.len(), 1);
        assert_eq!(pairs[0].suppliers[0].name, "Ontario Fresh");
    }
}

/// Test 7: tier boundaries are inclusive below and the expensive parameter
/// never excludes anything.
#[test]
fn test_tier_boundary_inclusivity() {
    let products = vec![
        Product::new("AtCheap", "X", 1, Decimal::from(10)),
        Product::new("JustAbove", "X", 1, Decimal::new(1001, 2)),
        Product::new("AtMiddle", "X", 1, Decimal::from(20)),
        Product::new("WayAbove", "X", 1, Decimal::from(999)),
    ];

    let tiers = mercato::group_by_price_tier(
        &products,
        Decimal::from(10),
        Decimal::from(20),
        Decimal::from(30),
    )
    .unwrap();

    assert_eq!(tiers.len(), 3);
    assert_eq!(tiers[0].products.len(), 1); // 10.00
    assert_eq!(tiers[1].products.len(), 2); // 10.01 and 20.00
    assert_eq!(tiers[2].products.len(), 1); // 999.00, despite expensive = 30
}

/// Test 8: decimal truncation in city statistics goes toward zero for
/// negative aggregates too.
#[test]
fn test_truncation_toward_zero_with_refunds() {
    let d = date(2024, 3, 3);
    let customers = vec![
        Customer::builder("CreditA")
            .city("Porto")
            .order(Decimal::new(-1050, 2), d)
            .build(),
        Customer::builder("CreditB")
            .city("Porto")
            .order(Decimal::new(-450, 2), d)
            .build(),
    ];

    let stats = mercato::city_statistics(&customers);
    // (-15.00) / 2 = -7.50 -> -7, not -8.
    assert_eq!(stats[0].average_income, -7);
    assert_eq!(stats[0].average_intensity, 1);
}

/// Test 9: duplicated countries differing only by case are distinct.
#[test]
fn test_country_distinctness_is_case_sensitive() {
    let suppliers = vec![
        Supplier::new("a", "peru", "x"),
        Supplier::new("b", "Peru", "x"),
    ];

    // Same length, so lexicographic: 'P' < 'p'.
    assert_eq!(mercato::unique_countries_concat(&suppliers), "Peruperu");
}

/// Test 10: equal cheap and middle bounds leave the middle tier empty
/// rather than failing.
#[test]
fn test_degenerate_equal_thresholds() {
    let products = vec![
        Product::new("Low", "X", 1, Decimal::from(3)),
        Product::new("High", "X", 1, Decimal::from(8)),
    ];

    let tiers = mercato::group_by_price_tier(
        &products,
        Decimal::from(5),
        Decimal::from(5),
        Decimal::from(9),
    )
    .unwrap();

    assert_eq!(tiers.len(), 2);
    assert_eq!(tiers[0].tier, PriceTier::Cheap);
    assert_eq!(tiers[1].tier, PriceTier::Expensive);
}

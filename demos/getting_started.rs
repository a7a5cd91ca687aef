//! Build a small dataset and run the core queries against it.
//!
//! Run with: `cargo run --example getting_started`

use chrono::NaiveDate;
use mercato::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn main() {
    env_logger::init();

    let dataset = Dataset::builder()
        .customers(vec![
            Customer::builder("Alfreds Futterkiste")
                .country("Germany")
                .city("Berlin")
                .postal_code("12209")
                .phone("030-0074321")
                .order(Decimal::new(81440, 2), date(2023, 8, 25))
                .order(Decimal::new(87800, 2), date(2023, 10, 3))
                .build(),
            Customer::builder("Around the Horn")
                .country("UK")
                .city("London")
                .postal_code("WA1 1DP")
                .phone("(171) 555-7788")
                .order(Decimal::new(147000, 2), date(2023, 8, 25))
                .build(),
            Customer::builder("Berglunds snabbköp")
                .country("Sweden")
                .city("Luleå")
                .postal_code("95822")
                .region("Norrbotten")
                .phone("(0921) 12 34 65")
                .build(),
        ])
        .suppliers(vec![
            Supplier::new("Exotic Liquids", "UK", "London"),
            Supplier::new("Heli Süßwaren", "Germany", "Berlin"),
            Supplier::new("Inca Harvest", "Peru", "Lima"),
        ])
        .products(vec![
            Product::new("Chai", "Beverages", 39, Decimal::from(18)),
            Product::new("Chang", "Beverages", 17, Decimal::from(19)),
            Product::new("Konbu", "Seafood", 24, Decimal::from(6)),
        ])
        .build();

    println!("dataset: {:?}", dataset.stats());

    println!("\nCustomers with turnover over 1000:");
    for customer in dataset.customers_with_turnover_over(Decimal::from(1000)) {
        println!("  {} ({})", customer.company_name, customer.turnover());
    }

    println!("\nCo-located suppliers:");
    for pair in dataset.colocated_suppliers() {
        let names: Vec<&str> = pair.suppliers.iter().map(|s| s.name.as_str()).collect();
        println!("  {} -> {:?}", pair.customer.company_name, names);
    }

    println!("\nFirst orders (sorted):");
    for entry in dataset.first_order_dates_sorted() {
        println!("  {} since {}", entry.customer.company_name, entry.first_order);
    }

    println!("\nPrice tiers (10 / 20 / 30):");
    let tiers = dataset
        .products_by_price_tier(Decimal::from(10), Decimal::from(20), Decimal::from(30))
        .expect("ordered thresholds");
    for group in tiers {
        let names: Vec<&str> = group.products.iter().map(|p| p.name.as_str()).collect();
        println!("  {} (≤ {}): {:?}", group.tier, group.bound, names);
    }

    println!(
        "\nSupplier countries: {}",
        dataset.unique_supplier_countries()
    );
}

//! Per-city averages and contact-quality review over a generated dataset.
//!
//! Run with: `cargo run --example city_report`

use chrono::{Days, NaiveDate};
use mercato::prelude::*;

fn main() {
    env_logger::init();

    let base = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date");
    let cities = ["Lima", "London", "Berlin", "Seattle"];

    let customers: Vec<Customer> = (0..40)
        .map(|i| {
            let mut builder = Customer::builder(format!("Customer {i:02}"))
                .city(cities[i % cities.len()])
                .postal_code(if i % 5 == 0 {
                    format!("PC-{i:03}")
                } else {
                    format!("{i:05}")
                })
                .region(if i % 3 == 0 { "" } else { "Region" })
                .phone(if i % 4 == 0 {
                    format!("555-{i:04}")
                } else {
                    format!("(99) 555-{i:04}")
                });
            for j in 0..(i % 4) {
                builder = builder.order(
                    Decimal::new((250 * (i + j + 1)) as i64, 2),
                    base + Days::new((i * 11 + j * 3) as u64),
                );
            }
            builder.build()
        })
        .collect();

    println!("city                income  intensity");
    for stats in mercato::city_statistics(&customers) {
        println!(
            "{:<20} {:>6} {:>10}",
            stats.city, stats.average_income, stats.average_intensity
        );
    }

    let flagged = mercato::with_incomplete_contacts(&customers);
    println!("\n{} of {} customers have incomplete contact data", flagged.len(), customers.len());
}

//! # mercato-types
//!
//! Core entity types for the mercato query library.
//!
//! This crate provides the caller-owned domain model the query functions
//! operate on:
//!
//! - **Customer types**: `Customer`, `Order`, `CustomerBuilder`
//! - **Catalog types**: `Supplier`, `Product`
//!
//! All types are serializable with Serde. Monetary amounts use
//! `rust_decimal::Decimal` and order dates use `chrono::NaiveDate`, so
//! aggregation over them stays exact.
//!
//! ## Examples
//!
//! ```rust
//! use mercato_types::{Customer, Order};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let customer = Customer::builder("Alfreds Futterkiste")
//!     .country("Germany")
//!     .city("Berlin")
//!     .order(Decimal::from(42), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
//!     .build();
//! assert_eq!(customer.turnover(), Decimal::from(42));
//! ```

pub mod catalog;
pub mod customer;

pub use catalog::{Product, Supplier};
pub use customer::{Customer, CustomerBuilder, Order};

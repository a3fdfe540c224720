//! Orderdesk - console order-management queries over an Excel workbook
//!
//! The workbook carries three sheets joined by string codes: products,
//! customers and orders. This library loads them into typed in-memory
//! collections, answers ad-hoc queries over them, and writes the one mutable
//! field (a customer's contact person) back to the workbook.
//!
//! # Example
//!
//! ```no_run
//! use orderdesk::excel::WorkbookLoader;
//! use orderdesk::query;
//! use orderdesk::types::SheetNames;
//!
//! let loader = WorkbookLoader::new("orders.xlsx", SheetNames::default());
//! let dataset = loader.load();
//!
//! if let Some(product) = query::find_product(&dataset.products, "Widget") {
//!     for line in query::customers_by_product(&dataset, product) {
//!         println!("{}: {} for {:.2}", line.organization, line.quantity, line.line_total);
//!     }
//! }
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use error::{DeskError, DeskResult};
pub use types::{Customer, Dataset, GoldenClient, Order, OrderLine, Product, SheetNames};

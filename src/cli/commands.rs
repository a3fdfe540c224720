//! Operation handlers behind both the interactive shell and the one-shot
//! subcommands. Every store-facing failure is caught here and rendered as a
//! user message; nothing propagates out of a handler.

use crate::excel::ContactWriter;
use crate::query;
use crate::types::{Dataset, SheetNames};
use colored::Colorize;
use std::path::Path;

/// Format a line total for display, always with two decimal places.
fn format_money(n: f64) -> String {
    format!("{n:.2}")
}

/// Execute the customers-by-product query.
///
/// `verbose` additionally dumps every loaded order's raw code and date fields
/// before filtering, matching the reference diagnostic listing.
pub fn customers_by_product(dataset: &Dataset, product_name: &str, verbose: bool) {
    let Some(product) = query::find_product(&dataset.products, product_name) else {
        println!("{}", "Product not found.".red());
        return;
    };

    if verbose {
        for order in &dataset.orders {
            println!(
                "Order: {} {} {} {}",
                order.product_code,
                order.customer_code,
                order.code,
                order.date.format("%d.%m.%Y")
            );
        }
    }

    if !query::has_orders_for(dataset, product) {
        println!("{}", "No orders for this product.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Customers that ordered \"{}\":", product.name)
            .bold()
            .green()
    );
    for line in query::customers_by_product(dataset, product) {
        println!(
            "  {}: {}, quantity: {}, total: {}, order date: {}",
            "Organization".cyan(),
            line.organization.bold(),
            line.quantity,
            format_money(line.line_total),
            line.date.format("%d.%m.%Y")
        );
    }
}

/// Execute the golden-client query for a (year, month) window.
pub fn golden_client(dataset: &Dataset, year: i32, month: u32) {
    match query::golden_client(dataset, year, month) {
        Ok(Some(golden)) => {
            println!(
                "{} {}/{}: {} with {} orders.",
                "Golden client for".bold().green(),
                month,
                year,
                golden.organization.bold(),
                golden.order_count
            );
        }
        Ok(None) => {
            println!("{}", "No orders in this period.".yellow());
        }
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
        }
    }
}

/// Update a customer's contact person in memory, then persist the change back
/// to the workbook.
///
/// A failed writeback is reported but the in-memory mutation is kept, so
/// memory and store can diverge until the next successful write.
pub fn update_contact(
    dataset: &mut Dataset,
    workbook_path: &Path,
    sheets: &SheetNames,
    organization: &str,
    new_contact: &str,
) {
    if query::set_contact(&mut dataset.customers, organization, new_contact).is_none() {
        println!("{}", "Customer not found.".red());
        return;
    }

    let writer = ContactWriter::new(workbook_path, sheets.clone());
    match writer.write_contacts(&dataset.customers) {
        Ok(()) => {
            println!(
                "{}",
                format!("Contact person for \"{organization}\" updated to \"{new_contact}\".")
                    .green()
            );
        }
        Err(e) => {
            println!("{} {}", "Failed to save changes:".red().bold(), e);
        }
    }
}

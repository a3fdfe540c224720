//! In-memory query engine over the loaded record collections
//!
//! Linear scans, code-keyed joins, grouping with counts and an arg-max
//! selection. All functions are pure over a borrowed [`Dataset`] except
//! [`set_contact`], the single mutation.

use crate::error::{DeskError, DeskResult};
use crate::types::{Customer, Dataset, GoldenClient, OrderLine, Product};
use chrono::Datelike;
use std::collections::HashMap;

/// Case-insensitive exact match on product name.
pub fn find_product<'a>(products: &'a [Product], name: &str) -> Option<&'a Product> {
    let needle = name.to_lowercase();
    products.iter().find(|p| p.name.to_lowercase() == needle)
}

/// Case-insensitive exact match on organization name.
pub fn find_customer_by_org<'a>(customers: &'a [Customer], org: &str) -> Option<&'a Customer> {
    let needle = org.to_lowercase();
    customers
        .iter()
        .find(|c| c.organization.to_lowercase() == needle)
}

pub fn find_customer_by_code<'a>(customers: &'a [Customer], code: &str) -> Option<&'a Customer> {
    customers.iter().find(|c| c.code == code)
}

/// All (order, customer) pairs for a product, with computed line totals.
///
/// Orders whose customer code resolves to nothing are skipped, not errors.
pub fn customers_by_product(dataset: &Dataset, product: &Product) -> Vec<OrderLine> {
    dataset
        .orders
        .iter()
        .filter(|order| order.product_code == product.code)
        .filter_map(|order| {
            let customer = find_customer_by_code(&dataset.customers, &order.customer_code)?;
            Some(OrderLine {
                organization: customer.organization.clone(),
                quantity: order.quantity,
                line_total: product.price * order.quantity as f64,
                date: order.date,
            })
        })
        .collect()
}

/// Whether any order at all references the product, resolved or not.
pub fn has_orders_for(dataset: &Dataset, product: &Product) -> bool {
    dataset
        .orders
        .iter()
        .any(|order| order.product_code == product.code)
}

/// The customer with the most orders in the given (year, month) window.
///
/// Returns `Ok(None)` when no order falls in the period. Ties break to the
/// lowest customer code so the result is independent of input order. A winning
/// code with no customer record is a reported error, not a panic.
pub fn golden_client(dataset: &Dataset, year: i32, month: u32) -> DeskResult<Option<GoldenClient>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for order in &dataset.orders {
        if order.date.year() == year && order.date.month() == month {
            *counts.entry(order.customer_code.as_str()).or_insert(0) += 1;
        }
    }

    let Some((code, count)) = counts
        .iter()
        .map(|(code, count)| (*code, *count))
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    else {
        return Ok(None);
    };

    let customer = find_customer_by_code(&dataset.customers, code)
        .ok_or_else(|| DeskError::CustomerMissing(code.to_string()))?;

    Ok(Some(GoldenClient {
        customer_code: customer.code.clone(),
        organization: customer.organization.clone(),
        order_count: count,
    }))
}

/// Update the contact person of the customer matching `org` (case-insensitive)
/// in place. Returns the customer's code on success, `None` when no customer
/// matches. Persisting the change is the caller's responsibility.
pub fn set_contact(customers: &mut [Customer], org: &str, new_contact: &str) -> Option<String> {
    let needle = org.to_lowercase();
    let customer = customers
        .iter_mut()
        .find(|c| c.organization.to_lowercase() == needle)?;
    customer.contact = new_contact.to_string();
    Some(customer.code.clone())
}

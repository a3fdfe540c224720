//! Workbook loader - named sheets → typed record collections

use crate::error::{DeskError, DeskResult};
use crate::types::{Customer, Dataset, Order, Product, SheetNames};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Minimum populated leading columns for a product or customer row.
const MIN_COLS_PRODUCT: usize = 4;
const MIN_COLS_CUSTOMER: usize = 4;
/// Minimum populated leading columns for an order row.
const MIN_COLS_ORDER: usize = 6;

/// Loads the three record sheets from an .xlsx workbook.
///
/// Each sheet is loaded in its own open/close cycle and fails softly: a missing
/// sheet or unreadable workbook yields an empty collection and a warning, never
/// a process abort.
pub struct WorkbookLoader {
    path: PathBuf,
    sheets: SheetNames,
}

impl WorkbookLoader {
    pub fn new<P: AsRef<Path>>(path: P, sheets: SheetNames) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheets,
        }
    }

    /// Load all three collections. Sheet-level failures degrade to empty
    /// collections so the shell can still run against partial data.
    pub fn load(&self) -> Dataset {
        Dataset {
            products: self.load_products().unwrap_or_else(|e| {
                warn!(sheet = %self.sheets.products, "failed to load products: {e}");
                Vec::new()
            }),
            customers: self.load_customers().unwrap_or_else(|e| {
                warn!(sheet = %self.sheets.customers, "failed to load customers: {e}");
                Vec::new()
            }),
            orders: self.load_orders().unwrap_or_else(|e| {
                warn!(sheet = %self.sheets.orders, "failed to load orders: {e}");
                Vec::new()
            }),
        }
    }

    pub fn load_products(&self) -> DeskResult<Vec<Product>> {
        let range = self.sheet_range(&self.sheets.products)?;
        let mut products = Vec::new();

        for row in range.rows().skip(1) {
            if !has_populated_prefix(row, MIN_COLS_PRODUCT) {
                continue;
            }
            match parse_product(row) {
                Ok(product) => products.push(product),
                Err(e) => warn!(sheet = %self.sheets.products, "skipping row: {e}"),
            }
        }

        Ok(products)
    }

    pub fn load_customers(&self) -> DeskResult<Vec<Customer>> {
        let range = self.sheet_range(&self.sheets.customers)?;
        let mut customers = Vec::new();

        for row in range.rows().skip(1) {
            if !has_populated_prefix(row, MIN_COLS_CUSTOMER) {
                continue;
            }
            customers.push(Customer {
                code: cell_string(&row[0]),
                organization: cell_string(&row[1]),
                address: cell_string(&row[2]),
                contact: cell_string(&row[3]),
            });
        }

        Ok(customers)
    }

    pub fn load_orders(&self) -> DeskResult<Vec<Order>> {
        let range = self.sheet_range(&self.sheets.orders)?;
        let mut orders = Vec::new();

        for row in range.rows().skip(1) {
            if !has_populated_prefix(row, MIN_COLS_ORDER) {
                continue;
            }
            match parse_order(row) {
                Ok(order) => orders.push(order),
                Err(e) => warn!(sheet = %self.sheets.orders, "skipping row: {e}"),
            }
        }

        Ok(orders)
    }

    /// One open/close cycle per sheet read.
    fn sheet_range(&self, sheet_name: &str) -> DeskResult<Range<Data>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| DeskError::Workbook(format!("failed to open workbook: {e}")))?;

        workbook
            .worksheet_range(sheet_name)
            .map_err(|_| DeskError::SheetMissing(sheet_name.to_string()))
    }
}

/// A row qualifies when its first `n` cells exist and are non-empty.
fn has_populated_prefix(row: &[Data], n: usize) -> bool {
    row.len() >= n && row[..n].iter().all(|cell| !matches!(cell, Data::Empty))
}

fn parse_product(row: &[Data]) -> DeskResult<Product> {
    Ok(Product {
        code: cell_string(&row[0]),
        name: cell_string(&row[1]),
        unit: cell_string(&row[2]),
        price: cell_number(&row[3])?,
    })
}

fn parse_order(row: &[Data]) -> DeskResult<Order> {
    let quantity = cell_number(&row[4])?;
    if quantity < 1.0 || quantity.fract() != 0.0 {
        return Err(DeskError::Cell(format!(
            "quantity must be a positive integer, got '{quantity}'"
        )));
    }

    Ok(Order {
        code: cell_string(&row[0]),
        product_code: cell_string(&row[1]),
        customer_code: cell_string(&row[2]),
        application: cell_string(&row[3]),
        quantity: quantity as u32,
        date: cell_date(&row[5])?,
    })
}

/// Cell value as display text (shared strings already resolved by calamine).
pub fn cell_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => cell.to_string(),
    }
}

fn cell_number(cell: &Data) -> DeskResult<f64> {
    match cell {
        Data::Float(f) => Ok(*f),
        Data::Int(i) => Ok(*i as f64),
        Data::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| DeskError::Cell(format!("not a number: '{s}'"))),
        other => Err(DeskError::Cell(format!("not a number: '{other:?}'"))),
    }
}

fn cell_date(cell: &Data) -> DeskResult<chrono::NaiveDate> {
    let serial = match cell {
        Data::DateTime(dt) => dt.as_f64(),
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| DeskError::Cell(format!("not a date serial: '{s}'")))?,
        other => return Err(DeskError::Cell(format!("not a date: '{other:?}'"))),
    };

    super::serial_to_date(serial)
        .ok_or_else(|| DeskError::Cell(format!("date serial out of range: {serial}")))
}

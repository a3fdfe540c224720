use chrono::NaiveDate;

//==============================================================================
// Records
//==============================================================================

/// A product row from the products sheet. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub unit: String,
    pub price: f64,
}

/// A customer row from the customers sheet.
///
/// `contact` is the only mutable field in the whole data model; updating it is
/// the only write path back to the workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub code: String,
    pub organization: String,
    pub address: String,
    pub contact: String,
}

/// An order row from the orders sheet. Immutable after load.
///
/// `product_code` and `customer_code` should reference loaded records, but
/// dangling references are tolerated and skipped at join time.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub code: String,
    pub product_code: String,
    pub customer_code: String,
    pub application: String,
    pub quantity: u32,
    pub date: NaiveDate,
}

//==============================================================================
// Dataset context
//==============================================================================

/// The three record collections, loaded once at startup and passed explicitly
/// into every operation.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.customers.is_empty() && self.orders.is_empty()
    }
}

//==============================================================================
// Sheet configuration
//==============================================================================

/// Names of the three workbook sheets. The reference workbook uses localized
/// names, so these are configurable from the CLI.
#[derive(Debug, Clone)]
pub struct SheetNames {
    pub products: String,
    pub customers: String,
    pub orders: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            products: "Products".to_string(),
            customers: "Customers".to_string(),
            orders: "Orders".to_string(),
        }
    }
}

//==============================================================================
// Query results
//==============================================================================

/// One output line of the customers-by-product query: a matching order joined
/// to its customer, with the computed line total.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub organization: String,
    pub quantity: u32,
    pub line_total: f64,
    pub date: NaiveDate,
}

/// The customer with the most orders in a (year, month) window.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldenClient {
    pub customer_code: String,
    pub organization: String,
    pub order_count: usize,
}

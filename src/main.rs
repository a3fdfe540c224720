use clap::{Parser, Subcommand};
use orderdesk::cli::{self, Shell};
use orderdesk::error::DeskResult;
use orderdesk::excel::WorkbookLoader;
use orderdesk::types::SheetNames;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orderdesk")]
#[command(about = "Order-management queries over an Excel workbook")]
#[command(long_about = "Orderdesk - console queries over a products/customers/orders workbook

The workbook holds three sheets joined by string codes:
  Products   - code, name, unit, price
  Customers  - code, organization, address, contact person
  Orders     - code, product code, customer code, application, quantity, date

Run without a subcommand for the interactive menu shell, or use a subcommand
for one-shot scripted queries.

EXAMPLES:
  orderdesk orders.xlsx                          # interactive shell
  orderdesk orders.xlsx product Widget           # who ordered Widget?
  orderdesk orders.xlsx golden-client -y 2024 -m 5
  orderdesk orders.xlsx set-contact Acme \"Bob Smith\"")]
#[command(version)]
struct Cli {
    /// Path to the .xlsx workbook with the three data sheets
    workbook: PathBuf,

    /// Name of the products sheet
    #[arg(long, default_value = "Products")]
    products_sheet: String,

    /// Name of the customers sheet
    #[arg(long, default_value = "Customers")]
    customers_sheet: String,

    /// Name of the orders sheet
    #[arg(long, default_value = "Orders")]
    orders_sheet: String,

    /// Dump every loaded order's raw fields before product queries
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List customers that ordered a product, with quantities and line totals
    Product {
        /// Product name (case-insensitive exact match)
        name: String,
    },

    /// Find the customer with the most orders in a (year, month) window
    GoldenClient {
        /// Calendar year
        #[arg(short, long)]
        year: i32,

        /// Month, 1 to 12
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },

    /// Change a customer's contact person and write it back to the workbook
    SetContact {
        /// Organization name (case-insensitive exact match)
        organization: String,

        /// New contact person
        contact: String,
    },
}

fn main() -> DeskResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orderdesk=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let sheets = SheetNames {
        products: args.products_sheet,
        customers: args.customers_sheet,
        orders: args.orders_sheet,
    };

    let loader = WorkbookLoader::new(&args.workbook, sheets.clone());
    let mut dataset = loader.load();

    match args.command {
        None => Shell::new(dataset, args.workbook, sheets, args.verbose).run(),
        Some(Commands::Product { name }) => {
            cli::customers_by_product(&dataset, &name, args.verbose);
            Ok(())
        }
        Some(Commands::GoldenClient { year, month }) => {
            cli::golden_client(&dataset, year, month);
            Ok(())
        }
        Some(Commands::SetContact {
            organization,
            contact,
        }) => {
            cli::update_contact(
                &mut dataset,
                &args.workbook,
                &sheets,
                &organization,
                &contact,
            );
            Ok(())
        }
    }
}

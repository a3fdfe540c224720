//! CLI command handlers and the interactive shell

pub mod commands;
pub mod shell;

pub use commands::{customers_by_product, golden_client, update_contact};
pub use shell::Shell;

//! Interactive menu shell - the numbered-menu REPL over a loaded dataset

use crate::cli::commands;
use crate::error::DeskResult;
use crate::types::{Dataset, SheetNames};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub struct Shell {
    dataset: Dataset,
    workbook_path: PathBuf,
    sheets: SheetNames,
    verbose: bool,
}

impl Shell {
    pub fn new(dataset: Dataset, workbook_path: PathBuf, sheets: SheetNames, verbose: bool) -> Self {
        Self {
            dataset,
            workbook_path,
            sheets,
            verbose,
        }
    }

    /// Run the menu loop until the user picks exit or stdin closes.
    pub fn run(&mut self) -> DeskResult<()> {
        println!(
            "{} {} products, {} customers, {} orders loaded",
            "📇 orderdesk".bold().green(),
            self.dataset.products.len(),
            self.dataset.customers.len(),
            self.dataset.orders.len()
        );
        if self.dataset.is_empty() {
            println!(
                "{}",
                "Warning: no records loaded; queries will come up empty.".yellow()
            );
        }

        loop {
            println!();
            println!("{}", "Choose a command:".bold());
            println!("1. Customers by product");
            println!("2. Update customer contact person");
            println!("3. Golden client for a period");
            println!("4. Exit");

            let Some(choice) = read_line("> ")? else {
                return Ok(()); // stdin closed
            };

            match choice.as_str() {
                "1" => self.customers_by_product()?,
                "2" => self.update_contact()?,
                "3" => self.golden_client()?,
                "4" => return Ok(()),
                _ => println!("{}", "Invalid input. Please try again.".red()),
            }
        }
    }

    fn customers_by_product(&self) -> DeskResult<()> {
        let Some(name) = read_line("Product name: ")? else {
            return Ok(());
        };
        commands::customers_by_product(&self.dataset, &name, self.verbose);
        Ok(())
    }

    fn update_contact(&mut self) -> DeskResult<()> {
        let Some(organization) = read_line("Organization name: ")? else {
            return Ok(());
        };
        let Some(contact) = read_line("New contact person: ")? else {
            return Ok(());
        };
        commands::update_contact(
            &mut self.dataset,
            &self.workbook_path,
            &self.sheets,
            &organization,
            &contact,
        );
        Ok(())
    }

    fn golden_client(&self) -> DeskResult<()> {
        let Some(year) = self.read_year()? else {
            return Ok(());
        };
        let Some(month) = self.read_month()? else {
            return Ok(());
        };
        commands::golden_client(&self.dataset, year, month);
        Ok(())
    }

    /// Re-prompt until the input parses as an integer year.
    fn read_year(&self) -> DeskResult<Option<i32>> {
        loop {
            let Some(input) = read_line("Year: ")? else {
                return Ok(None);
            };
            match input.parse::<i32>() {
                Ok(year) => return Ok(Some(year)),
                Err(_) => println!("{}", "Invalid year. Please enter a number.".red()),
            }
        }
    }

    /// Re-prompt until the input is an integer in 1..=12.
    fn read_month(&self) -> DeskResult<Option<u32>> {
        loop {
            let Some(input) = read_line("Month: ")? else {
                return Ok(None);
            };
            match input.parse::<u32>() {
                Ok(month) if (1..=12).contains(&month) => return Ok(Some(month)),
                _ => println!(
                    "{}",
                    "Invalid month. Please enter a value from 1 to 12.".red()
                ),
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` on end of input.
fn read_line(prompt: &str) -> DeskResult<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

//! Contact writeback - persist the mutated contact field to the workbook
//!
//! calamine cannot modify a workbook in place, so a writeback reads every
//! sheet's cell grid and rewrites the whole file with rust_xlsxwriter,
//! patching the contact column of matching customer rows. A full rewrite per
//! single-field update is deliberate at this data size.

use crate::error::{DeskError, DeskResult};
use crate::excel::loader::cell_string;
use crate::types::{Customer, SheetNames};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Column index of the contact-person field in the customers sheet.
const CONTACT_COL: usize = 3;
/// A customer row must carry at least code..contact to be patched.
const MIN_COLS_CUSTOMER: usize = 4;

pub struct ContactWriter {
    path: PathBuf,
    sheets: SheetNames,
}

impl ContactWriter {
    pub fn new<P: AsRef<Path>>(path: P, sheets: SheetNames) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheets,
        }
    }

    /// Rewrite the workbook, overwriting the contact cell of every customer
    /// row whose code matches a loaded customer. Rows with no matching code or
    /// too few columns are copied through untouched, as are all other sheets.
    pub fn write_contacts(&self, customers: &[Customer]) -> DeskResult<()> {
        let mut source: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| DeskError::Workbook(format!("failed to reopen workbook: {e}")))?;

        let sheet_names = source.sheet_names().to_vec();
        if !sheet_names.iter().any(|n| *n == self.sheets.customers) {
            return Err(DeskError::SheetMissing(self.sheets.customers.clone()));
        }

        let by_code: HashMap<&str, &Customer> =
            customers.iter().map(|c| (c.code.as_str(), c)).collect();

        let mut workbook = Workbook::new();

        for sheet_name in &sheet_names {
            let range = source.worksheet_range(sheet_name)?;
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet_name.as_str())?;

            let patches = if *sheet_name == self.sheets.customers {
                contact_patches(&range, &by_code)
            } else {
                HashMap::new()
            };
            debug!(sheet = %sheet_name, patched = patches.len(), "rewriting sheet");

            copy_sheet(worksheet, &range, &patches)?;
        }

        workbook.save(&self.path)?;
        Ok(())
    }
}

/// Absolute (row, col) → replacement contact value for the customers sheet.
fn contact_patches(
    range: &Range<Data>,
    by_code: &HashMap<&str, &Customer>,
) -> HashMap<(u32, u16), String> {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let mut patches = HashMap::new();

    // First row after the header
    for (i, row) in range.rows().enumerate().skip(1) {
        if row.len() < MIN_COLS_CUSTOMER
            || row[..MIN_COLS_CUSTOMER]
                .iter()
                .any(|cell| matches!(cell, Data::Empty))
        {
            continue;
        }
        let code = cell_string(&row[0]);
        if let Some(customer) = by_code.get(code.as_str()) {
            let pos = (
                start_row + i as u32,
                (start_col as usize + CONTACT_COL) as u16,
            );
            patches.insert(pos, customer.contact.clone());
        }
    }

    patches
}

fn copy_sheet(
    worksheet: &mut Worksheet,
    range: &Range<Data>,
    patches: &HashMap<(u32, u16), String>,
) -> DeskResult<()> {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    for (r, c, cell) in range.used_cells() {
        let row = start_row + r as u32;
        let col = (start_col as usize + c) as u16;

        if let Some(patched) = patches.get(&(row, col)) {
            worksheet.write_string(row, col, patched.as_str())?;
            continue;
        }

        match cell {
            Data::String(s) => {
                worksheet.write_string(row, col, s.as_str())?;
            }
            Data::Float(f) => {
                worksheet.write_number(row, col, *f)?;
            }
            Data::Int(i) => {
                worksheet.write_number(row, col, *i as f64)?;
            }
            Data::Bool(b) => {
                worksheet.write_boolean(row, col, *b)?;
            }
            // Re-emit dates as raw serials so a reload round-trips
            Data::DateTime(dt) => {
                worksheet.write_number(row, col, dt.as_f64())?;
            }
            Data::DateTimeIso(s) | Data::DurationIso(s) => {
                worksheet.write_string(row, col, s.as_str())?;
            }
            Data::Error(_) | Data::Empty => {}
        }
    }

    Ok(())
}

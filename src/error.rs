use thiserror::Error;

pub type DeskResult<T> = Result<T, DeskError>;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Sheet not found: {0}")]
    SheetMissing(String),

    #[error("Cell parse error: {0}")]
    Cell(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Customer record missing for code: {0}")]
    CustomerMissing(String),
}

impl From<calamine::XlsxError> for DeskError {
    fn from(e: calamine::XlsxError) -> Self {
        DeskError::Workbook(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for DeskError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        DeskError::Write(e.to_string())
    }
}

// Flat-file persistence for the normalized vacancy list.
// One worker per format; json and csv are symmetric, xlsx is write-only.

pub mod csv;
pub mod json;
pub mod xlsx;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::AppError;
use crate::models::vacancy::Vacancy;

pub use self::csv::CsvStore;
pub use self::json::JsonStore;
pub use self::xlsx::XlsxStore;

/// Serialize the whole record list to a file.
pub trait VacancyWriter {
    fn write(&self, records: &[Vacancy]) -> Result<(), AppError>;
}

/// Inverse of `VacancyWriter` for formats that support reading back.
pub trait VacancyReader {
    fn read(&self) -> Result<Vec<Vacancy>, AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(AppError::BadRequest(format!(
                "Unknown export format: {other}"
            ))),
        }
    }
}

/// Conventional export location inside the data directory.
pub fn default_path(dir: &Path, format: ExportFormat) -> PathBuf {
    dir.join(format!("vacancies.{}", format.extension()))
}

pub fn write_records(
    path: &Path,
    format: ExportFormat,
    records: &[Vacancy],
) -> Result<(), AppError> {
    match format {
        ExportFormat::Json => JsonStore::new(path).write(records),
        ExportFormat::Csv => CsvStore::new(path).write(records),
        ExportFormat::Xlsx => XlsxStore::new(path).write(records),
    }
}

pub fn read_records(path: &Path, format: ExportFormat) -> Result<Vec<Vacancy>, AppError> {
    match format {
        ExportFormat::Json => JsonStore::new(path).read(),
        ExportFormat::Csv => CsvStore::new(path).read(),
        ExportFormat::Xlsx => Err(AppError::BadRequest(
            "xlsx import is not supported".to_string(),
        )),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::vacancy::Vacancy;

    pub fn sample_records() -> Vec<Vacancy> {
        vec![
            Vacancy {
                id: "93353083".to_string(),
                name: "Quality engineer".to_string(),
                salary_from: 350_000,
                salary_to: 450_000,
                currency: Some("RUR".to_string()),
                published_at: "2024-02-16T14:58:28+0300".to_string(),
                archived: false,
                url: "https://hh.ru/vacancy/93353083".to_string(),
                requirement: Some("Attention to detail".to_string()),
                responsibility: Some("Test things".to_string()),
            },
            Vacancy {
                id: "93209001".to_string(),
                name: "Flight attendant".to_string(),
                salary_from: 0,
                salary_to: 0,
                currency: None,
                published_at: "2024-02-14T12:32:06+0300".to_string(),
                archived: false,
                url: "unknown".to_string(),
                requirement: None,
                responsibility: Some("Passenger safety".to_string()),
            },
        ]
    }
}

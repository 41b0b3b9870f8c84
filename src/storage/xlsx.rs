use std::path::PathBuf;

use rust_xlsxwriter::{DocProperties, Format, Workbook};

use crate::error::AppError;
use crate::models::vacancy::Vacancy;
use crate::storage::VacancyWriter;

const HEADERS: [&str; 10] = [
    "id",
    "name",
    "salary_from",
    "salary_to",
    "currency",
    "published_at",
    "archived",
    "url",
    "requirement",
    "responsibility",
];

/// Spreadsheet worker: one sheet, bold header row, one row per record.
/// Write-only; there is no symmetric reader for this format.
pub struct XlsxStore {
    path: PathBuf,
}

impl XlsxStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VacancyWriter for XlsxStore {
    fn write(&self, records: &[Vacancy]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut workbook = Workbook::new();
        let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
        workbook.set_properties(
            &DocProperties::new()
                .set_title("Vacancy export")
                .set_comment(format!("Exported {stamp}")),
        );

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Vacancies")?;

        let header_format = Format::new().set_bold();
        for (col, name) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
        }
        worksheet.set_column_width(1, 40.0)?; // name
        worksheet.set_column_width(7, 45.0)?; // url
        worksheet.set_column_width(8, 60.0)?; // requirement
        worksheet.set_column_width(9, 60.0)?; // responsibility

        for (idx, vacancy) in records.iter().enumerate() {
            let row = idx as u32 + 1;
            worksheet.write_string(row, 0, &vacancy.id)?;
            worksheet.write_string(row, 1, &vacancy.name)?;
            worksheet.write_number(row, 2, f64::from(vacancy.salary_from))?;
            worksheet.write_number(row, 3, f64::from(vacancy.salary_to))?;
            worksheet.write_string(row, 4, vacancy.currency.as_deref().unwrap_or(""))?;
            worksheet.write_string(row, 5, &vacancy.published_at)?;
            worksheet.write_boolean(row, 6, vacancy.archived)?;
            worksheet.write_string(row, 7, &vacancy.url)?;
            worksheet.write_string(row, 8, vacancy.requirement.as_deref().unwrap_or(""))?;
            worksheet.write_string(row, 9, vacancy.responsibility.as_deref().unwrap_or(""))?;
        }

        worksheet.set_freeze_panes(1, 0)?;
        workbook.save(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::sample_records;

    #[test]
    fn write_produces_a_workbook_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacancies.xlsx");
        XlsxStore::new(&path).write(&sample_records()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_list_still_writes_header_only_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        XlsxStore::new(&path).write(&[]).unwrap();
        assert!(path.exists());
    }
}

use std::path::PathBuf;

use crate::error::AppError;
use crate::models::vacancy::Vacancy;
use crate::storage::{VacancyReader, VacancyWriter};

/// Tabular-delimited worker: header row from the record fields, one row
/// per record.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VacancyWriter for CsvStore {
    fn write(&self, records: &[Vacancy]) -> Result<(), AppError> {
        if records.is_empty() {
            return Err(AppError::BadRequest(
                "Nothing to export: csv needs at least one record to derive a header".to_string(),
            ));
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl VacancyReader for CsvStore {
    fn read(&self) -> Result<Vec<Vacancy>, AppError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for result in reader.deserialize() {
            records.push(result?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::sample_records;

    #[test]
    fn csv_round_trip_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("vacancies.csv"));

        let records = sample_records();
        store.write(&records).unwrap();

        // Null currency/snippet fields survive as empty cells and come
        // back as None.
        assert_eq!(store.read().unwrap(), records);
    }

    #[test]
    fn writing_empty_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("vacancies.csv"));

        let err = store.write(&[]).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(!dir.path().join("vacancies.csv").exists());
    }

    #[test]
    fn header_row_lists_the_ten_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacancies.csv");
        CsvStore::new(&path).write(&sample_records()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "id,name,salary_from,salary_to,currency,published_at,archived,url,requirement,responsibility"
        );
    }
}

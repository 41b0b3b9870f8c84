use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::vacancy::Vacancy;
use crate::storage::{VacancyReader, VacancyWriter};

/// Structured-document worker: the whole list as one JSON document.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VacancyWriter for JsonStore {
    fn write(&self, records: &[Vacancy]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer(BufWriter::new(file), records)
            .map_err(|e| AppError::Export(e.to_string()))
    }
}

impl VacancyReader for JsonStore {
    fn read(&self) -> Result<Vec<Vacancy>, AppError> {
        let file = File::open(&self.path)?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| AppError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::sample_records;

    #[test]
    fn json_round_trip_preserves_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("vacancies.json"));

        let records = sample_records();
        store.write(&records).unwrap();
        assert_eq!(store.read().unwrap(), records);
    }

    #[test]
    fn empty_list_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("vacancies.json"));

        store.write(&[]).unwrap();
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("absent.json"));
        assert!(matches!(store.read().unwrap_err(), AppError::Io(_)));
    }
}

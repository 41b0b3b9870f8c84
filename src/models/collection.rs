use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::error::AppError;
use crate::models::raw::RawVacancy;
use crate::models::vacancy::{Vacancy, normalize};

/// Handle threaded through the service layer. None of the collection
/// operations interleave safely, so every mutating call takes this one
/// lock for the whole operation.
pub type SharedCollection = Arc<Mutex<VacancyCollection>>;

/// Acquire the collection lock, surfacing poisoning as an internal error
/// instead of panicking in a handler.
pub fn lock(
    collection: &SharedCollection,
) -> Result<std::sync::MutexGuard<'_, VacancyCollection>, AppError> {
    collection
        .lock()
        .map_err(|_| AppError::Internal("vacancy collection lock poisoned".to_string()))
}

/// Ordered, mutable collection of normalized vacancies. Insertion order is
/// significant for display; sort and filter can optionally replace the
/// membership with their result.
#[derive(Debug, Default)]
pub struct VacancyCollection {
    vacancies: Vec<Vacancy>,
}

/// Accounting for one bulk load pass.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BulkLoadReport {
    pub found: usize,
    pub added: usize,
    pub skipped: usize,
}

/// Sort keys accepted by `sort_descending`. Parsed from the string the
/// route/CLI layer receives; anything unrecognized is an error before the
/// sort runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    SalaryFrom,
    SalaryTo,
    PublishedAt,
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "salary_from" => Ok(SortKey::SalaryFrom),
            "salary_to" => Ok(SortKey::SalaryTo),
            "published_at" => Ok(SortKey::PublishedAt),
            other => Err(AppError::InvalidSortKey(other.to_string())),
        }
    }
}

impl VacancyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedCollection {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn len(&self) -> usize {
        self.vacancies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vacancies.is_empty()
    }

    /// Deliberate reset to the empty sequence.
    pub fn reset(&mut self) {
        self.vacancies.clear();
    }

    /// Insert one record at the end. No uniqueness check: duplicate ids
    /// are structurally allowed, callers are expected to avoid them.
    pub fn append(&mut self, vacancy: Vacancy) {
        self.vacancies.push(vacancy);
    }

    /// Normalize and append a batch of raw records, preserving input
    /// order. Additive across repeated fetches: prior membership is kept.
    /// Records failing normalization are skipped and logged, never fatal
    /// to the batch.
    pub fn bulk_load(&mut self, raw_records: Vec<RawVacancy>) -> BulkLoadReport {
        let found = raw_records.len();
        let mut added = 0;
        let mut skipped = 0;

        for raw in raw_records {
            match normalize(raw) {
                Ok(vacancy) => {
                    self.vacancies.push(vacancy);
                    added += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping vacancy that failed normalization: {e}");
                    skipped += 1;
                }
            }
        }

        BulkLoadReport {
            found,
            added,
            skipped,
        }
    }

    /// Stable descending sort on the given key. Returns the first `top_n`
    /// entries of the sorted sequence (all of it when unset or oversized).
    /// With `persist` the full sorted sequence, not the truncated view,
    /// replaces the membership. Ties keep their relative input order.
    pub fn sort_descending(
        &mut self,
        key: SortKey,
        top_n: Option<usize>,
        persist: bool,
    ) -> Vec<Vacancy> {
        let mut sorted = self.vacancies.clone();
        match key {
            SortKey::SalaryFrom => sorted.sort_by(|a, b| b.salary_from.cmp(&a.salary_from)),
            SortKey::SalaryTo => sorted.sort_by(|a, b| b.salary_to.cmp(&a.salary_to)),
            SortKey::PublishedAt => sorted.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
        }

        let view = truncate(&sorted, top_n);
        if persist {
            self.vacancies = sorted;
        }
        view
    }

    /// Keep records whose name contains at least one of `words`,
    /// case-insensitively. An empty word list yields an empty result set,
    /// not a no-op. With `persist` the filtered sequence replaces the
    /// membership, even when it is empty.
    pub fn filter_by_keywords(&mut self, words: &[String], persist: bool) -> Vec<Vacancy> {
        let filtered: Vec<Vacancy> = if words.is_empty() {
            tracing::warn!("No filter keywords supplied, result set is empty");
            Vec::new()
        } else {
            let needles: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
            self.vacancies
                .iter()
                .filter(|v| {
                    let name = v.name.to_lowercase();
                    needles.iter().any(|w| name.contains(w.as_str()))
                })
                .cloned()
                .collect()
        };

        if persist {
            self.vacancies = filtered.clone();
        }
        filtered
    }

    /// Keep records whose salary bounds EXACTLY equal the parsed range
    /// bounds. This matches boundary equality, not containment, mirroring
    /// the upstream behavior this service replaces. A malformed range
    /// spec is an error and leaves the collection unchanged.
    pub fn filter_by_salary_range(
        &mut self,
        range_spec: &str,
        persist: bool,
    ) -> Result<Vec<Vacancy>, AppError> {
        let (from, to) = parse_range(range_spec)?;

        let filtered: Vec<Vacancy> = self
            .vacancies
            .iter()
            .filter(|v| v.salary_from == from && v.salary_to == to)
            .cloned()
            .collect();

        if persist {
            self.vacancies = filtered.clone();
        }
        Ok(filtered)
    }

    /// Remove the first record with the given id. Returns whether a
    /// record was removed; a missing id is a no-op, not an error.
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        match self.vacancies.iter().position(|v| v.id == id) {
            Some(idx) => {
                self.vacancies.remove(idx);
                true
            }
            None => false,
        }
    }

    /// First record with the given id, if any.
    pub fn get_by_id(&self, id: &str) -> Option<&Vacancy> {
        self.vacancies.iter().find(|v| v.id == id)
    }

    /// Up to `top_n` records in current order.
    pub fn list(&self, top_n: Option<usize>) -> Vec<Vacancy> {
        truncate(&self.vacancies, top_n)
    }

    /// Snapshot of the full membership, for export.
    pub fn snapshot(&self) -> Vec<Vacancy> {
        self.vacancies.clone()
    }
}

fn truncate(records: &[Vacancy], top_n: Option<usize>) -> Vec<Vacancy> {
    match top_n {
        Some(n) => records.iter().take(n).cloned().collect(),
        None => records.to_vec(),
    }
}

/// Parse `"100000 - 150000"` (whitespace optional) into bounds.
fn parse_range(spec: &str) -> Result<(u32, u32), AppError> {
    let (left, right) = spec
        .split_once('-')
        .ok_or_else(|| AppError::InvalidRange(spec.to_string()))?;
    let from = left
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidRange(spec.to_string()))?;
    let to = right
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidRange(spec.to_string()))?;
    Ok((from, to))
}
